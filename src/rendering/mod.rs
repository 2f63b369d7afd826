pub mod lattice;
pub mod shape;
pub mod splode;
