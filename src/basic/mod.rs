pub use cell_dim::CellDim;
pub use lattice_cell::{LatticeCell, Parity};
pub use point::Point;

mod cell_dim;
mod lattice_cell;
mod point;
