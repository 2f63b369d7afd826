use itertools::Itertools;
use num_integer::Integer;

use crate::basic::{CellDim, LatticeCell, Parity, Point};

/// Which cells of the square [-half_layers, half_layers] block are
/// left empty.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SkipRule {
    /// Drop every third column, with the dropped columns staggered
    /// between row parities: even rows drop col ≡ 0 (mod 3), odd rows
    /// drop col ≡ 1 (mod 3).
    SparseThirds,
}

impl SkipRule {
    pub fn skips(self, cell: LatticeCell) -> bool {
        match self {
            SkipRule::SparseThirds => {
                if cell.row.is_even() {
                    cell.col.is_multiple_of(&3)
                } else {
                    (cell.col + 2).is_multiple_of(&3)
                }
            }
        }
    }
}

/// A block of lattice cells centered on the origin together with the
/// placement transform that turns them into tile centers.
#[derive(Copy, Clone, Debug)]
pub struct Lattice {
    pub half_layers: isize,
    /// which row parity is shifted half a cell right
    pub offset_parity: Parity,
    /// horizontal spacing multiplier, 3 for the star field
    pub col_spacing: f32,
    pub skip: Option<SkipRule>,
}

impl Lattice {
    pub fn cells(&self) -> impl Iterator<Item = LatticeCell> + '_ {
        let range = -self.half_layers..=self.half_layers;
        range
            .clone()
            .cartesian_product(range)
            .map(|(row, col)| LatticeCell { col, row })
            .filter(move |&cell| !self.skip.map_or(false, |rule| rule.skips(cell)))
    }

    pub fn centers(&self, cell_dim: CellDim) -> impl Iterator<Item = Point> + '_ {
        self.cells()
            .map(move |cell| cell.to_point(cell_dim, self.offset_parity, self.col_spacing))
    }
}

#[cfg(test)]
fn sparse_lattice(half_layers: isize) -> Lattice {
    Lattice {
        half_layers,
        offset_parity: Parity::Even,
        col_spacing: 1.,
        skip: Some(SkipRule::SparseThirds),
    }
}

#[test]
fn test_full_lattice_size() {
    let lattice = Lattice {
        half_layers: 5,
        offset_parity: Parity::Odd,
        col_spacing: 1.,
        skip: None,
    };
    assert_eq!(lattice.cells().count(), 121);

    let single = Lattice { half_layers: 0, ..lattice };
    assert_eq!(single.cells().count(), 1);
    let center = single.centers(CellDim::from(20.)).next().unwrap();
    assert_eq!(center, Point::ORIGIN);
}

#[test]
fn test_sparse_thirds_even_row() {
    let lattice = sparse_lattice(5);
    let row0: Vec<isize> = lattice
        .cells()
        .filter(|cell| cell.row == 0)
        .map(|cell| cell.col)
        .collect();
    // cols -3, 0, 3 are dropped
    assert_eq!(row0, vec![-5, -4, -2, -1, 1, 2, 4, 5]);
}

#[test]
fn test_sparse_thirds_odd_row() {
    let lattice = sparse_lattice(5);
    let row1: Vec<isize> = lattice
        .cells()
        .filter(|cell| cell.row == 1)
        .map(|cell| cell.col)
        .collect();
    // cols -5, -2, 1, 4 are dropped
    assert_eq!(row1, vec![-4, -3, -1, 0, 2, 3, 5]);
}

#[test]
fn test_sparse_lattice_size() {
    // 5 even rows keep 8 of 11 cols, 6 odd rows keep 7 of 11
    assert_eq!(sparse_lattice(5).cells().count(), 5 * 8 + 6 * 7);
}
