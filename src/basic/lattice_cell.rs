use crate::basic::{CellDim, Point};
use num_integer::Integer;
use std::fmt::{Debug, Error, Formatter};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn matches(self, n: isize) -> bool {
        match self {
            Parity::Even => n.is_even(),
            Parity::Odd => n.is_odd(),
        }
    }
}

// INVARIANT: rows on the offset parity are shifted half a cell right
#[derive(Copy, Clone, Eq, PartialEq, Hash, Add)]
pub struct LatticeCell {
    pub col: isize,
    pub row: isize,
}

impl LatticeCell {
    /// Placement center of this cell in the surface's coordinate
    /// space. `col_spacing` stretches the horizontal step (the star
    /// field uses 3, everything else 1).
    pub fn to_point(self, cell_dim: CellDim, offset_parity: Parity, col_spacing: f32) -> Point {
        let shift = if offset_parity.matches(self.row) { 0.5 } else { 0. };
        Point {
            x: cell_dim.width * col_spacing * (self.col as f32 + shift),
            y: cell_dim.height * self.row as f32,
        }
    }
}

impl Debug for LatticeCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.col, self.row)
    }
}

#[test]
fn test_to_point() {
    let cell_dim = CellDim::from(20.);
    // (col, row, offset_parity, col_spacing, expected x in widths, expected y in heights)
    [
        ((0, 0), Parity::Odd, 1., 0., 0.),
        ((0, 0), Parity::Even, 1., 0.5, 0.),
        ((1, 1), Parity::Even, 1., 1., 1.),
        ((1, 1), Parity::Odd, 1., 1.5, 1.),
        ((-2, 3), Parity::Odd, 1., -1.5, 3.),
        ((2, -1), Parity::Even, 3., 6., -1.),
        ((2, -1), Parity::Odd, 3., 7.5, -1.),
    ]
    .iter()
    .for_each(|&((col, row), parity, spacing, x_widths, y_heights)| {
        let point = LatticeCell { col, row }.to_point(cell_dim, parity, spacing);
        assert!((point.x - x_widths * cell_dim.width).abs() < 1e-4);
        assert!((point.y - y_heights * cell_dim.height).abs() < 1e-4);
    });
}

#[test]
fn test_parity_of_negative_rows() {
    assert!(Parity::Even.matches(-2));
    assert!(Parity::Odd.matches(-3));
    assert!(!Parity::Even.matches(-1));
}
