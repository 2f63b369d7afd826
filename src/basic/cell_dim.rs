/// Packing constants for an upright hex tiling with the given side
/// length.
#[derive(Copy, Clone, Debug)]
pub struct CellDim {
    pub side: f32,
    // horizontal center-to-center step between columns
    pub width: f32,
    // vertical center-to-center step between rows
    pub height: f32,
}

impl From<f32> for CellDim {
    fn from(side: f32) -> Self {
        Self {
            side,
            width: 2. * side,
            height: 3_f32.sqrt() * side,
        }
    }
}
