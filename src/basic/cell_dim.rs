/// Lattice pitch of a hexagon grid with the given circumradius.
#[derive(Copy, Clone, Debug)]
pub struct CellDim {
    pub radius: f32,
    // dx is the horizontal distance between hexagon centers in a row,
    // dy the vertical distance between adjacent (offset) rows
    pub dx: f32,
    pub dy: f32,
}

impl From<f32> for CellDim {
    fn from(radius: f32) -> Self {
        use std::f32::consts::FRAC_PI_3;
        Self {
            radius,
            dx: radius * 2. * FRAC_PI_3.sin(),
            dy: radius * 1.5,
        }
    }
}
