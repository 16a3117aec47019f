use std::fmt::{Debug, Error, Formatter};

// INVARIANT: odd rows sit half a cell to the right of even rows
#[derive(Eq, PartialEq, Copy, Clone, Hash, Add)]
pub struct LatticePoint {
    pub x: i32,
    pub y: i32,
}

impl LatticePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Debug for LatticePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}
