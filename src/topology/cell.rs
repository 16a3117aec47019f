use crate::topology::ArcRef;

/// Index of a cell in its topology's cell list
pub type CellId = usize;

/// One hexagon of the tiling
#[derive(Clone, Debug)]
pub struct Cell {
    /// Column index
    pub i: i32,
    /// Row index
    pub j: i32,
    /// Set at build time with a left-to-right density bias, mutated by
    /// painting
    pub fill: bool,
    /// Boundary of six arc references: three arcs owned by this cell followed
    /// by three reversed borrows from neighboring cells
    pub arcs: [ArcRef; 6],
}
