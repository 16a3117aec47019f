use itertools::iproduct;
use num_integer::Integer;
use rand::Rng;

use crate::basic::{CellDim, LatticePoint};
use crate::error::{Error, Result};
use crate::topology::{Arc, ArcRef, Cell, CellId};

/// Cell-grid dimensions: `rows` hexagon rows of `cols` hexagons each
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GridSize {
    pub rows: i32,
    pub cols: i32,
}

impl GridSize {
    /// Grid covering a `width` x `height` viewport, including one extra row
    /// and column of padding on each side so the tiling overhangs the
    /// viewport edges.
    ///
    /// Malformed dimensions (negative, NaN) degrade to an empty grid.
    pub fn for_viewport(radius: f32, width: f32, height: f32) -> Self {
        let CellDim { radius, dx, dy } = CellDim::from(radius);
        Self {
            rows: (((height + radius) / dy).ceil() as i32 + 1).max(0),
            cols: ((width / dx).ceil() as i32 + 1).max(0),
        }
    }

    pub fn cell_count(self) -> usize {
        self.rows.max(0) as usize * self.cols.max(0) as usize
    }
}

/// The banner tiling: a flat arena of shared arcs plus one entry per cell.
/// Immutable after construction except for the cells' fill flags.
#[derive(Clone, Debug)]
pub struct Topology {
    arcs: Vec<Arc>,
    cells: Vec<Cell>,
}

impl Topology {
    /// Builds the offset-row hexagon tiling.
    ///
    /// Every lattice position emits three arcs; interior edges are emitted
    /// exactly once and borrowed (reversed) by the other bordering cell. The
    /// neighbor offsets `(n+2∓parity)*3` below must match the arc emission
    /// order exactly or cells stop sharing edges with their true neighbors.
    pub fn build(size: GridSize, rng: &mut impl Rng) -> Self {
        let GridSize { rows: m, cols: n } = size;

        let mut arcs = Vec::with_capacity(((m + 2) * (n + 2)).max(0) as usize * 3);
        for (j, i) in iproduct!(-1..=m, -1..=n) {
            let y = 2 * j;
            let x = 2 * i + (j & 1);
            arcs.push(Arc::new(LatticePoint::new(x, y - 1), LatticePoint::new(1, 1)));
            arcs.push(Arc::new(LatticePoint::new(x + 1, y), LatticePoint::new(0, 1)));
            arcs.push(Arc::new(LatticePoint::new(x + 1, y + 1), LatticePoint::new(-1, 1)));
        }

        let mut cells = Vec::with_capacity(size.cell_count());
        for (j, i) in iproduct!(0..m, 0..n) {
            let parity = if j.is_odd() { 1 } else { 0 };
            let q = 3 * (1 + j * (n + 2) + i);
            cells.push(Cell {
                i,
                j,
                // left-to-right increasing density, saturating at always-fill
                // from i = n/4 onwards
                fill: rng.gen::<f64>() < i as f64 / n as f64 * 4.,
                arcs: [
                    ArcRef::forward(q),
                    ArcRef::forward(q + 1),
                    ArcRef::forward(q + 2),
                    ArcRef::reversed(q + (n + 2 - parity) * 3),
                    ArcRef::reversed(q - 2),
                    ArcRef::reversed(q - (n + 2 + parity) * 3 + 2),
                ],
            });
        }

        Self { arcs, cells }
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id]
    }

    pub fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id]
    }

    /// Resolves an arc reference against the arena
    pub fn arc(&self, arc_ref: ArcRef) -> Result<Arc> {
        usize::try_from(arc_ref.index())
            .ok()
            .and_then(|index| self.arcs.get(index))
            .copied()
            .ok_or_else(|| Error::invalid_arc_ref(arc_ref.raw(), self.arcs.len()))
    }
}
