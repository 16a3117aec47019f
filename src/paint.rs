use crate::topology::{CellId, Topology};

/// Interaction state of one banner: the polarity the held pointer paints
/// with, if any.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mousing {
    Idle,
    Painting { fill: bool },
}

/// Pointer-driven fill painting. Each banner owns one of these; two banners
/// on the same page paint independently.
#[derive(Debug, Default)]
pub struct PaintControl {
    mousing: Mousing,
}

impl Default for Mousing {
    fn default() -> Self {
        Mousing::Idle
    }
}

impl PaintControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mousing(&self) -> Mousing {
        self.mousing
    }

    /// Pointer pressed over a cell: start painting with the opposite of that
    /// cell's fill, then treat the press itself as a first move.
    /// Returns the cell to restyle.
    pub fn mouse_down(&mut self, topology: &mut Topology, cell: CellId) -> Option<CellId> {
        self.mousing = Mousing::Painting { fill: !topology.cell(cell).fill };
        self.mouse_move(topology, cell)
    }

    /// Pointer moved over a cell: while painting, stamp the polarity onto the
    /// cell and report it for restyling
    pub fn mouse_move(&mut self, topology: &mut Topology, cell: CellId) -> Option<CellId> {
        match self.mousing {
            Mousing::Painting { fill } => {
                topology.cell_mut(cell).fill = fill;
                Some(cell)
            }
            Mousing::Idle => None,
        }
    }

    /// Pointer released, over a cell or not: apply a final move, then stop
    /// painting
    pub fn mouse_up(&mut self, topology: &mut Topology, over: Option<CellId>) -> Option<CellId> {
        let restyle = over.and_then(|cell| self.mouse_move(topology, cell));
        self.mousing = Mousing::Idle;
        restyle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::GridSize;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn topology() -> Topology {
        Topology::build(GridSize { rows: 3, cols: 8 }, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_click_toggles() {
        let mut topology = topology();
        let mut control = PaintControl::new();
        let cell = 0; // column 0 never fills at build time
        assert!(!topology.cell(cell).fill);

        control.mouse_down(&mut topology, cell);
        control.mouse_up(&mut topology, Some(cell));
        assert!(topology.cell(cell).fill);
        assert_eq!(control.mousing(), Mousing::Idle);

        control.mouse_down(&mut topology, cell);
        control.mouse_up(&mut topology, Some(cell));
        assert!(!topology.cell(cell).fill);
    }

    #[test]
    fn test_drag_paints_with_start_polarity() {
        let mut topology = topology();
        let mut control = PaintControl::new();
        let start = 7; // column 7 always fills at build time
        let dragged = [0, 8, 16]; // column 0 cells, never filled
        assert!(topology.cell(start).fill);

        control.mouse_down(&mut topology, start);
        assert_eq!(control.mousing(), Mousing::Painting { fill: false });
        assert!(!topology.cell(start).fill);

        for cell in dragged {
            assert_eq!(control.mouse_move(&mut topology, cell), Some(cell));
            assert!(!topology.cell(cell).fill);
        }

        control.mouse_up(&mut topology, None);

        // released, further moves change nothing
        let untouched = topology.cell(1).fill;
        assert_eq!(control.mouse_move(&mut topology, 1), None);
        assert_eq!(topology.cell(1).fill, untouched);
    }

    #[test]
    fn test_moves_are_inert_while_idle() {
        let mut topology = topology();
        let mut control = PaintControl::new();
        let before: Vec<_> = topology.cells().iter().map(|c| c.fill).collect();
        assert_eq!(control.mouse_move(&mut topology, 3), None);
        assert_eq!(control.mouse_up(&mut topology, Some(3)), None);
        let after: Vec<_> = topology.cells().iter().map(|c| c.fill).collect();
        assert_eq!(before, after);
    }
}
