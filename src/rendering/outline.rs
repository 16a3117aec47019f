use lyon_geom::Box2D;

use crate::basic::{LatticePoint, Point};
use crate::error::{ErrorConversion, Result};
use crate::topology::{CellId, Topology};

/// Resolves a cell's six arc references into a closed lattice ring.
///
/// Arcs are joined by dropping the trailing joint point before appending each
/// subsequent arc, so the ring's final point repeats its first.
pub fn cell_ring(topology: &Topology, cell: CellId) -> Result<Vec<LatticePoint>> {
    let mut ring = Vec::with_capacity(7);
    for &arc_ref in &topology.cell(cell).arcs {
        let arc = topology.arc(arc_ref).with_trace_step("rendering::cell_ring")?;
        ring.pop();
        ring.extend(arc.points(arc_ref.is_reversed()));
    }
    Ok(ring)
}

/// Smallest box enclosing the given pixel points
pub fn bounding_box(points: impl IntoIterator<Item = Point>) -> Box2D<f32> {
    Box2D::from_points(points.into_iter().map(lyon_geom::Point::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{ArcRef, GridSize};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(size: GridSize) -> Topology {
        Topology::build(size, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_ring_is_closed_hexagon() {
        let size = GridSize { rows: 4, cols: 4 };
        let topology = build(size);
        for cell in 0..topology.cells().len() {
            // skip the top padding row, its final borrow predates the arena
            if topology.cell(cell).j < 1 {
                continue;
            }
            let ring = cell_ring(&topology, cell).unwrap();
            assert_eq!(ring.len(), 7, "cell {}", cell);
            assert_eq!(ring.first(), ring.last(), "cell {}", cell);
            let mut distinct = ring.clone();
            distinct.pop();
            distinct.sort_unstable_by_key(|p| (p.x, p.y));
            distinct.dedup();
            assert_eq!(distinct.len(), 6, "cell {}", cell);
        }
    }

    #[test]
    fn test_dangling_arc_ref_is_reported() {
        let size = GridSize { rows: 2, cols: 2 };
        let mut topology = build(size);
        let arcs = topology.arcs().len();
        topology.cell_mut(0).arcs[0] = ArcRef::forward(arcs as i32);
        let err = cell_ring(&topology, 0).unwrap_err();
        assert!(format!("{:?}", err).contains("rendering::cell_ring"));
    }

    #[test]
    fn test_bounding_box() {
        let points = [
            Point { x: -1., y: 4. },
            Point { x: 3., y: 0. },
            Point { x: 2., y: 7. },
        ];
        let bbox = bounding_box(points);
        assert_eq!((bbox.min.x, bbox.min.y), (-1., 0.));
        assert_eq!((bbox.max.x, bbox.max.y), (3., 7.));
    }
}
