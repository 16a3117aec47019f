pub use outline::{bounding_box, cell_ring};
pub use path_data::PathData;

mod outline;
mod path_data;

use crate::error::Result;
use crate::projection::HexProjection;
use crate::topology::{CellId, Topology};

/// SVG path data for one cell's hexagon, projected to pixel space
pub fn cell_path(topology: &Topology, projection: &HexProjection, cell: CellId) -> Result<String> {
    let ring = cell_ring(topology, cell)?;
    let mut path_data = PathData::new();
    let mut stream = projection.stream(&mut path_data);
    stream.polygon_start();
    stream.line_start();
    // the ring is closed, Z stands in for the repeated final point
    for &point in ring.iter().take(ring.len().saturating_sub(1)) {
        stream.point(point);
    }
    stream.line_end();
    stream.polygon_end();
    Ok(path_data.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::GridSize;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cell_path_shape() {
        let topology = Topology::build(
            GridSize { rows: 4, cols: 4 },
            &mut StdRng::seed_from_u64(3),
        );
        let projection = HexProjection::from(20.);
        // an interior cell: one M, five Ls, closed with Z
        let path = cell_path(&topology, &projection, 5).unwrap();
        assert!(path.starts_with('M'), "{}", path);
        assert!(path.ends_with('Z'), "{}", path);
        assert_eq!(path.matches('M').count(), 1, "{}", path);
        assert_eq!(path.matches('L').count(), 5, "{}", path);
    }
}
