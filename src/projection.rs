use crate::basic::{CellDim, LatticePoint, Point};

/// Receiver for path geometry. Everything except `point` defaults to a no-op.
pub trait PathStream {
    fn point(&mut self, point: Point);
    fn line_start(&mut self) {}
    fn line_end(&mut self) {}
    fn polygon_start(&mut self) {}
    fn polygon_end(&mut self) {}
}

/// Maps integer lattice coordinates to pixel space, correcting for the
/// vertical compression of the offset-row pattern.
#[derive(Copy, Clone, Debug)]
pub struct HexProjection {
    cell_dim: CellDim,
}

impl From<f32> for HexProjection {
    fn from(radius: f32) -> Self {
        Self { cell_dim: CellDim::from(radius) }
    }
}

impl HexProjection {
    pub fn project(&self, p: LatticePoint) -> Point {
        let CellDim { dx, dy, .. } = self.cell_dim;
        Point {
            x: p.x as f32 * dx / 2.,
            y: (p.y as f32 - (2 - (p.y & 1)) as f32 / 3.) * dy / 2.,
        }
    }

    pub fn stream<'a, S: PathStream>(&self, sink: &'a mut S) -> ProjectedStream<'a, S> {
        ProjectedStream { projection: *self, sink }
    }
}

/// Forwards every stream call to the sink unchanged, except `point`, which is
/// projected from lattice to pixel coordinates first.
pub struct ProjectedStream<'a, S> {
    projection: HexProjection,
    sink: &'a mut S,
}

impl<S: PathStream> ProjectedStream<'_, S> {
    pub fn point(&mut self, point: LatticePoint) {
        self.sink.point(self.projection.project(point));
    }

    pub fn line_start(&mut self) {
        self.sink.line_start();
    }

    pub fn line_end(&mut self) {
        self.sink.line_end();
    }

    pub fn polygon_start(&mut self) {
        self.sink.polygon_start();
    }

    pub fn polygon_end(&mut self) {
        self.sink.polygon_end();
    }
}
