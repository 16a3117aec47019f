use crate::basic::Point;
use crate::projection::PathStream;

/// Accumulates SVG path-data text, one `M … L … Z` run per ring.
#[derive(Debug, Default)]
pub struct PathData {
    d: String,
    // whether the current line has seen its first point
    line_open: bool,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.d
    }
}

impl PathStream for PathData {
    fn point(&mut self, Point { x, y }: Point) {
        let command = if self.line_open { 'L' } else { 'M' };
        self.line_open = true;
        self.d.push_str(&format!("{}{},{}", command, x, y));
    }

    fn line_start(&mut self) {
        self.line_open = false;
    }

    fn line_end(&mut self) {
        self.d.push('Z');
    }
}
