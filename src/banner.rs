use lyon_geom::Box2D;
use rand::Rng;

use crate::error::Result;
use crate::paint::{Mousing, PaintControl};
use crate::projection::HexProjection;
use crate::rendering;
use crate::topology::{CellId, GridSize, Topology};

/// Cell radius used by the blog banner
pub const RADIUS: f32 = 20.;
/// Fixed banner height; the width comes from the embedding page
pub const HEIGHT: f32 = 200.;

/// Style class of a rendered cell. The stylesheet's naming is inverted: a
/// set fill flag draws with the `nofill` class.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Class {
    Fill,
    NoFill,
}

impl Class {
    pub fn of(fill: bool) -> Self {
        if fill {
            Class::NoFill
        } else {
            Class::Fill
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Class::Fill => "fill",
            Class::NoFill => "nofill",
        }
    }
}

/// One drawable hexagon: SVG path data plus its style class
#[derive(Clone, Debug)]
pub struct Shape {
    pub cell: CellId,
    pub path: String,
    pub class: Class,
}

/// An interactive hexagon banner covering one embedding surface
pub struct Banner {
    topology: Topology,
    projection: HexProjection,
    paint: PaintControl,
}

impl Banner {
    pub fn new(radius: f32, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        Self {
            topology: Topology::build(GridSize::for_viewport(radius, width, height), rng),
            projection: HexProjection::from(radius),
            paint: PaintControl::new(),
        }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn mousing(&self) -> Mousing {
        self.paint.mousing()
    }

    /// Drawable shapes for every cell, in cell order
    pub fn shapes(&self) -> Result<Vec<Shape>> {
        (0..self.topology.cells().len())
            .map(|cell| {
                Ok(Shape {
                    cell,
                    path: rendering::cell_path(&self.topology, &self.projection, cell)?,
                    class: self.class_of(cell),
                })
            })
            .collect()
    }

    /// Current style class of one cell, for restyling after interaction
    pub fn class_of(&self, cell: CellId) -> Class {
        Class::of(self.topology.cell(cell).fill)
    }

    /// Pixel-space bounds of the whole tiling, for sizing the drawing surface
    pub fn view_box(&self) -> Result<Box2D<f32>> {
        let mut points = vec![];
        for cell in 0..self.topology.cells().len() {
            let ring = rendering::cell_ring(&self.topology, cell)?;
            points.extend(ring.into_iter().map(|p| self.projection.project(p)));
        }
        Ok(rendering::bounding_box(points))
    }

    pub fn mouse_down(&mut self, cell: CellId) -> Option<CellId> {
        self.paint.mouse_down(&mut self.topology, cell)
    }

    pub fn mouse_move(&mut self, cell: CellId) -> Option<CellId> {
        self.paint.mouse_move(&mut self.topology, cell)
    }

    pub fn mouse_up(&mut self, over: Option<CellId>) -> Option<CellId> {
        self.paint.mouse_up(&mut self.topology, over)
    }
}
