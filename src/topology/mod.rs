pub use arc::{Arc, ArcRef};
pub use build::{GridSize, Topology};
pub use cell::{Cell, CellId};

mod arc;
mod build;
mod cell;
