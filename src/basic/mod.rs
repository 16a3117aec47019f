pub use cell_dim::CellDim;
pub use lattice::LatticePoint;
pub use point::Point;

mod cell_dim;
mod lattice;
mod point;
