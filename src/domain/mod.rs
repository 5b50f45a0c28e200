mod cell;
mod generation;
mod grid;
mod neighbors;
mod patterns;
mod sparse;

pub use cell::Cell;
pub use generation::{Generation, Lifecycle, advance};
pub use grid::Grid;
pub use neighbors::{Liveness, NEIGHBOR_OFFSETS, Pos, cell_index, neighbor_count, neighbors};
pub use patterns::{Pattern, Preset, instantiate, presets};
pub use sparse::SparseGeneration;
