//! Sparse voxel model shared by every pipeline crate.
#![forbid(unsafe_code)]

pub mod grid;
pub mod set;

pub use grid::DenseGrid;
pub use set::{EMPTY, HOLE, Voxel, VoxelError, VoxelSet};
