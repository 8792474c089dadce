//! Dense multi-resolution volumes derived from sparse voxel shapes:
//! per-shape material mip pyramids and the scene-wide occupancy pyramid.
#![forbid(unsafe_code)]

pub mod mip;
pub mod occupancy;

pub use mip::MipVolume;
pub use occupancy::OccupancyPyramid;

/// Rounds up to the next multiple of 4 so two integer halvings are exact.
#[inline]
pub(crate) fn ceil_mult4(n: usize) -> usize {
    (n + 3) & !3
}
