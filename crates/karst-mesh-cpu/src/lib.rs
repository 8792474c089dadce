//! CPU meshing for sparse voxel shapes: greedy quad-merged surface
//! extraction plus the surface-voxel filter used for instanced rendering.
#![forbid(unsafe_code)]

pub mod greedy;
pub mod mesh;
pub mod surface;

pub use greedy::greedy_mesh;
pub use mesh::{MeshVertex, SurfaceMesh};
pub use surface::surface_voxels;
