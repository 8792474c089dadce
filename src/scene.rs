//! TOML scene descriptions for the build harness: procedural shapes and
//! their placements inside a shared occupancy volume.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use karst_voxel::{Voxel, VoxelSet};

#[derive(Debug, Deserialize)]
pub struct SceneConfig {
    pub volume: VolumeConfig,
    #[serde(default)]
    pub shapes: Vec<ShapeConfig>,
}

/// Extent of the shared occupancy pyramid, in coarse cells.
#[derive(Debug, Deserialize)]
pub struct VolumeConfig {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

#[derive(Debug, Deserialize)]
pub struct ShapeConfig {
    pub name: String,
    pub dims: [usize; 3],
    #[serde(default)]
    pub fill: Fill,
    #[serde(default = "default_material")]
    pub material: u8,
    #[serde(default)]
    pub placements: Vec<PlacementConfig>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    /// Every cell of the box is solid.
    #[default]
    Solid,
    /// Only the one-cell-thick boundary of the box is solid.
    Shell,
    /// A one-cell floor slab at a third of the box height.
    Deck,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct PlacementConfig {
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default)]
    pub yaw_deg: f32,
}

fn default_material() -> u8 {
    1
}

impl SceneConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

impl ShapeConfig {
    /// Materializes the configured fill pattern as a sparse shape.
    pub fn build(&self) -> Result<VoxelSet, Box<dyn Error>> {
        let [sx, sy, sz] = self.dims;
        let mut voxels = Vec::new();
        for z in 0..sz {
            for y in 0..sy {
                for x in 0..sx {
                    let keep = match self.fill {
                        Fill::Solid => true,
                        Fill::Shell => {
                            x == 0
                                || y == 0
                                || z == 0
                                || x == sx - 1
                                || y == sy - 1
                                || z == sz - 1
                        }
                        Fill::Deck => y == sy / 3,
                    };
                    if keep {
                        voxels.push(Voxel::new(x as u8, y as u8, z as u8, self.material));
                    }
                }
            }
        }
        Ok(VoxelSet::new(sx, sy, sz, voxels)?)
    }
}

/// Fallback scene used when no TOML description is given: a solid slab,
/// a hollow room, and a deck placed a few times around the origin.
pub fn default_scene() -> SceneConfig {
    let place = |x: f32, z: f32, yaw: f32| PlacementConfig {
        position: [x, 0.0, z],
        yaw_deg: yaw,
    };
    SceneConfig {
        volume: VolumeConfig {
            width: 32,
            height: 16,
            depth: 32,
        },
        shapes: vec![
            ShapeConfig {
                name: "slab".into(),
                dims: [12, 2, 12],
                fill: Fill::Solid,
                material: 1,
                placements: vec![place(4.0, 4.0, 0.0)],
            },
            ShapeConfig {
                name: "room".into(),
                dims: [8, 6, 8],
                fill: Fill::Shell,
                material: 2,
                placements: vec![place(6.0, 6.0, 0.0), place(24.0, 10.0, 90.0)],
            },
            ShapeConfig {
                name: "deck".into(),
                dims: [10, 6, 10],
                fill: Fill::Deck,
                material: 3,
                placements: vec![place(30.0, 30.0, 180.0)],
            },
        ],
    }
}
