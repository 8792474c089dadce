use karst_geom::{Mat4, Vec3};
use karst_voxel::VoxelSet;

use crate::ceil_mult4;

/// Scene-wide bit-packed occupancy pyramid shared by every placed shape.
///
/// Level 0 is sized in coarse cells; one byte per coarse cell flags the
/// solidity of its 2x2x2 sub-voxels, one bit each. Shapes accumulate
/// into level 0 via [`OccupancyPyramid::ingest`]; [`OccupancyPyramid::finalize`]
/// derives levels 1 and 2 by OR reduction and must run after the last
/// ingest before the buffers are read.
///
/// Single-writer: `ingest` performs read-modify-write bit sets, so
/// concurrent aggregation requires external serialization.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyPyramid {
    width: usize,
    height: usize,
    depth: usize,
    levels: [Vec<u8>; 3],
    finalized: bool,
}

impl OccupancyPyramid {
    /// Allocates a zeroed pyramid. Coarse-cell dimensions round up to
    /// the next multiple of 4 so both halvings stay exact.
    pub fn new(width_cells: usize, height_cells: usize, depth_cells: usize) -> Self {
        let width = ceil_mult4(width_cells);
        let height = ceil_mult4(height_cells);
        let depth = ceil_mult4(depth_cells);
        Self {
            width,
            height,
            depth,
            levels: [
                vec![0u8; width * height * depth],
                vec![0u8; (width / 2) * (height / 2) * (depth / 2)],
                vec![0u8; (width / 4) * (height / 4) * (depth / 4)],
            ],
            finalized: false,
        }
    }

    /// Accumulates one placed shape.
    ///
    /// Each solid voxel's cell center, biased one unit up so resting
    /// shapes register above ground, is transformed into the shared
    /// grid, floored to sub-voxel coordinates, and ORed into its coarse
    /// cell's bit. Bits are never cleared, so ingestion is commutative
    /// and idempotent across shapes. Positions outside the configured
    /// bounds are dropped; scenes routinely place decoration beyond the
    /// shadow-relevant region.
    pub fn ingest(&mut self, set: &VoxelSet, to_world: &Mat4) {
        let max_x = (2 * self.width) as i32;
        let max_y = (2 * self.height) as i32;
        let max_z = (2 * self.depth) as i32;
        let mut clipped = 0usize;
        for v in set.solids() {
            let center = Vec3::new(
                v.x as f32 + 0.5,
                v.y as f32 + 0.5 + 1.0,
                v.z as f32 + 0.5,
            );
            let p = to_world.transform_point(center);
            let x = p.x.floor() as i32;
            let y = p.y.floor() as i32;
            let z = p.z.floor() as i32;
            if x < 0 || x >= max_x || y < 0 || y >= max_y || z < 0 || z >= max_z {
                clipped += 1;
                continue;
            }
            let (x, y, z) = (x as usize, y as usize, z as usize);
            // Up to 8 sub-voxels share one coarse byte.
            let index = (x / 2) + self.width * ((y / 2) + self.height * (z / 2));
            self.levels[0][index] |= 1 << ((x % 2) + 2 * (y % 2) + 4 * (z % 2));
        }
        if clipped > 0 {
            log::trace!("occupancy ingest clipped {clipped} voxels outside bounds");
        }
        self.finalized = false;
    }

    /// Rebuilds levels 1 and 2 by ORing each 2x2x2 block of the level
    /// below. Any solid child makes the parent solid. Callable
    /// repeatedly; a call with no intervening ingest changes nothing.
    pub fn finalize(&mut self) {
        let l1 = or_reduce(&self.levels[0], self.width, self.height, self.depth);
        let l2 = or_reduce(&l1, self.width / 2, self.height / 2, self.depth / 2);
        self.levels[1] = l1;
        self.levels[2] = l2;
        self.finalized = true;
    }

    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Byte buffer for one mip level, `x` fastest. Levels 1 and 2 are
    /// only meaningful after [`OccupancyPyramid::finalize`].
    #[inline]
    pub fn level(&self, level: usize) -> &[u8] {
        &self.levels[level]
    }

    #[inline]
    pub fn level_dims(&self, level: usize) -> (usize, usize, usize) {
        (
            self.width >> level,
            self.height >> level,
            self.depth >> level,
        )
    }
}

fn or_reduce(src: &[u8], w: usize, h: usize, d: usize) -> Vec<u8> {
    let (w2, h2, d2) = (w / 2, h / 2, d / 2);
    let mut dst = vec![0u8; w2 * h2 * d2];
    for x in 0..w {
        for y in 0..h {
            for z in 0..d {
                let parent = (x / 2) + w2 * ((y / 2) + h2 * (z / 2));
                dst[parent] |= src[x + w * (y + h * z)];
            }
        }
    }
    dst
}
