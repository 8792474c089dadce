use karst_voxel::{DenseGrid, VoxelSet};

use crate::ceil_mult4;

/// Three-level dense material volume for one shape. Level 0 is the
/// shape's box rounded up to a multiple of 4 per axis; each further
/// level halves every axis. Cells hold a material index, 0 when empty.
#[derive(Clone, Debug, PartialEq)]
pub struct MipVolume {
    dims: [[usize; 3]; 3],
    levels: [Vec<u8>; 3],
}

impl MipVolume {
    /// Scatters the shape into level 0 and derives levels 1 and 2 with
    /// first-writer-wins halving.
    ///
    /// The committed downsample visit order is `x` outer, `y` middle,
    /// `z` inner: the first solid child encountered in that order
    /// becomes the parent value. Material ids have no meaningful
    /// combine operation, so the reduction picks one representative
    /// child rather than blending.
    pub fn build(set: &VoxelSet) -> Self {
        let (sx, sy, sz) = set.dims();
        let mut level0 = DenseGrid::new(ceil_mult4(sx), ceil_mult4(sy), ceil_mult4(sz));
        level0.scatter(set);

        let level1 = halve_first_writer(&level0);
        let level2 = halve_first_writer(&level1);

        log::trace!(
            "mip volume: {:?} -> {:?} -> {:?}",
            level0.dims(),
            level1.dims(),
            level2.dims()
        );

        let dims = [
            dims_of(&level0),
            dims_of(&level1),
            dims_of(&level2),
        ];
        Self {
            dims,
            levels: [
                level0.into_data(),
                level1.into_data(),
                level2.into_data(),
            ],
        }
    }

    /// Byte array for one mip level, `x` fastest.
    #[inline]
    pub fn level(&self, level: usize) -> &[u8] {
        &self.levels[level]
    }

    #[inline]
    pub fn level_dims(&self, level: usize) -> (usize, usize, usize) {
        let [w, h, d] = self.dims[level];
        (w, h, d)
    }
}

#[inline]
fn dims_of(grid: &DenseGrid) -> [usize; 3] {
    let (w, h, d) = grid.dims();
    [w, h, d]
}

/// Half-resolution reduction keeping the first nonzero child visited.
fn halve_first_writer(src: &DenseGrid) -> DenseGrid {
    let (w, h, d) = src.dims();
    let mut dst = DenseGrid::new(w / 2, h / 2, d / 2);
    for x in 0..w {
        for y in 0..h {
            for z in 0..d {
                if dst.get(x / 2, y / 2, z / 2) == 0 {
                    dst.set(x / 2, y / 2, z / 2, src.get(x, y, z));
                }
            }
        }
    }
    dst
}
