use karst_voxel::{Voxel, VoxelSet};

const NEIGHBORS: [(i32, i32, i32); 6] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

/// Keeps only voxels with at least one non-solid axis neighbor.
///
/// A neighbor outside the representable `[0, 255]` range counts as
/// exposed to the surrounding world. Output preserves the input record
/// order, so identical sets filter identically.
pub fn surface_voxels(set: &VoxelSet) -> Vec<Voxel> {
    let mut out = Vec::with_capacity(set.solid_count());
    let mut hidden = 0usize;
    for v in set.solids() {
        let (x, y, z) = (v.x as i32, v.y as i32, v.z as i32);
        let exposed = NEIGHBORS
            .iter()
            .any(|&(dx, dy, dz)| !set.is_solid(x + dx, y + dy, z + dz));
        if exposed {
            out.push(*v);
        } else {
            hidden += 1;
        }
    }
    if hidden > 0 {
        log::debug!("surface filter dropped {hidden} enclosed voxels");
    }
    out
}
