use karst_geom::{Mat4, Vec3};
use karst_volume::{MipVolume, OccupancyPyramid};
use karst_voxel::{Voxel, VoxelSet};

fn bar(len: u8, material: u8) -> VoxelSet {
    let voxels = (0..len).map(|x| Voxel::new(x, 0, 0, material)).collect();
    VoxelSet::new(len as usize, 1, 1, voxels).unwrap()
}

#[test]
fn mip_levels_round_up_and_halve() {
    let vol = MipVolume::build(&bar(5, 1));
    assert_eq!(vol.level_dims(0), (8, 4, 4));
    assert_eq!(vol.level_dims(1), (4, 2, 2));
    assert_eq!(vol.level_dims(2), (2, 1, 1));
}

#[test]
fn mip_level0_scatter_is_exact() {
    let set = VoxelSet::new(
        4,
        4,
        4,
        vec![Voxel::new(0, 1, 2, 9), Voxel::new(3, 3, 3, 4)],
    )
    .unwrap();
    let vol = MipVolume::build(&set);
    let (w, h, _) = vol.level_dims(0);
    assert_eq!(vol.level(0)[w * (1 + h * 2)], 9);
    assert_eq!(vol.level(0)[3 + w * (3 + h * 3)], 4);
    assert_eq!(vol.level(0).iter().filter(|&&m| m != 0).count(), 2);
}

#[test]
fn occupancy_ingest_is_commutative_across_shapes() {
    let a = bar(6, 1);
    let b = bar(3, 2);
    let ta = Mat4::from_translation(Vec3::new(1.0, 0.0, 1.0));
    let tb = Mat4::from_translation(Vec3::new(4.0, 2.0, 5.0)) * Mat4::from_rotation_y(90.0);

    let mut ab = OccupancyPyramid::new(8, 8, 8);
    ab.ingest(&a, &ta);
    ab.ingest(&b, &tb);
    ab.finalize();

    let mut ba = OccupancyPyramid::new(8, 8, 8);
    ba.ingest(&b, &tb);
    ba.ingest(&a, &ta);
    ba.finalize();

    assert_eq!(ab, ba);
}

#[test]
fn occupancy_ingest_is_idempotent() {
    let shape = bar(4, 3);
    let t = Mat4::from_translation(Vec3::new(2.0, 1.0, 2.0));

    let mut once = OccupancyPyramid::new(8, 8, 8);
    once.ingest(&shape, &t);
    once.finalize();

    let mut twice = OccupancyPyramid::new(8, 8, 8);
    twice.ingest(&shape, &t);
    twice.ingest(&shape, &t);
    twice.finalize();

    assert_eq!(once, twice);
}

#[test]
fn occupancy_mips_are_conservative() {
    let mut p = OccupancyPyramid::new(8, 8, 8);
    p.ingest(&bar(5, 1), &Mat4::IDENTITY);
    p.finalize();

    for level in [1usize, 2] {
        let (w, h, d) = p.level_dims(level);
        let (cw, ch, _cd) = p.level_dims(level - 1);
        let child = p.level(level - 1);
        let parent = p.level(level);
        for z in 0..d {
            for y in 0..h {
                for x in 0..w {
                    let mut any = false;
                    for dz in 0..2 {
                        for dy in 0..2 {
                            for dx in 0..2 {
                                let cx = 2 * x + dx;
                                let cy = 2 * y + dy;
                                let cz = 2 * z + dz;
                                any |= child[cx + cw * (cy + ch * cz)] != 0;
                            }
                        }
                    }
                    let bit = parent[x + w * (y + h * z)] != 0;
                    assert_eq!(bit, any, "level {level} cell ({x},{y},{z})");
                }
            }
        }
    }
}

#[test]
fn bounds_violation_is_rejected_before_any_transform() {
    let err = VoxelSet::new(4, 4, 4, vec![Voxel::new(0, 4, 0, 1)]).unwrap_err();
    assert!(matches!(
        err,
        karst_voxel::VoxelError::InvalidVoxelCoordinate { .. }
    ));
}
