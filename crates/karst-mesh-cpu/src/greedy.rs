use karst_geom::Vec3;
use karst_voxel::{DenseGrid, VoxelSet};

use crate::mesh::SurfaceMesh;

/// Greedy surface meshing over one shape.
///
/// For each principal axis a signed mask is built per slice: `+a` where
/// the before-side voxel is solid, `-b` where the after-side voxel is
/// solid, `0` across internal or doubly-empty boundaries. Runs of equal
/// mask values are merged into maximal rectangles, width along `u`
/// first, then height along `v`. The scan order (outer `v`, inner `u`)
/// and the width-before-height preference determine the exact quad
/// boundaries and must not change.
///
/// Based on: https://0fps.net/2012/07/07/meshing-minecraft-part-2/
pub fn greedy_mesh(set: &VoxelSet) -> SurfaceMesh {
    let grid = DenseGrid::from_set(set);
    let dims: [i32; 3] = [
        set.size_x() as i32,
        set.size_y() as i32,
        set.size_z() as i32,
    ];

    let mut mesh = SurfaceMesh::default();

    for d in 0..3 {
        let u = (d + 1) % 3;
        let v = (d + 2) % 3;
        let mut x = [0i32; 3]; // current voxel
        let mut q = [0i32; 3]; // step to the after-side voxel
        q[d] = 1;
        let du_len = dims[u] as usize;
        let dv_len = dims[v] as usize;
        let mut mask = vec![0i16; du_len * dv_len];

        // Slide the boundary plane from before the box to its far edge.
        x[d] = -1;
        while x[d] < dims[d] {
            let mut n = 0usize;
            for xv in 0..dims[v] {
                x[v] = xv;
                for xu in 0..dims[u] {
                    x[u] = xu;
                    let a = if x[d] >= 0 {
                        grid.get(x[0] as usize, x[1] as usize, x[2] as usize) as i16
                    } else {
                        0
                    };
                    let b = if x[d] < dims[d] - 1 {
                        grid.get(
                            (x[0] + q[0]) as usize,
                            (x[1] + q[1]) as usize,
                            (x[2] + q[2]) as usize,
                        ) as i16
                    } else {
                        0
                    };
                    mask[n] = if (a != 0) == (b != 0) {
                        0
                    } else if a != 0 {
                        a
                    } else {
                        -b
                    };
                    n += 1;
                }
            }
            x[d] += 1;

            // Merge mask runs into maximal rectangles.
            let mut n = 0usize;
            for j in 0..dims[v] {
                let mut i = 0i32;
                while i < dims[u] {
                    let c = mask[n];
                    if c == 0 {
                        i += 1;
                        n += 1;
                        continue;
                    }

                    let mut w = 1usize;
                    while i + (w as i32) < dims[u] && mask[n + w] == c {
                        w += 1;
                    }

                    let mut h = 1usize;
                    'grow: while j + (h as i32) < dims[v] {
                        for k in 0..w {
                            if mask[n + k + h * du_len] != c {
                                break 'grow;
                            }
                        }
                        h += 1;
                    }

                    x[u] = i;
                    x[v] = j;

                    // Edge vectors; swapped per mask sign so the winding
                    // faces outward.
                    let mut du = [0i32; 3];
                    let mut dv = [0i32; 3];
                    if c < 0 {
                        du[u] = w as i32;
                        dv[v] = h as i32;
                    } else {
                        du[v] = h as i32;
                        dv[u] = w as i32;
                    }

                    let corner = |ox: i32, oy: i32, oz: i32| -> [u16; 3] {
                        [(x[0] + ox) as u16, (x[1] + oy) as u16, (x[2] + oz) as u16]
                    };
                    let p0 = corner(0, 0, 0);
                    let p1 = corner(du[0], du[1], du[2]);
                    let p2 = corner(dv[0], dv[1], dv[2]);
                    let p3 = corner(du[0] + dv[0], du[1] + dv[1], du[2] + dv[2]);

                    let e1 = Vec3::new(du[0] as f32, du[1] as f32, du[2] as f32);
                    let e2 = Vec3::new(dv[0] as f32, dv[1] as f32, dv[2] as f32);
                    let normal = (e1.cross(e2) * -1.0).normalized();
                    let material = c.unsigned_abs() as u8;

                    mesh.push_quad([p0, p1, p2, p3], normal, material);

                    // Consume the rectangle so no face is emitted twice.
                    for l in 0..h {
                        for k in 0..w {
                            mask[n + k + l * du_len] = 0;
                        }
                    }

                    i += w as i32;
                    n += w;
                }
            }
        }
    }

    log::trace!(
        "greedy mesh: {} quads from {} solid voxels",
        mesh.quad_count(),
        set.solid_count()
    );
    mesh
}
