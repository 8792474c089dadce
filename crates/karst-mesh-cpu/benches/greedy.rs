use criterion::{Criterion, black_box, criterion_group, criterion_main};

use karst_mesh_cpu::{greedy_mesh, surface_voxels};
use karst_voxel::{Voxel, VoxelSet};

fn sphere_shape(n: usize) -> VoxelSet {
    let r = n as f32 / 2.0;
    let c = r - 0.5;
    let mut voxels = Vec::new();
    for z in 0..n as u8 {
        for y in 0..n as u8 {
            for x in 0..n as u8 {
                let dx = x as f32 - c;
                let dy = y as f32 - c;
                let dz = z as f32 - c;
                if dx * dx + dy * dy + dz * dz <= r * r {
                    let m = if y as f32 > c { 1 } else { 2 };
                    voxels.push(Voxel::new(x, y, z, m));
                }
            }
        }
    }
    VoxelSet::new(n, n, n, voxels).unwrap()
}

fn bench_greedy_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_mesh");
    for n in [16usize, 32] {
        let set = sphere_shape(n);
        group.bench_function(format!("sphere_{n}"), |b| {
            b.iter(|| black_box(greedy_mesh(&set)))
        });
    }
    group.finish();
}

fn bench_surface_voxels(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_voxels");
    let set = sphere_shape(32);
    group.bench_function("sphere_32", |b| {
        b.iter(|| black_box(surface_voxels(&set)))
    });
    group.finish();
}

criterion_group!(benches, bench_greedy_mesh, bench_surface_voxels);
criterion_main!(benches);
