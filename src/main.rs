use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use karst_geom::{Mat4, Vec3};
use karst_mesh_cpu::{greedy_mesh, surface_voxels};
use karst_volume::{MipVolume, OccupancyPyramid};

mod scene;

use scene::SceneConfig;

/// Builds every representation of a voxel scene: greedy surface meshes,
/// exposed-voxel lists, per-shape material mip volumes, and the shared
/// occupancy pyramid over all placements.
#[derive(Debug, Parser)]
#[command(name = "karst")]
struct Args {
    /// TOML scene description; a built-in demo scene runs when omitted.
    #[arg(long)]
    scene: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.scene {
        Some(path) => SceneConfig::from_path(path)?,
        None => scene::default_scene(),
    };

    let mut pyramid = OccupancyPyramid::new(
        config.volume.width,
        config.volume.height,
        config.volume.depth,
    );

    for shape in &config.shapes {
        let set = shape.build()?;
        let mesh = greedy_mesh(&set);
        let exposed = surface_voxels(&set);
        let mips = MipVolume::build(&set);

        log::info!(
            "shape '{}': {} solid voxels, {} quads ({} tris), {} exposed, mip level0 {:?}",
            shape.name,
            set.solid_count(),
            mesh.quad_count(),
            mesh.triangle_count(),
            exposed.len(),
            mips.level_dims(0),
        );

        for placement in &shape.placements {
            let [x, y, z] = placement.position;
            let to_world = Mat4::from_translation(Vec3::new(x, y, z))
                * Mat4::from_rotation_y(placement.yaw_deg);
            pyramid.ingest(&set, &to_world);
        }
    }

    pyramid.finalize();
    for level in 0..3 {
        let occupied = pyramid.level(level).iter().filter(|&&b| b != 0).count();
        log::info!(
            "occupancy level {level}: {:?} cells, {occupied} occupied",
            pyramid.level_dims(level),
        );
    }

    Ok(())
}
