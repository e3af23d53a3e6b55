// main.rs
//
// Sweeps the cutting rectangle through a synthetic volume and writes the
// visible meshes of each pose as STL, with one PNG texture per polygon.
// Set RUST_LOG=debug to follow the recompute driver.

use image::Rgb;
use std::error::Error;
use std::fs;
use std::sync::mpsc;
use volslice::float_types::Real;
use volslice::{Frame, Pose, SliceViewer, TextureConfig, VolumeDescriptor, VoxelGrid};

const OUTPUT_DIR: &str = "slices";

/// A 64×64×32 volume holding a sphere inside a colour gradient.
fn synthetic_volume() -> (VolumeDescriptor, VoxelGrid) {
    let (width, height, depth) = (64, 64, 32);
    let grid = VoxelGrid::from_fn(width, height, depth, |x, y, z| {
        let dx = x as Real - 32.0;
        let dy = y as Real - 32.0;
        let dz = (z as Real - 16.0) * 2.0;
        if (dx * dx + dy * dy + dz * dz).sqrt() < 20.0 {
            Rgb([240, 200, 40])
        } else {
            Rgb([(x * 4) as u8, (y * 4) as u8, (z * 8) as u8])
        }
    });
    let descriptor = VolumeDescriptor {
        width,
        height,
        depth,
        pixel_width: 1.0,
        pixel_height: 1.0,
        z_spacing: 2.0,
    };
    (descriptor, grid)
}

fn write_frame(frame: &Frame) -> Result<(), Box<dyn Error>> {
    let name = format!("frame_{:03}", frame.generation);
    fs::write(format!("{OUTPUT_DIR}/{name}.stl"), frame.to_stl_ascii(&name))?;
    for textured in &frame.meshes {
        match &textured.texture {
            Ok(texture) => texture.save(format!("{OUTPUT_DIR}/{name}_{}.png", textured.side))?,
            Err(error) => log::warn!("{name}: {} has no texture: {error}", textured.side),
        }
    }
    log::info!("wrote {name} ({} meshes, pose {:?})", frame.meshes.len(), frame.pose);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fs::create_dir_all(OUTPUT_DIR)?;

    let (descriptor, grid) = synthetic_volume();
    let (frames, finished) = mpsc::channel();
    let mut viewer = SliceViewer::new(
        descriptor,
        grid,
        move |frame: Frame| {
            let _ = frames.send(frame);
        },
        TextureConfig::default(),
    )?;

    // Straight slices through the depth, then a tilt sweep. Every burst of
    // poses queued before a pump collapses into its last pose.
    let poses = viewer.pose_sender();
    let depth = descriptor.physical_size().z;
    for step in 1..4 {
        poses.send(Pose::new(depth * step as Real / 4.0, 0.0, 0.0));
        viewer.pump();
    }
    for angle in [-30.0, -15.0, 15.0, 30.0] {
        poses.send(Pose::new(depth / 2.0, angle, 0.0));
        poses.send(Pose::new(depth / 2.0, angle, angle));
        viewer.pump();
    }
    drop(viewer);

    for frame in finished.iter() {
        write_frame(&frame)?;
    }
    Ok(())
}
