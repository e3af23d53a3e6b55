//! Recompute driver: turns poses into textured meshes for a renderer.
//!
//! Poses arrive either directly through [`SliceViewer::set_pose`] or as
//! messages from any number of [`PoseSender`]s. [`SliceViewer::pump`]
//! drains the queue and only computes the newest pose, so a renderer that
//! falls behind skips stale poses instead of queueing work.

use crate::errors::{TextureError, VolumeError};
use crate::polygon::{PolygonMesh, Side};
use crate::texture::{PixelSource, TextureConfig, sample_texture};
use crate::volume::{cube::Cube, descriptor::VolumeDescriptor, pose::Pose};
use image::RgbImage;
use std::sync::mpsc::{self, Receiver, Sender};

/// Mesh of one visible polygon and its texture.
#[derive(Debug)]
pub struct TexturedMesh {
    pub side: Side,
    pub mesh: PolygonMesh,
    /// A failed read only affects this mesh.
    pub texture: Result<RgbImage, TextureError>,
}

/// Everything visible for one pose.
#[derive(Debug)]
pub struct Frame {
    /// Increases by one for every frame a viewer presents.
    pub generation: u64,
    pub pose: Pose,
    pub meshes: Vec<TexturedMesh>,
}

impl Frame {
    pub fn mesh(&self, side: Side) -> Option<&TexturedMesh> {
        self.meshes.iter().find(|mesh| mesh.side == side)
    }
}

/// Consumer of computed frames, usually a renderer.
pub trait RenderSink {
    fn present(&mut self, frame: Frame);
}

impl<F: FnMut(Frame)> RenderSink for F {
    fn present(&mut self, frame: Frame) {
        self(frame)
    }
}

/// Sending half of a viewer's pose queue.
#[derive(Debug, Clone)]
pub struct PoseSender(Sender<Pose>);

impl PoseSender {
    /// Queue `pose`. Returns `false` when the viewer is gone.
    pub fn send(&self, pose: Pose) -> bool {
        self.0.send(pose).is_ok()
    }
}

/// Meshes and textures of everything visible at `pose`.
///
/// Pure apart from the reads issued to `source`.
pub fn build_meshes<P: PixelSource + ?Sized>(
    cube: &Cube,
    source: &P,
    pose: &Pose,
    config: &TextureConfig,
) -> Vec<TexturedMesh> {
    let cutter = pose.cutting_rectangle(cube.descriptor());
    cube.visible_polygons(&cutter)
        .iter()
        .map(|polygon| {
            let texture = sample_texture(source, cube, polygon, config);
            if let Err(error) = &texture {
                log::warn!("no texture for the {} polygon: {error}", polygon.side());
            }
            TexturedMesh {
                side: polygon.side(),
                mesh: polygon.mesh_with(config.mapping),
                texture,
            }
        })
        .collect()
}

/// Owns the cube of a volume, its pixel source and a render sink, and
/// presents a new [`Frame`] whenever the pose changes.
pub struct SliceViewer<P, R> {
    cube: Cube,
    source: P,
    sink: R,
    config: TextureConfig,
    sender: Sender<Pose>,
    receiver: Receiver<Pose>,
    pose: Option<Pose>,
    generation: u64,
}

impl<P: PixelSource, R: RenderSink> SliceViewer<P, R> {
    pub fn new(descriptor: VolumeDescriptor, source: P, sink: R, config: TextureConfig) -> Result<Self, VolumeError> {
        let (sender, receiver) = mpsc::channel();
        Ok(SliceViewer {
            cube: Cube::new(descriptor)?,
            source,
            sink,
            config,
            sender,
            receiver,
            pose: None,
            generation: 0,
        })
    }

    /// A handle to queue poses from elsewhere, e.g. a UI thread.
    pub fn pose_sender(&self) -> PoseSender {
        PoseSender(self.sender.clone())
    }

    /// Recompute and present a frame for `pose`, unless it is the pose
    /// already shown. Returns the generation of the presented frame.
    pub fn set_pose(&mut self, pose: Pose) -> Option<u64> {
        if self.pose == Some(pose) {
            return None;
        }
        Some(self.recompute(pose))
    }

    /// Recompute and present the current pose again, e.g. after the pixel
    /// source recovered from a failed read. Returns `None` before any pose
    /// was set.
    pub fn refresh(&mut self) -> Option<u64> {
        let pose = self.pose?;
        Some(self.recompute(pose))
    }

    fn recompute(&mut self, pose: Pose) -> u64 {
        let meshes = build_meshes(&self.cube, &self.source, &pose, &self.config);
        self.generation += 1;
        self.pose = Some(pose);
        log::debug!("frame {} with {} meshes for {pose:?}", self.generation, meshes.len());

        self.sink.present(Frame {
            generation: self.generation,
            pose,
            meshes,
        });
        self.generation
    }

    /// Handle queued poses: everything but the newest one is dropped.
    /// Returns the generation of the presented frame, if any.
    pub fn pump(&mut self) -> Option<u64> {
        let mut superseded = 0usize;
        let mut latest = None;
        for pose in self.receiver.try_iter() {
            if latest.is_some() {
                superseded += 1;
            }
            latest = Some(pose);
        }
        if superseded > 0 {
            log::debug!("{superseded} stale poses superseded");
        }
        latest.and_then(|pose| self.set_pose(pose))
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn current_pose(&self) -> Option<Pose> {
        self.pose
    }

    pub const fn cube(&self) -> &Cube {
        &self.cube
    }

    pub const fn config(&self) -> &TextureConfig {
        &self.config
    }
}
