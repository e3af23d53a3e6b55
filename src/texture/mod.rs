//! Pixel access and texture sampling.
//!
//! The engine never stores image data. Textures are filled from a
//! [`PixelSource`], which hands out rectangular blocks of one z-plane of
//! the volume at one timepoint.

use crate::errors::PixelSourceError;
use crate::polygon::TextureMapping;
use image::RgbImage;

mod sampler;
mod voxel_grid;

pub use sampler::sample_texture;
pub use voxel_grid::VoxelGrid;

/// An axis-aligned block of pixels in one z-plane, in voxel indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionRequest {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub t: u32,
    pub width: u32,
    pub height: u32,
}

/// Storage layer of a volumetric image.
pub trait PixelSource {
    /// The `width × height` block starting at `(x, y)` in plane `z` of
    /// timepoint `t`. Pixel `(i, j)` of the result is voxel `(x + i, y + j)`.
    fn read_region(&self, request: &RegionRequest) -> Result<RgbImage, PixelSourceError>;
}

impl<P: PixelSource + ?Sized> PixelSource for &P {
    fn read_region(&self, request: &RegionRequest) -> Result<RgbImage, PixelSourceError> {
        (**self).read_region(request)
    }
}

impl<P: PixelSource + ?Sized> PixelSource for Box<P> {
    fn read_region(&self, request: &RegionRequest) -> Result<RgbImage, PixelSourceError> {
        (**self).read_region(request)
    }
}

/// Settings of texture generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureConfig {
    /// Timepoint of the volume to read.
    pub timepoint: u32,
    /// Upper bound on either side of a texture, in texels.
    pub max_texture_size: u32,
    /// Window the texture is sampled over; meshes are given matching
    /// texture coordinates.
    pub mapping: TextureMapping,
}

impl Default for TextureConfig {
    fn default() -> Self {
        TextureConfig {
            timepoint: 0,
            max_texture_size: 1024,
            mapping: TextureMapping::BoundingRectangle,
        }
    }
}
