//! Fills the texture of one polygon from a pixel source.

use crate::errors::{GeometryError, TextureError};
use crate::float_types::{Real, tolerance};
use crate::polygon::Polygon;
use crate::texture::{PixelSource, RegionRequest, TextureConfig};
use crate::volume::cube::Cube;
use image::RgbImage;
use nalgebra::{Point3, Vector3};
use std::collections::BTreeMap;

/// One texel and the voxel it shows.
struct Sample {
    texel: (u32, u32),
    voxel: (u32, u32),
}

/// Texture of `polygon`, sampled over its window for `config.mapping`.
///
/// Texel `(i, j)` shows the voxel nearest to the point at fraction
/// `((i + ½) / width, (j + ½) / height)` of the window's `u` and `v` edges,
/// matching the texture coordinates of [`Polygon::mesh_with`]. The texture
/// has one texel per voxel along each edge, capped by
/// `config.max_texture_size`. Texels outside the volume stay black.
///
/// Reads are batched: one [`PixelSource::read_region`] call per z-plane
/// touched, covering the footprint of the window in that plane.
pub fn sample_texture<P: PixelSource + ?Sized>(
    source: &P,
    cube: &Cube,
    polygon: &Polygon,
    config: &TextureConfig,
) -> Result<RgbImage, TextureError> {
    let window = polygon.sampling_window(config.mapping);
    if window.area() < tolerance() * tolerance() {
        return Err(TextureError::EmptyRegion);
    }

    let to_pixel = |point: &Point3<Real>| -> Result<Point3<Real>, GeometryError> {
        match cube.face(polygon.side()) {
            Some(face) => face.pixel_coordinates(point),
            None => Ok(cube.to_pixel(point)),
        }
    };
    let origin = to_pixel(&window.p0)?;
    let u = to_pixel(&window.p1)? - origin;
    let v = to_pixel(&window.p2)? - to_pixel(&window.p1)?;

    let max_size = config.max_texture_size.max(1);
    let size = |edge: &Vector3<Real>| (edge.norm().round() as u32).saturating_add(1).min(max_size);
    let (width, height) = (size(&u), size(&v));

    let descriptor = cube.descriptor();
    let mut planes: BTreeMap<u32, Vec<Sample>> = BTreeMap::new();
    for j in 0..height {
        for i in 0..width {
            let s = (i as Real + 0.5) / width as Real;
            let t = (j as Real + 0.5) / height as Real;
            let voxel = (origin + u * s + v * t).map(Real::round);
            let (x, y, z) = (voxel.x as i64, voxel.y as i64, voxel.z as i64);
            if descriptor.contains_voxel(x, y, z) {
                planes.entry(z as u32).or_default().push(Sample {
                    texel: (i, j),
                    voxel: (x as u32, y as u32),
                });
            }
        }
    }

    let mut texture = RgbImage::new(width, height);
    for (z, samples) in &planes {
        let (min_x, max_x, min_y, max_y) = samples.iter().fold(
            (u32::MAX, 0, u32::MAX, 0),
            |(min_x, max_x, min_y, max_y), sample| {
                let (x, y) = sample.voxel;
                (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
            },
        );
        let request = RegionRequest {
            x: min_x,
            y: min_y,
            z: *z,
            t: config.timepoint,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        };
        let block = source.read_region(&request)?;

        for sample in samples {
            let (x, y) = sample.voxel;
            if let Some(pixel) = block.get_pixel_checked(x - min_x, y - min_y) {
                texture.put_pixel(sample.texel.0, sample.texel.1, *pixel);
            }
        }
    }

    log::trace!(
        "{} texture {}x{} read from {} planes",
        polygon.side(),
        width,
        height,
        planes.len()
    );
    Ok(texture)
}
