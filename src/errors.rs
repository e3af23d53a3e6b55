//! Error types of the slicing engine

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// Failures of the geometric primitives and of polygon construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (DegenerateRectangle) The edge vectors of a rectangle are zero or parallel
    #[error("(DegenerateRectangle) The edges u={u} and v={v} do not span a plane")]
    DegenerateRectangle { u: Vector3<Real>, v: Vector3<Real> },
    /// (TooFewPoints) A polygon has fewer than 3 distinct points
    #[error("(TooFewPoints) A polygon needs at least 3 distinct points, got {0}")]
    TooFewPoints(usize),
    /// (Collinear) The points of a polygon do not span a plane
    #[error("(Collinear) The {0} points of a polygon are collinear")]
    Collinear(usize),
    /// (InvariantViolation) A computed value contradicts a guarantee of the pipeline
    #[error("(InvariantViolation) {message} at: {point}")]
    InvariantViolation { message: String, point: Point3<Real> },
}

/// Problems with the description of a volume.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VolumeError {
    /// One of width, height or depth is zero
    #[error("(EmptyDimension) The volume has an empty {axis} dimension")]
    EmptyDimension { axis: &'static str },
    /// A voxel spacing is zero, negative or not finite
    #[error("(InvalidSpacing) The {axis} spacing must be positive and finite, got {value}")]
    InvalidSpacing { axis: &'static str, value: Real },
}

/// Failures reported by a [`PixelSource`](crate::texture::PixelSource).
#[derive(Debug, thiserror::Error)]
pub enum PixelSourceError {
    /// The requested region is not inside the image
    #[error("(OutOfBounds) Region x={x} y={y} z={z} {width}x{height} is outside the image")]
    OutOfBounds {
        x: u32,
        y: u32,
        z: u32,
        width: u32,
        height: u32,
    },
    /// The storage layer failed to deliver the pixels
    #[error("(Io) {0}")]
    Io(#[from] std::io::Error),
    /// In general, anything else
    #[error("{0}")]
    Other(String),
}

/// Failures while building the texture of a single polygon.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("pixel source failed: {0}")]
    PixelSource(#[from] PixelSourceError),
    #[error("texture geometry is invalid: {0}")]
    Geometry(#[from] GeometryError),
    /// The polygon has no bounding rectangle to sample over
    #[error("the polygon has no sampling window")]
    EmptyRegion,
}
