//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use image::{Rgb, RgbImage};
use nalgebra::Point3;
use std::cell::{Cell, RefCell};
use volslice::{
    PixelSource, PixelSourceError, RegionRequest, VoxelGrid, float_types::Real,
    geometry::Rectangle,
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Whether `point` is within `eps` of some point of `points`.
pub fn contains_point(points: &[Point3<Real>], point: &Point3<Real>, eps: Real) -> bool {
    points.iter().any(|p| nalgebra::distance(p, point) < eps)
}

/// Whether both sets hold the same points, in any order.
pub fn same_points(a: &[Point3<Real>], b: &[Point3<Real>], eps: Real) -> bool {
    a.len() == b.len() && a.iter().all(|p| contains_point(b, p, eps))
}

/// Rectangle from three corners given as arrays.
pub fn rect(p0: [Real; 3], p1: [Real; 3], p2: [Real; 3]) -> Rectangle {
    Rectangle::new(p0.into(), p1.into(), p2.into())
}

/// Voxel `(x, y, z)` coloured `(x, y, z)`, so texels tell which voxel they show.
pub fn coordinate_grid(width: u32, height: u32, depth: u32) -> VoxelGrid {
    VoxelGrid::from_fn(width, height, depth, |x, y, z| Rgb([x as u8, y as u8, z as u8]))
}

/// Wraps a pixel source and records every request made to it.
pub struct RecordingSource<P> {
    pub inner: P,
    pub requests: RefCell<Vec<RegionRequest>>,
}

impl<P> RecordingSource<P> {
    pub fn new(inner: P) -> Self {
        RecordingSource {
            inner,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl<P: PixelSource> PixelSource for RecordingSource<P> {
    fn read_region(&self, request: &RegionRequest) -> Result<RgbImage, PixelSourceError> {
        self.requests.borrow_mut().push(*request);
        self.inner.read_region(request)
    }
}

/// A pixel source that fails every read touching plane `failing_z`.
pub struct FailingPlane<P> {
    pub inner: P,
    pub failing_z: u32,
}

impl<P: PixelSource> PixelSource for FailingPlane<P> {
    fn read_region(&self, request: &RegionRequest) -> Result<RgbImage, PixelSourceError> {
        if request.z == self.failing_z {
            return Err(PixelSourceError::Io(std::io::Error::other("disk went away")));
        }
        self.inner.read_region(request)
    }
}

/// A pixel source whose reads all fail while `offline` is set.
pub struct Unplugged<P> {
    pub inner: P,
    pub offline: Cell<bool>,
}

impl<P> Unplugged<P> {
    pub fn new(inner: P) -> Self {
        Unplugged {
            inner,
            offline: Cell::new(true),
        }
    }
}

impl<P: PixelSource> PixelSource for Unplugged<P> {
    fn read_region(&self, request: &RegionRequest) -> Result<RgbImage, PixelSourceError> {
        if self.offline.get() {
            return Err(PixelSourceError::Io(std::io::Error::other("volume is offline")));
        }
        self.inner.read_region(request)
    }
}
