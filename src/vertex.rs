//! Struct for the corners of exported triangles.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A triangle corner, holding position and normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in scene space
    /// * `normal` – (optionally non‑unit) normal, copied verbatim
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { pos, normal }
    }
}
