//! A **volume slicing** engine: cut the bounding box of a volumetric image
//! (a stack of 2-D planes) with a finite, freely tilted cutting rectangle and
//! produce the textured polygons that are visible beyond the cut.
//!
//! For every pose of the cutting rectangle the engine
//! - clips each face of the box against the cutting plane,
//! - intersects the cutting rectangle with the six faces to find the slice,
//! - sorts each point set into a correctly wound polygon,
//! - fits a minimum-area bounding rectangle to each polygon,
//! - fan-triangulates the polygons and samples their textures from a
//!   [`PixelSource`].
//!
//! ```rust
//! use volslice::{Pose, VolumeDescriptor, volume::Cube};
//!
//! let descriptor = VolumeDescriptor::isotropic(10, 10, 10).unwrap();
//! let cube = Cube::new(descriptor).unwrap();
//! let cutter = Pose::new(5.0, 20.0, 0.0).cutting_rectangle(&descriptor);
//! let polygons = cube.visible_polygons(&cutter);
//! assert!(polygons.iter().any(|polygon| polygon.is_slice()));
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod io;
pub mod polygon;
pub mod texture;
pub mod triangulated;
pub mod vertex;
pub mod volume;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{GeometryError, PixelSourceError, TextureError, VolumeError};
pub use geometry::{Plane, Rectangle, Segment};
pub use polygon::{Polygon, PolygonMesh, Side, TextureMapping};
pub use texture::{PixelSource, RegionRequest, TextureConfig, VoxelGrid};
pub use triangulated::Triangulated3D;
pub use vertex::Vertex;
pub use volume::{Frame, Pose, PoseSender, RenderSink, SliceViewer, TexturedMesh, VolumeDescriptor};
