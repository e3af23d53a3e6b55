//! Analytic primitives of the slicing engine.
//!
//! Points and vectors are `nalgebra` types over [`Real`](crate::float_types::Real);
//! this module adds planes, lines, segments and rectangles, the rectangle
//! intersection used by every clipping step, and the minimum-area bounding
//! rectangle used to pick texture sampling windows.

pub mod bounding_rectangle;
pub mod intersection;
pub mod line;
pub mod plane;
pub mod points;
pub mod rectangle;
pub mod segment;

pub use bounding_rectangle::minimum_area_rectangle;
pub use intersection::find_intersection;
pub use line::Line;
pub use plane::Plane;
pub use rectangle::Rectangle;
pub use segment::Segment;
