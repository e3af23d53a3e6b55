//! The volume being viewed: its bounding box, the cutting pose and the
//! driver that recomputes visible meshes.

pub mod cube;
pub mod descriptor;
pub mod pixel_transform;
pub mod pose;
pub mod slicer;
pub mod viewer;

pub use cube::{Cube, CubeFace};
pub use descriptor::VolumeDescriptor;
pub use pose::Pose;
pub use viewer::{Frame, PoseSender, RenderSink, SliceViewer, TexturedMesh, build_meshes};
