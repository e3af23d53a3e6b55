//! Export of computed meshes.
//!
//! Formats are behind cargo feature flags.

#[cfg(feature = "stl-io")]
mod stl;

#[cfg(feature = "stl-io")]
pub use stl::{to_stl_ascii, to_stl_binary};
