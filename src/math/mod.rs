//! Math utilities module
//!
//! Re-exports the glam types used across the crate and the anchor
//! [`Transform`].

mod transform;

pub use transform::Transform;

pub use glam::{Quat, Vec3};
