//! Renderer-side helpers
//!
//! GPU vertex formats, buffer upload for the tube mesh and a debug line
//! view. Drawing itself belongs to the host renderer.

pub mod debug;
pub mod gpu;
pub mod vertex;

pub use debug::DebugLines;
pub use gpu::{GpuLineMesh, GpuRopeMesh};
pub use vertex::{LineVertex, Vertex};
