//! Procedural tube mesh generation from the rope centerline.

mod geometry;
mod tube;

pub use geometry::MeshGeometry;
pub use tube::{ring_frame, TubeMeshBuilder};
