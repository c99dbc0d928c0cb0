//! # verlet-rope
//!
//! Real-time rope simulation: a chain of point masses joined by rigid
//! distance constraints, integrated with Verlet, resolved against scene
//! collision geometry and skinned with a procedural tube mesh.
//!
//! ## Features
//! - Substepped Verlet integration with sphere-swept anti-tunneling
//! - Gauss–Seidel distance relaxation with a hard anchor pin
//! - Overlap-based penetration correction through a pluggable
//!   [`CollisionQuery`]
//! - Tube mesh generation with cached topology
//! - GPU buffer upload and a debug line view
//!
//! ## Example
//! ```rust,ignore
//! use verlet_rope::{ObstacleWorld, RopeConfig, RopeSimulation};
//! use glam::Vec3;
//!
//! let config = RopeConfig::new(2.0, 10).with_iterations(20).with_substeps(2);
//! let mut rope = RopeSimulation::new(config, Vec3::ZERO)?;
//!
//! let mut world = ObstacleWorld::new();
//! world.add_sphere(Vec3::new(0.2, -1.0, 0.0), 0.3);
//!
//! let anchor = Vec3::ZERO;
//! for _ in 0..60 {
//!     let mesh = rope.tick(1.0 / 60.0, &anchor, &world);
//!     println!("{} vertices", mesh.vertex_count());
//! }
//! ```

pub mod collision;
pub mod error;
pub mod math;
pub mod mesh;
pub mod render;
pub mod rope;

pub use collision::{
    AabbObstacle, Collider, CollisionQuery, CollisionResolver, NoCollision, Obstacle,
    ObstacleWorld, OverlapContact, PlaneObstacle, SphereObstacle, SphereSweep, SweepHit,
};
pub use error::{RopeError, RopeResult};
pub use math::Transform;
pub use mesh::{MeshGeometry, TubeMeshBuilder};
pub use rope::{
    AnchorSource, ConstraintSolver, Node, RopeConfig, RopeSimulation, SimulationState,
};
