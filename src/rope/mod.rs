//! Rope dynamics
//!
//! Node storage, configuration, the Verlet constraint solver and the
//! per-tick orchestration around it.

pub mod anchor;
pub mod config;
pub mod node;
pub mod simulation;
pub mod solver;

pub use anchor::AnchorSource;
pub use config::RopeConfig;
pub use node::Node;
pub use simulation::{RopeSimulation, SimulationState};
pub use solver::ConstraintSolver;
