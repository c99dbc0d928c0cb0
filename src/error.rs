//! Error types for the rope simulator.
//!
//! Only construction and configuration loading are fallible. The numerical
//! core never returns errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RopeError {
    #[error("rope length must be positive and finite, got {0}")]
    InvalidLength(f32),

    #[error("nodes per length must be positive")]
    InvalidDensity,

    #[error("rope needs at least 2 nodes, got {0}")]
    TooFewNodes(usize),

    #[error("substep count must be at least 1")]
    InvalidSubsteps,

    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("tube needs at least 3 sides, got {0}")]
    InvalidSides(u32),

    #[error("gravity must be finite, got {0}")]
    NonFiniteGravity(glam::Vec3),

    /// A tuning parameter fell outside its allowed range.
    #[error("{name} out of range: {value}")]
    OutOfRange { name: &'static str, value: f32 },

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RopeResult<T> = Result<T, RopeError>;
