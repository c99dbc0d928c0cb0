//! Rope configuration.
//!
//! Every parameter is fixed for the lifetime of a simulation instance and
//! checked once by [`RopeConfig::validate`] when the simulation is built.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{RopeError, RopeResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RopeConfig {
    /// Total rope length in world units.
    pub length: f32,
    /// Node density. Node count is `round(length * nodes_per_length)` and
    /// the rest distance between neighbours is `1 / nodes_per_length`.
    pub nodes_per_length: u32,
    /// Distance relaxation sweeps per substep. More sweeps give a stiffer,
    /// less elastic rope.
    pub constraint_iterations: u32,
    /// Substeps per tick.
    pub substeps: u32,
    pub gravity: Vec3,
    /// Collision probe radius, also used as the tube radius.
    pub radius: f32,
    /// Fraction of the way a blocked node moves toward its clamp target in
    /// one substep. 1.0 snaps straight to the contact.
    pub penetration_damping: f32,
    /// Scale applied to overlap corrections, slightly above 1 so nodes end
    /// strictly outside obstacles.
    pub separation_bias: f32,
    /// Overlap resolution runs on relaxation iterations that are a multiple
    /// of this value.
    pub collision_interval: u32,
    /// How far past the integration displacement the sweep looks, as a
    /// multiple of the displacement length.
    pub sweep_lookahead: f32,
    /// Polygon sides of the tube cross-section.
    pub sides: u32,
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self {
            length: 2.0,
            nodes_per_length: 10,
            constraint_iterations: 20,
            substeps: 2,
            gravity: Vec3::new(0.0, -9.81, 0.0),
            radius: 0.05,
            penetration_damping: 1.0,
            separation_bias: 1.01,
            collision_interval: 2,
            sweep_lookahead: 2.0,
            sides: 8,
        }
    }
}

impl RopeConfig {
    pub fn new(length: f32, nodes_per_length: u32) -> Self {
        Self {
            length,
            nodes_per_length,
            ..Default::default()
        }
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.constraint_iterations = iterations;
        self
    }

    pub fn with_substeps(mut self, substeps: u32) -> Self {
        self.substeps = substeps;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_penetration_damping(mut self, damping: f32) -> Self {
        self.penetration_damping = damping;
        self
    }

    pub fn with_separation_bias(mut self, bias: f32) -> Self {
        self.separation_bias = bias;
        self
    }

    pub fn with_collision_interval(mut self, interval: u32) -> Self {
        self.collision_interval = interval;
        self
    }

    pub fn with_sweep_lookahead(mut self, lookahead: f32) -> Self {
        self.sweep_lookahead = lookahead;
        self
    }

    pub fn with_sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    /// Parses a JSON object. Missing fields take their default values.
    pub fn from_json_str(json: &str) -> RopeResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn node_count(&self) -> usize {
        (self.length * self.nodes_per_length as f32).round() as usize
    }

    pub fn rest_distance(&self) -> f32 {
        1.0 / self.nodes_per_length as f32
    }

    pub fn validate(&self) -> RopeResult<()> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(RopeError::InvalidLength(self.length));
        }
        if self.nodes_per_length == 0 {
            return Err(RopeError::InvalidDensity);
        }
        let count = self.node_count();
        if count < 2 {
            return Err(RopeError::TooFewNodes(count));
        }
        if self.substeps == 0 {
            return Err(RopeError::InvalidSubsteps);
        }
        if !self.gravity.is_finite() {
            return Err(RopeError::NonFiniteGravity(self.gravity));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(RopeError::InvalidRadius(self.radius));
        }
        if self.sides < 3 {
            return Err(RopeError::InvalidSides(self.sides));
        }
        if !(0.0..=1.0).contains(&self.penetration_damping) {
            return Err(RopeError::OutOfRange {
                name: "penetration_damping",
                value: self.penetration_damping,
            });
        }
        if !(self.separation_bias.is_finite() && self.separation_bias >= 1.0) {
            return Err(RopeError::OutOfRange {
                name: "separation_bias",
                value: self.separation_bias,
            });
        }
        if self.collision_interval == 0 {
            return Err(RopeError::OutOfRange {
                name: "collision_interval",
                value: 0.0,
            });
        }
        if !(self.sweep_lookahead.is_finite() && self.sweep_lookahead >= 1.0) {
            return Err(RopeError::OutOfRange {
                name: "sweep_lookahead",
                value: self.sweep_lookahead,
            });
        }
        Ok(())
    }
}
