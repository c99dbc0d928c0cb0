use glam::Vec3;

/// One discretization point of the rope. Velocity is implicit in the
/// difference between the two positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub position: Vec3,
    pub previous_position: Vec3,
}

impl Node {
    /// A node at rest.
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            previous_position: position,
        }
    }

    pub fn displacement(&self) -> Vec3 {
        self.position - self.previous_position
    }

    pub fn velocity(&self, dt: f32) -> Vec3 {
        if dt > 0.0 {
            self.displacement() / dt
        } else {
            Vec3::ZERO
        }
    }

    /// Rewrites the previous position so the next integration sees
    /// `velocity` over a step of `dt`.
    pub fn set_velocity(&mut self, velocity: Vec3, dt: f32) {
        self.previous_position = self.position - velocity * dt;
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.previous_position.is_finite()
    }
}
