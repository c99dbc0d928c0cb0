use glam::Vec3;

/// A sphere of `radius` swept from `origin` along `direction`.
#[derive(Debug, Clone, Copy)]
pub struct SphereSweep {
    pub origin: Vec3,
    pub direction: Vec3,
    pub radius: f32,
    pub max_distance: f32,
}

impl SphereSweep {
    pub fn new(origin: Vec3, direction: Vec3, radius: f32, max_distance: f32) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            radius,
            max_distance,
        }
    }

    /// Center of the swept sphere after travelling `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    pub fn in_range(&self, t: f32) -> bool {
        t >= 0.0 && t <= self.max_distance
    }
}

/// First contact of a sphere sweep.
#[derive(Debug, Clone, Copy)]
pub struct SweepHit {
    /// Point on the obstacle surface touched by the sphere.
    pub point: Vec3,
    /// Outward surface normal at `point`.
    pub normal: Vec3,
    /// Distance travelled by the sphere center before contact.
    pub distance: f32,
}

/// One obstacle found by an overlap query.
#[derive(Debug, Clone, Copy)]
pub struct OverlapContact {
    /// Closest point on the obstacle surface to the query point.
    pub contact_point: Vec3,
    /// Outward surface normal at `contact_point`.
    pub normal: Vec3,
    /// Trigger volumes report overlaps but do not push nodes out.
    pub is_trigger: bool,
}
