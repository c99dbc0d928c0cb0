use glam::Vec3;

use super::sweep::{OverlapContact, SweepHit};

/// Scene collision capability consumed by the solver.
///
/// Both queries are synchronous and read-only: the rope never mutates the
/// geometry it collides with. Implement this for whatever physics engine
/// owns the scene; [`ObstacleWorld`](super::ObstacleWorld) is the bundled
/// analytic implementation.
pub trait CollisionQuery {
    /// Sweeps a sphere of `radius` from `origin` along the unit vector
    /// `direction` for at most `max_distance`, returning the nearest hit.
    ///
    /// Geometry the sphere already touches at `origin` is reported at
    /// distance 0 while `direction` points further in, and not at all
    /// once it points away.
    fn sweep(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_distance: f32,
    ) -> Option<SweepHit>;

    /// Appends every obstacle whose surface lies within `radius` of `point`
    /// to `out`. Callers clear `out` beforehand.
    fn overlap(&self, point: Vec3, radius: f32, out: &mut Vec<OverlapContact>);
}

impl<T: CollisionQuery + ?Sized> CollisionQuery for &T {
    fn sweep(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_distance: f32,
    ) -> Option<SweepHit> {
        (**self).sweep(origin, direction, radius, max_distance)
    }

    fn overlap(&self, point: Vec3, radius: f32, out: &mut Vec<OverlapContact>) {
        (**self).overlap(point, radius, out)
    }
}

/// Empty scene. Useful for free-fall and pure-constraint setups.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCollision;

impl CollisionQuery for NoCollision {
    fn sweep(&self, _: Vec3, _: Vec3, _: f32, _: f32) -> Option<SweepHit> {
        None
    }

    fn overlap(&self, _: Vec3, _: f32, _: &mut Vec<OverlapContact>) {}
}
