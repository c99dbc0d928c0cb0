use glam::Vec3;
use std::fmt::Debug;

use super::sweep::{SphereSweep, SweepHit};

/// Analytic convex shape the rope can collide with.
pub trait Obstacle: Send + Sync + Debug {
    fn contains_point(&self, point: Vec3) -> bool;
    /// Negative inside, zero on the surface, positive outside.
    fn signed_distance(&self, point: Vec3) -> f32;
    fn closest_surface_point(&self, point: Vec3) -> Vec3;
    /// Outward normal at a point on the surface.
    fn surface_normal(&self, point: Vec3) -> Vec3;
    /// First contact of a sphere sweep.
    ///
    /// A probe that already touches the shape at the sweep origin reports
    /// a hit at distance 0 while it moves further in, and nothing once it
    /// moves away.
    fn sweep_sphere(&self, sweep: &SphereSweep) -> Option<SweepHit>;
    fn clone_box(&self) -> Box<dyn Obstacle>;
}

impl Clone for Box<dyn Obstacle> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Hit at the sweep origin against a shape the probe already touches.
fn touching_hit(point: Vec3, normal: Vec3, sweep: &SphereSweep) -> Option<SweepHit> {
    if normal.dot(sweep.direction) >= 0.0 {
        return None;
    }
    Some(SweepHit {
        point,
        normal,
        distance: 0.0,
    })
}

#[derive(Debug, Clone, Copy)]
pub struct SphereObstacle {
    pub center: Vec3,
    pub radius: f32,
}

impl SphereObstacle {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Unit direction from the center toward `point`, +Y at the center.
    fn outward(&self, point: Vec3) -> Vec3 {
        (point - self.center).try_normalize().unwrap_or(Vec3::Y)
    }
}

impl Obstacle for SphereObstacle {
    fn contains_point(&self, point: Vec3) -> bool {
        self.signed_distance(point) <= 0.0
    }

    fn signed_distance(&self, point: Vec3) -> f32 {
        self.center.distance(point) - self.radius
    }

    fn closest_surface_point(&self, point: Vec3) -> Vec3 {
        self.center + self.outward(point) * self.radius
    }

    fn surface_normal(&self, point: Vec3) -> Vec3 {
        self.outward(point)
    }

    fn sweep_sphere(&self, sweep: &SphereSweep) -> Option<SweepHit> {
        // Sweeping a sphere against a sphere is a ray cast against the
        // sphere grown by the probe radius.
        let grown = self.radius + sweep.radius;
        let oc = sweep.origin - self.center;
        let c = oc.dot(oc) - grown * grown;
        if c <= 0.0 {
            let normal = self.outward(sweep.origin);
            return touching_hit(self.center + normal * self.radius, normal, sweep);
        }

        let b = oc.dot(sweep.direction);
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let t = -b - discriminant.sqrt();
        if !sweep.in_range(t) {
            return None;
        }

        let normal = self.outward(sweep.at(t));
        Some(SweepHit {
            point: self.center + normal * self.radius,
            normal,
            distance: t,
        })
    }

    fn clone_box(&self) -> Box<dyn Obstacle> {
        Box::new(*self)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AabbObstacle {
    pub min: Vec3,
    pub max: Vec3,
}

impl AabbObstacle {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Axis and side (+1 or -1) of the face nearest to `point`. Outside the
    /// box this is the face the point lies furthest beyond.
    fn nearest_face(&self, point: Vec3) -> (usize, f32) {
        let local = point - self.center();
        let gaps = self.half_extents() - local.abs();
        let axis = (1..3).fold(0, |best, a| if gaps[a] < gaps[best] { a } else { best });
        let side = if local[axis] >= 0.0 { 1.0 } else { -1.0 };
        (axis, side)
    }
}

impl Obstacle for AabbObstacle {
    fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    fn signed_distance(&self, point: Vec3) -> f32 {
        let q = (point - self.center()).abs() - self.half_extents();
        q.max(Vec3::ZERO).length() + q.max_element().min(0.0)
    }

    fn closest_surface_point(&self, point: Vec3) -> Vec3 {
        if !self.contains_point(point) {
            return point.clamp(self.min, self.max);
        }

        let (axis, side) = self.nearest_face(point);
        let mut projected = point;
        projected[axis] = if side > 0.0 { self.max[axis] } else { self.min[axis] };
        projected
    }

    fn surface_normal(&self, point: Vec3) -> Vec3 {
        let (axis, side) = self.nearest_face(point);
        let mut normal = Vec3::ZERO;
        normal[axis] = side;
        normal
    }

    fn sweep_sphere(&self, sweep: &SphereSweep) -> Option<SweepHit> {
        // Slab test against the box inflated by the probe radius. Corners
        // and edges are treated as sharp, which slightly over-reports hits
        // there.
        let min = self.min - Vec3::splat(sweep.radius);
        let max = self.max + Vec3::splat(sweep.radius);

        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        let mut hit_axis = 0;

        for axis in 0..3 {
            let (origin, dir) = (sweep.origin[axis], sweep.direction[axis]);
            if dir.abs() < 1e-8 {
                if origin < min[axis] || origin > max[axis] {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t0 = (min[axis] - origin) * inv;
            let mut t1 = (max[axis] - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            if t0 > t_near {
                t_near = t0;
                hit_axis = axis;
            }
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }

        if t_far < 0.0 {
            return None;
        }

        // Origin inside the inflated box: the probe already touches it.
        if t_near < 0.0 {
            let point = self.closest_surface_point(sweep.origin);
            let normal = if self.contains_point(sweep.origin) {
                self.surface_normal(point)
            } else {
                (sweep.origin - point)
                    .try_normalize()
                    .unwrap_or_else(|| self.surface_normal(point))
            };
            return touching_hit(point, normal, sweep);
        }

        if !sweep.in_range(t_near) {
            return None;
        }

        let mut normal = Vec3::ZERO;
        normal[hit_axis] = -sweep.direction[hit_axis].signum();
        let center = sweep.at(t_near);

        Some(SweepHit {
            point: (center - normal * sweep.radius).clamp(self.min, self.max),
            normal,
            distance: t_near,
        })
    }

    fn clone_box(&self) -> Box<dyn Obstacle> {
        Box::new(*self)
    }
}

/// Solid half-space below the plane `normal · p = offset`.
#[derive(Debug, Clone, Copy)]
pub struct PlaneObstacle {
    pub normal: Vec3,
    pub offset: f32,
}

impl PlaneObstacle {
    pub fn new(normal: Vec3, offset: f32) -> Self {
        Self {
            normal: normal.try_normalize().unwrap_or(Vec3::Y),
            offset,
        }
    }

    /// Horizontal ground at height `y`.
    pub fn ground(y: f32) -> Self {
        Self::new(Vec3::Y, y)
    }
}

impl Obstacle for PlaneObstacle {
    fn contains_point(&self, point: Vec3) -> bool {
        self.signed_distance(point) <= 0.0
    }

    fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.offset
    }

    fn closest_surface_point(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.signed_distance(point)
    }

    fn surface_normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn sweep_sphere(&self, sweep: &SphereSweep) -> Option<SweepHit> {
        let start = self.signed_distance(sweep.origin);
        if start <= sweep.radius {
            return touching_hit(self.closest_surface_point(sweep.origin), self.normal, sweep);
        }

        let approach = self.normal.dot(sweep.direction);
        if approach >= 0.0 {
            return None;
        }

        let t = (start - sweep.radius) / -approach;
        if !sweep.in_range(t) {
            return None;
        }

        Some(SweepHit {
            point: sweep.at(t) - self.normal * sweep.radius,
            normal: self.normal,
            distance: t,
        })
    }

    fn clone_box(&self) -> Box<dyn Obstacle> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_point_projects_to_nearest_face() {
        let block = AabbObstacle::new(Vec3::new(-1.0, -0.5, -2.0), Vec3::new(1.0, 0.5, 2.0));

        let p = Vec3::new(0.2, -0.4, 0.5);
        assert_eq!(block.closest_surface_point(p), Vec3::new(0.2, -0.5, 0.5));
        assert_eq!(block.surface_normal(Vec3::new(0.2, -0.5, 0.5)), Vec3::NEG_Y);

        let p = Vec3::new(0.1, 0.0, 1.9);
        assert_eq!(block.closest_surface_point(p), Vec3::new(0.1, 0.0, 2.0));
        assert_eq!(block.surface_normal(p), Vec3::Z);
    }

    #[test]
    fn outside_point_clamps_onto_box() {
        let block = AabbObstacle::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
        let p = Vec3::new(3.0, 0.5, -0.2);
        assert_eq!(block.closest_surface_point(p), Vec3::new(1.0, 0.5, -0.2));
        assert_eq!(block.surface_normal(p), Vec3::X);
        assert!((block.signed_distance(p) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn sphere_center_falls_back_to_up() {
        let sphere = SphereObstacle::new(Vec3::ONE, 0.5);
        assert_eq!(sphere.surface_normal(Vec3::ONE), Vec3::Y);
        assert_eq!(sphere.closest_surface_point(Vec3::ONE), Vec3::new(1.0, 1.5, 1.0));
    }
}
