use glam::Vec3;

use super::obstacle::{AabbObstacle, Obstacle, PlaneObstacle, SphereObstacle};
use super::query::CollisionQuery;
use super::sweep::{OverlapContact, SphereSweep, SweepHit};

/// An obstacle registered in an [`ObstacleWorld`].
#[derive(Debug, Clone)]
pub struct Collider {
    pub shape: Box<dyn Obstacle>,
    pub is_trigger: bool,
}

/// Flat list of analytic obstacles answering rope collision queries.
///
/// Queries are brute force over every collider, which is fine for the
/// handful of shapes a rope scene usually has.
#[derive(Default, Clone)]
pub struct ObstacleWorld {
    colliders: Vec<Collider>,
}

impl ObstacleWorld {
    pub fn new() -> Self {
        Self {
            colliders: Vec::new(),
        }
    }

    pub fn add<T: Obstacle + 'static>(&mut self, obstacle: T) {
        self.colliders.push(Collider {
            shape: Box::new(obstacle),
            is_trigger: false,
        });
    }

    /// Adds a volume that shows up in overlap queries but never pushes the
    /// rope.
    pub fn add_trigger<T: Obstacle + 'static>(&mut self, obstacle: T) {
        self.colliders.push(Collider {
            shape: Box::new(obstacle),
            is_trigger: true,
        });
    }

    pub fn add_sphere(&mut self, center: Vec3, radius: f32) {
        self.add(SphereObstacle::new(center, radius));
    }

    pub fn add_box(&mut self, center: Vec3, half_extents: Vec3) {
        self.add(AabbObstacle::from_center_half_extents(center, half_extents));
    }

    pub fn add_aabb(&mut self, min: Vec3, max: Vec3) {
        self.add(AabbObstacle::new(min, max));
    }

    pub fn add_ground(&mut self, height: f32) {
        self.add(PlaneObstacle::ground(height));
    }

    pub fn clear(&mut self) {
        self.colliders.clear();
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    fn solid(&self) -> impl Iterator<Item = &dyn Obstacle> + '_ {
        self.colliders
            .iter()
            .filter(|c| !c.is_trigger)
            .map(|c| c.shape.as_ref())
    }

    pub fn point_inside_any(&self, point: Vec3) -> bool {
        self.solid().any(|o| o.contains_point(point))
    }

    /// Smallest signed distance from `point` to any solid collider.
    pub fn min_clearance(&self, point: Vec3) -> Option<f32> {
        self.solid()
            .map(|o| o.signed_distance(point))
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }
}

impl CollisionQuery for ObstacleWorld {
    fn sweep(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_distance: f32,
    ) -> Option<SweepHit> {
        let sweep = SphereSweep::new(origin, direction, radius, max_distance);
        if sweep.direction == Vec3::ZERO {
            return None;
        }

        let mut closest: Option<SweepHit> = None;
        for obstacle in self.solid() {
            if let Some(hit) = obstacle.sweep_sphere(&sweep) {
                match &closest {
                    Some(prev) if prev.distance <= hit.distance => {}
                    _ => closest = Some(hit),
                }
            }
        }
        closest
    }

    fn overlap(&self, point: Vec3, radius: f32, out: &mut Vec<OverlapContact>) {
        for collider in &self.colliders {
            let shape = collider.shape.as_ref();
            let distance = shape.signed_distance(point);
            if distance >= radius {
                continue;
            }

            let contact_point = shape.closest_surface_point(point);
            // Outside a convex shape the direction to the closest point is
            // the contact normal; inside, fall back to the face normal.
            let normal = if distance > 0.0 {
                (point - contact_point)
                    .try_normalize()
                    .unwrap_or_else(|| shape.surface_normal(contact_point))
            } else {
                shape.surface_normal(contact_point)
            };

            out.push(OverlapContact {
                contact_point,
                normal,
                is_trigger: collider.is_trigger,
            });
        }
    }
}

impl std::fmt::Debug for ObstacleWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObstacleWorld")
            .field("collider_count", &self.colliders.len())
            .finish()
    }
}
