mod obstacle;
mod query;
mod resolver;
mod sweep;
mod world;

pub use obstacle::{AabbObstacle, Obstacle, PlaneObstacle, SphereObstacle};
pub use query::{CollisionQuery, NoCollision};
pub use resolver::CollisionResolver;
pub use sweep::{OverlapContact, SphereSweep, SweepHit};
pub use world::{Collider, ObstacleWorld};
