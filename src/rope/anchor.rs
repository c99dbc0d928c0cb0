use glam::Vec3;

use crate::math::Transform;

/// Supplies the world position node 0 is pinned to. Polled once per tick.
pub trait AnchorSource {
    fn world_position(&self) -> Vec3;
}

impl AnchorSource for Vec3 {
    fn world_position(&self) -> Vec3 {
        *self
    }
}

impl AnchorSource for Transform {
    fn world_position(&self) -> Vec3 {
        self.position
    }
}

impl<T: AnchorSource + ?Sized> AnchorSource for &T {
    fn world_position(&self) -> Vec3 {
        (**self).world_position()
    }
}
