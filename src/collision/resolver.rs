use glam::Vec3;

use super::query::CollisionQuery;
use super::sweep::{OverlapContact, SweepHit};

/// Per-node collision handling on top of a [`CollisionQuery`].
///
/// Holds the overlap scratch buffer so resolving a whole rope does not
/// allocate once the buffer has grown to the busiest node's contact count.
#[derive(Debug, Default, Clone)]
pub struct CollisionResolver {
    contacts: Vec<OverlapContact>,
}

impl CollisionResolver {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// Sweeps the probe along `displacement`, looking `lookahead` times the
    /// displacement length ahead.
    pub fn query_sweep<Q: CollisionQuery + ?Sized>(
        &self,
        query: &Q,
        origin: Vec3,
        displacement: Vec3,
        radius: f32,
        lookahead: f32,
    ) -> Option<SweepHit> {
        let length = displacement.length();
        if length < 1e-7 {
            return None;
        }
        query.sweep(origin, displacement / length, radius, length * lookahead)
    }

    /// Pushes `position` out of every solid obstacle closer than `radius`.
    ///
    /// Contacts are applied in query order, each against the position left
    /// by the previous one. The push is the penetration depth scaled by
    /// `bias`, so the probe ends strictly outside rather than tangent.
    pub fn resolve_penetrations<Q: CollisionQuery + ?Sized>(
        &mut self,
        query: &Q,
        position: Vec3,
        radius: f32,
        bias: f32,
    ) -> Vec3 {
        self.contacts.clear();
        query.overlap(position, radius, &mut self.contacts);

        let mut result = position;
        for contact in self.contacts.iter().filter(|c| !c.is_trigger) {
            let separation = (result - contact.contact_point).dot(contact.normal);
            let depth = radius - separation;
            if depth > 0.0 {
                result += contact.normal * (depth * bias);
            }
        }
        result
    }

    /// Contacts gathered by the last [`resolve_penetrations`] call.
    ///
    /// [`resolve_penetrations`]: Self::resolve_penetrations
    pub fn last_contacts(&self) -> &[OverlapContact] {
        &self.contacts
    }
}
