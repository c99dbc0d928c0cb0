use glam::Vec3;

use super::config::RopeConfig;
use super::node::Node;
use crate::collision::{CollisionQuery, CollisionResolver};
use crate::error::{RopeError, RopeResult};

/// Segments shorter than this have no usable direction and are left alone.
const MIN_SEGMENT_LENGTH: f32 = 1e-6;

/// Verlet integration plus iterative distance relaxation over a node chain.
///
/// Node 0 is a hard pin: it is written to the anchor at the start of every
/// relaxation sweep and at the end of every substep, and never moved by
/// distance corrections or collision.
#[derive(Debug, Clone)]
pub struct ConstraintSolver {
    nodes: Vec<Node>,
    resolver: CollisionResolver,
    contact_flags: Vec<bool>,
}

impl ConstraintSolver {
    pub fn new(nodes: Vec<Node>) -> RopeResult<Self> {
        if nodes.len() < 2 {
            return Err(RopeError::TooFewNodes(nodes.len()));
        }
        let contact_flags = vec![false; nodes.len()];
        Ok(Self {
            nodes,
            resolver: CollisionResolver::new(),
            contact_flags,
        })
    }

    /// Straight rope hanging along -Y from `anchor`, at rest.
    pub fn hanging(anchor: Vec3, count: usize, rest_distance: f32) -> RopeResult<Self> {
        let nodes = (0..count)
            .map(|i| Node::at_rest(anchor - Vec3::Y * (rest_distance * i as f32)))
            .collect();
        Self::new(nodes)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.nodes.iter().map(|n| n.position)
    }

    /// Per node, whether its integration sweep hit something during the
    /// last step.
    pub fn contact_flags(&self) -> &[bool] {
        &self.contact_flags
    }

    pub fn segment_lengths(&self) -> impl Iterator<Item = f32> + '_ {
        self.nodes
            .windows(2)
            .map(|w| (w[0].position - w[1].position).length())
    }

    /// Largest deviation of any segment from `rest_distance`.
    pub fn max_segment_error(&self, rest_distance: f32) -> f32 {
        self.segment_lengths()
            .map(|len| (len - rest_distance).abs())
            .fold(0.0, f32::max)
    }

    /// Advances the chain by `dt`, split into `config.substeps` substeps.
    pub fn step<Q: CollisionQuery + ?Sized>(
        &mut self,
        config: &RopeConfig,
        anchor: Vec3,
        dt: f32,
        query: &Q,
    ) {
        if !(dt.is_finite() && dt > 0.0) {
            log::warn!("ignoring rope step with invalid dt {dt}");
            return;
        }

        self.contact_flags.fill(false);

        let substeps = config.substeps.max(1);
        let interval = config.collision_interval.max(1);
        let sub_dt = dt / substeps as f32;
        let rest_distance = config.rest_distance();

        for _ in 0..substeps {
            self.calculate_new_positions(config, sub_dt, query);

            for iteration in 0..config.constraint_iterations {
                self.fix_node_distances(anchor, rest_distance);

                if iteration % interval == 0 {
                    self.apply_collision(config, query);
                }
            }

            self.nodes[0].position = anchor;
        }
    }

    fn calculate_new_positions<Q: CollisionQuery + ?Sized>(
        &mut self,
        config: &RopeConfig,
        sub_dt: f32,
        query: &Q,
    ) {
        let gravity_step = config.gravity * (sub_dt * sub_dt);

        for (i, node) in self.nodes.iter_mut().enumerate() {
            let current = node.position;
            let mut next = 2.0 * current - node.previous_position + gravity_step;

            if let Some(hit) = self.resolver.query_sweep(
                query,
                current,
                next - current,
                config.radius,
                config.sweep_lookahead,
            ) {
                let target = hit.point + hit.normal * config.radius;
                log::trace!(
                    "node {i} sweep hit at {} (travel {:.4}), clamping to {target}",
                    hit.point,
                    hit.distance
                );
                next = current.lerp(target, config.penetration_damping);
                self.contact_flags[i] = true;
            }

            node.previous_position = current;
            node.position = next;
        }
    }

    fn fix_node_distances(&mut self, anchor: Vec3, rest_distance: f32) {
        self.nodes[0].position = anchor;

        // Walk from the free end toward the anchor so the anchor segment is
        // corrected last and holds exactly when the sweep ends.
        for i in (0..self.nodes.len() - 1).rev() {
            let delta = self.nodes[i].position - self.nodes[i + 1].position;
            let length = delta.length();
            if length < MIN_SEGMENT_LENGTH {
                log::trace!("segment {i} has zero length, skipping");
                continue;
            }

            let correction = delta * ((length - rest_distance) / length);
            if i == 0 {
                self.nodes[1].position += correction;
            } else {
                self.nodes[i].position -= correction * 0.5;
                self.nodes[i + 1].position += correction * 0.5;
            }
        }
    }

    fn apply_collision<Q: CollisionQuery + ?Sized>(&mut self, config: &RopeConfig, query: &Q) {
        for node in self.nodes.iter_mut().skip(1) {
            node.position = self.resolver.resolve_penetrations(
                query,
                node.position,
                config.radius,
                config.separation_bias,
            );
        }
    }
}
