//! Line-list view of the simulation state.
//!
//! Draws each node as a small cross, the chain segments between nodes and a
//! velocity line from every node back to its previous position. Velocity
//! lines of nodes whose sweep hit geometry this tick are highlighted.

use glam::Vec3;

use super::vertex::LineVertex;
use crate::rope::Node;

const NODE_COLOR: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
const SEGMENT_COLOR: [f32; 4] = [0.2, 0.8, 0.2, 1.0];
const VELOCITY_COLOR: [f32; 4] = [0.3, 0.5, 0.9, 1.0];
const CONTACT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

#[derive(Debug, Clone, Default)]
pub struct DebugLines {
    pub vertices: Vec<LineVertex>,
    pub indices: Vec<u32>,
}

impl DebugLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the view for `nodes`, relative to `origin`. `contacts` is
    /// indexed like `nodes`; missing entries count as no contact.
    pub fn from_rope(nodes: &[Node], contacts: &[bool], radius: f32, origin: Vec3) -> Self {
        let mut lines = Self::new();

        for (i, node) in nodes.iter().enumerate() {
            let p = node.position - origin;
            for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
                lines.push_line(p - axis * radius, p + axis * radius, NODE_COLOR);
            }

            if let Some(next) = nodes.get(i + 1) {
                lines.push_line(p, next.position - origin, SEGMENT_COLOR);
            }

            let color = if contacts.get(i).copied().unwrap_or(false) {
                CONTACT_COLOR
            } else {
                VELOCITY_COLOR
            };
            lines.push_line(p, node.previous_position - origin, color);
        }

        lines
    }

    pub fn push_line(&mut self, from: Vec3, to: Vec3, color: [f32; 4]) {
        let base = self.vertices.len() as u32;
        self.vertices.push(LineVertex {
            position: from.to_array(),
            color,
        });
        self.vertices.push(LineVertex {
            position: to.to_array(),
            color,
        });
        self.indices.extend([base, base + 1]);
    }

    pub fn line_count(&self) -> usize {
        self.indices.len() / 2
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}
