use glam::Vec3;
use std::f32::consts::TAU;

use super::geometry::MeshGeometry;
use crate::error::{RopeError, RopeResult};
use crate::rope::Node;

/// Sweeps a regular polygon along the node chain.
///
/// Triangle indices depend only on node count and side count, so they are
/// built on the first call and reused until the node count changes. Every
/// call rewrites vertex positions and normals.
#[derive(Debug, Clone)]
pub struct TubeMeshBuilder {
    sides: u32,
    geometry: MeshGeometry,
    topology_nodes: Option<usize>,
}

impl TubeMeshBuilder {
    pub fn new(sides: u32) -> RopeResult<Self> {
        if sides < 3 {
            return Err(RopeError::InvalidSides(sides));
        }
        Ok(Self {
            sides,
            geometry: MeshGeometry::default(),
            topology_nodes: None,
        })
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn geometry(&self) -> &MeshGeometry {
        &self.geometry
    }

    /// Rebuilds the tube around `nodes`, with positions relative to
    /// `origin`.
    pub fn build(&mut self, nodes: &[Node], radius: f32, origin: Vec3) -> &MeshGeometry {
        self.compute_vertices(nodes, radius, origin);

        if self.topology_nodes != Some(nodes.len()) {
            self.compute_triangles(nodes.len());
            self.topology_nodes = Some(nodes.len());
        }

        &self.geometry
    }

    fn compute_vertices(&mut self, nodes: &[Node], radius: f32, origin: Vec3) {
        let sides = self.sides as usize;
        let angle_step = TAU / sides as f32;
        let vertices = &mut self.geometry.vertices;
        let normals = &mut self.geometry.normals;
        vertices.clear();
        normals.clear();
        vertices.reserve(nodes.len() * sides);
        normals.reserve(nodes.len() * sides);

        let mut last_tangent = Vec3::NEG_Y;
        for i in 0..nodes.len() {
            let prev = nodes[i.saturating_sub(1)].position;
            let next = nodes[(i + 1).min(nodes.len() - 1)].position;
            let tangent = match (next - prev).try_normalize() {
                Some(t) => {
                    last_tangent = t;
                    t
                }
                None => {
                    log::trace!("node {i} has no tangent, reusing {last_tangent}");
                    last_tangent
                }
            };

            let (u, v) = ring_frame(tangent);
            let center = nodes[i].position - origin;
            for side in 0..sides {
                let angle = angle_step * side as f32;
                let radial = u * angle.cos() + v * angle.sin();
                vertices.push(center + radial * radius);
                normals.push(radial);
            }
        }
    }

    fn compute_triangles(&mut self, node_count: usize) {
        let s = self.sides;
        let rings = node_count.saturating_sub(1) as u32;
        let triangles = &mut self.geometry.triangles;
        triangles.clear();
        triangles.reserve((rings * s * 2) as usize);

        for ring in 0..rings {
            for side in 0..s {
                let a = ring * s + side;
                let b = ring * s + (side + 1) % s;
                triangles.push([a, a + s, b + s]);
                triangles.push([a, b + s, b]);
            }
        }
    }
}

/// Orthonormal in-plane axes `(u, v)` for a ring whose normal is `tangent`.
///
/// `u = tangent x Z` and `v = u x tangent`, with X as the reference when the
/// tangent is parallel to Z. `tangent` must be unit length.
pub fn ring_frame(tangent: Vec3) -> (Vec3, Vec3) {
    let reference = if tangent.cross(Vec3::Z).length_squared() < 1e-6 {
        Vec3::X
    } else {
        Vec3::Z
    };
    let u = tangent.cross(reference).normalize();
    let v = u.cross(tangent).normalize();
    (u, v)
}
