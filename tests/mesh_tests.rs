//! Integration tests for tube mesh generation.

use glam::Vec3;
use verlet_rope::{Node, TubeMeshBuilder};

fn hanging(count: usize, spacing: f32) -> Vec<Node> {
    (0..count)
        .map(|i| Node::at_rest(Vec3::new(0.0, -spacing * i as f32, 0.0)))
        .collect()
}

fn curved(count: usize) -> Vec<Node> {
    (0..count)
        .map(|i| {
            let t = i as f32 * 0.3;
            Node::at_rest(Vec3::new(t.sin(), -t, t.cos() * 0.5))
        })
        .collect()
}

// ─── Counts & Topology ────────────────────────────────────────

#[test]
fn vertex_and_triangle_counts() {
    let mut builder = TubeMeshBuilder::new(6).unwrap();
    let mesh = builder.build(&hanging(10, 0.1), 0.05, Vec3::ZERO);
    assert_eq!(mesh.vertex_count(), 10 * 6);
    assert_eq!(mesh.normals.len(), 10 * 6);
    assert_eq!(mesh.triangle_count(), 9 * 6 * 2);
    assert_eq!(mesh.indices().len(), 9 * 6 * 2 * 3);
}

#[test]
fn topology_is_stable_across_builds() {
    let mut builder = TubeMeshBuilder::new(8).unwrap();
    let first = builder.build(&hanging(12, 0.1), 0.05, Vec3::ZERO).clone();
    let second = builder.build(&curved(12), 0.05, Vec3::ZERO).clone();

    assert_eq!(first.triangles, second.triangles);
    assert_eq!(second.vertex_count(), 12 * 8);
    assert_ne!(first.vertices, second.vertices);
}

#[test]
fn topology_follows_node_count_changes() {
    let mut builder = TubeMeshBuilder::new(4).unwrap();
    builder.build(&hanging(5, 0.1), 0.05, Vec3::ZERO);
    let mesh = builder.build(&hanging(7, 0.1), 0.05, Vec3::ZERO);
    assert_eq!(mesh.triangle_count(), 6 * 4 * 2);
}

#[test]
fn indices_stay_in_range() {
    let mut builder = TubeMeshBuilder::new(5).unwrap();
    let mesh = builder.build(&curved(9), 0.1, Vec3::ZERO);
    let count = mesh.vertex_count() as u32;
    assert!(mesh.indices().iter().all(|&i| i < count));
}

#[test]
fn rings_wrap_without_seam() {
    let sides = 6;
    let mut builder = TubeMeshBuilder::new(sides).unwrap();
    let mesh = builder.build(&hanging(3, 0.1), 0.05, Vec3::ZERO);

    // The last side of ring 0 connects back to vertex 0 of ring 0 and
    // vertex 0 of ring 1.
    let last_side = (sides as usize - 1) * 2;
    assert_eq!(mesh.triangles[last_side], [5, 11, 6]);
    assert_eq!(mesh.triangles[last_side + 1], [5, 6, 0]);
}

#[test]
fn triangles_face_outward() {
    let mut builder = TubeMeshBuilder::new(8).unwrap();
    let mesh = builder.build(&hanging(6, 0.2), 0.1, Vec3::ZERO);

    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangles[t].map(|i| mesh.vertices[i as usize]);
        let centroid = (a + b + c) / 3.0;
        let outward = Vec3::new(centroid.x, 0.0, centroid.z);
        assert!(
            mesh.triangle_normal(t).dot(outward) > 0.0,
            "triangle {t} faces inward"
        );
    }
}

// ─── Vertex Placement ─────────────────────────────────────────

#[test]
fn ring_vertices_sit_on_radius() {
    let nodes = curved(8);
    let mut builder = TubeMeshBuilder::new(7).unwrap();
    let mesh = builder.build(&nodes, 0.08, Vec3::ZERO);

    for (i, vertex) in mesh.vertices.iter().enumerate() {
        let center = nodes[i / 7].position;
        assert!(((*vertex - center).length() - 0.08).abs() < 1e-5);
        assert!((mesh.normals[i].length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn ring_plane_is_perpendicular_to_tangent() {
    let nodes = hanging(4, 0.25);
    let mut builder = TubeMeshBuilder::new(6).unwrap();
    let mesh = builder.build(&nodes, 0.1, Vec3::ZERO);

    for (i, normal) in mesh.normals.iter().enumerate() {
        assert!(normal.dot(Vec3::Y).abs() < 1e-5, "vertex {i}");
    }
}

#[test]
fn vertices_are_relative_to_origin() {
    let origin = Vec3::new(3.0, 2.0, -1.0);
    let nodes: Vec<Node> = hanging(5, 0.1)
        .into_iter()
        .map(|n| Node::at_rest(n.position + origin))
        .collect();

    let mut builder = TubeMeshBuilder::new(4).unwrap();
    let mesh = builder.build(&nodes, 0.05, origin);

    let ring0 = mesh.vertices[..4].iter().copied().sum::<Vec3>() / 4.0;
    assert!(ring0.length() < 1e-5, "ring0 center {ring0}");
    let (min, max) = mesh.bounds().unwrap();
    // Rings of a vertical rope are horizontal discs.
    assert!((min.y + 0.4).abs() < 1e-5 && max.y.abs() < 1e-5);
    assert!((max.x - 0.05).abs() < 1e-5);
}

// ─── Degenerate Frames ────────────────────────────────────────

#[test]
fn tangent_along_reference_axis_uses_fallback() {
    let nodes: Vec<Node> = (0..4)
        .map(|i| Node::at_rest(Vec3::new(0.0, 0.0, 0.1 * i as f32)))
        .collect();
    let mut builder = TubeMeshBuilder::new(6).unwrap();
    let mesh = builder.build(&nodes, 0.05, Vec3::ZERO);

    assert!(mesh.vertices.iter().all(|v| v.is_finite()));
    for (i, vertex) in mesh.vertices.iter().enumerate() {
        let center = nodes[i / 6].position;
        assert!(((*vertex - center).length() - 0.05).abs() < 1e-5);
    }
}

#[test]
fn coincident_nodes_produce_finite_rings() {
    let nodes = vec![
        Node::at_rest(Vec3::ZERO),
        Node::at_rest(Vec3::ZERO),
        Node::at_rest(Vec3::new(0.0, -0.1, 0.0)),
    ];
    let mut builder = TubeMeshBuilder::new(5).unwrap();
    let mesh = builder.build(&nodes, 0.05, Vec3::ZERO);
    assert!(mesh.vertices.iter().all(|v| v.is_finite()));
    assert!(mesh.normals.iter().all(|n| n.is_finite()));
}
