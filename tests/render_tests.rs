//! Tests for GPU vertex packing and the debug line view.

use glam::Vec3;
use verlet_rope::render::{DebugLines, GpuLineMesh, GpuRopeMesh, LineVertex, Vertex};
use verlet_rope::{Node, TubeMeshBuilder};

fn rope(count: usize) -> Vec<Node> {
    (0..count)
        .map(|i| Node::at_rest(Vec3::new(0.0, -0.1 * i as f32, 0.0)))
        .collect()
}

// ─── Vertex Packing ───────────────────────────────────────────

#[test]
fn vertex_sizes_match_layouts() {
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
    assert_eq!(Vertex::LAYOUT.array_stride, 24);
    assert_eq!(std::mem::size_of::<LineVertex>(), 28);
    assert_eq!(LineVertex::LAYOUT.array_stride, 28);
}

#[test]
fn vertices_interleave_positions_and_normals() {
    let mut builder = TubeMeshBuilder::new(6).unwrap();
    let mesh = builder.build(&rope(4), 0.05, Vec3::ZERO);
    let vertices = Vertex::from_geometry(mesh);

    assert_eq!(vertices.len(), mesh.vertex_count());
    for (i, v) in vertices.iter().enumerate() {
        assert_eq!(v.position, mesh.vertices[i].to_array());
        assert_eq!(v.normal, mesh.normals[i].to_array());
    }

    let bytes: &[u8] = bytemuck::cast_slice(&vertices);
    assert_eq!(bytes.len(), vertices.len() * 24);
}

#[test]
fn write_geometry_reuses_buffer() {
    let mut builder = TubeMeshBuilder::new(4).unwrap();
    let mut out = Vec::new();

    Vertex::write_geometry(builder.build(&rope(6), 0.05, Vec3::ZERO), &mut out);
    assert_eq!(out.len(), 24);

    Vertex::write_geometry(builder.build(&rope(3), 0.05, Vec3::ZERO), &mut out);
    assert_eq!(out.len(), 12);
}

// ─── Debug Lines ──────────────────────────────────────────────

#[test]
fn debug_lines_cover_nodes_segments_and_velocities() {
    let nodes = rope(5);
    let lines = DebugLines::from_rope(&nodes, &[], 0.05, Vec3::ZERO);

    // Three cross arms and one velocity line per node, one segment per pair.
    assert_eq!(lines.line_count(), 5 * 4 + 4);
    assert_eq!(lines.vertices.len(), lines.indices.len());
    assert!(lines
        .indices
        .iter()
        .all(|&i| (i as usize) < lines.vertices.len()));
}

#[test]
fn contact_nodes_are_highlighted() {
    let nodes = rope(3);
    let lines = DebugLines::from_rope(&nodes, &[false, true, false], 0.05, Vec3::ZERO);

    let white = [1.0, 1.0, 1.0, 1.0];
    let highlighted = lines.vertices.iter().filter(|v| v.color == white).count();
    // Both endpoints of node 1's velocity line.
    assert_eq!(highlighted, 2);
}

#[test]
fn debug_lines_are_relative_to_origin() {
    let origin = Vec3::new(2.0, 3.0, 4.0);
    let nodes: Vec<Node> = rope(2)
        .into_iter()
        .map(|n| Node::at_rest(n.position + origin))
        .collect();
    let lines = DebugLines::from_rope(&nodes, &[], 0.05, origin);

    // First cross arm of node 0 is centered on the local origin.
    let a = Vec3::from_array(lines.vertices[0].position);
    let b = Vec3::from_array(lines.vertices[1].position);
    assert!(((a + b) * 0.5).length() < 1e-5);
}

#[test]
fn clear_empties_the_view() {
    let mut lines = DebugLines::from_rope(&rope(4), &[], 0.05, Vec3::ZERO);
    lines.clear();
    assert_eq!(lines.line_count(), 0);
    assert!(lines.vertices.is_empty());
}

// ─── GPU Upload ───────────────────────────────────────────────

fn headless_device() -> Option<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::LowPower,
        compatible_surface: None,
        force_fallback_adapter: false,
    }))?;
    pollster::block_on(adapter.request_device(
        &wgpu::DeviceDescriptor {
            label: Some("Rope Test Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            memory_hints: wgpu::MemoryHints::default(),
        },
        None,
    ))
    .ok()
}

#[test]
#[ignore = "needs a GPU adapter"]
fn gpu_mesh_tracks_geometry_size() {
    let Some((device, queue)) = headless_device() else {
        eprintln!("no GPU adapter available, skipping");
        return;
    };

    let mut builder = TubeMeshBuilder::new(6).unwrap();
    let mut mesh = GpuRopeMesh::new(&device, builder.build(&rope(5), 0.05, Vec3::ZERO));
    assert_eq!(mesh.vertex_count(), 5 * 6);
    assert_eq!(mesh.index_count, 4 * 6 * 2 * 3);
    let first_size = mesh.vertex_buffer.size();

    // Same size: rewritten in place.
    mesh.update(&device, &queue, builder.build(&rope(5), 0.08, Vec3::ZERO));
    assert_eq!(mesh.vertex_buffer.size(), first_size);

    // More nodes: buffers are recreated.
    mesh.update(&device, &queue, builder.build(&rope(8), 0.05, Vec3::ZERO));
    assert_eq!(mesh.vertex_count(), 8 * 6);
    assert_eq!(mesh.index_count, 7 * 6 * 2 * 3);
    assert!(mesh.vertex_buffer.size() > first_size);

    let lines = DebugLines::from_rope(&rope(4), &[], 0.05, Vec3::ZERO);
    let gpu_lines = GpuLineMesh::new(&device, &lines);
    assert_eq!(gpu_lines.index_count as usize, lines.indices.len());

    queue.submit(std::iter::empty());
}
