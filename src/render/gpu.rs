use wgpu::util::DeviceExt;

use super::debug::DebugLines;
use super::vertex::Vertex;
use crate::mesh::MeshGeometry;

/// GPU copy of the rope tube.
///
/// The index buffer is written once. [`update`](Self::update) only rewrites
/// vertex data unless the mesh size changed.
pub struct GpuRopeMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    vertex_count: usize,
    staging: Vec<Vertex>,
}

impl GpuRopeMesh {
    pub fn new(device: &wgpu::Device, geometry: &MeshGeometry) -> Self {
        let staging = Vertex::from_geometry(geometry);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Rope Vertex Buffer"),
            contents: bytemuck::cast_slice(&staging),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let indices = geometry.indices();
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Rope Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            vertex_count: geometry.vertex_count(),
            staging,
        }
    }

    pub fn update(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, geometry: &MeshGeometry) {
        if geometry.vertex_count() != self.vertex_count
            || geometry.indices().len() as u32 != self.index_count
        {
            log::debug!(
                "rope mesh resized to {} vertices, recreating buffers",
                geometry.vertex_count()
            );
            *self = Self::new(device, geometry);
            return;
        }

        Vertex::write_geometry(geometry, &mut self.staging);
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.staging));
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

/// GPU copy of a [`DebugLines`] set, drawn with a line-list topology.
pub struct GpuLineMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl GpuLineMesh {
    pub fn new(device: &wgpu::Device, lines: &DebugLines) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Rope Debug Vertex Buffer"),
            contents: bytemuck::cast_slice(&lines.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Rope Debug Index Buffer"),
            contents: bytemuck::cast_slice(&lines.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: lines.indices.len() as u32,
        }
    }
}
