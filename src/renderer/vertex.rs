//! Vertex types for 3D rendering

use bytemuck::{Pod, Zeroable};

/// World-space vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, z],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 0.93, 0.86, 1.0];
    pub const GROUND: [f32; 4] = [0.59, 0.29, 0.0, 1.0];
    pub const PLAYER: [f32; 4] = [0.0, 0.416, 0.306, 1.0];
    pub const GROUND_HAZARD: [f32; 4] = [0.0, 0.588, 0.596, 1.0];
    pub const FLYING_HAZARD: [f32; 4] = [0.604, 0.804, 0.196, 1.0];
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const COLLECTIBLE: [f32; 4] = [0.95, 0.78, 0.2, 1.0];
}
