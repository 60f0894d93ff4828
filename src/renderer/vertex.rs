//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
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
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const ARENA_FIELD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const ARENA_BORDER: [f32; 4] = [0.231, 0.510, 0.965, 1.0]; // blue-500

    pub const PENGUIN_BODY: [f32; 4] = [0.10, 0.12, 0.18, 1.0];
    pub const PENGUIN_BELLY: [f32; 4] = [0.97, 0.97, 0.95, 1.0];
    pub const PENGUIN_BEAK: [f32; 4] = [1.0, 0.62, 0.10, 1.0];

    pub const PIG_SKIN: [f32; 4] = [1.0, 0.70, 0.78, 1.0];
    pub const PIG_SNOUT: [f32; 4] = [0.95, 0.50, 0.62, 1.0];
    pub const PIG_EAR: [f32; 4] = [0.92, 0.48, 0.60, 1.0];

    pub const EYE_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const EYE_PUPIL: [f32; 4] = [0.05, 0.05, 0.08, 1.0];

    pub const BURST_OUTER: [f32; 4] = [1.0, 0.45, 0.10, 1.0];
    pub const BURST_INNER: [f32; 4] = [1.0, 0.88, 0.25, 1.0];

    /// Clear color behind the arena (page background, blue-100)
    pub const BACKGROUND: [f32; 4] = [0.859, 0.918, 0.996, 1.0];
}
