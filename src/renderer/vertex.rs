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
    /// Logo halves
    pub const GREEN: [f32; 4] = [0.486, 0.702, 0.259, 1.0]; // #7CB342
    pub const BLUE: [f32; 4] = [0.082, 0.396, 0.753, 1.0]; // #1565C0
    /// Ball, bullets, countdown
    pub const RED_DOT: [f32; 4] = [0.827, 0.184, 0.184, 1.0]; // #D32F2F
    pub const GOLD: [f32; 4] = [1.0, 0.843, 0.0, 1.0]; // #FFD700
    pub const TEXT: [f32; 4] = [0.118, 0.161, 0.231, 1.0]; // #1E293B
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HIGHLIGHT: [f32; 4] = [1.0, 1.0, 1.0, 0.3];

    // Money
    pub const DOLLAR: [f32; 4] = [0.42, 0.67, 0.36, 1.0];
    pub const YUAN: [f32; 4] = [0.85, 0.38, 0.32, 1.0];
    pub const NOTE_BAND: [f32; 4] = [1.0, 1.0, 1.0, 0.6];
    pub const BAG: [f32; 4] = [0.62, 0.45, 0.25, 1.0];
    pub const GEM: [f32; 4] = [0.45, 0.85, 0.95, 1.0];
}
