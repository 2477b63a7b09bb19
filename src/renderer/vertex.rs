//! Vertex type for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D position vertex. Translation, scale and color arrive per draw call
/// through the uniform buffer instead of per vertex.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const PLAYER: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const SPIKE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Alternative spike color for the high-contrast setting
    pub const SPIKE_HIGH_CONTRAST: [f32; 4] = [1.0, 0.85, 0.1, 1.0];
    pub const BACKGROUND: wgpu::Color = wgpu::Color {
        r: 0.5,
        g: 0.5,
        b: 0.5,
        a: 1.0,
    };
}
