//! GPU-compatible data types for the wireframe pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A vertex of an edge quad, in surface pixel coordinates
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in pixels; the vertex shader maps it to NDC
    pub position: [f32; 2],
    /// RGBA color with the edge's depth-fade alpha
    pub color: [f32; 4],
}

impl LineVertex {
    /// Create a new line vertex
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// Vertex buffer layout matching wire.wgsl's vs_main inputs
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
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

/// Uniforms for the pixel-to-NDC transform
/// Layout: 16 bytes total (must match wire.wgsl ScreenUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ScreenUniforms {
    /// Surface size in pixels (width, height)
    pub surface_size: [f32; 2],
    /// Padding to align to 16 bytes
    pub _padding: [f32; 2],
}

impl ScreenUniforms {
    /// Uniforms for a surface of the given pixel size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            surface_size: [width, height],
            _padding: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_vertex_is_tightly_packed() {
        // 2 position + 4 color floats, no implicit padding
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
    }

    #[test]
    fn test_screen_uniforms_are_16_bytes() {
        assert_eq!(std::mem::size_of::<ScreenUniforms>(), 16);
    }
}
