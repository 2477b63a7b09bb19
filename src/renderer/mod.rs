//! WebGPU rendering module
//!
//! One pipeline, two static vertex buffers, one draw call per entity.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, RendererError};
