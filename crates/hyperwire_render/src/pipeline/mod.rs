//! Rendering pipeline for the projected wireframe

mod types;
mod wire_pipeline;

pub use types::{LineVertex, ScreenUniforms};
pub use wire_pipeline::WirePipeline;
