//! Wireframe Rendering Library
//!
//! wgpu-based presentation for the hyperwire animation: surface management
//! and an alpha-blended 2D line pipeline fed from the geometry engine's
//! per-frame output.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::WirePipeline`] - alpha-blended edge rendering over a cleared
//!   background
//! - [`wireframe`] - converts an engine [`Frame`](hyperwire_geom::Frame) into
//!   GPU line vertices

pub mod context;
pub mod pipeline;
pub mod wireframe;

pub use context::RenderContext;
pub use pipeline::{LineVertex, WirePipeline};
pub use wireframe::edge_vertices;
