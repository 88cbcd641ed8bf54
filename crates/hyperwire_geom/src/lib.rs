//! Tesseract Geometry Library
//!
//! This crate provides the windowing-free geometry pipeline for the hyperwire
//! animation: the canonical hypercube, the six-plane rotation schedule, the
//! W-perspective projection and the depth-based edge fade.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec2`] - projected screen-space point
//! - [`Hypercube`] - the 16 canonical vertices and the derived 32-edge list
//! - [`SpinSchedule`] / [`Rotation4`] - per-plane angle schedule and its
//!   evaluated rotation
//! - [`Projection`] - 4D-to-2D perspective projection
//! - [`DepthFade`] - W-depth to edge opacity curve
//! - [`Engine`] - clock-owning pipeline driver, one frame at a time

mod vec2;
mod vec4;
pub mod engine;
pub mod fade;
pub mod hypercube;
pub mod projection;
pub mod rotation;

pub use engine::{Engine, EngineParams, Frame};
pub use fade::DepthFade;
pub use hypercube::{Hypercube, EDGE_COUNT, VERTEX_COUNT};
pub use projection::Projection;
pub use rotation::{PlaneAngles, PlaneRate, Rotation4, SpinSchedule};
pub use vec2::Vec2;
pub use vec4::Vec4;
