//! Hyperwire - tesseract wireframe animation
//!
//! A real-time animation of a 4D hypercube rotating through all six 4D
//! rotation planes at once, projected to 2D and drawn as depth-faded white
//! edges. The geometry lives in `hyperwire_geom`, the wgpu presentation in
//! `hyperwire_render`; this crate holds the configuration layer and the
//! winit driver binary.

pub mod config;
