//! Wireframe assembly - bridges the engine's frame output to GPU vertices
//!
//! This module walks the hypercube's cached edge list, derives each edge's
//! opacity from the W depth of its rotated endpoints, and expands every edge
//! into a screen-space quad. Quads rather than line primitives because wgpu
//! lines are fixed at one pixel and the animation draws wider strokes.

use hyperwire_geom::{DepthFade, Frame, Hypercube, Vec2};

use crate::pipeline::LineVertex;

/// Each edge expands to two triangles
pub const VERTICES_PER_EDGE: usize = 6;

/// Build the GPU vertices for every visible edge of the frame.
///
/// `color` is the stroke RGB; alpha comes from the fade curve per edge.
/// Edges that project to (nearly) a single point are skipped, since they
/// have no direction to expand a quad along.
pub fn edge_vertices(
    frame: &Frame,
    hypercube: &Hypercube,
    fade: &DepthFade,
    line_width: f32,
    color: [f32; 3],
) -> Vec<LineVertex> {
    let mut vertices = Vec::with_capacity(hypercube.edges().len() * VERTICES_PER_EDGE);

    for &(i, j) in hypercube.edges() {
        let mean_abs_w = 0.5 * (frame.rotated[i].w.abs() + frame.rotated[j].w.abs());
        let alpha = fade.alpha(mean_abs_w);
        let rgba = [color[0], color[1], color[2], alpha];

        push_quad(
            &mut vertices,
            frame.projected[i],
            frame.projected[j],
            line_width,
            rgba,
        );
    }

    vertices
}

/// Expand the segment a-b into a quad of the given pixel width
fn push_quad(out: &mut Vec<LineVertex>, a: Vec2, b: Vec2, width: f32, color: [f32; 4]) {
    let dir = b - a;
    let len = dir.length();
    if len < 1e-6 {
        return;
    }

    let normal = dir.perp() * (width * 0.5 / len);

    let a0 = a - normal;
    let a1 = a + normal;
    let b0 = b - normal;
    let b1 = b + normal;

    let v = |p: Vec2| LineVertex::new([p.x, p.y], color);
    out.push(v(a0));
    out.push(v(a1));
    out.push(v(b1));
    out.push(v(a0));
    out.push(v(b1));
    out.push(v(b0));
}
