//! 4D-to-2D perspective projection
//!
//! The W coordinate plays the role of depth into the fourth dimension: each
//! rotated vertex is scaled by `distance / (distance - w)` before being
//! centered on the drawing surface. A small linear Z-dependent shift is then
//! added to both screen coordinates to give the flat projection a faux-3D
//! parallax skew.

use serde::{Deserialize, Serialize};

use crate::{Vec2, Vec4};

/// Projection parameters.
///
/// Invariant: `distance` must stay strictly greater than the maximum |w| a
/// rotated vertex can reach (2.0 for the unit tesseract, whose corners sit at
/// distance 2 from the origin). Violating it drives `distance - w` toward
/// zero and blows up the projected coordinates; that degrades the picture but
/// never corrupts state, so it is documented rather than checked per frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Perspective distance along W
    pub distance: f32,
    /// The figure spans min(width, height) / scale_divisor pixels per unit
    pub scale_divisor: f32,
    /// Strength of the Z-dependent parallax shift
    pub z_shift_factor: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            distance: 2.2,
            scale_divisor: 4.0,
            z_shift_factor: 0.15,
        }
    }
}

impl Projection {
    /// Project a rotated vertex onto a surface of the given pixel dimensions.
    ///
    /// The Y coordinate receives the Z shift scaled by `z_shift_factor` a
    /// second time. That asymmetry with X is intentional: it is the literal
    /// golden behavior of the animation and is kept bit-for-bit.
    pub fn project(&self, v: Vec4, width: f32, height: f32) -> Vec2 {
        let factor = self.distance / (self.distance - v.w);

        // Tie the on-screen size to the smaller window dimension so the
        // figure never outgrows the surface
        let scale = width.min(height) / self.scale_divisor;

        let x = v.x * factor * scale + width / 2.0;
        let y = v.y * factor * scale + height / 2.0;

        let z_shift = v.z * scale * self.z_shift_factor;
        Vec2::new(x + z_shift, y + z_shift * self.z_shift_factor)
    }
}
