//! W-depth edge fade
//!
//! Edges whose endpoints sit near w = 0 lie close to the viewer's current 4D
//! slice and draw fully opaque; edges far out along |w| fade toward a floor
//! opacity, never disappearing entirely.

use serde::{Deserialize, Serialize};

/// Opacity curve over the mean |w| of an edge's rotated endpoints
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepthFade {
    /// Minimum opacity for the most distant edges
    pub floor: f32,
    /// Mean |w| at which the fade saturates. 1.5 lets the achievable
    /// |w| range (up to ~2 for the unit tesseract) saturate smoothly
    /// instead of clipping harshly.
    pub w_normalizer: f32,
}

impl Default for DepthFade {
    fn default() -> Self {
        Self {
            floor: 0.25,
            w_normalizer: 1.5,
        }
    }
}

impl DepthFade {
    /// Opacity in [floor, 1] for an edge with the given mean |w|
    #[inline]
    pub fn alpha(&self, mean_abs_w: f32) -> f32 {
        self.floor + (1.0 - self.floor) * (1.0 - (mean_abs_w / self.w_normalizer).min(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_bounds() {
        let fade = DepthFade::default();
        assert_eq!(fade.alpha(0.0), 1.0);
        assert_eq!(fade.alpha(1.5), 0.25);
        // Saturates at the floor past the normalizer
        assert_eq!(fade.alpha(2.0), 0.25);
        assert_eq!(fade.alpha(100.0), 0.25);
    }

    #[test]
    fn test_alpha_in_range_for_any_depth() {
        let fade = DepthFade::default();
        for i in 0..200 {
            let a = fade.alpha(i as f32 * 0.05);
            assert!((0.25..=1.0).contains(&a));
        }
    }

    #[test]
    fn test_alpha_monotonically_non_increasing() {
        let fade = DepthFade::default();
        let mut prev = fade.alpha(0.0);
        for i in 1..200 {
            let a = fade.alpha(i as f32 * 0.05);
            assert!(a <= prev, "alpha increased at step {}", i);
            prev = a;
        }
    }

    #[test]
    fn test_midpoint() {
        // Halfway to the normalizer fades half the available range
        let fade = DepthFade::default();
        assert!((fade.alpha(0.75) - 0.625).abs() < 1e-6);
    }
}
