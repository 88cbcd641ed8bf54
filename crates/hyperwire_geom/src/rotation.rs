//! Six-plane rotation in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, YZ, XW, YW, ZW. Each frame evaluates
//! one angle per plane from an affine schedule over the animation clock, and
//! the six plane rotations are applied sequentially in a fixed order.
//!
//! The order matters: rotations in non-commuting planes compose differently
//! under a different order, so it is always XY, XZ, YZ, XW, YW, ZW.

use serde::{Deserialize, Serialize};

use crate::Vec4;

/// Angular schedule for one rotation plane: angle(t) = rate * t + phase
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaneRate {
    /// Angular rate in radians per clock unit
    pub rate: f32,
    /// Phase offset in radians
    pub phase: f32,
}

impl PlaneRate {
    /// Create a new schedule entry
    pub const fn new(rate: f32, phase: f32) -> Self {
        Self { rate, phase }
    }

    /// Evaluate the angle at clock value t
    #[inline]
    pub fn angle_at(&self, t: f32) -> f32 {
        self.rate * t + self.phase
    }
}

/// Per-plane angular schedule for the whole tesseract.
///
/// The defaults keep the six planes deliberately out of phase: XY has zero
/// phase, every other plane a distinct nonzero one, so the motion tumbles
/// instead of spinning periodically.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinSchedule {
    pub xy: PlaneRate,
    pub xz: PlaneRate,
    pub yz: PlaneRate,
    pub xw: PlaneRate,
    pub yw: PlaneRate,
    pub zw: PlaneRate,
}

impl Default for SpinSchedule {
    fn default() -> Self {
        Self {
            xy: PlaneRate::new(0.7, 0.0),
            xz: PlaneRate::new(0.5, 0.8),
            yz: PlaneRate::new(0.6, 1.6),
            xw: PlaneRate::new(0.9, 0.3),
            yw: PlaneRate::new(0.4, 2.1),
            zw: PlaneRate::new(0.8, 0.5),
        }
    }
}

impl SpinSchedule {
    /// Evaluate all six plane angles at clock value t
    pub fn angles_at(&self, t: f32) -> PlaneAngles {
        PlaneAngles {
            xy: self.xy.angle_at(t),
            xz: self.xz.angle_at(t),
            yz: self.yz.angle_at(t),
            xw: self.xw.angle_at(t),
            yw: self.yw.angle_at(t),
            zw: self.zw.angle_at(t),
        }
    }
}

/// The six evaluated plane angles for one frame, in radians
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaneAngles {
    pub xy: f32,
    pub xz: f32,
    pub yz: f32,
    pub xw: f32,
    pub yw: f32,
    pub zw: f32,
}

impl PlaneAngles {
    /// All angles zero (identity rotation)
    pub const ZERO: Self = Self {
        xy: 0.0,
        xz: 0.0,
        yz: 0.0,
        xw: 0.0,
        yw: 0.0,
        zw: 0.0,
    };
}

/// Precomputed (cos, sin) for one plane rotation
#[derive(Clone, Copy, Debug)]
struct PlaneTurn {
    cos: f32,
    sin: f32,
}

impl PlaneTurn {
    fn from_angle(angle: f32) -> Self {
        Self {
            cos: angle.cos(),
            sin: angle.sin(),
        }
    }
}

/// Standard 2D rotation of the (a, b) coordinate pair
#[inline]
fn rotate_plane(a: &mut f32, b: &mut f32, turn: PlaneTurn) {
    let na = *a * turn.cos - *b * turn.sin;
    let nb = *a * turn.sin + *b * turn.cos;
    *a = na;
    *b = nb;
}

/// A frame's full 4D rotation: six plane rotations with the trigonometry
/// evaluated once, applied to every vertex of the frame (rigid-body motion).
#[derive(Clone, Copy, Debug)]
pub struct Rotation4 {
    xy: PlaneTurn,
    xz: PlaneTurn,
    yz: PlaneTurn,
    xw: PlaneTurn,
    yw: PlaneTurn,
    zw: PlaneTurn,
}

impl Rotation4 {
    /// Build the rotation from evaluated plane angles
    pub fn from_angles(angles: &PlaneAngles) -> Self {
        Self {
            xy: PlaneTurn::from_angle(angles.xy),
            xz: PlaneTurn::from_angle(angles.xz),
            yz: PlaneTurn::from_angle(angles.yz),
            xw: PlaneTurn::from_angle(angles.xw),
            yw: PlaneTurn::from_angle(angles.yw),
            zw: PlaneTurn::from_angle(angles.zw),
        }
    }

    /// Apply the six plane rotations in order XY, XZ, YZ, XW, YW, ZW.
    ///
    /// Each rotation operates on the coordinates as updated by the previous
    /// one. Every plane rotation is orthogonal, so the 4D norm is preserved.
    pub fn apply(&self, v: Vec4) -> Vec4 {
        let (mut x, mut y, mut z, mut w) = (v.x, v.y, v.z, v.w);
        rotate_plane(&mut x, &mut y, self.xy);
        rotate_plane(&mut x, &mut z, self.xz);
        rotate_plane(&mut y, &mut z, self.yz);
        rotate_plane(&mut x, &mut w, self.xw);
        rotate_plane(&mut y, &mut w, self.yw);
        rotate_plane(&mut z, &mut w, self.zw);
        Vec4::new(x, y, z, w)
    }

    /// Invert the rotation: each plane rotated by the negated angle, applied
    /// in reverse order ZW, YW, XW, YZ, XZ, XY.
    pub fn unapply(&self, v: Vec4) -> Vec4 {
        let inv = |t: PlaneTurn| PlaneTurn { cos: t.cos, sin: -t.sin };
        let (mut x, mut y, mut z, mut w) = (v.x, v.y, v.z, v.w);
        rotate_plane(&mut z, &mut w, inv(self.zw));
        rotate_plane(&mut y, &mut w, inv(self.yw));
        rotate_plane(&mut x, &mut w, inv(self.xw));
        rotate_plane(&mut y, &mut z, inv(self.yz));
        rotate_plane(&mut x, &mut z, inv(self.xz));
        rotate_plane(&mut x, &mut y, inv(self.xy));
        Vec4::new(x, y, z, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_vec4_near(a: Vec4, b: Vec4) {
        assert!((a.x - b.x).abs() < EPSILON, "{:?} != {:?}", a, b);
        assert!((a.y - b.y).abs() < EPSILON, "{:?} != {:?}", a, b);
        assert!((a.z - b.z).abs() < EPSILON, "{:?} != {:?}", a, b);
        assert!((a.w - b.w).abs() < EPSILON, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_plane_rate_is_affine() {
        let r = PlaneRate::new(0.5, 0.8);
        assert_eq!(r.angle_at(0.0), 0.8);
        assert_eq!(r.angle_at(2.0), 1.8);
    }

    #[test]
    fn test_default_schedule_phases() {
        // XY is in phase with the clock, all other planes drift
        let s = SpinSchedule::default();
        assert_eq!(s.xy.phase, 0.0);
        for plane in [s.xz, s.yz, s.xw, s.yw, s.zw] {
            assert!(plane.phase != 0.0);
        }
    }

    #[test]
    fn test_identity_rotation() {
        let rot = Rotation4::from_angles(&PlaneAngles::ZERO);
        let v = Vec4::new(1.0, -1.0, 1.0, -1.0);
        assert_vec4_near(rot.apply(v), v);
    }

    #[test]
    fn test_single_plane_quarter_turn() {
        // 90° in XY maps +X to +Y and leaves z, w alone
        let angles = PlaneAngles {
            xy: std::f32::consts::FRAC_PI_2,
            ..PlaneAngles::ZERO
        };
        let rot = Rotation4::from_angles(&angles);
        let v = rot.apply(Vec4::new(1.0, 0.0, 0.5, -0.5));
        assert_vec4_near(v, Vec4::new(0.0, 1.0, 0.5, -0.5));
    }

    #[test]
    fn test_rotation_preserves_norm() {
        let angles = SpinSchedule::default().angles_at(12.7);
        let rot = Rotation4::from_angles(&angles);
        let v = Vec4::new(1.0, -1.0, -1.0, 1.0);
        let rotated = rot.apply(v);
        assert!((rotated.length() - v.length()).abs() < EPSILON);
    }

    #[test]
    fn test_unapply_inverts_apply() {
        let angles = SpinSchedule::default().angles_at(3.21);
        let rot = Rotation4::from_angles(&angles);
        let v = Vec4::new(-1.0, 1.0, 1.0, -1.0);
        assert_vec4_near(rot.unapply(rot.apply(v)), v);
    }

    #[test]
    fn test_order_is_not_commutative() {
        // Applying in the reverse order with the same angles must differ,
        // otherwise unapply's ordering would be meaningless
        let angles = PlaneAngles {
            xy: 0.7,
            xw: 1.1,
            ..PlaneAngles::ZERO
        };
        let rot = Rotation4::from_angles(&angles);
        let v = Vec4::new(1.0, 1.0, 1.0, 1.0);

        let forward = rot.apply(v);

        // Reverse order, same (positive) angles
        let mut x = v.x;
        let mut y = v.y;
        let mut w = v.w;
        rotate_plane(&mut x, &mut w, PlaneTurn::from_angle(1.1));
        rotate_plane(&mut x, &mut y, PlaneTurn::from_angle(0.7));
        let reversed = Vec4::new(x, y, v.z, w);

        assert!((forward - reversed).length() > 1e-3);
    }
}
