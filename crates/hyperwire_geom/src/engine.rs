//! The animation engine
//!
//! Owns the canonical hypercube and the animation clock, and turns both into
//! per-frame rotated and projected vertex sets. Everything here is plain
//! arithmetic over fixed-size data, so the whole pipeline runs headless in
//! tests without any windowing dependency. Scheduling (when to advance, when
//! to redraw) belongs to the driver, not the engine.

use serde::{Deserialize, Serialize};

use crate::{
    hypercube::VERTEX_COUNT, DepthFade, Hypercube, PlaneAngles, Projection, Rotation4,
    SpinSchedule, Vec2, Vec4,
};

/// Immutable engine parameters, normally filled in from the app config
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineParams {
    /// Clock increment per tick
    pub time_step: f32,
    /// Angular schedule for the six rotation planes
    pub schedule: SpinSchedule,
    /// 4D-to-2D projection parameters
    pub projection: Projection,
    /// W-depth edge fade parameters
    pub fade: DepthFade,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            time_step: 0.03,
            schedule: SpinSchedule::default(),
            projection: Projection::default(),
            fade: DepthFade::default(),
        }
    }
}

/// One frame's worth of derived vertex data
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    /// Canonical vertices after the six plane rotations
    pub rotated: [Vec4; VERTEX_COUNT],
    /// Rotated vertices projected to surface pixel coordinates
    pub projected: [Vec2; VERTEX_COUNT],
}

/// The geometry engine: canonical vertices plus the monotonic clock.
///
/// The clock only ever moves forward, by a fixed step per [`advance`].
/// There is no wraparound; `t` grows for the life of the process.
///
/// [`advance`]: Engine::advance
pub struct Engine {
    hypercube: Hypercube,
    params: EngineParams,
    t: f32,
}

impl Engine {
    /// Create an engine over the unit tesseract
    pub fn new(params: EngineParams) -> Self {
        Self {
            hypercube: Hypercube::new(),
            params,
            t: 0.0,
        }
    }

    /// The canonical hypercube (vertex and edge lists)
    #[inline]
    pub fn hypercube(&self) -> &Hypercube {
        &self.hypercube
    }

    /// The fade curve used for edge opacity
    #[inline]
    pub fn fade(&self) -> &DepthFade {
        &self.params.fade
    }

    /// Current clock value
    #[inline]
    pub fn time(&self) -> f32 {
        self.t
    }

    /// Advance the clock by one fixed step.
    ///
    /// The caller is responsible for requesting a redraw afterward.
    pub fn advance(&mut self) {
        self.t += self.params.time_step;
    }

    /// Evaluate the current plane angles
    pub fn angles(&self) -> PlaneAngles {
        self.params.schedule.angles_at(self.t)
    }

    /// Rotate and project all vertices for a surface of the given pixel size.
    ///
    /// The same rotation is applied to every vertex (rigid-body motion); the
    /// projection reads the surface size so a resize simply flows through on
    /// the next frame.
    pub fn frame(&self, width: f32, height: f32) -> Frame {
        let rotation = Rotation4::from_angles(&self.angles());
        let vertices = self.hypercube.vertices();

        let rotated = std::array::from_fn(|i| rotation.apply(vertices[i]));
        let projected =
            std::array::from_fn(|i| self.params.projection.project(rotated[i], width, height));

        Frame { rotated, projected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_zero() {
        let engine = Engine::new(EngineParams::default());
        assert_eq!(engine.time(), 0.0);
    }

    #[test]
    fn test_clock_linearity() {
        // N single steps match one N*step jump
        let mut engine = Engine::new(EngineParams::default());
        for _ in 0..100 {
            engine.advance();
        }
        let expected = 100.0 * EngineParams::default().time_step;
        assert!((engine.time() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_clock_is_monotonic() {
        let mut engine = Engine::new(EngineParams::default());
        let mut prev = engine.time();
        for _ in 0..50 {
            engine.advance();
            assert!(engine.time() > prev);
            prev = engine.time();
        }
    }

    #[test]
    fn test_frame_preserves_vertex_norms() {
        let mut engine = Engine::new(EngineParams::default());
        for _ in 0..7 {
            engine.advance();
        }
        let frame = engine.frame(800.0, 600.0);
        for (orig, rot) in engine.hypercube().vertices().iter().zip(frame.rotated.iter()) {
            assert!((orig.length() - rot.length()).abs() < 1e-4);
        }
    }

    #[test]
    fn test_frame_projects_all_vertices() {
        let engine = Engine::new(EngineParams::default());
        let frame = engine.frame(800.0, 600.0);
        for p in &frame.projected {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }

    #[test]
    fn test_angles_follow_schedule() {
        let mut engine = Engine::new(EngineParams::default());
        engine.advance();
        let angles = engine.angles();
        let expected = EngineParams::default().schedule.angles_at(engine.time());
        assert_eq!(angles, expected);
    }
}
