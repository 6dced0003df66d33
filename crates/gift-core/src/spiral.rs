//! Rising light spiral: an ordered point cloud revealed base-to-tip.

use crate::anim::{approach, FrameTick};
use crate::constants::*;
use crate::math::{smoothstep, spiral_points};
use crate::phase::{Intent, Phase};
use glam::Vec3;

/// Spiral point cloud plus the reveal-progress scalar that gates how many
/// points are lit. The cloud itself is generated once and never changes;
/// only `progress` and the slow rotation animate.
pub struct SpiralLight {
    points: Vec<Vec3>,
    progress: f32,
    rotation_y: f32,
}

impl Default for SpiralLight {
    fn default() -> Self {
        Self::new()
    }
}

impl SpiralLight {
    pub fn new() -> Self {
        Self {
            points: spiral_points(
                SPIRAL_TURNS,
                SPIRAL_HEIGHT,
                SPIRAL_POINTS_PER_TURN,
                SPIRAL_RADIUS_MAX,
            ),
            progress: 0.0,
            rotation_y: 0.0,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }
    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Step the reveal. Two edges live here: entering `Activating` the
    /// entity itself requests the step to `LightingUp`, and once the
    /// pre-update progress clears the completion threshold in `LightingUp`
    /// it requests `Opening`. Both fire once because the phase has moved by
    /// the next tick.
    pub fn update(&mut self, tick: &FrameTick) -> Option<Intent> {
        // The spiral spins regardless of phase.
        self.rotation_y += tick.delta * SPIRAL_SPIN_RATE;

        match tick.phase {
            Phase::Activating | Phase::LightingUp => {
                let before = self.progress;
                self.progress = approach(
                    self.progress,
                    SPIRAL_PROGRESS_TARGET,
                    SPIRAL_PROGRESS_RATE,
                    tick.delta,
                );
                if tick.phase == Phase::Activating {
                    return Some(Intent::Advance);
                }
                if before > SPIRAL_COMPLETE_THRESHOLD {
                    return Some(Intent::Advance);
                }
                None
            }
            // Hard reset, not a lerp: the spiral must be dark the instant
            // the scene is idle again.
            Phase::Idle => {
                self.progress = 0.0;
                None
            }
            _ => {
                self.progress = approach(self.progress, 0.0, SPIRAL_FADE_RATE, tick.delta);
                None
            }
        }
    }

    /// Visibility of one point, a smoothstep front moving base-to-tip as
    /// progress rises. The progress target overshoots 1.0 so the tip fully
    /// clears the softness band.
    pub fn point_visibility(&self, index: usize) -> f32 {
        let normalized = index as f32 / self.points.len() as f32;
        smoothstep(normalized, normalized + SPIRAL_REVEAL_SOFTNESS, self.progress)
    }

    /// Gradient color for one point, deep pink at the base to gold at the tip.
    pub fn point_color(&self, index: usize) -> [f32; 3] {
        let t = index as f32 / self.points.len() as f32;
        let a = SPIRAL_BASE_COLOR;
        let b = SPIRAL_TIP_COLOR;
        [
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
        ]
    }
}
