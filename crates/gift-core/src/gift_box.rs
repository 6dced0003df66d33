//! Gift box animator: lid pivot, internal glow and the idle float.

use crate::anim::{approach, FrameTick};
use crate::constants::*;
use crate::phase::{Intent, Phase};

/// Visual state of the box. The lid angle is the rotation about the
/// back-edge pivot (negative opens away from the camera); the light is the
/// internal point-light intensity revealed as the lid lifts.
#[derive(Debug, Default)]
pub struct GiftBox {
    lid_angle: f32,
    light_intensity: f32,
    bob: f32,
    yaw: f32,
}

impl GiftBox {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn lid_angle(&self) -> f32 {
        self.lid_angle
    }
    #[inline]
    pub fn light_intensity(&self) -> f32 {
        self.light_intensity
    }
    #[inline]
    pub fn bob(&self) -> f32 {
        self.bob
    }
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Step the lid/light/float state. Returns `Intent::Advance` on the one
    /// tick in `Opening` where the lid first passes the open-enough angle;
    /// the phase changes when the intent is applied, so the edge cannot
    /// re-fire.
    pub fn update(&mut self, tick: &FrameTick) -> Option<Intent> {
        let mut intent = None;
        match tick.phase {
            Phase::Opening | Phase::Emerging | Phase::Celebration => {
                self.lid_angle = approach(self.lid_angle, LID_OPEN_ANGLE, LID_OPEN_RATE, tick.delta);
                self.light_intensity = approach(
                    self.light_intensity,
                    LIGHT_OPEN_INTENSITY,
                    LIGHT_OPEN_RATE,
                    tick.delta,
                );
                if tick.phase == Phase::Opening && self.lid_angle < LID_ADVANCE_ANGLE {
                    intent = Some(Intent::Advance);
                }
            }
            Phase::Resetting | Phase::Idle => {
                self.lid_angle = approach(self.lid_angle, 0.0, LID_CLOSE_RATE, tick.delta);
                self.light_intensity =
                    approach(self.light_intensity, 0.0, LIGHT_CLOSE_RATE, tick.delta);
            }
            _ => {}
        }

        if tick.phase == Phase::Idle {
            self.bob = tick.elapsed.sin() * BOB_AMPLITUDE;
            self.yaw = (tick.elapsed * YAW_FREQUENCY).sin() * YAW_AMPLITUDE;
        } else {
            self.bob = approach(self.bob, 0.0, STABILIZE_RATE, tick.delta);
            self.yaw = approach(self.yaw, 0.0, STABILIZE_RATE, tick.delta);
        }
        intent
    }

    /// Clicking the box only starts the sequence from `Idle`; clicks in any
    /// other phase are ignored, nothing is queued.
    pub fn click(&self, phase: Phase) -> Option<Intent> {
        (phase == Phase::Idle).then_some(Intent::Advance)
    }
}
