//! Per-frame context and the shared exponential-approach interpolator.

use crate::phase::Phase;
use glam::Vec3;

/// Everything an entity may read during one frame update: the phase snapshot
/// taken at the start of the tick plus wall-clock timing in seconds.
#[derive(Clone, Copy, Debug)]
pub struct FrameTick {
    pub phase: Phase,
    pub elapsed: f32,
    pub delta: f32,
}

/// Move `current` toward `target` by the fraction `rate * delta`, clamped so
/// a long frame can never overshoot. Every animator uses this one rule so
/// convergence semantics stay consistent.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, delta: f32) -> f32 {
    current + (target - current) * (rate * delta).min(1.0)
}

#[inline]
pub fn approach_vec3(current: Vec3, target: Vec3, rate: f32, delta: f32) -> Vec3 {
    current + (target - current) * (rate * delta).min(1.0)
}
