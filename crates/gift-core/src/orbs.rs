//! Floating orb field: 150 particles hidden in the box until emergence.

use crate::anim::{approach_vec3, FrameTick};
use crate::constants::*;
use crate::phase::Phase;
use glam::Vec3;
use rand::prelude::*;

/// Palette entry assigned to a particle at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbColor {
    Gold,
    HotPink,
    SoftPink,
    White,
}

impl OrbColor {
    fn from_index(i: usize) -> Self {
        match i % 4 {
            0 => OrbColor::Gold,
            1 => OrbColor::HotPink,
            2 => OrbColor::SoftPink,
            _ => OrbColor::White,
        }
    }

    #[inline]
    pub fn rgb(self) -> [f32; 3] {
        match self {
            OrbColor::Gold => ORB_PALETTE[0],
            OrbColor::HotPink => ORB_PALETTE[1],
            OrbColor::SoftPink => ORB_PALETTE[2],
            OrbColor::White => ORB_PALETTE[3],
        }
    }
}

/// One particle. The target is fixed at creation; only `position` moves.
#[derive(Clone, Debug)]
pub struct Orb {
    pub target: Vec3,
    pub position: Vec3,
    pub scale: f32,
    pub speed: f32,
    pub time_offset: f32,
    pub color: OrbColor,
}

/// The fixed-size particle collection. Created once at mount; particles are
/// recycled to the origin on reset, never destroyed.
pub struct OrbField {
    orbs: Vec<Orb>,
}

impl OrbField {
    /// Deterministic for a given seed: two fields built from the same seed
    /// carry identical targets, scales, speeds and colors.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let orbs = (0..ORB_COUNT)
            .map(|_| {
                // Target: a ring cloud around the box.
                let angle = rng.gen::<f32>() * std::f32::consts::TAU;
                let radius = ORB_RING_RADIUS_MIN + rng.gen::<f32>() * ORB_RING_RADIUS_SPAN;
                let height = ORB_HEIGHT_MIN + rng.gen::<f32>() * ORB_HEIGHT_SPAN;
                let target = Vec3::new(angle.cos() * radius, height, angle.sin() * radius);
                Orb {
                    target,
                    position: Vec3::ZERO,
                    scale: ORB_SCALE_MIN + rng.gen::<f32>() * ORB_SCALE_SPAN,
                    speed: ORB_SPEED_MIN + rng.gen::<f32>() * ORB_SPEED_SPAN,
                    time_offset: rng.gen::<f32>() * ORB_TIME_OFFSET_SPAN,
                    color: OrbColor::from_index(rng.gen_range(0..4)),
                }
            })
            .collect();
        Self { orbs }
    }

    #[inline]
    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    /// Step every particle toward its phase-appropriate attractor.
    pub fn update(&mut self, tick: &FrameTick) {
        let time = tick.elapsed;
        for orb in &mut self.orbs {
            match tick.phase {
                Phase::Idle | Phase::Activating | Phase::LightingUp | Phase::Opening => {
                    orb.position =
                        approach_vec3(orb.position, Vec3::ZERO, ORB_HIDE_RATE, tick.delta);
                }
                Phase::Emerging => {
                    orb.position =
                        approach_vec3(orb.position, orb.target, ORB_EMERGE_RATE, tick.delta);
                }
                Phase::Celebration => {
                    // Independent sinusoidal hover per axis, frequencies from
                    // the particle's own speed and offset.
                    let hover = Vec3::new(
                        (time * orb.speed + orb.time_offset).sin(),
                        (time * orb.speed * 0.5 + orb.time_offset).cos(),
                        (time * orb.speed * 0.3 + orb.time_offset).sin(),
                    ) * ORB_HOVER_AMPLITUDE;
                    orb.position = approach_vec3(
                        orb.position,
                        orb.target + hover,
                        ORB_HOVER_RATE,
                        tick.delta,
                    );
                }
                Phase::Resetting => {
                    orb.position =
                        approach_vec3(orb.position, Vec3::ZERO, ORB_RESET_RATE, tick.delta);
                }
            }
        }
    }

    /// Rendered scale for one particle: zero while tucked inside the box in
    /// a hidden phase, ramping in with distance for a soft pop, full size
    /// once clear of the box.
    pub fn visual_scale(orb: &Orb, phase: Phase) -> f32 {
        let dist = orb.position.length();
        let hidden = matches!(
            phase,
            Phase::Idle | Phase::Activating | Phase::LightingUp | Phase::Opening | Phase::Resetting
        );
        if hidden && dist < ORB_HIDE_DISTANCE {
            0.0
        } else if dist < ORB_POP_DISTANCE {
            dist * orb.scale
        } else {
            orb.scale
        }
    }

    /// Decorative tumble angles shared by every orb; not phase-gated.
    #[inline]
    pub fn tumble(elapsed: f32) -> (f32, f32) {
        (elapsed * ORB_TUMBLE_RATE_X, elapsed * ORB_TUMBLE_RATE_Y)
    }
}
