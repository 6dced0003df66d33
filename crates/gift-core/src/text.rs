//! Greeting text animator: rises and scales in during celebration.

use crate::anim::FrameTick;
use crate::constants::*;
use crate::phase::Phase;

/// Vertical position and uniform scale of the greeting group. The lerp here
/// uses a fixed per-frame fraction rather than a delta-scaled rate, so its
/// speed tracks the display refresh cadence; kept that way deliberately.
#[derive(Debug, Default)]
pub struct GreetingText {
    shown: bool,
    y: f32,
    scale: f32,
}

impl GreetingText {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn shown(&self) -> bool {
        self.shown
    }
    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// `viewport_width` is the world-space width visible at the text depth;
    /// below `TEXT_FULL_WIDTH` the target scale shrinks proportionally so
    /// the headline keeps fitting on narrow screens.
    pub fn update(&mut self, tick: &FrameTick, viewport_width: f32) {
        match tick.phase {
            Phase::Celebration => self.shown = true,
            Phase::Resetting | Phase::Idle => self.shown = false,
            _ => {}
        }

        if self.shown {
            self.y += (TEXT_TARGET_Y - self.y) * TEXT_SHOW_FRACTION;
            let responsive = (viewport_width / TEXT_FULL_WIDTH).min(1.0);
            self.scale += (responsive - self.scale) * TEXT_SHOW_FRACTION;
            self.y += (tick.elapsed * TEXT_BOB_FREQUENCY).sin() * TEXT_BOB_AMPLITUDE;
        } else {
            self.y -= self.y * TEXT_HIDE_FRACTION;
            self.scale -= self.scale * TEXT_HIDE_FRACTION;
        }
    }
}
