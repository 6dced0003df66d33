//! Scene sequencer: owns the store and every animator, applies intents.

use crate::anim::FrameTick;
use crate::constants::EMERGE_TO_CELEBRATION_SEC;
use crate::gift_box::GiftBox;
use crate::orbs::OrbField;
use crate::phase::{Intent, Phase, PhaseStore};
use crate::spiral::SpiralLight;
use crate::text::GreetingText;
use smallvec::SmallVec;

/// One renderable frame's worth of entities plus the phase store they all
/// observe. Per tick the phase is snapshotted once, every entity is stepped
/// against that snapshot, and the collected intents are arbitrated so at
/// most one transition applies. Entities never read each other.
pub struct Scene {
    pub store: PhaseStore,
    pub gift_box: GiftBox,
    pub spiral: SpiralLight,
    pub orbs: OrbField,
    pub text: GreetingText,
    celebrate_at: Option<f32>,
}

impl Scene {
    pub fn new(seed: u64) -> Self {
        Self {
            store: PhaseStore::new(),
            gift_box: GiftBox::new(),
            spiral: SpiralLight::new(),
            orbs: OrbField::new(seed),
            text: GreetingText::new(),
            celebrate_at: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.store.phase()
    }

    /// Advance the whole scene by one frame. `elapsed` and `delta` are in
    /// seconds; `viewport_width` is the world-space width at the text depth.
    pub fn tick(&mut self, elapsed: f32, delta: f32, viewport_width: f32) {
        let tick = FrameTick {
            phase: self.store.phase(),
            elapsed,
            delta,
        };

        let mut intents: SmallVec<[Intent; 2]> = SmallVec::new();
        if let Some(intent) = self.gift_box.update(&tick) {
            intents.push(intent);
        }
        if let Some(intent) = self.spiral.update(&tick) {
            intents.push(intent);
        }
        self.orbs.update(&tick);
        self.text.update(&tick, viewport_width);

        // The one delayed transition: Emerging holds for a fixed beat before
        // celebration. The deadline lives in elapsed-time space and is
        // dropped the moment the phase moves on, so a reset mid-emergence
        // cannot leave a stale transition behind.
        if tick.phase == Phase::Emerging {
            let deadline = *self
                .celebrate_at
                .get_or_insert(elapsed + EMERGE_TO_CELEBRATION_SEC);
            if elapsed >= deadline {
                intents.push(Intent::Advance);
            }
        } else {
            self.celebrate_at = None;
        }

        // At most one transition per tick; an explicit reset outranks
        // forward progress. The one-shot edge conditions upstream mean more
        // than one advance per tick does not occur in practice.
        if intents.contains(&Intent::Reset) {
            self.store.reset();
        } else if !intents.is_empty() {
            self.store.advance();
        }
    }

    /// Pointer hit on the box. Only meaningful in `Idle`.
    pub fn click(&mut self) {
        if self.gift_box.click(self.store.phase()).is_some() {
            log::info!("[click] box activated");
            self.store.advance();
        }
    }

    /// Replay control: begin the collapse back to idle.
    pub fn reset(&mut self) {
        self.store.reset();
    }
}
