//! Phase state machine for the scripted reveal sequence.
//!
//! The store is the single source of truth that every entity reads once per
//! frame. Forward progress is distributed: the box click, the spiral's reveal
//! completion, the lid threshold and the emergence timer each own one edge of
//! the table. Entities express those edges as [`Intent`] values; only the
//! scene sequencer (or a user-input handler) touches the store.

/// Discrete stage of the experience, exactly one active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Activating,
    LightingUp,
    Opening,
    Emerging,
    Celebration,
    Resetting,
}

impl Phase {
    /// Forward transition table. `Celebration` has no successor; it waits
    /// for an explicit reset.
    pub fn successor(self) -> Option<Phase> {
        match self {
            Phase::Idle => Some(Phase::Activating),
            Phase::Activating => Some(Phase::LightingUp),
            Phase::LightingUp => Some(Phase::Opening),
            Phase::Opening => Some(Phase::Emerging),
            Phase::Emerging => Some(Phase::Celebration),
            Phase::Celebration => None,
            Phase::Resetting => Some(Phase::Idle),
        }
    }

    // Presentational queries for the overlay.
    #[inline]
    pub fn shows_title(self) -> bool {
        self == Phase::Idle
    }
    #[inline]
    pub fn shows_hint(self) -> bool {
        self == Phase::Idle
    }
    #[inline]
    pub fn shows_replay(self) -> bool {
        self == Phase::Celebration
    }
}

/// Transition request returned by an entity's per-frame update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Advance,
    Reset,
}

/// Application state: the current phase plus the audio-enabled flag.
///
/// Created once at startup and mutated only through the operations below.
#[derive(Debug)]
pub struct PhaseStore {
    phase: Phase,
    audio_enabled: bool,
}

impl Default for PhaseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseStore {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            audio_enabled: false,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    /// Unconditional overwrite. Observing entities react on the next frame.
    pub fn set_phase(&mut self, phase: Phase) {
        if phase != self.phase {
            log::info!("[phase] {:?} -> {:?} (set)", self.phase, phase);
        }
        self.phase = phase;
    }

    /// Step to the table successor. No-op when the current phase has none.
    pub fn advance(&mut self) {
        if let Some(next) = self.phase.successor() {
            log::info!("[phase] {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }

    /// Unconditional transition to `Resetting` from any phase.
    pub fn reset(&mut self) {
        log::info!("[phase] {:?} -> Resetting", self.phase);
        self.phase = Phase::Resetting;
    }

    pub fn toggle_audio(&mut self) {
        self.audio_enabled = !self.audio_enabled;
        log::info!("[audio] enabled={}", self.audio_enabled);
    }
}
