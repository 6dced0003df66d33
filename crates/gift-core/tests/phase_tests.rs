use gift_core::{Phase, PhaseStore};

const ALL_PHASES: [Phase; 7] = [
    Phase::Idle,
    Phase::Activating,
    Phase::LightingUp,
    Phase::Opening,
    Phase::Emerging,
    Phase::Celebration,
    Phase::Resetting,
];

#[test]
fn advance_follows_the_transition_table_exactly() {
    let expected = [
        (Phase::Idle, Phase::Activating),
        (Phase::Activating, Phase::LightingUp),
        (Phase::LightingUp, Phase::Opening),
        (Phase::Opening, Phase::Emerging),
        (Phase::Emerging, Phase::Celebration),
        (Phase::Resetting, Phase::Idle),
    ];
    for (from, to) in expected {
        let mut store = PhaseStore::new();
        store.set_phase(from);
        store.advance();
        assert_eq!(store.phase(), to, "advance from {from:?}");
    }
}

#[test]
fn advance_from_celebration_is_a_no_op() {
    let mut store = PhaseStore::new();
    store.set_phase(Phase::Celebration);
    store.advance();
    assert_eq!(store.phase(), Phase::Celebration);
    store.advance();
    assert_eq!(store.phase(), Phase::Celebration);
}

#[test]
fn reset_reaches_resetting_from_every_phase() {
    for phase in ALL_PHASES {
        let mut store = PhaseStore::new();
        store.set_phase(phase);
        store.reset();
        assert_eq!(store.phase(), Phase::Resetting, "reset from {phase:?}");
    }
}

#[test]
fn resetting_advances_back_to_idle() {
    let mut store = PhaseStore::new();
    store.reset();
    store.advance();
    assert_eq!(store.phase(), Phase::Idle);
}

#[test]
fn store_starts_idle_with_audio_off() {
    let store = PhaseStore::new();
    assert_eq!(store.phase(), Phase::Idle);
    assert!(!store.audio_enabled());
}

#[test]
fn toggle_audio_flips_the_flag() {
    let mut store = PhaseStore::new();
    store.toggle_audio();
    assert!(store.audio_enabled());
    store.toggle_audio();
    assert!(!store.audio_enabled());
}

#[test]
fn overlay_queries_key_off_the_phase() {
    assert!(Phase::Idle.shows_title());
    assert!(Phase::Idle.shows_hint());
    assert!(!Phase::Celebration.shows_title());
    assert!(Phase::Celebration.shows_replay());
    for phase in ALL_PHASES {
        if phase != Phase::Celebration {
            assert!(!phase.shows_replay(), "replay visible in {phase:?}");
        }
    }
}
