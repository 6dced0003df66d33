use gift_core::{Phase, Scene};

const DT: f32 = 1.0 / 60.0;
const VIEWPORT: f32 = 13.0;

/// Run the scene forward, recording the first tick index of every phase
/// change, until `stop` or the tick budget runs out.
fn run_until(scene: &mut Scene, elapsed: &mut f32, stop: Phase, max_ticks: usize) -> bool {
    for _ in 0..max_ticks {
        *elapsed += DT;
        scene.tick(*elapsed, DT, VIEWPORT);
        if scene.phase() == stop {
            return true;
        }
    }
    false
}

#[test]
fn clicking_the_box_starts_the_sequence() {
    let mut scene = Scene::new(42);
    assert_eq!(scene.phase(), Phase::Idle);
    scene.click();
    assert_eq!(scene.phase(), Phase::Activating);
    // Further clicks are ignored once the sequence is running.
    scene.click();
    assert_eq!(scene.phase(), Phase::Activating);
}

#[test]
fn spiral_self_transition_happens_on_the_first_tick() {
    let mut scene = Scene::new(42);
    scene.click();
    scene.tick(DT, DT, VIEWPORT);
    assert_eq!(scene.phase(), Phase::LightingUp);
}

#[test]
fn full_sequence_visits_every_phase_in_order() {
    let mut scene = Scene::new(42);
    let mut elapsed = 0.0;
    scene.click();

    let mut visited = vec![scene.phase()];
    for _ in 0..20_000 {
        elapsed += DT;
        scene.tick(elapsed, DT, VIEWPORT);
        if *visited.last().unwrap() != scene.phase() {
            visited.push(scene.phase());
        }
        if scene.phase() == Phase::Celebration {
            break;
        }
    }
    assert_eq!(
        visited,
        vec![
            Phase::Activating,
            Phase::LightingUp,
            Phase::Opening,
            Phase::Emerging,
            Phase::Celebration,
        ]
    );

    // Celebration holds until an explicit reset, then collapses to idle.
    for _ in 0..600 {
        elapsed += DT;
        scene.tick(elapsed, DT, VIEWPORT);
    }
    assert_eq!(scene.phase(), Phase::Celebration);
    scene.reset();
    assert_eq!(scene.phase(), Phase::Resetting);
}

#[test]
fn emergence_waits_the_full_delay_before_celebration() {
    let mut scene = Scene::new(42);
    scene.store.set_phase(Phase::Emerging);

    // First tick arms the deadline at elapsed + 2s.
    scene.tick(10.0, DT, VIEWPORT);
    assert_eq!(scene.phase(), Phase::Emerging);
    scene.tick(11.9, DT, VIEWPORT);
    assert_eq!(scene.phase(), Phase::Emerging, "fired before the delay");
    scene.tick(12.0, DT, VIEWPORT);
    assert_eq!(scene.phase(), Phase::Celebration);
}

#[test]
fn reset_during_emergence_cancels_the_pending_celebration() {
    let mut scene = Scene::new(42);
    scene.store.set_phase(Phase::Emerging);
    scene.tick(10.0, DT, VIEWPORT);
    scene.reset();

    // Well past the armed deadline: the stale transition must not fire.
    scene.tick(13.0, DT, VIEWPORT);
    assert_ne!(scene.phase(), Phase::Celebration);

    // Re-entering Emerging later re-arms a fresh deadline.
    scene.store.set_phase(Phase::Emerging);
    scene.tick(20.0, DT, VIEWPORT);
    assert_eq!(scene.phase(), Phase::Emerging);
    scene.tick(22.0, DT, VIEWPORT);
    assert_eq!(scene.phase(), Phase::Celebration);
}

#[test]
fn resetting_relaxes_everything_then_advances_to_idle() {
    let mut scene = Scene::new(42);
    let mut elapsed = 0.0;
    scene.click();
    assert!(run_until(&mut scene, &mut elapsed, Phase::Celebration, 20_000));
    scene.reset();

    for _ in 0..600 {
        elapsed += DT;
        scene.tick(elapsed, DT, VIEWPORT);
    }
    // Resetting is cyclic, not terminal: the replay path drives it back to
    // Idle via the table.
    assert_eq!(scene.phase(), Phase::Resetting);
    scene.store.advance();
    assert_eq!(scene.phase(), Phase::Idle);

    elapsed += DT;
    scene.tick(elapsed, DT, VIEWPORT);
    assert_eq!(scene.spiral.progress(), 0.0);
    assert!(scene.gift_box.lid_angle().abs() < 0.01);
    for orb in scene.orbs.orbs() {
        assert!(orb.position.length() < 0.01);
    }
}

#[test]
fn at_most_one_transition_is_applied_per_tick() {
    let mut scene = Scene::new(42);
    scene.click();
    let mut elapsed = 0.0;
    let mut last = scene.phase();
    for _ in 0..20_000 {
        elapsed += DT;
        scene.tick(elapsed, DT, VIEWPORT);
        let now = scene.phase();
        if now != last {
            assert_eq!(
                Some(now),
                last.successor(),
                "skipped a phase: {last:?} -> {now:?}"
            );
            last = now;
        }
        if now == Phase::Celebration {
            break;
        }
    }
    assert_eq!(last, Phase::Celebration);
}
