use gift_core::{
    FrameTick, GiftBox, GreetingText, Intent, OrbField, Phase, SpiralLight, LID_ADVANCE_ANGLE,
    LID_OPEN_ANGLE, TEXT_TARGET_Y,
};

const DT: f32 = 1.0 / 60.0;

fn tick(phase: Phase, elapsed: f32) -> FrameTick {
    FrameTick {
        phase,
        elapsed,
        delta: DT,
    }
}

// ---------------- spiral ----------------

#[test]
fn spiral_requests_advance_immediately_in_activating() {
    let mut spiral = SpiralLight::new();
    let intent = spiral.update(&tick(Phase::Activating, 0.0));
    assert_eq!(intent, Some(Intent::Advance));
    assert!(spiral.progress() > 0.0, "progress should start rising");
}

#[test]
fn spiral_completion_fires_once_then_fades() {
    let mut spiral = SpiralLight::new();
    // Drive the reveal to completion in LightingUp.
    let mut elapsed = 0.0;
    let mut fired = 0;
    for _ in 0..3000 {
        elapsed += DT;
        if spiral.update(&tick(Phase::LightingUp, elapsed)).is_some() {
            fired += 1;
            break;
        }
    }
    assert_eq!(fired, 1, "reveal completion should fire");
    assert!(spiral.progress() > 0.99);

    // Phase has moved on; the edge must not re-fire and the reveal fades.
    let peak = spiral.progress();
    for _ in 0..600 {
        elapsed += DT;
        assert_eq!(spiral.update(&tick(Phase::Opening, elapsed)), None);
    }
    assert!(spiral.progress() < peak * 0.01, "spiral should fade out");
}

#[test]
fn spiral_progress_is_hard_zero_in_idle() {
    let mut spiral = SpiralLight::new();
    let mut elapsed = 0.0;
    for _ in 0..30 {
        elapsed += DT;
        spiral.update(&tick(Phase::LightingUp, elapsed));
    }
    assert!(spiral.progress() > 0.0);
    spiral.update(&tick(Phase::Idle, elapsed + DT));
    assert_eq!(spiral.progress(), 0.0);
}

#[test]
fn spiral_rotates_in_every_phase() {
    let mut spiral = SpiralLight::new();
    let mut last = spiral.rotation_y();
    for (i, phase) in [Phase::Idle, Phase::Opening, Phase::Celebration, Phase::Resetting]
        .into_iter()
        .enumerate()
    {
        spiral.update(&tick(phase, i as f32 * DT));
        assert!(spiral.rotation_y() > last);
        last = spiral.rotation_y();
    }
}

#[test]
fn spiral_reveal_front_moves_base_to_tip() {
    let mut spiral = SpiralLight::new();
    let mut elapsed = 0.0;
    for _ in 0..120 {
        elapsed += DT;
        spiral.update(&tick(Phase::LightingUp, elapsed));
    }
    let base = spiral.point_visibility(0);
    let tip = spiral.point_visibility(spiral.points().len() - 1);
    assert!(base > 0.99, "base lights first, got {base}");
    assert!(tip < base, "tip trails the reveal front");
}

// ---------------- gift box ----------------

#[test]
fn gift_box_opening_edge_fires_exactly_once() {
    let mut boxy = GiftBox::new();
    let mut elapsed = 0.0;
    let mut fired = 0;
    for _ in 0..1200 {
        elapsed += DT;
        if boxy.update(&tick(Phase::Opening, elapsed)).is_some() {
            fired += 1;
            break;
        }
    }
    assert_eq!(fired, 1);
    assert!(boxy.lid_angle() < LID_ADVANCE_ANGLE);

    // Once the phase is Emerging the gate is off; the lid keeps settling
    // toward fully open without re-triggering.
    for _ in 0..600 {
        elapsed += DT;
        assert_eq!(boxy.update(&tick(Phase::Emerging, elapsed)), None);
    }
    assert!((boxy.lid_angle() - LID_OPEN_ANGLE).abs() < 0.01);
}

#[test]
fn gift_box_click_only_registers_in_idle() {
    let boxy = GiftBox::new();
    assert_eq!(boxy.click(Phase::Idle), Some(Intent::Advance));
    for phase in [
        Phase::Activating,
        Phase::LightingUp,
        Phase::Opening,
        Phase::Emerging,
        Phase::Celebration,
        Phase::Resetting,
    ] {
        assert_eq!(boxy.click(phase), None, "click accepted in {phase:?}");
    }
}

#[test]
fn gift_box_relaxes_closed_during_reset() {
    let mut boxy = GiftBox::new();
    let mut elapsed = 0.0;
    for _ in 0..300 {
        elapsed += DT;
        boxy.update(&tick(Phase::Opening, elapsed));
    }
    assert!(boxy.lid_angle() < -1.0);
    assert!(boxy.light_intensity() > 1.0);
    for _ in 0..600 {
        elapsed += DT;
        boxy.update(&tick(Phase::Resetting, elapsed));
    }
    assert!(boxy.lid_angle().abs() < 0.01);
    assert!(boxy.light_intensity() < 0.01);
}

#[test]
fn gift_box_floats_in_idle_and_stabilizes_elsewhere() {
    let mut boxy = GiftBox::new();
    boxy.update(&tick(Phase::Idle, 1.5));
    assert!((boxy.bob() - 1.5_f32.sin() * 0.1).abs() < 1e-6);
    assert!(boxy.yaw().abs() > 0.0);

    let mut elapsed = 1.5;
    for _ in 0..600 {
        elapsed += DT;
        boxy.update(&tick(Phase::Celebration, elapsed));
    }
    assert!(boxy.bob().abs() < 1e-3);
    assert!(boxy.yaw().abs() < 1e-3);
}

// ---------------- orbs ----------------

#[test]
fn orb_targets_are_deterministic_for_a_seed() {
    let a = OrbField::new(42);
    let b = OrbField::new(42);
    assert_eq!(a.orbs().len(), 150);
    for (x, y) in a.orbs().iter().zip(b.orbs().iter()) {
        assert_eq!(x.target, y.target);
        assert_eq!(x.scale, y.scale);
        assert_eq!(x.speed, y.speed);
        assert_eq!(x.time_offset, y.time_offset);
        assert_eq!(x.color, y.color);
    }
    let c = OrbField::new(43);
    let differs = a
        .orbs()
        .iter()
        .zip(c.orbs().iter())
        .any(|(x, y)| x.target != y.target);
    assert!(differs, "different seeds should produce different fields");
}

#[test]
fn orb_targets_lie_on_the_ring_cloud() {
    let field = OrbField::new(7);
    for orb in field.orbs() {
        let radial = (orb.target.x * orb.target.x + orb.target.z * orb.target.z).sqrt();
        assert!((3.0..=8.0).contains(&radial), "radius {radial}");
        assert!((-2.0..=6.0).contains(&orb.target.y), "height {}", orb.target.y);
        assert!(orb.position.length() < 1e-6, "orbs start at the origin");
    }
}

#[test]
fn orbs_emerge_then_collapse_to_origin_in_idle() {
    let mut field = OrbField::new(9);
    let mut elapsed = 0.0;
    for _ in 0..600 {
        elapsed += DT;
        field.update(&tick(Phase::Emerging, elapsed));
    }
    for orb in field.orbs() {
        assert!(
            orb.position.distance(orb.target) < 0.05,
            "orb did not reach its target"
        );
    }

    for _ in 0..600 {
        elapsed += DT;
        field.update(&tick(Phase::Idle, elapsed));
    }
    for orb in field.orbs() {
        assert!(orb.position.length() < 1e-3, "orb not recalled to origin");
        assert_eq!(OrbField::visual_scale(orb, Phase::Idle), 0.0);
    }
}

#[test]
fn orb_visual_scale_pops_in_with_distance() {
    let mut field = OrbField::new(11);
    // Freshly mounted: everything at the origin, hidden.
    for orb in field.orbs() {
        assert_eq!(OrbField::visual_scale(orb, Phase::Opening), 0.0);
    }
    // Mid-emergence the scale ramps with distance until clear of the box.
    let mut elapsed = 0.0;
    for _ in 0..600 {
        elapsed += DT;
        field.update(&tick(Phase::Emerging, elapsed));
    }
    for orb in field.orbs() {
        let s = OrbField::visual_scale(orb, Phase::Emerging);
        if orb.position.length() >= 1.0 {
            assert_eq!(s, orb.scale);
        } else {
            assert!(s <= orb.scale);
        }
    }
}

// ---------------- greeting text ----------------

#[test]
fn text_rises_and_scales_in_during_celebration() {
    let mut text = GreetingText::new();
    let mut elapsed = 0.0;
    for _ in 0..600 {
        elapsed += DT;
        text.update(&tick(Phase::Celebration, elapsed), 13.0);
    }
    assert!(text.shown());
    assert!((text.y() - TEXT_TARGET_Y).abs() < 0.02, "y={}", text.y());
    assert!((text.scale() - 1.0).abs() < 0.01);
}

#[test]
fn text_scale_target_tracks_narrow_viewports() {
    let mut text = GreetingText::new();
    let mut elapsed = 0.0;
    for _ in 0..600 {
        elapsed += DT;
        text.update(&tick(Phase::Celebration, elapsed), 6.5);
    }
    assert!((text.scale() - 0.5).abs() < 0.01);
}

#[test]
fn text_holds_visibility_through_emerging_and_hides_on_reset() {
    let mut text = GreetingText::new();
    text.update(&tick(Phase::Celebration, 0.0), 13.0);
    assert!(text.shown());
    // Phases with no explicit rule leave the flag unchanged.
    text.update(&tick(Phase::Emerging, DT), 13.0);
    assert!(text.shown());
    text.update(&tick(Phase::Resetting, 2.0 * DT), 13.0);
    assert!(!text.shown());
    let mut elapsed = 2.0 * DT;
    for _ in 0..300 {
        elapsed += DT;
        text.update(&tick(Phase::Resetting, elapsed), 13.0);
    }
    assert!(text.y().abs() < 1e-3);
    assert!(text.scale().abs() < 1e-3);
}
