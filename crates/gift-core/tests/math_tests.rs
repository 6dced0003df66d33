use gift_core::math::{random_sphere_point, smoothstep, spiral_points};
use gift_core::{approach, approach_vec3};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn spiral_has_expected_endpoints() {
    let points = spiral_points(5, 6.0, 120, 4.5);
    assert_eq!(points.len(), 600);

    let first = points[0];
    let first_radius = (first.x * first.x + first.z * first.z).sqrt();
    assert!(first_radius < 1e-6, "base radius {first_radius}");
    assert!((first.y - -3.0).abs() < 1e-6);

    let last = points[points.len() - 1];
    let last_radius = (last.x * last.x + last.z * last.z).sqrt();
    assert!((last_radius - 4.5).abs() < 0.05, "tip radius {last_radius}");
    assert!((last.y - 3.0).abs() < 0.05, "tip height {}", last.y);
}

#[test]
fn spiral_rises_monotonically() {
    let points = spiral_points(5, 6.0, 120, 4.5);
    for pair in points.windows(2) {
        assert!(pair[1].y > pair[0].y);
    }
}

#[test]
fn spiral_radius_grows_linearly() {
    let points = spiral_points(5, 6.0, 120, 4.5);
    let total = points.len() as f32;
    for (i, p) in points.iter().enumerate() {
        let expected = (i as f32 / total) * 4.5;
        let radius = (p.x * p.x + p.z * p.z).sqrt();
        assert!((radius - expected).abs() < 1e-4, "index {i}");
    }
}

#[test]
fn sphere_points_sit_on_the_surface() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        let p = random_sphere_point(&mut rng, 2.5);
        assert!((p.length() - 2.5).abs() < 1e-4);
    }
}

#[test]
fn sphere_points_are_deterministic_per_seed() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        assert_eq!(
            random_sphere_point(&mut a, 1.0),
            random_sphere_point(&mut b, 1.0)
        );
    }
}

#[test]
fn smoothstep_clamps_and_interpolates() {
    assert_eq!(smoothstep(0.0, 1.0, -0.5), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 1.5), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    // Monotonic across the band.
    let mut prev = 0.0;
    for i in 0..=100 {
        let v = smoothstep(0.2, 0.8, 0.2 + 0.6 * i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn approach_converges_without_overshoot() {
    let mut x = 0.0;
    for _ in 0..600 {
        x = approach(x, 5.0, 2.0, 1.0 / 60.0);
        assert!(x <= 5.0);
    }
    assert!((x - 5.0).abs() < 1e-3);

    // A pathologically long frame clamps to landing exactly on target.
    assert_eq!(approach(1.0, 3.0, 10.0, 1.0), 3.0);
    assert_eq!(
        approach_vec3(Vec3::ZERO, Vec3::splat(2.0), 10.0, 1.0),
        Vec3::splat(2.0)
    );
}
