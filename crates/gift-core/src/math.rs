//! Pure geometry helpers: the spiral point cloud and random sampling.

use glam::Vec3;
use rand::Rng;

/// Generate an Archimedean spiral rising from `-height/2` to `+height/2`,
/// radius growing linearly from 0 to `radius_max`. Points are ordered from
/// base to tip; the index order is what the reveal animation keys on.
pub fn spiral_points(turns: u32, height: f32, points_per_turn: u32, radius_max: f32) -> Vec<Vec3> {
    let total = (turns * points_per_turn) as usize;
    let mut points = Vec::with_capacity(total);
    for i in 0..total {
        let t = i as f32 / total as f32;
        let angle = t * turns as f32 * std::f32::consts::TAU;
        let radius = t * radius_max;
        let x = angle.cos() * radius;
        let z = angle.sin() * radius;
        let y = t * height - height / 2.0;
        points.push(Vec3::new(x, y, z));
    }
    points
}

/// Uniformly distributed point on the surface of a sphere.
pub fn random_sphere_point<R: Rng>(rng: &mut R, radius: f32) -> Vec3 {
    let u: f32 = rng.gen();
    let v: f32 = rng.gen();
    let theta = std::f32::consts::TAU * u;
    let phi = (2.0 * v - 1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Hermite smoothstep, clamped to \[0, 1\] outside the edge band.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
