use crate::constants::*;
use glam::{Mat4, Vec3, Vec4};
use web_sys as web;

#[inline]
pub fn eye() -> Vec3 {
    Vec3::from_array(CAMERA_EYE)
}

#[inline]
pub fn view_proj(aspect: f32) -> Mat4 {
    let proj = Mat4::perspective_rh(CAMERA_FOVY_RADIANS, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
    let view = Mat4::look_at_rh(eye(), Vec3::ZERO, Vec3::Y);
    proj * view
}

/// Compute a world-space ray from canvas backing-store pixel coordinates.
pub fn screen_to_world_ray(canvas: &web::HtmlCanvasElement, sx: f32, sy: f32) -> (Vec3, Vec3) {
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let aspect = width / height.max(1.0);
    let inv = view_proj(aspect).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = eye();
    let rd = (p1 - ro).normalize();
    (ro, rd)
}

/// World-space width visible at the scene origin, used for the responsive
/// greeting scale.
pub fn viewport_width_at_origin(canvas: &web::HtmlCanvasElement) -> f32 {
    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let distance = eye().length();
    2.0 * distance * (CAMERA_FOVY_RADIANS / 2.0).tan() * aspect
}
