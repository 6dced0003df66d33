//! Per-frame driver: ticks the scene, rebuilds instance buffers, renders.

use crate::camera;
use crate::constants::*;
use crate::overlay;
use crate::render::{self, GlowInstance, SolidInstance};
use gift_core::{OrbField, Phase, Scene};
use glam::{Mat4, Quat, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,
    pub start_instant: Instant,
    pub last_instant: Instant,
    pub last_phase: Phase,
}

impl FrameContext<'_> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        let elapsed = (now - self.start_instant).as_secs_f32();
        self.last_instant = now;

        let viewport_width = camera::viewport_width_at_origin(&self.canvas);
        let mut scene = self.scene.borrow_mut();
        scene.tick(elapsed, dt_sec, viewport_width);

        let phase = scene.phase();
        if phase != self.last_phase {
            overlay::sync_phase(&self.document, phase);
            self.last_phase = phase;
        }
        overlay::update_greeting(&self.document, &scene.text);

        // GPU not ready yet: skip this frame's render, next frame is a
        // fresh attempt.
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        let solids = build_solid_instances(&scene, elapsed);
        let glows = build_glow_instances(&scene);
        let bob = scene.gift_box.bob();
        gpu.set_light(Vec3::new(0.0, bob + 0.5, 0.0), scene.gift_box.light_intensity());
        drop(scene);

        let w = self.canvas.width();
        let h = self.canvas.height();
        gpu.resize_if_needed(w, h);
        if let Err(e) = gpu.render(&solids, &glows) {
            log::error!("render error: {:?}", e);
        }
    }
}

fn solid(model: Mat4, color: [f32; 3], emissive: [f32; 3]) -> SolidInstance {
    SolidInstance {
        model: model.to_cols_array_2d(),
        color: [color[0], color[1], color[2], 1.0],
        emissive: [emissive[0], emissive[1], emissive[2], 0.0],
    }
}

/// Box base, ribbons, lid assembly, floor and the tumbling orbs.
fn build_solid_instances(scene: &Scene, elapsed: f32) -> Vec<SolidInstance> {
    let g = &scene.gift_box;
    let root = Mat4::from_translation(Vec3::new(0.0, g.bob(), 0.0))
        * Mat4::from_rotation_y(g.yaw());
    let mut out = Vec::with_capacity(9 + scene.orbs.orbs().len());

    // Floor plane just below the box.
    out.push(solid(
        Mat4::from_translation(Vec3::new(0.0, -1.1, 0.0))
            * Mat4::from_scale(Vec3::new(50.0, 0.1, 50.0)),
        FLOOR_COLOR,
        [0.0; 3],
    ));

    // Base and its gold ribbons.
    out.push(solid(
        root * Mat4::from_scale(Vec3::new(2.0, 2.0, 2.0)),
        VELVET_COLOR,
        [0.0; 3],
    ));
    out.push(solid(
        root * Mat4::from_scale(Vec3::new(2.05, 2.0, 0.3)),
        GOLD_COLOR,
        [0.0; 3],
    ));
    out.push(solid(
        root * Mat4::from_scale(Vec3::new(0.3, 2.0, 2.05)),
        GOLD_COLOR,
        [0.0; 3],
    ));

    // Lid assembly pivots at the back top edge; the inner translation
    // offsets the lid so the hinge sits on that edge.
    let pivot = root
        * Mat4::from_translation(Vec3::new(0.0, 1.0, -1.0))
        * Mat4::from_rotation_x(g.lid_angle())
        * Mat4::from_translation(Vec3::new(0.0, 0.25, 1.0));
    out.push(solid(
        pivot * Mat4::from_scale(Vec3::new(2.1, 0.5, 2.1)),
        VELVET_COLOR,
        [0.0; 3],
    ));
    out.push(solid(
        pivot * Mat4::from_scale(Vec3::new(2.15, 0.52, 0.3)),
        GOLD_COLOR,
        [0.0; 3],
    ));
    out.push(solid(
        pivot * Mat4::from_scale(Vec3::new(0.3, 0.52, 2.15)),
        GOLD_COLOR,
        [0.0; 3],
    ));
    // Bow knot on top of the lid.
    out.push(solid(
        pivot
            * Mat4::from_translation(Vec3::new(0.0, 0.5, 0.0))
            * Mat4::from_scale(Vec3::new(0.8, 0.35, 0.8)),
        GOLD_COLOR,
        [0.1, 0.08, 0.0],
    ));

    // Orbs as tumbling confetti cuboids.
    let (tx, ty) = OrbField::tumble(elapsed);
    let tumble = Mat4::from_rotation_x(tx) * Mat4::from_rotation_y(ty);
    let phase = scene.phase();
    for orb in scene.orbs.orbs() {
        let s = OrbField::visual_scale(orb, phase);
        if s <= 0.0 {
            continue;
        }
        let rgb = orb.color.rgb();
        out.push(solid(
            Mat4::from_translation(orb.position) * tumble * Mat4::from_scale(Vec3::splat(s)),
            rgb,
            [rgb[0] * 0.3, rgb[1] * 0.3, rgb[2] * 0.3],
        ));
    }
    out
}

/// Spiral glow points, rotated by the spiral's spin and faded by the reveal.
fn build_glow_instances(scene: &Scene) -> Vec<GlowInstance> {
    let spiral = &scene.spiral;
    let spin = Quat::from_rotation_y(spiral.rotation_y());
    let mut out = Vec::with_capacity(spiral.points().len());
    for (i, p) in spiral.points().iter().enumerate() {
        let visibility = spiral.point_visibility(i);
        if visibility < SPIRAL_VISIBILITY_CUTOFF {
            continue;
        }
        let pos = spin * *p;
        let c = spiral.point_color(i);
        out.push(GlowInstance {
            pos: pos.to_array(),
            scale: SPIRAL_POINT_SCALE * visibility,
            color: [c[0], c[1], c[2], visibility],
        });
    }
    out
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
