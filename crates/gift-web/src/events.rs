//! Pointer and keyboard wiring. All handlers route into the shared scene.

use crate::camera;
use crate::constants::{BOX_HIT_RADIUS, REPLAY_ID};
use crate::dom;
use crate::input;
use gift_core::Scene;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Taps on the canvas hit-test against the box region; hits become scene
/// clicks (which only register while idle).
pub fn register_pointer(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<Scene>>) {
    let canvas_ev = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let px = input::pointer_canvas_px(&ev, &canvas_ev);
        let (ro, rd) = camera::screen_to_world_ray(&canvas_ev, px.x, px.y);
        if input::ray_sphere(ro, rd, Vec3::ZERO, BOX_HIT_RADIUS).is_some() {
            scene.borrow_mut().click();
        } else {
            log::info!("[pointer] tap missed the box");
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ = canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// The replay button is only visible during celebration; clicking it begins
/// the reset collapse.
pub fn register_replay(document: &web::Document, scene: Rc<RefCell<Scene>>) {
    dom::add_click_listener(document, REPLAY_ID, move || {
        log::info!("[click] replay");
        scene.borrow_mut().reset();
    });
}

/// `m` toggles the audio-enabled flag.
pub fn register_keyboard(document: &web::Document, scene: Rc<RefCell<Scene>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if matches!(ev.key().as_str(), "m" | "M") {
            scene.borrow_mut().store.toggle_audio();
        }
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
