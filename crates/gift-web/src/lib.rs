#![cfg(target_arch = "wasm32")]
//! WASM entry point: wires the canvas, DOM overlay, input events and the
//! requestAnimationFrame loop around the platform-free animation core.

pub mod camera;
pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod input;
pub mod overlay;
pub mod render;

use constants::CANVAS_ID;
use gift_core::Scene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

// Seed for the orb target cloud; fixed so every visit sees the same burst.
const ORB_SEED: u64 = 42;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gift-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the canvas backing store at CSS size * devicePixelRatio.
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    let scene = Rc::new(RefCell::new(Scene::new(ORB_SEED)));

    overlay::init(&document);
    events::register_pointer(&canvas, scene.clone());
    events::register_replay(&document, scene.clone());
    events::register_keyboard(&document, scene.clone());

    let gpu = frame::init_gpu(&canvas).await;

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        document,
        gpu,
        start_instant: now,
        last_instant: now,
        last_phase: gift_core::Phase::Idle,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
