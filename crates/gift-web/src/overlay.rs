//! DOM overlay: title, tap hint, replay button and the greeting layer.

use crate::constants::*;
use crate::dom;
use gift_core::{GreetingText, Phase, GREETING_HEADLINE, GREETING_SUBTITLE};
use web_sys as web;

/// Fill in the static greeting strings once at startup.
pub fn init(document: &web::Document) {
    dom::set_text(document, GREETING_HEADLINE_ID, GREETING_HEADLINE);
    dom::set_text(document, GREETING_SUBTITLE_ID, GREETING_SUBTITLE);
    sync_phase(document, Phase::Idle);
}

/// Show/hide the phase-keyed chrome. Called on phase changes only.
pub fn sync_phase(document: &web::Document, phase: Phase) {
    dom::set_visible(document, TITLE_ID, phase.shows_title());
    dom::set_visible(document, HINT_ID, phase.shows_hint());
    dom::set_visible(document, REPLAY_ID, phase.shows_replay());
}

/// Drive the greeting layer's transform from the text animator every frame.
/// Scale 0 collapses the layer entirely, so no separate visibility toggle.
pub fn update_greeting(document: &web::Document, text: &GreetingText) {
    if let Some(el) = document.get_element_by_id(GREETING_ID) {
        let rise_px = text.y() * GREETING_PX_PER_UNIT;
        let style = format!(
            "transform: translate(-50%, {:.1}px) scale({:.4});",
            -rise_px,
            text.scale()
        );
        let _ = el.set_attribute("style", &style);
    }
}
