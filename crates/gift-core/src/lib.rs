//! Phase-driven animation core for the gift-reveal experience.
//!
//! Everything in this crate is platform-free: the host supplies elapsed and
//! delta time each frame and the entities compute their own visual state from
//! the shared [`Phase`]. Entities never write the phase directly; they return
//! [`Intent`] values that the [`Scene`] sequencer applies after all entities
//! have been stepped, so at most one transition happens per tick.

pub mod anim;
pub mod constants;
pub mod gift_box;
pub mod math;
pub mod orbs;
pub mod phase;
pub mod scene;
pub mod spiral;
pub mod text;

pub use anim::{approach, approach_vec3, FrameTick};
pub use constants::*;
pub use gift_box::GiftBox;
pub use orbs::{Orb, OrbColor, OrbField};
pub use phase::{Intent, Phase, PhaseStore};
pub use scene::Scene;
pub use spiral::SpiralLight;
pub use text::GreetingText;
