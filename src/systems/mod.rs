//! Game systems.
//!
//! Submodules overview
//! - [`gamestate`] – pause the session once the goal is met
//! - [`input`] – dispatch queued input events to lemons
//! - [`lemons`] – advance the lemon population one tick
//! - [`render`] – queue background, lemons and HUD draw commands
//! - [`time`] – advance the session clock

pub mod gamestate;
pub mod input;
pub mod lemons;
pub mod render;
pub mod time;
