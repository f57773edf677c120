//! Lemon Tree library.
//!
//! This module exposes the game's components, resources, systems, events,
//! frame loop and platform backends for use by the binary and by
//! integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod platform;
pub mod resources;
pub mod systems;
