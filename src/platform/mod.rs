//! Capabilities the game needs from the outside world.
//!
//! The core never talks to a window, a sound card or a mouse directly. It
//! goes through four small traits:
//!
//! - [`Renderer`] draws named visuals and text, then presents the frame.
//! - [`AudioPlayer`] starts the ambient track, pauses it and fires one-shot cues.
//! - [`InputSource`] hands over the input events collected since the last poll.
//! - [`Clock`] caps the frame rate.
//!
//! Two backends implement them: [`raylib`] for the real game window and
//! [`headless`] for running a session without any device.

pub mod headless;
pub mod raylib;

use ::raylib::prelude::{Color, Vector2};

use crate::events::input::InputEvent;

/// Images the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visual {
    Tree,
    Lemon,
}

/// Looping background tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    Ambient,
}

/// Short sounds played once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    GoalReached,
}

/// Font sizes used by the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl TextSize {
    pub fn px(self) -> i32 {
        match self {
            TextSize::Normal => 24,
            TextSize::Large => 32,
        }
    }
}

pub trait Renderer {
    /// Fill the whole frame with `color`.
    fn clear(&mut self, color: Color);
    /// Draw `visual` with its top-left corner at `position`.
    fn draw(&mut self, visual: Visual, position: Vector2);
    /// Draw `content` with its top-left corner at `position`.
    fn draw_text(&mut self, content: &str, position: Vector2, color: Color, size: TextSize);
    /// Width in pixels `content` would take when drawn at `size`.
    fn text_width(&self, content: &str, size: TextSize) -> f32;
    /// Show everything drawn since the last present.
    fn present(&mut self);
}

/// Fire-and-forget audio control.
pub trait AudioPlayer {
    fn play_loop(&mut self, track: Track);
    fn pause(&mut self);
    fn play_once(&mut self, cue: Cue);
}

pub trait InputSource {
    /// Drain pending events without blocking.
    fn poll(&mut self) -> Vec<InputEvent>;
}

pub trait Clock {
    /// Block until the next frame should start.
    fn wait_for_next_tick(&mut self, target_fps: u32);
}
