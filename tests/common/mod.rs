//! Recording fakes shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use raylib::prelude::{Color, Vector2};

use lemontree::components::boxcollider::BoxCollider;
use lemontree::components::lemon::Lemon;
use lemontree::events::input::InputEvent;
use lemontree::platform::{AudioPlayer, Clock, Cue, InputSource, Renderer, TextSize, Track, Visual};
use lemontree::resources::gameconfig::GameConfig;

/// Everything drawn during one presented frame.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub clears: usize,
    pub sprites: Vec<(Visual, Vector2)>,
    pub texts: Vec<(String, Vector2, Color, TextSize)>,
}

impl Frame {
    pub fn lemons(&self) -> Vec<Vector2> {
        self.sprites
            .iter()
            .filter(|(visual, _)| *visual == Visual::Lemon)
            .map(|(_, pos)| *pos)
            .collect()
    }

    pub fn has_text(&self, content: &str) -> bool {
        self.texts.iter().any(|(text, ..)| text == content)
    }

    pub fn text(&self, content: &str) -> Option<&(String, Vector2, Color, TextSize)> {
        self.texts.iter().find(|(text, ..)| text == content)
    }
}

/// Renderer, input source and clock in one. Input is scripted per frame;
/// once the script runs out every poll returns nothing.
#[derive(Debug, Default)]
pub struct RecordingPlatform {
    script: VecDeque<Vec<InputEvent>>,
    current: Frame,
    pub frames: Vec<Frame>,
    pub waits: Vec<u32>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scripted(script: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queue input for a future frame.
    pub fn then(&mut self, events: Vec<InputEvent>) {
        self.script.push_back(events);
    }

    pub fn last_frame(&self) -> &Frame {
        self.frames.last().expect("no frame presented yet")
    }
}

impl Renderer for RecordingPlatform {
    fn clear(&mut self, _color: Color) {
        self.current.clears += 1;
    }

    fn draw(&mut self, visual: Visual, position: Vector2) {
        self.current.sprites.push((visual, position));
    }

    fn draw_text(&mut self, content: &str, position: Vector2, color: Color, size: TextSize) {
        self.current
            .texts
            .push((content.to_string(), position, color, size));
    }

    /// 10px per character.
    fn text_width(&self, content: &str, _size: TextSize) -> f32 {
        content.chars().count() as f32 * 10.0
    }

    fn present(&mut self) {
        self.frames.push(std::mem::take(&mut self.current));
    }
}

impl InputSource for RecordingPlatform {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.script.pop_front().unwrap_or_default()
    }
}

impl Clock for RecordingPlatform {
    fn wait_for_next_tick(&mut self, target_fps: u32) {
        self.waits.push(target_fps);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    Loop(Track),
    Pause,
    Once(Cue),
}

#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub calls: Vec<AudioCall>,
}

impl AudioPlayer for RecordingAudio {
    fn play_loop(&mut self, track: Track) {
        self.calls.push(AudioCall::Loop(track));
    }

    fn pause(&mut self) {
        self.calls.push(AudioCall::Pause);
    }

    fn play_once(&mut self, cue: Cue) {
        self.calls.push(AudioCall::Once(cue));
    }
}

pub fn lemon_at(x: f32, y: f32) -> Lemon {
    Lemon::new(Vector2::new(x, y), BoxCollider::new(30.0, 15.0))
}

pub fn press(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown { x, y }
}

/// Ten well separated lemons in one row starting at `y`.
pub fn row_of_ten(y: f32) -> Vec<Lemon> {
    (0..10).map(|i| lemon_at(170.0 + 45.0 * i as f32, y)).collect()
}

pub fn config_with(lemons: usize, goal: u32) -> GameConfig {
    let mut config = GameConfig::new();
    config.lemon_count = lemons;
    config.goal = goal;
    config
}
