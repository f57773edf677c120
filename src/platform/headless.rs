//! Deviceless backend.
//!
//! [`HeadlessPlatform`] plays the game on its own: it remembers where lemons
//! were drawn on the last frame, clicks one of them every few frames and asks
//! to quit once its frame budget is spent. [`SilentAudio`] only logs, and
//! [`FrameClock`] caps the frame rate by sleeping.

use std::time::{Duration, Instant};

use log::debug;
use raylib::prelude::{Color, Vector2};

use crate::events::input::InputEvent;
use crate::platform::{AudioPlayer, Clock, Cue, InputSource, Renderer, TextSize, Track, Visual};

/// Renderer and input source without a window.
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    lemon_size: Vector2,
    frame_budget: u64,
    click_interval: u64,
    frames_polled: u64,
    next_target: usize,
    drawing: Vec<Vector2>,
    presented: Vec<Vector2>,
    clicks: u64,
}

impl HeadlessPlatform {
    /// Clicks every `click_interval` frames and quits on frame `frame_budget`.
    pub fn new(lemon_size: Vector2, frame_budget: u64, click_interval: u64) -> Self {
        Self {
            lemon_size,
            frame_budget,
            click_interval: click_interval.max(1),
            frames_polled: 0,
            next_target: 0,
            drawing: Vec::new(),
            presented: Vec::new(),
            clicks: 0,
        }
    }

    /// Centres of the lemons shown in the last presented frame.
    pub fn visible_lemons(&self) -> &[Vector2] {
        &self.presented
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub fn frames_polled(&self) -> u64 {
        self.frames_polled
    }
}

impl Renderer for HeadlessPlatform {
    fn clear(&mut self, _color: Color) {
        self.drawing.clear();
    }

    fn draw(&mut self, visual: Visual, position: Vector2) {
        if visual == Visual::Lemon {
            self.drawing.push(Vector2::new(
                position.x + self.lemon_size.x / 2.0,
                position.y + self.lemon_size.y / 2.0,
            ));
        }
    }

    fn draw_text(&mut self, _content: &str, _position: Vector2, _color: Color, _size: TextSize) {}

    /// Monospace estimate: half the font size per character.
    fn text_width(&self, content: &str, size: TextSize) -> f32 {
        content.chars().count() as f32 * size.px() as f32 / 2.0
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.presented, &mut self.drawing);
        self.drawing.clear();
    }
}

impl InputSource for HeadlessPlatform {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frames_polled += 1;
        if self.frames_polled >= self.frame_budget {
            return vec![InputEvent::Quit];
        }
        if self.frames_polled % self.click_interval != 0 || self.presented.is_empty() {
            return Vec::new();
        }

        let target = self.presented[self.next_target % self.presented.len()];
        self.next_target = self.next_target.wrapping_add(1);
        self.clicks += 1;
        debug!("Headless click at ({}, {})", target.x, target.y);
        vec![InputEvent::pointer_down(target)]
    }
}

/// Audio player that plays nothing.
#[derive(Debug, Clone, Default)]
pub struct SilentAudio;

impl AudioPlayer for SilentAudio {
    fn play_loop(&mut self, track: Track) {
        debug!("[audio] (silent) loop {:?}", track);
    }

    fn pause(&mut self) {
        debug!("[audio] (silent) pause");
    }

    fn play_once(&mut self, cue: Cue) {
        debug!("[audio] (silent) play {:?}", cue);
    }
}

/// Sleeps away whatever is left of the frame.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for FrameClock {
    fn wait_for_next_tick(&mut self, target_fps: u32) {
        if target_fps > 0 {
            let frame = Duration::from_secs_f64(1.0 / target_fps as f64);
            if let Some(last) = self.last_tick {
                let spent = last.elapsed();
                if spent < frame {
                    std::thread::sleep(frame - spent);
                }
            }
        }
        self.last_tick = Some(Instant::now());
    }
}

/// Headless platform paired with a [`FrameClock`], usable with
/// [`FrameLoop::run`](crate::game::FrameLoop::run).
#[derive(Debug, Clone)]
pub struct ClockedHeadless {
    pub platform: HeadlessPlatform,
    pub clock: FrameClock,
}

impl Renderer for ClockedHeadless {
    fn clear(&mut self, color: Color) {
        self.platform.clear(color);
    }
    fn draw(&mut self, visual: Visual, position: Vector2) {
        self.platform.draw(visual, position);
    }
    fn draw_text(&mut self, content: &str, position: Vector2, color: Color, size: TextSize) {
        self.platform.draw_text(content, position, color, size);
    }
    fn text_width(&self, content: &str, size: TextSize) -> f32 {
        self.platform.text_width(content, size)
    }
    fn present(&mut self) {
        self.platform.present();
    }
}

impl InputSource for ClockedHeadless {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.platform.poll()
    }
}

impl Clock for ClockedHeadless {
    fn wait_for_next_tick(&mut self, target_fps: u32) {
        self.clock.wait_for_next_tick(target_fps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembers_lemon_centres_of_last_frame() {
        let mut platform = HeadlessPlatform::new(Vector2::new(30.0, 15.0), 100, 1);
        platform.clear(Color::WHITE);
        platform.draw(Visual::Tree, Vector2::new(50.0, 50.0));
        platform.draw(Visual::Lemon, Vector2::new(185.0, 142.5));
        assert!(platform.visible_lemons().is_empty());

        platform.present();
        assert_eq!(platform.visible_lemons(), &[Vector2::new(200.0, 150.0)]);
    }

    #[test]
    fn clicks_on_interval_and_quits_on_budget() {
        let mut platform = HeadlessPlatform::new(Vector2::new(30.0, 15.0), 5, 2);
        platform.clear(Color::WHITE);
        platform.draw(Visual::Lemon, Vector2::new(185.0, 142.5));
        platform.present();

        assert!(platform.poll().is_empty());
        assert_eq!(
            platform.poll(),
            vec![InputEvent::PointerDown { x: 200.0, y: 150.0 }]
        );
        assert!(platform.poll().is_empty());
        assert_eq!(platform.poll().len(), 1);
        assert_eq!(platform.poll(), vec![InputEvent::Quit]);
        assert_eq!(platform.clicks(), 2);
    }

    #[test]
    fn no_clicks_without_lemons() {
        let mut platform = HeadlessPlatform::new(Vector2::new(30.0, 15.0), 10, 1);
        for _ in 0..5 {
            assert!(platform.poll().is_empty());
        }
        assert_eq!(platform.clicks(), 0);
    }
}
