//! Raylib backend: the real game window.
//!
//! [`RaylibPlatform`] owns the raylib handle and implements [`Renderer`],
//! [`InputSource`] and [`Clock`]. Draw calls are buffered and replayed
//! inside a single `begin_drawing` scope on [`Renderer::present`].
//! Audio lives in [`audio`], on its own thread.

pub mod audio;
pub mod textures;

use std::ffi::CString;

use log::info;
use raylib::ffi;
use raylib::prelude::*;

use crate::events::input::InputEvent;
use crate::platform::{Clock, InputSource, Renderer, TextSize, Visual};
use crate::resources::gameconfig::GameConfig;

use self::textures::TextureStore;

const POINTER_BUTTONS: [MouseButton; 3] = [
    MouseButton::MOUSE_BUTTON_LEFT,
    MouseButton::MOUSE_BUTTON_RIGHT,
    MouseButton::MOUSE_BUTTON_MIDDLE,
];

#[derive(Debug, Clone)]
enum Queued {
    Clear(Color),
    Sprite(Visual, Vector2),
    Text(String, Vector2, Color, TextSize),
}

pub struct RaylibPlatform {
    rl: RaylibHandle,
    thread: RaylibThread,
    textures: TextureStore,
    queued: Vec<Queued>,
    target_fps: u32,
}

impl RaylibPlatform {
    /// Open the window and load the tree and lemon images.
    pub fn open(config: &GameConfig) -> Result<Self, String> {
        let (mut rl, thread) = raylib::init()
            .size(config.window_width as i32, config.window_height as i32)
            .title(&config.title)
            .build();
        rl.set_target_fps(config.target_fps);
        // Disable ESC to exit
        rl.set_exit_key(None);

        let mut textures = TextureStore::new();
        textures.load(
            &mut rl,
            &thread,
            Visual::Tree,
            &config.tree_texture,
            config.tree_size(),
        )?;
        textures.load(
            &mut rl,
            &thread,
            Visual::Lemon,
            &config.lemon_texture,
            config.lemon_size(),
        )?;

        info!(
            "Window open: {}x{} '{}' at {} fps",
            config.window_width, config.window_height, config.title, config.target_fps
        );

        Ok(Self {
            rl,
            thread,
            textures,
            queued: Vec::new(),
            target_fps: config.target_fps,
        })
    }
}

impl Renderer for RaylibPlatform {
    fn clear(&mut self, color: Color) {
        self.queued.push(Queued::Clear(color));
    }

    fn draw(&mut self, visual: Visual, position: Vector2) {
        self.queued.push(Queued::Sprite(visual, position));
    }

    fn draw_text(&mut self, content: &str, position: Vector2, color: Color, size: TextSize) {
        self.queued
            .push(Queued::Text(content.to_string(), position, color, size));
    }

    fn text_width(&self, content: &str, size: TextSize) -> f32 {
        let Ok(c_text) = CString::new(content) else {
            return 0.0;
        };
        unsafe { ffi::MeasureText(c_text.as_ptr(), size.px()) as f32 }
    }

    fn present(&mut self) {
        let mut d = self.rl.begin_drawing(&self.thread);
        for cmd in self.queued.drain(..) {
            match cmd {
                Queued::Clear(color) => d.clear_background(color),
                Queued::Sprite(visual, pos) => {
                    if let Some(entry) = self.textures.get(visual) {
                        let src = Rectangle {
                            x: 0.0,
                            y: 0.0,
                            width: entry.texture.width as f32,
                            height: entry.texture.height as f32,
                        };
                        let dest = Rectangle {
                            x: pos.x,
                            y: pos.y,
                            width: entry.size.x,
                            height: entry.size.y,
                        };
                        d.draw_texture_pro(
                            &entry.texture,
                            src,
                            dest,
                            Vector2::zero(),
                            0.0,
                            Color::WHITE,
                        );
                    }
                }
                Queued::Text(content, pos, color, size) => {
                    d.draw_text(&content, pos.x as i32, pos.y as i32, size.px(), color);
                }
            }
        }
    }
}

impl InputSource for RaylibPlatform {
    fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let mouse = self.rl.get_mouse_position();
        for button in POINTER_BUTTONS {
            if self.rl.is_mouse_button_pressed(button) {
                events.push(InputEvent::pointer_down(mouse));
            }
        }
        if self.rl.window_should_close() {
            events.push(InputEvent::Quit);
        }
        events
    }
}

impl Clock for RaylibPlatform {
    /// Raylib already waits inside `end_drawing`; this only follows fps changes.
    fn wait_for_next_tick(&mut self, target_fps: u32) {
        if target_fps != self.target_fps {
            self.rl.set_target_fps(target_fps);
            self.target_fps = target_fps;
        }
    }
}
