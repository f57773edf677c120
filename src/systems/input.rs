//! Input dispatch.
//!
//! [`input_dispatch_system`] drains the [`InputQueue`] once per frame. Each
//! pointer press is hit tested against every lemon independently, in
//! collection order, so a press on two overlapping lemons collects both.
//! Presses are ignored while the session is paused.
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector2;

use crate::components::lemon::Lemon;
use crate::events::input::InputEvent;
use crate::resources::gamestate::GameState;
use crate::resources::input::InputQueue;
use crate::resources::lemons::LemonManager;

/// Collect every idle lemon under `point`. Returns how many were hit.
pub fn dispatch_press(lemons: &mut [Lemon], point: Vector2) -> u32 {
    let mut hits = 0;
    for lemon in lemons.iter_mut() {
        if lemon.collect(point) {
            hits += 1;
        }
    }
    hits
}

pub fn input_dispatch_system(
    mut queue: ResMut<InputQueue>,
    mut lemons: ResMut<LemonManager>,
    mut state: ResMut<GameState>,
) {
    for event in queue.take_pending() {
        match event {
            InputEvent::Quit => {
                if !queue.quit_requested() {
                    info!("Quit requested");
                }
                queue.request_quit();
            }
            InputEvent::PointerDown { x, y } => {
                if state.is_paused() {
                    continue;
                }
                let hits = dispatch_press(lemons.lemons_mut(), Vector2::new(x, y));
                for _ in 0..hits {
                    state.record_collect();
                }
                if hits > 0 {
                    debug!(
                        "Press at ({}, {}) collected {} lemon(s), total {}/{}",
                        x,
                        y,
                        hits,
                        state.collected(),
                        state.goal()
                    );
                }
            }
        }
    }
}
