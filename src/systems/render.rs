//! Render systems.
//!
//! These only queue [`DrawCmd`](crate::resources::drawlist::DrawCmd)s on the
//! [`DrawList`]; the frame loop replays the list on the renderer. Order of
//! the systems in the schedule is the painter's order: background first,
//! then lemons, then the HUD on top.
use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};

use crate::platform::{TextSize, Visual};
use crate::resources::drawlist::{DrawList, TextAnchor};
use crate::resources::gameconfig::{BACKGROUND_COLOR, GameConfig};
use crate::resources::gamestate::GameState;
use crate::resources::lemons::LemonManager;

pub const BANNER_TEXT: &str = "You've collected enough lemons!";
pub const COUNTER_LABEL: &str = "Lemons Collected: ";

const BANNER_COLOR: Color = Color {
    r: 0,
    g: 100,
    b: 0,
    a: 255,
};

pub fn goal_text(goal: u32) -> String {
    format!("Gather {} lemons", goal)
}

/// Fill the frame and draw the tree.
pub fn background_system(config: Res<GameConfig>, mut draw: ResMut<DrawList>) {
    draw.clear(BACKGROUND_COLOR);
    draw.sprite(Visual::Tree, config.tree_position());
}

/// Draw every lemon that is still in the scene.
pub fn lemon_render_system(lemons: Res<LemonManager>, mut draw: ResMut<DrawList>) {
    for lemon in lemons.visible() {
        draw.sprite(Visual::Lemon, lemon.top_left());
    }
}

/// Goal line, live counter and, once paused, the completion banner.
pub fn hud_system(config: Res<GameConfig>, state: Res<GameState>, mut draw: ResMut<DrawList>) {
    draw.text(
        goal_text(state.goal()),
        Vector2::new(20.0, 20.0),
        Color::BLACK,
        TextSize::Normal,
        TextAnchor::TopLeft,
    );
    draw.text(
        COUNTER_LABEL,
        Vector2::new(20.0, 50.0),
        Color::BLACK,
        TextSize::Normal,
        TextAnchor::TopLeft,
    );
    draw.text(
        state.collected().to_string(),
        Vector2::zero(),
        Color::RED,
        TextSize::Normal,
        TextAnchor::AfterPrevious,
    );

    if state.is_paused() {
        draw.text(
            BANNER_TEXT,
            config.banner_center(),
            BANNER_COLOR,
            TextSize::Large,
            TextAnchor::Center,
        );
    }
}
