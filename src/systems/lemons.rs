//! Lemon physics step.
use bevy_ecs::prelude::*;

use crate::resources::gamestate::GameState;
use crate::resources::lemons::LemonManager;

/// Drop falling lemons, remove the ones past the bottom and respawn the
/// uncollected ones while the session is still running.
pub fn lemon_tick_system(mut lemons: ResMut<LemonManager>, state: Res<GameState>) {
    lemons.tick(state.is_paused());
}
