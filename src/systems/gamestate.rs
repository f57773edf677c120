//! Win condition.
use bevy_ecs::prelude::*;

use crate::events::gamestate::GoalReachedEvent;
use crate::resources::gamestate::GameState;
use crate::resources::worldtime::WorldTime;

/// Pause the session the first frame the goal is met and announce it.
///
/// Runs before input dispatch, so hits landing on the frame the goal is
/// reached still count and the pause shows up on the next frame.
pub fn win_condition_system(
    mut state: ResMut<GameState>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    if state.pause_if_goal_reached() {
        commands.trigger(GoalReachedEvent {
            collected: state.collected(),
            goal: state.goal(),
            frame: time.frame_count,
        });
    }
}
