//! Session progress resource.
//!
//! [`GameState`] holds the collected counter, the goal and the pause flag.
//! The counter only ever grows and the pause flag only ever goes from
//! `false` to `true`; both are enforced by keeping the fields private.
//! See `crate::systems::gamestate::win_condition_system` for where the pause
//! is applied.

use bevy_ecs::prelude::Resource;

/// Progress of the current session.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    collected: u32,
    goal: u32,
    paused: bool,
}

impl GameState {
    /// Fresh session: nothing collected, not paused.
    pub fn new(goal: u32) -> Self {
        GameState {
            collected: 0,
            goal,
            paused: false,
        }
    }

    pub fn collected(&self) -> u32 {
        self.collected
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    /// Whether the session has reached its terminal, completed state.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn goal_reached(&self) -> bool {
        self.collected >= self.goal
    }

    /// Count one collected lemon.
    pub fn record_collect(&mut self) {
        self.collected = self.collected.saturating_add(1);
    }

    /// Enter the paused state if the goal has been met.
    ///
    /// Returns true only on the call that performs the transition, so callers
    /// can fire one-shot effects from it.
    pub fn pause_if_goal_reached(&mut self) -> bool {
        if self.paused || !self.goal_reached() {
            return false;
        }
        self.paused = true;
        true
    }
}
