//! Goal reached event and its observer.
//!
//! [`win_condition_system`](crate::systems::gamestate::win_condition_system)
//! triggers [`GoalReachedEvent`] on the frame the session pauses. The
//! observer here queues the one-shot audio: the ambient track stops and the
//! completion cue plays.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::events::audio::AudioRequest;
use crate::platform::Cue;
use crate::resources::audio::AudioQueue;

/// Fired once per session, when the collected counter first meets the goal.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalReachedEvent {
    pub collected: u32,
    pub goal: u32,
    /// Frame number the pause took effect on.
    pub frame: u64,
}

pub fn goal_reached_observer(trigger: On<GoalReachedEvent>, mut audio: ResMut<AudioQueue>) {
    let event = trigger.event();
    info!(
        "Goal reached on frame {}: {}/{} lemons collected",
        event.frame, event.collected, event.goal
    );
    audio.push(AudioRequest::Pause);
    audio.push(AudioRequest::PlayOnce(Cue::GoalReached));
}
