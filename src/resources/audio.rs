//! Audio requests queued during a frame.
//!
//! Systems and observers push [`AudioRequest`]s here; the frame loop drains
//! the queue into the [`AudioPlayer`](crate::platform::AudioPlayer) when it
//! presents the frame.

use bevy_ecs::prelude::*;

use crate::events::audio::AudioRequest;

#[derive(Resource, Debug, Clone, Default)]
pub struct AudioQueue {
    requests: Vec<AudioRequest>,
}

impl AudioQueue {
    pub fn push(&mut self, request: AudioRequest) {
        self.requests.push(request);
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn take(&mut self) -> Vec<AudioRequest> {
        std::mem::take(&mut self.requests)
    }
}
