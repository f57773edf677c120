//! Per-frame input queue resource.
//!
//! The frame loop polls the [`InputSource`](crate::platform::InputSource)
//! and pushes everything it got into [`InputQueue`]. The input dispatch
//! system drains it once per frame, so events never leak into the next one.
use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::events::input::InputEvent;

#[derive(Resource, Debug, Clone, Default)]
pub struct InputQueue {
    pending: SmallVec<[InputEvent; 8]>,
    quit_requested: bool,
}

impl InputQueue {
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.pending.extend(events);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending event, oldest first.
    pub fn take_pending(&mut self) -> SmallVec<[InputEvent; 8]> {
        std::mem::take(&mut self.pending)
    }

    /// Sticky: once set it stays set for the session.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
