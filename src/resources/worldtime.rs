use bevy_ecs::prelude::Resource;

/// Session clock, advanced once per frame by the frame loop.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub frame_count: u64,
}
