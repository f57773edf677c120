//! Session setup and the frame loop.
//!
//! [`FrameLoop`] owns the ECS [`World`] and the [`Schedule`] that advances it.
//! One call to [`FrameLoop::step`] is one frame:
//!
//! 1. advance [`WorldTime`] and move the input source's events into the
//!    [`InputQueue`]
//! 2. run the schedule: background, win condition, input dispatch, lemon
//!    tick, lemon drawing, HUD
//! 3. hand queued audio requests to the [`AudioPlayer`]
//! 4. replay the [`DrawList`] on the [`Renderer`] and present
//!
//! [`FrameLoop::run`] repeats that until a quit event shows up, letting the
//! [`Clock`] cap the frame rate between frames.

use std::time::Instant;

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use log::info;

use crate::events::audio::AudioRequest;
use crate::events::gamestate::goal_reached_observer;
use crate::platform::{AudioPlayer, Clock, InputSource, Renderer, Track};
use crate::resources::audio::AudioQueue;
use crate::resources::drawlist::DrawList;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameState;
use crate::resources::input::InputQueue;
use crate::resources::lemons::{LemonManager, LemonSettings};
use crate::resources::worldtime::WorldTime;
use crate::systems::gamestate::win_condition_system;
use crate::systems::input::input_dispatch_system;
use crate::systems::lemons::lemon_tick_system;
use crate::systems::render::{background_system, hud_system, lemon_render_system};
use crate::systems::time::update_world_time;

/// Whether the loop should keep going after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// How a session went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub frames: u64,
    pub collected: u32,
    pub goal: u32,
    /// The goal was met and the session paused.
    pub completed: bool,
}

/// The per-frame systems, in order. Chained so each one sees the previous
/// one's writes, including observers fired through commands.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.add_systems(
        (
            background_system,
            win_condition_system,
            input_dispatch_system,
            lemon_tick_system,
            lemon_render_system,
            hud_system,
        )
            .chain(),
    );
    schedule
}

pub struct FrameLoop {
    world: World,
    schedule: Schedule,
    target_fps: u32,
    last_frame: Option<Instant>,
}

impl FrameLoop {
    /// New session with `config.lemon_count` lemons placed from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut lemons = LemonManager::with_seed(LemonSettings::from_config(&config), seed);
        let degraded = lemons.populate(config.lemon_count);
        info!(
            "New session: seed={}, lemons={} ({} degraded), goal={}",
            seed, config.lemon_count, degraded, config.goal
        );
        Self::with_lemons(config, lemons)
    }

    /// New session around an already populated [`LemonManager`].
    pub fn with_lemons(config: GameConfig, lemons: LemonManager) -> Self {
        let target_fps = config.target_fps;

        let mut world = World::new();
        world.insert_resource(GameState::new(config.goal));
        world.insert_resource(lemons);
        world.insert_resource(WorldTime::default());
        world.insert_resource(InputQueue::default());
        world.insert_resource(DrawList::default());
        world.insert_resource(config);

        let mut audio = AudioQueue::default();
        audio.push(AudioRequest::PlayLoop(Track::Ambient));
        world.insert_resource(audio);

        world.add_observer(goal_reached_observer);
        // Ensure the observer is registered before any system can trigger it.
        world.flush();

        Self {
            world,
            schedule: build_schedule(),
            target_fps,
            last_frame: None,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    pub fn game_state(&self) -> &GameState {
        self.world.resource::<GameState>()
    }

    pub fn lemons(&self) -> &LemonManager {
        self.world.resource::<LemonManager>()
    }

    /// Run one frame.
    pub fn step<P>(&mut self, platform: &mut P, audio: &mut dyn AudioPlayer) -> FrameOutcome
    where
        P: Renderer + InputSource + ?Sized,
    {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        update_world_time(&mut self.world, dt);

        let events = platform.poll();
        self.world.resource_mut::<InputQueue>().extend(events);

        self.schedule.run(&mut self.world);

        for request in self.world.resource_mut::<AudioQueue>().take() {
            match request {
                AudioRequest::PlayLoop(track) => audio.play_loop(track),
                AudioRequest::Pause => audio.pause(),
                AudioRequest::PlayOnce(cue) => audio.play_once(cue),
            }
        }

        self.world.resource_mut::<DrawList>().flush(&mut *platform);
        platform.present();

        if self.world.resource::<InputQueue>().quit_requested() {
            FrameOutcome::Quit
        } else {
            FrameOutcome::Continue
        }
    }

    /// Run frames until the player quits.
    pub fn run<P>(&mut self, platform: &mut P, audio: &mut dyn AudioPlayer) -> SessionSummary
    where
        P: Renderer + InputSource + Clock + ?Sized,
    {
        while self.step(&mut *platform, &mut *audio) == FrameOutcome::Continue {
            platform.wait_for_next_tick(self.target_fps);
        }
        self.summary()
    }

    pub fn summary(&self) -> SessionSummary {
        let state = self.game_state();
        SessionSummary {
            frames: self.world.resource::<WorldTime>().frame_count,
            collected: state.collected(),
            goal: state.goal(),
            completed: state.is_paused(),
        }
    }
}
