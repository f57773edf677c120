//! Whole-frame tests: FrameLoop driven by recording fakes.

mod common;

use raylib::prelude::{Color, Vector2};

use lemontree::events::input::InputEvent;
use lemontree::game::{FrameLoop, FrameOutcome, SessionSummary};
use lemontree::platform::{Cue, TextSize, Track, Visual};
use lemontree::resources::lemons::{LemonManager, LemonSettings};
use lemontree::systems::render::{BANNER_TEXT, COUNTER_LABEL};

use common::{AudioCall, RecordingAudio, RecordingPlatform, config_with, press, row_of_ten};

fn game_with_row(goal: u32, y: f32) -> FrameLoop {
    let config = config_with(10, goal);
    let mut lemons = LemonManager::with_seed(LemonSettings::from_config(&config), 1);
    for lemon in row_of_ten(y) {
        lemons.insert(lemon);
    }
    FrameLoop::with_lemons(config, lemons)
}

fn presses_for_row(y: f32) -> Vec<InputEvent> {
    row_of_ten(y).iter().map(|l| press(l.pos.x, l.pos.y)).collect()
}

#[test]
fn first_frame_draws_scene_and_starts_music() {
    let mut game = FrameLoop::new(config_with(10, 20), 42);
    let mut platform = RecordingPlatform::new();
    let mut audio = RecordingAudio::default();

    assert_eq!(game.step(&mut platform, &mut audio), FrameOutcome::Continue);

    assert_eq!(audio.calls, vec![AudioCall::Loop(Track::Ambient)]);
    let frame = platform.last_frame();
    assert_eq!(frame.clears, 1);
    assert_eq!(frame.sprites[0], (Visual::Tree, Vector2::new(50.0, 50.0)));
    assert_eq!(frame.lemons().len(), 10);

    let goal = frame.text("Gather 20 lemons").unwrap();
    assert_eq!(goal.1, Vector2::new(20.0, 20.0));
    assert_eq!(goal.3, TextSize::Normal);
    let label = frame.text(COUNTER_LABEL).unwrap();
    assert_eq!(label.1, Vector2::new(20.0, 50.0));
    // the counter sits right after the label
    let counter = frame.text("0").unwrap();
    assert_eq!(counter.1, Vector2::new(20.0 + 10.0 * COUNTER_LABEL.len() as f32, 50.0));
    assert!(!frame.has_text(BANNER_TEXT));

    // music is only started once
    game.step(&mut platform, &mut audio);
    assert_eq!(audio.calls.len(), 1);
}

#[test]
fn lemons_are_drawn_from_their_top_left_corner() {
    let mut game = game_with_row(20, 150.0);
    let mut platform = RecordingPlatform::new();
    let mut audio = RecordingAudio::default();

    game.step(&mut platform, &mut audio);

    let expected: Vec<Vector2> = row_of_ten(150.0).iter().map(|l| l.top_left()).collect();
    assert_eq!(platform.last_frame().lemons(), expected);
}

#[test]
fn quit_ends_run_after_finishing_the_frame() {
    let mut game = FrameLoop::new(config_with(10, 20), 7);
    let mut platform =
        RecordingPlatform::scripted([vec![], vec![], vec![InputEvent::Quit, press(0.0, 0.0)]]);
    let mut audio = RecordingAudio::default();

    let summary = game.run(&mut platform, &mut audio);

    assert_eq!(
        summary,
        SessionSummary {
            frames: 3,
            collected: 0,
            goal: 20,
            completed: false
        }
    );
    assert_eq!(platform.frames.len(), 3);
    // no wait after the last frame
    assert_eq!(platform.waits, vec![60, 60]);
}

#[test]
fn press_outside_every_lemon_changes_nothing() {
    let mut game = game_with_row(20, 150.0);
    let before = game.lemons().lemons().to_vec();
    let mut platform = RecordingPlatform::scripted([vec![press(20.0, 580.0), press(700.0, 150.0)]]);
    let mut audio = RecordingAudio::default();

    game.step(&mut platform, &mut audio);

    assert_eq!(game.game_state().collected(), 0);
    assert_eq!(game.lemons().lemons(), &before[..]);
}

#[test]
fn collecting_twenty_lemons_completes_the_session() {
    let mut game = game_with_row(20, 150.0);
    let mut platform = RecordingPlatform::scripted([presses_for_row(150.0)]);
    let mut audio = RecordingAudio::default();

    game.step(&mut platform, &mut audio);
    assert_eq!(game.game_state().collected(), 10);
    assert!(game.lemons().lemons().iter().all(|l| l.is_falling()));

    // clicked lemons are never replaced, so restock the tree by hand
    {
        let mut world_lemons = game.world_mut().resource_mut::<LemonManager>();
        for lemon in row_of_ten(300.0) {
            world_lemons.insert(lemon);
        }
    }
    platform.then(presses_for_row(300.0));
    game.step(&mut platform, &mut audio);
    assert_eq!(game.game_state().collected(), 20);
    // the pause shows up on the next frame
    assert!(!game.game_state().is_paused());
    assert!(!platform.last_frame().has_text(BANNER_TEXT));

    game.step(&mut platform, &mut audio);
    assert!(game.game_state().is_paused());
    assert_eq!(
        audio.calls,
        vec![
            AudioCall::Loop(Track::Ambient),
            AudioCall::Pause,
            AudioCall::Once(Cue::GoalReached)
        ]
    );
    let banner = platform.last_frame().text(BANNER_TEXT).unwrap();
    assert_eq!(banner.3, TextSize::Large);
    let width = 10.0 * BANNER_TEXT.len() as f32;
    assert_eq!(banner.1, Vector2::new(400.0 - width / 2.0, 100.0 - 16.0));
    assert!(platform.last_frame().has_text("20"));

    // more presses change nothing, audio cues do not repeat
    {
        let mut world_lemons = game.world_mut().resource_mut::<LemonManager>();
        for lemon in row_of_ten(400.0) {
            world_lemons.insert(lemon);
        }
    }
    platform.then(presses_for_row(400.0));
    for _ in 0..5 {
        game.step(&mut platform, &mut audio);
    }
    assert_eq!(game.game_state().collected(), 20);
    assert!(game.game_state().is_paused());
    assert_eq!(audio.calls.len(), 3);
    assert!(platform.last_frame().has_text(BANNER_TEXT));
}

#[test]
fn hits_on_the_goal_frame_still_count() {
    let mut game = game_with_row(1, 150.0);
    let mut platform = RecordingPlatform::scripted([presses_for_row(150.0)]);
    let mut audio = RecordingAudio::default();

    game.step(&mut platform, &mut audio);
    assert_eq!(game.game_state().collected(), 10);
    game.step(&mut platform, &mut audio);
    assert!(game.game_state().is_paused());
    assert!(game.summary().completed);
}

#[test]
fn falling_lemons_keep_falling_after_pause_and_are_not_replaced() {
    let mut game = game_with_row(1, 150.0);
    let first = row_of_ten(150.0)[0];
    let mut platform = RecordingPlatform::scripted([vec![press(first.pos.x, first.pos.y)]]);
    let mut audio = RecordingAudio::default();

    game.step(&mut platform, &mut audio);
    game.step(&mut platform, &mut audio);
    assert!(game.game_state().is_paused());

    let y_before = game.lemons().lemons()[0].pos.y;
    game.step(&mut platform, &mut audio);
    assert_eq!(game.lemons().lemons()[0].pos.y, y_before + 5.0);

    // (600 - 150) / 5 ticks to reach the boundary, one more to pass it
    for _ in 0..100 {
        game.step(&mut platform, &mut audio);
    }
    assert_eq!(game.lemons().active_count(), 9);
    assert!(game.lemons().lemons().iter().all(|l| l.is_idle()));
    assert_eq!(platform.last_frame().lemons().len(), 9);
}

#[test]
fn hud_counter_is_red() {
    let mut game = game_with_row(20, 150.0);
    let mut platform = RecordingPlatform::new();
    let mut audio = RecordingAudio::default();
    game.step(&mut platform, &mut audio);

    let counter = platform.last_frame().text("0").unwrap();
    let Color { r, g, b, .. } = counter.2;
    assert_eq!((r, g, b), (230, 41, 55));
}
