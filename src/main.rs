//! Lemon Tree main entry point.
//!
//! A click-to-collect mini game: lemons hang on a tree, clicking one makes
//! it fall, and the session completes once enough lemons were collected.
//! Built on:
//! - **raylib** for windowing, graphics, input and audio
//! - **bevy_ecs** for the world, the per-frame schedule and observers
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! cargo run --release -- --headless --frames 600 --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use lemontree::game::{FrameLoop, SessionSummary};
use lemontree::platform::headless::{ClockedHeadless, FrameClock, HeadlessPlatform, SilentAudio};
use lemontree::platform::raylib::RaylibPlatform;
use lemontree::platform::raylib::audio::RaylibAudioPlayer;
use lemontree::resources::gameconfig::GameConfig;
use log::{error, info, warn};

/// Frames between two automatic clicks in headless mode.
const HEADLESS_CLICK_INTERVAL: u64 = 15;

/// Lemon Tree
#[derive(Parser)]
#[command(version, about = "Click the lemons off the tree until you have gathered enough.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for lemon placement. Random when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of lemons to collect.
    #[arg(long)]
    goal: Option<u32>,

    /// Override the number of lemons on the tree.
    #[arg(long)]
    lemons: Option<usize>,

    /// Run without a window; lemons get clicked automatically.
    #[arg(long)]
    headless: bool,

    /// Frames to run in headless mode before quitting.
    #[arg(long, default_value_t = 600, requires = "headless")]
    frames: u64,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn load_config(cli: &Cli) -> GameConfig {
    let mut config = GameConfig::with_path(&cli.config);
    if cli.config.exists() {
        if let Err(e) = config.load_from_file() {
            warn!("{}; using defaults", e);
            config = GameConfig::with_path(&cli.config);
        }
    } else {
        warn!("Config file {:?} not found; using defaults", cli.config);
    }

    if let Some(goal) = cli.goal {
        config.goal = goal;
    }
    if let Some(lemons) = cli.lemons {
        config.lemon_count = lemons;
    }
    config
}

fn run_windowed(config: GameConfig, seed: u64) -> Result<SessionSummary, String> {
    let mut platform = RaylibPlatform::open(&config)?;
    let mut audio = RaylibAudioPlayer::start(&config)?;
    let mut game = FrameLoop::new(config, seed);
    Ok(game.run(&mut platform, &mut audio))
}

fn run_headless(config: GameConfig, seed: u64, frames: u64) -> SessionSummary {
    info!(
        "Headless session: {} frames, clicking every {} frames",
        frames, HEADLESS_CLICK_INTERVAL
    );
    let mut platform = ClockedHeadless {
        platform: HeadlessPlatform::new(config.lemon_size(), frames, HEADLESS_CLICK_INTERVAL),
        clock: FrameClock::new(),
    };
    let mut game = FrameLoop::new(config, seed);
    game.run(&mut platform, &mut SilentAudio)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli);

    // Early-exit: write the configuration and quit (no window/audio needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        println!("Configuration written to {}", config.config_path.display());
        return;
    }

    let seed = cli.seed.unwrap_or_else(|| fastrand::u64(..));
    info!("Lemon Tree starting with seed {}", seed);

    let summary = if cli.headless {
        run_headless(config, seed, cli.frames)
    } else {
        match run_windowed(config, seed) {
            Ok(summary) => summary,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
    };

    info!(
        "Session over after {} frames: {}/{} lemons collected{}",
        summary.frames,
        summary.collected,
        summary.goal,
        if summary.completed { ", goal reached" } else { "" }
    );
}
