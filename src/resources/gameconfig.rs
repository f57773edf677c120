//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//! title = Lemon Tree Game
//!
//! [game]
//! lemons = 10
//! goal = 20
//!
//! [lemon]
//! width = 30
//! height = 15
//! fall_speed = 5
//! spawn_attempts = 100
//!
//! [spawn]
//! min_x = 150
//! max_x = 650
//! min_y = 100
//! max_y = 200
//!
//! [assets]
//! lemon = lemon.jpg
//! tree = tree.png
//! music = background_music.mp3
//! goal_sound = goal_reached.mp3
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use raylib::prelude::{Color, Vector2};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Lemon Tree Game";
const DEFAULT_LEMON_COUNT: usize = 10;
const DEFAULT_GOAL: u32 = 20;
const DEFAULT_LEMON_WIDTH: f32 = 30.0;
const DEFAULT_LEMON_HEIGHT: f32 = 15.0;
const DEFAULT_FALL_SPEED: f32 = 5.0;
const DEFAULT_SPAWN_ATTEMPTS: u32 = 100;
const DEFAULT_SPAWN_MIN_X: i32 = 150;
const DEFAULT_SPAWN_MAX_X: i32 = 650;
const DEFAULT_SPAWN_MIN_Y: i32 = 100;
const DEFAULT_SPAWN_MAX_Y: i32 = 200;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Sky blue behind the tree.
pub const BACKGROUND_COLOR: Color = Color {
    r: 173,
    g: 216,
    b: 230,
    a: 255,
};

/// Vertical centre of the completion banner.
const BANNER_Y: f32 = 100.0;

/// Game configuration resource.
///
/// Stores window settings, session rules, lemon tuning, spawn area and asset
/// paths. `main` loads it once from the configuration file before the frame
/// loop is built; systems read it through `Res<GameConfig>`.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels. Doubles as the lower scene boundary.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Window title.
    pub title: String,
    /// Number of lemons on the tree at session start.
    pub lemon_count: usize,
    /// Lemons to collect before the session completes.
    pub goal: u32,
    /// Lemon box width in pixels.
    pub lemon_width: f32,
    /// Lemon box height in pixels.
    pub lemon_height: f32,
    /// Pixels a falling lemon drops per tick.
    pub fall_speed: f32,
    /// Random positions tried per spawn before giving up on spacing.
    pub spawn_attempts: u32,
    /// Spawn area, inclusive, in window coordinates.
    pub spawn_min_x: i32,
    pub spawn_max_x: i32,
    pub spawn_min_y: i32,
    pub spawn_max_y: i32,
    /// Lemon sprite image.
    pub lemon_texture: PathBuf,
    /// Background tree image.
    pub tree_texture: PathBuf,
    /// Ambient music track, looped.
    pub music: PathBuf,
    /// Sound played once when the goal is reached.
    pub goal_sound: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            lemon_count: DEFAULT_LEMON_COUNT,
            goal: DEFAULT_GOAL,
            lemon_width: DEFAULT_LEMON_WIDTH,
            lemon_height: DEFAULT_LEMON_HEIGHT,
            fall_speed: DEFAULT_FALL_SPEED,
            spawn_attempts: DEFAULT_SPAWN_ATTEMPTS,
            spawn_min_x: DEFAULT_SPAWN_MIN_X,
            spawn_max_x: DEFAULT_SPAWN_MAX_X,
            spawn_min_y: DEFAULT_SPAWN_MIN_Y,
            spawn_max_y: DEFAULT_SPAWN_MAX_Y,
            lemon_texture: PathBuf::from("lemon.jpg"),
            tree_texture: PathBuf::from("tree.png"),
            music: PathBuf::from("background_music.mp3"),
            goal_sound: PathBuf::from("goal_reached.mp3"),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config)?;

        info!(
            "Loaded config from {:?}: {}x{} window, fps={}, lemons={}, goal={}",
            self.config_path,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.lemon_count,
            self.goal
        );

        Ok(())
    }

    /// Load configuration from INI text. Missing values are kept.
    pub fn load_from_str(&mut self, content: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), String> {
        // [window] section
        if let Some(width) = config.getuint("window", "width")? {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height")? {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps")? {
            self.target_fps = fps as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [game] section
        if let Some(lemons) = config.getuint("game", "lemons")? {
            self.lemon_count = lemons as usize;
        }
        if let Some(goal) = config.getuint("game", "goal")? {
            self.goal = goal as u32;
        }

        // [lemon] section
        if let Some(width) = config.getfloat("lemon", "width")? {
            self.lemon_width = width as f32;
        }
        if let Some(height) = config.getfloat("lemon", "height")? {
            self.lemon_height = height as f32;
        }
        if let Some(speed) = config.getfloat("lemon", "fall_speed")? {
            self.fall_speed = speed as f32;
        }
        if let Some(attempts) = config.getuint("lemon", "spawn_attempts")? {
            self.spawn_attempts = attempts as u32;
        }

        // [spawn] section
        if let Some(v) = config.getint("spawn", "min_x")? {
            self.spawn_min_x = v as i32;
        }
        if let Some(v) = config.getint("spawn", "max_x")? {
            self.spawn_max_x = v as i32;
        }
        if let Some(v) = config.getint("spawn", "min_y")? {
            self.spawn_min_y = v as i32;
        }
        if let Some(v) = config.getint("spawn", "max_y")? {
            self.spawn_max_y = v as i32;
        }

        // [assets] section
        if let Some(path) = config.get("assets", "lemon") {
            self.lemon_texture = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "tree") {
            self.tree_texture = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "music") {
            self.music = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "goal_sound") {
            self.goal_sound = PathBuf::from(path);
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "title", Some(self.title.clone()));

        // [game] section
        config.set("game", "lemons", Some(self.lemon_count.to_string()));
        config.set("game", "goal", Some(self.goal.to_string()));

        // [lemon] section
        config.set("lemon", "width", Some(self.lemon_width.to_string()));
        config.set("lemon", "height", Some(self.lemon_height.to_string()));
        config.set("lemon", "fall_speed", Some(self.fall_speed.to_string()));
        config.set(
            "lemon",
            "spawn_attempts",
            Some(self.spawn_attempts.to_string()),
        );

        // [spawn] section
        config.set("spawn", "min_x", Some(self.spawn_min_x.to_string()));
        config.set("spawn", "max_x", Some(self.spawn_max_x.to_string()));
        config.set("spawn", "min_y", Some(self.spawn_min_y.to_string()));
        config.set("spawn", "max_y", Some(self.spawn_max_y.to_string()));

        // [assets] section
        config.set(
            "assets",
            "lemon",
            Some(self.lemon_texture.display().to_string()),
        );
        config.set(
            "assets",
            "tree",
            Some(self.tree_texture.display().to_string()),
        );
        config.set("assets", "music", Some(self.music.display().to_string()));
        config.set(
            "assets",
            "goal_sound",
            Some(self.goal_sound.display().to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Lemons whose centre passes this y are removed.
    pub fn scene_height(&self) -> f32 {
        self.window_height as f32
    }

    /// The tree fills the window minus a 100px horizontal and 50px top margin.
    pub fn tree_size(&self) -> Vector2 {
        Vector2::new(
            self.window_width.saturating_sub(100) as f32,
            self.window_height.saturating_sub(50) as f32,
        )
    }

    /// Tree is centred horizontally and stands on the bottom edge.
    pub fn tree_position(&self) -> Vector2 {
        let size = self.tree_size();
        Vector2::new(
            self.window_width as f32 / 2.0 - size.x / 2.0,
            self.window_height as f32 - size.y,
        )
    }

    pub fn lemon_size(&self) -> Vector2 {
        Vector2::new(self.lemon_width, self.lemon_height)
    }

    /// Centre point of the completion banner.
    pub fn banner_center(&self) -> Vector2 {
        Vector2::new(self.window_width as f32 / 2.0, BANNER_Y)
    }
}
