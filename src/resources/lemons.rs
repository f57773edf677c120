//! Lemon population resource.
//!
//! [`LemonManager`] owns every lemon in the session, places new ones under
//! the spawn spacing rule and advances the falling ones once per tick.
//!
//! # Spacing
//!
//! A candidate position is accepted when, against every lemon that has not
//! been removed, the distance between centres is at least
//! `width + SPACING_MARGIN` on x **and** `height + SPACING_MARGIN` on y.
//! Placement tries up to `spawn_attempts` random integer positions. When the
//! budget runs out the last candidate is used anyway and the
//! [`Placement`] is flagged `degraded`.
//!
//! # Respawn
//!
//! A lemon that leaves the scene without ever being clicked is replaced in
//! the same tick, unless the session is paused. Collected lemons are never
//! replaced.

use bevy_ecs::prelude::Resource;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::lemon::Lemon;
use crate::resources::gameconfig::GameConfig;

/// Extra pixels required between lemon centres on top of the lemon size.
pub const SPACING_MARGIN: f32 = 1.0;

/// Inclusive rectangle of integer positions lemons may spawn at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnArea {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl SpawnArea {
    /// Random integer point inside the area. Swapped bounds are tolerated.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> Vector2 {
        let x = rng.i32(self.min_x.min(self.max_x)..=self.min_x.max(self.max_x));
        let y = rng.i32(self.min_y.min(self.max_y)..=self.min_y.max(self.max_y));
        Vector2::new(x as f32, y as f32)
    }

    pub fn contains(&self, point: Vector2) -> bool {
        let (lo_x, hi_x) = (self.min_x.min(self.max_x), self.min_x.max(self.max_x));
        let (lo_y, hi_y) = (self.min_y.min(self.max_y), self.min_y.max(self.max_y));
        point.x >= lo_x as f32
            && point.x <= hi_x as f32
            && point.y >= lo_y as f32
            && point.y <= hi_y as f32
    }
}

/// Tuning shared by every lemon of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LemonSettings {
    pub width: f32,
    pub height: f32,
    /// Pixels per tick.
    pub fall_speed: f32,
    /// Lemons whose centre goes below this y are removed.
    pub scene_height: f32,
    pub spawn_area: SpawnArea,
    pub spawn_attempts: u32,
}

impl Default for LemonSettings {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl LemonSettings {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            width: config.lemon_width,
            height: config.lemon_height,
            fall_speed: config.fall_speed,
            scene_height: config.scene_height(),
            spawn_area: SpawnArea {
                min_x: config.spawn_min_x,
                max_x: config.spawn_max_x,
                min_y: config.spawn_min_y,
                max_y: config.spawn_max_y,
            },
            spawn_attempts: config.spawn_attempts,
        }
    }

    pub fn collider(&self) -> BoxCollider {
        BoxCollider::new(self.width, self.height)
    }
}

/// Result of one placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub lemon: Lemon,
    /// Candidates drawn, including the accepted one.
    pub attempts: u32,
    /// True when no candidate satisfied the spacing rule.
    pub degraded: bool,
}

/// What one call to [`LemonManager::tick`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub moved: usize,
    pub removed: usize,
    pub respawned: usize,
    /// Of `removed`, how many had been collected.
    pub removed_collected: usize,
}

/// Whether `candidate` keeps its distance from every live lemon in `existing`.
pub fn is_well_spaced(candidate: Vector2, existing: &[Lemon], collider: &BoxCollider) -> bool {
    existing
        .iter()
        .filter(|other| !other.is_removed())
        .all(|other| collider.spaced_from(candidate, other.pos, SPACING_MARGIN))
}

/// Pick a position for a new lemon against `existing`.
///
/// Always draws at least one candidate, even with a zero attempt budget.
pub fn place(existing: &[Lemon], settings: &LemonSettings, rng: &mut fastrand::Rng) -> Placement {
    let collider = settings.collider();
    let budget = settings.spawn_attempts.max(1);

    let mut candidate = settings.spawn_area.sample(rng);
    for attempt in 1..=budget {
        if attempt > 1 {
            candidate = settings.spawn_area.sample(rng);
        }
        if is_well_spaced(candidate, existing, &collider) {
            return Placement {
                lemon: Lemon::new(candidate, collider),
                attempts: attempt,
                degraded: false,
            };
        }
    }

    debug!(
        "No spaced position after {} attempts; placing lemon at ({}, {})",
        budget, candidate.x, candidate.y
    );
    Placement {
        lemon: Lemon::new(candidate, collider),
        attempts: budget,
        degraded: true,
    }
}

/// Owner of the session's lemons.
#[derive(Resource, Debug, Clone)]
pub struct LemonManager {
    lemons: Vec<Lemon>,
    settings: LemonSettings,
    rng: fastrand::Rng,
}

impl LemonManager {
    pub fn new(settings: LemonSettings, rng: fastrand::Rng) -> Self {
        Self {
            lemons: Vec::new(),
            settings,
            rng,
        }
    }

    /// Deterministic manager for a given seed.
    pub fn with_seed(settings: LemonSettings, seed: u64) -> Self {
        Self::new(settings, fastrand::Rng::with_seed(seed))
    }

    pub fn settings(&self) -> &LemonSettings {
        &self.settings
    }

    /// All lemons in draw order.
    pub fn lemons(&self) -> &[Lemon] {
        &self.lemons
    }

    pub fn lemons_mut(&mut self) -> &mut [Lemon] {
        &mut self.lemons
    }

    /// Lemons that should be drawn this frame.
    pub fn visible(&self) -> impl Iterator<Item = &Lemon> {
        self.lemons.iter().filter(|lemon| !lemon.is_removed())
    }

    pub fn active_count(&self) -> usize {
        self.visible().count()
    }

    pub fn is_empty(&self) -> bool {
        self.lemons.is_empty()
    }

    /// Add a lemon as is, without any spacing check.
    pub fn insert(&mut self, lemon: Lemon) {
        self.lemons.push(lemon);
    }

    /// Place one lemon against the current population and add it.
    pub fn spawn(&mut self) -> Placement {
        let placement = place(&self.lemons, &self.settings, &mut self.rng);
        self.lemons.push(placement.lemon);
        placement
    }

    /// Spawn `count` lemons one at a time. Returns how many were degraded.
    pub fn populate(&mut self, count: usize) -> usize {
        let mut degraded = 0;
        for _ in 0..count {
            if self.spawn().degraded {
                degraded += 1;
            }
        }
        debug!(
            "Populated {} lemons ({} degraded), {} on the tree",
            count,
            degraded,
            self.active_count()
        );
        degraded
    }

    /// Advance one tick.
    ///
    /// Falling lemons drop by `fall_speed` whatever `paused` says. Lemons
    /// past the scene boundary are removed; uncollected ones are replaced
    /// when `paused` is false. Removed lemons are dropped before returning.
    pub fn tick(&mut self, paused: bool) -> TickReport {
        let mut report = TickReport::default();
        let boundary = self.settings.scene_height;

        for lemon in self.lemons.iter_mut() {
            if lemon.fall(self.settings.fall_speed) {
                report.moved += 1;
            }
        }

        let mut to_replace = 0;
        for lemon in self.lemons.iter_mut() {
            if lemon.is_removed() || !lemon.is_past(boundary) {
                continue;
            }
            lemon.leave_scene();
            report.removed += 1;
            if lemon.state().was_collected() {
                report.removed_collected += 1;
            } else if !paused {
                to_replace += 1;
            }
        }

        self.lemons.retain(|lemon| !lemon.is_removed());

        for _ in 0..to_replace {
            let placement = self.spawn();
            report.respawned += 1;
            debug!(
                "Respawned lemon at ({}, {})",
                placement.lemon.pos.x, placement.lemon.pos.y
            );
        }

        if report.removed > 0 {
            debug!(
                "Tick removed {} lemons ({} collected), respawned {}",
                report.removed, report.removed_collected, report.respawned
            );
        }
        report
    }
}
