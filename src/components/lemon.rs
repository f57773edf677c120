//! Lemon component: one collectible hanging on the tree.
//!
//! A lemon's lifecycle is a single tagged state driven by [`LemonState::on`]:
//!
//! ```text
//! Idle --Hit--> Clicked --Release--> Falling --LeftScene--> Removed { collected: true }
//!   \
//!    `--LeftScene--> Removed { collected: false }
//! ```
//!
//! `Clicked` only exists for the duration of a hit: [`Lemon::collect`]
//! applies `Hit` and `Release` back to back, so by the time a tick runs a
//! collected lemon is already `Falling`.

use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;

/// Lifecycle state of a lemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LemonState {
    /// Hanging on the tree, waiting for a click.
    #[default]
    Idle,
    /// Hit by a pointer press this step.
    Clicked,
    /// Dropping towards the bottom of the scene.
    Falling,
    /// Past the scene boundary. No longer drawn or used for spacing.
    Removed {
        /// Whether the player had collected this lemon before it left.
        collected: bool,
    },
}

/// Inputs to the lemon state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LemonEvent {
    /// A valid pointer press landed inside the lemon.
    Hit,
    /// The click has been counted; the lemon lets go of the branch.
    Release,
    /// The lemon's position passed the lower scene boundary.
    LeftScene,
}

impl LemonState {
    /// Transition function. Pairs not listed in the module docs leave the
    /// state unchanged.
    pub fn on(self, event: LemonEvent) -> LemonState {
        match (self, event) {
            (LemonState::Idle, LemonEvent::Hit) => LemonState::Clicked,
            (LemonState::Clicked, LemonEvent::Release) => LemonState::Falling,
            (LemonState::Idle, LemonEvent::LeftScene) => LemonState::Removed { collected: false },
            (LemonState::Falling, LemonEvent::LeftScene) => LemonState::Removed { collected: true },
            (state, _) => state,
        }
    }

    pub fn is_removed(self) -> bool {
        matches!(self, LemonState::Removed { .. })
    }

    /// True once the lemon has been clicked, whatever happened afterwards.
    pub fn was_collected(self) -> bool {
        matches!(
            self,
            LemonState::Clicked | LemonState::Falling | LemonState::Removed { collected: true }
        )
    }
}

/// A single lemon. `pos` is the centre of its box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lemon {
    pub pos: Vector2,
    pub collider: BoxCollider,
    state: LemonState,
}

impl Lemon {
    pub fn new(pos: Vector2, collider: BoxCollider) -> Self {
        Self {
            pos,
            collider,
            state: LemonState::Idle,
        }
    }

    pub fn state(&self) -> LemonState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == LemonState::Idle
    }

    pub fn is_falling(&self) -> bool {
        self.state == LemonState::Falling
    }

    pub fn is_removed(&self) -> bool {
        self.state.is_removed()
    }

    /// Pointer hit test: inside the box and still hanging.
    pub fn hit_test(&self, point: Vector2) -> bool {
        self.is_idle() && self.collider.contains_point(self.pos, point)
    }

    /// Collect the lemon if `point` hits it.
    ///
    /// Returns true exactly once per lemon; the lemon is `Falling` afterwards.
    pub fn collect(&mut self, point: Vector2) -> bool {
        if !self.hit_test(point) {
            return false;
        }
        self.state = self.state.on(LemonEvent::Hit).on(LemonEvent::Release);
        true
    }

    /// Move a falling lemon down by `dy`. Other states stay put.
    pub fn fall(&mut self, dy: f32) -> bool {
        if self.is_falling() {
            self.pos.y += dy;
            true
        } else {
            false
        }
    }

    /// Whether the lemon's centre is below `boundary`.
    pub fn is_past(&self, boundary: f32) -> bool {
        self.pos.y > boundary
    }

    pub fn leave_scene(&mut self) {
        self.state = self.state.on(LemonEvent::LeftScene);
    }

    /// Top-left corner used when drawing the lemon sprite.
    pub fn top_left(&self) -> Vector2 {
        self.collider.top_left(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemon_at(x: f32, y: f32) -> Lemon {
        Lemon::new(Vector2::new(x, y), BoxCollider::new(30.0, 15.0))
    }

    #[test]
    fn transition_table() {
        use LemonEvent::*;
        use LemonState::*;

        assert_eq!(Idle.on(Hit), Clicked);
        assert_eq!(Clicked.on(Release), Falling);
        assert_eq!(Idle.on(LeftScene), Removed { collected: false });
        assert_eq!(Falling.on(LeftScene), Removed { collected: true });

        // No way back to Idle and no double click.
        assert_eq!(Clicked.on(Hit), Clicked);
        assert_eq!(Falling.on(Hit), Falling);
        assert_eq!(Idle.on(Release), Idle);
        assert_eq!(Falling.on(Release), Falling);
        assert_eq!(Removed { collected: true }.on(Hit), Removed { collected: true });
        assert_eq!(
            Removed { collected: false }.on(LeftScene),
            Removed { collected: false }
        );
    }

    #[test]
    fn was_collected_tracks_clicks() {
        assert!(!LemonState::Idle.was_collected());
        assert!(LemonState::Clicked.was_collected());
        assert!(LemonState::Falling.was_collected());
        assert!(LemonState::Removed { collected: true }.was_collected());
        assert!(!LemonState::Removed { collected: false }.was_collected());
    }

    #[test]
    fn collect_only_once() {
        let mut lemon = lemon_at(200.0, 150.0);
        let click = Vector2::new(205.0, 152.0);

        assert!(lemon.collect(click));
        assert!(lemon.is_falling());
        assert!(!lemon.collect(click));
        assert!(!lemon.hit_test(click));
    }

    #[test]
    fn collect_misses_outside_the_box() {
        let mut lemon = lemon_at(200.0, 150.0);
        assert!(!lemon.collect(Vector2::new(215.0, 150.0)));
        assert!(!lemon.collect(Vector2::new(200.0, 157.5)));
        assert!(lemon.is_idle());
    }

    #[test]
    fn only_falling_lemons_move() {
        let mut lemon = lemon_at(200.0, 150.0);
        assert!(!lemon.fall(5.0));
        assert_eq!(lemon.pos.y, 150.0);

        lemon.collect(lemon.pos);
        assert!(lemon.fall(5.0));
        assert_eq!(lemon.pos.y, 155.0);

        lemon.leave_scene();
        assert!(!lemon.fall(5.0));
        assert_eq!(lemon.pos.y, 155.0);
    }

    #[test]
    fn top_left_offsets_by_half_size() {
        let lemon = lemon_at(200.0, 150.0);
        assert_eq!(lemon.top_left(), Vector2::new(185.0, 142.5));
    }
}
