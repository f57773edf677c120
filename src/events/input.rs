//! Input events handed over by an [`InputSource`](crate::platform::InputSource).

use raylib::prelude::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The player asked to close the game.
    Quit,
    /// A mouse button went down at window coordinates `(x, y)`.
    PointerDown { x: f32, y: f32 },
}

impl InputEvent {
    pub fn pointer_down(point: Vector2) -> Self {
        InputEvent::PointerDown {
            x: point.x,
            y: point.y,
        }
    }
}
