//! Per-frame draw command list.
//!
//! Render systems never touch the renderer. They append [`DrawCmd`]s to the
//! [`DrawList`] resource, in painter's order, and the frame loop replays them
//! on the [`Renderer`] when it presents the frame. Text anchoring is resolved
//! at replay time because only the renderer knows how wide a string is.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Color, Vector2};

use crate::platform::{Renderer, TextSize, Visual};

/// How a text command's `pos` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// `pos` is the top-left corner.
    #[default]
    TopLeft,
    /// `pos` is the centre of the text box.
    Center,
    /// Continue on the same line right after the previous text; `pos` is
    /// added as an offset.
    AfterPrevious,
}

#[derive(Debug, Clone)]
pub enum DrawCmd {
    Clear(Color),
    Sprite {
        visual: Visual,
        /// Top-left corner.
        pos: Vector2,
    },
    Text {
        content: String,
        pos: Vector2,
        color: Color,
        size: TextSize,
        anchor: TextAnchor,
    },
}

#[derive(Resource, Debug, Clone, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    pub fn clear(&mut self, color: Color) {
        self.push(DrawCmd::Clear(color));
    }

    pub fn sprite(&mut self, visual: Visual, pos: Vector2) {
        self.push(DrawCmd::Sprite { visual, pos });
    }

    pub fn text(
        &mut self,
        content: impl Into<String>,
        pos: Vector2,
        color: Color,
        size: TextSize,
        anchor: TextAnchor,
    ) {
        self.push(DrawCmd::Text {
            content: content.into(),
            pos,
            color,
            size,
            anchor,
        });
    }

    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Replay every command on `renderer` and empty the list.
    ///
    /// Does not call [`Renderer::present`].
    pub fn flush<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        // end of the last text drawn, for AfterPrevious
        let mut cursor = Vector2::zero();

        for cmd in self.cmds.drain(..) {
            match cmd {
                DrawCmd::Clear(color) => renderer.clear(color),
                DrawCmd::Sprite { visual, pos } => renderer.draw(visual, pos),
                DrawCmd::Text {
                    content,
                    pos,
                    color,
                    size,
                    anchor,
                } => {
                    let width = renderer.text_width(&content, size);
                    let top_left = match anchor {
                        TextAnchor::TopLeft => pos,
                        TextAnchor::Center => {
                            Vector2::new(pos.x - width / 2.0, pos.y - size.px() as f32 / 2.0)
                        }
                        TextAnchor::AfterPrevious => {
                            Vector2::new(cursor.x + pos.x, cursor.y + pos.y)
                        }
                    };
                    renderer.draw_text(&content, top_left, color, size);
                    cursor = Vector2::new(top_left.x + width, top_left.y);
                }
            }
        }
    }
}
