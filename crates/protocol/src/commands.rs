use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::Point;

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` per scene. Renderers consume the
/// list sequentially — each command carries all the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Begin a logical group (one row of the scene). `translate` offsets
    /// all commands until the matching `EndGroup`.
    BeginGroup { id: String, translate: Point },

    /// End the current group.
    EndGroup,

    /// Draw a filled circle. The center is relative to the enclosing
    /// group's translate.
    DrawCircle {
        center: Point,
        radius: f64,
        color: ThemeToken,
    },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}
