use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    BlogDot,
    TwitterDot,
    CodeDot,

    LabelText,

    Background,
}
