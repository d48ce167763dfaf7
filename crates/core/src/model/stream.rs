use dotline_protocol::ThemeToken;
use serde::{Deserialize, Serialize};

/// One named source of dated events.
///
/// The three streams are fixed at compile time — a row is stream identity,
/// not data. Each stream carries its input key, display label, row offset,
/// and dot color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamKind {
    Blog,
    Twitter,
    Code,
}

impl StreamKind {
    /// Render order, top row first.
    pub const ALL: [StreamKind; 3] = [Self::Blog, Self::Twitter, Self::Code];

    /// Key under which the stream appears in the input data map.
    pub fn key(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Twitter => "twitter",
            Self::Code => "code",
        }
    }

    /// Human-readable row label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Blog => "Blog",
            Self::Twitter => "Twitter",
            Self::Code => "Code",
        }
    }

    /// Vertical translate of the stream's row, in logical pixels.
    pub fn row_offset(self) -> f64 {
        match self {
            Self::Blog => 6.0,
            Self::Twitter => 30.0,
            Self::Code => 54.0,
        }
    }

    pub fn dot_color(self) -> ThemeToken {
        match self {
            Self::Blog => ThemeToken::BlogDot,
            Self::Twitter => ThemeToken::TwitterDot,
            Self::Code => ThemeToken::CodeDot,
        }
    }
}
