use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The fixed-size drawing surface a scene is laid out on.
///
/// `margin_right` is reserved for row labels and excluded from the
/// horizontal extent available to the time scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub margin_right: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64, margin_right: f64) -> Self {
        Self {
            width,
            height,
            margin_right,
        }
    }

    /// Horizontal extent available to plotted marks.
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin_right
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            margin_right: 90.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_canvas_reserves_label_margin() {
        let canvas = Canvas::default();
        assert_eq!(canvas.width, 640.0);
        assert_eq!(canvas.height, 480.0);
        assert_eq!(canvas.plot_width(), 550.0);
    }
}
