use chrono::{DateTime, Duration, Utc};

/// Lead margin added before the earliest event so the first dot does not
/// sit on the left edge.
pub const LEAD_MARGIN_DAYS: i64 = 7;

/// The visible time domain of one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window enclosing all events up to `now`.
    ///
    /// `start` is the global earliest event minus the lead margin; with no
    /// events at all it falls back to `now` minus the margin, so an empty
    /// scene still has a well-defined axis.
    pub fn enclosing(earliest: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        let anchor = earliest.unwrap_or(now);
        Self {
            start: anchor - Duration::days(LEAD_MARGIN_DAYS),
            end: now,
        }
    }

    pub fn span_ms(&self) -> f64 {
        (self.end.timestamp_millis() - self.start.timestamp_millis()) as f64
    }
}

/// Linear map from a [`TimeWindow`] to `[0, width]` pixels.
#[derive(Debug, Clone, Copy)]
pub struct TimeScale {
    start_ms: f64,
    span_ms: f64,
    width: f64,
}

impl TimeScale {
    pub fn new(window: TimeWindow, width: f64) -> Self {
        Self {
            start_ms: window.start.timestamp_millis() as f64,
            span_ms: window.span_ms(),
            width,
        }
    }

    /// Horizontal position of a timestamp, in pixels from the window start.
    ///
    /// Order-preserving: positions are monotonically non-decreasing in the
    /// timestamp. A degenerate window (zero or negative span) maps every
    /// input to 0.0.
    pub fn position(&self, at: DateTime<Utc>) -> f64 {
        if self.span_ms <= 0.0 {
            return 0.0;
        }
        (at.timestamp_millis() as f64 - self.start_ms) / self.span_ms * self.width
    }
}
