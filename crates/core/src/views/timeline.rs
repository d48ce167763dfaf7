use chrono::{DateTime, Utc};
use dotline_protocol::{Canvas, Point, RenderCommand, TextAlign, ThemeToken};

use crate::model::{ActivitySet, StreamKind};
use crate::scale::{TimeScale, TimeWindow};

const DOT_RADIUS: f64 = 6.0;
const LABEL_OFFSET_X: f64 = 20.0;
const FONT_SIZE: f64 = 11.0;

/// Render the activity timeline: one row of dots per stream on a shared
/// horizontal time scale, with a text label per row.
///
/// `now` is the injected clock and forms the upper bound of the time
/// window — rendering twice with the same set and the same `now` produces
/// identical commands.
pub fn render_timeline(
    set: &ActivitySet,
    canvas: &Canvas,
    now: DateTime<Utc>,
) -> Vec<RenderCommand> {
    let window = TimeWindow::enclosing(set.earliest(), now);
    let scale = TimeScale::new(window, canvas.plot_width());

    let mut commands = Vec::with_capacity(set.len() + StreamKind::ALL.len() * 3);

    for (kind, events) in set.iter() {
        // One group per row; the translate carries the vertical offset, so
        // dots and the label sit at y = 0 within it.
        commands.push(RenderCommand::BeginGroup {
            id: kind.key().to_string(),
            translate: Point::new(0.0, kind.row_offset()),
        });

        for &at in events {
            commands.push(RenderCommand::DrawCircle {
                center: Point::new(scale.position(at), 0.0),
                radius: DOT_RADIUS,
                color: kind.dot_color(),
            });
        }

        // The label renders even for an empty stream.
        commands.push(RenderCommand::DrawText {
            position: Point::new(canvas.plot_width() + LABEL_OFFSET_X, 0.0),
            text: kind.label().to_string(),
            color: ThemeToken::LabelText,
            font_size: FONT_SIZE,
            align: TextAlign::Left,
        });

        commands.push(RenderCommand::EndGroup);
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_date;

    fn date(s: &str) -> DateTime<Utc> {
        parse_date(s).unwrap()
    }

    fn circles(commands: &[RenderCommand]) -> Vec<&RenderCommand> {
        commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawCircle { .. }))
            .collect()
    }

    fn labels(commands: &[RenderCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn one_dot_per_event_and_three_labels() {
        let set = ActivitySet {
            blog: vec![date("2024-01-10")],
            twitter: vec![date("2024-01-05")],
            code: vec![],
        };
        let commands = render_timeline(&set, &Canvas::default(), date("2024-02-01"));

        assert_eq!(circles(&commands).len(), 2);
        assert_eq!(labels(&commands), ["Blog", "Twitter", "Code"]);
    }

    #[test]
    fn rows_carry_fixed_offsets() {
        let set = ActivitySet {
            blog: vec![date("2024-01-10")],
            twitter: vec![],
            code: vec![date("2024-01-12"), date("2024-01-13")],
        };
        let commands = render_timeline(&set, &Canvas::default(), date("2024-02-01"));

        let offsets: Vec<f64> = commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::BeginGroup { translate, .. } => Some(translate.y),
                _ => None,
            })
            .collect();
        assert_eq!(offsets, [6.0, 30.0, 54.0]);
    }

    #[test]
    fn later_events_sit_further_right() {
        let set = ActivitySet {
            blog: vec![date("2024-01-10")],
            twitter: vec![date("2024-01-05")],
            code: vec![],
        };
        let commands = render_timeline(&set, &Canvas::default(), date("2024-02-01"));

        let xs: Vec<f64> = commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawCircle { center, .. } => Some(center.x),
                _ => None,
            })
            .collect();
        // Commands run blog row first, so xs = [blog, twitter].
        assert!(xs[0] > xs[1], "{xs:?}");
        assert!(xs.iter().all(|x| *x >= 0.0));
    }

    #[test]
    fn labels_sit_in_the_reserved_margin() {
        let canvas = Canvas::default();
        let set = ActivitySet::default();
        let commands = render_timeline(&set, &canvas, date("2024-02-01"));

        for command in &commands {
            if let RenderCommand::DrawText { position, .. } = command {
                assert_eq!(position.x, canvas.plot_width() + 20.0);
            }
        }
    }

    #[test]
    fn empty_set_still_renders_three_labeled_rows() {
        let commands = render_timeline(&ActivitySet::default(), &Canvas::default(), date("2024-02-01"));

        assert!(circles(&commands).is_empty());
        assert_eq!(labels(&commands).len(), 3);

        let groups = commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::BeginGroup { .. }))
            .count();
        assert_eq!(groups, 3);
    }

    #[test]
    fn same_input_and_clock_render_identically() {
        let set = ActivitySet {
            blog: vec![date("2024-01-10"), date("2024-01-20")],
            twitter: vec![date("2024-01-05")],
            code: vec![date("2024-01-15T08:00:00Z")],
        };
        let now = date("2024-02-01");
        let first = render_timeline(&set, &Canvas::default(), now);
        let second = render_timeline(&set, &Canvas::default(), now);
        assert_eq!(first, second);
    }

    #[test]
    fn dots_use_their_stream_color() {
        let set = ActivitySet {
            blog: vec![date("2024-01-10")],
            twitter: vec![date("2024-01-05")],
            code: vec![date("2024-01-15")],
        };
        let commands = render_timeline(&set, &Canvas::default(), date("2024-02-01"));

        let colors: Vec<ThemeToken> = commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawCircle { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(
            colors,
            [ThemeToken::BlogDot, ThemeToken::TwitterDot, ThemeToken::CodeDot]
        );
    }
}
