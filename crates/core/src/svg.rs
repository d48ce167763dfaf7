//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use dotline_protocol::{Canvas, RenderCommand, TextAlign, ThemeToken};

/// Baseline shift that vertically centers row labels on their dots.
const TEXT_DY: &str = ".4em";

/// Render a list of commands as an SVG document string.
///
/// The canvas defines the viewBox dimensions. Groups become `<g>` elements
/// carrying their translate, so command coordinates stay row-relative.
pub fn render_svg(commands: &[RenderCommand], canvas: &Canvas) -> String {
    let width = canvas.width;
    let height = canvas.height;
    let mut svg = String::with_capacity(commands.len() * 100 + 256);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif;font-size:11px">"#,
    ));

    let bg = resolve_color(ThemeToken::Background);
    svg.push_str(&format!(
        r#"<rect width="{width}" height="{height}" fill="{bg}"/>"#,
    ));

    let mut open_groups = 0usize;
    for cmd in commands {
        match cmd {
            RenderCommand::BeginGroup { id, translate } => {
                svg.push_str(&format!(
                    r#"<g id="{}" transform="translate({},{})">"#,
                    escape_xml(id),
                    translate.x,
                    translate.y,
                ));
                open_groups += 1;
            }
            RenderCommand::EndGroup => {
                // An unbalanced EndGroup would corrupt the document.
                if open_groups > 0 {
                    svg.push_str("</g>");
                    open_groups -= 1;
                }
            }
            RenderCommand::DrawCircle {
                center,
                radius,
                color,
            } => {
                let fill = resolve_color(*color);
                svg.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{radius}" fill="{fill}"/>"#,
                    center.x, center.y,
                ));
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let fill = resolve_color(*color);
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                svg.push_str(&format!(
                    r#"<text x="{}" y="{}" dy="{TEXT_DY}" fill="{fill}" font-size="{font_size}" text-anchor="{anchor}">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                ));
            }
        }
    }

    for _ in 0..open_groups {
        svg.push_str("</g>");
    }

    svg.push_str("</svg>");
    svg
}

fn resolve_color(token: ThemeToken) -> &'static str {
    match token {
        ThemeToken::BlogDot => "#B2CC1F",
        ThemeToken::TwitterDot => "#4099FF",
        ThemeToken::CodeDot => "#FF6759",
        ThemeToken::LabelText => "#1a1a2e",
        ThemeToken::Background => "#ffffff",
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
