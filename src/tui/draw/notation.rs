//! Map rendered notation segments onto styled ratatui spans.
//!
//! Content is wrapped first, then each visual line is segmented, so a math
//! span split across a wrap boundary degrades to plain text instead of
//! breaking layout (the scanner treats the unterminated half as text).

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::super::constants::ACCENT;
use super::super::text::{self, MathDisplay, Rendered};

fn math_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::ITALIC)
}

fn error_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Spans for one visual line that may embed `$$...$$` notation. A typesetting
/// failure shows up as a red marker carrying the raw source; surrounding
/// segments render normally.
pub(super) fn notation_spans(input: &str, base: Style) -> Vec<Span<'static>> {
    text::render(input, false)
        .into_iter()
        .map(|segment| match segment {
            Rendered::Text(t) => Span::styled(t, base),
            Rendered::Math { text, .. } => Span::styled(text, math_style()),
            Rendered::Error { raw } => {
                Span::styled(format!("⟨notation error: {}⟩", raw), error_style())
            }
        })
        .collect()
}

/// Wrap `input` to `width` and render each chunk's notation.
pub(super) fn notation_wrapped_lines(
    input: &str,
    width: usize,
    base: Style,
) -> Vec<Line<'static>> {
    text::wrap_lines(input, width)
        .into_iter()
        .map(|chunk| Line::from(notation_spans(&chunk, base)))
        .collect()
}

/// Lines for a standalone notation panel (question_latex / explanation_latex).
/// A full-string `$$...$$` span renders centered in block style; anything else
/// falls back to wrapped inline rendering.
pub(super) fn notation_block_lines(input: &str, width: usize) -> Vec<Line<'static>> {
    let rendered = text::render(input, true);
    if let [one] = rendered.as_slice() {
        match one {
            Rendered::Math {
                text,
                display: MathDisplay::Block,
            } => {
                return text::wrap_lines(text, width)
                    .into_iter()
                    .map(|chunk| {
                        Line::from(Span::styled(
                            chunk,
                            math_style().add_modifier(Modifier::BOLD),
                        ))
                        .centered()
                    })
                    .collect();
            }
            Rendered::Error { raw } => {
                return text::wrap_lines(&format!("⟨notation error: {}⟩", raw), width)
                    .into_iter()
                    .map(|chunk| Line::from(Span::styled(chunk, error_style())).centered())
                    .collect();
            }
            _ => {}
        }
    }
    notation_wrapped_lines(input, width, Style::default())
}
