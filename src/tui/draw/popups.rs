//! Confirmation popup for submit/quit.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::super::app::{App, ConfirmAction};
use super::super::constants::ACCENT;

/// Centered rect of the given size, clamped to the parent area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

pub(super) fn draw_confirm_popup(f: &mut Frame, area: Rect, app: &App, action: ConfirmAction) {
    let unanswered = app.question_count().saturating_sub(app.answered_count());
    let (title, message) = match action {
        ConfirmAction::Submit => {
            let msg = if unanswered > 0 {
                format!(
                    "Submit the exam? {} question{} still unanswered.",
                    unanswered,
                    if unanswered == 1 { " is" } else { "s are" }
                )
            } else {
                "Submit the exam? All questions answered.".to_string()
            };
            (" Submit exam ", msg)
        }
        ConfirmAction::Quit => (
            " Quit ",
            "Quit without submitting? Your answers will be lost.".to_string(),
        ),
    };

    let popup = centered_rect(56, 5, area);
    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(Span::styled(
            title,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    let lines = vec![
        Line::from(message),
        Line::from(Span::styled(
            "y: confirm   n/Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(ratatui::widgets::Wrap { trim: false }),
        popup,
    );
}
