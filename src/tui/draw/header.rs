//! Header: logo, exam title, student identity, countdown timer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app;

use super::super::app::{App, Screen};
use super::super::constants::{ACCENT, TIMER_CRIT_SECS, TIMER_WARN_SECS};

/// Width reserved for the right-hand status (timer or screen label).
const STATUS_WIDTH: u16 = 14;

fn format_countdown(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn countdown_color(secs: u64) -> Color {
    if secs < TIMER_CRIT_SECS {
        Color::Red
    } else if secs < TIMER_WARN_SECS {
        Color::Yellow
    } else {
        Color::Green
    }
}

pub(super) fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(STATUS_WIDTH),
        ])
        .split(area);

    let logo = Line::from(vec![
        Span::styled("◆ ", Style::default().fg(ACCENT)),
        Span::styled(app::NAME, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(logo), chunks[0]);

    // Centered: exam title, plus student identity while taking the exam.
    let title_str = match app.screen {
        Screen::Exam | Screen::Results if !app.student_name.is_empty() => {
            if app.student_email.is_empty() {
                format!("{} — {}", app.exam.title, app.student_name)
            } else {
                format!(
                    "{} — {} ({})",
                    app.exam.title, app.student_name, app.student_email
                )
            }
        }
        _ => app.exam.title.clone(),
    };
    let title_len = title_str.chars().count() as u16;
    let title_area = Rect {
        x: area.x + area.width.saturating_sub(title_len) / 2,
        y: area.y,
        width: title_len.min(area.width),
        height: area.height,
    };
    let title = Line::from(Span::styled(
        title_str,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(title), title_area);

    let status = match app.screen {
        Screen::Exam => {
            if app.config.show_timer {
                let secs = app.time_remaining().as_secs();
                Line::from(Span::styled(
                    format!("⏱ {}", format_countdown(secs)),
                    Style::default()
                        .fg(countdown_color(secs))
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled("timed", Style::default().fg(Color::DarkGray)))
            }
        }
        Screen::Results => Line::from(Span::styled(
            "results",
            Style::default().fg(Color::DarkGray),
        )),
        Screen::Dashboard => Line::from(Span::styled(
            "dashboard",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(
        Paragraph::new(status).alignment(ratatui::layout::Alignment::Right),
        chunks[2],
    );
}
