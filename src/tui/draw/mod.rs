//! TUI rendering: layout and widgets for the exam screens.

mod dashboard;
mod exam;
mod header;
mod notation;
mod popups;
mod results;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::app::{App, Screen};

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    header::draw_header(f, app, chunks[0]);
    match app.screen {
        Screen::Exam => exam::draw_exam(f, app, chunks[1]),
        Screen::Results => results::draw_results(f, app, chunks[1]),
        Screen::Dashboard => dashboard::draw_dashboard(f, app, chunks[1]),
    }
    draw_footer(f, app, chunks[2]);

    if let Some(action) = app.confirm_popup {
        popups::draw_confirm_popup(f, area, app, action);
    }
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.screen {
        Screen::Exam => "←/→ question  ↑/↓ option  Enter/1-9 answer  s submit  q quit",
        Screen::Results => "↑/↓ scroll  1-9 open video  q quit",
        Screen::Dashboard => "↑/↓ scroll  r reload  q quit",
    };
    let line = Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    f.render_widget(Paragraph::new(line), area);
}
