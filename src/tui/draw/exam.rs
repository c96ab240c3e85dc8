//! Exam screen: progress bar, question card, answer options.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

use crate::core::grading::percentage;

use super::super::app::App;
use super::super::constants::ACCENT;
use super::notation::{notation_block_lines, notation_spans, notation_wrapped_lines};

pub(super) fn draw_exam(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    draw_progress(f, app, chunks[0]);
    draw_question(f, app, chunks[1]);
}

fn draw_progress(f: &mut Frame, app: &App, area: Rect) {
    let answered = app.answered_count();
    let total = app.question_count();
    let percent = percentage(answered, total);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(ACCENT))
        .ratio(f64::from(percent) / 100.0)
        .label(format!("{}/{} answered ({}%)", answered, total, percent));
    f.render_widget(gauge, area);
}

fn draw_question(f: &mut Frame, app: &App, area: Rect) {
    let question = &app.exam.questions[app.current_question];
    let content_width = area.width.saturating_sub(4) as usize;

    let title = format!(
        " Question {} of {} — {} ",
        app.current_question + 1,
        app.question_count(),
        question.topic
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(title, Style::default().fg(ACCENT)));

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.extend(notation_wrapped_lines(
        &question.question_text,
        content_width,
        Style::default().add_modifier(Modifier::BOLD),
    ));

    if let Some(ref latex) = question.question_latex {
        lines.push(Line::default());
        lines.extend(notation_block_lines(latex, content_width));
    }

    if let Some(ref image_url) = question.image_url {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("[image] {}", image_url),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::UNDERLINED),
        )));
    }

    lines.push(Line::default());
    let chosen = app.answers.get(&question.id).copied();
    for (i, option) in question.options.iter().enumerate() {
        let is_chosen = chosen == Some(i);
        let at_cursor = app.option_cursor == i;
        let marker = if is_chosen { "◉" } else { "○" };
        let cursor = if at_cursor { "▸ " } else { "  " };
        let style = if is_chosen {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let row_style = if at_cursor {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        };
        let mut spans = vec![Span::styled(
            format!("{}{} {}. ", cursor, marker, i + 1),
            row_style,
        )];
        spans.extend(notation_spans(option, row_style));
        lines.push(Line::from(spans));
    }

    if app.on_last_question() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Last question — press s to submit the exam",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}
