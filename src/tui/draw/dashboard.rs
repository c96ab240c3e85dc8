//! Admin dashboard: stat cards, per-topic performance bars, recent results.

use chrono::TimeZone;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::grading::PerformanceBand;
use crate::core::results::ExamResult;
use crate::core::stats::DashboardStats;

use super::super::app::App;
use super::super::constants::{ACCENT, TOPIC_BAR_WIDTH};
use super::results::band_color;

pub(super) fn draw_dashboard(f: &mut Frame, app: &mut App, area: Rect) {
    let lines = match app.dashboard {
        Some(ref data) => build_lines(&data.stats, &data.results),
        None => vec![Line::from("No results loaded.")],
    };

    let viewport = area.height as usize;
    app.last_max_scroll = lines.len().saturating_sub(viewport);
    app.scroll = app.scroll.min(app.last_max_scroll);

    let para = Paragraph::new(lines).scroll((app.scroll as u16, 0));
    f.render_widget(para, area);
}

fn format_date(unix_secs: u64) -> String {
    match chrono::Utc.timestamp_opt(unix_secs as i64, 0) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        _ => "—".to_string(),
    }
}

fn percent_span(percent: u8) -> Span<'static> {
    Span::styled(
        format!("{:>3}%", percent),
        Style::default()
            .fg(band_color(PerformanceBand::from_percent(percent)))
            .add_modifier(Modifier::BOLD),
    )
}

fn build_lines(stats: &DashboardStats, results: &[ExamResult]) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    let total_questions: usize = stats.topics.iter().map(|t| t.question_count).sum();
    lines.push(Line::from(vec![
        Span::styled("Students ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}   ", stats.total_students),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("Questions ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}   ", total_questions),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("Topics ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}   ", stats.topics.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("Average ", Style::default().fg(Color::DarkGray)),
        percent_span(stats.average_percent),
    ]));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "Topic performance",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    for topic in &stats.topics {
        let filled = (topic.percent as usize * TOPIC_BAR_WIDTH) / 100;
        let bar: String = "█".repeat(filled) + &"░".repeat(TOPIC_BAR_WIDTH - filled);
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<20} ", truncate(&topic.topic, 20))),
            Span::styled(
                bar,
                Style::default().fg(band_color(PerformanceBand::from_percent(topic.percent))),
            ),
            Span::raw(" "),
            percent_span(topic.percent),
            Span::styled(
                format!("  {} questions", topic.question_count),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "Recent results",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    if results.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No exam results yet. Share the exam with students to get started.",
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    for result in results {
        let to_review = if result.incorrect_topics.is_empty() {
            "none — perfect score".to_string()
        } else {
            result.incorrect_topics.join(", ")
        };
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<18} ", truncate(&result.student_name, 18))),
            Span::styled(
                format!("{:<24} ", truncate(&result.student_email, 24)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!(
                "{:>2}/{:<2} ",
                result.score, result.total_questions
            )),
            percent_span(result.percentage()),
            Span::styled(
                format!("  {}  ", format_date(result.completed_at)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("to review: {}", to_review),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
