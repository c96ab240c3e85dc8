//! Results screen: score summary and incorrect answers grouped by topic,
//! with numbered remediation video links.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::grading::{self, PerformanceBand};
use crate::core::video;

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_WARN, BAND_HIGH, BAND_LOW, BAND_MID};
use super::notation::{notation_block_lines, notation_wrapped_lines};

pub(super) fn band_color(band: PerformanceBand) -> Color {
    match band {
        PerformanceBand::High => BAND_HIGH,
        PerformanceBand::Mid => BAND_MID,
        PerformanceBand::Low => BAND_LOW,
    }
}

pub(super) fn draw_results(f: &mut Frame, app: &mut App, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let lines = build_lines(app, width);

    let viewport = area.height as usize;
    app.last_max_scroll = lines.len().saturating_sub(viewport);
    app.scroll = app.scroll.min(app.last_max_scroll);

    let para = Paragraph::new(lines).scroll((app.scroll as u16, 0));
    f.render_widget(para, area);
}

/// Register a video link and return its numbered label.
fn link_label(app_links: &mut Vec<String>, url: &str) -> String {
    app_links.push(video::embed_url(url));
    format!("[{}]", app_links.len())
}

fn build_lines(app: &mut App, width: usize) -> Vec<Line<'static>> {
    let Some(result) = app.result.clone() else {
        return vec![Line::from("No result to display.")];
    };
    let percent = result.percentage();
    let band = band_color(PerformanceBand::from_percent(percent));
    let mut links: Vec<String> = Vec::new();
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(Span::styled(
        "Exam Results",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("{} ({})", result.student_name, result.student_email),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {} correct  ", result.score),
            Style::default().fg(BAND_HIGH).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} incorrect  ", result.total_questions - result.score),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{}%", percent),
            Style::default().fg(band).add_modifier(Modifier::BOLD),
        ),
    ]));

    if let Some(ref err) = app.save_error {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Could not save this result: {}", err),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::default());

    if result.incorrect_topics.is_empty() {
        lines.push(Line::from(Span::styled(
            "Perfect score! 🎉",
            Style::default().fg(BAND_HIGH).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(
            "You answered every question correctly. Excellent work!",
        ));
        app.video_links = links;
        return lines;
    }

    lines.push(Line::from(Span::styled(
        format!("Topics to review ({})", result.incorrect_topics.len()),
        Style::default()
            .fg(ACCENT_WARN)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    for topic in &result.incorrect_topics {
        let wrong = grading::incorrect_questions(&app.exam, &result.answers, topic);

        let mut header = vec![Span::styled(
            format!("▍Topic: {}  ", topic),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )];
        if let Some(url) = app.exam.topic_video(topic) {
            let label = link_label(&mut links, url);
            header.push(Span::styled(
                format!("{} topic explanation video", label),
                Style::default()
                    .fg(ACCENT)
                    .add_modifier(Modifier::UNDERLINED),
            ));
        }
        header.push(Span::styled(
            format!("  ({} to review)", wrong.len()),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(header));
        lines.push(Line::default());

        for (i, question) in wrong.iter().enumerate() {
            lines.extend(notation_wrapped_lines(
                &format!("Question {}: {}", i + 1, question.question_text),
                width.saturating_sub(2),
                Style::default().add_modifier(Modifier::BOLD),
            ));

            if let Some(ref latex) = question.question_latex {
                lines.extend(notation_block_lines(latex, width.saturating_sub(4)));
            }
            if let Some(ref image_url) = question.image_url {
                lines.push(Line::from(Span::styled(
                    format!("  [image] {}", image_url),
                    Style::default().fg(Color::DarkGray),
                )));
            }

            let correct = &question.options[question.correct_answer];
            lines.push(Line::from(vec![
                Span::styled("  ✅ Correct: ", Style::default().fg(BAND_HIGH)),
                Span::styled(correct.clone(), Style::default().fg(BAND_HIGH)),
            ]));
            match result.answers.get(&question.id) {
                Some(&chosen) if chosen != question.correct_answer => {
                    lines.push(Line::from(vec![
                        Span::styled("  ❌ Your answer: ", Style::default().fg(BAND_LOW)),
                        Span::styled(
                            question.options[chosen].clone(),
                            Style::default().fg(BAND_LOW),
                        ),
                    ]));
                }
                Some(_) => {}
                None => {
                    lines.push(Line::from(Span::styled(
                        "  ❌ Not answered",
                        Style::default().fg(BAND_LOW),
                    )));
                }
            }

            if let Some(ref explanation) = question.explanation_latex {
                lines.push(Line::from(Span::styled(
                    "  Explanation:",
                    Style::default().fg(ACCENT),
                )));
                lines.extend(notation_block_lines(explanation, width.saturating_sub(4)));
            }

            if let Some(ref url) = question.video_solution_url {
                let label = link_label(&mut links, url);
                lines.push(Line::from(Span::styled(
                    format!("  {} watch solution video", label),
                    Style::default()
                        .fg(ACCENT)
                        .add_modifier(Modifier::UNDERLINED),
                )));
            }
            lines.push(Line::default());
        }
    }

    lines.push(Line::from(Span::styled(
        "Press the number of a link to open its video in the browser.",
        Style::default().fg(Color::DarkGray),
    )));

    app.video_links = links;
    lines
}
