//! Exam screen keys: navigation, answering, submission.

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::grading;
use crate::core::results::{self, ExamResult};

use super::super::app::{App, ConfirmAction, Screen};
use super::HandleResult;

pub(super) fn handle(key: KeyEvent, app: &mut App) -> HandleResult {
    let question = &app.exam.questions[app.current_question];
    let option_count = question.options.len();

    match key.code {
        KeyCode::Left | KeyCode::Char('p') => {
            if app.current_question > 0 {
                app.goto_question(app.current_question - 1);
            }
        }
        KeyCode::Right | KeyCode::Char('n') => {
            app.goto_question(app.current_question + 1);
        }
        KeyCode::Up => {
            app.option_cursor = app.option_cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if app.option_cursor + 1 < option_count {
                app.option_cursor += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.choose_option(app.option_cursor);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            app.choose_option(index);
        }
        KeyCode::Char('s') => {
            app.confirm_popup = Some(ConfirmAction::Submit);
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.confirm_popup = Some(ConfirmAction::Quit);
        }
        _ => {}
    }
    HandleResult::Continue
}

/// Grade the answers, persist the result, and move to the results screen.
/// Also the time-up path, so it must not require further input.
pub(crate) fn submit(app: &mut App) {
    if app.submitted {
        return;
    }
    app.submitted = true;

    let summary = grading::grade(&app.exam, &app.answers);
    let result = ExamResult::new(
        &app.exam,
        &app.student_name,
        &app.student_email,
        app.answers.clone(),
        summary,
    );
    if let Err(e) = results::save_result(&result) {
        log::error!("failed to save result: {}", e);
        app.save_error = Some(e.to_string());
    }
    app.result = Some(result);
    app.screen = Screen::Results;
    app.scroll = 0;
    app.confirm_popup = None;
}
