//! Event handlers for the TUI: keyboard, per screen.

mod dashboard;
mod exam;
mod results;

pub(super) use exam::submit;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, ConfirmAction, Screen};

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

pub fn handle_key(key: KeyEvent, app: &mut App) -> HandleResult {
    // Ctrl+C always exits, popup or not.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return HandleResult::Break;
    }

    if let Some(action) = app.confirm_popup {
        return handle_confirm(key, app, action);
    }

    match app.screen {
        Screen::Exam => exam::handle(key, app),
        Screen::Results => results::handle(key, app),
        Screen::Dashboard => dashboard::handle(key, app),
    }
}

fn handle_confirm(key: KeyEvent, app: &mut App, action: ConfirmAction) -> HandleResult {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.confirm_popup = None;
            match action {
                ConfirmAction::Submit => {
                    exam::submit(app);
                    HandleResult::Continue
                }
                ConfirmAction::Quit => HandleResult::Break,
            }
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.confirm_popup = None;
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::exam::sample_exam;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn app() -> App {
        App::for_exam(
            Config { show_timer: true },
            sample_exam(),
            "Ada".to_string(),
            "ada@example.com".to_string(),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_breaks() {
        let mut app = app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(handle_key(key, &mut app), HandleResult::Break));
    }

    #[test]
    fn quit_needs_confirmation_during_exam() {
        let mut app = app();
        assert!(matches!(
            handle_key(press(KeyCode::Char('q')), &mut app),
            HandleResult::Continue
        ));
        assert_eq!(app.confirm_popup, Some(ConfirmAction::Quit));
        // n cancels.
        handle_key(press(KeyCode::Char('n')), &mut app);
        assert_eq!(app.confirm_popup, None);
        // y on a re-opened popup quits.
        handle_key(press(KeyCode::Char('q')), &mut app);
        assert!(matches!(
            handle_key(press(KeyCode::Char('y')), &mut app),
            HandleResult::Break
        ));
    }

    #[test]
    fn digits_answer_and_arrows_navigate() {
        let mut app = app();
        handle_key(press(KeyCode::Char('2')), &mut app);
        assert_eq!(app.answers.get("q1"), Some(&1));
        handle_key(press(KeyCode::Right), &mut app);
        assert_eq!(app.current_question, 1);
        handle_key(press(KeyCode::Left), &mut app);
        assert_eq!(app.current_question, 0);
    }

    #[test]
    fn enter_chooses_option_at_cursor() {
        let mut app = app();
        handle_key(press(KeyCode::Down), &mut app);
        handle_key(press(KeyCode::Down), &mut app);
        handle_key(press(KeyCode::Enter), &mut app);
        assert_eq!(app.answers.get("q1"), Some(&2));
    }

    #[test]
    fn submit_flow_grades_and_switches_screen() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        unsafe { std::env::set_var("EXAMDECK_DATA_DIR", tmp.path()) };

        let mut app = app();
        handle_key(press(KeyCode::Char('1')), &mut app); // q1 correct
        handle_key(press(KeyCode::Char('s')), &mut app);
        assert_eq!(app.confirm_popup, Some(ConfirmAction::Submit));
        handle_key(press(KeyCode::Char('y')), &mut app);

        assert!(app.submitted);
        assert_eq!(app.screen, Screen::Results);
        let result = app.result.as_ref().expect("graded result");
        assert_eq!(result.score, 1);
        assert_eq!(result.incorrect_topics, vec!["Algebra", "Geometry"]);

        // Time-up path: the event loop calls submit directly when the deadline
        // passes, with no confirmation popup in between.
        let mut timed_out = App::for_exam(
            Config { show_timer: true },
            sample_exam(),
            "Bea".to_string(),
            String::new(),
        );
        handle_key(press(KeyCode::Char('1')), &mut timed_out);
        timed_out.deadline = std::time::Instant::now()
            .checked_sub(std::time::Duration::from_secs(1))
            .unwrap_or_else(std::time::Instant::now);
        assert!(timed_out.time_expired());
        submit(&mut timed_out);
        assert!(timed_out.submitted);
        assert_eq!(timed_out.screen, Screen::Results);
        assert_eq!(timed_out.confirm_popup, None);
        let result = timed_out.result.as_ref().expect("graded result");
        assert_eq!(result.score, 1);

        unsafe { std::env::remove_var("EXAMDECK_DATA_DIR") };
    }

    #[test]
    fn results_screen_quits_without_confirmation() {
        let mut app = app();
        app.screen = Screen::Results;
        assert!(matches!(
            handle_key(press(KeyCode::Char('q')), &mut app),
            HandleResult::Break
        ));
    }
}
