//! Dashboard keys: scrolling and reloading stored results.

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::results;
use crate::core::stats;

use super::super::app::{App, DashboardData};
use super::super::constants::{SCROLL_LINES_PAGE, SCROLL_LINES_SMALL};
use super::HandleResult;

pub(super) fn handle(key: KeyEvent, app: &mut App) -> HandleResult {
    match key.code {
        KeyCode::Up => app.scroll_up(SCROLL_LINES_SMALL),
        KeyCode::Down => app.scroll_down(SCROLL_LINES_SMALL),
        KeyCode::PageUp => app.scroll_up(SCROLL_LINES_PAGE),
        KeyCode::PageDown => app.scroll_down(SCROLL_LINES_PAGE),
        KeyCode::Home => app.scroll = 0,
        KeyCode::End => app.scroll = app.last_max_scroll,
        KeyCode::Char('r') => reload(app),
        KeyCode::Char('q') | KeyCode::Esc => return HandleResult::Break,
        _ => {}
    }
    HandleResult::Continue
}

/// Re-read stored results from disk and re-aggregate. Keeps the previous data
/// on error (the store may be mid-write by another process).
fn reload(app: &mut App) {
    match results::load_results_for_exam(&app.exam.id) {
        Ok(loaded) => {
            let stats = stats::aggregate(&loaded, &app.exam.questions);
            app.dashboard = Some(DashboardData {
                stats,
                results: loaded,
            });
        }
        Err(e) => log::warn!("failed to reload results: {}", e),
    }
}
