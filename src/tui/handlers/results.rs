//! Results screen keys: scrolling and opening remediation videos.

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::video;

use super::super::app::App;
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
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if let Some(url) = app.video_links.get(index) {
                video::open_link(url);
            }
        }
        KeyCode::Char('q') | KeyCode::Esc => return HandleResult::Break,
        _ => {}
    }
    HandleResult::Continue
}
