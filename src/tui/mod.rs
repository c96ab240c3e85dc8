//! TUI (Text User Interface) for taking exams and browsing the dashboard.

mod app;
mod constants;
mod draw;
mod handlers;
mod text;

pub use app::{App, DashboardData, Screen};

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;

use draw::draw;
use handlers::HandleResult;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop until the user exits. The poll timeout doubles as the
/// timer tick, so the countdown repaints and time-up auto-submit fires without
/// user input.
pub fn run(mut app: App) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        // Time-up: submit whatever answers exist, same path as manual submit.
        if app.screen == Screen::Exam && !app.submitted && app.time_expired() {
            log::info!("time limit reached, auto-submitting");
            handlers::submit(&mut app);
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(std::time::Duration::from_millis(
            constants::EVENT_POLL_TIMEOUT_MS,
        ))? && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handlers::handle_key(key, &mut app) == HandleResult::Break
        {
            break;
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
