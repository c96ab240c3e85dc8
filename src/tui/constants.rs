//! TUI constants: colors and timing.

use ratatui::style::Color;

/// Accent blue (#3B82F6), the primary highlight color.
pub(super) const ACCENT: Color = Color::Rgb(59, 130, 246);

/// Secondary accent, soft orange (#FB923C) for review/warning sections.
pub(super) const ACCENT_WARN: Color = Color::Rgb(251, 146, 60);

/// Score band colors: >= 80% green, >= 60% yellow, below red.
pub(super) const BAND_HIGH: Color = Color::Rgb(34, 197, 94);
pub(super) const BAND_MID: Color = Color::Rgb(234, 179, 8);
pub(super) const BAND_LOW: Color = Color::Rgb(239, 68, 68);

/// Event poll timeout in milliseconds (main loop; also the timer tick rate).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Countdown turns yellow under 5 minutes, red under 1.
pub(crate) const TIMER_WARN_SECS: u64 = 5 * 60;
pub(crate) const TIMER_CRIT_SECS: u64 = 60;

/// Width of the per-topic performance bar on the dashboard.
pub(crate) const TOPIC_BAR_WIDTH: usize = 32;
