use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Show the countdown timer in the exam header. The time limit is still
    /// enforced when hidden (EXAMDECK_SHOW_TIMER=0 for low-pressure practice runs).
    pub show_timer: bool,
}

/// Load configuration from environment.
pub fn load() -> Config {
    let show_timer = match env::var("EXAMDECK_SHOW_TIMER") {
        Ok(v) => !matches!(v.trim(), "0" | "false" | "off"),
        Err(_) => true,
    };

    Config { show_timer }
}
