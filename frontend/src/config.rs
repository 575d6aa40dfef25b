use log::Level;

pub const SITE_NAME: &str = "Mindbridge";
pub const CONTACT_EMAIL: &str = "hello@mindbridge.care";
pub const CRISIS_LINE: &str = "If you are in crisis, call or text 988 (US) or your local emergency number.";

/// Pause before scrolling to an in-page anchor, so sections mounted after the
/// route change have landed in the DOM.
pub const SETTLE_DELAY_MS: u32 = 100;

pub fn settle_delay_ms() -> u32 {
    SETTLE_DELAY_MS
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
