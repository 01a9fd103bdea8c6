use log::Level;

/// Vertical offset past which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Share of a block that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Pulls the viewport's bottom edge 50px inward for reveal purposes.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Transition delay steps, in milliseconds.
pub const STAGGER_CARD_MS: u32 = 100;
pub const STAGGER_DENSE_MS: u32 = 50;
pub const SECOND_COLUMN_DELAY_MS: u32 = 200;

pub const LOGO_PATH: &str = "/ALLURE.png";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
