use log::Level;

// Storage slots
pub const PUZZLE_SOLVED_KEY: &str = "puzzleSolved";
pub const VIDEOS_KEY: &str = "weddingVideos";

/// Starting layout of the 2x2 intro puzzle. A single 4-cycle, so three swaps
/// away from solved.
pub const SCRAMBLED_BOARD: [u8; 4] = [1, 3, 0, 2];

pub const SOLVE_DELAY_MS: u32 = 300;
pub const INTRO_FADE_MS: u32 = 1000;

pub const ANIMATION_OFFSET_PX: u32 = 100;
pub const FIRST_VISIT_ANIMATION_MS: u32 = 1200;
pub const RETURN_VISIT_ANIMATION_MS: u32 = 800;

pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
