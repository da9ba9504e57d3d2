//! Lasso Ranch - a lasso-herding arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, lasso, inventory, timers)
//! - `config`: Data-driven level tuning
//! - `hud`: Status text and end-of-level notifications
//!
//! Rendering, asset loading and windowing are external collaborators; this
//! crate is the headless interaction/timing core, driven one fixed tick at a
//! time through [`sim::tick`].

pub mod config;
pub mod hud;
pub mod sim;

pub use config::LevelConfig;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 120;

    /// Arena dimensions (world units)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 800.0;
    /// Units spawn with both coordinates in [0, UNIT_SPAWN_MAX]
    pub const UNIT_SPAWN_MAX: u32 = 400;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 150.0;
    /// Half-extent of the player sprite (24x24 frames)
    pub const PLAYER_HALF: f32 = 12.0;
    /// Half-extent of a capturable unit sprite (24x24 frames)
    pub const UNIT_HALF: f32 = 12.0;
    /// Half-extent of the lasso hitbox
    pub const ROPE_HALF: f32 = 12.0;

    /// Lasso pose offsets from the player position
    pub const LASSO_DIAGONAL_OFFSET: f32 = 30.0;
    pub const LASSO_SIDE_OFFSET: f32 = 35.0;
    pub const LASSO_VERTICAL_OFFSET: f32 = 40.0;

    /// A delivered unit lands adjacent to the player at this offset
    pub const DROP_OFFSET: f32 = 16.0;

    /// The lasso stays armed for this window after the throw
    pub const LASSO_WINDOW_TICKS: u32 = ms_to_ticks(300);
    /// A held unit escapes this long after capture unless delivered first
    pub const ESCAPE_DELAY_TICKS: u32 = ms_to_ticks(10_000);
    /// Free-roaming units pick a new heading at this interval
    pub const WANDER_INTERVAL_TICKS: u32 = ms_to_ticks(2_000);
    /// Wander speed magnitudes are integers in [0, WANDER_SPEED_MAX)
    pub const WANDER_SPEED_MAX: u32 = 100;

    /// Convert a millisecond duration to whole simulation ticks
    pub const fn ms_to_ticks(ms: u32) -> u32 {
        ms * TICK_RATE / 1000
    }
}

#[cfg(test)]
mod tests {
    use super::consts::*;

    #[test]
    fn test_ms_to_ticks() {
        assert_eq!(ms_to_ticks(300), 36);
        assert_eq!(ms_to_ticks(2_000), 240);
        assert_eq!(ms_to_ticks(10_000), 1_200);
    }
}
