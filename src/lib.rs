//! Wallrush - a deterministic dodge-the-walls arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (platform kinematics, shove resolution, perks)
//! - `settings`: Tunable session parameters
//! - `highscores`: Persistent top-10 scoreboard
//! - `replay`: Seed and command-stream recording

pub mod highscores;
pub mod replay;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use replay::Replay;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u64 = 30;

    /// Platforms are always one row tall
    pub const PLATFORM_HEIGHT: i32 = 1;

    /// Cooldown between a perk expiring and the next one spawning
    pub const PERK_INTERVAL_FRAMES: u64 = 20 * TICKS_PER_SECOND;
    /// How long a spawned perk stays on the field
    pub const PERK_DURATION_FRAMES: u64 = 15 * TICKS_PER_SECOND;

    /// Lives at session start
    pub const INITIAL_LIVES: u32 = 3;
}
