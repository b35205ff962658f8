//! Deterministic simulation core
//!
//! Each fixed tick consumes exactly one [`Command`] and runs three phases in
//! a fixed order: every platform moves (one cell at a time, shoving the
//! player before each unit step), then the player resolves lateral intent,
//! gravity and the wall check, then the perk timer fires. All randomness
//! comes from the session's seeded [`GameRng`], and platforms are visited in
//! list order, so a seed plus a command stream replays to a bit-identical
//! trajectory. Rendering and input debouncing live outside this module; it
//! only sees the abstract command.

pub mod collision;
pub mod perks;
pub mod platforms;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{is_valid_move, shove_player};
pub use platforms::{PlatformRules, generate_platforms, update_platform};
pub use rng::GameRng;
pub use state::{ActivePerk, BoundingBox, GameState, PerkKind, PhysicsState, Platform, Player};
pub use tick::{Command, advance_tick};
