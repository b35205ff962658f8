//! Game state and core simulation types
//!
//! Coordinates are integer columns and rows; rows grow downward, so gravity
//! increases `y`.

use glam::IVec2;

use crate::consts::PERK_DURATION_FRAMES;
use crate::settings::Settings;

use super::platforms::{PlatformRules, generate_platforms};
use super::rng::GameRng;

/// Inclusive rectangular playfield bounds.
///
/// Immutable for the duration of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        debug_assert!(min_x <= max_x && min_y <= max_y);
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Number of columns covered by the box
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    /// Number of rows covered by the box
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }

    /// The cell the player respawns on after losing a life
    pub fn center(&self) -> IVec2 {
        IVec2::new(
            self.min_x + (self.max_x - self.min_x + 1) / 2,
            self.min_y + (self.max_y - self.min_y + 1) / 2,
        )
    }

    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

/// A moving wall segment, one row tall.
///
/// Platforms keep their identity for the whole session: one that leaves the
/// playfield is repositioned in place, never destroyed and recreated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub position: IVec2,
    pub width: i32,
    pub height: i32,
    /// Distance covered per tick; at most one axis is non-zero.
    pub velocity: IVec2,
    /// Color-blend weight in `[0, 1]`; purely cosmetic.
    pub rarity: f32,
}

impl Platform {
    /// Exclusive right edge (first column not covered by the platform)
    #[inline]
    pub fn right(&self) -> i32 {
        self.position.x + self.width
    }
}

/// Whether the player currently responds to gravity and shoving.
///
/// The player starts `Dormant` (immune and static), becomes `Active` on the
/// first non-idle command, and drops back to `Dormant` for one tick of grace
/// after a wall collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhysicsState {
    #[default]
    Dormant,
    Active,
}

impl PhysicsState {
    #[inline]
    pub fn is_active(self) -> bool {
        self == PhysicsState::Active
    }
}

/// The player character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: IVec2,
    pub physics: PhysicsState,
    pub lives: u32,
    /// Accumulated by the surrounding game loop, not by the core
    pub score: u32,
}

/// Power-up kinds.
///
/// The core only schedules these; their gameplay effects belong to the
/// consuming layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerkKind {
    Invincibility,
    Levitation,
    LowGravity,
    SuperJump,
    TimeStop,
    ExtraPoints,
    ExtraLife,
}

impl PerkKind {
    pub const ALL: [PerkKind; 7] = [
        PerkKind::Invincibility,
        PerkKind::Levitation,
        PerkKind::LowGravity,
        PerkKind::SuperJump,
        PerkKind::TimeStop,
        PerkKind::ExtraPoints,
        PerkKind::ExtraLife,
    ];
}

/// A perk currently on the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePerk {
    pub kind: PerkKind,
    pub position: IVec2,
}

/// Complete simulation state for one session.
///
/// Mutated in place by [`advance_tick`](super::tick::advance_tick); nothing
/// outside the tick sequence writes to it.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub(crate) rng: GameRng,
    pub player: Player,
    /// Stable order; updated by index every tick
    pub platforms: Vec<Platform>,
    pub bounds: BoundingBox,
    pub active_perk: Option<ActivePerk>,
    /// Frame at which the current perk expires (or expired)
    pub perk_end_frame: u64,
    /// Ticks elapsed while the player had physics enabled
    pub played_frames: u64,
}

impl GameState {
    /// Create a session: build the playfield and generate its platforms.
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let bounds = BoundingBox::new(0, 0, settings.columns - 1, settings.lines - 1);
        let start = bounds.center();
        // Keep the rows around the spawn point clear of initial platforms.
        let avoidance = BoundingBox::new(
            bounds.min_x,
            (start.y - 2).max(bounds.min_y),
            bounds.max_x,
            (start.y + 2).min(bounds.max_y),
        );
        let mut rng = GameRng::new(seed);
        let rules = PlatformRules::new(bounds, avoidance, settings.platform_count);
        let platforms = generate_platforms(&rules, settings, &mut rng);
        log::info!(
            "Created session with seed {seed} and {} platforms",
            platforms.len()
        );
        Self {
            seed,
            rng,
            player: Player {
                position: start,
                physics: PhysicsState::Dormant,
                lives: settings.initial_lives,
                score: 0,
            },
            platforms,
            bounds,
            active_perk: None,
            perk_end_frame: 0,
            played_frames: 0,
        }
    }

    /// Fraction of the active perk's lifetime still remaining, in `[0, 1]`.
    ///
    /// Zero when no perk is on the field.
    pub fn perk_remaining_fraction(&self) -> f32 {
        if self.active_perk.is_none() {
            return 0.0;
        }
        let remaining = self.perk_end_frame.saturating_sub(self.played_frames);
        (remaining as f32 / PERK_DURATION_FRAMES as f32).min(1.0)
    }

    /// A session ends when the player runs out of lives; the caller simply
    /// stops ticking it.
    pub fn is_over(&self) -> bool {
        self.player.lives == 0
    }
}
