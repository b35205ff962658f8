//! Fixed timestep simulation tick
//!
//! One tick consumes exactly one command: platforms move first (shoving the
//! player as they sweep), then the player resolves lateral intent, gravity
//! and the wall check, then the perk timer runs.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{is_falling, is_touching_a_wall, is_valid_move};
use super::perks::update_perk;
use super::platforms::update_platform;
use super::state::{GameState, PhysicsState};

/// Commands the input layer may hand the simulation, one per tick.
///
/// Only `Left` and `Right` move the player; every non-`None` command arms
/// physics on a dormant player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Command {
    #[default]
    None,
    Up,
    Left,
    Center,
    Right,
    Down,
    Jump,
}

/// Advance the whole simulation by one fixed timestep.
pub fn advance_tick(state: &mut GameState, command: Command) {
    for index in 0..state.platforms.len() {
        let mut platform = state.platforms[index];
        update_platform(
            &mut state.player,
            &mut platform,
            &state.bounds,
            &mut state.rng,
        );
        state.platforms[index] = platform;
    }
    update_player(state, command);
    update_perk(state);
}

/// Apply one command's worth of player movement, gravity and bookkeeping.
fn update_player(state: &mut GameState, command: Command) {
    if command != Command::None {
        state.player.physics = PhysicsState::Active;
    }
    if state.player.physics.is_active() {
        state.played_frames += 1;
    }
    let intent = match command {
        Command::Left => -1,
        Command::Right => 1,
        _ => 0,
    };
    if intent != 0 {
        let destination = state.player.position + IVec2::new(intent, 0);
        if is_valid_move(destination, &state.platforms) {
            state.player.position = destination;
        }
    }
    // Gravity applies after the lateral move, if any.
    if is_falling(&state.player, &state.platforms) {
        state.player.position.y += 1;
    }
    if is_touching_a_wall(&state.player, &state.bounds) {
        state.player.lives = state.player.lives.saturating_sub(1);
        state.player.position = state.bounds.center();
        // One tick of grace before gravity and shoving resume.
        state.player.physics = PhysicsState::Dormant;
        log::debug!("Player hit a wall; {} lives left", state.player.lives);
    }
}
