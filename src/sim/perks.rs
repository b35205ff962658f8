//! Perk lifecycle timer
//!
//! A two-instant schedule driven by `played_frames`: the active perk expires
//! exactly at `perk_end_frame`, and a new one spawns exactly
//! `PERK_INTERVAL_FRAMES` ticks later at a random spot in the field.

use glam::IVec2;

use crate::consts::{PERK_DURATION_FRAMES, PERK_INTERVAL_FRAMES};

use super::state::{ActivePerk, GameState};

/// Run the spawn/expire schedule for this tick.
pub fn update_perk(state: &mut GameState) {
    if state.played_frames == state.perk_end_frame {
        if state.active_perk.take().is_some() {
            log::debug!("Perk expired at frame {}", state.played_frames);
        }
    } else if state.played_frames == state.perk_end_frame + PERK_INTERVAL_FRAMES {
        let kind = state.rng.random_perk();
        let position = IVec2::new(
            state
                .rng
                .random_integer(state.bounds.min_x, state.bounds.max_x),
            state
                .rng
                .random_integer(state.bounds.min_y, state.bounds.max_y),
        );
        state.active_perk = Some(ActivePerk { kind, position });
        state.perk_end_frame = state.played_frames + PERK_DURATION_FRAMES;
        log::debug!(
            "Spawned {kind:?} perk at ({}, {}), expiring at frame {}",
            position.x,
            position.y,
            state.perk_end_frame
        );
    }
}
