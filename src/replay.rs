//! Replay recording
//!
//! A replay is the session seed plus one command per tick, nothing more.
//! Because the simulation is deterministic, resimulating those inputs
//! reproduces the original run bit for bit; no mid-game state is ever
//! stored.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{Command, GameState, advance_tick};

/// Recorded inputs for a full session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    pub seed: u64,
    pub commands: Vec<Command>,
}

impl Replay {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            commands: Vec::new(),
        }
    }

    /// Record the command consumed by one tick.
    pub fn record(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Number of recorded ticks
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Re-run the whole session from the recorded inputs.
    ///
    /// The settings must match the ones the original session used.
    pub fn resimulate(&self, settings: &Settings) -> GameState {
        let mut state = GameState::new(self.seed, settings);
        for &command in &self.commands {
            advance_tick(&mut state, command);
        }
        state
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(io::Error::other)
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Replay saved ({} ticks)", self.len());
        Ok(())
    }
}
