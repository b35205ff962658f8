//! Session parameters
//!
//! Loaded from a JSON file; missing or malformed files fall back to the
//! defaults so the game always has a valid configuration to hand the core.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::INITIAL_LIVES;

/// Tunable parameters for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in columns
    pub columns: i32,
    /// Playfield height in lines
    pub lines: i32,
    pub platform_count: usize,
    pub platform_min_width: i32,
    pub platform_max_width: i32,
    /// Platform speed range, in cells per tick
    pub platform_min_speed: i32,
    pub platform_max_speed: i32,
    pub initial_lives: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            columns: 80,
            lines: 24,
            platform_count: 16,
            platform_min_width: 4,
            platform_max_width: 16,
            platform_min_speed: 1,
            platform_max_speed: 4,
            initial_lives: INITIAL_LIVES,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(error) => {
                    log::warn!(
                        "Ignoring malformed settings file {}: {error}",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings file at {}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write settings out as pretty-printed JSON, creating the directory if
    /// needed.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
