//! Simulation configuration
//!
//! Static in-process configuration: arena dimensions, the fixed level table,
//! and the behavior toggles that vary between builds. A host can deserialize
//! a custom level table from JSON; everything falls back to defaults on
//! failure rather than aborting.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::LevelDef;

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Whether the static practice target is present
    pub target: bool,
    /// Gate contact damage behind the zombie having entered the playfield,
    /// so a fresh spawn touching the player at the edge deals nothing
    pub contact_grace: bool,
    /// Ordered level table; the session wins after clearing the last entry
    pub levels: Vec<LevelDef>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            target: true,
            contact_grace: false,
            levels: LevelDef::default_table(),
        }
    }
}

impl SimConfig {
    /// Load a level table from a JSON file, replacing the default table.
    ///
    /// Any read or parse failure logs a warning and leaves the defaults in
    /// place; a malformed table is not a reason to refuse to run.
    pub fn with_level_file(mut self, path: &str) -> Self {
        match load_level_table(path) {
            Some(levels) => {
                log::info!("Loaded {} level(s) from {}", levels.len(), path);
                self.levels = levels;
            }
            None => {
                log::warn!("Using default level table");
            }
        }
        self
    }
}

/// Parse a JSON array of level descriptors. Returns `None` (after logging)
/// on IO errors, parse errors, or an empty table.
pub fn load_level_table(path: &str) -> Option<Vec<LevelDef>> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("Could not read level table {path}: {err}");
            return None;
        }
    };

    let levels: Vec<LevelDef> = match serde_json::from_str(&json) {
        Ok(levels) => levels,
        Err(err) => {
            log::warn!("Could not parse level table {path}: {err}");
            return None;
        }
    };

    if levels.is_empty() {
        log::warn!("Level table {path} is empty");
        return None;
    }
    Some(levels)
}
