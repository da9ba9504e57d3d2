//! Level configuration
//!
//! Data-driven tuning for a level, loadable from JSON so levels can be
//! edited without recompiling.

use serde::{Deserialize, Serialize};

use crate::consts::{PLAYER_SPEED, TICK_RATE};

/// Per-level tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Total level time in seconds
    pub level_time_secs: f32,
    /// Number of capturable units spawned at level start
    pub unit_count: u32,
    /// Inventory capacity (how many units can be carried at once)
    pub capacity: usize,
    /// Player movement speed (world units per second)
    pub player_speed: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            level_time_secs: 60.0,
            unit_count: 7,
            capacity: 2,
            player_speed: PLAYER_SPEED,
        }
    }
}

impl LevelConfig {
    /// Parse a config from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the config to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Level duration in whole simulation ticks
    pub fn total_ticks(&self) -> u64 {
        (self.level_time_secs * TICK_RATE as f32).round() as u64
    }
}
