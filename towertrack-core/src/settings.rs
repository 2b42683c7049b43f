//! Owner-level tracker settings threaded through to the presentation layer.

use serde::{Deserialize, Serialize};

/// Presentation thresholds for highlighting runs near a personal best.
///
/// Each field is a percentage (0–100) applied against the current
/// personal-best value. The engine only carries these values; the
/// comparison itself belongs to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSettings {
    #[serde(default = "TrackerSettings::default_threshold")]
    pub threshold_top_coins: u8,
    #[serde(default = "TrackerSettings::default_threshold")]
    pub threshold_top_coins_hour: u8,
    #[serde(default = "TrackerSettings::default_threshold")]
    pub threshold_top_cells: u8,
    #[serde(default = "TrackerSettings::default_threshold")]
    pub threshold_top_cells_hour: u8,
}

impl TrackerSettings {
    const fn default_threshold() -> u8 {
        90
    }
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            threshold_top_coins: Self::default_threshold(),
            threshold_top_coins_hour: Self::default_threshold(),
            threshold_top_cells: Self::default_threshold(),
            threshold_top_cells_hour: Self::default_threshold(),
        }
    }
}

/// Cutoff the presentation layer compares a run against:
/// `pb_value * pct / 100`, truncated.
#[must_use]
pub const fn near_best_cutoff(pb_value: u128, pct: u8) -> u128 {
    pb_value * pct as u128 / 100
}
