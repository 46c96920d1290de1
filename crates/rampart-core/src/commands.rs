//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::TowerKind;
use crate::types::GridCell;

/// Parameters of one burst: a timed batch of units released from the end of
/// the path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurstSpec {
    /// Number of units released.
    pub count: u32,
    /// Seconds between consecutive releases.
    pub interval_secs: f64,
    pub damage: f64,
    pub speed: f64,
    pub radius: f64,
}

impl Default for BurstSpec {
    fn default() -> Self {
        Self {
            count: BURST_COUNT,
            interval_secs: BURST_INTERVAL_SECS,
            damage: BURST_DAMAGE,
            speed: BURST_SPEED,
            radius: BURST_RADIUS,
        }
    }
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Building ---
    /// Enter placing mode with the given tower kind.
    SelectTowerType { kind: TowerKind },
    /// Leave placing mode.
    CancelPlacement,
    /// Build the selected tower kind on a tile.
    PlaceTower { cell: GridCell },

    // --- Waves ---
    /// Start the next wave.
    StartWave,

    // --- Special actions ---
    /// Schedule a burst. Affordability and cooldown are checked by the caller.
    TriggerBurst { spec: BurstSpec },
}
