//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Tower variant. Each kind maps to one `TowerSpec` in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TowerKind {
    /// Single-target shooter.
    #[default]
    Basic,
    /// Splash damage around the impact point.
    Cannon,
    /// Single-target hit plus a timed slow.
    Slow,
}

impl TowerKind {
    pub const ALL: [TowerKind; 3] = [TowerKind::Basic, TowerKind::Cannon, TowerKind::Slow];
}

/// Enemy variant. Each kind maps to one `EnemySpec` in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    /// Baseline walker.
    #[default]
    Soldier,
    /// Fast and fragile.
    Scout,
    /// Slow and armored.
    Tank,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Soldier, EnemyKind::Scout, EnemyKind::Tank];
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Between waves; the player may build and start the next wave.
    #[default]
    Building,
    /// A wave is spawning or its enemies are still on the field.
    WaveInProgress,
    /// The health pool ran out.
    Defeat,
    /// The last wave was cleared.
    Victory,
}

impl GamePhase {
    /// Defeat and Victory end the level; ticks stop processing gameplay.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Defeat | GamePhase::Victory)
    }
}
