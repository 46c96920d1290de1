//! Events emitted by the simulation for UI, audio, and visual mirroring.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::GridCell;

/// Something the presentation layer may want to react to.
///
/// Entity ids match the `id` fields of the snapshot views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A tower was built.
    TowerPlaced {
        id: u64,
        kind: TowerKind,
        cell: GridCell,
    },
    /// A wave began spawning.
    WaveStarted { wave: u32, enemy_count: u32 },
    /// An enemy entered the path.
    EnemySpawned { id: u64, kind: EnemyKind },
    /// A tower fired.
    ProjectileFired { tower: u64, target: u64 },
    /// An enemy's health reached zero.
    EnemyKilled { id: u64, reward: u32 },
    /// An enemy reached the end of the path.
    EnemyEscaped { id: u64, health_remaining: u32 },
    /// A burst unit left the end of the path.
    BurstReleased { id: u64 },
    /// A burst unit struck an enemy.
    BurstHit { unit: u64, enemy: u64 },
    /// Every enemy of the wave is gone.
    WaveCleared { wave: u32 },
    /// The last wave was cleared.
    Victory,
    /// The health pool ran out.
    Defeat,
}
