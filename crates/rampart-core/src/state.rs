//! Game state snapshot — the complete visible state handed to the
//! presentation layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{GridCell, Position, SimTime};

/// Complete game state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub currency: u32,
    pub health: u32,
    pub wave: u32,
    pub total_waves: u32,
    /// Enemies of the current wave not yet spawned.
    pub pending_spawns: u32,
    /// Tower kind selected for placement, if placing.
    pub selected_tower: Option<TowerKind>,
    pub towers: Vec<TowerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub burst_units: Vec<BurstUnitView>,
    /// Events emitted since the previous snapshot.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: u64,
    pub kind: TowerKind,
    pub cell: GridCell,
    pub position: Position,
    pub range: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub kind: EnemyKind,
    pub position: Position,
    /// Health as a fraction of max, for health bars.
    pub health_ratio: f64,
    pub slowed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    /// Id of the tower that fired the shot.
    pub tower: u64,
    pub position: Position,
    pub tower_kind: TowerKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurstUnitView {
    pub id: u64,
    pub position: Position,
    pub radius: f64,
}
