//! The single mutable authority over one running level.

use std::collections::VecDeque;

use hecs::World;

use rampart_core::enums::{EnemyKind, GamePhase, TowerKind};
use rampart_core::events::GameEvent;
use rampart_core::types::SimTime;

use crate::systems::burst::BurstSchedule;

/// Pending enemies of the current wave and their release timer.
#[derive(Debug, Clone, Default)]
pub struct SpawnQueue {
    /// Enemy kinds still to spawn, front first.
    pub pending: VecDeque<EnemyKind>,
    /// Seconds between spawns for the current wave.
    pub interval_secs: f64,
    /// Seconds until the next spawn. Goes non-positive when one is due.
    pub timer_secs: f64,
}

/// All mutable state of a level. Systems receive it explicitly; nothing is
/// global.
pub struct GameState {
    /// Towers, enemies, projectiles, and burst units.
    pub world: World,
    pub time: SimTime,
    pub phase: GamePhase,
    pub currency: u32,
    pub health: u32,
    /// Number of the most recently started wave (0 before the first).
    pub wave: u32,
    pub total_waves: u32,
    pub spawn: SpawnQueue,
    pub bursts: BurstSchedule,
    /// Tower kind selected for placement; `None` outside placing mode.
    pub selected_tower: Option<TowerKind>,
    /// Events emitted since the last snapshot.
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(starting_currency: u32, starting_health: u32, total_waves: u32) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            currency: starting_currency,
            health: starting_health,
            wave: 0,
            total_waves,
            spawn: SpawnQueue::default(),
            bursts: BurstSchedule::default(),
            selected_tower: None,
            events: Vec::new(),
        }
    }

    /// Seconds of simulation time elapsed so far.
    pub fn now(&self) -> f64 {
        self.time.elapsed_secs
    }

    /// Enter a terminal phase. Placement mode is dropped with it.
    pub fn finish(&mut self, phase: GamePhase) {
        debug_assert!(phase.is_terminal());
        self.phase = phase;
        self.selected_tower = None;
    }
}
