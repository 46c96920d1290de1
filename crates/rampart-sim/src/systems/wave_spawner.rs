//! Wave spawning system — builds each wave's shuffled spawn queue and
//! releases enemies from it at a throttled interval.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use rampart_core::catalog::Catalog;
use rampart_core::constants::{SPAWN_INTERVAL_BASE, SPAWN_INTERVAL_FLOOR, SPAWN_INTERVAL_STEP};
use rampart_core::enums::{EnemyKind, GamePhase};
use rampart_core::error::WaveError;
use rampart_core::events::GameEvent;
use rampart_core::level::{WaveComposition, WaveTable};

use crate::game_state::GameState;
use crate::path::WaypointPath;
use crate::world_setup::{self, entity_id};

/// Composition of `wave` (1-indexed).
///
/// Waves past the end of the table reuse the last entry with every count
/// raised by `growth_per_wave` for each wave beyond it.
pub fn composition_for_wave(wave: u32, table: &WaveTable) -> WaveComposition {
    let Some(last) = table.waves.last() else {
        return Vec::new();
    };
    let index = wave.max(1) as usize;
    if let Some(entry) = table.waves.get(index - 1) {
        return entry.clone();
    }

    let extra = (index - table.waves.len()) as u32 * table.growth_per_wave;
    last.iter()
        .map(|&(kind, count)| (kind, count + extra))
        .collect()
}

/// Expand a wave's composition into one tag per enemy and shuffle it.
pub fn build_spawn_queue(wave: u32, table: &WaveTable, rng: &mut impl Rng) -> VecDeque<EnemyKind> {
    let mut queue: Vec<EnemyKind> = composition_for_wave(wave, table)
        .into_iter()
        .flat_map(|(kind, count)| std::iter::repeat(kind).take(count as usize))
        .collect();
    queue.shuffle(rng);
    queue.into()
}

/// Seconds between spawns during `wave`. Shrinks each wave down to a floor.
pub fn spawn_interval_for_wave(wave: u32) -> f64 {
    (SPAWN_INTERVAL_BASE - SPAWN_INTERVAL_STEP * f64::from(wave)).max(SPAWN_INTERVAL_FLOOR)
}

/// Begin the next wave: bump the counter, fill the queue, arm the timer.
///
/// The first enemy is released on the next tick.
pub fn start_wave(
    state: &mut GameState,
    table: &WaveTable,
    rng: &mut impl Rng,
) -> Result<u32, WaveError> {
    match state.phase {
        GamePhase::Defeat | GamePhase::Victory => return Err(WaveError::GameFinished),
        GamePhase::WaveInProgress => return Err(WaveError::AlreadyInProgress),
        GamePhase::Building => {}
    }

    state.wave += 1;
    state.spawn.pending = build_spawn_queue(state.wave, table, rng);
    state.spawn.interval_secs = spawn_interval_for_wave(state.wave);
    state.spawn.timer_secs = 0.0;
    state.phase = GamePhase::WaveInProgress;

    let enemy_count = state.spawn.pending.len() as u32;
    info!(wave = state.wave, enemy_count, "Wave started");
    state.events.push(GameEvent::WaveStarted {
        wave: state.wave,
        enemy_count,
    });
    Ok(state.wave)
}

/// Release due enemies. A large `dt` may release several in one call.
pub fn run(state: &mut GameState, path: &WaypointPath, catalog: &Catalog, dt: f64) {
    if state.phase != GamePhase::WaveInProgress || state.spawn.pending.is_empty() {
        return;
    }

    state.spawn.timer_secs -= dt;
    while state.spawn.timer_secs <= 0.0 {
        let Some(kind) = state.spawn.pending.pop_front() else {
            break;
        };
        let entity = world_setup::spawn_enemy(
            &mut state.world,
            kind,
            catalog.enemy(kind),
            state.wave,
            path,
        );
        debug!(?kind, wave = state.wave, "Enemy spawned");
        state.events.push(GameEvent::EnemySpawned {
            id: entity_id(entity),
            kind,
        });
        state.spawn.timer_secs += state.spawn.interval_secs;
    }
}
