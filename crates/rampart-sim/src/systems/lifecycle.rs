//! Lifecycle resolver: enemy deaths and escapes, wave completion, and the
//! victory/defeat transitions.

use hecs::Entity;
use tracing::{debug, info};

use rampart_core::components::Enemy;
use rampart_core::enums::GamePhase;
use rampart_core::events::GameEvent;

use crate::game_state::GameState;
use crate::world_setup::entity_id;

/// How an enemy left the field. Every enemy ends with exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    /// Health reached zero.
    Killed,
    /// Walked off the end of the path.
    Escaped,
}

/// Apply an enemy's fate: reward or penalty, then flag and despawn it.
///
/// Enemies that are gone or already flagged removed are ignored, so a fate
/// is applied at most once per enemy.
pub fn resolve(state: &mut GameState, entity: Entity, fate: Fate) {
    let reward = {
        let Ok(mut enemy) = state.world.get::<&mut Enemy>(entity) else {
            return;
        };
        if enemy.removed {
            return;
        }
        enemy.removed = true;
        enemy.reward
    };
    let _ = state.world.despawn(entity);
    let id = entity_id(entity);

    match fate {
        Fate::Killed => {
            state.currency += reward;
            debug!(id, reward, currency = state.currency, "Enemy killed");
            state.events.push(GameEvent::EnemyKilled { id, reward });
        }
        Fate::Escaped => {
            state.health = state.health.saturating_sub(1);
            debug!(id, health = state.health, "Enemy escaped");
            state.events.push(GameEvent::EnemyEscaped {
                id,
                health_remaining: state.health,
            });
            if state.health == 0 && !state.phase.is_terminal() {
                info!(wave = state.wave, "Defeat");
                state.finish(GamePhase::Defeat);
                state.events.push(GameEvent::Defeat);
            }
        }
    }
}

/// Resolve every enemy whose health dropped to zero this tick.
pub fn sweep_dead(state: &mut GameState) {
    let dead: Vec<Entity> = state
        .world
        .query::<&Enemy>()
        .iter()
        .filter(|(_, enemy)| !enemy.removed && enemy.health <= 0.0)
        .map(|(entity, _)| entity)
        .collect();
    for entity in dead {
        resolve(state, entity, Fate::Killed);
    }
}

/// End the running wave once nothing is left to spawn and nothing is alive.
/// Clearing the last wave wins the level.
pub fn check_wave_complete(state: &mut GameState) {
    if state.phase != GamePhase::WaveInProgress || !state.spawn.pending.is_empty() {
        return;
    }
    let alive = state
        .world
        .query::<&Enemy>()
        .iter()
        .filter(|(_, enemy)| !enemy.removed)
        .count();
    if alive > 0 {
        return;
    }

    info!(wave = state.wave, "Wave cleared");
    state.events.push(GameEvent::WaveCleared { wave: state.wave });
    if state.wave >= state.total_waves {
        info!(waves = state.total_waves, "Victory");
        state.finish(GamePhase::Victory);
        state.events.push(GameEvent::Victory);
    } else {
        state.phase = GamePhase::Building;
    }
}

/// End-of-tick pass: kills from this tick's damage, then wave completion.
pub fn run(state: &mut GameState) {
    sweep_dead(state);
    if state.phase.is_terminal() {
        return;
    }
    check_wave_complete(state);
}
