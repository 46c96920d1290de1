//! Burst units: a timed batch of units released from the end of the path
//! that run toward the start and each hit the first enemy they touch.
//!
//! Releases are queued as `{due time, spec}` entries and drained on later
//! ticks, so a defeat before a release simply skips it.

use std::collections::VecDeque;

use hecs::Entity;
use tracing::debug;

use rampart_core::commands::BurstSpec;
use rampart_core::components::{BurstUnit, Enemy};
use rampart_core::constants::ENEMY_COLLISION_RADIUS;
use rampart_core::error::BurstError;
use rampart_core::events::GameEvent;
use rampart_core::types::Position;

use crate::game_state::GameState;
use crate::path::WaypointPath;
use crate::systems::movement::step_toward;
use crate::world_setup::{self, entity_id};

/// One pending release.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledRelease {
    /// Simulation time at or after which the unit is released.
    pub due_at: f64,
    pub spec: BurstSpec,
}

/// Pending releases in due order.
#[derive(Debug, Clone, Default)]
pub struct BurstSchedule {
    pub pending: VecDeque<ScheduledRelease>,
}

impl BurstSchedule {
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Queue `spec.count` releases, the first due now and each later one
/// `spec.interval_secs` after the previous.
pub fn schedule(state: &mut GameState, spec: BurstSpec) -> Result<(), BurstError> {
    if state.phase.is_terminal() {
        return Err(BurstError::GameFinished);
    }
    if spec.count == 0 {
        return Err(BurstError::EmptyBatch);
    }

    // A new batch queues behind releases already pending.
    let now = state.now();
    let start = state
        .bursts
        .pending
        .back()
        .map_or(now, |last| last.due_at.max(now));
    for i in 0..spec.count {
        state.bursts.pending.push_back(ScheduledRelease {
            due_at: start + f64::from(i) * spec.interval_secs,
            spec,
        });
    }
    debug!(count = spec.count, start, "Burst scheduled");
    Ok(())
}

/// Release every unit whose time has come. Skipped entirely once the level
/// is over.
pub fn release_due(state: &mut GameState, path: &WaypointPath) {
    if state.phase.is_terminal() {
        return;
    }
    let now = state.now();
    while let Some(next) = state.bursts.pending.front() {
        if next.due_at > now {
            break;
        }
        let Some(release) = state.bursts.pending.pop_front() else {
            break;
        };
        let entity = world_setup::spawn_burst_unit(&mut state.world, &release.spec, path);
        state.events.push(GameEvent::BurstReleased {
            id: entity_id(entity),
        });
    }
}

/// Move every burst unit one tick back along the path, then check it
/// against live enemies. A unit damages at most one enemy over its life.
pub fn run(state: &mut GameState, path: &WaypointPath, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let units: Vec<(Entity, Position, BurstUnit)> = state
        .world
        .query::<(&Position, &BurstUnit)>()
        .iter()
        .map(|(entity, (pos, unit))| (entity, *pos, *unit))
        .collect();

    for (entity, mut pos, mut unit) in units {
        // Back at the start with nothing hit.
        if unit.waypoint_index == 0 {
            despawn_buffer.push(entity);
            continue;
        }
        let Some(next) = path.waypoint(unit.waypoint_index - 1) else {
            despawn_buffer.push(entity);
            continue;
        };

        if step_toward(&mut pos.0, next, unit.speed * dt) {
            unit.waypoint_index -= 1;
        }
        if let Ok((p, u)) = state
            .world
            .query_one_mut::<(&mut Position, &mut BurstUnit)>(entity)
        {
            *p = pos;
            *u = unit;
        }

        let reach = unit.radius + ENEMY_COLLISION_RADIUS;
        let reach_sq = reach * reach;
        let hit = state
            .world
            .query_mut::<(&Position, &mut Enemy)>()
            .into_iter()
            .find(|(_, (enemy_pos, enemy))| {
                !enemy.removed && enemy_pos.distance_squared(&pos) <= reach_sq
            })
            .map(|(enemy_entity, (_, enemy))| {
                enemy.health -= unit.damage;
                enemy_entity
            });

        if let Some(enemy_entity) = hit {
            state.events.push(GameEvent::BurstHit {
                unit: entity_id(entity),
                enemy: entity_id(enemy_entity),
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = state.world.despawn(entity);
    }
}
