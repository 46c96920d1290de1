//! Fire control system — ages tower cooldowns, picks the nearest enemy in
//! range, and launches projectiles.

use hecs::{Entity, World};
use tracing::trace;

use rampart_core::components::{Enemy, Tower};
use rampart_core::events::GameEvent;
use rampart_core::types::Position;

use crate::game_state::GameState;
use crate::world_setup::{self, entity_id};

/// Nearest live enemy within `range` of `origin`.
///
/// Equal distances keep whichever enemy the query yields first; that order
/// follows hecs storage and is not otherwise specified.
pub fn find_target(world: &World, origin: &Position, range: f64) -> Option<Entity> {
    let range_sq = range * range;
    let mut best: Option<(Entity, f64)> = None;

    for (entity, (pos, enemy)) in world.query::<(&Position, &Enemy)>().iter() {
        if enemy.removed {
            continue;
        }
        let dist_sq = origin.distance_squared(pos);
        if dist_sq > range_sq {
            continue;
        }
        if best.map_or(true, |(_, best_sq)| dist_sq < best_sq) {
            best = Some((entity, dist_sq));
        }
    }

    best.map(|(entity, _)| entity)
}

/// Run the fire control system for one tick.
pub fn run(state: &mut GameState, dt: f64) {
    // Age cooldowns and collect towers that are ready.
    let mut ready: Vec<(Entity, Position, f64)> = Vec::new();
    for (entity, (pos, tower)) in state.world.query_mut::<(&Position, &mut Tower)>() {
        tower.cooldown_secs -= dt;
        if tower.cooldown_secs <= 0.0 {
            ready.push((entity, *pos, tower.range));
        }
    }

    for (tower_entity, origin, range) in ready {
        let Some(target) = find_target(&state.world, &origin, range) else {
            continue;
        };

        let tower = {
            let Ok(mut tower) = state.world.get::<&mut Tower>(tower_entity) else {
                continue;
            };
            tower.cooldown_secs = 1.0 / tower.fire_rate;
            tower.clone()
        };

        world_setup::spawn_projectile(&mut state.world, origin, tower_entity, &tower, target);
        trace!(tower = entity_id(tower_entity), target = entity_id(target), "Fired");
        state.events.push(GameEvent::ProjectileFired {
            tower: entity_id(tower_entity),
            target: entity_id(target),
        });
    }
}
