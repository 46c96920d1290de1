//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use rampart_core::components::{BurstUnit, Enemy, Tower};
use rampart_core::events::GameEvent;
use rampart_core::state::*;
use rampart_core::types::Position;

use crate::game_state::GameState;
use crate::projectile::Projectile;
use crate::world_setup::entity_id;

/// Build a complete GameStateSnapshot from the current state.
pub fn build_snapshot(state: &GameState, events: Vec<GameEvent>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: state.time,
        phase: state.phase,
        currency: state.currency,
        health: state.health,
        wave: state.wave,
        total_waves: state.total_waves,
        pending_spawns: state.spawn.pending.len() as u32,
        selected_tower: state.selected_tower,
        towers: build_towers(&state.world),
        enemies: build_enemies(&state.world, state.now()),
        projectiles: build_projectiles(&state.world),
        burst_units: build_burst_units(&state.world),
        events,
    }
}

fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&Position, &Tower)>()
        .iter()
        .map(|(entity, (pos, tower))| TowerView {
            id: entity_id(entity),
            kind: tower.kind,
            cell: tower.cell,
            position: *pos,
            range: tower.range,
        })
        .collect();
    towers.sort_by_key(|t| t.id);
    towers
}

/// Removed enemies are excluded; they are already gone from the field.
fn build_enemies(world: &World, now: f64) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .filter(|(_, (_, enemy))| !enemy.removed)
        .map(|(entity, (pos, enemy))| EnemyView {
            id: entity_id(entity),
            kind: enemy.kind,
            position: *pos,
            health_ratio: enemy.health_ratio(),
            slowed: enemy.is_slowed(now),
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Position, &Projectile)>()
        .iter()
        .map(|(entity, (pos, projectile))| ProjectileView {
            id: entity_id(entity),
            tower: entity_id(projectile.source),
            position: *pos,
            tower_kind: projectile.tower_kind,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_burst_units(world: &World) -> Vec<BurstUnitView> {
    let mut units: Vec<BurstUnitView> = world
        .query::<(&Position, &BurstUnit)>()
        .iter()
        .map(|(entity, (pos, unit))| BurstUnitView {
            id: entity_id(entity),
            position: *pos,
            radius: unit.radius,
        })
        .collect();
    units.sort_by_key(|u| u.id);
    units
}
