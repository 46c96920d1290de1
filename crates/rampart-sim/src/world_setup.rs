//! Entity spawn factories for the simulation world.
//!
//! Creates towers, enemies, projectiles, and burst units with their
//! component bundles.

use hecs::{Entity, World};

use rampart_core::catalog::{EnemySpec, TowerSpec};
use rampart_core::commands::BurstSpec;
use rampart_core::components::{BurstUnit, Enemy, Tower};
use rampart_core::constants::{PROJECTILE_SPEED, TILE_SIZE};
use rampart_core::enums::{EnemyKind, TowerKind};
use rampart_core::types::{GridCell, Position};

use crate::path::WaypointPath;
use crate::projectile::Projectile;

/// Stable numeric id of an entity, as exposed in snapshots and events.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

/// Spawn a tower centered on `cell`. The tower is ready to fire at once.
pub fn spawn_tower(world: &mut World, kind: TowerKind, cell: GridCell, spec: &TowerSpec) -> Entity {
    let center = cell.center(TILE_SIZE);
    world.spawn((
        Position(center),
        Tower {
            kind,
            cell,
            range: spec.range,
            fire_rate: spec.fire_rate,
            damage: spec.damage,
            cooldown_secs: 0.0,
            effect: spec.effect,
        },
    ))
}

/// Spawn an enemy at the start of the path with stats scaled for `wave`.
pub fn spawn_enemy(
    world: &mut World,
    kind: EnemyKind,
    spec: &EnemySpec,
    wave: u32,
    path: &WaypointPath,
) -> Entity {
    let stats = spec.scaled(wave);
    world.spawn((
        Position(path.start()),
        Enemy {
            kind,
            health: stats.health,
            max_health: stats.health,
            base_speed: stats.speed,
            slow_factor: 1.0,
            slowed_until: 0.0,
            reward: stats.reward,
            waypoint_index: 0,
            removed: false,
        },
    ))
}

/// Spawn a projectile at the firing tower, bound to `target`.
pub fn spawn_projectile(
    world: &mut World,
    origin: Position,
    source: Entity,
    tower: &Tower,
    target: Entity,
) -> Entity {
    world.spawn((
        origin,
        Projectile {
            target,
            source,
            tower_kind: tower.kind,
            speed: PROJECTILE_SPEED,
            damage: tower.damage,
            effect: tower.effect,
        },
    ))
}

/// Spawn a burst unit on the last waypoint, facing back toward the start.
pub fn spawn_burst_unit(world: &mut World, spec: &BurstSpec, path: &WaypointPath) -> Entity {
    world.spawn((
        Position(path.end()),
        BurstUnit {
            damage: spec.damage,
            speed: spec.speed,
            radius: spec.radius,
            waypoint_index: path.last_index(),
        },
    ))
}
