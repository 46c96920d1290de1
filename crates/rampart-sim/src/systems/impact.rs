//! Projectile system — flies shots toward their targets and applies damage
//! on arrival according to the firing tower's damage profile.

use glam::DVec2;
use hecs::{Entity, World};

use rampart_core::components::{DamageProfile, Enemy};
use rampart_core::types::Position;

use crate::game_state::GameState;
use crate::projectile::Projectile;

/// Apply one hit landing at `impact` on `target`.
pub fn apply_hit(world: &mut World, target: Entity, impact: DVec2, projectile: &Projectile, now: f64) {
    match projectile.effect {
        DamageProfile::Single => {
            if let Ok(mut enemy) = world.get::<&mut Enemy>(target) {
                enemy.health -= projectile.damage;
            }
        }
        DamageProfile::Splash { radius } => {
            // Centered on the impact point, not on the tower.
            let radius_sq = radius * radius;
            for (_entity, (pos, enemy)) in world.query_mut::<(&Position, &mut Enemy)>() {
                if enemy.removed {
                    continue;
                }
                if pos.0.distance_squared(impact) <= radius_sq {
                    enemy.health -= projectile.damage;
                }
            }
        }
        DamageProfile::Slow {
            factor,
            duration_secs,
        } => {
            if let Ok(mut enemy) = world.get::<&mut Enemy>(target) {
                enemy.health -= projectile.damage;
                enemy.apply_slow(now, factor, duration_secs);
            }
        }
    }
}

/// Advance every projectile one tick.
///
/// A projectile whose target is gone or flagged removed is destroyed
/// without dealing damage. One that gets within a step of its target hits
/// it and is destroyed.
pub fn run(state: &mut GameState, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    let now = state.now();

    let in_flight: Vec<(Entity, DVec2, Projectile)> = state
        .world
        .query::<(&Position, &Projectile)>()
        .iter()
        .map(|(entity, (pos, projectile))| (entity, pos.0, *projectile))
        .collect();

    for (entity, pos, projectile) in in_flight {
        let target_pos = match state
            .world
            .query_one_mut::<(&Position, &Enemy)>(projectile.target)
        {
            Ok((target_pos, enemy)) if !enemy.removed => target_pos.0,
            _ => {
                despawn_buffer.push(entity);
                continue;
            }
        };

        let step = projectile.speed * dt;
        if pos.distance(target_pos) <= step {
            apply_hit(&mut state.world, projectile.target, target_pos, &projectile, now);
            despawn_buffer.push(entity);
            continue;
        }

        if let Ok(mut p) = state.world.get::<&mut Position>(entity) {
            p.0 += (target_pos - pos).normalize() * step;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = state.world.despawn(entity);
    }
}
