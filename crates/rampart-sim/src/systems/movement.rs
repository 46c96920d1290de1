//! Path-following movement for enemies.
//!
//! Walkers advance toward their next waypoint by `speed * dt` and snap onto
//! it when it is within one step, so error never accumulates past a snap.

use glam::DVec2;
use hecs::Entity;

use rampart_core::components::Enemy;
use rampart_core::types::Position;

use crate::game_state::GameState;
use crate::path::WaypointPath;
use crate::systems::lifecycle::{self, Fate};

/// Move `pos` toward `target` by at most `step`.
///
/// Returns true when `pos` was snapped exactly onto `target`.
pub fn step_toward(pos: &mut DVec2, target: DVec2, step: f64) -> bool {
    let delta = target - *pos;
    let distance = delta.length();
    if distance <= step {
        *pos = target;
        return true;
    }
    *pos += delta / distance * step;
    false
}

/// Advance every live enemy one tick along the path.
///
/// Enemies found dead are handed to the lifecycle resolver as kills and are
/// not moved. Enemies already on the last waypoint are handed off as
/// escapes.
pub fn run(state: &mut GameState, path: &WaypointPath, dt: f64) {
    let now = state.now();
    let last = path.last_index();
    let mut handoffs: Vec<(Entity, Fate)> = Vec::new();

    for (entity, (pos, enemy)) in state.world.query_mut::<(&mut Position, &mut Enemy)>() {
        if enemy.removed {
            continue;
        }
        if enemy.health <= 0.0 {
            handoffs.push((entity, Fate::Killed));
            continue;
        }
        if enemy.waypoint_index >= last {
            handoffs.push((entity, Fate::Escaped));
            continue;
        }
        let Some(next) = path.waypoint(enemy.waypoint_index + 1) else {
            handoffs.push((entity, Fate::Escaped));
            continue;
        };

        if step_toward(&mut pos.0, next, enemy.effective_speed(now) * dt) {
            enemy.waypoint_index += 1;
        }
    }

    for (entity, fate) in handoffs {
        lifecycle::resolve(state, entity, fate);
    }
}

#[cfg(test)]
mod tests {
    use rampart_core::enums::{EnemyKind, GamePhase};
    use rampart_core::types::GridCell;

    use super::*;

    fn straight_path() -> WaypointPath {
        WaypointPath::build(&[GridCell::new(0, 0), GridCell::new(3, 0)], 64.0)
    }

    fn enemy(speed: f64) -> Enemy {
        Enemy {
            kind: EnemyKind::Soldier,
            health: 10.0,
            max_health: 10.0,
            base_speed: speed,
            slow_factor: 1.0,
            slowed_until: 0.0,
            reward: 5,
            waypoint_index: 0,
            removed: false,
        }
    }

    #[test]
    fn test_step_toward_moves_partially() {
        let mut pos = DVec2::new(0.0, 0.0);
        assert!(!step_toward(&mut pos, DVec2::new(10.0, 0.0), 4.0));
        assert_eq!(pos, DVec2::new(4.0, 0.0));
    }

    #[test]
    fn test_step_toward_snaps_exactly() {
        let mut pos = DVec2::new(0.1, 0.2);
        assert!(step_toward(&mut pos, DVec2::new(3.0, 4.0), 10.0));
        assert_eq!(pos, DVec2::new(3.0, 4.0));
    }

    #[test]
    fn test_enemy_snaps_and_advances_index() {
        let path = straight_path();
        let mut state = GameState::new(0, 5, 1);
        let e = state
            .world
            .spawn((Position(path.start()), enemy(40.0)));

        // 64px to the next waypoint at 40px/s: 1s moves 40, 1s more snaps.
        run(&mut state, &path, 1.0);
        assert_eq!(state.world.get::<&Enemy>(e).unwrap().waypoint_index, 0);
        run(&mut state, &path, 1.0);
        assert_eq!(state.world.get::<&Enemy>(e).unwrap().waypoint_index, 1);
        assert_eq!(state.world.get::<&Position>(e).unwrap().0, path.waypoints()[1]);
    }

    #[test]
    fn test_snap_has_no_drift_over_many_small_steps() {
        let path = straight_path();
        let mut state = GameState::new(0, 5, 1);
        let e = state
            .world
            .spawn((Position(path.start()), enemy(33.3)));
        for _ in 0..600 {
            run(&mut state, &path, 1.0 / 60.0);
            let index = state.world.get::<&Enemy>(e).unwrap().waypoint_index;
            if index == 2 {
                assert_eq!(state.world.get::<&Position>(e).unwrap().0, path.waypoints()[2]);
                return;
            }
        }
        panic!("enemy never reached waypoint 2");
    }

    #[test]
    fn test_slowed_enemy_moves_slower() {
        let path = straight_path();
        let mut state = GameState::new(0, 5, 1);
        let mut slowed = enemy(40.0);
        slowed.apply_slow(0.0, 0.5, 10.0);
        let e = state.world.spawn((Position(path.start()), slowed));

        run(&mut state, &path, 1.0);
        let x = state.world.get::<&Position>(e).unwrap().0.x;
        assert!((x - (path.start().x + 20.0)).abs() < 1e-9);
    }

    #[test]
    fn test_dead_enemy_is_not_moved_and_is_killed() {
        let path = straight_path();
        let mut state = GameState::new(0, 5, 1);
        let mut dead = enemy(40.0);
        dead.health = 0.0;
        let e = state.world.spawn((Position(path.start()), dead));

        run(&mut state, &path, 1.0);
        assert!(!state.world.contains(e));
        assert_eq!(state.currency, 5, "kill reward credited");
        assert_eq!(state.health, 5);
    }

    #[test]
    fn test_enemy_at_end_escapes() {
        let path = straight_path();
        let mut state = GameState::new(0, 1, 1);
        let mut at_end = enemy(40.0);
        at_end.waypoint_index = path.last_index();
        let e = state.world.spawn((Position(path.end()), at_end));

        run(&mut state, &path, 0.1);
        assert!(!state.world.contains(e));
        assert_eq!(state.health, 0);
        assert_eq!(state.phase, GamePhase::Defeat);
    }
}
