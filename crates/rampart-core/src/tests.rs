#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::catalog::Catalog;
    use crate::commands::{BurstSpec, PlayerCommand};
    use crate::components::{DamageProfile, Enemy};
    use crate::enums::*;
    use crate::error::{LevelError, PlacementError};
    use crate::level::{self, LevelDescriptor};
    use crate::types::{GridCell, Position, SimTime};

    fn soldier() -> Enemy {
        Enemy {
            kind: EnemyKind::Soldier,
            health: 50.0,
            max_health: 50.0,
            base_speed: 40.0,
            slow_factor: 1.0,
            slowed_until: 0.0,
            reward: 10,
            waypoint_index: 0,
            removed: false,
        }
    }

    // ---- Geometry ----

    #[test]
    fn test_cell_center() {
        let c = GridCell::new(2, 3).center(64.0);
        assert_eq!(c.x, 160.0);
        assert_eq!(c.y, 224.0);
    }

    #[test]
    fn test_cell_from_world_floors_negative() {
        let cell = GridCell::from_world(glam::DVec2::new(-1.0, 63.9), 64.0);
        assert_eq!(cell, GridCell::new(-1, 0));
    }

    #[test]
    fn test_cell_bounds() {
        assert!(GridCell::new(0, 0).in_bounds(24, 18));
        assert!(GridCell::new(23, 17).in_bounds(24, 18));
        assert!(!GridCell::new(24, 0).in_bounds(24, 18));
        assert!(!GridCell::new(0, -1).in_bounds(24, 18));
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance_squared(&b), 25.0);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance(0.5);
        t.advance(0.25);
        assert_eq!(t.tick, 2);
        assert!((t.elapsed_secs - 0.75).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_center_maps_back_to_cell(x in -50i32..50, y in -50i32..50) {
            let cell = GridCell::new(x, y);
            prop_assert_eq!(GridCell::from_world(cell.center(64.0), 64.0), cell);
        }
    }

    // ---- Slow effects ----

    #[test]
    fn test_slow_extends_never_shortens() {
        let mut enemy = soldier();
        enemy.apply_slow(0.0, 0.5, 2.0);
        assert_eq!(enemy.slowed_until, 2.0);

        // A shorter slow applied later must not cut the first one short.
        enemy.apply_slow(1.0, 0.5, 1.0);
        assert_eq!(enemy.slowed_until, 2.0);

        // A slow reaching further out extends the expiry.
        enemy.apply_slow(1.5, 0.5, 2.0);
        assert_eq!(enemy.slowed_until, 3.5);
    }

    #[test]
    fn test_effective_speed_while_slowed() {
        let mut enemy = soldier();
        assert_eq!(enemy.effective_speed(0.0), 40.0);
        enemy.apply_slow(0.0, 0.5, 1.0);
        assert_eq!(enemy.effective_speed(0.5), 20.0);
        assert_eq!(enemy.effective_speed(1.0), 40.0, "slow ends at expiry");
    }

    #[test]
    fn test_strongest_slow_factor_wins_while_active() {
        let mut enemy = soldier();
        enemy.apply_slow(0.0, 0.4, 2.0);
        enemy.apply_slow(0.5, 0.7, 2.0);
        assert_eq!(enemy.slow_factor, 0.4);

        // Once expired, a new application sets its own factor.
        enemy.apply_slow(10.0, 0.7, 1.0);
        assert_eq!(enemy.slow_factor, 0.7);
    }

    #[test]
    fn test_health_ratio_clamped() {
        let mut enemy = soldier();
        enemy.health = -20.0;
        assert_eq!(enemy.health_ratio(), 0.0);
        enemy.health = 25.0;
        assert_eq!(enemy.health_ratio(), 0.5);
    }

    // ---- Catalog ----

    #[test]
    fn test_default_catalog_effects_match_kinds() {
        let catalog = Catalog::default();
        assert_eq!(catalog.tower(TowerKind::Basic).effect, DamageProfile::Single);
        assert!(matches!(
            catalog.tower(TowerKind::Cannon).effect,
            DamageProfile::Splash { .. }
        ));
        assert!(matches!(
            catalog.tower(TowerKind::Slow).effect,
            DamageProfile::Slow { .. }
        ));
    }

    #[test]
    fn test_default_catalog_stats_are_positive() {
        let catalog = Catalog::default();
        for kind in TowerKind::ALL {
            let spec = catalog.tower(kind);
            assert!(spec.cost > 0, "{kind:?}");
            assert!(spec.range > 0.0 && spec.fire_rate > 0.0 && spec.damage > 0.0, "{kind:?}");
        }
        for kind in EnemyKind::ALL {
            let stats = catalog.enemy(kind).scaled(1);
            assert!(stats.health > 0.0 && stats.speed > 0.0 && stats.reward > 0, "{kind:?}");
        }
    }

    #[test]
    fn test_enemy_scaling_per_wave() {
        let stats = Catalog::default().enemy(EnemyKind::Soldier).scaled(3);
        assert_eq!(stats.health, 40.0 + 14.0 * 3.0);
        assert_eq!(stats.speed, 45.0 + 4.0 * 3.0);
        assert_eq!(stats.reward, 12 + 2 * 3);
    }

    #[test]
    fn test_catalog_json_round_trip() {
        let catalog = Catalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
    }

    // ---- Levels ----

    #[test]
    fn test_builtin_levels_validate() {
        for level in level::campaign() {
            level.validate().unwrap();
        }
        assert_eq!(level::builtin(2).unwrap().total_waves, 10);
        assert!(level::builtin(9).is_none());
    }

    #[test]
    fn test_level_from_json_with_defaults() {
        let json = r#"{
            "id": 7,
            "name": "Test",
            "starting_currency": 100,
            "starting_health": 5,
            "total_waves": 2,
            "path": [{"x": 0, "y": 0}, {"x": 4, "y": 0}],
            "waves": {"waves": [[["soldier", 2], ["tank", 1]]]}
        }"#;
        let level = LevelDescriptor::from_json(json).unwrap();
        assert_eq!(level.grid_width, 24);
        assert_eq!(level.grid_height, 18);
        assert_eq!(level.waves.growth_per_wave, 2);
        assert_eq!(
            level.waves.waves[0],
            vec![(EnemyKind::Soldier, 2), (EnemyKind::Tank, 1)]
        );
    }

    #[test]
    fn test_level_validation_errors() {
        let mut level = level::level_one();
        level.path.truncate(1);
        assert!(matches!(level.validate(), Err(LevelError::PathTooShort(1))));

        let mut level = level::level_one();
        level.path.push(GridCell::new(40, 0));
        assert!(matches!(
            level.validate(),
            Err(LevelError::WaypointOutOfBounds { .. })
        ));

        let mut level = level::level_one();
        level.total_waves = 0;
        assert!(matches!(level.validate(), Err(LevelError::NoWaves)));

        let mut level = level::level_one();
        level.waves.waves.clear();
        assert!(matches!(level.validate(), Err(LevelError::EmptyWaveTable)));
    }

    #[test]
    fn test_level_parse_error() {
        assert!(matches!(
            LevelDescriptor::from_json("{not json"),
            Err(LevelError::Parse(_))
        ));
    }

    // ---- Commands and errors ----

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SelectTowerType {
                kind: TowerKind::Cannon,
            },
            PlayerCommand::CancelPlacement,
            PlayerCommand::PlaceTower {
                cell: GridCell::new(3, 4),
            },
            PlayerCommand::StartWave,
            PlayerCommand::TriggerBurst {
                spec: BurstSpec::default(),
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_placement_error_messages() {
        let err = PlacementError::InsufficientFunds {
            cost: 90,
            available: 40,
        };
        assert_eq!(err.to_string(), "not enough currency: need 90, have 40");
        assert_eq!(
            PlacementError::OutOfBounds(GridCell::new(-1, 2)).to_string(),
            "cell (-1, 2) is outside the board"
        );
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!GamePhase::Building.is_terminal());
        assert!(!GamePhase::WaveInProgress.is_terminal());
        assert!(GamePhase::Defeat.is_terminal());
        assert!(GamePhase::Victory.is_terminal());
    }
}
