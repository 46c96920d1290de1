//! ECS components for hecs entities.
//!
//! Components are plain data structs. The few methods here only derive
//! values from the component's own fields; game logic lives in systems.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, TowerKind};
use crate::types::GridCell;

/// How a tower's hits deal damage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum DamageProfile {
    /// Damage the bound target only.
    Single,
    /// Damage every enemy within `radius` of the impact point.
    Splash { radius: f64 },
    /// Damage the bound target and multiply its speed by `factor`
    /// for `duration_secs`.
    Slow { factor: f64, duration_secs: f64 },
}

/// A placed tower. Lives for the rest of the level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub kind: TowerKind,
    /// Tile the tower occupies. At most one tower per tile.
    pub cell: GridCell,
    pub range: f64,
    /// Shots per second.
    pub fire_rate: f64,
    pub damage: f64,
    /// Seconds until the tower may fire again. May go negative while idle.
    pub cooldown_secs: f64,
    pub effect: DamageProfile,
}

/// An enemy walking the path from the first waypoint to the last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub health: f64,
    pub max_health: f64,
    /// Speed in pixels per second before slow effects.
    pub base_speed: f64,
    /// Speed multiplier while slowed.
    pub slow_factor: f64,
    /// Simulation time at which the current slow wears off.
    pub slowed_until: f64,
    /// Currency credited when this enemy is killed.
    pub reward: u32,
    /// Index of the waypoint the enemy last reached.
    pub waypoint_index: usize,
    /// Set once the enemy is killed or escapes. Removed enemies are never
    /// targeted, damaged, or resolved again.
    pub removed: bool,
}

impl Enemy {
    /// Whether a slow effect is active at `now`.
    pub fn is_slowed(&self, now: f64) -> bool {
        now < self.slowed_until
    }

    /// Current speed after slow effects.
    pub fn effective_speed(&self, now: f64) -> f64 {
        if self.is_slowed(now) {
            self.base_speed * self.slow_factor
        } else {
            self.base_speed
        }
    }

    /// Apply a slow at time `now`. Expiry only ever extends; a shorter
    /// application never cuts an existing slow short. While a slow is
    /// active the strongest factor wins.
    pub fn apply_slow(&mut self, now: f64, factor: f64, duration_secs: f64) {
        self.slow_factor = if self.is_slowed(now) {
            self.slow_factor.min(factor)
        } else {
            factor
        };
        self.slowed_until = self.slowed_until.max(now + duration_secs);
    }

    /// Remaining health as a fraction of max, clamped to [0, 1].
    pub fn health_ratio(&self) -> f64 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health.max(0.0) / self.max_health).min(1.0)
    }
}

/// A short-lived unit walking the path backwards that hits the first enemy
/// it touches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BurstUnit {
    pub damage: f64,
    /// Pixels per second.
    pub speed: f64,
    /// Collision radius of the unit itself.
    pub radius: f64,
    /// Index of the waypoint the unit last reached, counting down to 0.
    pub waypoint_index: usize,
}
