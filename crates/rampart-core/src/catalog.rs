//! Static per-type tables for towers and enemies.
//!
//! The engine never mutates a catalog. Presentation layers may load a custom
//! one from JSON; `Catalog::default()` carries the stock balance.

use serde::{Deserialize, Serialize};

use crate::components::DamageProfile;
use crate::enums::{EnemyKind, TowerKind};

/// Build cost and combat stats of one tower kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerSpec {
    pub cost: u32,
    pub range: f64,
    /// Shots per second.
    pub fire_rate: f64,
    pub damage: f64,
    pub effect: DamageProfile,
}

/// Base stats of one enemy kind and how they grow per wave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpec {
    pub base_health: f64,
    pub health_per_wave: f64,
    pub base_speed: f64,
    pub speed_per_wave: f64,
    pub base_reward: u32,
    pub reward_per_wave: u32,
}

/// Enemy stats resolved for a specific wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub health: f64,
    pub speed: f64,
    pub reward: u32,
}

impl EnemySpec {
    /// Stats of this enemy when spawned during `wave`.
    pub fn scaled(&self, wave: u32) -> EnemyStats {
        let w = f64::from(wave);
        EnemyStats {
            health: self.base_health + self.health_per_wave * w,
            speed: self.base_speed + self.speed_per_wave * w,
            reward: self.base_reward + self.reward_per_wave * wave,
        }
    }
}

/// Type tables for every tower and enemy kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub basic: TowerSpec,
    pub cannon: TowerSpec,
    pub slow: TowerSpec,
    pub soldier: EnemySpec,
    pub scout: EnemySpec,
    pub tank: EnemySpec,
}

impl Catalog {
    pub fn tower(&self, kind: TowerKind) -> &TowerSpec {
        match kind {
            TowerKind::Basic => &self.basic,
            TowerKind::Cannon => &self.cannon,
            TowerKind::Slow => &self.slow,
        }
    }

    pub fn enemy(&self, kind: EnemyKind) -> &EnemySpec {
        match kind {
            EnemyKind::Soldier => &self.soldier,
            EnemyKind::Scout => &self.scout,
            EnemyKind::Tank => &self.tank,
        }
    }

    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            basic: TowerSpec {
                cost: 50,
                range: 150.0,
                fire_rate: 1.0,
                damage: 12.0,
                effect: DamageProfile::Single,
            },
            cannon: TowerSpec {
                cost: 90,
                range: 130.0,
                fire_rate: 0.6,
                damage: 18.0,
                effect: DamageProfile::Splash { radius: 60.0 },
            },
            slow: TowerSpec {
                cost: 70,
                range: 140.0,
                fire_rate: 1.2,
                damage: 6.0,
                effect: DamageProfile::Slow {
                    factor: 0.5,
                    duration_secs: 1.8,
                },
            },
            soldier: EnemySpec {
                base_health: 40.0,
                health_per_wave: 14.0,
                base_speed: 45.0,
                speed_per_wave: 4.0,
                base_reward: 12,
                reward_per_wave: 2,
            },
            scout: EnemySpec {
                base_health: 26.0,
                health_per_wave: 9.0,
                base_speed: 72.0,
                speed_per_wave: 5.0,
                base_reward: 10,
                reward_per_wave: 2,
            },
            tank: EnemySpec {
                base_health: 120.0,
                health_per_wave: 32.0,
                base_speed: 30.0,
                speed_per_wave: 2.0,
                base_reward: 25,
                reward_per_wave: 4,
            },
        }
    }
}
