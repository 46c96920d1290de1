//! Projectile component. Lives in the engine crate because it holds a
//! `hecs::Entity` handle to its target.

use rampart_core::components::DamageProfile;
use rampart_core::enums::TowerKind;

/// A shot in flight toward an enemy.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    /// The enemy this shot is bound to. Never owning: if the enemy is
    /// despawned or flagged removed, the projectile disappears without
    /// dealing damage. hecs handles are generation-checked, so a recycled
    /// slot never resolves to a different enemy.
    pub target: hecs::Entity,
    /// Tower that fired the shot.
    pub source: hecs::Entity,
    pub tower_kind: TowerKind,
    /// Pixels per second.
    pub speed: f64,
    pub damage: f64,
    pub effect: DamageProfile,
}
