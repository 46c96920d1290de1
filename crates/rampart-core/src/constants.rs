//! Simulation constants and tuning parameters.

// --- Board ---

/// Edge length of one grid tile in pixels.
pub const TILE_SIZE: f64 = 64.0;

/// Default grid width in tiles.
pub const GRID_WIDTH: u32 = 24;

/// Default grid height in tiles.
pub const GRID_HEIGHT: u32 = 18;

// --- Projectiles ---

/// Projectile travel speed (pixels per second).
pub const PROJECTILE_SPEED: f64 = 280.0;

// --- Enemies ---

/// Radius used for burst-unit collisions against enemies.
pub const ENEMY_COLLISION_RADIUS: f64 = 18.0;

// --- Spawning ---

/// Spawn interval for wave 0, before per-wave shortening.
pub const SPAWN_INTERVAL_BASE: f64 = 0.85;

/// Seconds removed from the spawn interval per wave.
pub const SPAWN_INTERVAL_STEP: f64 = 0.04;

/// Shortest spawn interval regardless of wave.
pub const SPAWN_INTERVAL_FLOOR: f64 = 0.3;

/// Default extra enemies per type for each wave past the end of a wave table.
pub const DEFAULT_WAVE_GROWTH: u32 = 2;

// --- Burst units ---

/// Units released per burst.
pub const BURST_COUNT: u32 = 6;

/// Seconds between consecutive unit releases in a burst.
pub const BURST_INTERVAL_SECS: f64 = 0.25;

/// Damage dealt by a unit on collision.
pub const BURST_DAMAGE: f64 = 60.0;

/// Burst unit speed (pixels per second).
pub const BURST_SPEED: f64 = 180.0;

/// Burst unit collision radius.
pub const BURST_RADIUS: f64 = 16.0;

// --- Randomness ---

/// Default RNG seed when none is configured.
pub const DEFAULT_SEED: u64 = 42;
