//! ECS systems that operate on the game state each tick.
//!
//! Systems are plain functions over `&mut GameState` (or `&GameState` for
//! read-only). They do not own state — all state lives in the world and in
//! `GameState`.

pub mod burst;
pub mod fire_control;
pub mod impact;
pub mod lifecycle;
pub mod movement;
pub mod placement;
pub mod snapshot;
pub mod wave_spawner;
