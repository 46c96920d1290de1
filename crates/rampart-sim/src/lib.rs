//! Simulation engine for RAMPART.
//!
//! Owns the hecs ECS world, runs systems once per variable-length tick,
//! and produces GameStateSnapshots for the presentation layer.

pub mod engine;
pub mod game_state;
pub mod path;
pub mod projectile;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use rampart_core as core;
