//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the game state and the level's static data,
//! processes player commands, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic
//! testing with a fixed seed.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use rampart_core::catalog::Catalog;
use rampart_core::commands::{BurstSpec, PlayerCommand};
use rampart_core::constants::{DEFAULT_SEED, TILE_SIZE};
use rampart_core::enums::{GamePhase, TowerKind};
use rampart_core::error::{BurstError, LevelError, PlacementError, WaveError};
use rampart_core::level::LevelDescriptor;
use rampart_core::state::GameStateSnapshot;
use rampart_core::types::{GridCell, SimTime};

use crate::game_state::GameState;
use crate::path::WaypointPath;
use crate::systems;
use crate::systems::placement::Bounds;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for spawn-order shuffling. Same seed = same simulation.
    pub seed: u64,
    /// Tower and enemy type tables.
    #[serde(default)]
    pub catalog: Catalog,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            catalog: Catalog::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state for one level.
pub struct SimulationEngine {
    state: GameState,
    level: LevelDescriptor,
    path: WaypointPath,
    catalog: Catalog,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
}

impl SimulationEngine {
    /// Create an engine for `level`. The level is validated first.
    pub fn new(level: LevelDescriptor, config: SimConfig) -> Result<Self, LevelError> {
        level.validate()?;
        let path = WaypointPath::build(&level.path, TILE_SIZE);
        let state = GameState::new(
            level.starting_currency,
            level.starting_health,
            level.total_waves,
        );
        debug!(level = level.id, waypoints = path.len(), "Level loaded");
        Ok(Self {
            state,
            level,
            path,
            catalog: config.catalog,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. Once the level is won or lost, only commands are drained
    /// and time stands still.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if !self.state.phase.is_terminal() {
            let dt = dt.max(0.0);
            self.run_systems(dt);
            self.state.time.advance(dt);
        }

        let events = std::mem::take(&mut self.state.events);
        systems::snapshot::build_snapshot(&self.state, events)
    }

    /// Begin the next wave. Returns its number.
    pub fn start_wave(&mut self) -> Result<u32, WaveError> {
        systems::wave_spawner::start_wave(&mut self.state, &self.level.waves, &mut self.rng)
    }

    /// Enter placing mode with `kind`, or leave it with `None`.
    pub fn select_tower_type(&mut self, kind: Option<TowerKind>) {
        if self.state.phase.is_terminal() {
            return;
        }
        self.state.selected_tower = kind;
    }

    /// Whether a `kind` tower could be built on `cell` right now.
    pub fn can_place_tower(&self, cell: GridCell, kind: TowerKind) -> bool {
        self.check_placement(cell, kind).is_ok()
    }

    /// Why a `kind` tower cannot be built on `cell`, if it cannot.
    pub fn check_placement(&self, cell: GridCell, kind: TowerKind) -> Result<(), PlacementError> {
        systems::placement::check(
            &self.state,
            &self.path,
            self.bounds(),
            cell,
            self.catalog.tower(kind),
        )
    }

    /// Build a `kind` tower on `cell`, paying its cost.
    pub fn try_place_tower(&mut self, cell: GridCell, kind: TowerKind) -> Result<Entity, PlacementError> {
        let bounds = self.bounds();
        systems::placement::place(
            &mut self.state,
            &self.path,
            bounds,
            cell,
            kind,
            self.catalog.tower(kind),
        )
    }

    /// Schedule a burst. The caller is responsible for charging for it and
    /// for any cooldown between bursts.
    pub fn trigger_burst(&mut self, spec: BurstSpec) -> Result<(), BurstError> {
        systems::burst::schedule(&mut self.state, spec)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn time(&self) -> SimTime {
        self.state.time
    }

    pub fn currency(&self) -> u32 {
        self.state.currency
    }

    pub fn health(&self) -> u32 {
        self.state.health
    }

    pub fn wave(&self) -> u32 {
        self.state.wave
    }

    pub fn selected_tower(&self) -> Option<TowerKind> {
        self.state.selected_tower
    }

    /// Get a read-only reference to the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.state.world
    }

    pub fn path(&self) -> &WaypointPath {
        &self.path
    }

    pub fn level(&self) -> &LevelDescriptor {
        &self.level
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            width: self.level.grid_width,
            height: self.level.grid_height,
        }
    }

    /// Process all queued commands. Rejections are logged and dropped.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SelectTowerType { kind } => self.select_tower_type(Some(kind)),
            PlayerCommand::CancelPlacement => self.select_tower_type(None),
            PlayerCommand::PlaceTower { cell } => {
                let Some(kind) = self.state.selected_tower else {
                    debug!(?cell, err = %PlacementError::NoTowerSelected, "Placement rejected");
                    return;
                };
                // Rejections are logged by the placement system.
                self.try_place_tower(cell, kind).ok();
            }
            PlayerCommand::StartWave => {
                if let Err(err) = self.start_wave() {
                    debug!(%err, "Start wave rejected");
                }
            }
            PlayerCommand::TriggerBurst { spec } => {
                if let Err(err) = self.trigger_burst(spec) {
                    debug!(%err, "Burst rejected");
                }
            }
        }
    }

    /// Run all systems in order, stopping as soon as the level ends.
    fn run_systems(&mut self, dt: f64) {
        // 1. Scheduling: wave spawns, then due burst releases
        systems::wave_spawner::run(&mut self.state, &self.path, &self.catalog, dt);
        systems::burst::release_due(&mut self.state, &self.path);
        // 2. Movement: enemies (kills/escapes resolved on the spot), then burst units
        systems::movement::run(&mut self.state, &self.path, dt);
        if self.state.phase.is_terminal() {
            return;
        }
        systems::burst::run(&mut self.state, &self.path, dt, &mut self.despawn_buffer);
        // 3. Combat: towers fire, then projectiles fly and hit
        systems::fire_control::run(&mut self.state, dt);
        systems::impact::run(&mut self.state, dt, &mut self.despawn_buffer);
        // 4. Lifecycle: this tick's kills, wave completion, victory
        systems::lifecycle::run(&mut self.state);
    }
}
