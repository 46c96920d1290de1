//! Level descriptors: the static data the engine needs to run one level.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WAVE_GROWTH, GRID_HEIGHT, GRID_WIDTH};
use crate::enums::EnemyKind;
use crate::error::LevelError;
use crate::types::GridCell;

/// Enemy composition of a single wave: (kind, count) pairs.
pub type WaveComposition = Vec<(EnemyKind, u32)>;

/// Per-wave enemy compositions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveTable {
    /// Composition of wave 1, 2, ... in order.
    pub waves: Vec<WaveComposition>,
    /// Extra enemies per type for each wave past the end of the table.
    #[serde(default = "default_growth")]
    pub growth_per_wave: u32,
}

fn default_growth() -> u32 {
    DEFAULT_WAVE_GROWTH
}

fn default_grid_width() -> u32 {
    GRID_WIDTH
}

fn default_grid_height() -> u32 {
    GRID_HEIGHT
}

/// Everything the engine needs to know about a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    pub id: u32,
    pub name: String,
    pub starting_currency: u32,
    pub starting_health: u32,
    pub total_waves: u32,
    /// Sparse path corners in grid coordinates, start to end.
    pub path: Vec<GridCell>,
    pub waves: WaveTable,
    #[serde(default = "default_grid_width")]
    pub grid_width: u32,
    #[serde(default = "default_grid_height")]
    pub grid_height: u32,
}

impl LevelDescriptor {
    /// Parse and validate a level from JSON.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: LevelDescriptor = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.path.len() < 2 {
            return Err(LevelError::PathTooShort(self.path.len()));
        }
        if let Some(cell) = self
            .path
            .iter()
            .find(|c| !c.in_bounds(self.grid_width, self.grid_height))
        {
            return Err(LevelError::WaypointOutOfBounds {
                cell: *cell,
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.total_waves == 0 {
            return Err(LevelError::NoWaves);
        }
        if self.waves.waves.is_empty() {
            return Err(LevelError::EmptyWaveTable);
        }
        Ok(())
    }
}

fn path(nodes: &[(i32, i32)]) -> Vec<GridCell> {
    nodes.iter().map(|&(x, y)| GridCell::new(x, y)).collect()
}

/// Opening waves shared by the stock levels.
fn opening_waves() -> Vec<WaveComposition> {
    use EnemyKind::*;
    vec![
        vec![(Soldier, 6)],
        vec![(Soldier, 8)],
        vec![(Soldier, 7), (Scout, 3)],
        vec![(Soldier, 8), (Scout, 3), (Tank, 1)],
        vec![(Soldier, 8), (Scout, 4), (Tank, 2)],
    ]
}

/// First level: entrance of the mountain pass.
pub fn level_one() -> LevelDescriptor {
    LevelDescriptor {
        id: 1,
        name: "Mountain Gate".into(),
        starting_currency: 120,
        starting_health: 20,
        total_waves: 8,
        path: path(&[(0, 9), (6, 9), (6, 3), (16, 3), (16, 13), (23, 13)]),
        waves: WaveTable {
            waves: opening_waves(),
            growth_per_wave: 2,
        },
        grid_width: GRID_WIDTH,
        grid_height: GRID_HEIGHT,
    }
}

/// Second level: the palace switchbacks.
pub fn level_two() -> LevelDescriptor {
    LevelDescriptor {
        id: 2,
        name: "Palace Switchbacks".into(),
        starting_currency: 100,
        starting_health: 15,
        total_waves: 10,
        path: path(&[
            (0, 5),
            (8, 5),
            (8, 14),
            (14, 14),
            (14, 3),
            (20, 3),
            (20, 10),
            (23, 10),
        ]),
        waves: WaveTable {
            waves: opening_waves(),
            growth_per_wave: 2,
        },
        grid_width: GRID_WIDTH,
        grid_height: GRID_HEIGHT,
    }
}

/// Third level: the abyss.
pub fn level_three() -> LevelDescriptor {
    LevelDescriptor {
        id: 3,
        name: "Abyss Floor".into(),
        starting_currency: 80,
        starting_health: 10,
        total_waves: 12,
        path: path(&[
            (0, 9),
            (4, 9),
            (4, 2),
            (10, 2),
            (10, 15),
            (17, 15),
            (17, 5),
            (21, 5),
            (21, 13),
            (23, 13),
        ]),
        waves: WaveTable {
            waves: opening_waves(),
            growth_per_wave: 3,
        },
        grid_width: GRID_WIDTH,
        grid_height: GRID_HEIGHT,
    }
}

/// All stock levels in campaign order.
pub fn campaign() -> Vec<LevelDescriptor> {
    vec![level_one(), level_two(), level_three()]
}

/// Look up a stock level by id.
pub fn builtin(id: u32) -> Option<LevelDescriptor> {
    campaign().into_iter().find(|l| l.id == id)
}
