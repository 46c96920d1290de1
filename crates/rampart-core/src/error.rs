//! Rejection reasons for player actions and static data.
//!
//! None of these are fatal. A rejected action leaves the state untouched.

use crate::types::GridCell;

/// Why a tower could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("cell ({}, {}) is outside the board", .0.x, .0.y)]
    OutOfBounds(GridCell),

    #[error("cannot build on the path")]
    OnPath,

    #[error("that tile already has a tower")]
    Occupied,

    #[error("not enough currency: need {cost}, have {available}")]
    InsufficientFunds { cost: u32, available: u32 },

    #[error("no tower type selected")]
    NoTowerSelected,

    #[error("the level is over")]
    GameFinished,
}

/// Why a wave could not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WaveError {
    #[error("wave already running")]
    AlreadyInProgress,

    #[error("the level is over")]
    GameFinished,
}

/// Why a burst could not be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BurstError {
    #[error("burst must release at least one unit")]
    EmptyBatch,

    #[error("the level is over")]
    GameFinished,
}

/// Invalid level data.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("failed to parse level: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("path needs at least two waypoints, got {0}")]
    PathTooShort(usize),

    #[error("waypoint ({}, {}) is outside the {width}x{height} grid", .cell.x, .cell.y)]
    WaypointOutOfBounds {
        cell: GridCell,
        width: u32,
        height: u32,
    },

    #[error("level must have at least one wave")]
    NoWaves,

    #[error("wave table is empty")]
    EmptyWaveTable,
}
