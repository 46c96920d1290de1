//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A tile on the level grid. x grows to the right, y grows downward.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

/// World-space position in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks processed so far.
    pub tick: u64,
    /// Elapsed simulation time in seconds (sum of every processed delta).
    pub elapsed_secs: f64,
}

impl GridCell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// World-space center of this tile.
    pub fn center(&self, tile_size: f64) -> DVec2 {
        DVec2::new(
            f64::from(self.x) * tile_size + tile_size / 2.0,
            f64::from(self.y) * tile_size + tile_size / 2.0,
        )
    }

    /// Tile containing a world-space point.
    pub fn from_world(point: DVec2, tile_size: f64) -> Self {
        Self {
            x: (point.x / tile_size).floor() as i32,
            y: (point.y / tile_size).floor() as i32,
        }
    }

    /// Whether this tile lies inside a `width` x `height` grid.
    pub fn in_bounds(&self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < width && (self.y as u32) < height
    }
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Squared distance to another position.
    pub fn distance_squared(&self, other: &Position) -> f64 {
        self.0.distance_squared(other.0)
    }

    /// Distance to another position.
    pub fn distance(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
