//! Path builder: expands sparse grid corners into the dense waypoint
//! sequence every walker follows.

use std::collections::HashSet;

use glam::DVec2;

use rampart_core::types::GridCell;

/// The fixed path of a level. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct WaypointPath {
    /// Every tile from the first corner to the last, inclusive, in order.
    cells: Vec<GridCell>,
    /// Same tiles, for O(1) membership tests.
    cell_set: HashSet<GridCell>,
    /// World-space center of each entry in `cells`.
    waypoints: Vec<DVec2>,
}

impl WaypointPath {
    /// Expand `corners` one tile at a time.
    ///
    /// Each segment steps by the sign of the remaining delta on each axis, so
    /// straight runs step one axis and 45° runs step both in lock-step. The
    /// first tile is emitted once; each later corner is emitted as the end of
    /// its segment. Two identical consecutive corners add nothing.
    pub fn build(corners: &[GridCell], tile_size: f64) -> Self {
        let mut cells = Vec::new();
        if let Some(first) = corners.first() {
            cells.push(*first);
        }

        for pair in corners.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            let mut current = start;
            while current != end {
                current.x += (end.x - current.x).signum();
                current.y += (end.y - current.y).signum();
                cells.push(current);
            }
        }

        let cell_set = cells.iter().copied().collect();
        let waypoints = cells.iter().map(|c| c.center(tile_size)).collect();
        Self {
            cells,
            cell_set,
            waypoints,
        }
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn waypoints(&self) -> &[DVec2] {
        &self.waypoints
    }

    /// Whether `cell` is part of the path.
    pub fn contains(&self, cell: GridCell) -> bool {
        self.cell_set.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Index of the final waypoint.
    pub fn last_index(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    pub fn waypoint(&self, index: usize) -> Option<DVec2> {
        self.waypoints.get(index).copied()
    }

    /// Where enemies enter.
    pub fn start(&self) -> DVec2 {
        self.waypoints.first().copied().unwrap_or_default()
    }

    /// Where enemies escape and burst units enter.
    pub fn end(&self) -> DVec2 {
        self.waypoints.last().copied().unwrap_or_default()
    }
}
