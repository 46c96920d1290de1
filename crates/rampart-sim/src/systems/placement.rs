//! Placement validation and tower construction.

use hecs::Entity;
use tracing::{debug, info};

use rampart_core::catalog::TowerSpec;
use rampart_core::components::Tower;
use rampart_core::enums::TowerKind;
use rampart_core::error::PlacementError;
use rampart_core::events::GameEvent;
use rampart_core::types::GridCell;

use crate::game_state::GameState;
use crate::path::WaypointPath;
use crate::world_setup::{self, entity_id};

/// Board size a placement must fall within.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

/// Check whether a tower of `spec` may be built on `cell`.
pub fn check(
    state: &GameState,
    path: &WaypointPath,
    bounds: Bounds,
    cell: GridCell,
    spec: &TowerSpec,
) -> Result<(), PlacementError> {
    if state.phase.is_terminal() {
        return Err(PlacementError::GameFinished);
    }
    if !cell.in_bounds(bounds.width, bounds.height) {
        return Err(PlacementError::OutOfBounds(cell));
    }
    if path.contains(cell) {
        return Err(PlacementError::OnPath);
    }
    let occupied = state
        .world
        .query::<&Tower>()
        .iter()
        .any(|(_, tower)| tower.cell == cell);
    if occupied {
        return Err(PlacementError::Occupied);
    }
    if state.currency < spec.cost {
        return Err(PlacementError::InsufficientFunds {
            cost: spec.cost,
            available: state.currency,
        });
    }
    Ok(())
}

/// Validate, pay for, and build a tower. Nothing changes on rejection.
pub fn place(
    state: &mut GameState,
    path: &WaypointPath,
    bounds: Bounds,
    cell: GridCell,
    kind: TowerKind,
    spec: &TowerSpec,
) -> Result<Entity, PlacementError> {
    if let Err(err) = check(state, path, bounds, cell, spec) {
        debug!(?cell, ?kind, %err, "Placement rejected");
        return Err(err);
    }

    state.currency -= spec.cost;
    let entity = world_setup::spawn_tower(&mut state.world, kind, cell, spec);
    info!(?cell, ?kind, currency = state.currency, "Tower placed");
    state.events.push(GameEvent::TowerPlaced {
        id: entity_id(entity),
        kind,
        cell,
    });
    Ok(entity)
}

#[cfg(test)]
mod tests {
    use rampart_core::catalog::Catalog;
    use rampart_core::enums::GamePhase;

    use super::*;

    const BOUNDS: Bounds = Bounds {
        width: 24,
        height: 18,
    };

    fn path() -> WaypointPath {
        WaypointPath::build(&[GridCell::new(0, 5), GridCell::new(10, 5)], 64.0)
    }

    fn tower_count(state: &GameState) -> usize {
        state.world.query::<&Tower>().iter().count()
    }

    #[test]
    fn test_valid_placement_charges_cost() {
        let path = path();
        let spec = *Catalog::default().tower(TowerKind::Basic);
        let mut state = GameState::new(120, 5, 1);
        place(&mut state, &path, BOUNDS, GridCell::new(3, 3), TowerKind::Basic, &spec).unwrap();
        assert_eq!(state.currency, 70);
        assert_eq!(tower_count(&state), 1);
    }

    #[test]
    fn test_rejections_leave_state_unchanged() {
        let path = path();
        let spec = *Catalog::default().tower(TowerKind::Cannon);
        let mut state = GameState::new(100, 5, 1);
        place(&mut state, &path, BOUNDS, GridCell::new(3, 3), TowerKind::Cannon, &spec).unwrap();
        assert_eq!(state.currency, 10);
        state.currency = 200;

        let cases = [
            (GridCell::new(4, 5), PlacementError::OnPath),
            (GridCell::new(3, 3), PlacementError::Occupied),
            (GridCell::new(30, 3), PlacementError::OutOfBounds(GridCell::new(30, 3))),
        ];
        for (cell, expected) in cases {
            let result = place(&mut state, &path, BOUNDS, cell, TowerKind::Cannon, &spec);
            assert_eq!(result, Err(expected));
            assert_eq!(state.currency, 200);
            assert_eq!(tower_count(&state), 1);
        }

        state.currency = 20;
        let result = place(&mut state, &path, BOUNDS, GridCell::new(8, 8), TowerKind::Cannon, &spec);
        assert_eq!(
            result,
            Err(PlacementError::InsufficientFunds {
                cost: 90,
                available: 20
            })
        );
        assert_eq!(state.currency, 20);
        assert_eq!(tower_count(&state), 1);
    }

    #[test]
    fn test_no_building_after_game_over() {
        let path = path();
        let spec = *Catalog::default().tower(TowerKind::Basic);
        let mut state = GameState::new(500, 5, 1);
        state.finish(GamePhase::Defeat);
        assert_eq!(
            check(&state, &path, BOUNDS, GridCell::new(3, 3), &spec),
            Err(PlacementError::GameFinished)
        );
    }
}
