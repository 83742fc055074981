//! Shot resolution: applying a shot to a grid and counting sunk ships.

use crate::common::{GameError, ShotOutcome};
use crate::fleet::Fleet;
use crate::grid::Grid;

/// Apply one shot to `grid`, folding the duplicate-shot rejection into the
/// tri-state outcome that drives scoring. Only an off-board coordinate is a
/// hard error.
pub fn resolve_shot(grid: &mut Grid, x: usize, y: usize) -> Result<ShotOutcome, GameError> {
    match grid.shoot(x, y) {
        Ok(true) => Ok(ShotOutcome::Hit),
        Ok(false) => Ok(ShotOutcome::Miss),
        Err(GameError::AlreadyShot) => Ok(ShotOutcome::AlreadyShot),
        Err(e) => Err(e),
    }
}

/// Count ships in `fleet` whose every cell has been shot on `grid`.
pub fn ships_sunk(fleet: &Fleet, grid: &Grid) -> usize {
    fleet.ships().iter().filter(|s| s.is_sunk(grid)).count()
}
