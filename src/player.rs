//! Per-player state: identity, round counters and the owned board.

use crate::common::{GameError, ShotOutcome};
use crate::config::{GRID_HEIGHT, GRID_WIDTH, MAX_SHOTS_PER_PLAYER};
use crate::fleet::Fleet;
use crate::grid::Grid;
use crate::ship::Orientation;
use crate::shot;

/// One participant. Round counters and the board reset between rounds; the
/// win total lasts for the whole session.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    shots_taken: usize,
    missed_shots: usize,
    ship_cells_hit: usize,
    wins: usize,
    grid: Grid,
    fleet: Fleet,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shots_taken: 0,
            missed_shots: 0,
            ship_cells_hit: 0,
            wins: 0,
            grid: Grid::new(GRID_WIDTH, GRID_HEIGHT),
            fleet: Fleet::new(),
        }
    }

    /// Fresh board and zeroed round counters; the win total survives.
    pub(crate) fn reset_for_round(&mut self) {
        self.shots_taken = 0;
        self.missed_shots = 0;
        self.ship_cells_hit = 0;
        self.grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
        self.fleet = Fleet::new();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shots_taken(&self) -> usize {
        self.shots_taken
    }

    pub fn missed_shots(&self) -> usize {
        self.missed_shots
    }

    /// Enemy ship cells this player has hit in the current round.
    pub fn ship_cells_hit(&self) -> usize {
        self.ship_cells_hit
    }

    pub fn wins(&self) -> usize {
        self.wins
    }

    pub fn shots_left(&self) -> usize {
        MAX_SHOTS_PER_PLAYER.saturating_sub(self.shots_taken)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Ships on this player's own board that are fully sunk.
    pub fn ships_sunk(&self) -> usize {
        shot::ships_sunk(&self.fleet, &self.grid)
    }

    /// Place one ship on this player's own board.
    pub(crate) fn place_ship(
        &mut self,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.fleet.place_ship(&mut self.grid, x, y, orientation)
    }

    /// Resolve an incoming shot against this player's board.
    pub(crate) fn receive_shot(&mut self, x: usize, y: usize) -> Result<ShotOutcome, GameError> {
        shot::resolve_shot(&mut self.grid, x, y)
    }

    /// Apply the scoring rules for a shot this player fired. `AlreadyShot`
    /// moves no counter.
    pub(crate) fn record_outcome(&mut self, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => {
                self.ship_cells_hit += 1;
                self.shots_taken += 1;
            }
            ShotOutcome::Miss => {
                self.missed_shots += 1;
                self.shots_taken += 1;
            }
            ShotOutcome::AlreadyShot => {}
        }
    }

    pub(crate) fn record_win(&mut self) {
        self.wins += 1;
    }
}
