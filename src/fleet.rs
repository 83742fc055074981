//! A player's fleet: placement bookkeeping bounded by [`MAX_SHIPS`].

use crate::common::GameError;
use crate::config::{MAX_SHIPS, SHIP_LENGTH};
use crate::grid::Grid;
use crate::ship::{Orientation, Ship};

/// Ordered collection of one player's ships. Never exceeds `MAX_SHIPS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Self {
            ships: Vec::with_capacity(MAX_SHIPS),
        }
    }

    /// Number of ships placed so far.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// True once the fleet holds its full complement.
    pub fn is_full(&self) -> bool {
        self.ships.len() >= MAX_SHIPS
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Validate and commit one ship of [`SHIP_LENGTH`] cells onto `grid`.
    ///
    /// Fails with [`GameError::FleetFull`] once the complement is placed and
    /// propagates [`GameError::InvalidPlacement`] from the grid untouched;
    /// reprompting is the caller's job, no retry loop lives here.
    pub fn place_ship(
        &mut self,
        grid: &mut Grid,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.is_full() {
            return Err(GameError::FleetFull);
        }
        let cells = grid.place(x, y, orientation, SHIP_LENGTH)?;
        self.ships.push(Ship::new(orientation, cells));
        Ok(())
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
