//! The board grid: a fixed-size rectangle of cells tracking shots and ships.

use rand::Rng;

use crate::common::GameError;
use crate::ship::Orientation;

/// One grid position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub is_shot: bool,
    pub has_ship: bool,
}

/// Rectangular board of cells. Dimensions are fixed at construction.
/// Coordinates are zero-based, `x` being the column and `y` the row;
/// 1-based columns and letter rows belong to the console layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell unshot and unoccupied.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(x, y)`, or `None` off the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            self.cells.get_mut(y * self.width + x)
        } else {
            None
        }
    }

    /// Coordinates covered by a run of `length` cells starting at `(x, y)`.
    /// `None` when the run leaves the grid.
    fn run(
        &self,
        x: usize,
        y: usize,
        orientation: Orientation,
        length: usize,
    ) -> Option<Vec<(usize, usize)>> {
        let (end_x, end_y) = match orientation {
            Orientation::Horizontal => (x + length, y + 1),
            Orientation::Vertical => (x + 1, y + length),
        };
        if end_x > self.width || end_y > self.height {
            return None;
        }
        let coords = (0..length)
            .map(|i| match orientation {
                Orientation::Horizontal => (x + i, y),
                Orientation::Vertical => (x, y + i),
            })
            .collect();
        Some(coords)
    }

    /// True iff the whole run stays on the grid and crosses no existing ship.
    /// Pure query.
    pub fn can_place(&self, x: usize, y: usize, orientation: Orientation, length: usize) -> bool {
        match self.run(x, y, orientation, length) {
            Some(coords) => coords
                .iter()
                .all(|&(cx, cy)| self.cell(cx, cy).map_or(false, |c| !c.has_ship)),
            None => false,
        }
    }

    /// Mark a run of cells as occupied and return it in order, for ship
    /// construction. Atomic: the grid is untouched unless every cell of the
    /// run is valid and free.
    pub fn place(
        &mut self,
        x: usize,
        y: usize,
        orientation: Orientation,
        length: usize,
    ) -> Result<Vec<(usize, usize)>, GameError> {
        let coords = self
            .run(x, y, orientation, length)
            .ok_or(GameError::InvalidPlacement)?;
        if coords
            .iter()
            .any(|&(cx, cy)| self.cell(cx, cy).map_or(true, |c| c.has_ship))
        {
            return Err(GameError::InvalidPlacement);
        }
        for &(cx, cy) in &coords {
            if let Some(cell) = self.cell_mut(cx, cy) {
                cell.has_ship = true;
            }
        }
        Ok(coords)
    }

    /// Fire at `(x, y)`. Reports whether a ship segment was hit. A cell that
    /// was already shot is left untouched and rejected with
    /// [`GameError::AlreadyShot`].
    pub fn shoot(&mut self, x: usize, y: usize) -> Result<bool, GameError> {
        let cell = self.cell_mut(x, y).ok_or(GameError::OutOfBounds)?;
        if cell.is_shot {
            return Err(GameError::AlreadyShot);
        }
        cell.is_shot = true;
        Ok(cell.has_ship)
    }

    /// Returns a random free `(x, y, Orientation)` for a run of `length`
    /// cells, rejection-sampling up to a fixed attempt budget.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(usize, usize, Orientation), GameError> {
        if length == 0 || (length > self.width && length > self.height) {
            return Err(GameError::NoSpaceForShip);
        }
        let mut attempts = 0;
        while attempts < 100 {
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (self.width.saturating_sub(length), self.height - 1),
                Orientation::Vertical => (self.width - 1, self.height.saturating_sub(length)),
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            if self.can_place(x, y, orientation, length) {
                return Ok((x, y, orientation));
            }
        }
        Err(GameError::NoSpaceForShip)
    }
}
