//! Ships: contiguous runs of cells addressed by coordinate into one grid.

use crate::grid::Grid;

/// Which way a ship extends from its starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A placed ship. It does not own its cells; it holds their coordinates and
/// reads current hit state back through the owning grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    orientation: Orientation,
    cells: Vec<(usize, usize)>,
}

impl Ship {
    /// Build a ship from the coordinate run committed by [`Grid::place`].
    pub(crate) fn new(orientation: Orientation, cells: Vec<(usize, usize)>) -> Self {
        Self { orientation, cells }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Coordinates of the ship's cells in placement order.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// A ship is sunk once every one of its cells has been shot.
    pub fn is_sunk(&self, grid: &Grid) -> bool {
        self.cells
            .iter()
            .all(|&(x, y)| grid.cell(x, y).map_or(false, |c| c.is_shot))
    }
}
