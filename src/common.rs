//! Common types for the game: the error taxonomy and shot outcomes.

use thiserror::Error;

/// Result of resolving a shot against a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The shot found a ship segment.
    Hit,
    /// Open water.
    Miss,
    /// The cell had been shot before; the shot is not consumed.
    AlreadyShot,
}

/// Errors returned by board and game operations. All are recoverable: the
/// console layer reprompts and the failed call leaves no state change behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Placement runs out of bounds or overlaps another ship.
    #[error("placement is out of bounds or overlaps another ship")]
    InvalidPlacement,
    /// The cell has already been shot.
    #[error("that cell has already been shot")]
    AlreadyShot,
    /// The fleet already holds its full complement of ships.
    #[error("the fleet is already full")]
    FleetFull,
    /// No free spot found for a random placement.
    #[error("no space left for a ship of that length")]
    NoSpaceForShip,
    /// Shot aimed off the board.
    #[error("coordinate is off the board")]
    OutOfBounds,
    /// Operation invoked in the wrong game phase.
    #[error("operation is not valid in the current game phase")]
    WrongPhase,
}
