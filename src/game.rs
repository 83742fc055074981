//! The round state machine: phases, turns and the win/loss decision.

use log::{debug, info};

use crate::common::{GameError, ShotOutcome};
use crate::config::{MAX_SHOTS_PER_PLAYER, TOTAL_SHIP_CELLS};
use crate::player::Player;
use crate::ship::Orientation;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fleets are being placed.
    Setup,
    /// Shots are alternating.
    InProgress,
    /// The round is decided; replay or end.
    RoundOver,
    /// The session is finished.
    Ended,
}

/// Identifies one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The opposing player.
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// What one call to [`Game::fire`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Who fired.
    pub shooter: PlayerId,
    /// What the shot found.
    pub outcome: ShotOutcome,
    /// Set when this shot decided the round.
    pub winner: Option<PlayerId>,
}

/// Two players, the turn designator and the phase flag. The single owner of
/// all match state, threaded explicitly through the session loop.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    shooter: PlayerId,
    round_opener: PlayerId,
    phase: Phase,
}

impl Game {
    /// New session in `Setup`. Player Two takes the first turn of round one;
    /// the opener alternates on each replay.
    pub fn new(name_one: impl Into<String>, name_two: impl Into<String>) -> Self {
        Self {
            players: [Player::new(name_one), Player::new(name_two)],
            shooter: PlayerId::Two,
            round_opener: PlayerId::Two,
            phase: Phase::Setup,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The player whose turn it is.
    pub fn shooter(&self) -> PlayerId {
        self.shooter
    }

    /// The player currently being shot at.
    pub fn target(&self) -> PlayerId {
        self.shooter.other()
    }

    /// Place one ship for `id`. Only valid during setup.
    pub fn place_ship(
        &mut self,
        id: PlayerId,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::WrongPhase);
        }
        self.players[id.index()].place_ship(x, y, orientation)
    }

    /// True once both fleets hold their full complement.
    pub fn setup_complete(&self) -> bool {
        self.players.iter().all(|p| p.fleet().is_full())
    }

    /// `Setup -> InProgress`; requires both fleets to be fully placed.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Setup || !self.setup_complete() {
            return Err(GameError::WrongPhase);
        }
        self.phase = Phase::InProgress;
        info!("round begins, {} shoots first", self.player(self.shooter).name());
        Ok(())
    }

    /// Resolve one shot by the current shooter at the target's board.
    ///
    /// An `AlreadyShot` outcome consumes nothing: no counter moves and the
    /// same player keeps the turn. A consumed shot updates the shooter's
    /// counters, after which either the round is decided (all enemy cells
    /// hit: shooter wins; shot budget spent: shooter loses) or the turn
    /// passes to the other player.
    pub fn fire(&mut self, x: usize, y: usize) -> Result<TurnReport, GameError> {
        if self.phase != Phase::InProgress {
            return Err(GameError::WrongPhase);
        }
        let shooter = self.shooter;
        let target = shooter.other();
        let outcome = self.players[target.index()].receive_shot(x, y)?;
        if outcome == ShotOutcome::AlreadyShot {
            debug!("{} re-shot a spent cell, turn kept", self.player(shooter).name());
            return Ok(TurnReport {
                shooter,
                outcome,
                winner: None,
            });
        }
        self.players[shooter.index()].record_outcome(outcome);

        let winner = if self.player(shooter).ship_cells_hit() >= TOTAL_SHIP_CELLS {
            Some(shooter)
        } else if self.player(shooter).shots_taken() >= MAX_SHOTS_PER_PLAYER {
            Some(target)
        } else {
            None
        };

        match winner {
            Some(w) => {
                self.phase = Phase::RoundOver;
                self.players[w.index()].record_win();
                info!("round over, {} wins", self.player(w).name());
            }
            None => self.shooter = target,
        }
        Ok(TurnReport {
            shooter,
            outcome,
            winner,
        })
    }

    /// `RoundOver -> Setup`: boards and round counters reset, win totals
    /// kept, and the other player opens the new round.
    pub fn play_again(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::RoundOver {
            return Err(GameError::WrongPhase);
        }
        for p in &mut self.players {
            p.reset_for_round();
        }
        self.round_opener = self.round_opener.other();
        self.shooter = self.round_opener;
        self.phase = Phase::Setup;
        debug!("new round, {} opens", self.player(self.shooter).name());
        Ok(())
    }

    /// `RoundOver -> Ended`; terminal.
    pub fn end_session(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::RoundOver {
            return Err(GameError::WrongPhase);
        }
        self.phase = Phase::Ended;
        Ok(())
    }
}
