//! Interactive console session: prompts, parsing and the round loop.
//!
//! The session is generic over its reader and writer so that a whole game
//! can be scripted in tests; [`run`] wires it to stdin/stdout for the
//! binary. Parsing helpers are free functions over the prompt grammar:
//! 1-based column numbers, letter rows, `v`/`h` orientations and a `y`/`n`
//! replay answer.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::common::ShotOutcome;
use crate::config::{GRID_HEIGHT, GRID_WIDTH, MAX_SHIPS, SHIP_LENGTH};
use crate::game::{Game, PlayerId, TurnReport};
use crate::ship::Orientation;
use crate::ui;

/// Session tuning from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Fixed RNG seed for reproducible random placements.
    pub seed: Option<u64>,
    /// Skip the pre-round countdown delay.
    pub fast: bool,
}

/// Parse a 1-based column number into a zero-based x coordinate.
pub fn parse_column(input: &str, width: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    if (1..=width).contains(&n) {
        Some(n - 1)
    } else {
        None
    }
}

/// Parse a single row letter (`A` upward, any case) into a zero-based y
/// coordinate.
pub fn parse_row(input: &str, height: usize) -> Option<usize> {
    let mut chars = input.trim().chars();
    let ch = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() || !ch.is_ascii_uppercase() {
        return None;
    }
    let y = (ch as u8 - b'A') as usize;
    if y < height {
        Some(y)
    } else {
        None
    }
}

/// Parse a `v`/`h` orientation answer in any case.
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.trim() {
        "v" | "V" => Some(Orientation::Vertical),
        "h" | "H" => Some(Orientation::Horizontal),
        _ => None,
    }
}

/// Replay answer: `y`/`Y` means yes, anything else is no.
pub fn parse_yes(input: &str) -> bool {
    matches!(input.trim(), "y" | "Y")
}

/// One interactive sitting: names, then rounds until the players stop.
pub struct Session<R, W> {
    input: R,
    out: W,
    rng: SmallRng,
    opts: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, opts: SessionOptions) -> Self {
        let rng = match opts.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self {
            input,
            out,
            rng,
            opts,
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line).context("reading input")?;
        if n == 0 {
            anyhow::bail!("input closed before the session finished");
        }
        Ok(line.trim_end().to_string())
    }

    fn prompt(&mut self, msg: &str) -> Result<String> {
        write!(self.out, "{}", msg)?;
        self.out.flush()?;
        self.read_line()
    }

    fn ask_name(&mut self, ordinal: usize) -> Result<String> {
        loop {
            let name = self.prompt(&format!("Player {}, enter your name: ", ordinal))?;
            let name = name.trim().to_string();
            if !name.is_empty() {
                return Ok(name);
            }
            writeln!(self.out, "A name cannot be empty.")?;
        }
    }

    fn ask_column(&mut self, prompt: &str) -> Result<usize> {
        loop {
            let line = self.prompt(prompt)?;
            match parse_column(&line, GRID_WIDTH) {
                Some(x) => return Ok(x),
                None => writeln!(self.out, "Invalid column. Type again.")?,
            }
        }
    }

    fn ask_row(&mut self, prompt: &str) -> Result<usize> {
        loop {
            let line = self.prompt(prompt)?;
            match parse_row(&line, GRID_HEIGHT) {
                Some(y) => return Ok(y),
                None => writeln!(self.out, "Invalid row. Type again.")?,
            }
        }
    }

    fn ask_orientation(&mut self, name: &str) -> Result<Orientation> {
        loop {
            let line = self.prompt(&format!(
                "{}, orientation of the ship ([v]ertical/[h]orizontal): ",
                name
            ))?;
            match parse_orientation(&line) {
                Some(o) => return Ok(o),
                None => writeln!(self.out, "Invalid orientation.")?,
            }
        }
    }

    /// Drive one player through placing their full fleet, reprompting on
    /// rejected placements. An empty reply at the column prompt takes a
    /// random free spot instead.
    fn place_fleet(&mut self, game: &mut Game, id: PlayerId) -> Result<()> {
        let name = game.player(id).name().to_string();
        writeln!(
            self.out,
            "{}, place your {} ships of length {}.",
            name, MAX_SHIPS, SHIP_LENGTH
        )?;
        while !game.player(id).fleet().is_full() {
            writeln!(self.out, "{}", ui::render_own_board(game.player(id).grid()))?;
            let line = self.prompt(&format!(
                "{}, column of the ship's starting point (1-{}), or Enter for a random spot: ",
                name, GRID_WIDTH
            ))?;
            let placed = if line.trim().is_empty() {
                match game
                    .player(id)
                    .grid()
                    .random_placement(&mut self.rng, SHIP_LENGTH)
                {
                    Ok((x, y, o)) => game.place_ship(id, x, y, o),
                    Err(e) => Err(e),
                }
            } else {
                let x = match parse_column(&line, GRID_WIDTH) {
                    Some(x) => x,
                    None => {
                        writeln!(self.out, "Invalid column. Type again.")?;
                        continue;
                    }
                };
                let y = self.ask_row(&format!(
                    "{}, row of the ship's starting point (A-{}): ",
                    name,
                    ui::row_letter(GRID_HEIGHT - 1)
                ))?;
                let orientation = self.ask_orientation(&name)?;
                game.place_ship(id, x, y, orientation)
            };
            if let Err(e) = placed {
                writeln!(self.out, "{}. Try again.", e)?;
            }
        }
        writeln!(self.out, "{}", ui::render_own_board(game.player(id).grid()))?;
        debug!("{} finished placing ships", name);
        Ok(())
    }

    fn countdown(&mut self) -> Result<()> {
        writeln!(self.out, "Press Enter to start the round.")?;
        self.out.flush()?;
        self.read_line()?;
        for n in (1..=5).rev() {
            writeln!(self.out, "Starting in {}...", n)?;
            self.out.flush()?;
            if !self.opts.fast {
                thread::sleep(Duration::from_secs(1));
            }
        }
        Ok(())
    }

    /// Shots alternate until one side wins; returns the deciding turn.
    fn play_round(&mut self, game: &mut Game) -> Result<TurnReport> {
        loop {
            let shooter = game.shooter();
            let target = game.target();
            let name = game.player(shooter).name().to_string();

            // show the enemy waters before a player's opening shot
            if game.player(shooter).shots_taken() == 0 {
                writeln!(
                    self.out,
                    "{}",
                    ui::render_target_board(game.player(target).grid())
                )?;
            }
            writeln!(
                self.out,
                "{}, you have {} shots left.",
                name,
                game.player(shooter).shots_left()
            )?;
            let x = self.ask_column(&format!("{}, column to shoot (1-{}): ", name, GRID_WIDTH))?;
            let y = self.ask_row(&format!(
                "{}, row to shoot (A-{}): ",
                name,
                ui::row_letter(GRID_HEIGHT - 1)
            ))?;

            let report = game.fire(x, y)?;
            match report.outcome {
                ShotOutcome::AlreadyShot => {
                    // no shot consumed, same player goes again
                    writeln!(self.out, "You already shot there.")?;
                    continue;
                }
                ShotOutcome::Hit => {
                    writeln!(
                        self.out,
                        "{}",
                        ui::render_target_board(game.player(target).grid())
                    )?;
                    writeln!(self.out, "{}, you hit a ship!", name)?;
                }
                ShotOutcome::Miss => {
                    writeln!(
                        self.out,
                        "{}",
                        ui::render_target_board(game.player(target).grid())
                    )?;
                    writeln!(self.out, "{}, you missed!", name)?;
                }
            }
            if let Some(winner) = report.winner {
                writeln!(self.out, "{}, you won!", game.player(winner).name())?;
                writeln!(self.out, "{}, you lost!", game.player(winner.other()).name())?;
                return Ok(report);
            }
        }
    }

    /// The full session: names, then rounds until the replay prompt is
    /// declined.
    pub fn run(&mut self) -> Result<()> {
        let name_one = self.ask_name(1)?;
        let name_two = self.ask_name(2)?;
        let mut game = Game::new(name_one, name_two);

        loop {
            for id in [PlayerId::One, PlayerId::Two] {
                self.place_fleet(&mut game, id)?;
            }
            game.start_round()?;
            self.countdown()?;

            let report = self.play_round(&mut game)?;
            writeln!(self.out, "{}", ui::render_summary(&game, &report))?;

            let again = self.prompt("Play again? (y/n) ")?;
            if parse_yes(&again) {
                game.play_again()?;
            } else {
                game.end_session()?;
                return Ok(());
            }
        }
    }
}

/// Run a session on the process's stdin/stdout.
pub fn run(opts: SessionOptions) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), opts);
    session.run()
}
