//! Rendering: board views and the end-of-round summary as plain strings.
//!
//! Nothing here touches stdout; the session loop owns all printing.

use std::fmt::Write;

use crate::game::{Game, PlayerId, TurnReport};
use crate::grid::Grid;

/// Letter label for a zero-based row index.
pub fn row_letter(y: usize) -> char {
    (b'A' + y as u8) as char
}

/// Render a board with numbered columns and lettered rows.
///
/// Glyphs: `X` hit ship cell, `O` shot water, `>` unhit ship segment (shown
/// only when `show_ships` is set, i.e. on the owner's view), `~` unknown.
pub fn render_board(grid: &Grid, show_ships: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for x in 0..grid.width() {
        let _ = write!(out, " {:2} ", x + 1);
    }
    out.push('\n');
    for y in 0..grid.height() {
        let _ = write!(out, "{}  ", row_letter(y));
        for x in 0..grid.width() {
            let cell = grid.cell(x, y).copied().unwrap_or_default();
            let glyph = if cell.is_shot && cell.has_ship {
                " X  "
            } else if cell.has_ship && show_ships {
                " >  "
            } else if cell.is_shot {
                " O  "
            } else {
                " ~  "
            };
            out.push_str(glyph);
        }
        out.push('\n');
    }
    out
}

/// Owner's view: ships revealed.
pub fn render_own_board(grid: &Grid) -> String {
    render_board(grid, true)
}

/// Attacker's view of the target board: ships hidden.
pub fn render_target_board(grid: &Grid) -> String {
    render_board(grid, false)
}

/// End-of-round summary: session win totals plus this round's tallies for
/// the player who took the deciding turn.
pub fn render_summary(game: &Game, report: &TurnReport) -> String {
    let shooter = game.player(report.shooter);
    let target = game.player(report.shooter.other());
    let mut out = String::new();
    out.push_str("----------------------------------------------------\n");
    out.push_str("Final score:\n");
    for id in [PlayerId::One, PlayerId::Two] {
        let p = game.player(id);
        let _ = writeln!(out, "{}: {} wins", p.name(), p.wins());
    }
    let _ = writeln!(out, "Ships sunk in this round: {}", target.ships_sunk());
    let _ = writeln!(
        out,
        "Correct shots in this round: {}",
        shooter.ship_cells_hit()
    );
    out
}
