use broadside::ui::{render_board, render_summary, row_letter};
use broadside::{
    Game, Grid, Orientation, PlayerId, ShotOutcome, GRID_HEIGHT, GRID_WIDTH, MAX_SHIPS,
    SHIP_LENGTH,
};

#[test]
fn row_letters_start_at_a() {
    assert_eq!(row_letter(0), 'A');
    assert_eq!(row_letter(19), 'T');
}

#[test]
fn own_view_reveals_ships_and_target_view_hides_them() {
    let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
    grid.place(0, 0, Orientation::Horizontal, SHIP_LENGTH).unwrap();
    grid.shoot(0, 0).unwrap(); // hit
    grid.shoot(9, 9).unwrap(); // miss

    let own = render_board(&grid, true);
    assert_eq!(own.matches(" X  ").count(), 1);
    assert_eq!(own.matches(" >  ").count(), SHIP_LENGTH - 1);
    assert_eq!(own.matches(" O  ").count(), 1);

    let hidden = render_board(&grid, false);
    assert_eq!(hidden.matches(" X  ").count(), 1);
    assert_eq!(hidden.matches(" >  ").count(), 0);
    assert_eq!(hidden.matches(" O  ").count(), 1);

    // header and one line per row
    assert_eq!(own.lines().count(), GRID_HEIGHT + 1);
    assert!(own.lines().next().unwrap().contains("20"));
    assert!(own.lines().nth(1).unwrap().starts_with('A'));
}

#[test]
fn summary_reports_wins_and_round_tallies() {
    let mut game = Game::new("Ada", "Grace");
    for id in [PlayerId::One, PlayerId::Two] {
        for row in 0..MAX_SHIPS {
            game.place_ship(id, 0, row, Orientation::Horizontal).unwrap();
        }
    }
    game.start_round().unwrap();
    // sink one full ship with the opener interleaved against misses
    let mut last = None;
    for x in 0..SHIP_LENGTH {
        last = Some(game.fire(x, 0).unwrap());
        game.fire(10 + x, 10).unwrap();
    }
    let report = last.unwrap();
    assert_eq!(report.outcome, ShotOutcome::Hit);
    let summary = render_summary(&game, &report);
    assert!(summary.contains("Final score:"));
    assert!(summary.contains("Ada: 0 wins"));
    assert!(summary.contains("Grace: 0 wins"));
    assert!(summary.contains("Ships sunk in this round: 1"));
    assert!(summary.contains("Correct shots in this round: 5"));
}
