use broadside::console::{
    parse_column, parse_orientation, parse_row, parse_yes, Session, SessionOptions,
};
use broadside::Orientation;

#[test]
fn columns_are_one_based_and_bounded() {
    assert_eq!(parse_column("1", 20), Some(0));
    assert_eq!(parse_column("20", 20), Some(19));
    assert_eq!(parse_column(" 7 ", 20), Some(6));
    assert_eq!(parse_column("0", 20), None);
    assert_eq!(parse_column("21", 20), None);
    assert_eq!(parse_column("x", 20), None);
    assert_eq!(parse_column("", 20), None);
}

#[test]
fn rows_are_single_letters_within_the_board() {
    assert_eq!(parse_row("a", 20), Some(0));
    assert_eq!(parse_row("A", 20), Some(0));
    assert_eq!(parse_row("T", 20), Some(19));
    assert_eq!(parse_row("U", 20), None);
    assert_eq!(parse_row("AA", 20), None);
    assert_eq!(parse_row("5", 20), None);
    assert_eq!(parse_row("", 20), None);
}

#[test]
fn orientations_accept_either_case() {
    assert_eq!(parse_orientation("v"), Some(Orientation::Vertical));
    assert_eq!(parse_orientation("V"), Some(Orientation::Vertical));
    assert_eq!(parse_orientation("h"), Some(Orientation::Horizontal));
    assert_eq!(parse_orientation("H"), Some(Orientation::Horizontal));
    assert_eq!(parse_orientation("x"), None);
    assert_eq!(parse_orientation(""), None);
}

#[test]
fn replay_answer_is_strictly_y() {
    assert!(parse_yes("y"));
    assert!(parse_yes("Y"));
    assert!(!parse_yes("n"));
    assert!(!parse_yes("yes"));
    assert!(!parse_yes(""));
}

/// Drive an entire session through scripted input: names, random
/// placements, then both players sweeping the board column by column until
/// one side wins. Any non-`y` reply at the replay prompt ends the session.
#[test]
fn scripted_session_plays_a_full_round() {
    let mut script = String::new();
    script.push_str("Ada\nGrace\n");
    for _ in 0..6 {
        script.push('\n'); // random placement for every ship
    }
    script.push('\n'); // start-of-round Enter
    for y in 0..20u8 {
        let row = (b'A' + y) as char;
        for x in 1..=20 {
            script.push_str(&format!("{}\n{}\n", x, row));
        }
    }
    script.push_str("n\n");

    let mut out = Vec::new();
    let opts = SessionOptions {
        seed: Some(7),
        fast: true,
    };
    let mut session = Session::new(script.as_bytes(), &mut out, opts);
    session.run().unwrap();

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("you won!"));
    assert!(transcript.contains("you lost!"));
    assert!(transcript.contains("Final score:"));
    assert!(transcript.contains("Ships sunk in this round:"));
}

/// Malformed coordinate input is reprompted, not fatal.
#[test]
fn malformed_input_is_reprompted() {
    let mut script = String::new();
    script.push_str("Ada\nGrace\n");
    // player one: junk column, junk row, junk orientation before a clean placement
    script.push_str("zero\n1\nqq\nA\nsideways\nh\n");
    // five blanks finish player one's remaining ships and all of player two's
    for _ in 0..5 {
        script.push('\n');
    }
    script.push('\n'); // countdown Enter
    // a couple of shots, then the input runs dry to end the test early
    script.push_str("1\nA\n2\nB\n");

    let mut out = Vec::new();
    let opts = SessionOptions {
        seed: Some(11),
        fast: true,
    };
    let mut session = Session::new(script.as_bytes(), &mut out, opts);
    // input runs dry mid-round; the session reports it instead of panicking
    let err = session.run().unwrap_err();
    assert!(err.to_string().contains("input closed"));

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("Invalid column."));
    assert!(transcript.contains("Invalid row."));
    assert!(transcript.contains("Invalid orientation."));
}
