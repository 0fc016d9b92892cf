//! Tests for the terminal game session.

use std::io::Cursor;
use tictac::{Console, CpuSeats, GameOutcome, Mark, Seat, Session, seat_players};

fn scripted(lines: &[&str]) -> Console<Cursor<String>, Vec<u8>> {
    let mut input = lines.join("\n");
    input.push('\n');
    Console::new(Cursor::new(input), Vec::new())
}

fn output(console: Console<Cursor<String>, Vec<u8>>) -> String {
    String::from_utf8(console.into_writer()).expect("utf8 output")
}

#[test]
fn test_human_wins_top_row() {
    let mut console = scripted(&["0 0", "1 0", "0 1", "1 1", "0 2", "n"]);
    let mut session = Session::new(seat_players(CpuSeats::None, None), None).unwrap();

    let tally = session.run(&mut console).unwrap();
    assert_eq!(tally.wins(1), 1);
    assert_eq!(tally.games(), 1);

    let text = output(console);
    assert!(text.contains("[X][X][X]"));
    assert!(text.contains("Result: Player 1 wins!"));
    assert!(text.contains("Score: Player 1 1, Player 2 0, draws 0"));
}

#[test]
fn test_draw_is_reported() {
    let moves = ["0 0", "1 1", "2 2", "0 2", "2 0", "1 0", "1 2", "2 1", "0 1"];
    let mut console = scripted(&moves);
    let mut session = Session::new(seat_players(CpuSeats::None, None), Some(1)).unwrap();

    let outcome = session.play_game(&mut console).unwrap();
    assert_eq!(outcome, GameOutcome::Draw);
    assert!(output(console).contains("Result: cat's game"));
}

#[test]
fn test_taken_cell_is_reprompted() {
    let mut console = scripted(&["1 1", "1 1", "quit"]);
    let mut session = Session::new(seat_players(CpuSeats::None, None), None).unwrap();

    let outcome = session.play_game(&mut console).unwrap();
    assert_eq!(outcome, GameOutcome::Quit(Seat::new(2, Mark::O, false)));

    let text = output(console);
    assert!(text.contains("Cell 1,1 is already taken"));
    assert!(text.contains("Player 2 is a quitter, cya"));
}

#[test]
fn test_bad_input_is_reprompted() {
    let mut console = scripted(&["hello", "5 5", "exit"]);
    let mut session = Session::new(seat_players(CpuSeats::None, None), None).unwrap();

    let tally = session.run(&mut console).unwrap();
    assert_eq!(tally.games(), 0);

    let text = output(console);
    assert_eq!(text.matches("bad input").count(), 2);
    assert!(text.contains("Player 1 is a quitter, cya"));
}

#[test]
fn test_end_of_input_quits() {
    let mut console = Console::new(Cursor::new(String::new()), Vec::new());
    let mut session = Session::new(seat_players(CpuSeats::None, None), None).unwrap();

    let outcome = session.play_game(&mut console).unwrap();
    assert_eq!(outcome, GameOutcome::Quit(Seat::new(1, Mark::X, false)));
}

#[test]
fn test_cpu_answers_corner_with_center() {
    let mut console = scripted(&["0 0", "quit"]);
    let mut session = Session::new(seat_players(CpuSeats::Second, Some(5)), None).unwrap();

    session.play_game(&mut console).unwrap();
    assert!(output(console).contains("Player 2 (cpu) picked 1 1"));
}

#[test]
fn test_cpu_blocks_human() {
    // Human X: (0,0), CPU takes the center, human (0,1) threatens row 0.
    let mut console = scripted(&["0 0", "0 1", "quit"]);
    let mut session = Session::new(seat_players(CpuSeats::Second, Some(5)), None).unwrap();

    session.play_game(&mut console).unwrap();
    assert!(output(console).contains("Player 2 (cpu) picked 0 2"));
}

#[test]
fn test_cpu_self_play_respects_game_limit() {
    let mut console = Console::new(Cursor::new(String::new()), Vec::new());
    let mut session = Session::new(seat_players(CpuSeats::Both, Some(42)), Some(3)).unwrap();

    let tally = session.run(&mut console).unwrap();
    assert_eq!(tally.games(), 3);
    assert_eq!(tally.wins(1) + tally.wins(2) + tally.draws(), 3);

    let text = output(console);
    assert!(text.contains("Player 1 (cpu) picked"));
    assert!(!text.contains("Play again"));
}

#[test]
fn test_play_again_starts_fresh_board() {
    let mut console = scripted(&["0 0", "1 0", "0 1", "1 1", "0 2", "y", "2 2", "quit"]);
    let mut session = Session::new(seat_players(CpuSeats::None, None), None).unwrap();

    let tally = session.run(&mut console).unwrap();
    assert_eq!(tally.games(), 1);

    let text = output(console);
    assert!(text.contains("[_][_][_]\n[_][_][_]\n[_][_][X]"));
    assert!(text.contains("Player 2 is a quitter, cya"));
}
