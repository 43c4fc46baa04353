//! End-to-end scenarios driven through the public API.
//!
//! Each test scripts a full dice sequence and checks the final board
//! against a hand-traced expectation.

use ludo_engine::{play_game, run, GameState, PlayerState, Position, SpaceName, TokenId, Turn};

fn rendered(spaces: &[SpaceName]) -> Vec<String> {
    spaces.iter().map(ToString::to_string).collect()
}

fn turns(script: &[(Position, u8)]) -> Vec<Turn> {
    script
        .iter()
        .map(|&(position, roll)| Turn::new(position, roll))
        .collect()
}

/// The canonical opening: A releases on a six and advances four, C rolls
/// a five with both tokens still in the yard and stays put.
#[test]
fn test_two_player_opening() {
    let spaces = play_game(
        &[Position::A, Position::C],
        &turns(&[(Position::A, 6), (Position::A, 4), (Position::C, 5)]),
    )
    .unwrap();

    assert_eq!(rendered(&spaces), ["4", "H", "H", "H"]);
}

/// Without a six nobody ever leaves the yard.
#[test]
fn test_no_six_means_nobody_moves() {
    let script: Vec<_> = [1, 2, 3, 4, 5]
        .into_iter()
        .flat_map(|roll| [(Position::A, roll), (Position::B, roll)])
        .collect();

    let spaces = play_game(&[Position::A, Position::B], &turns(&script)).unwrap();

    assert_eq!(rendered(&spaces), ["H", "H", "H", "H"]);
}

/// A walks sixteen steps onto board tile 16; B releases and lands on the
/// same tile two steps past its own entry, kicking A's token home.
#[test]
fn test_capture_across_positions() {
    let script = [
        (Position::A, 6), // release p
        (Position::A, 5),
        (Position::A, 5),
        (Position::A, 4),
        (Position::A, 2), // p now 16 steps in, board tile 16
        (Position::B, 6), // release p
        (Position::B, 2), // two steps past entry 15: tile 16, capture
    ];

    let mut state = GameState::new(&[Position::A, Position::B]).unwrap();
    let spaces = run(&mut state, &turns(&script)).unwrap();

    assert_eq!(rendered(&spaces), ["H", "H", "16", "H"]);

    // The capture sent A's token all the way back, not to the gate.
    let loser = state.player(Position::A).unwrap();
    assert_eq!(loser.steps(TokenId::P), -1);
}

/// Two tokens meeting on the same step-count stack and then travel as one.
#[test]
fn test_stack_forms_and_moves_as_one() {
    let script = [
        (Position::A, 6), // release p
        (Position::A, 6), // release q
        (Position::A, 3), // p to 3
        (Position::A, 3), // q to 3: stacked
        (Position::A, 4), // the pair to 7
    ];

    let mut state = GameState::new(&[Position::A, Position::C]).unwrap();
    let spaces = run(&mut state, &turns(&script)).unwrap();

    assert_eq!(rendered(&spaces), ["7", "7", "H", "H"]);
    assert!(state.player(Position::A).unwrap().is_stacked());
}

/// A full game: A releases both tokens, stacks them, rides the stack down
/// the track and finishes both with an exact roll. Turns after the win
/// are skipped.
#[test]
fn test_full_game_to_victory() {
    let mut script = vec![(Position::A, 6); 12];
    script.push((Position::A, 3));
    script.push((Position::A, 5)); // already finished: skipped

    let mut state = GameState::new(&[Position::A, Position::B]).unwrap();
    let spaces = run(&mut state, &turns(&script)).unwrap();

    assert_eq!(rendered(&spaces), ["E", "E", "H", "H"]);

    let winner = state.player(Position::A).unwrap();
    assert!(winner.has_won());
    assert!(winner.is_finished());
}

/// Overshooting the final space reflects the token back into the lane.
#[test]
fn test_overshoot_bounces_back_into_the_lane() {
    let mut state = GameState::new(&[Position::A, Position::B]).unwrap();
    *state.player_mut(Position::A).unwrap() = PlayerState::at_steps(Position::A, 54, 57);

    let spaces = run(&mut state, &turns(&[(Position::A, 6)])).unwrap();

    // 54 + 6 = 60 reflects to 54, four tiles into A's lane.
    assert_eq!(rendered(&spaces), ["A4", "E", "H", "H"]);
}

/// A player one step short of winning finishes and then sits out.
#[test]
fn test_winner_sits_out_remaining_turns() {
    let mut state = GameState::new(&[Position::D, Position::A]).unwrap();
    *state.player_mut(Position::D).unwrap() = PlayerState::at_steps(Position::D, 55, 57);

    let spaces = run(
        &mut state,
        &turns(&[(Position::D, 2), (Position::D, 4), (Position::D, 6)]),
    )
    .unwrap();

    assert_eq!(rendered(&spaces), ["E", "E", "H", "H"]);
    assert!(state.player(Position::D).unwrap().has_won());
}

/// All four positions release to their own entry gates; the shared "R"
/// rendering is not an occupied space, so nobody captures anybody.
#[test]
fn test_four_players_release_without_colliding() {
    let script = [
        (Position::A, 6),
        (Position::B, 6),
        (Position::C, 6),
        (Position::D, 6),
    ];

    let spaces = play_game(&Position::ALL, &turns(&script)).unwrap();

    assert_eq!(
        rendered(&spaces),
        ["R", "H", "R", "H", "R", "H", "R", "H"]
    );
}

/// Registration order, not board order, fixes the result order.
#[test]
fn test_result_follows_registration_order() {
    let spaces = play_game(
        &[Position::D, Position::B],
        &turns(&[(Position::B, 6), (Position::B, 1)]),
    )
    .unwrap();

    // D first (idle), then B: one step past entry tile 15.
    assert_eq!(rendered(&spaces), ["H", "H", "15", "H"]);
}
