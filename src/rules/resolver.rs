//! The turn resolver: drives the roster through a scripted dice sequence.
//!
//! The resolver owns everything that needs the whole board: validating
//! turns, claiming each one through the priority cascade, executing the
//! claimed move, resetting captured tokens, and re-checking the mover's
//! stack condition. Occupancy is compared through space names, and only
//! step-counts in `1..=56` take part: the yard, the gate and the finish
//! line can never host a capture.

use smallvec::SmallVec;

use crate::core::space::{space_name, SpaceName, LANE_END};
use crate::core::{GameState, PlayerState, Position, TokenId};
use crate::error::EngineError;

use super::turn::{decide_turn, Turn, TurnDecision};

/// A release advances the token one step, from the yard to the gate.
const RELEASE_STEP: i16 = 1;

/// Step-counts that can take part in an occupancy comparison.
const LIVE_STEPS: std::ops::RangeInclusive<i16> = 1..=LANE_END;

/// Create a roster and run a full turn sequence in one call.
///
/// ```
/// use ludo_engine::{play_game, Position, Turn};
///
/// let spaces = play_game(
///     &[Position::A, Position::C],
///     &[
///         Turn::new(Position::A, 6),
///         Turn::new(Position::A, 4),
///         Turn::new(Position::C, 5),
///     ],
/// )
/// .unwrap();
///
/// let rendered: Vec<String> = spaces.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["4", "H", "H", "H"]);
/// ```
pub fn play_game(
    positions: &[Position],
    turns: &[Turn],
) -> Result<Vec<SpaceName>, EngineError> {
    let mut state = GameState::new(positions)?;
    run(&mut state, turns)
}

/// Run a turn sequence against an existing roster.
///
/// Turns resolve strictly in order; each turn's captures and stacking are
/// settled before the next turn is examined. Returns both token spaces for
/// every player, p then q, in registration order.
pub fn run(state: &mut GameState, turns: &[Turn]) -> Result<Vec<SpaceName>, EngineError> {
    for &turn in turns {
        if !(1..=6).contains(&turn.roll) {
            return Err(EngineError::InvalidRoll(turn.roll));
        }
        if state.player(turn.position).is_none() {
            return Err(EngineError::UnknownPlayer(turn.position));
        }
        take_turn(state, turn);
    }

    Ok(state.token_spaces())
}

/// Resolve one validated turn.
fn take_turn(state: &mut GameState, turn: Turn) {
    let Some(player) = state.player(turn.position).copied() else {
        return;
    };

    match decide_turn(state, &player, turn.roll) {
        TurnDecision::Skip => {}
        TurnDecision::Release(token) => move_token(state, turn.position, token, RELEASE_STEP),
        TurnDecision::Advance(token) => {
            move_token(state, turn.position, token, i16::from(turn.roll));
        }
    }
}

/// Advance one token (or a stacked pair) and settle the board.
///
/// Every opposing token left standing on the mover's landing space goes
/// back to its home yard; a stacked opposing pair loses both tokens at
/// once. Afterwards the mover's own pair is re-checked for stacking.
pub fn move_token(state: &mut GameState, position: Position, token: TokenId, steps: i16) {
    let Some(player) = state.player_mut(position) else {
        return;
    };
    player.apply_roll(token, steps);
    let landed = player.steps(token);

    if LIVE_STEPS.contains(&landed) {
        let landing = space_name(position, landed);
        let captured: SmallVec<[(Position, TokenId); 2]> = state
            .opponents_of(position)
            .flat_map(|other| TokenId::BOTH.iter().map(move |&t| (other, t)))
            .filter(|(other, t)| {
                LIVE_STEPS.contains(&other.steps(*t)) && other.space(*t) == landing
            })
            .map(|(other, t)| (other.position(), t))
            .collect();

        for (victim, token) in captured {
            if let Some(other) = state.player_mut(victim) {
                other.reset_token(token);
            }
        }
    }

    if let Some(player) = state.player_mut(position) {
        let p = player.steps(TokenId::P);
        if p == player.steps(TokenId::Q) && LIVE_STEPS.contains(&p) {
            player.set_stacked();
        }
    }
}

/// Which of the player's tokens, if either, would capture with this roll.
///
/// Simulates each token's landing space as the raw sum of its step-count
/// and the roll, with no reflection: a sum past the end projects to
/// `Finished`, which the occupancy guard excludes, so an overshooting token
/// never captures. Token p is considered across all opponents before q.
#[must_use]
pub fn can_kick_out(state: &GameState, player: &PlayerState, roll: u8) -> Option<TokenId> {
    for token in TokenId::BOTH {
        let landed = player.steps(token) + i16::from(roll);
        if !LIVE_STEPS.contains(&landed) {
            continue;
        }
        let landing = space_name(player.position(), landed);

        let hits = state.opponents_of(player.position()).any(|other| {
            TokenId::BOTH
                .iter()
                .any(|&t| LIVE_STEPS.contains(&other.steps(t)) && other.space(t) == landing)
        });
        if hits {
            return Some(token);
        }
    }

    None
}
