//! Per-player token state.
//!
//! A player is a position plus two step-counters. Space names are derived
//! on demand via [`space_name`] and never stored; the step-count is the
//! single source of truth for where a token stands.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::space::{space_name, SpaceName, FINISH, HOME_YARD, READY};
use super::token::{TokenId, TokenPair};

/// One player's complete state: two token counters plus the stacked and
/// won flags.
///
/// ```
/// use ludo_engine::{PlayerState, Position, TokenId};
///
/// let mut player = PlayerState::new(Position::A);
/// assert_eq!(player.space(TokenId::P).to_string(), "H");
///
/// player.apply_roll(TokenId::P, 1); // release to the entry gate
/// player.apply_roll(TokenId::P, 4);
/// assert_eq!(player.space(TokenId::P).to_string(), "4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    position: Position,
    steps: TokenPair<i16>,
    stacked: bool,
    has_won: bool,
}

impl PlayerState {
    /// Create a player with both tokens in the home yard.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            position,
            steps: TokenPair::with_value(HOME_YARD),
            stacked: false,
            has_won: false,
        }
    }

    /// Place the two tokens at explicit step-counts.
    ///
    /// For setting up mid-game boards directly. The stacked and won flags
    /// are derived from the given counts.
    #[must_use]
    pub fn at_steps(position: Position, p: i16, q: i16) -> Self {
        let mut steps = TokenPair::with_value(p);
        steps[TokenId::Q] = q;
        Self {
            position,
            steps,
            stacked: p == q && p > READY && p < FINISH,
            has_won: p == FINISH && q == FINISH,
        }
    }

    /// The player's start position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// A token's step-count.
    #[must_use]
    pub fn steps(&self, token: TokenId) -> i16 {
        self.steps[token]
    }

    /// A token's current space, derived from its step-count.
    #[must_use]
    pub fn space(&self, token: TokenId) -> SpaceName {
        space_name(self.position, self.steps[token])
    }

    /// Whether the two tokens currently move as one unit.
    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stacked
    }

    /// Whether the player has finished the game.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    /// Both tokens stand on the final space.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.steps[TokenId::P] == FINISH && self.steps[TokenId::Q] == FINISH
    }

    /// Advance a token by `steps` board steps.
    ///
    /// When the player is stacked, both tokens advance together and `token`
    /// only names the roll's nominal target. Overshooting the final space
    /// reflects back: landing on `57 + n` leaves the token at `57 - n`.
    /// The won flag is set as soon as both counters stand at 57, on the
    /// stacked path as well as the single-token path.
    pub fn apply_roll(&mut self, token: TokenId, steps: i16) {
        if self.stacked {
            for t in TokenId::BOTH {
                self.steps[t] = advance(self.steps[t], steps);
            }
        } else {
            self.steps[token] = advance(self.steps[token], steps);
        }

        if self.is_finished() {
            self.has_won = true;
        }
    }

    /// Send a token back to the home yard after a capture.
    ///
    /// Clears the stacked flag unconditionally, whichever token is hit.
    pub fn reset_token(&mut self, token: TokenId) {
        self.steps[token] = HOME_YARD;
        self.stacked = false;
    }

    /// Mark the two tokens as moving together from now on.
    ///
    /// Driven by the resolver once both tokens coincide on a live space;
    /// cleared only by [`PlayerState::reset_token`].
    pub fn set_stacked(&mut self) {
        self.stacked = true;
    }
}

/// Advance a step-count, reflecting off the final space on overshoot.
fn advance(steps: i16, by: i16) -> i16 {
    let landed = steps + by;
    if landed > FINISH {
        FINISH - (landed - FINISH)
    } else {
        landed
    }
}
