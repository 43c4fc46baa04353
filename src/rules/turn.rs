//! Turns and the priority cascade that claims them.
//!
//! Turn resolution is an ordered table of named rules, [`TURN_RULES`].
//! For each turn the resolver walks the table and executes the decision of
//! the first rule whose predicate matches; the final rule accepts whatever
//! falls through, so every turn is claimed by exactly one rule. Keeping the
//! rules as data lets each one be exercised in isolation against a
//! constructed board.
//!
//! The order encodes the move policy: finished players sit out, tokens
//! leave the yard only on a six, a token that can finish goes first, then a
//! token that can capture, and otherwise the trailing token advances (which
//! moves a stacked pair as one unit).

use serde::{Deserialize, Serialize};

use crate::core::space::{FINISH, HOME_YARD, READY};
use crate::core::{GameState, PlayerState, Position, TokenId};

use super::resolver::can_kick_out;

/// The dice value that releases a token from the home yard.
pub const RELEASE_ROLL: u8 = 6;

/// One dice roll taken by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// The player rolling.
    pub position: Position,
    /// The dice value, 1 through 6.
    pub roll: u8,
}

impl Turn {
    /// Create a turn.
    #[must_use]
    pub const fn new(position: Position, roll: u8) -> Self {
        Self { position, roll }
    }
}

/// What a claimed turn does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnDecision {
    /// No token may act on this roll.
    Skip,
    /// Move a token out of the home yard to the entry gate.
    Release(TokenId),
    /// Advance a token by the full roll (both tokens when stacked).
    Advance(TokenId),
}

/// A named entry in the priority cascade.
///
/// `decide` returns `None` when the rule does not apply to the board in
/// front of it, otherwise the decision that settles the turn.
#[derive(Clone, Copy)]
pub struct TurnRule {
    /// Stable rule name, for diagnostics and tests.
    pub name: &'static str,
    /// The rule's predicate and action in one.
    pub decide: fn(&GameState, &PlayerState, u8) -> Option<TurnDecision>,
}

/// The priority cascade, highest priority first.
pub const TURN_RULES: [TurnRule; 12] = [
    TurnRule {
        name: "skip-finished-player",
        decide: skip_finished_player,
    },
    TurnRule {
        name: "release-first-token",
        decide: release_first_token,
    },
    TurnRule {
        name: "cover-for-finished-p",
        decide: cover_for_finished_p,
    },
    TurnRule {
        name: "cover-for-finished-q",
        decide: cover_for_finished_q,
    },
    TurnRule {
        name: "release-q-or-advance-p",
        decide: release_q_or_advance_p,
    },
    TurnRule {
        name: "release-p-or-advance-q",
        decide: release_p_or_advance_q,
    },
    TurnRule {
        name: "finish-with-p",
        decide: finish_with_p,
    },
    TurnRule {
        name: "finish-with-q",
        decide: finish_with_q,
    },
    TurnRule {
        name: "capture-with-p",
        decide: capture_with_p,
    },
    TurnRule {
        name: "capture-with-q",
        decide: capture_with_q,
    },
    TurnRule {
        name: "advance-trailing-p",
        decide: advance_trailing_p,
    },
    TurnRule {
        name: "advance-remaining-q",
        decide: advance_remaining_q,
    },
];

/// Walk the cascade and return the first matching rule's decision.
#[must_use]
pub fn decide_turn(state: &GameState, player: &PlayerState, roll: u8) -> TurnDecision {
    TURN_RULES
        .iter()
        .find_map(|rule| (rule.decide)(state, player, roll))
        .unwrap_or(TurnDecision::Skip)
}

/// A player with both tokens on the final space sits out.
fn skip_finished_player(_: &GameState, player: &PlayerState, _: u8) -> Option<TurnDecision> {
    player.is_finished().then_some(TurnDecision::Skip)
}

/// Both tokens in the yard: only a six releases, and it releases p.
fn release_first_token(_: &GameState, player: &PlayerState, roll: u8) -> Option<TurnDecision> {
    if player.steps(TokenId::P) != HOME_YARD || player.steps(TokenId::Q) != HOME_YARD {
        return None;
    }
    Some(if roll == RELEASE_ROLL {
        TurnDecision::Release(TokenId::P)
    } else {
        TurnDecision::Skip
    })
}

/// p finished, q out of the yard: the roll belongs to q.
fn cover_for_finished_p(_: &GameState, player: &PlayerState, _: u8) -> Option<TurnDecision> {
    (player.steps(TokenId::P) == FINISH && player.steps(TokenId::Q) >= READY)
        .then_some(TurnDecision::Advance(TokenId::Q))
}

/// q finished, p out of the yard: the roll belongs to p.
fn cover_for_finished_q(_: &GameState, player: &PlayerState, _: u8) -> Option<TurnDecision> {
    (player.steps(TokenId::Q) == FINISH && player.steps(TokenId::P) >= READY)
        .then_some(TurnDecision::Advance(TokenId::P))
}

/// q still in the yard while p is out: a six releases q, anything else
/// advances p.
fn release_q_or_advance_p(_: &GameState, player: &PlayerState, roll: u8) -> Option<TurnDecision> {
    if player.steps(TokenId::Q) != HOME_YARD || player.steps(TokenId::P) < READY {
        return None;
    }
    Some(if roll == RELEASE_ROLL {
        TurnDecision::Release(TokenId::Q)
    } else {
        TurnDecision::Advance(TokenId::P)
    })
}

/// p still in the yard while q is out: a six releases p, anything else
/// advances q.
fn release_p_or_advance_q(_: &GameState, player: &PlayerState, roll: u8) -> Option<TurnDecision> {
    if player.steps(TokenId::P) != HOME_YARD || player.steps(TokenId::Q) < READY {
        return None;
    }
    Some(if roll == RELEASE_ROLL {
        TurnDecision::Release(TokenId::P)
    } else {
        TurnDecision::Advance(TokenId::Q)
    })
}

/// The roll lands p exactly on the final space.
fn finish_with_p(_: &GameState, player: &PlayerState, roll: u8) -> Option<TurnDecision> {
    (player.steps(TokenId::P) + i16::from(roll) == FINISH)
        .then_some(TurnDecision::Advance(TokenId::P))
}

/// The roll lands q exactly on the final space.
fn finish_with_q(_: &GameState, player: &PlayerState, roll: u8) -> Option<TurnDecision> {
    (player.steps(TokenId::Q) + i16::from(roll) == FINISH)
        .then_some(TurnDecision::Advance(TokenId::Q))
}

/// Moving p would land on an opposing token.
fn capture_with_p(state: &GameState, player: &PlayerState, roll: u8) -> Option<TurnDecision> {
    (can_kick_out(state, player, roll) == Some(TokenId::P))
        .then_some(TurnDecision::Advance(TokenId::P))
}

/// Moving q would land on an opposing token.
fn capture_with_q(state: &GameState, player: &PlayerState, roll: u8) -> Option<TurnDecision> {
    (can_kick_out(state, player, roll) == Some(TokenId::Q))
        .then_some(TurnDecision::Advance(TokenId::Q))
}

/// q is level with or ahead of p: advance the trailing token p. For a
/// stacked pair the counts are equal, so this is the rule that moves it.
fn advance_trailing_p(_: &GameState, player: &PlayerState, _: u8) -> Option<TurnDecision> {
    (player.steps(TokenId::Q) >= player.steps(TokenId::P))
        .then_some(TurnDecision::Advance(TokenId::P))
}

/// Whatever reaches this rule advances q.
fn advance_remaining_q(_: &GameState, player: &PlayerState, _: u8) -> Option<TurnDecision> {
    Some(TurnDecision::Advance(TokenId::Q))
}
