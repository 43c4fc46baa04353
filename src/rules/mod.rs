//! Turn resolution: the priority cascade and the resolver that drives it.
//!
//! `turn` holds the cascade as data (named rules, first match wins);
//! `resolver` validates and executes turns against the roster, including
//! captures and stack maintenance.

pub mod resolver;
pub mod turn;

pub use resolver::{can_kick_out, move_token, play_game, run};
pub use turn::{decide_turn, Turn, TurnDecision, TurnRule, RELEASE_ROLL, TURN_RULES};
