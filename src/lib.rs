//! # ludo-engine
//!
//! A deterministic rules engine for the Ludo board game, 2-4 players with
//! two tokens each.
//!
//! ## Design Principles
//!
//! 1. **Dice As Data**: the engine owns no randomness. Rolls arrive as a
//!    scripted sequence of turns and the outcome is a pure function of it.
//!
//! 2. **Derived Spaces**: a token stores only its step-count; board-space
//!    names are projected on demand. Space-name equality is the sole
//!    occupancy rule for captures and stacking.
//!
//! 3. **Rules As Data**: turn resolution is an ordered table of named
//!    rules, each testable in isolation against a constructed board.
//!
//! ## Modules
//!
//! - `core`: positions, tokens, the step-to-space projection, player and
//!   game state
//! - `rules`: the turn priority cascade and the resolver that drives it
//! - `error`: the engine's failure taxonomy
//!
//! ## Example
//!
//! ```
//! use ludo_engine::{play_game, Position, Turn};
//!
//! // A releases on a six and advances four; C never rolls a six and
//! // stays in the yard.
//! let spaces = play_game(
//!     &[Position::A, Position::C],
//!     &[
//!         Turn::new(Position::A, 6),
//!         Turn::new(Position::A, 4),
//!         Turn::new(Position::C, 5),
//!     ],
//! )
//! .unwrap();
//!
//! let rendered: Vec<String> = spaces.iter().map(ToString::to_string).collect();
//! assert_eq!(rendered, ["4", "H", "H", "H"]);
//! ```

pub mod core;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    space_name, GameState, PlayerState, Position, SpaceName, TokenId, TokenPair,
};

pub use crate::error::EngineError;

pub use crate::rules::{
    can_kick_out, decide_turn, play_game, run, Turn, TurnDecision, TurnRule, RELEASE_ROLL,
    TURN_RULES,
};
