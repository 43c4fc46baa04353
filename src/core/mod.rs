//! Core engine types: positions, tokens, spaces, player and game state.
//!
//! This module tree is the leaf component of the engine: it owns the token
//! step-counters and the step-to-space projection, and knows nothing about
//! turn resolution.

pub mod player;
pub mod position;
pub mod space;
pub mod state;
pub mod token;

pub use player::PlayerState;
pub use position::Position;
pub use space::{space_name, SpaceName, FINISH, HOME_YARD, LANE_END, READY, TRACK_END};
pub use state::GameState;
pub use token::{TokenId, TokenPair};
