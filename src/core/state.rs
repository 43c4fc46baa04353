//! Game state: the player roster.
//!
//! Membership is fixed at setup and never changes mid-game. The roster
//! keeps players in registration order (final results are reported in that
//! order) with a hash index for position lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::player::PlayerState;
use super::position::Position;
use super::space::SpaceName;
use super::token::TokenId;

/// The complete game state: every registered player.
///
/// ```
/// use ludo_engine::{GameState, Position};
///
/// let game = GameState::new(&[Position::A, Position::C]).unwrap();
///
/// assert_eq!(game.player_count(), 2);
/// assert!(game.player(Position::C).is_some());
/// assert!(game.player(Position::B).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    players: Vec<PlayerState>,
    index: FxHashMap<Position, usize>,
}

impl GameState {
    /// Register one player per given position, both tokens in the yard.
    ///
    /// Positions must be distinct; their order fixes the order of the final
    /// result sequence.
    pub fn new(positions: &[Position]) -> Result<Self, EngineError> {
        let mut players = Vec::with_capacity(positions.len());
        let mut index = FxHashMap::default();

        for &position in positions {
            if index.insert(position, players.len()).is_some() {
                return Err(EngineError::DuplicatePosition(position));
            }
            players.push(PlayerState::new(position));
        }

        Ok(Self { players, index })
    }

    /// Number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by position.
    ///
    /// Returns `None` for a position nobody registered.
    #[must_use]
    pub fn player(&self, position: Position) -> Option<&PlayerState> {
        self.index.get(&position).map(|&slot| &self.players[slot])
    }

    /// Look up a player by position, mutably.
    pub fn player_mut(&mut self, position: Position) -> Option<&mut PlayerState> {
        self.index
            .get(&position)
            .map(|&slot| &mut self.players[slot])
    }

    /// Iterate over all players in registration order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.iter()
    }

    /// Iterate over every player except the one at `position`.
    pub fn opponents_of(&self, position: Position) -> impl Iterator<Item = &PlayerState> {
        self.players
            .iter()
            .filter(move |player| player.position() != position)
    }

    /// Both token spaces for every player, p then q, in registration order.
    #[must_use]
    pub fn token_spaces(&self) -> Vec<SpaceName> {
        self.players
            .iter()
            .flat_map(|player| TokenId::BOTH.iter().map(move |&token| player.space(token)))
            .collect()
    }
}
