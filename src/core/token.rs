//! Token identification and per-token data storage.
//!
//! ## TokenId
//!
//! Every player owns exactly two tokens, `p` and `q`. The rules break ties
//! between them in a fixed order, always considering `p` first.
//!
//! ## TokenPair
//!
//! Per-token data storage indexed by `TokenId`, backed by a two-element
//! array. The counterpart of a per-player map for the two-token case.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Identifier for one of a player's two tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenId {
    P,
    Q,
}

impl TokenId {
    /// Both token ids, in the order the rules consider them (p before q).
    pub const BOTH: [TokenId; 2] = [TokenId::P, TokenId::Q];

    /// Storage index of this token.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TokenId::P => 0,
            TokenId::Q => 1,
        }
    }

    /// The player's other token.
    #[must_use]
    pub const fn partner(self) -> Self {
        match self {
            TokenId::P => TokenId::Q,
            TokenId::Q => TokenId::P,
        }
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenId::P => write!(f, "p"),
            TokenId::Q => write!(f, "q"),
        }
    }
}

/// Per-token data storage with one entry per token.
///
/// ## Example
///
/// ```
/// use ludo_engine::{TokenId, TokenPair};
///
/// let mut steps: TokenPair<i16> = TokenPair::with_value(-1);
///
/// steps[TokenId::P] = 4;
/// assert_eq!(steps[TokenId::P], 4);
/// assert_eq!(steps[TokenId::Q], -1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair<T> {
    data: [T; 2],
}

impl<T> TokenPair<T> {
    /// Create a new pair with values from a factory function.
    pub fn new(factory: impl Fn(TokenId) -> T) -> Self {
        Self {
            data: [factory(TokenId::P), factory(TokenId::Q)],
        }
    }

    /// Create a new pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a token's entry.
    #[must_use]
    pub fn get(&self, token: TokenId) -> &T {
        &self.data[token.index()]
    }

    /// Get a mutable reference to a token's entry.
    pub fn get_mut(&mut self, token: TokenId) -> &mut T {
        &mut self.data[token.index()]
    }

    /// Iterate over (TokenId, &T) pairs, p first.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &T)> {
        TokenId::BOTH.iter().map(move |&t| (t, self.get(t)))
    }
}

impl<T> Index<TokenId> for TokenPair<T> {
    type Output = T;

    fn index(&self, token: TokenId) -> &Self::Output {
        self.get(token)
    }
}

impl<T> IndexMut<TokenId> for TokenPair<T> {
    fn index_mut(&mut self, token: TokenId) -> &mut Self::Output {
        self.get_mut(token)
    }
}
