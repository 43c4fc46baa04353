//! Player start positions.
//!
//! The board has four fixed start slots, A through D. Each slot enters the
//! shared 50-tile track at its own tile, so each counts track tiles with its
//! own offset, and each owns a private home lane prefixed with its letter.

use serde::{Deserialize, Serialize};

/// One of the four fixed start positions.
///
/// A position is a player's identity for the whole game: it fixes the entry
/// tile onto the shared track, the exit tile in front of the private home
/// lane, and the letter prefix of that lane's spaces.
///
/// ```
/// use ludo_engine::Position;
///
/// assert_eq!(Position::A.entry_tile(), 1);
/// assert_eq!(Position::C.entry_tile(), 29);
/// assert_eq!(Position::from_letter('b'), Some(Position::B));
/// assert_eq!(Position::from_letter('X'), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    A,
    B,
    C,
    D,
}

impl Position {
    /// All four positions, in board order.
    pub const ALL: [Position; 4] = [Position::A, Position::B, Position::C, Position::D];

    /// First shared-track tile a token walks after leaving the entry gate.
    #[must_use]
    pub const fn entry_tile(self) -> u8 {
        match self {
            Position::A => 1,
            Position::B => 15,
            Position::C => 29,
            Position::D => 43,
        }
    }

    /// Last shared-track tile before the turn into the private home lane.
    #[must_use]
    pub const fn exit_tile(self) -> u8 {
        match self {
            Position::A => 50,
            Position::B => 8,
            Position::C => 22,
            Position::D => 36,
        }
    }

    /// Difference between this position's track numbering and the board's.
    ///
    /// A token `s` steps along the track stands on board tile `s` plus this
    /// offset, until the numbering wraps past tile 50.
    #[must_use]
    pub const fn track_offset(self) -> u8 {
        self.entry_tile() - 1
    }

    /// The position's letter, also the prefix of its home-lane spaces.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Position::A => 'A',
            Position::B => 'B',
            Position::C => 'C',
            Position::D => 'D',
        }
    }

    /// Parse a position from its letter, case-insensitively.
    ///
    /// Returns `None` for anything that is not one of the four slots.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' | 'a' => Some(Position::A),
            'B' | 'b' => Some(Position::B),
            'C' | 'c' => Some(Position::C),
            'D' | 'd' => Some(Position::D),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_and_exit_tiles() {
        assert_eq!(Position::A.entry_tile(), 1);
        assert_eq!(Position::B.entry_tile(), 15);
        assert_eq!(Position::C.entry_tile(), 29);
        assert_eq!(Position::D.entry_tile(), 43);

        assert_eq!(Position::A.exit_tile(), 50);
        assert_eq!(Position::B.exit_tile(), 8);
        assert_eq!(Position::C.exit_tile(), 22);
        assert_eq!(Position::D.exit_tile(), 36);
    }

    #[test]
    fn test_track_offsets() {
        assert_eq!(Position::A.track_offset(), 0);
        assert_eq!(Position::B.track_offset(), 14);
        assert_eq!(Position::C.track_offset(), 28);
        assert_eq!(Position::D.track_offset(), 42);
    }

    #[test]
    fn test_from_letter() {
        for position in Position::ALL {
            assert_eq!(Position::from_letter(position.letter()), Some(position));
        }
        assert_eq!(Position::from_letter('d'), Some(Position::D));
        assert_eq!(Position::from_letter('E'), None);
        assert_eq!(Position::from_letter('1'), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::A), "A");
        assert_eq!(format!("{}", Position::D), "D");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Position::C).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Position::C);
    }
}
