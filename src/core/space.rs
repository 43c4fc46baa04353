//! Step-count to board-space projection.
//!
//! A token's whole progress is one step-count:
//!
//! - `-1`: home yard, not yet released
//! - `0`: released, waiting at the entry gate
//! - `1..=50`: on the shared track, counted from the player's own entry tile
//! - `51..=56`: inside the player's private home lane
//! - `57`: finished
//!
//! Each of the four positions walks the shared track starting from a
//! different tile, so each has its own mapping from step-count to tile
//! number. The mappings are kept as four separate functions on purpose:
//! their offset arithmetic differs (B, C and D number tiles past 50 before
//! wrapping back to 1, with D wrapping in three 14-step bands) and each must
//! stay auditable against the board on its own.
//!
//! Space names are the sole occupancy rule: two tokens share a space iff
//! their [`SpaceName`]s are equal.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Step-count of a token still in its home yard.
pub const HOME_YARD: i16 = -1;

/// Step-count of a token waiting at its entry gate.
pub const READY: i16 = 0;

/// Last step-count on the shared track.
pub const TRACK_END: i16 = 50;

/// Last step-count inside the private home lane.
pub const LANE_END: i16 = 56;

/// Step-count of a finished token.
pub const FINISH: i16 = 57;

/// The name of a board space, as rendered on the board.
///
/// `Display` yields the exact board strings: `"H"`, `"R"`, bare tile numbers
/// for the shared track, letter-prefixed lane tiles (`"A1"`..`"D6"`), and
/// `"E"`. Equality on the enum coincides with equality of those strings;
/// home-lane names carry their owner, so opposing tokens can never meet
/// inside a lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceName {
    /// `"H"`, the home yard.
    HomeYard,
    /// `"R"`, the entry gate.
    Ready,
    /// A shared-track tile, rendered as its bare number.
    Track(u8),
    /// A private home-lane tile, rendered with the owner's letter prefix.
    HomeLane(Position, u8),
    /// `"E"`, past the last home-lane tile.
    Finished,
}

impl std::fmt::Display for SpaceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpaceName::HomeYard => write!(f, "H"),
            SpaceName::Ready => write!(f, "R"),
            SpaceName::Track(tile) => write!(f, "{tile}"),
            SpaceName::HomeLane(position, tile) => write!(f, "{}{}", position.letter(), tile),
            SpaceName::Finished => write!(f, "E"),
        }
    }
}

/// Project a step-count to the space it names for the given position.
///
/// Pure and total: anything below `-1` counts as the home yard, anything
/// above the home lane projects to `Finished` (capture lookahead forms raw
/// sums past 57, which must fall through rather than panic).
///
/// ```
/// use ludo_engine::{space_name, Position};
///
/// assert_eq!(space_name(Position::A, -1).to_string(), "H");
/// assert_eq!(space_name(Position::B, 1).to_string(), "15");
/// assert_eq!(space_name(Position::B, 43).to_string(), "1");
/// assert_eq!(space_name(Position::D, 51).to_string(), "D1");
/// assert_eq!(space_name(Position::C, 57).to_string(), "E");
/// ```
#[must_use]
pub fn space_name(position: Position, steps: i16) -> SpaceName {
    match position {
        Position::A => space_name_a(steps),
        Position::B => space_name_b(steps),
        Position::C => space_name_c(steps),
        Position::D => space_name_d(steps),
    }
}

/// Position A enters at tile 1; its track numbering is the board's.
fn space_name_a(steps: i16) -> SpaceName {
    match steps {
        i16::MIN..=-1 => SpaceName::HomeYard,
        0 => SpaceName::Ready,
        1..=50 => SpaceName::Track(steps as u8),
        51..=56 => SpaceName::HomeLane(Position::A, (steps - 50) as u8),
        _ => SpaceName::Finished,
    }
}

/// Position B enters at tile 15. Tiles run 15..=56, then wrap to 1..=8.
fn space_name_b(steps: i16) -> SpaceName {
    match steps {
        i16::MIN..=-1 => SpaceName::HomeYard,
        0 => SpaceName::Ready,
        1..=42 => SpaceName::Track((steps + 14) as u8),
        43..=50 => SpaceName::Track((steps % 42) as u8),
        51..=56 => SpaceName::HomeLane(Position::B, (steps - 50) as u8),
        _ => SpaceName::Finished,
    }
}

/// Position C enters at tile 29. Tiles run 29..=56, then wrap to 1..=22.
fn space_name_c(steps: i16) -> SpaceName {
    match steps {
        i16::MIN..=-1 => SpaceName::HomeYard,
        0 => SpaceName::Ready,
        1..=28 => SpaceName::Track((steps + 28) as u8),
        29..=50 => SpaceName::Track((steps % 28) as u8),
        51..=56 => SpaceName::HomeLane(Position::C, (steps - 50) as u8),
        _ => SpaceName::Finished,
    }
}

/// Position D enters at tile 43, closest to the wrap. Tiles run 43..=56,
/// then 1..=13, 14..=27 and 28..=36 in three 14-step bands.
fn space_name_d(steps: i16) -> SpaceName {
    match steps {
        i16::MIN..=-1 => SpaceName::HomeYard,
        0 => SpaceName::Ready,
        1..=14 => SpaceName::Track((steps + 42) as u8),
        15..=27 => SpaceName::Track((steps % 14) as u8),
        28..=41 => SpaceName::Track((steps % 14 + 14) as u8),
        42..=50 => SpaceName::Track((steps % 14 + 28) as u8),
        51..=56 => SpaceName::HomeLane(Position::D, (steps - 50) as u8),
        _ => SpaceName::Finished,
    }
}
