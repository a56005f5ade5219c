//! Move alphabet and the cyclic defeat relation

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

/// A move in Rock/Paper/Scissors
///
/// Serialized as its single-letter symbol (`"R"`, `"P"`, `"S"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    #[serde(rename = "R")]
    Rock,
    #[serde(rename = "P")]
    Paper,
    #[serde(rename = "S")]
    Scissors,
}

/// Result of one move against another, from the first mover's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Move {
    /// All moves in alphabet order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one.
    pub fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    pub fn versus(self, other: Move) -> Outcome {
        if self == other {
            Outcome::Tie
        } else if self.beats() == other {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Move::Rock => 'R',
            Move::Paper => 'P',
            Move::Scissors => 'S',
        }
    }

    /// Parse an opponent report where the empty string marks a new game.
    ///
    /// Returns `Ok(None)` for the sentinel and `Ok(Some(_))` for a move.
    pub fn parse_report(input: &str) -> Result<Option<Move>, MoveError> {
        if input.is_empty() {
            Ok(None)
        } else {
            input.parse().map(Some)
        }
    }
}

impl TryFrom<char> for Move {
    type Error = MoveError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'R' => Ok(Move::Rock),
            'P' => Ok(Move::Paper),
            'S' => Ok(Move::Scissors),
            other => Err(MoveError::Unknown { input: other.to_string() }),
        }
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(MoveError::Empty),
            (Some(c), None) => Move::try_from(c),
            _ => Err(MoveError::Unknown { input: s.to_string() }),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
