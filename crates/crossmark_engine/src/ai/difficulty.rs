//! Difficulty levels for the computer opponent.

use serde::{Deserialize, Serialize};

/// How hard the computer opponent plays.
///
/// This is configuration, not game state: it may change between any two
/// moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Easy,
    /// A coin flip between `Easy` and `Hard`, re-rolled every move.
    Medium,
    /// Full minimax search.
    #[default]
    Hard,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Difficulty::from_str("HARD"), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("medium"), Ok(Difficulty::Medium));
        assert!(Difficulty::from_str("expert").is_err());
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
    }
}
