//! Move Set Validation
//!
//! The ordered list of moves for one session. Ordering is significant:
//! it defines the cyclic distance the rule generator works over.

use std::collections::HashSet;

use thiserror::Error;

/// Minimum number of moves for a playable game.
pub const MIN_MOVES: usize = 3;

/// Errors rejecting an invalid move list at startup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveSetError {
    /// Fewer moves than the minimum.
    #[error("need at least {MIN_MOVES} moves, got {got}")]
    TooFew {
        /// Number of moves provided.
        got: usize,
    },

    /// An even move count cannot split into equal win/lose halves.
    #[error("move count must be odd, got {got}")]
    EvenCount {
        /// Number of moves provided.
        got: usize,
    },

    /// The same token appeared twice (comparison is case-sensitive).
    #[error("duplicate move: {name}")]
    Duplicate {
        /// The repeated token.
        name: String,
    },
}

/// A validated, ordered, duplicate-free move list of odd length >= 3.
///
/// Immutable once constructed. Tokens are opaque and case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    moves: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set.
    ///
    /// Rejects lists that are too short, of even length, or contain
    /// duplicates. These are the only failure modes; the rule generator
    /// relies on them being ruled out here.
    pub fn new<I, S>(moves: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();

        if moves.len() < MIN_MOVES {
            return Err(MoveSetError::TooFew { got: moves.len() });
        }
        if moves.len() % 2 == 0 {
            return Err(MoveSetError::EvenCount { got: moves.len() });
        }

        let mut seen = HashSet::new();
        for m in &moves {
            if !seen.insert(m.as_str()) {
                return Err(MoveSetError::Duplicate { name: m.clone() });
            }
        }

        Ok(Self { moves })
    }

    /// Number of moves (always odd, >= 3).
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false for a constructed set; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move token at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.moves.get(index).map(String::as_str)
    }

    /// Index of a token (case-sensitive), if present.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.moves.iter().position(|m| m == token)
    }

    /// Iterate over tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(String::as_str)
    }

    /// The underlying ordered tokens.
    pub fn as_slice(&self) -> &[String] {
        &self.moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_sets() {
        let set = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        assert_eq!(set.len(), 3);

        let set = MoveSet::new(["rock", "paper", "scissors", "lizard", "spock"]).unwrap();
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_rejects_too_few() {
        assert_eq!(
            MoveSet::new(["rock"]),
            Err(MoveSetError::TooFew { got: 1 })
        );
        assert_eq!(
            MoveSet::new(Vec::<String>::new()),
            Err(MoveSetError::TooFew { got: 0 })
        );
        // Two moves trip the length gate before the parity gate.
        assert_eq!(
            MoveSet::new(["rock", "paper"]),
            Err(MoveSetError::TooFew { got: 2 })
        );
    }

    #[test]
    fn test_rejects_even_count() {
        assert_eq!(
            MoveSet::new(["a", "b", "c", "d"]),
            Err(MoveSetError::EvenCount { got: 4 })
        );
    }

    #[test]
    fn test_rejects_duplicates() {
        assert_eq!(
            MoveSet::new(["rock", "rock", "paper"]),
            Err(MoveSetError::Duplicate {
                name: "rock".to_string()
            })
        );
    }

    #[test]
    fn test_case_sensitive_tokens() {
        // "Rock" and "rock" are distinct moves.
        let set = MoveSet::new(["Rock", "rock", "paper"]).unwrap();
        assert_eq!(set.index_of("Rock"), Some(0));
        assert_eq!(set.index_of("rock"), Some(1));
        assert_eq!(set.index_of("ROCK"), None);
    }

    #[test]
    fn test_ordering_preserved() {
        let set = MoveSet::new(["c", "a", "b"]).unwrap();
        assert_eq!(set.get(0), Some("c"));
        assert_eq!(set.get(1), Some("a"));
        assert_eq!(set.get(2), Some("b"));
        assert_eq!(set.get(3), None);
    }
}
