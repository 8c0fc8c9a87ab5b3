//! Game Session
//!
//! One session owns the move set, the derived rule table, and a
//! randomness source for the computer's move selection. Every call to
//! [`Game::play`] is a self-contained commit/reveal transaction: draw
//! the computer's move, commit to it under a fresh key, resolve the
//! outcome, then hand everything back for the user to verify.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use thiserror::Error;
use tracing::debug;

use crate::crypto::commitment::{self, Commitment};
use crate::crypto::key::{KeyError, KeyGenerator, SecretKey};
use crate::game::moves::MoveSet;
use crate::game::rules::{Outcome, RuleTable};

/// Errors from a single turn.
#[derive(Debug, Error)]
pub enum TurnError {
    /// The submitted move is not in this session's move set.
    #[error("unknown move: {0}")]
    UnknownMove(String),

    /// Key generation failed. Fatal for the session.
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Everything one turn produces, in reveal order.
///
/// The commitment was computed before the outcome was resolved; the key
/// lets the user recompute HMAC-SHA-256(key, computer_move) and check it
/// against the tag.
#[derive(Clone, Debug)]
pub struct TurnReport {
    /// The human's move.
    pub user_move: String,
    /// The computer's move, fixed before the outcome was determined.
    pub computer_move: String,
    /// Commitment tag for the computer's move.
    pub commitment: Commitment,
    /// The MAC key, revealed for verification.
    pub key: SecretKey,
    /// Turn result from the human's perspective.
    pub outcome: Outcome,
}

/// A game session.
///
/// Generic over the move-selection RNG so tests can drive it with a
/// seeded generator; real sessions use OS-seeded [`StdRng`]. Commitment
/// keys always come from OS entropy regardless of this source.
pub struct Game<R = StdRng> {
    moves: MoveSet,
    rules: RuleTable,
    rng: R,
}

impl Game<StdRng> {
    /// Start a session with an OS-seeded move-selection RNG.
    pub fn new(moves: MoveSet) -> Self {
        Self::with_rng(moves, StdRng::from_entropy())
    }
}

impl<R: RngCore> Game<R> {
    /// Start a session with an injected move-selection RNG.
    pub fn with_rng(moves: MoveSet, rng: R) -> Self {
        let rules = RuleTable::generate(&moves);
        Self { moves, rules, rng }
    }

    /// The session's move set.
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// The derived rule table.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Play one turn against the computer.
    ///
    /// The computer's move is drawn uniformly and committed to under a
    /// fresh key before the outcome is resolved, so neither side can
    /// adapt to the other. Keys are never reused across turns; once
    /// revealed, a key commits to nothing further.
    pub fn play(&mut self, user_move: &str) -> Result<TurnReport, TurnError> {
        let user_index = self
            .moves
            .index_of(user_move)
            .ok_or_else(|| TurnError::UnknownMove(user_move.to_string()))?;

        let computer_index = self.rng.gen_range(0..self.moves.len());
        let computer_move = self.moves.as_slice()[computer_index].clone();

        let key = KeyGenerator::generate()?;
        let commitment = commitment::commit(&key, &computer_move);

        let outcome = self.rules.outcome(user_index, computer_index);
        debug!(
            user = %user_move,
            computer = %computer_move,
            ?outcome,
            "turn resolved"
        );

        Ok(TurnReport {
            user_move: user_move.to_string(),
            computer_move,
            commitment,
            key,
            outcome,
        })
    }
}
