//! Rule Generation
//!
//! Builds the complete win/lose relation over a move set from cyclic
//! distance: a move beats the next N/2 moves after it in circular order
//! and loses to the N/2 moves before it. For odd N this partitions the
//! other moves exactly, giving a complete antisymmetric tournament.

use crate::game::moves::MoveSet;

/// Result of one turn, from the human's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Both sides picked the same move.
    Draw,
    /// The human's move beats the computer's.
    Win,
    /// The computer's move beats the human's.
    Lose,
}

impl Outcome {
    /// The phrase printed to the user for this outcome.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Draw => "It's a draw!",
            Self::Win => "You win!",
            Self::Lose => "You lose!",
        }
    }
}

/// Win/lose relation for a single move, as indices into the move set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleEntry {
    beats: Vec<usize>,
    loses_to: Vec<usize>,
}

impl RuleEntry {
    /// Indices of moves this move beats (exactly (N-1)/2 of them).
    pub fn beats(&self) -> &[usize] {
        &self.beats
    }

    /// Indices of moves this move loses to (exactly (N-1)/2 of them).
    pub fn loses_to(&self) -> &[usize] {
        &self.loses_to
    }
}

/// The complete tournament relation over a move set.
///
/// Indexed by move position; derived once at session start and
/// read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    entries: Vec<RuleEntry>,
}

impl RuleTable {
    /// Generate the relation for a validated move set.
    ///
    /// For move index i and each offset j in [1, N/2], `(i + j) % N` is
    /// beaten by i and `(i + N - j) % N` beats i. Exactness of the
    /// partition depends on N being odd, which `MoveSet` guarantees.
    pub fn generate(moves: &MoveSet) -> Self {
        let n = moves.len();
        let half = n / 2;

        let entries = (0..n)
            .map(|i| {
                let mut beats = Vec::with_capacity(half);
                let mut loses_to = Vec::with_capacity(half);
                for j in 1..=half {
                    beats.push((i + j) % n);
                    loses_to.push((i + n - j) % n);
                }
                RuleEntry { beats, loses_to }
            })
            .collect();

        Self { entries }
    }

    /// Number of moves covered by the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a generated table; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Relation entry for the move at `index`.
    pub fn entry(&self, index: usize) -> &RuleEntry {
        &self.entries[index]
    }

    /// Whether the move at `attacker` beats the move at `defender`.
    pub fn beats(&self, attacker: usize, defender: usize) -> bool {
        self.entries[attacker].beats.contains(&defender)
    }

    /// Resolve a turn between the human's and the computer's move indices.
    ///
    /// Equal indices draw. Otherwise the relation is a complete
    /// tournament, so a non-win is always a loss; no second lookup.
    pub fn outcome(&self, user: usize, computer: usize) -> Outcome {
        if user == computer {
            Outcome::Draw
        } else if self.beats(user, computer) {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}
