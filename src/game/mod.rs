//! Game Logic
//!
//! - `moves`: validated, ordered move list
//! - `rules`: cyclic tournament generation and outcome resolution
//! - `session`: per-turn commit/draw/resolve/reveal orchestration

pub mod moves;
pub mod rules;
pub mod session;

// Re-export key types
pub use moves::{MoveSet, MoveSetError};
pub use rules::{Outcome, RuleTable};
pub use session::{Game, TurnError, TurnReport};
