//! # Fair RPS
//!
//! Provably fair generalized rock-paper-scissors for any odd number of
//! moves, played against the computer on the command line.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        FAIR RPS                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  crypto/          - Commitment primitives                   │
//! │  ├── key.rs       - Per-turn secret keys from OS entropy    │
//! │  └── commitment.rs- HMAC-SHA-256 move commitments           │
//! │                                                             │
//! │  game/            - Game logic (deterministic given RNG)    │
//! │  ├── moves.rs     - Validated, ordered move list            │
//! │  ├── rules.rs     - Cyclic tournament win/lose relation     │
//! │  └── session.rs   - Commit / draw / resolve / reveal        │
//! │                                                             │
//! │  cli/             - Terminal front end                      │
//! │  ├── table.rs     - Rule-matrix rendering                   │
//! │  └── repl.rs      - Menu parsing and interactive loop       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! Each turn the computer draws its move, publishes the HMAC-SHA-256
//! tag of that move under a fresh 256-bit key, and only then resolves
//! the round. The key is revealed with the result, so the user can
//! recompute the tag and confirm the move was fixed before the reveal.
//! Keys are never reused across turns.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod crypto;
pub mod game;

// Re-export commonly used types
pub use crypto::commitment::{commit, verify, Commitment};
pub use crypto::key::{KeyGenerator, SecretKey};
pub use game::moves::{MoveSet, MoveSetError};
pub use game::rules::{Outcome, RuleTable};
pub use game::session::{Game, TurnError, TurnReport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
