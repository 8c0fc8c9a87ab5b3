//! Cryptographic primitives for the commitment protocol.
//!
//! - `key`: per-turn secret key generation from OS entropy
//! - `commitment`: HMAC-SHA-256 move commitments

pub mod commitment;
pub mod key;

// Re-export core types
pub use commitment::{commit, verify, Commitment};
pub use key::{KeyError, KeyGenerator, SecretKey, KEY_LEN};
