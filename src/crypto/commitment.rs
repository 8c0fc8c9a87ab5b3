//! Move Commitment Protocol
//!
//! Commit to the computer's move before the result is revealed.
//! The tag is HMAC-SHA-256 over the move's UTF-8 bytes, keyed with a
//! per-turn [`SecretKey`]. The MAC input carries no domain separator so
//! the user can recompute the tag with any off-the-shelf HMAC tool once
//! the key is revealed.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::crypto::key::SecretKey;

type HmacSha256 = Hmac<Sha256>;

/// Commitment tag length in bytes (256-bit MAC output).
pub const TAG_LEN: usize = 32;

/// A commitment tag, published before the computer's move is revealed.
///
/// Without the key the tag reveals nothing about the move; with the key
/// it binds the computer to exactly one move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Commitment([u8; TAG_LEN]);

impl Commitment {
    /// Raw tag bytes.
    pub fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute the commitment tag for a move under the given key.
///
/// Deterministic: the same (key, move) pair always yields the same tag.
pub fn commit(key: &SecretKey, move_token: &str) -> Commitment {
    Commitment(hmac_sha256(key.as_bytes(), move_token.as_bytes()))
}

/// Verify that a revealed (key, move) pair matches a published tag.
///
/// Constant-time comparison via the MAC implementation.
pub fn verify(key: &SecretKey, move_token: &str, tag: &Commitment) -> bool {
    let mut mac = mac_for(key.as_bytes());
    mac.update(move_token.as_bytes());
    mac.verify_slice(tag.as_bytes()).is_ok()
}

fn mac_for(key: &[u8]) -> HmacSha256 {
    // HMAC-SHA-256 accepts keys of any length.
    HmacSha256::new_from_slice(key).expect("HMAC accepts any key length")
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; TAG_LEN] {
    let mut mac = mac_for(key);
    mac.update(data);
    mac.finalize().into_bytes().into()
}
