//! Secret Key Generation
//!
//! Produces the MAC keys used to commit to the computer's move.
//! Keys come from OS entropy; a failing entropy source is fatal.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// Key length in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// A secret MAC key for one commit/reveal round.
///
/// Displayed as lowercase hex so the user can feed it to any
/// standard HMAC tool when verifying a commitment.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Wrap raw key bytes.
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keys are revealed to the user anyway, but keep logs clean.
        write!(f, "SecretKey({}..)", &self.to_hex()[..8])
    }
}

/// Errors from key generation.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The OS entropy source failed. Not recoverable.
    #[error("entropy source failure: {0}")]
    EntropyFailure(#[from] rand::Error),
}

/// Generates fresh secret keys from OS entropy.
pub struct KeyGenerator;

impl KeyGenerator {
    /// Generate a fresh 256-bit key.
    pub fn generate() -> Result<SecretKey, KeyError> {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(SecretKey(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_key_length_and_encoding() {
        let key = KeyGenerator::generate().unwrap();
        let hex = key.to_hex();

        assert_eq!(key.as_bytes().len(), KEY_LEN);
        assert_eq!(hex.len(), KEY_LEN * 2);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_generated_keys_differ() {
        let a = KeyGenerator::generate().unwrap();
        let b = KeyGenerator::generate().unwrap();

        // 256 bits of entropy; a collision here means the source is broken.
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_matches_hex() {
        let key = SecretKey::from_bytes([0xab; KEY_LEN]);
        assert_eq!(key.to_string(), "ab".repeat(KEY_LEN));
    }
}
