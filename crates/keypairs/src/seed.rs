//! Seed generation and the `Seed` type
//!
//! A seed is 16 bytes of entropy from which a full Ed25519 keypair is
//! deterministically derived. Seeds are validated at construction time,
//! zeroized on drop, and never persisted by this crate.

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Seed entropy length in bytes
pub const SEED_LEN: usize = 16;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Secure randomness unavailable: {0}")]
    EntropyUnavailable(String),
    #[error("Invalid seed length: expected {SEED_LEN}, got {0}")]
    InvalidSeedLength(usize),
}

/// A 16-byte seed, the root secret of a keypair.
///
/// Construction enforces the length invariant, so every downstream
/// operation (encoding, derivation) is total on `Seed` values.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Generate a new seed from the OS secure random number generator.
    ///
    /// # Errors
    /// Returns `SeedError::EntropyUnavailable` if the OS RNG cannot
    /// provide entropy. There is no fallback generator.
    pub fn generate() -> Result<Self, SeedError> {
        let mut entropy = [0u8; SEED_LEN];
        OsRng
            .try_fill_bytes(&mut entropy)
            .map_err(|e| SeedError::EntropyUnavailable(e.to_string()))?;
        Ok(Self(entropy))
    }

    /// Construct a seed from exactly 16 bytes.
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Construct a seed from a byte slice, validating the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SeedError> {
        let entropy: [u8; SEED_LEN] = bytes
            .try_into()
            .map_err(|_| SeedError::InvalidSeedLength(bytes.len()))?;
        Ok(Self(entropy))
    }

    /// The raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

// Never print seed material
impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seed").finish_non_exhaustive()
    }
}
