//! Key derivation from a seed
//!
//! Expands a 16-byte seed into an Ed25519 keypair the way the XRP Ledger
//! does: the private key is the first half of `SHA-512(seed)`, and the
//! public key is the matching curve point (RFC 8032 expansion — internal
//! hash, scalar clamping, base-point multiplication — handled by
//! `ed25519-dalek`).
//!
//! Derivation is deterministic and consumes no randomness; the same seed
//! always yields the same keypair.

use ed25519_dalek::{SigningKey, VerifyingKey};
use sha2::{Digest, Sha512};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::seed::Seed;

/// Private key length in bytes
pub const PRIVATE_KEY_LEN: usize = 32;

/// Public key length in bytes
pub const PUBLIC_KEY_LEN: usize = 32;

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Invalid public key: not a valid curve point encoding")]
    InvalidPublicKey,
}

/// A 32-byte Ed25519 private key, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_LEN]);

impl PrivateKey {
    /// The raw private key bytes.
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LEN] {
        &self.0
    }

    pub(crate) fn signing_key(&self) -> SigningKey {
        SigningKey::from_bytes(&self.0)
    }
}

// Never print key material
impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

/// A validated Ed25519 public key.
///
/// Construction via [`PublicKey::from_slice`] checks that the bytes decode
/// to a point on the curve, so verification never has to re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey(VerifyingKey);

impl PublicKey {
    /// Construct a public key from its 32-byte encoding.
    ///
    /// # Errors
    /// Returns `KeyError::InvalidPublicKey` if the slice is not 32 bytes
    /// or does not decode to a point on the curve.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; PUBLIC_KEY_LEN] =
            bytes.try_into().map_err(|_| KeyError::InvalidPublicKey)?;
        let key = VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self(key))
    }

    /// The 32-byte compressed point encoding.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.0.to_bytes()
    }

    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.0
    }
}

/// A derived keypair. The private and public halves are owned together;
/// to get the pair back, re-derive from the seed.
#[derive(Clone)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &hex::encode(self.public.to_bytes()))
            .finish_non_exhaustive()
    }
}

/// Derive the Ed25519 keypair for a seed.
///
/// Private key = first 32 bytes of `SHA-512(seed)`, public key = the
/// corresponding curve point. Total on well-formed `Seed` values.
pub fn derive_keypair(seed: &Seed) -> KeyPair {
    let digest = Sha512::digest(seed.as_bytes());

    let mut private = [0u8; PRIVATE_KEY_LEN];
    private.copy_from_slice(&digest[..PRIVATE_KEY_LEN]);

    let signing_key = SigningKey::from_bytes(&private);
    let public = PublicKey(signing_key.verifying_key());

    KeyPair {
        private: PrivateKey(private),
        public,
    }
}
