//! Message signing and signature verification
//!
//! Ed25519 per RFC 8032: the per-message nonce is derived from a hash of
//! the private key's secret prefix and the message, so signing is fully
//! deterministic — the same key and message always produce the same 64
//! byte signature. Constant-time scalar and point arithmetic comes from
//! `ed25519-dalek`.
//!
//! A signature that fails to verify is the normal `false` outcome, not an
//! error; only structurally invalid inputs (wrong lengths, off-curve
//! public keys) error, and those are rejected when the value is built.

use ed25519_dalek::{Signature as DalekSignature, Signer, Verifier};
use thiserror::Error;

use crate::keys::{PrivateKey, PublicKey};

/// Signature length in bytes (commitment point ‖ response scalar)
pub const SIGNATURE_LEN: usize = 64;

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("Invalid signature length: expected {SIGNATURE_LEN}, got {0}")]
    InvalidSignatureLength(usize),
}

/// A 64-byte Ed25519 signature. A plain value; two signatures are equal
/// exactly when their bytes are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_LEN]);

impl Signature {
    /// Construct a signature from a byte slice, validating the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        let bytes: [u8; SIGNATURE_LEN] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidSignatureLength(bytes.len()))?;
        Ok(Self(bytes))
    }

    /// The raw signature bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }
}

/// Sign a message with a private key.
///
/// Deterministic: no randomness is consumed, and signing the same
/// (key, message) pair twice yields bit-identical signatures. The empty
/// message is signable like any other.
pub fn sign(key: &PrivateKey, message: &[u8]) -> Signature {
    let signature = key.signing_key().sign(message);
    Signature(signature.to_bytes())
}

/// Verify a signature over a message against a public key.
///
/// Returns `false` for any mismatch — wrong key, altered message, altered
/// signature. Structural validation happens earlier, at
/// [`PublicKey::from_slice`] and [`Signature::from_slice`].
pub fn verify(public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
    let signature = DalekSignature::from_bytes(&signature.0);
    public_key
        .verifying_key()
        .verify(message, &signature)
        .is_ok()
}
