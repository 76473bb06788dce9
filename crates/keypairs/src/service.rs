//! Text-level boundary for UI callers
//!
//! The surface a presentation shell talks to: seeds travel as family-seed
//! strings, messages and signatures as hex. Stateless free functions —
//! every call takes all of its inputs and returns a value or a typed
//! error, so calls are independent and safe to issue from any thread.
//!
//! Inputs are trimmed of surrounding whitespace before decoding, and hex
//! is accepted in either case; signature output is lowercase hex.

use thiserror::Error;

use crate::codec::{decode_seed, encode_seed, CodecError};
use crate::keys::{derive_keypair, KeyError};
use crate::seed::{Seed, SeedError};
use crate::signing::{sign, verify, Signature, SignatureError};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error(transparent)]
    Signature(#[from] SignatureError),
    #[error("Malformed hex: {0}")]
    MalformedHex(#[from] hex::FromHexError),
}

/// Generate a fresh random seed, returned in its text encoding.
pub fn generate_seed() -> Result<String, ServiceError> {
    let seed = Seed::generate()?;
    Ok(encode_seed(&seed))
}

/// Derive the keypair for a seed string and sign a hex-encoded message.
///
/// Returns the signature as lowercase hex.
pub fn derive_and_sign(seed_text: &str, message_hex: &str) -> Result<String, ServiceError> {
    let seed = decode_seed(seed_text.trim())?;
    let message = hex::decode(message_hex.trim())?;

    let keypair = derive_keypair(&seed);
    let signature = sign(keypair.private_key(), &message);

    Ok(hex::encode(signature.as_bytes()))
}

/// Derive the keypair for a seed string and verify a hex-encoded
/// signature over a hex-encoded message.
///
/// A signature that simply does not match is `Ok(false)`; only
/// structurally invalid inputs error.
pub fn derive_and_verify(
    seed_text: &str,
    message_hex: &str,
    signature_hex: &str,
) -> Result<bool, ServiceError> {
    let seed = decode_seed(seed_text.trim())?;
    let message = hex::decode(message_hex.trim())?;
    let signature = Signature::from_slice(&hex::decode(signature_hex.trim())?)?;

    let keypair = derive_keypair(&seed);
    Ok(verify(keypair.public_key(), &message, &signature))
}
