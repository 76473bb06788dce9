//! Family-seed text codec
//!
//! Encodes a 16-byte seed to the XRP Ledger family-seed format: a version
//! prefix byte, the seed payload, and a 4-byte double-SHA-256 checksum,
//! all run through base58 with the ripple alphabet. The result is a 29
//! character string starting with `s`, e.g. `sp6JS7f14BuwFY8Mw6bTtLKWauoUs`.
//!
//! Decoding distinguishes the ways a string can be bad (wrong alphabet,
//! bad checksum, wrong version, wrong payload length) so callers can
//! report each precisely.

use bs58::Alphabet;
use thiserror::Error;

use crate::seed::{Seed, SEED_LEN};

/// Version prefix byte marking a family seed (`s...` when encoded)
pub const FAMILY_SEED_PREFIX: u8 = 0x21;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Malformed seed string: {0}")]
    MalformedSeed(String),
    #[error("Seed checksum mismatch")]
    ChecksumMismatch,
    #[error("Unsupported seed version prefix: {0:#04x}")]
    UnsupportedVersion(u8),
    #[error("Invalid seed payload length: expected {SEED_LEN}, got {0}")]
    InvalidSeedLength(usize),
}

/// Encode a seed as a family-seed string.
pub fn encode_seed(seed: &Seed) -> String {
    bs58::encode(seed.as_bytes())
        .with_alphabet(Alphabet::RIPPLE)
        .with_check_version(FAMILY_SEED_PREFIX)
        .into_string()
}

/// Decode a family-seed string back into a `Seed`.
///
/// # Errors
/// * `MalformedSeed` — characters outside the base58 alphabet, or a
///   string too short to carry a checksum
/// * `ChecksumMismatch` — the trailing 4 bytes do not match the
///   recomputed double-SHA-256 checksum
/// * `UnsupportedVersion` — the version prefix is not `0x21`
/// * `InvalidSeedLength` — the payload is not exactly 16 bytes
pub fn decode_seed(text: &str) -> Result<Seed, CodecError> {
    let payload = bs58::decode(text)
        .with_alphabet(Alphabet::RIPPLE)
        .with_check(Some(FAMILY_SEED_PREFIX))
        .into_vec()
        .map_err(map_decode_error)?;

    // Payload still carries the version byte in front
    Seed::from_slice(&payload[1..]).map_err(|_| CodecError::InvalidSeedLength(payload.len() - 1))
}

fn map_decode_error(err: bs58::decode::Error) -> CodecError {
    use bs58::decode::Error;

    match err {
        Error::InvalidChecksum { .. } => CodecError::ChecksumMismatch,
        Error::InvalidVersion { ver, .. } => CodecError::UnsupportedVersion(ver),
        other => CodecError::MalformedSeed(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// XRPL reference vector: 16 zero bytes under the family-seed encoding.
    const ZERO_SEED_ENCODED: &str = "sp6JS7f14BuwFY8Mw6bTtLKWauoUs";

    #[test]
    fn test_zero_seed_reference_vector() {
        let seed = Seed::from_bytes([0u8; SEED_LEN]);
        assert_eq!(encode_seed(&seed), ZERO_SEED_ENCODED);
    }

    #[test]
    fn test_sequential_seed_reference_vector() {
        let mut bytes = [0u8; SEED_LEN];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let seed = Seed::from_bytes(bytes);
        assert_eq!(encode_seed(&seed), "sp6JdwovBCsiwnMhXuvZGZtPUoGVj");
    }

    #[test]
    fn test_roundtrip() {
        let seed = Seed::generate().unwrap();
        let encoded = encode_seed(&seed);
        let decoded = decode_seed(&encoded).unwrap();
        assert_eq!(decoded, seed);

        // Encoded length is fixed for a one-byte prefix
        assert_eq!(encoded.len(), 29);
        assert!(encoded.starts_with('s'));
    }

    #[test]
    fn test_invalid_character_is_malformed() {
        // '0', 'O', 'I' and 'l' are not in the ripple base58 alphabet
        let result = decode_seed("sp6JS7f14BuwFY8Mw6bTtLKWauoU0");
        assert!(matches!(result, Err(CodecError::MalformedSeed(_))));
    }

    #[test]
    fn test_corrupted_checksum_is_detected() {
        // Swap the final character (inside the checksum region) for a
        // different alphabet character
        let mut corrupted = ZERO_SEED_ENCODED.to_string();
        corrupted.pop();
        corrupted.push('m');
        assert_ne!(corrupted, ZERO_SEED_ENCODED);

        let result = decode_seed(&corrupted);
        assert!(matches!(result, Err(CodecError::ChecksumMismatch)));
    }

    #[test]
    fn test_wrong_version_prefix_is_rejected() {
        // Well-formed base58check string carrying the wrong version byte
        let other_version = bs58::encode(&[0u8; SEED_LEN])
            .with_alphabet(Alphabet::RIPPLE)
            .with_check_version(0x20)
            .into_string();

        let result = decode_seed(&other_version);
        assert!(matches!(result, Err(CodecError::UnsupportedVersion(0x20))));
    }

    #[test]
    fn test_wrong_payload_length_is_rejected() {
        // Valid checksum and version over a 15-byte payload
        let short = bs58::encode(&[0u8; SEED_LEN - 1])
            .with_alphabet(Alphabet::RIPPLE)
            .with_check_version(FAMILY_SEED_PREFIX)
            .into_string();

        let result = decode_seed(&short);
        assert!(matches!(result, Err(CodecError::InvalidSeedLength(15))));
    }

    #[test]
    fn test_empty_and_tiny_strings_are_malformed() {
        assert!(matches!(decode_seed(""), Err(CodecError::MalformedSeed(_))));
        assert!(matches!(
            decode_seed("sp"),
            Err(CodecError::MalformedSeed(_))
        ));
    }
}
