//! XRPL Keypairs
//!
//! Seed generation and Ed25519 keypair derivation, signing, and
//! verification, following the XRP Ledger key conventions.
//!
//! # Pipeline
//!
//! - 16 bytes of OS entropy make a [`Seed`]
//! - Seeds encode to family-seed strings (base58check, ripple alphabet,
//!   version prefix `0x21`)
//! - `SHA-512-half(seed)` is the Ed25519 private key; the public key is
//!   the matching curve point
//! - Signing is deterministic RFC 8032 Ed25519
//!
//! # Example
//!
//! ```
//! use xrpl_keypairs::{derive_keypair, sign, verify, Seed};
//!
//! let seed = Seed::generate().unwrap();
//! let keypair = derive_keypair(&seed);
//!
//! let signature = sign(keypair.private_key(), b"hello");
//! assert!(verify(keypair.public_key(), b"hello", &signature));
//! ```
//!
//! For callers that work in text (seed strings, hex messages), the
//! [`service`] module exposes the same pipeline end to end.

pub mod codec;
pub mod keys;
pub mod seed;
pub mod service;
pub mod signing;

pub use codec::{decode_seed, encode_seed, CodecError};
pub use keys::{derive_keypair, KeyError, KeyPair, PrivateKey, PublicKey};
pub use seed::{Seed, SeedError, SEED_LEN};
pub use service::{derive_and_sign, derive_and_verify, generate_seed, ServiceError};
pub use signing::{sign, verify, Signature, SignatureError, SIGNATURE_LEN};
