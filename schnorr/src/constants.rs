//! Constants used in the Schnorr signature scheme implementation.

/// Size of a serialized secret key in bytes.
pub const SK_SIZE: usize = 32;

/// Size of a serialized x-only public key in bytes.
pub const PK_SIZE: usize = 32;

/// Size of a serialized signature in bytes: `r` (32) followed by `s` (32).
pub const SIG_SIZE: usize = 64;

/// Size of the auxiliary randomness mixed into nonce derivation.
pub const AUX_SIZE: usize = 32;

/// Message length accepted by the accelerated engine.
pub const ACCELERATED_MSG_SIZE: usize = 32;

/// Tag for hashing the auxiliary randomness.
pub const TAG_AUX: &str = "BIP0340/aux";

/// Tag for nonce derivation.
pub const TAG_NONCE: &str = "BIP0340/nonce";

/// Tag for the Fiat-Shamir challenge.
pub const TAG_CHALLENGE: &str = "BIP0340/challenge";

/// Environment variable selecting the engine (`pure` or `fast`).
pub const ENGINE_ENV: &str = "SCHNORR_SIG";

/// Environment variable switching randomness to a seeded, insecure generator.
pub const SEED_ENV: &str = "SCHNORR_SIG_SEED";
