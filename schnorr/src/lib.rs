//! BIP340 Schnorr signatures over secp256k1.
//!
//! This library signs and verifies 64-byte Schnorr signatures with 32-byte
//! x-only public keys, interoperable bit-for-bit with the rest of the
//! secp256k1 ecosystem. It provides:
//! - A reference engine built on the `schnorr-curve` arithmetic in this workspace
//! - An accelerated engine backed by libsecp256k1 (feature `accelerated`, on by default)
//! - The tagged hash, `lift_x` and codec helpers the scheme is built from
//!
//! # Overview
//!
//! Signing is deterministic given the secret key, the message and 32 bytes of
//! auxiliary randomness. Verification comes in two modes: strict, which
//! returns `Ok(false)` for an invalid signature and an error for malformed
//! input, and soft, which collapses both to `false`.
//!
//! # Example
//!
//! ```
//! use schnorr_sig::{Engine, EngineConfig, SchnorrEngine};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let engine = Engine::from_config(&EngineConfig::default());
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let keypair = engine.generate_keypair(&mut rng).expect("keygen failed");
//! let msg = [0x42u8; 32];
//! let sig = engine
//!     .sign_with_rng(&keypair.secret, &msg, &mut rng)
//!     .expect("signing failed");
//!
//! assert_eq!(engine.verify(&keypair.public, &msg, &sig), Ok(true));
//! assert!(!engine.soft_verify(keypair.public.as_bytes(), &msg, &sig.to_bytes()[..63]));
//! ```
//!
//! # Security Considerations
//!
//! - The reference engine is variable-time; prefer the accelerated engine for secret keys at risk of side channels
//! - `RandomnessMode::Seeded` repeats its stream on every call and is for tests only
//! - Secret keys are never logged and have a redacted `Debug`

mod codec;
mod config;
mod constants;
mod engine;
mod errors;
mod keys;
mod lift;
mod signatures;
mod signer;
mod tagged_hash;
mod verifier;


pub use codec::{bytes_to_hex, bytes_to_int, hex_to_bytes, int_to_array, int_to_bytes, Hex};
pub use config::{EngineConfig, EngineKind, EntropySource, RandomnessMode};
pub use constants::{
    ACCELERATED_MSG_SIZE, AUX_SIZE, ENGINE_ENV, PK_SIZE, SEED_ENV, SIG_SIZE, SK_SIZE, TAG_AUX,
    TAG_CHALLENGE, TAG_NONCE,
};
#[cfg(feature = "accelerated")]
pub use engine::AcceleratedEngine;
pub use engine::{Engine, ReferenceEngine, SchnorrEngine};
pub use errors::SchnorrError;
pub use keys::{derive_public_key, generate_keypair, Keypair, PublicKey, SecretKey};
pub use lift::lift_x;
pub use signatures::Signature;
pub use signer::sign;
pub use tagged_hash::{tagged_hash, tagged_hash_parts, Tag};
pub use verifier::{soft_verify, verify, verify_bytes};
