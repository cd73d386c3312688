//! Interchangeable signing engines.
//!
//! Every engine produces and accepts the same 64-byte signatures: a signature
//! made by one verifies under any other for the same key and message.

mod reference;

#[cfg(feature = "accelerated")]
mod accelerated;

#[cfg(feature = "accelerated")]
pub use accelerated::AcceleratedEngine;
pub use reference::ReferenceEngine;

use rand::TryCryptoRng;
use tracing::debug;
#[cfg(not(feature = "accelerated"))]
use tracing::warn;

use crate::config::{EngineConfig, EngineKind, EntropySource, RandomnessMode};
use crate::constants::AUX_SIZE;
use crate::errors::SchnorrError;
use crate::keys::{Keypair, PublicKey, SecretKey};
use crate::signatures::Signature;
use crate::verifier::soften;

/// The capability set shared by all engines.
pub trait SchnorrEngine: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Where [`SchnorrEngine::sign_fresh`] and [`SchnorrEngine::new_keypair`]
    /// draw their bytes.
    fn randomness(&self) -> RandomnessMode;

    /// Deterministic signing with caller-supplied auxiliary randomness.
    fn sign(&self, sk: &SecretKey, msg: &[u8], aux: &[u8; AUX_SIZE])
        -> Result<Signature, SchnorrError>;

    /// Strict verification: `Ok(false)` for a well-formed invalid signature,
    /// `Err` for malformed input.
    fn verify(&self, pk: &PublicKey, msg: &[u8], sig: &Signature) -> Result<bool, SchnorrError>;

    /// The x-only public key of `sk`.
    fn derive_public_key(&self, sk: &SecretKey) -> Result<PublicKey, SchnorrError>;

    /// Draw a fresh secret key from `rng` and derive its public key.
    fn generate_keypair<R: TryCryptoRng + ?Sized>(&self, rng: &mut R) -> Result<Keypair, SchnorrError>
    where
        Self: Sized,
    {
        let secret = SecretKey::random(rng)?;
        let public = self.derive_public_key(&secret)?;
        Ok(Keypair { secret, public })
    }

    fn tagged_hash(&self, tag: &str, msg: &[u8]) -> [u8; 32] {
        crate::tagged_hash::tagged_hash(tag, msg)
    }

    /// Sign with auxiliary randomness drawn from `rng`.
    fn sign_with_rng<R: TryCryptoRng + ?Sized>(
        &self,
        sk: &SecretKey,
        msg: &[u8],
        rng: &mut R,
    ) -> Result<Signature, SchnorrError>
    where
        Self: Sized,
    {
        let mut aux = [0u8; AUX_SIZE];
        rng.try_fill_bytes(&mut aux)
            .map_err(|e| SchnorrError::Randomness(e.to_string()))?;
        self.sign(sk, msg, &aux)
    }

    /// Sign with auxiliary randomness from this engine's configured source.
    fn sign_fresh(&self, sk: &SecretKey, msg: &[u8]) -> Result<Signature, SchnorrError> {
        let aux: [u8; AUX_SIZE] = self.randomness().source().bytes()?;
        self.sign(sk, msg, &aux)
    }

    /// Generate a keypair from this engine's configured source.
    fn new_keypair(&self) -> Result<Keypair, SchnorrError>
    where
        Self: Sized,
    {
        match self.randomness().source() {
            EntropySource::Os(mut rng) => self.generate_keypair(&mut rng),
            EntropySource::Seeded(mut rng) => self.generate_keypair(&mut rng),
        }
    }

    /// Strict verification over raw byte slices, adding `Size` errors.
    fn verify_bytes(&self, pk: &[u8], msg: &[u8], sig: &[u8]) -> Result<bool, SchnorrError> {
        let pk = PublicKey::from_slice(pk)?;
        let sig = Signature::from_slice(sig)?;
        self.verify(&pk, msg, &sig)
    }

    /// `true` only for a well-formed, valid signature. Never fails.
    fn soft_verify(&self, pk: &[u8], msg: &[u8], sig: &[u8]) -> bool {
        soften(self.verify_bytes(pk, msg, sig))
    }
}

/// An engine chosen at startup from [`EngineConfig`].
#[derive(Clone, Debug)]
pub enum Engine {
    Reference(ReferenceEngine),
    #[cfg(feature = "accelerated")]
    Accelerated(AcceleratedEngine),
}

impl Engine {
    pub fn from_config(config: &EngineConfig) -> Self {
        let engine = match config.engine {
            EngineKind::Reference => Engine::Reference(ReferenceEngine::new(config.randomness)),
            EngineKind::Accelerated => Self::accelerated(config.randomness),
        };
        debug!(
            engine = engine.name(),
            randomness = ?config.randomness,
            "schnorr engine constructed"
        );
        engine
    }

    /// Build from `SCHNORR_SIG` and `SCHNORR_SIG_SEED`.
    pub fn from_env() -> Result<Self, SchnorrError> {
        Ok(Self::from_config(&EngineConfig::from_env()?))
    }

    pub fn kind(&self) -> EngineKind {
        match self {
            Engine::Reference(_) => EngineKind::Reference,
            #[cfg(feature = "accelerated")]
            Engine::Accelerated(_) => EngineKind::Accelerated,
        }
    }

    #[cfg(feature = "accelerated")]
    fn accelerated(randomness: RandomnessMode) -> Self {
        Engine::Accelerated(AcceleratedEngine::new(randomness))
    }

    #[cfg(not(feature = "accelerated"))]
    fn accelerated(randomness: RandomnessMode) -> Self {
        warn!("accelerated engine requested but not compiled in, using reference engine");
        Engine::Reference(ReferenceEngine::new(randomness))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::Reference(ReferenceEngine::default())
    }
}

macro_rules! dispatch {
    ($self:ident, $engine:ident => $body:expr) => {
        match $self {
            Engine::Reference($engine) => $body,
            #[cfg(feature = "accelerated")]
            Engine::Accelerated($engine) => $body,
        }
    };
}

impl SchnorrEngine for Engine {
    fn name(&self) -> &'static str {
        dispatch!(self, engine => engine.name())
    }

    fn randomness(&self) -> RandomnessMode {
        dispatch!(self, engine => engine.randomness())
    }

    fn sign(&self, sk: &SecretKey, msg: &[u8], aux: &[u8; AUX_SIZE]) -> Result<Signature, SchnorrError> {
        dispatch!(self, engine => engine.sign(sk, msg, aux))
    }

    fn verify(&self, pk: &PublicKey, msg: &[u8], sig: &Signature) -> Result<bool, SchnorrError> {
        dispatch!(self, engine => engine.verify(pk, msg, sig))
    }

    fn derive_public_key(&self, sk: &SecretKey) -> Result<PublicKey, SchnorrError> {
        dispatch!(self, engine => engine.derive_public_key(sk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_kinds() {
        let reference = Engine::from_config(&EngineConfig::default());
        assert_eq!(reference.kind(), EngineKind::Reference);
        assert_eq!(reference.name(), "reference");

        let config = EngineConfig::new(EngineKind::Accelerated, RandomnessMode::Seeded(1));
        let engine = Engine::from_config(&config);
        assert_eq!(engine.randomness(), RandomnessMode::Seeded(1));
        #[cfg(feature = "accelerated")]
        assert_eq!(engine.kind(), EngineKind::Accelerated);
        #[cfg(not(feature = "accelerated"))]
        assert_eq!(engine.kind(), EngineKind::Reference);
    }

    #[test]
    fn test_seeded_engine_is_reproducible() {
        let engine = Engine::from_config(&EngineConfig::new(
            EngineKind::Reference,
            RandomnessMode::Seeded(77),
        ));
        let a = engine.new_keypair().unwrap();
        let b = engine.new_keypair().unwrap();
        assert_eq!(a, b);

        let sig = engine.sign_fresh(&a.secret, &[0u8; 32]).unwrap();
        assert_eq!(sig, engine.sign_fresh(&a.secret, &[0u8; 32]).unwrap());
        assert_eq!(engine.verify(&a.public, &[0u8; 32], &sig), Ok(true));
    }

    #[test]
    fn test_os_engine_varies() {
        let engine = Engine::default();
        let a = engine.new_keypair().unwrap();
        let b = engine.new_keypair().unwrap();
        assert_ne!(a.public, b.public);

        let s1 = engine.sign_fresh(&a.secret, b"m").unwrap();
        let s2 = engine.sign_fresh(&a.secret, b"m").unwrap();
        assert_ne!(s1, s2);
        assert!(engine.soft_verify(a.public.as_bytes(), b"m", &s1.to_bytes()));
        assert!(engine.soft_verify(a.public.as_bytes(), b"m", &s2.to_bytes()));
    }

    #[test]
    fn test_engine_tagged_hash() {
        let engine = Engine::default();
        assert_eq!(
            engine.tagged_hash("BIP0340/aux", &[0u8; 32]),
            crate::tagged_hash::tagged_hash("BIP0340/aux", &[0u8; 32])
        );
    }
}
