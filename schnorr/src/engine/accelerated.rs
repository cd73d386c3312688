//! Engine backed by libsecp256k1.

use core::fmt;

use schnorr_curve::{FIELD_PRIME_BYTES, ORDER_BYTES};
use secp256k1::{schnorr, All, Keypair, Message, Secp256k1, XOnlyPublicKey};
use tracing::error;

use crate::codec::fixed;
use crate::config::RandomnessMode;
use crate::constants::{ACCELERATED_MSG_SIZE, AUX_SIZE};
use crate::errors::SchnorrError;
use crate::keys::{PublicKey, SecretKey};
use crate::signatures::Signature;

use super::SchnorrEngine;

/// Signing and verification through the `secp256k1` crate.
///
/// Messages must be exactly 32 bytes; any other length is a `Size` error.
/// Range checks and error kinds match the reference engine.
#[derive(Clone)]
pub struct AcceleratedEngine {
    secp: Secp256k1<All>,
    randomness: RandomnessMode,
}

impl AcceleratedEngine {
    pub fn new(randomness: RandomnessMode) -> Self {
        AcceleratedEngine {
            secp: Secp256k1::new(),
            randomness,
        }
    }

    fn keypair(&self, sk: &SecretKey) -> Result<Keypair, SchnorrError> {
        Keypair::from_seckey_slice(&self.secp, sk.as_bytes()).map_err(backend)
    }
}

impl Default for AcceleratedEngine {
    fn default() -> Self {
        Self::new(RandomnessMode::default())
    }
}

impl fmt::Debug for AcceleratedEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcceleratedEngine")
            .field("randomness", &self.randomness)
            .finish_non_exhaustive()
    }
}

fn backend(err: secp256k1::Error) -> SchnorrError {
    SchnorrError::Backend(err.to_string())
}

fn message(msg: &[u8]) -> Result<Message, SchnorrError> {
    let digest: [u8; ACCELERATED_MSG_SIZE] = fixed("message", msg)?;
    Ok(Message::from_digest(digest))
}

impl SchnorrEngine for AcceleratedEngine {
    fn name(&self) -> &'static str {
        "accelerated"
    }

    fn randomness(&self) -> RandomnessMode {
        self.randomness
    }

    fn sign(&self, sk: &SecretKey, msg: &[u8], aux: &[u8; AUX_SIZE]) -> Result<Signature, SchnorrError> {
        let msg = message(msg)?;
        let keypair = self.keypair(sk)?;
        let sig = self.secp.sign_schnorr_with_aux_rand(&msg, &keypair, aux);

        let (xonly, _) = keypair.x_only_public_key();
        if self.secp.verify_schnorr(&sig, &msg, &xonly).is_err() {
            error!("freshly produced signature failed self-verification");
            return Err(SchnorrError::SelfVerification);
        }

        Ok(Signature::from_bytes(&sig.serialize()))
    }

    fn verify(&self, pk: &PublicKey, msg: &[u8], sig: &Signature) -> Result<bool, SchnorrError> {
        let msg = message(msg)?;

        let x = pk.as_bytes();
        if *x == [0u8; 32] || *x >= FIELD_PRIME_BYTES {
            return Err(SchnorrError::Range("x"));
        }
        let xonly = XOnlyPublicKey::from_slice(x).map_err(|_| SchnorrError::NotOnCurve)?;

        // Big-endian arrays order the same way as the integers they encode.
        if sig.r >= FIELD_PRIME_BYTES {
            return Err(SchnorrError::Range("r"));
        }
        if sig.s >= ORDER_BYTES {
            return Err(SchnorrError::Range("s"));
        }

        let sig = schnorr::Signature::from_slice(&sig.to_bytes()).map_err(backend)?;
        Ok(self.secp.verify_schnorr(&sig, &msg, &xonly).is_ok())
    }

    fn derive_public_key(&self, sk: &SecretKey) -> Result<PublicKey, SchnorrError> {
        let (xonly, _) = self.keypair(sk)?.x_only_public_key();
        Ok(PublicKey::from_bytes(xonly.serialize()))
    }
}
