use crate::config::RandomnessMode;
use crate::constants::AUX_SIZE;
use crate::errors::SchnorrError;
use crate::keys::{derive_public_key, PublicKey, SecretKey};
use crate::signatures::Signature;
use crate::{signer, verifier};

use super::SchnorrEngine;

/// Signing and verification on the workspace curve arithmetic.
///
/// Accepts messages of any length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReferenceEngine {
    randomness: RandomnessMode,
}

impl ReferenceEngine {
    pub fn new(randomness: RandomnessMode) -> Self {
        ReferenceEngine { randomness }
    }
}

impl SchnorrEngine for ReferenceEngine {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn randomness(&self) -> RandomnessMode {
        self.randomness
    }

    fn sign(&self, sk: &SecretKey, msg: &[u8], aux: &[u8; AUX_SIZE]) -> Result<Signature, SchnorrError> {
        signer::sign(sk, msg, aux)
    }

    fn verify(&self, pk: &PublicKey, msg: &[u8], sig: &Signature) -> Result<bool, SchnorrError> {
        verifier::verify(pk, msg, sig)
    }

    fn derive_public_key(&self, sk: &SecretKey) -> Result<PublicKey, SchnorrError> {
        Ok(derive_public_key(sk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_any_message_length() {
        let engine = ReferenceEngine::default();
        let keypair = engine.generate_keypair(&mut StdRng::seed_from_u64(3)).unwrap();

        for len in [0usize, 1, 31, 32, 33, 200] {
            let msg = vec![0x5a; len];
            let sig = engine
                .sign_with_rng(&keypair.secret, &msg, &mut StdRng::seed_from_u64(len as u64))
                .unwrap();
            assert_eq!(engine.verify(&keypair.public, &msg, &sig), Ok(true), "len = {len}");
        }
    }
}
