//! Secret keys, x-only public keys and key derivation.

use core::fmt;

use rand::TryCryptoRng;
use schnorr_curve::{Affine, ScalarField};
use serde::{Deserialize, Serialize};

use crate::codec::{fixed, hex_to_bytes, Hex};
use crate::constants::{PK_SIZE, SK_SIZE};
use crate::errors::SchnorrError;

/// A 32-byte secret scalar `d'` with `0 < d' < n`.
///
/// The bytes are never printed: `Debug` is redacted and there is no serde
/// implementation.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; SK_SIZE]);

/// A 32-byte x-only public key.
///
/// Only the length is checked on construction. Whether the bytes name a
/// curve point is decided by [`crate::lift_x`] when the key is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey([u8; PK_SIZE]);

/// A secret key together with its derived public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keypair {
    pub secret: SecretKey,
    pub public: PublicKey,
}

impl SecretKey {
    /// Accepts `bytes` if they encode an integer in `[1, n)`.
    pub fn from_bytes(bytes: [u8; SK_SIZE]) -> Result<Self, SchnorrError> {
        match ScalarField::from_be_bytes(&bytes) {
            Some(d) if !d.is_zero() => Ok(SecretKey(bytes)),
            _ => Err(SchnorrError::Range("secret key")),
        }
    }

    /// As [`SecretKey::from_bytes`], with a `Size` error for a slice that is
    /// not 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SchnorrError> {
        Self::from_bytes(fixed("secret key", bytes)?)
    }

    /// Parse a key from 64 hex digits.
    ///
    /// # Example
    ///
    /// ```
    /// use schnorr_sig::{derive_public_key, SecretKey};
    ///
    /// let sk = SecretKey::from_hex(
    ///     "0000000000000000000000000000000000000000000000000000000000000003",
    /// ).unwrap();
    /// assert_eq!(
    ///     derive_public_key(&sk).to_string(),
    ///     "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"
    /// );
    /// ```
    pub fn from_hex(text: &str) -> Result<Self, SchnorrError> {
        Self::from_slice(&hex_to_bytes(text)?)
    }

    /// Draw 32-byte candidates from `rng` until one is a valid key.
    pub fn random<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Self, SchnorrError> {
        loop {
            let mut bytes = [0u8; SK_SIZE];
            rng.try_fill_bytes(&mut bytes)
                .map_err(|e| SchnorrError::Randomness(e.to_string()))?;
            if let Ok(key) = Self::from_bytes(bytes) {
                return Ok(key);
            }
        }
    }

    /// The big-endian encoding of `d'`.
    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        self.0
    }

    /// Borrowed form of [`SecretKey::to_bytes`].
    pub fn as_bytes(&self) -> &[u8; SK_SIZE] {
        &self.0
    }

    /// The secret as a scalar. Valid by construction.
    pub(crate) fn scalar(&self) -> ScalarField {
        ScalarField::from_be_bytes_mod_order(&self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

impl PublicKey {
    /// Wrap 32 bytes without checking them.
    ///
    /// # Example
    ///
    /// ```
    /// use schnorr_sig::{verify, PublicKey, Signature};
    ///
    /// // Zero is out of range for an x-coordinate, so it is rejected on use.
    /// let pk = PublicKey::from_bytes([0u8; 32]);
    /// let sig = Signature::from_bytes(&[0u8; 64]);
    /// assert!(verify(&pk, b"msg", &sig).is_err());
    /// ```
    pub fn from_bytes(bytes: [u8; PK_SIZE]) -> Self {
        PublicKey(bytes)
    }

    /// Fails with `Size` unless `bytes` is 32 long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SchnorrError> {
        Ok(PublicKey(fixed("public key", bytes)?))
    }

    pub fn from_hex(text: &str) -> Result<Self, SchnorrError> {
        Self::from_slice(&hex_to_bytes(text)?)
    }

    /// The x-coordinate, big-endian.
    pub fn to_bytes(&self) -> [u8; PK_SIZE] {
        self.0
    }

    /// Borrowed form of [`PublicKey::to_bytes`].
    pub fn as_bytes(&self) -> &[u8; PK_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> Hex {
        Hex::encode(&self.0)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Keypair {
    /// Pair `secret` with its x-only public key.
    pub fn from_secret(secret: SecretKey) -> Self {
        let public = derive_public_key(&secret);
        Keypair { secret, public }
    }
}

/// `d'·G` for a validated secret key.
pub(crate) fn public_point(sk: &SecretKey) -> Affine {
    Affine::mul_generator(&sk.scalar())
}

/// The x-coordinate of `d'·G`.
///
/// The parity of the point is discarded here; signing normalizes it.
pub fn derive_public_key(sk: &SecretKey) -> PublicKey {
    // d' is nonzero and below n, so d'·G is finite
    PublicKey(public_point(sk).x.to_be_bytes())
}

/// Draw a secret key from `rng` and derive its public key.
pub fn generate_keypair<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Keypair, SchnorrError> {
    Ok(Keypair::from_secret(SecretKey::random(rng)?))
}
