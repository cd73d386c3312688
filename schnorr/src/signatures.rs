//! The 64-byte signature value.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{fixed, hex_to_bytes, Hex};
use crate::constants::SIG_SIZE;
use crate::errors::SchnorrError;

/// A BIP340 signature: the x-coordinate `r` of the nonce point followed by
/// the response scalar `s`, both 32-byte big-endian.
///
/// Parsing checks the length only. The ranges `r < p` and `s < n` are
/// checked by verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub r: [u8; 32],
    pub s: [u8; 32],
}

impl Signature {
    /// Split `r || s` into its halves.
    pub fn from_bytes(bytes: &[u8; SIG_SIZE]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Signature { r, s }
    }

    /// As [`Signature::from_bytes`], failing with `Size` unless `bytes` is 64 long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SchnorrError> {
        let bytes: [u8; SIG_SIZE] = fixed("signature", bytes)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Parse 128 hex digits.
    pub fn from_hex(text: &str) -> Result<Self, SchnorrError> {
        Self::from_slice(&hex_to_bytes(text)?)
    }

    /// `r || s`.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }

    pub fn to_hex(&self) -> Hex {
        Hex::encode(&self.to_bytes())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}
