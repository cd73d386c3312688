//! Error types for the Schnorr signature scheme.

use thiserror::Error;

/// Errors that can occur during key handling, signing and verification.
///
/// Cryptographic rejection of a well-formed signature is not an error:
/// strict verification returns `Ok(false)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchnorrError {
    /// Text that should be hex is not (odd length or a non-hex digit).
    #[error("invalid hex: {0}")]
    Format(String),

    /// A fixed-width byte string has the wrong length.
    #[error("{what} must be {expected} bytes, got {actual}")]
    Size {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A decoded integer lies outside its valid range.
    ///
    /// The payload names the quantity: the secret key, a signature half `r`
    /// or `s`, a public key coordinate `x`, or an integer that does not fit
    /// the requested width.
    #[error("{0} is out of range")]
    Range(&'static str),

    /// The x-coordinate has no matching point on the curve.
    #[error("x-coordinate is not on the curve")]
    NotOnCurve,

    /// The derived nonce reduced to zero. Retry with fresh auxiliary randomness.
    #[error("derived nonce is zero")]
    ZeroNonce,

    /// A freshly produced signature did not verify. This is an implementation defect.
    #[error("signature failed self-verification")]
    SelfVerification,

    /// The entropy source could not supply bytes.
    #[error("randomness source failed: {0}")]
    Randomness(String),

    /// An environment or configuration value could not be understood.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The accelerated backend reported an error with no counterpart above.
    #[error("secp256k1 backend: {0}")]
    Backend(String),
}

impl SchnorrError {
    pub(crate) fn size(what: &'static str, expected: usize, actual: usize) -> Self {
        SchnorrError::Size {
            what,
            expected,
            actual,
        }
    }
}
