//! BIP340 verification, strict and soft.

use schnorr_curve::{double_scalar_mul_basepoint, BaseField, ScalarField};
use tracing::trace;

use crate::errors::SchnorrError;
use crate::keys::PublicKey;
use crate::lift::lift_x_bytes;
use crate::signatures::Signature;
use crate::tagged_hash::hash_challenge;

/// Strict verification.
///
/// Returns `Ok(false)` when the signature is well formed but does not
/// verify. Malformed input is an error: `Range("x")` or `NotOnCurve` for the
/// public key, `Range("r")` when `r >= p`, `Range("s")` when `s >= n`.
pub fn verify(pk: &PublicKey, msg: &[u8], sig: &Signature) -> Result<bool, SchnorrError> {
    let point = lift_x_bytes(pk.as_bytes())?;
    let r = BaseField::from_be_bytes(&sig.r).ok_or(SchnorrError::Range("r"))?;
    let s = ScalarField::from_be_bytes(&sig.s).ok_or(SchnorrError::Range("s"))?;

    let e = hash_challenge(&sig.r, pk.as_bytes(), msg);

    // R = s·G - e·P
    let candidate = double_scalar_mul_basepoint(&s, &-e, &point);

    // The point at infinity reports no even y.
    Ok(candidate.has_even_y() && candidate.x == r)
}

/// Strict verification over raw byte slices.
///
/// Adds `Size` errors for a public key that is not 32 bytes or a signature
/// that is not 64 bytes.
pub fn verify_bytes(pk: &[u8], msg: &[u8], sig: &[u8]) -> Result<bool, SchnorrError> {
    let pk = PublicKey::from_slice(pk)?;
    let sig = Signature::from_slice(sig)?;
    verify(&pk, msg, &sig)
}

/// Collapse a strict result into a plain answer.
pub(crate) fn soften(result: Result<bool, SchnorrError>) -> bool {
    match result {
        Ok(valid) => valid,
        Err(err) => {
            trace!(%err, "rejecting malformed signature input");
            false
        }
    }
}

/// `true` only for a well-formed, valid signature. Never fails.
pub fn soft_verify(pk: &[u8], msg: &[u8], sig: &[u8]) -> bool {
    soften(verify_bytes(pk, msg, sig))
}
