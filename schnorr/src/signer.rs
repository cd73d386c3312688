//! BIP340 signing.

use schnorr_curve::{Affine, ScalarField};
use tracing::error;

use crate::constants::TAG_NONCE;
use crate::errors::SchnorrError;
use crate::keys::{public_point, PublicKey, SecretKey};
use crate::signatures::Signature;
use crate::tagged_hash::{hash_challenge, tagged_hash_parts, Tag};
use crate::verifier::verify;

/// Sign `msg` with `sk`, mixing `aux` into the nonce.
///
/// The same `(sk, msg, aux)` always yields the same signature. Every
/// signature is verified against the signer's own public key before it is
/// returned; a failure there is reported as `SelfVerification`.
pub fn sign(sk: &SecretKey, msg: &[u8], aux: &[u8; 32]) -> Result<Signature, SchnorrError> {
    let (d, px) = normalized_secret(sk)?;

    let t = xor(&d.to_be_bytes(), &Tag::Aux.hash(aux));
    let nonce_hash = tagged_hash_parts(TAG_NONCE, [&t[..], &px[..], msg]);
    let k0 = ScalarField::from_be_bytes_mod_order(&nonce_hash);
    if k0.is_zero() {
        return Err(SchnorrError::ZeroNonce);
    }

    let (k, rx) = even_y_scalar(k0).ok_or(SchnorrError::ZeroNonce)?;
    let e = hash_challenge(&rx, &px, msg);
    let s = &k + &(&e * &d);

    let sig = Signature {
        r: rx,
        s: s.to_be_bytes(),
    };

    if !matches!(verify(&PublicKey::from_bytes(px), msg, &sig), Ok(true)) {
        error!("freshly produced signature failed self-verification");
        return Err(SchnorrError::SelfVerification);
    }

    Ok(sig)
}

/// The secret scalar adjusted so that `d·G` has even y, and that point's x.
fn normalized_secret(sk: &SecretKey) -> Result<(ScalarField, [u8; 32]), SchnorrError> {
    let d0 = sk.scalar();
    let point = public_point(sk);
    let px = point.x_bytes().ok_or(SchnorrError::Range("secret key"))?;
    let d = if point.has_even_y() { d0 } else { -d0 };
    Ok((d, px))
}

/// `k` or `n - k`, whichever multiplies G to an even-y point, with that x.
fn even_y_scalar(k: ScalarField) -> Option<(ScalarField, [u8; 32])> {
    let point = Affine::mul_generator(&k);
    let x = point.x_bytes()?;
    if point.has_even_y() {
        Some((k, x))
    } else {
        Some((-k, x))
    }
}

fn xor(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b)) {
        *o = x ^ y;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::derive_public_key;

    fn key(last: u8) -> SecretKey {
        let mut bytes = [0u8; 32];
        bytes[31] = last;
        SecretKey::from_bytes(bytes).unwrap()
    }

    #[test]
    fn test_sign_is_deterministic_in_aux() {
        let sk = key(3);
        let a = sign(&sk, b"msg", &[0u8; 32]).unwrap();
        let b = sign(&sk, b"msg", &[0u8; 32]).unwrap();
        let c = sign(&sk, b"msg", &[1u8; 32]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.r.len() + a.s.len(), 64);
    }

    #[test]
    fn test_signature_verifies_under_derived_key() {
        let sk = key(42);
        let sig = sign(&sk, b"", &[9u8; 32]).unwrap();
        assert_eq!(verify(&derive_public_key(&sk), b"", &sig), Ok(true));
    }

    #[test]
    fn test_normalized_secret_has_even_point() {
        for last in 1..=8u8 {
            let (d, px) = normalized_secret(&key(last)).unwrap();
            let point = Affine::mul_generator(&d);
            assert!(point.has_even_y());
            assert_eq!(point.x_bytes(), Some(px));
        }
    }

    #[test]
    fn test_xor() {
        let a = [0b1100u8; 32];
        let b = [0b1010u8; 32];
        assert_eq!(xor(&a, &b), [0b0110u8; 32]);
        assert_eq!(xor(&a, &a), [0u8; 32]);
    }
}
