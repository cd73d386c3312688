use num_bigint::BigUint;
use schnorr_curve::{Affine, BaseField};

use crate::errors::SchnorrError;

/// Recover the even-y point with x-coordinate `x`.
///
/// Fails with `Range("x")` unless `0 < x < p`, and with `NotOnCurve` when
/// `x^3 + 7` has no square root.
pub fn lift_x(x: &BigUint) -> Result<Affine, SchnorrError> {
    let x = match BaseField::from_canonical_biguint(x.clone()) {
        Some(x) if !x.is_zero() => x,
        _ => return Err(SchnorrError::Range("x")),
    };

    let y = BaseField::sqrt(&Affine::curve_rhs(&x)).ok_or(SchnorrError::NotOnCurve)?;
    let y = if y.is_even() { y } else { -y };

    Ok(Affine::new(x, y))
}

/// As [`lift_x`] for a 32-byte big-endian coordinate.
pub(crate) fn lift_x_bytes(x: &[u8; 32]) -> Result<Affine, SchnorrError> {
    lift_x(&BigUint::from_bytes_be(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use schnorr_curve::params;

    #[test]
    fn test_lift_generator() {
        let g = Affine::generator();
        let lifted = lift_x(g.x.as_biguint()).unwrap();
        assert_eq!(lifted, g);
    }

    #[test]
    fn test_lift_selects_even_y() {
        for x in [1u32, 2, 3, 4, 6, 8] {
            let point = lift_x(&BigUint::from(x)).unwrap();
            assert!(point.is_on_curve(), "x = {x}");
            assert!(point.has_even_y(), "x = {x}");
        }
    }

    #[test]
    fn test_lift_rejects_non_residue() {
        for x in [5u32, 7, 9, 10, 11] {
            assert_eq!(lift_x(&BigUint::from(x)), Err(SchnorrError::NotOnCurve), "x = {x}");
        }
    }

    #[test]
    fn test_lift_boundaries_are_exclusive() {
        let p = &params().p;
        assert_eq!(lift_x(&BigUint::from(0u32)), Err(SchnorrError::Range("x")));
        assert_eq!(lift_x(p), Err(SchnorrError::Range("x")));
        assert_eq!(lift_x(&(p + 1u32)), Err(SchnorrError::Range("x")));
    }

    #[test]
    fn test_lift_odd_point_returns_negation() {
        let neg_g = Affine::generator().negate();
        assert!(!neg_g.has_even_y());
        assert_eq!(lift_x_bytes(&neg_g.x.to_be_bytes()).unwrap(), Affine::generator());
    }
}
