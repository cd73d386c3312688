//! Base field of secp256k1: integers modulo p = 2^256 - 2^32 - 977.

use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;

use crate::group::ScalarBits;
use crate::modular::impl_prime_field;
use crate::params::params;

/// Element of GF(p), always held in canonical form `[0, p)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BaseField(BigUint);

impl_prime_field!(BaseField, &params().p, &params().p_minus_two);

impl BaseField {
    /// Square root using the `(p + 1) / 4` exponent.
    ///
    /// Returns `None` when `self` is not a quadratic residue. When a root
    /// exists the returned one is whichever the exponentiation yields; callers
    /// choose parity themselves.
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.pow(&params().sqrt_exponent);
        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_wraps_at_modulus() {
        let minus_one = -BaseField::one();
        assert_eq!(minus_one.clone() + BaseField::one(), BaseField::zero());
        assert_eq!(minus_one + BaseField::from_canonical_u64(2), BaseField::one());
    }

    #[test]
    fn test_sub_borrows_modulus() {
        let r = BaseField::from_canonical_u64(3) - BaseField::from_canonical_u64(5);
        assert_eq!(r, -BaseField::from_canonical_u64(2));
    }

    #[test]
    fn test_inverse() {
        let a = BaseField::from_canonical_u64(123456789);
        let inv = a.inverse().expect("nonzero");
        assert_eq!(a * inv, BaseField::one());
        assert!(BaseField::zero().inverse().is_none());
    }

    #[test]
    fn test_sqrt_of_square() {
        let a = BaseField::from_canonical_u64(0xdead_beef);
        let root = a.square().sqrt().expect("square has a root");
        assert!(root == a || root == -a);
    }

    #[test]
    fn test_sqrt_non_residue() {
        // 5^3 + 7 = 132 is not a square mod p
        assert!(BaseField::from_canonical_u64(132).sqrt().is_none());
    }

    #[test]
    fn test_be_bytes_rejects_modulus() {
        let p = params().p.to_bytes_be();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&p);
        assert!(BaseField::from_be_bytes(&bytes).is_none());

        let one = BaseField::one().to_be_bytes();
        assert_eq!(one[31], 1);
        assert_eq!(BaseField::from_be_bytes(&one), Some(BaseField::one()));
    }
}
