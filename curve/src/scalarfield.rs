//! Scalar field of secp256k1: integers modulo the group order
//! n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141.

use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;

use crate::group::ScalarBits;
use crate::modular::impl_prime_field;
use crate::params::params;

/// Scalar field element, always held in canonical form `[0, n)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScalarField(BigUint);

impl_prime_field!(ScalarField, &params().n, &params().n_minus_two);
