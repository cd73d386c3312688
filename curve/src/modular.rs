//! Shared arithmetic for the two prime fields of the curve.
//!
//! Both `BaseField` (mod p) and `ScalarField` (mod n) are newtypes over a
//! `BigUint` kept in `[0, modulus)`. Every constructor reduces or rejects, so
//! the operators below can assume canonical inputs.

macro_rules! impl_prime_field {
    (@owned $name:ident, $op:ident, $method:ident) => {
        impl $op for $name {
            type Output = $name;

            #[inline]
            fn $method(self, rhs: $name) -> $name {
                (&self).$method(&rhs)
            }
        }

        impl<'b> $op<&'b $name> for $name {
            type Output = $name;

            #[inline]
            fn $method(self, rhs: &'b $name) -> $name {
                (&self).$method(rhs)
            }
        }
    };

    ($name:ident, $modulus:expr, $inv_exponent:expr) => {
        impl $name {
            /// Additive identity.
            #[inline]
            pub fn zero() -> Self {
                Self(BigUint::default())
            }

            /// Multiplicative identity.
            #[inline]
            pub fn one() -> Self {
                Self(BigUint::from(1u8))
            }

            /// The modulus of this field.
            #[inline]
            pub fn modulus() -> &'static BigUint {
                $modulus
            }

            /// Create an element from a small integer.
            #[inline]
            pub fn from_canonical_u64(val: u64) -> Self {
                Self(BigUint::from(val) % $modulus)
            }

            /// Create an element from an integer, reducing it modulo the field size.
            #[inline]
            pub fn from_biguint_mod_order(val: &BigUint) -> Self {
                Self(val % $modulus)
            }

            /// Create an element from an integer already in `[0, modulus)`.
            ///
            /// Returns `None` if the integer is not canonical.
            #[inline]
            pub fn from_canonical_biguint(val: BigUint) -> Option<Self> {
                if val < *$modulus {
                    Some(Self(val))
                } else {
                    None
                }
            }

            /// Decode a 32-byte big-endian integer, rejecting values `>= modulus`.
            pub fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
                Self::from_canonical_biguint(BigUint::from_bytes_be(bytes))
            }

            /// Decode a big-endian integer of any length, reducing it modulo the field size.
            pub fn from_be_bytes_mod_order(bytes: &[u8]) -> Self {
                Self(BigUint::from_bytes_be(bytes) % $modulus)
            }

            /// Big-endian 32-byte encoding, zero-padded on the left.
            pub fn to_be_bytes(&self) -> [u8; 32] {
                let raw = self.0.to_bytes_be();
                let mut out = [0u8; 32];
                out[32 - raw.len()..].copy_from_slice(&raw);
                out
            }

            /// The canonical integer representative.
            #[inline]
            pub fn as_biguint(&self) -> &BigUint {
                &self.0
            }

            #[inline]
            pub fn is_zero(&self) -> bool {
                self.0.bits() == 0
            }

            /// Parity of the canonical representative.
            #[inline]
            pub fn is_even(&self) -> bool {
                !self.0.bit(0)
            }

            #[inline]
            pub fn square(&self) -> Self {
                self * self
            }

            #[inline]
            pub fn double(&self) -> Self {
                self + self
            }

            /// `self^exp mod modulus`.
            #[inline]
            pub fn pow(&self, exp: &BigUint) -> Self {
                Self(self.0.modpow(exp, $modulus))
            }

            /// Multiplicative inverse via Fermat's little theorem; `None` for zero.
            pub fn inverse(&self) -> Option<Self> {
                if self.is_zero() {
                    return None;
                }
                Some(self.pow($inv_exponent))
            }
        }

        impl ScalarBits for $name {
            #[inline]
            fn bit_len(&self) -> u64 {
                self.0.bits()
            }

            #[inline]
            fn bit(&self, index: u64) -> bool {
                self.0.bit(index)
            }
        }

        impl<'a, 'b> Add<&'b $name> for &'a $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: &'b $name) -> $name {
                let sum = &self.0 + &rhs.0;
                if sum >= *$modulus {
                    $name(sum - $modulus)
                } else {
                    $name(sum)
                }
            }
        }

        impl<'a, 'b> Sub<&'b $name> for &'a $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: &'b $name) -> $name {
                if self.0 >= rhs.0 {
                    $name(&self.0 - &rhs.0)
                } else {
                    $name(&self.0 + $modulus - &rhs.0)
                }
            }
        }

        impl<'a, 'b> Mul<&'b $name> for &'a $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: &'b $name) -> $name {
                $name((&self.0 * &rhs.0) % $modulus)
            }
        }

        impl<'a> Neg for &'a $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> $name {
                if self.is_zero() {
                    $name::zero()
                } else {
                    $name($modulus - &self.0)
                }
            }
        }

        impl Neg for $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> $name {
                -&self
            }
        }

        impl_prime_field!(@owned $name, Add, add);
        impl_prime_field!(@owned $name, Sub, sub);
        impl_prime_field!(@owned $name, Mul, mul);
    };
}

pub(crate) use impl_prime_field;
