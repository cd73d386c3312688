use rand::Rng;

use crate::{BaseField, ScalarField};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    /// Uniform sample by rejection of 32-byte big-endian draws.
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// As `random`, but never returns zero.
    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_random_field {
    ($name:ident) => {
        impl RandomField for $name {
            fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                loop {
                    let bytes: [u8; 32] = rng.random();
                    if let Some(value) = $name::from_be_bytes(&bytes) {
                        return value;
                    }
                }
            }

            fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self {
                loop {
                    let value = Self::random(rng);
                    if !value.is_zero() {
                        return value;
                    }
                }
            }
        }
    };
}

impl_random_field!(BaseField);
impl_random_field!(ScalarField);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let a = ScalarField::random(&mut StdRng::seed_from_u64(7));
        let b = ScalarField::random(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.as_biguint() < ScalarField::modulus());
    }

    #[test]
    fn test_nonzero() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..16 {
            assert!(!BaseField::random_nonzero(&mut rng).is_zero());
        }
    }
}
