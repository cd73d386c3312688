use core::ops::{Add, Neg, Sub};

/// Bit access used by double-and-add multiplication.
pub trait ScalarBits {
    /// Number of significant bits (zero for the zero scalar).
    fn bit_len(&self) -> u64;
    fn bit(&self, index: u64) -> bool;
}

pub trait Group:
    Sized + Clone + PartialEq + Add<Output = Self> + Sub<Output = Self> + Neg<Output = Self>
{
    type Scalar: ScalarBits;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;
    fn add_point(&self, other: &Self) -> Self;

    #[inline]
    fn mul_generator(scalar: &Self::Scalar) -> Self {
        Self::generator().scalar_mul(scalar)
    }

    /// Left-to-right double-and-add.
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Self {
        let mut result = Self::identity();
        for i in (0..scalar.bit_len()).rev() {
            result = result.double();
            if scalar.bit(i) {
                result = result.add_point(self);
            }
        }
        result
    }

    fn mul_u64(&self, n: u64) -> Self {
        if n == 0 {
            return Self::identity();
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::identity();
        let mut temp = self.clone();
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result = result.add_point(&temp);
            }
            temp = temp.double();
            bits >>= 1;
        }

        result
    }

    fn multi_scalar_mul(points: &[Self], scalars: &[Self::Scalar]) -> Self {
        assert_eq!(
            points.len(),
            scalars.len(),
            "Points and scalars must have same length"
        );

        let mut result = Self::identity();
        for (point, scalar) in points.iter().zip(scalars.iter()) {
            result = result.add_point(&point.scalar_mul(scalar));
        }
        result
    }
}
