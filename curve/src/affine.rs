use crate::{params, BaseField, Group, Projective, ScalarField};
use core::ops::{Add, Neg, Sub};

/// Affine point on secp256k1.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Affine {
    /// The x-coordinate of the point
    pub x: BaseField,
    /// The y-coordinate of the point
    pub y: BaseField,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl Affine {
    /// Curve coefficient `b = 7` (the `a` coefficient is zero).
    #[inline]
    fn curve_b() -> BaseField {
        BaseField::from_canonical_u64(7)
    }

    /// The point at infinity (identity element)
    pub fn infinity() -> Self {
        Affine {
            x: BaseField::zero(),
            y: BaseField::zero(),
            is_infinity: true,
        }
    }

    /// Create a new affine point. No curve membership check is made.
    pub fn new(x: BaseField, y: BaseField) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// `x^3 + 7`, the right-hand side of the curve equation.
    pub fn curve_rhs(x: &BaseField) -> BaseField {
        &(&x.square() * x) + &Self::curve_b()
    }

    /// Check if a point is on the curve: y^2 = x^3 + 7.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity {
            return true;
        }
        self.y.square() == Self::curve_rhs(&self.x)
    }

    /// The standard generator G.
    pub fn generator() -> Self {
        let params = params();
        Affine::new(
            BaseField::from_biguint_mod_order(&params.gx),
            BaseField::from_biguint_mod_order(&params.gy),
        )
    }

    /// True iff this is a finite point whose y-coordinate is even.
    #[inline]
    pub fn has_even_y(&self) -> bool {
        !self.is_infinity && self.y.is_even()
    }

    /// Big-endian x-coordinate, or `None` for the point at infinity.
    pub fn x_bytes(&self) -> Option<[u8; 32]> {
        if self.is_infinity {
            return None;
        }
        Some(self.x.to_be_bytes())
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        if self.is_infinity {
            return self.clone();
        }

        // If y = 0, then 2P = O
        let Some(inv_2y) = self.y.double().inverse() else {
            return Self::infinity();
        };

        // λ = 3x^2 / 2y
        let x2 = self.x.square();
        let three_x2 = &x2.double() + &x2;
        let lambda = &three_x2 * &inv_2y;

        // x_r = λ^2 - 2x
        let x_r = &lambda.square() - &self.x.double();

        // y_r = λ(x - x_r) - y
        let y_r = &(&lambda * &(&self.x - &x_r)) - &self.y;

        Affine::new(x_r, y_r)
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return self.clone();
        }
        Affine::new(self.x.clone(), -&self.y)
    }

    /// Multiply the generator by `scalar`.
    pub fn mul_generator(scalar: &ScalarField) -> Self {
        Projective::generator().scalar_mul(scalar).to_affine()
    }
}

impl Group for Affine {
    type Scalar = ScalarField;

    #[inline]
    fn identity() -> Self {
        Self::infinity()
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity
    }

    #[inline]
    fn generator() -> Self {
        Affine::generator()
    }

    #[inline]
    fn mul_generator(scalar: &ScalarField) -> Self {
        Affine::mul_generator(scalar)
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }

    /// Runs in Jacobian coordinates to avoid an inversion per step.
    fn scalar_mul(&self, scalar: &ScalarField) -> Self {
        Projective::from_affine(self).scalar_mul(scalar).to_affine()
    }

    fn add_point(&self, other: &Self) -> Self {
        // Handle infinity cases
        if self.is_infinity {
            return other.clone();
        }
        if other.is_infinity {
            return self.clone();
        }

        // Check if points are the same
        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            } else {
                // Points are inverses, return infinity
                return Self::infinity();
            }
        }

        // λ = (y2 - y1) / (x2 - x1)
        let numerator = &other.y - &self.y;
        let Some(inv_dx) = (&other.x - &self.x).inverse() else {
            return Self::infinity();
        };
        let lambda = &numerator * &inv_dx;

        // x_r = λ^2 - x1 - x2
        let x_r = &(&lambda.square() - &self.x) - &other.x;

        // y_r = λ(x1 - x_r) - y1
        let y_r = &(&lambda * &(&self.x - &x_r)) - &self.y;

        Affine::new(x_r, y_r)
    }
}

impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.add_point(&other)
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.add_point(&other.negate())
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}
