use crate::affine::Affine;
use crate::{BaseField, Group, ScalarField};
use core::ops::{Add, Neg, Sub};

/// Jacobian point on secp256k1.
/// Represents (X:Y:Z) with affine coordinates (x, y) = (X/Z^2, Y/Z^3).
/// The point at infinity is any point with Z = 0; the canonical one is (1:1:0).
#[derive(Clone, Debug)]
pub struct Projective {
    pub x: BaseField,
    pub y: BaseField,
    pub z: BaseField,
}

impl Projective {
    /// The point at infinity (identity element): (1:1:0)
    pub fn infinity() -> Self {
        Projective {
            x: BaseField::one(),
            y: BaseField::one(),
            z: BaseField::zero(),
        }
    }

    /// Create a new Jacobian point.
    pub fn new(x: BaseField, y: BaseField, z: BaseField) -> Self {
        Projective { x, y, z }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self) -> Affine {
        let Some(z_inv) = self.z.inverse() else {
            return Affine::infinity();
        };

        let z_inv2 = z_inv.square();
        let z_inv3 = &z_inv2 * &z_inv;
        let x = &self.x * &z_inv2;
        let y = &self.y * &z_inv3;

        Affine::new(x, y)
    }

    /// Convert from affine coordinates.
    pub fn from_affine(point: &Affine) -> Self {
        if point.is_infinity() {
            return Self::infinity();
        }

        Projective::new(point.x.clone(), point.y.clone(), BaseField::one())
    }

    /// Check if a point is on the curve: Y^2 = X^3 + 7*Z^6.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }

        let z2 = self.z.square();
        let z6 = &z2.square() * &z2;
        let lhs = self.y.square();
        let rhs = &(&self.x.square() * &self.x) + &(&BaseField::from_canonical_u64(7) * &z6);

        lhs == rhs
    }

    /// The standard generator G.
    pub fn generator() -> Self {
        Self::from_affine(&Affine::generator())
    }

    /// Point doubling for a = 0 (dbl-2009-l).
    pub fn double(&self) -> Self {
        if self.is_infinity() || self.y.is_zero() {
            return Self::infinity();
        }

        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();

        // D = 2*((X + B)^2 - A - C)
        let d = (&(&(&self.x + &b).square() - &a) - &c).double();
        // E = 3*A, F = E^2
        let e = &a.double() + &a;
        let f = e.square();

        // X3 = F - 2*D
        let x3 = &f - &d.double();
        // Y3 = E*(D - X3) - 8*C
        let eight_c = c.double().double().double();
        let y3 = &(&e * &(&d - &x3)) - &eight_c;
        // Z3 = 2*Y*Z
        let z3 = (&self.y * &self.z).double();

        Projective::new(x3, y3, z3)
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        if self.is_infinity() {
            return self.clone();
        }
        Projective::new(self.x.clone(), -&self.y, self.z.clone())
    }
}

impl PartialEq for Projective {
    /// Compares the represented points, not the coordinate triples.
    fn eq(&self, other: &Self) -> bool {
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        if &self.x * &z2z2 != &other.x * &z1z1 {
            return false;
        }
        &(&self.y * &z2z2) * &other.z == &(&other.y * &z1z1) * &self.z
    }
}

impl Eq for Projective {}

impl Group for Projective {
    type Scalar = ScalarField;

    #[inline]
    fn identity() -> Self {
        Self::infinity()
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    #[inline]
    fn generator() -> Self {
        Projective::generator()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }

    fn add_point(&self, other: &Self) -> Self {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = &self.x * &z2z2;
        let u2 = &other.x * &z1z1;
        let s1 = &(&self.y * &other.z) * &z2z2;
        let s2 = &(&other.y * &self.z) * &z1z1;

        if u1 == u2 {
            if s1 == s2 {
                return self.double();
            }
            return Self::infinity();
        }

        let h = &u2 - &u1;
        let r = &s2 - &s1;
        let h2 = h.square();
        let h3 = &h2 * &h;
        let u1h2 = &u1 * &h2;

        // X3 = R^2 - H^3 - 2*U1*H^2
        let x3 = &(&r.square() - &h3) - &u1h2.double();
        // Y3 = R*(U1*H^2 - X3) - S1*H^3
        let y3 = &(&r * &(&u1h2 - &x3)) - &(&s1 * &h3);
        // Z3 = H*Z1*Z2
        let z3 = &(&h * &self.z) * &other.z;

        Projective::new(x3, y3, z3)
    }
}

impl Add for Projective {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.add_point(&other)
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Projective {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.add_point(&other.negate())
    }
}

impl Neg for Projective {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinity() {
        let inf = Projective::infinity();
        assert!(inf.is_infinity());
        assert!(inf.is_on_curve());
        assert_eq!(inf.to_affine(), Affine::infinity());
    }

    #[test]
    fn test_generator_round_trip() {
        let g = Projective::generator();
        assert!(g.is_on_curve());
        assert_eq!(g.to_affine(), Affine::generator());
    }

    #[test]
    fn test_equality_ignores_representation() {
        let g = Projective::generator();
        // (X*l^2 : Y*l^3 : Z*l) is the same point for any nonzero l
        let l = BaseField::from_canonical_u64(77);
        let scaled = Projective::new(
            &g.x * &l.square(),
            &g.y * &(&l.square() * &l),
            &g.z * &l,
        );
        assert_eq!(g, scaled);
        assert!(scaled.is_on_curve());
    }

    #[test]
    fn test_affine_projective_addition_consistency() {
        let g_affine = Affine::generator();
        let g_projective = Projective::generator();

        let affine_sum = g_affine.clone() + g_affine.double();
        let projective_sum = g_projective.clone() + g_projective.double();

        assert_eq!(affine_sum, projective_sum.to_affine());
    }

    #[test]
    fn test_affine_projective_scalar_mul_consistency() {
        let g_affine = Affine::generator();
        let g_projective = Projective::generator();
        let scalar = ScalarField::from_canonical_u64(42);

        let affine_result = g_affine.scalar_mul(&scalar);
        let projective_result = g_projective.scalar_mul(&scalar);

        assert_eq!(affine_result, projective_result.to_affine());
    }

    #[test]
    fn test_add_inverse_is_infinity() {
        let g = Projective::generator().mul_u64(17);
        let neg = -g.clone();
        assert!((g + neg).is_infinity());
    }

    #[test]
    fn test_multi_scalar_mul() {
        let g = Projective::generator();
        let h = g.mul_u64(4);

        let a = ScalarField::from_canonical_u64(7);
        let b = ScalarField::from_canonical_u64(11);

        let result = <Projective as Group>::multi_scalar_mul(
            &[g.clone(), h.clone()],
            &[a.clone(), b.clone()],
        );
        let expected = g.scalar_mul(&a) + h.scalar_mul(&b);

        assert_eq!(result, expected);
        assert!(result.is_on_curve());
    }

    #[test]
    fn test_group_properties() {
        let g = Projective::generator();

        assert_eq!(g.double(), g.clone() + g.clone());

        let triple1 = g.clone() + g.clone() + g.clone();
        let triple2 = g.mul_u64(3);
        assert_eq!(triple1, triple2);

        let h = g.mul_u64(5);
        let neg_h = -h.clone();
        assert_eq!(h + neg_h, Projective::infinity());
    }
}
