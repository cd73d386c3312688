use crate::group::ScalarBits;
use crate::{Affine, Group, Projective, ScalarField};

/// Compute a * G + b * P with one shared doubling chain (Shamir's trick).
pub fn double_scalar_mul_basepoint(a: &ScalarField, b: &ScalarField, point: &Affine) -> Affine {
    let g = Projective::generator();
    let p = Projective::from_affine(point);
    let g_plus_p = g.add_point(&p);

    let bits = a.bit_len().max(b.bit_len());
    let mut result = Projective::infinity();

    for i in (0..bits).rev() {
        result = result.double();
        match (a.bit(i), b.bit(i)) {
            (true, true) => result = result.add_point(&g_plus_p),
            (true, false) => result = result.add_point(&g),
            (false, true) => result = result.add_point(&p),
            (false, false) => {}
        }
    }

    result.to_affine()
}
