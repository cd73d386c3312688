// secp256k1 (SEC 2, section 2.4.1): y^2 = x^3 + 7 over GF(p)
// p = 2^256 - 2^32 - 977
// n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141 (cofactor 1)
// G = (0x79be667e...16f81798, 0x483ada77...fb10d4b8)

use std::sync::LazyLock;

use num_bigint::BigUint;

/// Big-endian encoding of the field prime `p`.
pub const FIELD_PRIME_BYTES: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f,
];

/// Big-endian encoding of the group order `n`.
pub const ORDER_BYTES: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

const GENERATOR_X_BYTES: [u8; 32] = [
    0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b, 0x07,
    0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98,
];

const GENERATOR_Y_BYTES: [u8; 32] = [
    0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65, 0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08, 0xa8,
    0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19, 0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10, 0xd4, 0xb8,
];

/// Width in bytes of field elements, scalars and x-coordinates.
pub const BYTE_LENGTH: usize = 32;

/// Curve constants, built once and shared read-only for the life of the process.
#[derive(Debug)]
pub struct CurveParams {
    /// Field prime `p`.
    pub p: BigUint,
    /// Group order `n`.
    pub n: BigUint,
    /// Curve coefficient `b = 7`.
    pub b: BigUint,
    /// Affine x-coordinate of the generator.
    pub gx: BigUint,
    /// Affine y-coordinate of the generator.
    pub gy: BigUint,
    /// `(p + 1) / 4`, the square-root exponent valid because `p = 3 mod 4`.
    pub sqrt_exponent: BigUint,
    /// `p - 2`, the Fermat inversion exponent in the base field.
    pub p_minus_two: BigUint,
    /// `n - 2`, the Fermat inversion exponent in the scalar field.
    pub n_minus_two: BigUint,
}

static PARAMS: LazyLock<CurveParams> = LazyLock::new(|| {
    let p = BigUint::from_bytes_be(&FIELD_PRIME_BYTES);
    let n = BigUint::from_bytes_be(&ORDER_BYTES);
    let sqrt_exponent = (&p + 1u32) >> 2;
    let p_minus_two = &p - 2u32;
    let n_minus_two = &n - 2u32;
    CurveParams {
        b: BigUint::from(7u32),
        gx: BigUint::from_bytes_be(&GENERATOR_X_BYTES),
        gy: BigUint::from_bytes_be(&GENERATOR_Y_BYTES),
        sqrt_exponent,
        p_minus_two,
        n_minus_two,
        p,
        n,
    }
});

/// Returns the process-wide secp256k1 parameters.
#[inline]
pub fn params() -> &'static CurveParams {
    &PARAMS
}
