//! secp256k1 group arithmetic over arbitrary-precision integers.
//!
//! This crate provides the curve `y^2 = x^3 + 7` over the prime field of
//! size `p = 2^256 - 2^32 - 977`: base and scalar field elements, affine and
//! Jacobian points, and helpers for random sampling. The curve parameters are
//! built once on first use and are read-only afterwards.
//!
//! Arithmetic is variable-time. It is meant as a readable reference, not as a
//! hardened backend.

mod affine;
mod basefield;
mod group;
mod modular;
mod msm;
mod params;
mod projective;
mod random;
mod scalarfield;

pub use affine::Affine;
pub use basefield::BaseField;
pub use group::{Group, ScalarBits};
pub use msm::double_scalar_mul_basepoint;
pub use params::{params, CurveParams, BYTE_LENGTH, FIELD_PRIME_BYTES, ORDER_BYTES};
pub use projective::Projective;
pub use random::RandomField;
pub use scalarfield::ScalarField;
