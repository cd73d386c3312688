//! Fixed-width big-endian integer encoding and hex presentation.
//!
//! Binary values (keys, signatures, messages) travel as byte slices. Hex is a
//! separate presentation type, [`Hex`], so text and bytes cannot be mixed up.

use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::errors::SchnorrError;

/// Big-endian unsigned interpretation of `bytes`. Any length is accepted.
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Big-endian encoding of `int`, left-padded with zeros to exactly `width` bytes.
///
/// Fails with [`SchnorrError::Range`] if `int` needs more than `width` bytes.
pub fn int_to_bytes(int: &BigUint, width: usize) -> Result<Vec<u8>, SchnorrError> {
    let needed = int.bits().div_ceil(8) as usize;
    if needed > width {
        return Err(SchnorrError::Range("integer width"));
    }

    let mut out = vec![0u8; width];
    if needed > 0 {
        out[width - needed..].copy_from_slice(&int.to_bytes_be());
    }
    Ok(out)
}

/// As [`int_to_bytes`] with width 32, returned as an array.
pub fn int_to_array(int: &BigUint) -> Result<[u8; 32], SchnorrError> {
    let bytes = int_to_bytes(int, 32)?;
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Lowercase hex encoding.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Case-insensitive hex decoding.
///
/// Fails with [`SchnorrError::Format`] on odd length or a non-hex digit.
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>, SchnorrError> {
    hex::decode(text).map_err(|e| SchnorrError::Format(e.to_string()))
}

/// Copy a slice into a fixed-size array, reporting a size error naming `what`.
pub(crate) fn fixed<const N: usize>(what: &'static str, bytes: &[u8]) -> Result<[u8; N], SchnorrError> {
    bytes
        .try_into()
        .map_err(|_| SchnorrError::size(what, N, bytes.len()))
}

/// Validated, lowercase hex text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hex(String);

impl Hex {
    /// Validate `text` as hex and normalize it to lowercase.
    pub fn parse(text: &str) -> Result<Self, SchnorrError> {
        hex_to_bytes(text)?;
        Ok(Hex(text.to_ascii_lowercase()))
    }

    /// Hex-encode `bytes`.
    pub fn encode(bytes: &[u8]) -> Self {
        Hex(bytes_to_hex(bytes))
    }

    /// Decode back to bytes.
    pub fn decode(&self) -> Result<Vec<u8>, SchnorrError> {
        hex_to_bytes(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Hex {
    type Err = SchnorrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hex::parse(s)
    }
}

impl TryFrom<String> for Hex {
    type Error = SchnorrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Hex::parse(&value)
    }
}

impl From<Hex> for String {
    fn from(value: Hex) -> Self {
        value.0
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bytes_to_int_big_endian() {
        assert_eq!(bytes_to_int(&[0x00]), BigUint::from(0u32));
        assert_eq!(bytes_to_int(&[0x00, 0xff]), BigUint::from(255u32));
        assert_eq!(bytes_to_int(&[0xff, 0xff]), BigUint::from(65535u32));
        assert_eq!(bytes_to_int(&[]), BigUint::from(0u32));
    }

    #[test]
    fn test_int_to_bytes_pads() {
        assert_eq!(int_to_bytes(&BigUint::from(0u32), 32).unwrap(), vec![0u8; 32]);

        let mut one = vec![0u8; 32];
        one[31] = 1;
        assert_eq!(int_to_bytes(&BigUint::from(1u32), 32).unwrap(), one);
        assert_eq!(int_to_bytes(&BigUint::from(0x0102u32), 3).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_int_to_bytes_rejects_overflow() {
        let too_big = BigUint::from(1u32) << 256;
        assert_eq!(
            int_to_bytes(&too_big, 32),
            Err(SchnorrError::Range("integer width"))
        );
        assert!(int_to_bytes(&BigUint::from(256u32), 1).is_err());
        assert_eq!(int_to_bytes(&BigUint::from(255u32), 1).unwrap(), vec![0xff]);
    }

    #[test]
    fn test_hex() {
        assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
        assert_eq!(hex_to_bytes("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex_to_bytes("DEADBEEF").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert!(matches!(hex_to_bytes("abc"), Err(SchnorrError::Format(_))));
        assert!(matches!(hex_to_bytes("zz"), Err(SchnorrError::Format(_))));
    }

    #[test]
    fn test_hex_type_normalizes() {
        let hex: Hex = "DeadBeef".parse().unwrap();
        assert_eq!(hex.as_str(), "deadbeef");
        assert_eq!(hex.decode().unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(Hex::encode(&[0xab]).to_string(), "ab");
        assert!(Hex::parse("0g").is_err());
    }

    #[test]
    fn test_fixed() {
        let ok: [u8; 2] = fixed("pair", &[1, 2]).unwrap();
        assert_eq!(ok, [1, 2]);
        assert_eq!(
            fixed::<2>("pair", &[1, 2, 3]),
            Err(SchnorrError::size("pair", 2, 3))
        );
    }

    proptest! {
        #[test]
        fn prop_int_round_trip(bytes in proptest::array::uniform32(any::<u8>())) {
            let n = bytes_to_int(&bytes);
            prop_assert_eq!(bytes_to_int(&int_to_bytes(&n, 32).unwrap()), n.clone());
            prop_assert_eq!(int_to_array(&n).unwrap(), bytes);
        }

        #[test]
        fn prop_hex_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
            prop_assert_eq!(hex_to_bytes(&bytes_to_hex(&bytes)).unwrap(), bytes);
        }
    }
}
