//! Domain-separated SHA-256.

use schnorr_curve::ScalarField;
use sha2::{Digest, Sha256};

use crate::constants::{TAG_AUX, TAG_CHALLENGE, TAG_NONCE};

/// The three hash domains used by signing and verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Aux,
    Nonce,
    Challenge,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Aux => TAG_AUX,
            Tag::Nonce => TAG_NONCE,
            Tag::Challenge => TAG_CHALLENGE,
        }
    }

    pub fn hash(self, msg: &[u8]) -> [u8; 32] {
        tagged_hash(self.name(), msg)
    }
}

/// `SHA256(SHA256(tag) || SHA256(tag) || msg)` with `tag` taken as UTF-8.
pub fn tagged_hash(tag: &str, msg: &[u8]) -> [u8; 32] {
    tagged_hash_parts(tag, [msg])
}

/// As [`tagged_hash`], with the message supplied as consecutive pieces.
pub fn tagged_hash_parts<'a, I>(tag: &str, parts: I) -> [u8; 32]
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let tag_hash = Sha256::digest(tag.as_bytes());

    let mut hasher = Sha256::new();
    hasher.update(tag_hash);
    hasher.update(tag_hash);
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Fiat-Shamir challenge `e = H_challenge(r || px || msg) mod n`.
pub(crate) fn hash_challenge(r: &[u8; 32], px: &[u8; 32], msg: &[u8]) -> ScalarField {
    let digest = tagged_hash_parts(Tag::Challenge.name(), [&r[..], &px[..], msg]);
    ScalarField::from_be_bytes_mod_order(&digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::hex_to_bytes;

    fn digest(hex: &str) -> [u8; 32] {
        hex_to_bytes(hex).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_known_digests() {
        assert_eq!(
            tagged_hash("BIP0340/challenge", b""),
            digest("c216d352f5818b7b4beacd4ae0a26fe888080823d2a598856661bcd54f1b3713")
        );
        assert_eq!(
            tagged_hash("BIP0340/aux", &[0u8; 32]),
            digest("54f169cfc9e2e5727480441f90ba25c488f461c70b5ea5dcaaf7af69270aa514")
        );
        assert_eq!(
            tagged_hash("schnorr-sig", b"hello world"),
            digest("84d9b8816f29df1abdc48ba09986b79890e21d3d7d1254f57c41afeecd5768e7")
        );
    }

    #[test]
    fn test_tag_enum_matches_free_function() {
        assert_eq!(Tag::Aux.hash(&[0u8; 32]), tagged_hash("BIP0340/aux", &[0u8; 32]));
        assert_eq!(Tag::Nonce.name(), "BIP0340/nonce");
        assert_eq!(Tag::Challenge.name(), "BIP0340/challenge");
    }

    #[test]
    fn test_parts_equal_concatenation() {
        let whole = tagged_hash("t", b"abcdef");
        let split = tagged_hash_parts("t", [&b"ab"[..], &b""[..], &b"cdef"[..]]);
        assert_eq!(whole, split);
    }

    #[test]
    fn test_single_bit_changes_output() {
        let base = tagged_hash("BIP0340/nonce", b"message");
        assert_ne!(base, tagged_hash("BIP0340/nonce", b"messagf"));
        assert_ne!(base, tagged_hash("BIP0340/nonc", b"message"));
        assert_ne!(base, tagged_hash("BIP0340/aux", b"message"));
    }
}
