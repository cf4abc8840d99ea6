//! Hex string helpers.
//!
//! Hex values crossing the public API are `0x`-prefixed, lower-case and of
//! even length. Inputs are accepted with or without the prefix.
//!
//! Anchor-chain transaction ids have two hex renderings: the natural order
//! used inside raw transactions and for hashing, and the reversed display
//! order used when showing or searching for an id. [`reverse_hex`] converts
//! between the two.

use crate::PrimitivesError;

/// The prefix carried by canonical hex strings.
pub const HEX_PREFIX: &str = "0x";

/// Ensure a hex string carries the `0x` prefix.
pub fn append_0x(hex: &str) -> String {
    if hex.starts_with(HEX_PREFIX) {
        hex.to_string()
    } else {
        format!("{}{}", HEX_PREFIX, hex)
    }
}

/// Strip a leading `0x` prefix if present.
pub fn remove_0x(hex: &str) -> &str {
    hex.strip_prefix(HEX_PREFIX).unwrap_or(hex)
}

/// Decode a hex string with or without the `0x` prefix.
///
/// # Arguments
/// * `hex` - Even-length hex string; mixed case is accepted.
///
/// # Returns
/// The decoded bytes, or `InvalidHex` for odd lengths or non-hex characters.
pub fn decode_hex(hex: &str) -> Result<Vec<u8>, PrimitivesError> {
    Ok(::hex::decode(remove_0x(hex))?)
}

/// Encode bytes as a canonical `0x`-prefixed lower-case hex string.
pub fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("{}{}", HEX_PREFIX, ::hex::encode(bytes))
}

/// Reverse the byte order of a hex string.
///
/// Used to switch a transaction id between display and natural order.
///
/// # Arguments
/// * `hex` - Hex string with or without prefix.
///
/// # Returns
/// The byte-reversed value as a canonical prefixed hex string.
pub fn reverse_hex(hex: &str) -> Result<String, PrimitivesError> {
    let mut bytes = decode_hex(hex)?;
    bytes.reverse();
    Ok(encode_hex(bytes))
}

/// Encode a `u32` as 4 little-endian bytes rendered as unprefixed hex.
///
/// `u32_to_le(1)` is `"01000000"`.
pub fn u32_to_le(value: u32) -> String {
    ::hex::encode(value.to_le_bytes())
}

/// Hex-encode the UTF-8 bytes of a string, with prefix.
pub fn utf8_to_hex(text: &str) -> String {
    encode_hex(text.as_bytes())
}

/// Serde adapter for byte containers rendered as `0x` hex strings.
///
/// Works for any `T` that exposes its bytes and can be rebuilt from a
/// `Vec<u8>`, so both `Vec<u8>` and `[u8; N]` fields can use it:
///
/// ```ignore
/// #[serde(with = "rgbpp_primitives::hex::serde_prefixed")]
/// pub code_hash: [u8; 32],
/// ```
pub mod serde_prefixed {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        serializer.serialize_str(&super::encode_hex(value.as_ref()))
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: TryFrom<Vec<u8>>,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = super::decode_hex(&s).map_err(D::Error::custom)?;
        let len = bytes.len();
        T::try_from(bytes).map_err(|_| D::Error::custom(format!("unexpected byte length {}", len)))
    }
}

/// Serde adapter for a list of `0x` hex byte strings, as used for
/// `outputsData`.
pub mod serde_prefixed_vec {
    use serde::de::Error;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(values: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&super::encode_hex(value))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<String>::deserialize(deserializer)?;
        items
            .iter()
            .map(|s| super::decode_hex(s).map_err(D::Error::custom))
            .collect()
    }
}

/// Serde adapter for `u64` values rendered as `0x` hex quantities
/// (`"0x2540be400"`), the ledger RPC convention for capacities.
pub mod serde_u64 {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{}{:x}", super::HEX_PREFIX, value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let digits = super::remove_0x(&s);
        if digits.is_empty() {
            return Err(D::Error::custom("empty hex quantity"));
        }
        u64::from_str_radix(digits, 16).map_err(D::Error::custom)
    }
}

/// Serde adapter for `u32` hex quantities, e.g. out point indexes.
pub mod serde_u32 {
    use serde::de::Error;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::serde_u64::serialize(&u64::from(*value), serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = super::serde_u64::deserialize(deserializer)?;
        u32::try_from(value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_helpers() {
        assert_eq!(append_0x("abcd"), "0xabcd");
        assert_eq!(append_0x("0xabcd"), "0xabcd");
        assert_eq!(remove_0x("0xabcd"), "abcd");
        assert_eq!(remove_0x("abcd"), "abcd");
        assert_eq!(remove_0x(""), "");
    }

    #[test]
    fn test_decode_hex_accepts_both_forms() {
        assert_eq!(decode_hex("0x0102ff").unwrap(), vec![0x01, 0x02, 0xff]);
        assert_eq!(decode_hex("0102FF").unwrap(), vec![0x01, 0x02, 0xff]);
        assert_eq!(decode_hex("0x").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_hex_rejects_odd_and_bad_chars() {
        assert!(matches!(decode_hex("0x123"), Err(PrimitivesError::InvalidHex(_))));
        assert!(matches!(decode_hex("zz"), Err(PrimitivesError::InvalidHex(_))));
    }

    #[test]
    fn test_reverse_hex() {
        assert_eq!(reverse_hex("0x010203").unwrap(), "0x030201");
        assert_eq!(reverse_hex("A0B1").unwrap(), "0xb1a0");
        // Reversing twice is the identity on canonical input.
        let txid = "0x4ff1855b64b309afa19a8b9be3d4da99dcb18b083b65d2d851662995c7d99e7a";
        assert_eq!(reverse_hex(&reverse_hex(txid).unwrap()).unwrap(), txid);
    }

    #[test]
    fn test_u32_to_le() {
        assert_eq!(u32_to_le(0), "00000000");
        assert_eq!(u32_to_le(1), "01000000");
        assert_eq!(u32_to_le(0x12345678), "78563412");
        assert_eq!(u32_to_le(u32::MAX), "ffffffff");
    }

    #[test]
    fn test_utf8_to_hex() {
        assert_eq!(utf8_to_hex("RGB++"), "0x5247422b2b");
    }

    #[test]
    fn test_serde_adapters() {
        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
        struct Sample {
            #[serde(with = "serde_prefixed")]
            fixed: [u8; 2],
            #[serde(with = "serde_prefixed")]
            bytes: Vec<u8>,
            #[serde(with = "serde_prefixed_vec")]
            list: Vec<Vec<u8>>,
            #[serde(with = "serde_u64")]
            amount: u64,
        }

        let sample = Sample {
            fixed: [0xab, 0xcd],
            bytes: vec![],
            list: vec![vec![0x01], vec![]],
            amount: 10_000_000_000,
        };
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(
            json,
            r#"{"fixed":"0xabcd","bytes":"0x","list":["0x01","0x"],"amount":"0x2540be400"}"#
        );
        let back: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);

        // Wrong fixed length is rejected.
        let bad = r#"{"fixed":"0xabcdef","bytes":"0x","list":[],"amount":"0x0"}"#;
        assert!(serde_json::from_str::<Sample>(bad).is_err());
    }
}
