/// Ledger lock/type script.
///
/// A script is a predicate reference: a 32-byte code hash, a hash type that
/// says how the code hash is resolved, and opaque arguments. Its canonical
/// encoding is the molecule table
///
/// ```text
/// table Script {
///     code_hash: Byte32,
///     hash_type: byte,
///     args:      Bytes,
/// }
/// ```

use std::fmt;
use std::str::FromStr;

use rgbpp_primitives::hex::{encode_hex, serde_prefixed};
use rgbpp_primitives::molecule::{pack_fixvec, pack_table, unpack_fixvec, unpack_table};
use serde::{Deserialize, Serialize};

use crate::ScriptError;

/// How a script's `code_hash` is matched against cell deps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashType {
    /// Match the data hash, first VM version.
    Data,
    /// Match the type script hash.
    Type,
    /// Match the data hash, VM version 1.
    Data1,
    /// Match the data hash, VM version 2.
    Data2,
}

impl HashType {
    /// The molecule byte for this hash type.
    pub fn to_byte(self) -> u8 {
        match self {
            HashType::Data => 0,
            HashType::Type => 1,
            HashType::Data1 => 2,
            HashType::Data2 => 4,
        }
    }

    /// Decode a molecule hash type byte.
    pub fn from_byte(byte: u8) -> Result<Self, ScriptError> {
        match byte {
            0 => Ok(HashType::Data),
            1 => Ok(HashType::Type),
            2 => Ok(HashType::Data1),
            4 => Ok(HashType::Data2),
            other => Err(ScriptError::UnknownHashType(format!("0x{:02x}", other))),
        }
    }

    /// The lower-case name used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashType::Data => "data",
            HashType::Type => "type",
            HashType::Data1 => "data1",
            HashType::Data2 => "data2",
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashType {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data" => Ok(HashType::Data),
            "type" => Ok(HashType::Type),
            "data1" => Ok(HashType::Data1),
            "data2" => Ok(HashType::Data2),
            other => Err(ScriptError::UnknownHashType(other.to_string())),
        }
    }
}

/// A ledger script.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    /// Hash of the script code or of its type script, per `hash_type`.
    #[serde(with = "serde_prefixed")]
    pub code_hash: [u8; 32],
    /// How `code_hash` is interpreted.
    pub hash_type: HashType,
    /// Script arguments, opaque to everything but the script itself.
    #[serde(with = "serde_prefixed")]
    pub args: Vec<u8>,
}

impl Script {
    /// Create a script from its parts.
    pub fn new(code_hash: [u8; 32], hash_type: HashType, args: Vec<u8>) -> Self {
        Script { code_hash, hash_type, args }
    }

    /// Serialize into the canonical molecule table.
    ///
    /// # Returns
    /// The packed bytes: 16-byte header, 32-byte code hash, 1-byte hash
    /// type, then `args` as a byte fixvec.
    pub fn to_bytes(&self) -> Vec<u8> {
        let hash_type = [self.hash_type.to_byte()];
        let args = pack_fixvec(&self.args);
        pack_table(&[&self.code_hash, &hash_type, &args])
    }

    /// Parse a script from its molecule encoding.
    ///
    /// # Arguments
    /// * `data` - A complete `Script` table, with no trailing bytes.
    ///
    /// # Returns
    /// The decoded `Script`, or an error for malformed headers, a code hash
    /// that is not 32 bytes, or an unknown hash type.
    pub fn from_bytes(data: &[u8]) -> Result<Self, ScriptError> {
        let fields = unpack_table(data, 3)?;

        let code_hash: [u8; 32] = fields[0].try_into().map_err(|_| {
            ScriptError::InvalidScript(format!("code hash must be 32 bytes, got {}", fields[0].len()))
        })?;

        let hash_type = match fields[1] {
            [byte] => HashType::from_byte(*byte)?,
            other => {
                return Err(ScriptError::InvalidScript(format!(
                    "hash type must be 1 byte, got {}",
                    other.len()
                )))
            }
        };

        let args = unpack_fixvec(fields[2])?.to_vec();

        Ok(Script { code_hash, hash_type, args })
    }

    /// Encode the packed script as `0x` hex.
    pub fn to_hex(&self) -> String {
        encode_hex(self.to_bytes())
    }

    /// Whether two scripts share `(code_hash, hash_type)`, ignoring args.
    pub fn same_code(&self, other: &Script) -> bool {
        self.code_hash == other.code_hash && self.hash_type == other.hash_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secp_lock() -> Script {
        let mut code_hash = [0u8; 32];
        hex::decode_to_slice(
            "9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8",
            &mut code_hash,
        )
        .unwrap();
        Script::new(
            code_hash,
            HashType::Type,
            hex::decode("b39bbc0b3673c7d36450bc14cfcdad2d559c6c64").unwrap(),
        )
    }

    #[test]
    fn test_to_bytes_layout() {
        let script = secp_lock();
        let bytes = script.to_bytes();

        // 16 header + 32 code hash + 1 hash type + 4 length + 20 args.
        assert_eq!(bytes.len(), 73);
        assert_eq!(&bytes[0..4], &73u32.to_le_bytes());
        assert_eq!(&bytes[4..8], &16u32.to_le_bytes());
        assert_eq!(&bytes[8..12], &48u32.to_le_bytes());
        assert_eq!(&bytes[12..16], &49u32.to_le_bytes());
        assert_eq!(&bytes[16..48], &script.code_hash);
        assert_eq!(bytes[48], 1);
        assert_eq!(&bytes[49..53], &20u32.to_le_bytes());
        assert_eq!(&bytes[53..], &script.args[..]);
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(
            secp_lock().to_hex(),
            "0x490000001000000030000000310000009bd7e06f3ecf4be0f2fcd2188b23f1b9\
             fcc88e5d4b65a8637b17723bbda3cce80114000000b39bbc0b3673c7d36450bc\
             14cfcdad2d559c6c64"
        );
    }

    #[test]
    fn test_from_bytes_roundtrip() {
        let script = secp_lock();
        assert_eq!(Script::from_bytes(&script.to_bytes()).unwrap(), script);

        let empty_args = Script::new([7u8; 32], HashType::Data1, vec![]);
        assert_eq!(Script::from_bytes(&empty_args.to_bytes()).unwrap(), empty_args);
    }

    #[test]
    fn test_from_bytes_rejects_unknown_hash_type() {
        let mut bytes = secp_lock().to_bytes();
        bytes[48] = 3;
        assert!(matches!(
            Script::from_bytes(&bytes),
            Err(ScriptError::UnknownHashType(_))
        ));
    }

    #[test]
    fn test_from_bytes_rejects_truncated() {
        let bytes = secp_lock().to_bytes();
        assert!(Script::from_bytes(&bytes[..bytes.len() - 1]).is_err());
        assert!(Script::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_hash_type_bytes_and_names() {
        for ht in [HashType::Data, HashType::Type, HashType::Data1, HashType::Data2] {
            assert_eq!(HashType::from_byte(ht.to_byte()).unwrap(), ht);
            assert_eq!(ht.as_str().parse::<HashType>().unwrap(), ht);
        }
        assert!("data3".parse::<HashType>().is_err());
    }

    #[test]
    fn test_json() {
        let script = secp_lock();
        let json = serde_json::to_value(&script).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "codeHash": "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8",
                "hashType": "type",
                "args": "0xb39bbc0b3673c7d36450bc14cfcdad2d559c6c64"
            })
        );
        let back: Script = serde_json::from_value(json).unwrap();
        assert_eq!(back, script);
    }

    #[test]
    fn test_same_code_ignores_args() {
        let a = secp_lock();
        let mut b = a.clone();
        b.args = vec![0xff];
        assert!(a.same_code(&b));
        b.hash_type = HashType::Data;
        assert!(!a.same_code(&b));
    }
}
