//! Out points and cell inputs.
//!
//! An out point names a live cell by the ledger transaction that created it
//! and the output index within that transaction.

use rgbpp_primitives::hex::{serde_prefixed, serde_u32, serde_u64};
use rgbpp_primitives::molecule::{MoleculeReader, MoleculeWriter};
use serde::{Deserialize, Serialize};

use crate::TransactionError;

/// Packed size of an [`OutPoint`].
pub const OUT_POINT_SIZE: usize = 36;

/// Reference to a cell created by an earlier ledger transaction.
///
/// # Wire format
///
/// | Field    | Size         |
/// |----------|--------------|
/// | tx_hash  | 32 bytes     |
/// | index    | 4 bytes (LE) |
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutPoint {
    /// Ledger transaction hash, as the ledger prints it.
    #[serde(with = "serde_prefixed")]
    pub tx_hash: [u8; 32],
    /// Output index within that transaction.
    #[serde(with = "serde_u32")]
    pub index: u32,
}

impl OutPoint {
    /// Create an out point.
    pub fn new(tx_hash: [u8; 32], index: u32) -> Self {
        OutPoint { tx_hash, index }
    }

    /// Serialize into a `MoleculeWriter`.
    pub fn write_to(&self, writer: &mut MoleculeWriter) {
        writer.write_bytes(&self.tx_hash);
        writer.write_u32_le(self.index);
    }

    /// Serialize to the 36-byte canonical struct.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = MoleculeWriter::with_capacity(OUT_POINT_SIZE);
        self.write_to(&mut writer);
        writer.into_bytes()
    }

    /// Parse the 36-byte canonical struct.
    ///
    /// # Arguments
    /// * `data` - Exactly 36 bytes.
    ///
    /// # Returns
    /// The decoded `OutPoint`, or a `SerializationError` on any other length.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TransactionError> {
        if data.len() != OUT_POINT_SIZE {
            return Err(TransactionError::SerializationError(format!(
                "out point must be {} bytes, got {}",
                OUT_POINT_SIZE,
                data.len()
            )));
        }
        let mut reader = MoleculeReader::new(data);
        let tx_hash = reader.read_array::<32>()?;
        let index = reader.read_u32_le()?;
        Ok(OutPoint { tx_hash, index })
    }
}

/// A ledger transaction input.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellInput {
    /// The cell being consumed.
    pub previous_output: OutPoint,
    /// Relative/absolute since constraint; not part of the commitment.
    #[serde(with = "serde_u64", default)]
    pub since: u64,
}

impl CellInput {
    /// Create an input spending `previous_output` with no since constraint.
    pub fn new(previous_output: OutPoint) -> Self {
        CellInput { previous_output, since: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_point_layout() {
        let out_point = OutPoint::new([0xab; 32], 0x0102_0304);
        let bytes = out_point.to_bytes();
        assert_eq!(bytes.len(), OUT_POINT_SIZE);
        assert_eq!(&bytes[..32], &[0xab; 32]);
        assert_eq!(&bytes[32..], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(OutPoint::from_bytes(&bytes).unwrap(), out_point);
    }

    #[test]
    fn test_out_point_rejects_wrong_length() {
        assert!(OutPoint::from_bytes(&[0u8; 35]).is_err());
        assert!(OutPoint::from_bytes(&[0u8; 37]).is_err());
    }

    #[test]
    fn test_cell_input_json() {
        let json = serde_json::json!({
            "previousOutput": {
                "txHash": format!("0x{}", "11".repeat(32)),
                "index": "0x1"
            },
            "since": "0x0"
        });
        let input: CellInput = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(input.previous_output.tx_hash, [0x11; 32]);
        assert_eq!(input.previous_output.index, 1);
        assert_eq!(serde_json::to_value(&input).unwrap(), json);

        // `since` may be omitted.
        let without_since = serde_json::json!({
            "previousOutput": { "txHash": format!("0x{}", "11".repeat(32)), "index": "0x0" }
        });
        let input: CellInput = serde_json::from_value(without_since).unwrap();
        assert_eq!(input.since, 0);
    }
}
