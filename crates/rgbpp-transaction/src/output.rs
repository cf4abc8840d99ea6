//! Ledger cell output: capacity, lock script and optional type script.
//!
//! Provides the canonical molecule serialization hashed by the commitment.

use rgbpp_primitives::hex::serde_u64;
use rgbpp_primitives::molecule::{pack_table, unpack_table, MoleculeReader};
use rgbpp_script::Script;
use serde::{Deserialize, Serialize};

use crate::TransactionError;

/// A single output of a ledger transaction.
///
/// # Wire format
///
/// ```text
/// table CellOutput {
///     capacity: Uint64,
///     lock:     Script,
///     type_:    ScriptOpt,   // empty when absent
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellOutput {
    /// Occupied plus free capacity, in shannons.
    #[serde(with = "serde_u64")]
    pub capacity: u64,
    /// Lock script guarding the cell.
    pub lock: Script,
    /// Optional type script.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<Script>,
}

impl CellOutput {
    /// Create an output with no type script.
    pub fn new(capacity: u64, lock: Script) -> Self {
        CellOutput { capacity, lock, type_: None }
    }

    /// Serialize this output to its canonical molecule bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let capacity = self.capacity.to_le_bytes();
        let lock = self.lock.to_bytes();
        let type_ = self.type_.as_ref().map(Script::to_bytes).unwrap_or_default();
        pack_table(&[&capacity, &lock, &type_])
    }

    /// Parse an output from its canonical molecule bytes.
    ///
    /// # Arguments
    /// * `data` - A complete `CellOutput` table.
    ///
    /// # Returns
    /// `Ok(CellOutput)` on success, or an error if the table or any nested
    /// script is malformed.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TransactionError> {
        let fields = unpack_table(data, 3)?;

        let mut reader = MoleculeReader::new(fields[0]);
        let capacity = reader.read_u64_le()?;
        reader.finish()?;

        let lock = Script::from_bytes(fields[1])?;
        let type_ = if fields[2].is_empty() {
            None
        } else {
            Some(Script::from_bytes(fields[2])?)
        };

        Ok(CellOutput { capacity, lock, type_ })
    }
}
