//! Virtual ledger transaction.
//!
//! The virtual transaction is the ledger-side half of an RGB++ transfer: it
//! is assembled before the anchor-chain transaction exists, committed to by
//! hash inside that anchor transaction, and only then finalized on the ledger.

use rgbpp_primitives::hex::serde_prefixed_vec;
use serde::{Deserialize, Serialize};

use crate::input::{CellInput, OutPoint};
use crate::output::CellOutput;
use crate::TransactionError;

/// The subset of a ledger transaction covered by the RGB++ commitment.
///
/// `outputs[i]` pairs with `outputs_data[i]`; [`VirtualTransaction::validate`]
/// checks that both lists have the same length.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualTransaction {
    /// Cells consumed by the transaction.
    pub inputs: Vec<CellInput>,
    /// Cells created by the transaction.
    pub outputs: Vec<CellOutput>,
    /// Data of each created cell.
    #[serde(with = "serde_prefixed_vec")]
    pub outputs_data: Vec<Vec<u8>>,
}

impl VirtualTransaction {
    /// Create an empty virtual transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an input spending `previous_output`.
    pub fn add_input(&mut self, previous_output: OutPoint) {
        self.inputs.push(CellInput::new(previous_output));
    }

    /// Append an output together with its data, keeping both lists aligned.
    pub fn add_output(&mut self, output: CellOutput, data: Vec<u8>) {
        self.outputs.push(output);
        self.outputs_data.push(data);
    }

    /// Return the number of inputs.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Return the number of outputs.
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Check that every output has exactly one data entry.
    pub fn validate(&self) -> Result<(), TransactionError> {
        if self.outputs.len() != self.outputs_data.len() {
            return Err(TransactionError::StructuralMismatch {
                outputs: self.outputs.len(),
                outputs_data: self.outputs_data.len(),
            });
        }
        Ok(())
    }
}

/// A live cell as reported by a ledger indexer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexerCell {
    /// Where the cell lives.
    pub out_point: OutPoint,
    /// The cell itself.
    pub output: CellOutput,
    /// Cell data.
    #[serde(with = "rgbpp_primitives::hex::serde_prefixed")]
    pub output_data: Vec<u8>,
}
