//! RGB++ commitment computation.
//!
//! The commitment binds a virtual ledger transaction to the anchor-chain
//! transaction that carries it (in an `OP_RETURN` output). The on-ledger
//! lock script recomputes it during verification, so the pre-image layout
//! below is consensus-critical and must not change:
//!
//! 1. `"RGB++"` (ASCII tag)
//! 2. version, 2 bytes, currently `0x0000`
//! 3. input count and output count, one byte each
//! 4. each input's packed out point (36 bytes)
//! 5. each output's packed `CellOutput` followed by its raw data
//!
//! The commitment is SHA-256 applied twice over that pre-image.

use rgbpp_primitives::hash::Sha256Stream;
use rgbpp_primitives::hex::encode_hex;

use crate::transaction::VirtualTransaction;
use crate::TransactionError;

/// Domain-separation tag fed first into the commitment hash.
pub const COMMITMENT_TAG: &[u8] = b"RGB++";

/// Commitment scheme version.
pub const COMMITMENT_VERSION: [u8; 2] = [0x00, 0x00];

/// Largest input or output count the one-byte count fields can hold.
pub const MAX_COMMITTED_CELLS: usize = u8::MAX as usize;

/// Compute the RGB++ commitment of a virtual transaction.
///
/// # Arguments
/// * `tx` - The virtual transaction.
///
/// # Returns
/// The 32-byte commitment, or
/// - `StructuralMismatch` when `outputs` and `outputs_data` differ in length,
/// - `InvalidArgument` when there are more than 255 inputs or outputs.
pub fn calculate_commitment(tx: &VirtualTransaction) -> Result<[u8; 32], TransactionError> {
    let mut stream = Sha256Stream::new();
    write_preimage(tx, |chunk| stream.update(chunk))?;
    Ok(stream.finalize_double())
}

/// Compute the RGB++ commitment as `0x`-prefixed hex.
pub fn calculate_commitment_hex(tx: &VirtualTransaction) -> Result<String, TransactionError> {
    calculate_commitment(tx).map(|commitment| encode_hex(commitment))
}

/// Return the full commitment pre-image.
///
/// The commitment equals `sha256d(commitment_preimage(tx)?)`. Useful when
/// debugging a mismatch against the on-ledger verifier.
pub fn commitment_preimage(tx: &VirtualTransaction) -> Result<Vec<u8>, TransactionError> {
    let mut preimage = Vec::new();
    write_preimage(tx, |chunk| preimage.extend_from_slice(chunk))?;
    Ok(preimage)
}

fn write_preimage<F>(tx: &VirtualTransaction, mut sink: F) -> Result<(), TransactionError>
where
    F: FnMut(&[u8]),
{
    tx.validate()?;
    let input_count = count_byte("inputs", tx.input_count())?;
    let output_count = count_byte("outputs", tx.output_count())?;

    sink(COMMITMENT_TAG);
    sink(&COMMITMENT_VERSION[..]);
    sink(&[input_count, output_count][..]);

    for input in &tx.inputs {
        sink(input.previous_output.to_bytes().as_slice());
    }
    for (output, data) in tx.outputs.iter().zip(&tx.outputs_data) {
        sink(output.to_bytes().as_slice());
        sink(data.as_slice());
    }
    Ok(())
}

fn count_byte(kind: &str, count: usize) -> Result<u8, TransactionError> {
    u8::try_from(count).map_err(|_| {
        TransactionError::InvalidArgument(format!(
            "{} {} exceed the commitment limit of {}",
            count, kind, MAX_COMMITTED_CELLS
        ))
    })
}
