/// RGB++ binding layer - Virtual ledger transactions and commitments.
///
/// Provides the ledger-side transaction pieces the anchor chain commits
/// to (out points, inputs, outputs), their canonical serialization, and the
/// commitment hash embedded in the anchor-chain transaction.

pub mod transaction;
pub mod input;
pub mod output;
pub mod commitment;

mod error;
pub use error::TransactionError;
pub use transaction::{IndexerCell, VirtualTransaction};
pub use input::{CellInput, OutPoint};
pub use output::CellOutput;
pub use commitment::{calculate_commitment, calculate_commitment_hex};
