//! Lock error types.

use rgbpp_primitives::PrimitivesError;
use rgbpp_script::ScriptError;
use rgbpp_transaction::TransactionError;

/// Errors that can occur while building or parsing lock arguments.
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    /// Lock arguments are too short or not a valid encoding.
    #[error("invalid lock args: {0}")]
    InvalidLockArgs(String),

    /// Transaction error.
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    /// Script error.
    #[error(transparent)]
    Script(#[from] ScriptError),

    /// Primitives error.
    #[error(transparent)]
    Primitives(#[from] PrimitivesError),
}
