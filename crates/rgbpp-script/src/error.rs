/// Error types for script operations.
///
/// Covers molecule decoding of ledger scripts and anchor-chain address
/// parsing.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Generic invalid script error.
    #[error("invalid script: {0}")]
    InvalidScript(String),

    /// The hash type byte or name is not one the ledger defines.
    #[error("unknown hash type: {0}")]
    UnknownHashType(String),

    /// Invalid address string.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The address is well formed but belongs to another network.
    #[error("address {address} is not valid on {network}")]
    NetworkMismatch {
        /// The offending address.
        address: String,
        /// The network the caller required.
        network: String,
    },

    /// Error from primitives crate.
    #[error("primitives error: {0}")]
    Primitives(#[from] rgbpp_primitives::PrimitivesError),
}
