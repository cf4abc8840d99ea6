//! Error types for UTXO source operations.

use rgbpp_script::ScriptError;

/// Errors that can occur while fetching or selecting UTXOs.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The address does not hold enough qualifying UTXOs.
    #[error("insufficient utxo: needed {needed}, collected {collected}")]
    InsufficientUtxo {
        /// Requested amount in satoshi.
        needed: u64,
        /// Amount collected before running out of UTXOs.
        collected: u64,
    },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to serialize or deserialize data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Server returned a non-2xx response.
    #[error("server error ({status_code}): {message}")]
    ServerError {
        /// HTTP status code.
        status_code: u16,
        /// Error message from server.
        message: String,
    },

    /// Resource not found (404).
    #[error("not found")]
    NotFound,

    /// The address could not be turned into a scriptPubKey.
    #[error(transparent)]
    Script(#[from] ScriptError),
}
