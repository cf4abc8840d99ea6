/// Unified error type for all primitives operations.
///
/// Covers errors from hex handling, hash construction and molecule decoding.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid hash: {0}")]
    InvalidHash(String),

    #[error("invalid length: expected {expected}, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid molecule header: {0}")]
    InvalidHeader(String),

    #[error("field count mismatch: expected {expected}, got {got}")]
    FieldCountMismatch { expected: usize, got: usize },

    #[error("unexpected end of data")]
    UnexpectedEof,
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
