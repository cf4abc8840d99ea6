/// Error types for virtual transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// `outputs` and `outputs_data` have different lengths.
    #[error("structural mismatch: {outputs} outputs but {outputs_data} outputs data")]
    StructuralMismatch {
        /// Number of outputs.
        outputs: usize,
        /// Number of output data entries.
        outputs_data: usize,
    },
    /// An argument is outside what the commitment encoding can represent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An error occurred during binary deserialization.
    #[error("serialization error: {0}")]
    SerializationError(String),
    /// An underlying script error (forwarded from `rgbpp-script`).
    #[error("script error: {0}")]
    Script(#[from] rgbpp_script::ScriptError),
    /// An underlying primitives error (forwarded from `rgbpp-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] rgbpp_primitives::PrimitivesError),
}
