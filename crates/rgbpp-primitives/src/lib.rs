/// RGB++ binding layer - Hashing, hex and binary codec primitives.
///
/// This crate provides the foundational building blocks shared by the
/// rest of the workspace:
/// - Hash functions (SHA-256, double SHA-256, streaming hasher)
/// - Transaction id type with natural/display byte-order handling
/// - Hex string helpers (prefix normalization, byte reversal, LE integers)
/// - Molecule binary codec (fixed structs, fixvecs, tables)

pub mod hash;
pub mod chainhash;
pub mod hex;
pub mod molecule;

mod error;
pub use error::PrimitivesError;
