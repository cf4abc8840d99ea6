//! Hash function primitives.
//!
//! Provides one-shot SHA-256, double SHA-256 and a thin streaming wrapper
//! used by the commitment computation, which feeds its pre-image piece by
//! piece instead of materializing it.

use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-256 (SHA-256d) hash of the input data.
///
/// Computes SHA-256(SHA-256(data)). This is the hash used for anchor-chain
/// transaction ids and for the RGB++ commitment.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte double-SHA-256 digest.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Incremental SHA-256 context.
///
/// Bytes are fed with [`Sha256Stream::update`] in order; the context is
/// consumed by one of the finalizers.
#[derive(Clone, Default)]
pub struct Sha256Stream {
    inner: Sha256,
}

impl Sha256Stream {
    /// Create an empty hashing context.
    pub fn new() -> Self {
        Sha256Stream { inner: Sha256::new() }
    }

    /// Feed more bytes into the context.
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        self.inner.update(data.as_ref());
    }

    /// Finish hashing and return the single SHA-256 digest.
    pub fn finalize(self) -> [u8; 32] {
        self.inner.finalize().into()
    }

    /// Finish hashing and hash the digest once more.
    ///
    /// Equivalent to `sha256(&stream.finalize())`.
    pub fn finalize_double(self) -> [u8; 32] {
        sha256(&self.finalize())
    }
}
