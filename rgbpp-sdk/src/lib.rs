#![deny(missing_docs)]

//! RGB++ binding layer - Complete SDK.
//!
//! Re-exports all RGB++ binding layer components for convenient
//! single-crate usage.

pub use rgbpp_primitives as primitives;
pub use rgbpp_script as script;
pub use rgbpp_transaction as transaction;
pub use rgbpp_lock as lock;
pub use rgbpp_btc_source as btc_source;
