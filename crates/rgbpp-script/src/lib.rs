/// RGB++ binding layer - Ledger scripts and anchor-chain addresses.
///
/// Provides the ledger `Script` type with its canonical molecule packing,
/// the `HashType` enumeration, and derivation of anchor-chain
/// scriptPubKeys and address types from address strings.

pub mod script;
pub mod address;

mod error;
pub use error::ScriptError;
pub use script::{HashType, Script};
pub use address::{AddressType, Network};
