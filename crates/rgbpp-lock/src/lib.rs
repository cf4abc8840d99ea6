#![deny(missing_docs)]
//! RGB++ lock support.
//!
//! Encodes and decodes the arguments of the two lock scripts that tie a
//! ledger cell to an anchor-chain transaction (the RGB++ lock and the BTC
//! time lock), and classifies ledger scripts against per-network lock
//! templates.

pub mod error;
pub mod templates;
pub mod args;
pub mod script_type;

pub use error::LockError;
pub use templates::{LockTemplates, ScriptTemplate};
pub use args::{
    btc_tx_id_from_btc_time_lock_args, build_btc_time_lock_args, build_pre_lock_args,
    build_rgbpp_lock_args, compare_inputs, lock_script_from_btc_time_lock_args,
    parse_btc_time_lock_args, parse_rgbpp_lock_args, replace_lock_args_with_real_btc_tx_id,
    BtcTimeLockArgs, RgbppLockArgs,
};
pub use script_type::LockType;
