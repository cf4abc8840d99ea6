//! Lock argument codec.
//!
//! Two lock scripts bind a ledger cell to an anchor-chain transaction:
//!
//! - the RGB++ lock, whose args are `out_index (u32 LE) || btc_txid`;
//! - the BTC time lock, whose args are the molecule table
//!
//! ```text
//! table BTCTimeLock {
//!     lock_script: Script,
//!     after:       Uint32,
//!     btc_txid:    Byte32,
//! }
//! ```
//!
//! In both formats the transaction id sits in the final 32 bytes and is
//! stored in natural byte order. Callers pass and receive ids in display
//! order, the reversed form explorers print.

use std::cmp::Ordering;

use rgbpp_primitives::chainhash::{Hash, HASH_SIZE};
use rgbpp_primitives::hex::{decode_hex, encode_hex};
use rgbpp_primitives::molecule::{pack_table, unpack_table, MoleculeReader};
use rgbpp_script::Script;
use rgbpp_transaction::IndexerCell;

use crate::templates::RGBPP_TX_ID_PLACEHOLDER;
use crate::LockError;

/// Size of RGB++ lock args, and the minimum size of any args that end in
/// an anchor transaction id.
pub const RGBPP_LOCK_ARGS_SIZE: usize = 4 + HASH_SIZE;

/// Decoded RGB++ lock args.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbppLockArgs {
    /// Output index in the anchor transaction.
    pub out_index: u32,
    /// Anchor transaction id.
    pub btc_txid: Hash,
}

impl RgbppLockArgs {
    /// Create args for output `out_index` of `btc_txid`.
    pub fn new(out_index: u32, btc_txid: Hash) -> Self {
        RgbppLockArgs { out_index, btc_txid }
    }

    /// Serialize to the 36-byte args layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(RGBPP_LOCK_ARGS_SIZE);
        bytes.extend_from_slice(&self.out_index.to_le_bytes());
        bytes.extend_from_slice(self.btc_txid.as_bytes());
        bytes
    }

    /// Parse the 36-byte args layout.
    pub fn from_bytes(data: &[u8]) -> Result<Self, LockError> {
        if data.len() != RGBPP_LOCK_ARGS_SIZE {
            return Err(LockError::InvalidLockArgs(format!(
                "rgbpp lock args must be {} bytes, got {}",
                RGBPP_LOCK_ARGS_SIZE,
                data.len()
            )));
        }
        let mut reader = MoleculeReader::new(data);
        let out_index = reader.read_u32_le()?;
        let btc_txid = Hash::new(reader.read_array::<HASH_SIZE>()?);
        Ok(RgbppLockArgs { out_index, btc_txid })
    }

    /// Encode as `0x` hex.
    pub fn to_hex(&self) -> String {
        encode_hex(self.to_bytes())
    }
}

/// Decoded BTC time lock args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BtcTimeLockArgs {
    /// Lock the cell is released to once the time lock expires.
    pub lock_script: Script,
    /// Anchor-chain confirmations required after `btc_txid`.
    pub after: u32,
    /// Anchor transaction id.
    pub btc_txid: Hash,
}

impl BtcTimeLockArgs {
    /// Create time lock args.
    pub fn new(lock_script: Script, after: u32, btc_txid: Hash) -> Self {
        BtcTimeLockArgs { lock_script, after, btc_txid }
    }

    /// Serialize to the `BTCTimeLock` molecule table.
    pub fn to_bytes(&self) -> Vec<u8> {
        let lock_script = self.lock_script.to_bytes();
        let after = self.after.to_le_bytes();
        pack_table(&[&lock_script, &after, self.btc_txid.as_bytes()])
    }

    /// Parse a `BTCTimeLock` molecule table.
    ///
    /// # Returns
    /// The decoded args, or `InvalidLockArgs` if the table, the nested
    /// script, or either fixed-size field is malformed.
    pub fn from_bytes(data: &[u8]) -> Result<Self, LockError> {
        let fields = unpack_table(data, 3)
            .map_err(|e| LockError::InvalidLockArgs(format!("btc time lock args: {}", e)))?;

        let lock_script = Script::from_bytes(fields[0])
            .map_err(|e| LockError::InvalidLockArgs(format!("btc time lock script: {}", e)))?;

        let after: [u8; 4] = fields[1].try_into().map_err(|_| {
            LockError::InvalidLockArgs(format!("after must be 4 bytes, got {}", fields[1].len()))
        })?;

        let btc_txid = Hash::from_bytes(fields[2])
            .map_err(|e| LockError::InvalidLockArgs(format!("btc txid: {}", e)))?;

        Ok(BtcTimeLockArgs {
            lock_script,
            after: u32::from_le_bytes(after),
            btc_txid,
        })
    }

    /// Encode as `0x` hex.
    pub fn to_hex(&self) -> String {
        encode_hex(self.to_bytes())
    }
}

/// Build RGB++ lock args for output `out_index` of a known anchor
/// transaction.
///
/// # Arguments
/// * `out_index` - Output index in the anchor transaction.
/// * `btc_tx_id` - Anchor transaction id in display order, with or without
///   `0x`.
///
/// # Returns
/// `0x` ‖ `out_index` as u32 LE ‖ the id in natural order.
pub fn build_rgbpp_lock_args(out_index: u32, btc_tx_id: &str) -> Result<String, LockError> {
    let btc_txid = Hash::from_hex(btc_tx_id)?;
    Ok(RgbppLockArgs::new(out_index, btc_txid).to_hex())
}

/// Build RGB++ lock args before the anchor transaction id is known.
///
/// The id slot holds [`RGBPP_TX_ID_PLACEHOLDER`] until
/// [`replace_lock_args_with_real_btc_tx_id`] fills it in.
pub fn build_pre_lock_args(out_index: u32) -> String {
    RgbppLockArgs::new(out_index, RGBPP_TX_ID_PLACEHOLDER).to_hex()
}

/// Build BTC time lock args.
///
/// # Arguments
/// * `lock_script` - Lock the cell is released to.
/// * `btc_tx_id` - Anchor transaction id in display order.
/// * `after` - Required confirmations.
pub fn build_btc_time_lock_args(
    lock_script: &Script,
    btc_tx_id: &str,
    after: u32,
) -> Result<String, LockError> {
    let btc_txid = Hash::from_hex(btc_tx_id)?;
    Ok(BtcTimeLockArgs::new(lock_script.clone(), after, btc_txid).to_hex())
}

/// Parse BTC time lock args from hex, with or without `0x`.
///
/// `btc_txid` in the result displays in the same order the args were built
/// with.
pub fn parse_btc_time_lock_args(args: &str) -> Result<BtcTimeLockArgs, LockError> {
    BtcTimeLockArgs::from_bytes(&decode_args(args)?)
}

/// Parse RGB++ lock args from hex, with or without `0x`.
pub fn parse_rgbpp_lock_args(args: &str) -> Result<RgbppLockArgs, LockError> {
    RgbppLockArgs::from_bytes(&decode_args(args)?)
}

/// Extract the release lock script from BTC time lock args.
pub fn lock_script_from_btc_time_lock_args(args: &str) -> Result<Script, LockError> {
    Ok(parse_btc_time_lock_args(args)?.lock_script)
}

/// Extract the anchor transaction id from BTC time lock args, as
/// `0x`-prefixed display-order hex.
pub fn btc_tx_id_from_btc_time_lock_args(args: &str) -> Result<String, LockError> {
    Ok(parse_btc_time_lock_args(args)?.btc_txid.to_display_hex())
}

/// Replace the trailing transaction id of RGB++ lock args or BTC time lock
/// args with a real anchor transaction id.
///
/// Every byte before the final 32 is preserved exactly.
///
/// # Arguments
/// * `lock_args` - Args hex, at least 36 bytes long.
/// * `real_tx_id` - Anchor transaction id in display order.
///
/// # Returns
/// The patched args as `0x` hex, or `InvalidLockArgs` when `lock_args` is
/// shorter than 36 bytes.
pub fn replace_lock_args_with_real_btc_tx_id(
    lock_args: &str,
    real_tx_id: &str,
) -> Result<String, LockError> {
    let mut bytes = decode_args(lock_args)?;
    if bytes.len() < RGBPP_LOCK_ARGS_SIZE {
        return Err(LockError::InvalidLockArgs(format!(
            "rgbpp lock args or btc time lock args must be at least {} bytes, got {}",
            RGBPP_LOCK_ARGS_SIZE,
            bytes.len()
        )));
    }
    let btc_txid = Hash::from_hex(real_tx_id)?;
    let split = bytes.len() - HASH_SIZE;
    bytes[split..].copy_from_slice(btc_txid.as_bytes());
    Ok(encode_hex(bytes))
}

/// Order indexer cells by their lock args bytes.
///
/// Used to give RGB++ inputs a deterministic order before they are placed
/// in a virtual transaction.
pub fn compare_inputs(a: &IndexerCell, b: &IndexerCell) -> Ordering {
    a.output.lock.args.cmp(&b.output.lock.args)
}

fn decode_args(args: &str) -> Result<Vec<u8>, LockError> {
    decode_hex(args).map_err(|e| LockError::InvalidLockArgs(e.to_string()))
}
