//! Lock script classification and lock script factories.

use std::fmt;

use rgbpp_script::Script;
use rgbpp_transaction::CellOutput;

use crate::args::BtcTimeLockArgs;
use crate::templates::{LockTemplates, BTC_JUMP_CONFIRMATION_BLOCKS, RGBPP_TX_ID_PLACEHOLDER};

/// Classification of a ledger lock script against a network's templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockType {
    /// RGB++ lock, bound to an anchor-chain UTXO.
    RgbppLock,
    /// BTC time lock, released after anchor-chain confirmations.
    BtcTimeLock,
    /// Any other lock.
    Other,
}

impl fmt::Display for LockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockType::RgbppLock => write!(f, "RGB++ lock"),
            LockType::BtcTimeLock => write!(f, "BTC time lock"),
            LockType::Other => write!(f, "other"),
        }
    }
}

impl LockTemplates {
    /// Classify `lock` by `(code_hash, hash_type)`. Args are ignored.
    pub fn classify(&self, lock: &Script) -> LockType {
        if self.rgbpp_lock.matches(lock) {
            LockType::RgbppLock
        } else if self.btc_time_lock.matches(lock) {
            LockType::BtcTimeLock
        } else {
            LockType::Other
        }
    }

    /// Whether `lock` is an RGB++ lock.
    pub fn is_rgbpp_lock(&self, lock: &Script) -> bool {
        self.rgbpp_lock.matches(lock)
    }

    /// Whether `lock` is a BTC time lock.
    pub fn is_btc_time_lock(&self, lock: &Script) -> bool {
        self.btc_time_lock.matches(lock)
    }

    /// Whether `lock` is either an RGB++ lock or a BTC time lock.
    pub fn is_rgbpp_lock_or_btc_time_lock(&self, lock: &Script) -> bool {
        self.classify(lock) != LockType::Other
    }

    /// Whether `cell` is locked by an RGB++ lock.
    pub fn is_rgbpp_lock_cell(&self, cell: &CellOutput) -> bool {
        self.is_rgbpp_lock(&cell.lock)
    }

    /// Whether `cell` is locked by a BTC time lock.
    pub fn is_btc_time_lock_cell(&self, cell: &CellOutput) -> bool {
        self.is_btc_time_lock(&cell.lock)
    }

    /// An RGB++ lock script with the given args bytes.
    pub fn rgbpp_lock_script(&self, args: Vec<u8>) -> Script {
        self.rgbpp_lock.to_script(args)
    }

    /// A BTC time lock releasing to `to_lock`.
    ///
    /// The id slot holds the placeholder and the lock waits
    /// [`BTC_JUMP_CONFIRMATION_BLOCKS`] confirmations.
    pub fn btc_time_lock_script(&self, to_lock: &Script) -> Script {
        let args = BtcTimeLockArgs::new(
            to_lock.clone(),
            BTC_JUMP_CONFIRMATION_BLOCKS,
            RGBPP_TX_ID_PLACEHOLDER,
        );
        self.btc_time_lock.to_script(args.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{build_pre_lock_args, parse_btc_time_lock_args};
    use rgbpp_primitives::hex::{decode_hex, encode_hex};
    use rgbpp_script::HashType;

    fn secp_lock() -> Script {
        Script::new([0x9b; 32], HashType::Type, vec![0xb3; 20])
    }

    #[test]
    fn test_classify() {
        let testnet = LockTemplates::testnet();
        let rgbpp = testnet.rgbpp_lock_script(vec![0; 36]);
        let time_lock = testnet.btc_time_lock_script(&secp_lock());

        assert_eq!(testnet.classify(&rgbpp), LockType::RgbppLock);
        assert_eq!(testnet.classify(&time_lock), LockType::BtcTimeLock);
        assert_eq!(testnet.classify(&secp_lock()), LockType::Other);

        assert!(testnet.is_rgbpp_lock(&rgbpp));
        assert!(!testnet.is_btc_time_lock(&rgbpp));
        assert!(testnet.is_btc_time_lock(&time_lock));
        assert!(testnet.is_rgbpp_lock_or_btc_time_lock(&rgbpp));
        assert!(testnet.is_rgbpp_lock_or_btc_time_lock(&time_lock));
        assert!(!testnet.is_rgbpp_lock_or_btc_time_lock(&secp_lock()));
    }

    #[test]
    fn test_classify_is_network_specific() {
        let testnet_lock = LockTemplates::testnet().rgbpp_lock_script(vec![]);
        assert_eq!(LockTemplates::mainnet().classify(&testnet_lock), LockType::Other);
    }

    #[test]
    fn test_classify_requires_hash_type() {
        let templates = LockTemplates::mainnet();
        let lock = Script::new(templates.rgbpp_lock.code_hash, HashType::Data, vec![]);
        assert_eq!(templates.classify(&lock), LockType::Other);
    }

    #[test]
    fn test_cell_wrappers() {
        let templates = LockTemplates::mainnet();
        let args = decode_hex(&build_pre_lock_args(0)).unwrap();
        let cell = CellOutput::new(0, templates.rgbpp_lock_script(args));
        assert!(templates.is_rgbpp_lock_cell(&cell));
        assert!(!templates.is_btc_time_lock_cell(&cell));

        let cell = CellOutput::new(0, templates.btc_time_lock_script(&secp_lock()));
        assert!(templates.is_btc_time_lock_cell(&cell));
        assert!(!templates.is_rgbpp_lock_cell(&cell));
    }

    #[test]
    fn test_btc_time_lock_script_args() {
        let lock = LockTemplates::testnet().btc_time_lock_script(&secp_lock());
        let parsed = parse_btc_time_lock_args(&encode_hex(&lock.args)).unwrap();
        assert_eq!(parsed.lock_script, secp_lock());
        assert_eq!(parsed.after, BTC_JUMP_CONFIRMATION_BLOCKS);
        assert_eq!(parsed.btc_txid, RGBPP_TX_ID_PLACEHOLDER);
    }
}
