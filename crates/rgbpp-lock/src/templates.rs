//! Deployed lock script templates and protocol constants.
//!
//! A template is the `(code_hash, hash_type)` pair a lock script must carry
//! to be recognized; args are filled in per cell.

use rgbpp_primitives::chainhash::{Hash, ZERO_HASH};
use rgbpp_script::{HashType, Network, Script};

/// Transaction id written into lock args before the anchor transaction is
/// known. Replaced via [`crate::replace_lock_args_with_real_btc_tx_id`].
pub const RGBPP_TX_ID_PLACEHOLDER: Hash = ZERO_HASH;

/// Anchor-chain confirmations a BTC time lock waits for before unlocking.
pub const BTC_JUMP_CONFIRMATION_BLOCKS: u32 = 6;

/// RGB++ lock code hash on mainnet.
pub const MAINNET_RGBPP_LOCK_CODE_HASH: [u8; 32] = [
    0xbc, 0x6c, 0x56, 0x8a, 0x1a, 0x0d, 0x0a, 0x09, 0xf6, 0x84, 0x4d, 0xc9, 0xd7, 0x4d, 0xdb, 0x43,
    0x43, 0xc3, 0x21, 0x43, 0xff, 0x25, 0xf7, 0x27, 0xc5, 0x9e, 0xdf, 0x4f, 0xb7, 0x2d, 0x69, 0x36,
];

/// RGB++ lock code hash on testnet.
pub const TESTNET_RGBPP_LOCK_CODE_HASH: [u8; 32] = [
    0x61, 0xca, 0x7a, 0x47, 0x96, 0xa4, 0xeb, 0x19, 0xca, 0x4f, 0x0d, 0x06, 0x5c, 0xb9, 0xb1, 0x0d,
    0xdc, 0xf0, 0x02, 0xf1, 0x0f, 0x7c, 0xbb, 0x81, 0x0c, 0x70, 0x6c, 0xb6, 0xbb, 0x5c, 0x32, 0x48,
];

/// BTC time lock code hash on mainnet.
pub const MAINNET_BTC_TIME_LOCK_CODE_HASH: [u8; 32] = [
    0x70, 0xd6, 0x44, 0x97, 0xa0, 0x75, 0xbd, 0x65, 0x1e, 0x98, 0xac, 0x03, 0x04, 0x55, 0xea, 0x20,
    0x06, 0x37, 0xee, 0x32, 0x5a, 0x12, 0xad, 0x08, 0xaf, 0xf0, 0x3f, 0x1a, 0x11, 0x7e, 0x5a, 0x62,
];

/// BTC time lock code hash on testnet.
pub const TESTNET_BTC_TIME_LOCK_CODE_HASH: [u8; 32] = [
    0x00, 0xcd, 0xf8, 0xfa, 0xb0, 0xf8, 0xac, 0x63, 0x87, 0x58, 0xeb, 0xf5, 0xea, 0x5e, 0x40, 0x52,
    0xb1, 0xd7, 0x1e, 0x8a, 0x77, 0xb9, 0xf4, 0x31, 0x39, 0x71, 0x86, 0x21, 0xf6, 0x84, 0x93, 0x26,
];

/// The identity of a deployed lock script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptTemplate {
    /// Code hash of the deployed script.
    pub code_hash: [u8; 32],
    /// How `code_hash` is matched on-ledger.
    pub hash_type: HashType,
}

impl ScriptTemplate {
    /// Create a template.
    pub const fn new(code_hash: [u8; 32], hash_type: HashType) -> Self {
        ScriptTemplate { code_hash, hash_type }
    }

    /// Whether `script` carries this template's code hash and hash type.
    pub fn matches(&self, script: &Script) -> bool {
        script.code_hash == self.code_hash && script.hash_type == self.hash_type
    }

    /// Instantiate the template with concrete args.
    pub fn to_script(&self, args: Vec<u8>) -> Script {
        Script::new(self.code_hash, self.hash_type, args)
    }
}

/// The RGB++ lock and BTC time lock templates of one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockTemplates {
    /// The RGB++ lock.
    pub rgbpp_lock: ScriptTemplate,
    /// The BTC time lock.
    pub btc_time_lock: ScriptTemplate,
}

impl LockTemplates {
    /// Mainnet deployments.
    pub const fn mainnet() -> Self {
        LockTemplates {
            rgbpp_lock: ScriptTemplate::new(MAINNET_RGBPP_LOCK_CODE_HASH, HashType::Type),
            btc_time_lock: ScriptTemplate::new(MAINNET_BTC_TIME_LOCK_CODE_HASH, HashType::Type),
        }
    }

    /// Testnet deployments.
    pub const fn testnet() -> Self {
        LockTemplates {
            rgbpp_lock: ScriptTemplate::new(TESTNET_RGBPP_LOCK_CODE_HASH, HashType::Type),
            btc_time_lock: ScriptTemplate::new(TESTNET_BTC_TIME_LOCK_CODE_HASH, HashType::Type),
        }
    }

    /// Mainnet or testnet deployments.
    pub const fn for_network(is_mainnet: bool) -> Self {
        if is_mainnet {
            Self::mainnet()
        } else {
            Self::testnet()
        }
    }
}

impl From<Network> for LockTemplates {
    /// Regtest shares the testnet deployments.
    fn from(network: Network) -> Self {
        LockTemplates::for_network(network.is_mainnet())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_hash_constants() {
        assert_eq!(
            hex::encode(MAINNET_RGBPP_LOCK_CODE_HASH),
            "bc6c568a1a0d0a09f6844dc9d74ddb4343c32143ff25f727c59edf4fb72d6936"
        );
        assert_eq!(
            hex::encode(TESTNET_RGBPP_LOCK_CODE_HASH),
            "61ca7a4796a4eb19ca4f0d065cb9b10ddcf002f10f7cbb810c706cb6bb5c3248"
        );
        assert_eq!(
            hex::encode(MAINNET_BTC_TIME_LOCK_CODE_HASH),
            "70d64497a075bd651e98ac030455ea200637ee325a12ad08aff03f1a117e5a62"
        );
        assert_eq!(
            hex::encode(TESTNET_BTC_TIME_LOCK_CODE_HASH),
            "00cdf8fab0f8ac638758ebf5ea5e4052b1d71e8a77b9f43139718621f6849326"
        );
    }

    #[test]
    fn test_for_network() {
        assert_eq!(LockTemplates::for_network(true), LockTemplates::mainnet());
        assert_eq!(LockTemplates::for_network(false), LockTemplates::testnet());
        assert_eq!(LockTemplates::from(Network::Regtest), LockTemplates::testnet());
        assert_eq!(LockTemplates::from(Network::Mainnet), LockTemplates::mainnet());
        assert_ne!(LockTemplates::mainnet(), LockTemplates::testnet());
    }

    #[test]
    fn test_template_matches_ignores_args() {
        let template = LockTemplates::testnet().rgbpp_lock;
        assert!(template.matches(&template.to_script(vec![])));
        assert!(template.matches(&template.to_script(vec![0xff; 36])));

        let wrong_hash_type = Script::new(template.code_hash, HashType::Data1, vec![]);
        assert!(!template.matches(&wrong_hash_type));
    }
}
