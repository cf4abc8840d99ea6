/// Anchor-chain address handling.
///
/// Derives the scriptPubKey locked by an address and classifies the address
/// type. UTXOs returned by the indexing service carry neither, so the
/// selector computes them once per address from the address string.

use std::fmt;
use std::str::FromStr;

use bitcoin::address::NetworkUnchecked;
use rgbpp_primitives::hex::encode_hex;
use serde::{Deserialize, Serialize};

use crate::ScriptError;

/// Anchor-chain network.
///
/// Regtest shares testnet's ledger deployment, so anything keyed by
/// "is mainnet" treats both the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Bitcoin mainnet.
    #[default]
    Mainnet,
    /// Bitcoin testnet (also accepts signet addresses).
    Testnet,
    /// Local regtest.
    Regtest,
}

impl Network {
    /// Whether this is the production network.
    pub fn is_mainnet(&self) -> bool {
        matches!(self, Network::Mainnet)
    }

    /// The network name.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        }
    }

    /// Convert to the `bitcoin` crate's network type.
    pub fn to_bitcoin_network(&self) -> bitcoin::Network {
        match self {
            Network::Mainnet => bitcoin::Network::Bitcoin,
            Network::Testnet => bitcoin::Network::Testnet,
            Network::Regtest => bitcoin::Network::Regtest,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Address type attached to every selected UTXO.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressType {
    /// Legacy pay-to-pubkey-hash.
    P2pkh,
    /// Native segwit v0 pubkey hash.
    P2wpkh,
    /// Taproot.
    P2tr,
    /// Pay-to-script-hash. Assumed to wrap a P2WPKH redeem script, which is
    /// the only nested form wallets hand out.
    P2shP2wpkh,
    /// Native segwit v0 script hash.
    P2wsh,
    /// Anything else, including unparseable addresses.
    Unknown,
}

impl AddressType {
    /// Classify an address string without checking its network.
    ///
    /// # Arguments
    /// * `address` - Base58 or bech32/bech32m address.
    ///
    /// # Returns
    /// The detected type, or `AddressType::Unknown` when the string is not
    /// an address or uses a program the binding layer does not handle.
    pub fn of(address: &str) -> Self {
        match bitcoin::Address::<NetworkUnchecked>::from_str(address) {
            Ok(parsed) => Self::from_bitcoin(parsed.assume_checked().address_type()),
            Err(_) => AddressType::Unknown,
        }
    }

    fn from_bitcoin(kind: Option<bitcoin::AddressType>) -> Self {
        match kind {
            Some(bitcoin::AddressType::P2pkh) => AddressType::P2pkh,
            Some(bitcoin::AddressType::P2sh) => AddressType::P2shP2wpkh,
            Some(bitcoin::AddressType::P2wpkh) => AddressType::P2wpkh,
            Some(bitcoin::AddressType::P2wsh) => AddressType::P2wsh,
            Some(bitcoin::AddressType::P2tr) => AddressType::P2tr,
            _ => AddressType::Unknown,
        }
    }
}

/// Parse an address and require it to belong to `network`.
fn parse_checked(address: &str, network: Network) -> Result<bitcoin::Address, ScriptError> {
    let unchecked = bitcoin::Address::<NetworkUnchecked>::from_str(address)
        .map_err(|e| ScriptError::InvalidAddress(format!("{}: {}", address, e)))?;
    unchecked
        .require_network(network.to_bitcoin_network())
        .map_err(|_| ScriptError::NetworkMismatch {
            address: address.to_string(),
            network: network.to_string(),
        })
}

/// Derive the scriptPubKey locked by `address`.
///
/// # Arguments
/// * `address` - Address string.
/// * `network` - Network the address must belong to.
///
/// # Returns
/// The raw scriptPubKey bytes.
pub fn address_to_script_pk(address: &str, network: Network) -> Result<Vec<u8>, ScriptError> {
    let checked = parse_checked(address, network)?;
    Ok(checked.script_pubkey().into_bytes())
}

/// Derive the scriptPubKey locked by `address` as `0x` hex.
pub fn address_to_script_pk_hex(address: &str, network: Network) -> Result<String, ScriptError> {
    address_to_script_pk(address, network).map(|bytes| encode_hex(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    // BIP-173 / BIP-350 reference vectors.
    const P2WPKH_MAIN: &str = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
    const P2WSH_TEST: &str = "tb1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3q0sl5k7";
    const P2TR_MAIN: &str = "bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqzk5jj0";
    const P2PKH_MAIN: &str = "1E7ucTTWRTahCyViPhxSMor2pj4VGQdFMr";
    const P2PKH_TEST: &str = "mtdruWYVEV1wz5yL7GvpBj4MgifCB7yhPd";
    const P2SH_MAIN: &str = "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy";

    #[test]
    fn test_address_type_detection() {
        assert_eq!(AddressType::of(P2WPKH_MAIN), AddressType::P2wpkh);
        assert_eq!(AddressType::of(P2WSH_TEST), AddressType::P2wsh);
        assert_eq!(AddressType::of(P2TR_MAIN), AddressType::P2tr);
        assert_eq!(AddressType::of(P2PKH_MAIN), AddressType::P2pkh);
        assert_eq!(AddressType::of(P2PKH_TEST), AddressType::P2pkh);
        assert_eq!(AddressType::of(P2SH_MAIN), AddressType::P2shP2wpkh);
        assert_eq!(AddressType::of("not-an-address"), AddressType::Unknown);
    }

    #[test]
    fn test_script_pk_p2wpkh() {
        assert_eq!(
            address_to_script_pk_hex(P2WPKH_MAIN, Network::Mainnet).unwrap(),
            "0x0014751e76e8199196d454941c45d1b3a323f1433bd6"
        );
    }

    #[test]
    fn test_script_pk_p2pkh() {
        assert_eq!(
            address_to_script_pk_hex(P2PKH_TEST, Network::Testnet).unwrap(),
            "0x76a9148fe80c75c9560e8b56ed64ea3c26e18d2c52211b88ac"
        );
    }

    #[test]
    fn test_script_pk_p2tr() {
        assert_eq!(
            address_to_script_pk_hex(P2TR_MAIN, Network::Mainnet).unwrap(),
            "0x512079be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    #[test]
    fn test_script_pk_wrong_network() {
        assert!(matches!(
            address_to_script_pk(P2WPKH_MAIN, Network::Testnet),
            Err(ScriptError::NetworkMismatch { .. })
        ));
        assert!(matches!(
            address_to_script_pk(P2PKH_TEST, Network::Mainnet),
            Err(ScriptError::NetworkMismatch { .. })
        ));
    }

    #[test]
    fn test_script_pk_invalid_address() {
        assert!(matches!(
            address_to_script_pk("bc1qinvalid", Network::Mainnet),
            Err(ScriptError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_network_flags() {
        assert!(Network::Mainnet.is_mainnet());
        assert!(!Network::Testnet.is_mainnet());
        assert!(!Network::Regtest.is_mainnet());
        assert_eq!(Network::default(), Network::Mainnet);
        assert_eq!(serde_json::to_string(&Network::Testnet).unwrap(), r#""testnet""#);
    }

    #[test]
    fn test_address_type_json() {
        assert_eq!(
            serde_json::to_string(&AddressType::P2shP2wpkh).unwrap(),
            r#""P2SH_P2WPKH""#
        );
        assert_eq!(serde_json::to_string(&AddressType::P2tr).unwrap(), r#""P2TR""#);
    }
}
