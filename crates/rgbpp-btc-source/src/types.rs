//! BTC assets service data types: configuration, raw UTXO, and selection models.

use rgbpp_script::AddressType;
use serde::{Deserialize, Serialize};

/// Configuration for a [`BtcAssetsApi`](crate::BtcAssetsApi).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BtcAssetsApiConfig {
    /// Base URL of the service (e.g. `https://api.rgbpp.io`).
    pub url: String,
    /// Optional bearer token sent via the `Authorization` header.
    pub token: Option<String>,
    /// Optional `Origin` header; the service scopes tokens by origin.
    pub origin: Option<String>,
}

impl Default for BtcAssetsApiConfig {
    fn default() -> Self {
        Self {
            url: "https://api.rgbpp.io".to_string(),
            token: None,
            origin: None,
        }
    }
}

/// Confirmation status of a UTXO as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoStatus {
    /// Whether the funding transaction is in a block.
    pub confirmed: bool,
    /// Height of that block.
    #[serde(default)]
    pub block_height: Option<u64>,
    /// Hash of that block.
    #[serde(default)]
    pub block_hash: Option<String>,
    /// Timestamp of that block.
    #[serde(default)]
    pub block_time: Option<u64>,
}

/// A UTXO returned by `GET /bitcoin/v1/address/{address}/unspent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BtcApiUtxo {
    /// Funding transaction id, display order.
    pub txid: String,
    /// Output index in the funding transaction.
    pub vout: u32,
    /// Value in satoshi.
    pub value: u64,
    /// Confirmation status.
    #[serde(default)]
    pub status: UtxoStatus,
}

/// A UTXO enriched with the data needed to spend it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnspentOutput {
    /// Owning address.
    pub address: String,
    /// scriptPubKey of `address`, `0x` hex.
    pub script_pk: String,
    /// Funding transaction id, display order.
    pub txid: String,
    /// Output index in the funding transaction.
    pub vout: u32,
    /// Value in satoshi.
    pub value: u64,
    /// Type of `address`.
    pub address_type: AddressType,
}

/// UTXOs picked to cover a target amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectResult {
    /// Selected UTXOs, in selection order.
    pub utxos: Vec<UnspentOutput>,
    /// Sum of their values.
    pub satoshi: u64,
    /// `satoshi` minus the target.
    pub exceed_satoshi: u64,
}
