//! UTXO source abstraction and greedy satoshi collection.
//!
//! [`DataSource`] turns the raw UTXO list of an address into a
//! deterministically ordered list of [`UnspentOutput`]s, then picks a prefix
//! of it that covers a target amount.

use std::future::Future;

use rgbpp_script::address::address_to_script_pk_hex;
use rgbpp_script::{AddressType, Network};
use tracing::{debug, warn};

use crate::client::BtcAssetsApi;
use crate::error::SourceError;
use crate::types::{BtcApiUtxo, CollectResult, UnspentOutput};

/// Anything that can list the unspent outputs of an address.
pub trait UtxoSource {
    /// Fetch the unspent outputs of `address`.
    fn get_utxos(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Vec<BtcApiUtxo>, SourceError>> + Send;
}

impl UtxoSource for BtcAssetsApi {
    async fn get_utxos(&self, address: &str) -> Result<Vec<BtcApiUtxo>, SourceError> {
        self.get_btc_utxos(address).await
    }
}

/// UTXO lookup and selection for one network.
#[derive(Debug, Clone)]
pub struct DataSource<S> {
    source: S,
    network: Network,
}

impl<S: UtxoSource> DataSource<S> {
    /// Create a data source reading from `source`.
    pub fn new(source: S, network: Network) -> Self {
        Self { source, network }
    }

    /// The underlying UTXO source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The network addresses must belong to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// List the unspent outputs of `address`, oldest first.
    ///
    /// Outputs are ordered by `(block_height, vout)`; unconfirmed outputs
    /// come after all confirmed ones.
    ///
    /// # Returns
    /// The ordered outputs, or the source's error unchanged, or a script
    /// error if `address` is invalid for this network.
    pub async fn get_utxos(&self, address: &str) -> Result<Vec<UnspentOutput>, SourceError> {
        let script_pk = address_to_script_pk_hex(address, self.network)?;
        let address_type = AddressType::of(address);

        let mut utxos = self.source.get_utxos(address).await?;
        sort_utxos(&mut utxos);
        debug!(address, count = utxos.len(), "fetched utxos");

        Ok(utxos
            .into_iter()
            .map(|utxo| UnspentOutput {
                address: address.to_string(),
                script_pk: script_pk.clone(),
                txid: utxo.txid,
                vout: utxo.vout,
                value: utxo.value,
                address_type,
            })
            .collect())
    }

    /// Collect UTXOs of `address` until their sum reaches `target_amount`.
    ///
    /// # Arguments
    /// * `address` - Address to spend from.
    /// * `target_amount` - Satoshi to cover.
    /// * `minimal_satoshi` - Skip outputs worth less than this.
    ///
    /// # Returns
    /// See [`select_utxos`].
    pub async fn collect_satoshi(
        &self,
        address: &str,
        target_amount: u64,
        minimal_satoshi: Option<u64>,
    ) -> Result<CollectResult, SourceError> {
        let utxos = self.get_utxos(address).await?;
        let result = select_utxos(&utxos, target_amount, minimal_satoshi);
        match &result {
            Ok(collected) => debug!(
                address,
                selected = collected.utxos.len(),
                satoshi = collected.satoshi,
                "collected satoshi"
            ),
            Err(e) => warn!(address, target_amount, error = %e, "satoshi collection failed"),
        }
        result
    }
}

/// Order raw UTXOs by `(block_height, vout)`, unconfirmed last.
///
/// The sort is stable, so outputs with equal keys keep service order.
pub fn sort_utxos(utxos: &mut [BtcApiUtxo]) {
    utxos.sort_by_key(|utxo| {
        let height = utxo.status.block_height;
        (height.is_none(), height, utxo.vout)
    });
}

/// Greedily take UTXOs in order until `target_amount` is covered.
///
/// Outputs worth less than `minimal_satoshi` are skipped. Selection stops
/// as soon as the running total reaches the target, so the result is the
/// shortest qualifying prefix of `utxos`.
///
/// # Returns
/// The selection with its total and excess, or `InsufficientUtxo` if every
/// qualifying output together falls short. No partial selection is
/// returned.
pub fn select_utxos(
    utxos: &[UnspentOutput],
    target_amount: u64,
    minimal_satoshi: Option<u64>,
) -> Result<CollectResult, SourceError> {
    let mut collected = Vec::new();
    let mut satoshi: u64 = 0;

    for utxo in utxos {
        if satoshi >= target_amount {
            break;
        }
        if minimal_satoshi.is_some_and(|minimal| utxo.value < minimal) {
            continue;
        }
        satoshi = satoshi.saturating_add(utxo.value);
        collected.push(utxo.clone());
    }

    if satoshi < target_amount {
        return Err(SourceError::InsufficientUtxo {
            needed: target_amount,
            collected: satoshi,
        });
    }

    Ok(CollectResult {
        utxos: collected,
        satoshi,
        exceed_satoshi: satoshi - target_amount,
    })
}
