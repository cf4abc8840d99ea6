#![deny(missing_docs)]

//! # rgbpp-btc-source
//!
//! Anchor-chain UTXO lookup and selection for RGB++ transaction building.
//!
//! [`BtcAssetsApi`] is an async HTTP client for the BTC assets indexing
//! service. [`DataSource`] wraps any [`UtxoSource`], orders the returned
//! outputs deterministically and greedily collects enough of them to fund a
//! transaction.
//!
//! # Example
//!
//! ```no_run
//! use rgbpp_btc_source::{BtcAssetsApi, BtcAssetsApiConfig, DataSource};
//! use rgbpp_script::Network;
//!
//! # async fn example() -> Result<(), rgbpp_btc_source::SourceError> {
//! let api = BtcAssetsApi::new(BtcAssetsApiConfig {
//!     url: "https://api.testnet.rgbpp.io".to_string(),
//!     token: Some("my-token".to_string()),
//!     origin: Some("https://app.example".to_string()),
//! });
//! let source = DataSource::new(api, Network::Testnet);
//!
//! let collected = source
//!     .collect_satoshi("tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx", 10_000, Some(546))
//!     .await?;
//! println!("selected {} utxos, change {}", collected.utxos.len(), collected.exceed_satoshi);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod source;
pub mod types;


pub use client::BtcAssetsApi;
pub use error::SourceError;
pub use source::{select_utxos, sort_utxos, DataSource, UtxoSource};
pub use types::{BtcApiUtxo, BtcAssetsApiConfig, CollectResult, UnspentOutput, UtxoStatus};
