//! BTC assets service HTTP client.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, ORIGIN};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::SourceError;
use crate::types::{BtcApiUtxo, BtcAssetsApiConfig};

/// HTTP client for the BTC assets service.
#[derive(Debug, Clone)]
pub struct BtcAssetsApi {
    /// Client configuration.
    config: BtcAssetsApiConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl BtcAssetsApi {
    /// Create a new client with the given configuration.
    pub fn new(config: BtcAssetsApiConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// The client configuration.
    pub fn config(&self) -> &BtcAssetsApiConfig {
        &self.config
    }

    /// List the unspent outputs of an address, in service order.
    ///
    /// A 404 is reported as [`SourceError::NotFound`], not as an empty list.
    pub async fn get_btc_utxos(&self, address: &str) -> Result<Vec<BtcApiUtxo>, SourceError> {
        let path = format!("bitcoin/v1/address/{}/unspent", address);
        self.do_request(&path).await
    }

    /// Perform a GET request against the service and deserialize the response.
    async fn do_request<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = format!("{}/{}", self.config.url.trim_end_matches('/'), path);

        let headers = self.build_headers();

        let resp = self.client.get(&url).headers(headers).send().await?;

        let status = resp.status();
        debug!(%url, status = status.as_u16(), "btc assets api response");

        if status.as_u16() == 404 {
            return Err(SourceError::NotFound);
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SourceError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }

    /// Build common headers from config.
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(ref token) = self.config.token {
            if let Ok(val) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, val);
            }
        }

        if let Some(ref origin) = self.config.origin {
            if let Ok(val) = HeaderValue::from_str(origin) {
                headers.insert(ORIGIN, val);
            }
        }

        headers
    }
}
