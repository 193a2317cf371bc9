//! HTTP client for the Open Food Facts product API.
//!
//! [`OffClient::lookup`] surfaces every failure as a typed [`OffError`];
//! [`OffClient::fetch_product_by_barcode`] builds on it and always yields a
//! renderable [`Product`], substituting the not-found placeholder when the
//! lookup fails for any reason.

use std::time::Duration;

use foodscan_core::{LookupConfig, Product};
use reqwest::{Client, Url};

use crate::error::OffError;
use crate::normalize::normalize_product;
use crate::types::{OffProduct, ProductResponse};

/// Fields requested from the API; everything else is dropped server-side.
pub const PRODUCT_FIELDS: &str =
    "product_name,brands,categories,image_url,ingredients_text,additives_tags,nutriments";

/// Client for the Open Food Facts v2 product endpoint.
///
/// Use [`OffClient::from_config`] for production or
/// [`OffClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct OffClient {
    client: Client,
    base_url: Url,
}

impl OffClient {
    /// Creates a client from a loaded [`LookupConfig`].
    ///
    /// `LookupConfig::default()` targets the production Open Food Facts API.
    ///
    /// # Errors
    ///
    /// Same as [`OffClient::with_base_url`].
    pub fn from_config(config: &LookupConfig) -> Result<Self, OffError> {
        Self::with_base_url(
            &config.off_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`OffError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`OffError::InvalidBaseUrl`] if `base_url`
    /// is not a usable http(s) URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, OffError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(base_url).map_err(|e| OffError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(OffError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "expected an http(s) URL".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Looks up a product and returns it in normalized form.
    ///
    /// Never fails: transport errors, non-2xx statuses, malformed bodies and
    /// unknown barcodes all yield [`Product::not_found`] carrying `barcode`.
    /// Transport and status failures are logged at `error`; an unknown
    /// barcode is an expected outcome and is not.
    pub async fn fetch_product_by_barcode(&self, barcode: &str) -> Product {
        match self.lookup(barcode).await {
            Ok(Some(product)) => normalize_product(product, barcode),
            Ok(None) => Product::not_found(barcode),
            Err(OffError::UnexpectedStatus { status, url }) => {
                tracing::error!(barcode, status, url = %url, "product request failed with status");
                Product::not_found(barcode)
            }
            Err(e) => {
                tracing::error!(barcode, error = %e, "product request failed");
                Product::not_found(barcode)
            }
        }
    }

    /// Performs a single product request and classifies the response.
    ///
    /// Returns `Ok(None)` when the API reports no record for `barcode`
    /// (`"status": 0` or no `product` object).
    ///
    /// # Errors
    ///
    /// - [`OffError::Http`] on network failure or timeout.
    /// - [`OffError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`OffError::Deserialize`] if the body is not the expected JSON.
    pub async fn lookup(&self, barcode: &str) -> Result<Option<OffProduct>, OffError> {
        let url = self.product_url(barcode)?;
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OffError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let envelope: ProductResponse =
            serde_json::from_str(&body).map_err(|e| OffError::Deserialize {
                context: format!("product(barcode={barcode})"),
                source: e,
            })?;

        let product = envelope.into_product();
        if product.is_none() {
            tracing::debug!(barcode, "no product record upstream");
        }
        Ok(product)
    }

    /// Builds `{base}/api/v2/product/{barcode}.json?fields=...`.
    ///
    /// The barcode is pushed as a single path segment, so characters such as
    /// `/` or `?` are percent-encoded rather than altering the route.
    fn product_url(&self, barcode: &str) -> Result<Url, OffError> {
        let file_name = format!("{barcode}.json");
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| OffError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_owned(),
            })?
            .pop_if_empty()
            .extend(["api", "v2", "product", file_name.as_str()]);
        url.query_pairs_mut().append_pair("fields", PRODUCT_FIELDS);
        Ok(url)
    }
}

/// Looks up `barcode` against the production API with default settings.
///
/// Never fails; see [`OffClient::fetch_product_by_barcode`].
pub async fn fetch_product_by_barcode(barcode: &str) -> Product {
    match OffClient::from_config(&LookupConfig::default()) {
        Ok(client) => client.fetch_product_by_barcode(barcode).await,
        Err(e) => {
            tracing::error!(barcode, error = %e, "failed to build product client");
            Product::not_found(barcode)
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
