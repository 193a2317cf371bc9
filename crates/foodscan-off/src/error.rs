use thiserror::Error;

/// Errors observed while looking up a product.
///
/// These never reach callers of
/// [`fetch_product_by_barcode`](crate::fetch_product_by_barcode); they are the
/// typed signal behind [`OffClient::lookup`](crate::OffClient::lookup).
#[derive(Debug, Error)]
pub enum OffError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
