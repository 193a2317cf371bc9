/// Production Open Food Facts host.
pub const DEFAULT_OFF_BASE_URL: &str = "https://world.openfoodfacts.org";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "foodscan/0.1 (barcode-lookup)";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings for the barcode lookup client and the demo binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Scheme and host of the product database, without the `/api/v2` path.
    pub off_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            off_base_url: DEFAULT_OFF_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
