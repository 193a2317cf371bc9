pub mod config;
pub mod lookup_config;
pub mod product;

use thiserror::Error;

pub use config::{load_lookup_config, load_lookup_config_from_env};
pub use lookup_config::LookupConfig;
pub use product::{NutrientInfo, Product, NOT_AVAILABLE, NOT_FOUND_NAME};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
