//! Barcode lookup against the Open Food Facts product database.
//!
//! [`fetch_product_by_barcode`] performs one request and always resolves to a
//! fully populated [`Product`]; [`random_barcode`] supplies barcodes for
//! simulated scans.

pub mod barcodes;
pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use barcodes::{random_barcode, random_barcode_with, KNOWN_BARCODES};
pub use client::{fetch_product_by_barcode, OffClient, PRODUCT_FIELDS};
pub use error::OffError;
pub use foodscan_core::{NutrientInfo, Product};
pub use normalize::normalize_product;
pub use types::{Nutriments, OffProduct, ProductResponse};
