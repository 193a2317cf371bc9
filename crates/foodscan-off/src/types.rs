//! Open Food Facts API v2 response types for `GET /api/v2/product/{barcode}.json`.
//!
//! ## Observed shape
//!
//! ### Envelope
//! `{"code": "...", "status": 1, "status_verbose": "product found", "product": {...}}`.
//! An unknown barcode yields `"status": 0` and no `product` key, usually with
//! HTTP 404 but sometimes with HTTP 200.
//!
//! ### Text fields
//! Any of `product_name`, `brands`, `categories`, `image_url`,
//! `ingredients_text` may be absent, `null`, or `""`. All are modelled as
//! `Option<String>`; empty strings are treated as absent during normalization.
//!
//! ### `categories`
//! A single comma-separated string, most general category first
//! (`"Snacks, Sweet snacks, Cocoa and its products"`).
//!
//! ### `additives_tags`
//! Array of language-prefixed codes (`["en:e322", "en:e322i"]`). Absent for
//! products with no analysed ingredients.
//!
//! ### `nutriments`
//! Flat object keyed `<nutrient>_<basis>` (`"fat_100g"`, `"energy-kcal_100g"`).
//! Values are usually JSON numbers, but user-contributed records occasionally
//! carry numeric strings (`"539"`), so values are parsed leniently.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level envelope of a product lookup.
#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    /// `1` when the product exists, `0` when it does not.
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub product: Option<OffProduct>,
}

impl ProductResponse {
    /// Returns `true` when the envelope carries the explicit "no record" marker.
    #[must_use]
    pub fn signals_not_found(&self) -> bool {
        match &self.status {
            Some(Value::Number(n)) => n.as_i64() == Some(0),
            Some(Value::String(s)) => s.trim() == "0",
            _ => false,
        }
    }

    /// Consumes the envelope, yielding the product payload unless the
    /// upstream reported that no record exists.
    #[must_use]
    pub fn into_product(self) -> Option<OffProduct> {
        if self.signals_not_found() {
            return None;
        }
        self.product
    }
}

/// The subset of product fields requested via the `fields` query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct OffProduct {
    #[serde(default)]
    pub product_name: Option<String>,
    /// Brand owner(s), comma-separated when there are several.
    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub categories: Option<String>,
    /// Front-of-pack image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ingredients_text: Option<String>,
    #[serde(default)]
    pub additives_tags: Option<Vec<String>>,
    #[serde(default)]
    pub nutriments: Option<Nutriments>,
}

/// Per-100g nutrient measurements.
#[derive(Debug, Default, Deserialize)]
pub struct Nutriments {
    #[serde(
        default,
        rename = "energy-kcal_100g",
        deserialize_with = "deserialize_lenient_f64"
    )]
    pub energy_kcal_100g: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub fat_100g: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub carbohydrates_100g: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub proteins_100g: Option<f64>,
}

/// Accepts a JSON number or a numeric string. Anything else, including
/// non-finite values, becomes `None` rather than failing the whole record.
fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|f| f.is_finite()))
}
