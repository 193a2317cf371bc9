//! Normalization of Open Food Facts payloads into [`foodscan_core::Product`].
//!
//! Every rule substitutes a fixed fallback for missing data so the resulting
//! `Product` is always fully populated.

use foodscan_core::{NutrientInfo, Product, NOT_AVAILABLE};

use crate::types::{Nutriments, OffProduct};

const NAME_FALLBACK: &str = "Name not available";
const BRAND_FALLBACK: &str = "Brand not available";
const CATEGORY_FALLBACK: &str = "Uncategorized";
const INGREDIENTS_FALLBACK: &str = "No ingredients list available.";

/// Converts an [`OffProduct`] into a [`Product`] for the requested barcode.
///
/// The upstream record's own code is ignored; `barcode` is echoed so the
/// result always matches what the caller asked for.
#[must_use]
pub fn normalize_product(product: OffProduct, barcode: &str) -> Product {
    let category = product
        .categories
        .as_deref()
        .and_then(first_category)
        .unwrap_or_else(|| CATEGORY_FALLBACK.to_string());

    let additives = product
        .additives_tags
        .unwrap_or_default()
        .into_iter()
        .filter_map(|tag| normalize_additive(&tag))
        .collect();

    let nutrients = normalize_nutrients(&product.nutriments.unwrap_or_default());

    Product {
        barcode: barcode.to_owned(),
        name: non_empty(product.product_name).unwrap_or_else(|| NAME_FALLBACK.to_string()),
        manufacturer: non_empty(product.brands).unwrap_or_else(|| BRAND_FALLBACK.to_string()),
        category,
        image_url: non_empty(product.image_url)
            .unwrap_or_else(|| placeholder_image_url(barcode)),
        ingredients: non_empty(product.ingredients_text)
            .unwrap_or_else(|| INGREDIENTS_FALLBACK.to_string()),
        additives,
        nutrients,
    }
}

/// Formats the four displayed nutrients.
#[must_use]
pub fn normalize_nutrients(nutriments: &Nutriments) -> NutrientInfo {
    NutrientInfo {
        calories: format_calories(nutriments.energy_kcal_100g),
        fat: format_grams(nutriments.fat_100g),
        carbs: format_grams(nutriments.carbohydrates_100g),
        protein: format_grams(nutriments.proteins_100g),
    }
}

/// Returns the first comma-separated category, trimmed.
///
/// Returns `None` if that segment is blank.
#[must_use]
pub fn first_category(categories: &str) -> Option<String> {
    categories
        .split(',')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Strips the language prefix from an additive tag and upper-cases the code:
/// `"en:e322"` → `"E322"`.
///
/// Any prefix up to the first `:` is removed, so `"fr:e330"` → `"E330"`.
/// Returns `None` for tags with no code left after stripping.
#[must_use]
pub fn normalize_additive(tag: &str) -> Option<String> {
    let code = tag.split_once(':').map_or(tag, |(_, code)| code).trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_uppercase())
    }
}

/// `104.6` → `"105 kcal"`; absent → `"N/A"`.
///
/// A present `0` renders as `"0 kcal"`. The scanning client's earlier
/// TypeScript lookup treated a zero energy value as missing and showed
/// `"N/A"`; this function intentionally does not, so zero stays distinct from
/// absent the same way it does for grams.
#[must_use]
pub fn format_calories(kcal: Option<f64>) -> String {
    match kcal {
        // `+ 0.0` folds a rounded `-0` into `0`.
        Some(value) => format!("{} kcal", value.round() + 0.0),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// `3.46` → `"3.5g"`; `0` → `"0.0g"`; absent → `"N/A"`.
///
/// Exact ties round away from zero (`0.25` → `"0.3g"`), matching how the
/// scanning client renders them.
#[must_use]
pub fn format_grams(grams: Option<f64>) -> String {
    match grams {
        Some(value) => format!("{:.1}g", round_tie_to_tenths(value)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Resolves values lying exactly halfway between two tenths away from zero.
///
/// `{:.1}` already rounds every other value to the nearest tenth using its
/// exact binary value, but breaks exact ties toward even. A tie needs
/// `value * 10` to be computed without rounding error (checked with a fused
/// multiply-add) and to end in exactly `.5`; `0.35`, stored as
/// `0.34999…`, is not a tie even though `0.35 * 10.0` rounds to `3.5`.
#[allow(clippy::float_cmp)]
fn round_tie_to_tenths(value: f64) -> f64 {
    let scaled = value * 10.0;
    let exact = value.mul_add(10.0, -scaled) == 0.0;
    if exact && scaled.fract().abs() == 0.5 {
        scaled.round() / 10.0
    } else {
        value
    }
}

/// Deterministic stand-in image for products without a photo.
#[must_use]
pub fn placeholder_image_url(barcode: &str) -> String {
    format!("https://picsum.photos/seed/{barcode}/400/400")
}

/// Treats an empty upstream string as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
