use serde::{Deserialize, Serialize};

/// Sentinel shown in place of any value the lookup could not supply.
pub const NOT_AVAILABLE: &str = "N/A";

/// Display name carried by the not-found placeholder.
pub const NOT_FOUND_NAME: &str = "Product Not Found";

const NOT_FOUND_IMAGE_URL: &str = "https://picsum.photos/seed/notfound/400/400";
const NOT_FOUND_INGREDIENTS: &str = "No ingredients information available.";

/// Per-100g nutrition facts, already formatted for display.
///
/// Every field is either a rendered value (`"52 kcal"`, `"3.5g"`) or
/// [`NOT_AVAILABLE`]; no numeric data survives past formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientInfo {
    pub calories: String,
    pub fat: String,
    pub carbs: String,
    pub protein: String,
}

impl NutrientInfo {
    /// All four fields set to [`NOT_AVAILABLE`].
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            calories: NOT_AVAILABLE.to_string(),
            fat: NOT_AVAILABLE.to_string(),
            carbs: NOT_AVAILABLE.to_string(),
            protein: NOT_AVAILABLE.to_string(),
        }
    }
}

/// A product looked up by barcode, normalized so every field is renderable.
///
/// Missing upstream data is represented by sentinel strings rather than
/// `Option`, so callers never branch on absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The barcode the caller asked for, echoed verbatim.
    pub barcode: String,
    pub name: String,
    /// Brand owner as reported upstream.
    pub manufacturer: String,
    /// First upstream category only.
    pub category: String,
    pub image_url: String,
    pub ingredients: String,
    /// Normalized additive codes, e.g. `"E322"`.
    pub additives: Vec<String>,
    pub nutrients: NutrientInfo,
}

impl Product {
    /// The placeholder returned whenever a real record cannot be obtained.
    #[must_use]
    pub fn not_found(barcode: &str) -> Self {
        Self {
            barcode: barcode.to_owned(),
            name: NOT_FOUND_NAME.to_string(),
            manufacturer: NOT_AVAILABLE.to_string(),
            category: NOT_AVAILABLE.to_string(),
            image_url: NOT_FOUND_IMAGE_URL.to_string(),
            ingredients: NOT_FOUND_INGREDIENTS.to_string(),
            additives: Vec::new(),
            nutrients: NutrientInfo::unavailable(),
        }
    }

    /// Returns `true` if this is the not-found placeholder.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.name == NOT_FOUND_NAME
    }
}
