use super::*;

// -----------------------------------------------------------------------
// normalize_product
// -----------------------------------------------------------------------

fn make_nutriments() -> Nutriments {
    Nutriments {
        energy_kcal_100g: Some(539.0),
        fat_100g: Some(30.9),
        carbohydrates_100g: Some(57.5),
        proteins_100g: Some(6.3),
    }
}

fn make_off_product() -> OffProduct {
    OffProduct {
        product_name: Some("Nutella".to_owned()),
        brands: Some("Ferrero".to_owned()),
        categories: Some("Spreads, Sweet spreads, Hazelnut spreads".to_owned()),
        image_url: Some(
            "https://images.openfoodfacts.org/images/products/301/762/042/2003/front_en.jpg"
                .to_owned(),
        ),
        ingredients_text: Some("Sugar, palm oil, hazelnuts 13%".to_owned()),
        additives_tags: Some(vec!["en:e322".to_owned(), "en:e322i".to_owned()]),
        nutriments: Some(make_nutriments()),
    }
}

#[test]
fn normalize_product_maps_every_field() {
    let product = normalize_product(make_off_product(), "3017620422003");
    assert_eq!(product.barcode, "3017620422003");
    assert_eq!(product.name, "Nutella");
    assert_eq!(product.manufacturer, "Ferrero");
    assert_eq!(product.category, "Spreads");
    assert_eq!(
        product.image_url,
        "https://images.openfoodfacts.org/images/products/301/762/042/2003/front_en.jpg"
    );
    assert_eq!(product.ingredients, "Sugar, palm oil, hazelnuts 13%");
    assert_eq!(product.additives, vec!["E322", "E322I"]);
    assert_eq!(product.nutrients.calories, "539 kcal");
    assert_eq!(product.nutrients.fat, "30.9g");
    assert_eq!(product.nutrients.carbs, "57.5g");
    assert_eq!(product.nutrients.protein, "6.3g");
    assert!(!product.is_not_found());
}

#[test]
fn normalize_product_empty_record_uses_fallbacks() {
    let product = normalize_product(OffProduct::default(), "0000");
    assert_eq!(product.barcode, "0000");
    assert_eq!(product.name, "Name not available");
    assert_eq!(product.manufacturer, "Brand not available");
    assert_eq!(product.category, "Uncategorized");
    assert_eq!(product.image_url, "https://picsum.photos/seed/0000/400/400");
    assert_eq!(product.ingredients, "No ingredients list available.");
    assert!(product.additives.is_empty());
    assert_eq!(product.nutrients, NutrientInfo::unavailable());
}

#[test]
fn normalize_product_treats_empty_strings_as_absent() {
    let raw = OffProduct {
        product_name: Some(String::new()),
        brands: Some(String::new()),
        categories: Some(" , Snacks".to_owned()),
        image_url: Some(String::new()),
        ingredients_text: Some(String::new()),
        additives_tags: Some(vec![]),
        nutriments: None,
    };
    let product = normalize_product(raw, "42");
    assert_eq!(product.name, "Name not available");
    assert_eq!(product.manufacturer, "Brand not available");
    assert_eq!(product.category, "Uncategorized");
    assert_eq!(product.image_url, "https://picsum.photos/seed/42/400/400");
    assert_eq!(product.ingredients, "No ingredients list available.");
}

// -----------------------------------------------------------------------
// first_category
// -----------------------------------------------------------------------

#[test]
fn first_category_takes_first_segment() {
    assert_eq!(
        first_category("Snacks, Sweet snacks, Cookies").as_deref(),
        Some("Snacks")
    );
}

#[test]
fn first_category_trims_whitespace() {
    assert_eq!(first_category("  Beverages  ").as_deref(), Some("Beverages"));
}

#[test]
fn first_category_blank_is_none() {
    assert_eq!(first_category(""), None);
    assert_eq!(first_category("   ,Dairies"), None);
}

// -----------------------------------------------------------------------
// normalize_additive
// -----------------------------------------------------------------------

#[test]
fn normalize_additive_strips_en_prefix() {
    assert_eq!(normalize_additive("en:e322").as_deref(), Some("E322"));
}

#[test]
fn normalize_additive_strips_other_language_prefixes() {
    assert_eq!(normalize_additive("fr:e330").as_deref(), Some("E330"));
}

#[test]
fn normalize_additive_without_prefix_is_uppercased() {
    assert_eq!(normalize_additive("e471").as_deref(), Some("E471"));
}

#[test]
fn normalize_additive_empty_code_is_dropped() {
    assert_eq!(normalize_additive("en:"), None);
    assert_eq!(normalize_additive(""), None);
}

// -----------------------------------------------------------------------
// nutrient formatting
// -----------------------------------------------------------------------

#[test]
fn format_calories_rounds_to_nearest() {
    assert_eq!(format_calories(Some(104.6)), "105 kcal");
    assert_eq!(format_calories(Some(104.4)), "104 kcal");
    assert_eq!(format_calories(Some(52.0)), "52 kcal");
}

#[test]
fn format_calories_zero_is_present() {
    assert_eq!(format_calories(Some(0.0)), "0 kcal");
    assert_eq!(format_calories(Some(-0.2)), "0 kcal");
}

#[test]
fn format_calories_absent_is_na() {
    assert_eq!(format_calories(None), "N/A");
}

#[test]
fn format_grams_one_decimal() {
    assert_eq!(format_grams(Some(3.5)), "3.5g");
    assert_eq!(format_grams(Some(12.0)), "12.0g");
    assert_eq!(format_grams(Some(6.34)), "6.3g");
}

#[test]
fn format_grams_zero_is_not_na() {
    assert_eq!(format_grams(Some(0.0)), "0.0g");
}

#[test]
fn format_grams_absent_is_na() {
    assert_eq!(format_grams(None), "N/A");
}

#[test]
fn normalize_nutrients_mixes_present_and_absent() {
    let nutriments = Nutriments {
        energy_kcal_100g: None,
        fat_100g: Some(0.0),
        carbohydrates_100g: None,
        proteins_100g: Some(1.24),
    };
    let info = normalize_nutrients(&nutriments);
    assert_eq!(info.calories, "N/A");
    assert_eq!(info.fat, "0.0g");
    assert_eq!(info.carbs, "N/A");
    assert_eq!(info.protein, "1.2g");
}

#[test]
fn format_grams_ties_round_up() {
    assert_eq!(format_grams(Some(0.25)), "0.3g");
    assert_eq!(format_grams(Some(0.75)), "0.8g");
    assert_eq!(format_grams(Some(1.25)), "1.3g");
    assert_eq!(format_grams(Some(2.25)), "2.3g");
}

#[test]
fn format_grams_near_ties_use_stored_value() {
    // 0.35 is stored just below the midpoint, 1.05 just above it.
    assert_eq!(format_grams(Some(0.35)), "0.3g");
    assert_eq!(format_grams(Some(1.05)), "1.1g");
}
