//! Known-good barcodes for simulated scans.

use rand::Rng;

/// Real products present in Open Food Facts.
pub const KNOWN_BARCODES: [&str; 3] = [
    "3017620422003", // Nutella
    "7622210449283", // Oreo
    "049000042566",  // Coca-Cola Classic
];

/// Picks one of [`KNOWN_BARCODES`] uniformly at random.
#[must_use]
pub fn random_barcode() -> &'static str {
    random_barcode_with(&mut rand::rng())
}

/// Like [`random_barcode`], drawing from the supplied generator.
#[must_use]
pub fn random_barcode_with<R: Rng>(rng: &mut R) -> &'static str {
    KNOWN_BARCODES[rng.random_range(0..KNOWN_BARCODES.len())]
}
