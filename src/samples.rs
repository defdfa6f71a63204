//! Built-in demo catalog.
//!
//! Twenty SKUs in raw units (orders per day, kg, cm³, deliveries per day)
//! covering every zone, used to seed an empty collection.

use crate::model::{NewSku, RawAttributes, ValidationError};
use crate::normalizer::normalize;

/// `(sku_code, product_name, f, w, s, i)` in raw units.
const SAMPLE_SKUS: [(&str, &str, f64, f64, f64, f64); 20] = [
    ("SKU01", "Power Bank 10,000mAh", 180.0, 1.0, 300.0, 18.0),
    ("SKU02", "ASUS Laptop 15.6''", 60.0, 2.0, 5000.0, 10.0),
    ("SKU03", "Oishi Snack 40g", 200.0, 1.0, 80.0, 20.0),
    ("SKU04", "Stainless Steel Bottle 1L", 150.0, 1.0, 900.0, 14.0),
    ("SKU05", "Mini Vacuum Cleaner", 55.0, 4.0, 3500.0, 9.0),
    ("SKU06", "Men's Sneakers", 110.0, 2.0, 4000.0, 8.0),
    ("SKU07", "Shampoo 650ml", 160.0, 2.0, 1200.0, 19.0),
    ("SKU08", "Hand Sanitizer 500ml", 170.0, 2.0, 900.0, 20.0),
    ("SKU09", "Stainless Knife Set", 25.0, 3.0, 1800.0, 5.0),
    ("SKU10", "School Backpack", 70.0, 2.0, 4500.0, 12.0),
    ("SKU11", "Blender", 40.0, 5.0, 6000.0, 7.0),
    ("SKU12", "Cotton T-shirt", 140.0, 1.0, 450.0, 15.0),
    ("SKU13", "Textbook Grade 10", 180.0, 1.0, 700.0, 17.0),
    ("SKU14", "Wireless Gaming Mouse", 120.0, 1.0, 200.0, 13.0),
    ("SKU15", "Tissue Pack (10 packs)", 160.0, 2.0, 2500.0, 16.0),
    ("SKU16", "55-inch TV", 10.0, 18.0, 50000.0, 3.0),
    ("SKU17", "Induction Cooker", 15.0, 15.0, 38000.0, 4.0),
    ("SKU18", "Bedding Set", 50.0, 10.0, 25000.0, 7.0),
    ("SKU19", "WiFi Security Camera", 95.0, 1.0, 700.0, 12.0),
    ("SKU20", "Body Wash 850ml", 130.0, 2.0, 1500.0, 14.0),
];

/// The demo catalog, normalized and validated.
pub fn sample_skus() -> Result<Vec<NewSku>, ValidationError> {
    SAMPLE_SKUS
        .iter()
        .map(|&(code, name, f, w, s, i)| {
            NewSku::new(code, Some(name), normalize(&RawAttributes::new(f, w, s, i)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ZoneLabel;
    use crate::registry::SkuRegistry;

    #[test]
    fn catalog_is_valid_and_unique() {
        let skus = sample_skus().expect("catalog is valid");
        assert_eq!(skus.len(), 20);

        let mut registry = SkuRegistry::new();
        let added = registry.add_missing(skus).expect("added");
        assert_eq!(added.len(), 20);
    }

    #[test]
    fn catalog_scores_match_known_values() {
        let mut registry = SkuRegistry::new();
        registry
            .add_missing(sample_skus().expect("catalog is valid"))
            .expect("added");
        let ranked = registry.ranked();

        let sku01 = ranked.iter().find(|s| s.sku_code == "SKU01").expect("SKU01");
        assert_eq!(sku01.priority, 0.5172);
        assert_eq!(sku01.zone, ZoneLabel::B);

        let sku16 = ranked.iter().find(|s| s.sku_code == "SKU16").expect("SKU16");
        assert_eq!(sku16.zone, ZoneLabel::C);
        assert_eq!(sku16.product_name.as_deref(), Some("55-inch TV"));
    }
}
