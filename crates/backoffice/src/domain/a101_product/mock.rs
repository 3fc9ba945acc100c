use contracts::domain::a101_product::Product;
use contracts::shared::records::Record;
use once_cell::sync::Lazy;

use crate::shared::mock::days_ago;

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(build_products);
static RECORDS: Lazy<Vec<Record>> = Lazy::new(|| PRODUCTS.iter().map(Record::from).collect());

pub fn records() -> &'static [Record] {
    &RECORDS
}

fn build_products() -> Vec<Product> {
    // (id, site, sku, name, brand, category, price, stock, active, created days ago)
    let rows: [(i64, i64, &str, &str, &str, &str, f64, i64, bool, i64); 12] = [
        (1, 1, "MUG-001", "Ceramic mug 350 ml", "Maison Claire", "Kitchen", 12.90, 140, true, 380),
        (2, 1, "MUG-002", "Espresso cups, set of 4", "Maison Claire", "Kitchen", 24.50, 35, true, 200),
        (3, 1, "TEA-010", "Cast iron teapot", "Atelier Fonte", "Kitchen", 59.00, 8, true, 90),
        (4, 2, "LMP-100", "Linen lamp shade", "Lumen", "Lighting", 39.90, 0, false, 410),
        (5, 2, "LMP-120", "Brass desk lamp", "Lumen", "Lighting", 129.00, 14, true, 25),
        (6, 1, "CUS-045", "Wool cushion cover", "Tissage Nord", "Textile", 29.00, 60, true, 150),
        (7, 1, "CUS-046", "Velvet cushion cover", "Tissage Nord", "Textile", 34.00, 22, true, 20),
        (8, 2, "RUG-300", "Jute rug 160x230", "Tissage Nord", "Textile", 189.00, 5, true, 300),
        (9, 1, "CND-007", "Scented candle fig", "Cire & Co", "Decoration", 18.50, 210, true, 3),
        (10, 2, "CND-008", "Scented candle cedar", "Cire & Co", "Decoration", 18.50, 0, true, 6),
        (11, 1, "VAS-210", "Stoneware vase", "Atelier Fonte", "Decoration", 45.00, 17, true, 60),
        (12, 2, "PLT-005", "Dinner plates, set of 6", "Maison Claire", "Kitchen", 72.00, 11, false, 700),
    ];

    rows.iter()
        .map(
            |&(id, site_id, sku, name, brand, category, price, stock, active, created)| Product {
                id,
                site_id,
                sku: sku.to_string(),
                name: name.to_string(),
                brand: brand.to_string(),
                category: category.to_string(),
                price,
                stock,
                active,
                created_at: days_ago(created, 9, 0),
            },
        )
        .collect()
}
