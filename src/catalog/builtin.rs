use std::sync::LazyLock;

use crate::catalog::{Catalog, CatalogEntry, IngredientId};
use crate::models::Category::{self, *};
use crate::models::MacroProfile;

/// Builtin substitution table.
///
/// Prices are EUR per kilogram, macros are grams per kilogram. Candidate
/// ladders only list cheaper, same-category peers an ordinary supermarket
/// carries; ingredients that already sit at the price floor of their
/// category (e.g. chicken breast among lean proteins) have no candidates
/// and are never swapped.
static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_parts(entries(), links()).expect("builtin catalog is internally consistent")
});

/// The builtin catalog, validated on first access.
pub fn builtin_catalog() -> &'static Catalog {
    &BUILTIN
}

fn entry(
    id: &str,
    name: &str,
    category: Category,
    price: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> CatalogEntry {
    CatalogEntry::new(id, name, category, price, MacroProfile::new(protein, carbs, fat))
}

fn entries() -> Vec<CatalogEntry> {
    vec![
        // Proteins
        entry("chicken-breast", "Chicken breast", Proteins, 7.99, 230.0, 0.0, 26.0),
        entry("chicken-thigh", "Chicken thigh", Proteins, 5.99, 185.0, 0.0, 90.0),
        entry("turkey-breast", "Turkey breast", Proteins, 8.99, 240.0, 0.0, 10.0),
        entry("beef-mince", "Beef mince", Proteins, 9.49, 200.0, 0.0, 170.0),
        entry("pork-loin", "Pork loin", Proteins, 6.99, 215.0, 0.0, 60.0),
        entry("salmon-fillet", "Salmon fillet", Proteins, 18.99, 200.0, 0.0, 130.0),
        entry("canned-tuna", "Canned tuna", Proteins, 6.49, 250.0, 0.0, 8.0),
        entry("eggs", "Eggs", Proteins, 3.29, 125.0, 10.0, 105.0),
        entry("tofu", "Tofu", Proteins, 4.50, 120.0, 20.0, 70.0),
        // Grains
        entry("white-rice", "White rice", Grains, 2.49, 70.0, 780.0, 10.0),
        entry("brown-rice", "Brown rice", Grains, 2.99, 75.0, 760.0, 25.0),
        entry("quinoa", "Quinoa", Grains, 9.49, 140.0, 640.0, 60.0),
        entry("pasta", "Pasta", Grains, 1.79, 120.0, 750.0, 15.0),
        entry("couscous", "Couscous", Grains, 2.89, 130.0, 770.0, 6.0),
        entry("oats", "Rolled oats", Grains, 1.49, 135.0, 600.0, 70.0),
        // Vegetables
        entry("broccoli", "Broccoli", Vegetables, 2.99, 28.0, 70.0, 4.0),
        entry("bell-pepper", "Bell pepper", Vegetables, 4.49, 10.0, 60.0, 3.0),
        entry("spinach", "Spinach", Vegetables, 3.99, 29.0, 36.0, 4.0),
        entry("frozen-spinach", "Frozen spinach", Vegetables, 1.79, 29.0, 36.0, 4.0),
        entry("carrot", "Carrot", Vegetables, 0.99, 9.0, 96.0, 2.0),
        entry("zucchini", "Zucchini", Vegetables, 2.29, 12.0, 31.0, 3.0),
        entry("frozen-mixed-veg", "Frozen mixed vegetables", Vegetables, 1.69, 22.0, 80.0, 5.0),
        // Fruits
        entry("blueberries", "Blueberries", Fruits, 9.99, 7.0, 145.0, 3.0),
        entry("strawberries", "Strawberries", Fruits, 6.99, 7.0, 77.0, 3.0),
        entry("banana", "Banana", Fruits, 1.29, 11.0, 230.0, 3.0),
        entry("apple", "Apple", Fruits, 1.99, 3.0, 140.0, 2.0),
        // Dairy
        entry("greek-yogurt", "Greek yogurt", Dairy, 4.99, 100.0, 40.0, 50.0),
        entry("skyr", "Skyr", Dairy, 5.49, 110.0, 40.0, 2.0),
        entry("natural-yogurt", "Natural yogurt", Dairy, 2.19, 45.0, 47.0, 33.0),
        entry("cheddar", "Cheddar", Dairy, 8.99, 250.0, 13.0, 330.0),
        entry("edam", "Edam", Dairy, 6.99, 250.0, 14.0, 280.0),
        entry("mozzarella", "Mozzarella", Dairy, 5.49, 220.0, 22.0, 170.0),
        entry("milk", "Milk", Dairy, 0.99, 34.0, 48.0, 36.0),
        // Oils
        entry("olive-oil", "Olive oil", Oils, 7.99, 0.0, 0.0, 1000.0),
        entry("rapeseed-oil", "Rapeseed oil", Oils, 2.99, 0.0, 0.0, 1000.0),
        entry("sunflower-oil", "Sunflower oil", Oils, 2.49, 0.0, 0.0, 1000.0),
        // Spices
        entry("black-pepper", "Black pepper", Spices, 24.99, 104.0, 640.0, 33.0),
        entry("paprika", "Paprika", Spices, 18.99, 141.0, 540.0, 130.0),
        // Beverages
        entry("orange-juice", "Orange juice", Beverages, 2.29, 7.0, 104.0, 2.0),
        entry("apple-juice", "Apple juice", Beverages, 1.89, 1.0, 110.0, 1.0),
        // Others
        entry("honey", "Honey", Others, 8.99, 3.0, 820.0, 0.0),
    ]
}

fn links() -> Vec<(IngredientId, Vec<IngredientId>)> {
    let link = |from: &str, to: &[&str]| {
        (
            IngredientId::new(from),
            to.iter().map(|id| IngredientId::new(*id)).collect(),
        )
    };

    vec![
        link("salmon-fillet", &["canned-tuna", "chicken-thigh", "chicken-breast"]),
        link("beef-mince", &["chicken-thigh", "pork-loin", "chicken-breast"]),
        link("turkey-breast", &["chicken-thigh", "chicken-breast"]),
        link("pork-loin", &["chicken-thigh"]),
        link("quinoa", &["couscous", "white-rice"]),
        link("brown-rice", &["white-rice"]),
        link("broccoli", &["frozen-mixed-veg", "carrot"]),
        link("bell-pepper", &["carrot", "zucchini"]),
        link("spinach", &["frozen-spinach"]),
        link("blueberries", &["banana", "apple"]),
        link("strawberries", &["banana", "apple"]),
        link("greek-yogurt", &["natural-yogurt"]),
        link("skyr", &["natural-yogurt", "greek-yogurt"]),
        link("cheddar", &["mozzarella", "edam"]),
        link("olive-oil", &["sunflower-oil", "rapeseed-oil"]),
        link("orange-juice", &["apple-juice"]),
    ]
}
