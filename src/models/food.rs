use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::IngredientId;

/// Shopping-list category of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Proteins,
    Grains,
    Vegetables,
    Fruits,
    Dairy,
    Oils,
    Spices,
    Beverages,
    Others,
}

impl Category {
    /// Whether items of this category count toward protein-source variety.
    #[inline]
    pub fn is_protein(self) -> bool {
        matches!(self, Category::Proteins)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Proteins => "proteins",
            Category::Grains => "grains",
            Category::Vegetables => "vegetables",
            Category::Fruits => "fruits",
            Category::Dairy => "dairy",
            Category::Oils => "oils",
            Category::Spices => "spices",
            Category::Beverages => "beverages",
            Category::Others => "others",
        };
        f.write_str(name)
    }
}

/// Macros in grams per kilogram of the ingredient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroProfile {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroProfile {
    pub const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }
}

/// A priced, macro-tagged ingredient entry in a shopping list.
///
/// Quantities are kilograms and prices are per kilogram, so
/// `estimated_price` is always `price_per_unit * quantity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: IngredientId,
    pub name: String,
    pub category: Category,
    pub unit: String,
    pub price_per_unit: f64,
    pub quantity: f64,
    pub estimated_price: f64,
    pub macros: MacroProfile,
}

impl FoodItem {
    /// Build an item with the estimated price derived from price and quantity.
    pub fn new(
        id: IngredientId,
        name: impl Into<String>,
        category: Category,
        unit: impl Into<String>,
        price_per_unit: f64,
        quantity: f64,
        macros: MacroProfile,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            unit: unit.into(),
            price_per_unit,
            quantity,
            estimated_price: price_per_unit * quantity,
            macros,
        }
    }

    /// Protein contribution in grams, scaled to the item's quantity.
    #[inline]
    pub fn protein_grams(&self) -> f64 {
        self.macros.protein * self.quantity
    }

    /// Carb contribution in grams, scaled to the item's quantity.
    #[inline]
    pub fn carbs_grams(&self) -> f64 {
        self.macros.carbs * self.quantity
    }

    /// Fat contribution in grams, scaled to the item's quantity.
    #[inline]
    pub fn fat_grams(&self) -> f64 {
        self.macros.fat * self.quantity
    }

    /// Basic validation: non-negative numbers and a consistent estimated price.
    pub fn is_valid(&self) -> bool {
        self.price_per_unit >= 0.0
            && self.quantity >= 0.0
            && self.macros.protein >= 0.0
            && self.macros.carbs >= 0.0
            && self.macros.fat >= 0.0
            && (self.estimated_price - self.price_per_unit * self.quantity).abs() < 0.01
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
