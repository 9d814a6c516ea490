use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{Catalog, IngredientId};
use crate::error::{BasketError, Result};
use crate::models::{FoodItem, OptimizationResult};

/// Load a shopping list from a JSON file (`Vec<FoodItem>`).
///
/// Every item is validated: non-negative numbers and an estimated price
/// consistent with price-per-unit times quantity.
pub fn load_items_json<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<FoodItem> = serde_json::from_str(&content)?;

    for item in &items {
        if !item.is_valid() {
            return Err(BasketError::InvalidInput(format!(
                "item '{}' has inconsistent or negative pricing data",
                item.name
            )));
        }
    }

    Ok(items)
}

/// One row of a CSV shopping-list export: an ingredient ID plus quantity.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    quantity: f64,
}

/// Load a shopping list from a CSV export (`id,quantity` per row).
///
/// Prices and macro profiles come from the catalog; an ID the catalog
/// does not know is an error, not a silently skipped row.
pub fn load_items_csv<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<Vec<FoodItem>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut items = Vec::new();

    for row in reader.deserialize() {
        let row: CsvRow = row?;
        let id = IngredientId::new(row.id);
        let entry = catalog
            .entry(&id)
            .ok_or_else(|| BasketError::IngredientNotFound(id.to_string()))?;

        if row.quantity < 0.0 {
            return Err(BasketError::InvalidInput(format!(
                "negative quantity for '{}'",
                id
            )));
        }

        items.push(entry.to_item(row.quantity));
    }

    Ok(items)
}

/// Load a shopping list, dispatching on the file extension
/// (`.csv` vs JSON for everything else).
pub fn load_shopping_list<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<Vec<FoodItem>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        load_items_csv(path, catalog)
    } else {
        load_items_json(path)
    }
}

/// Save an optimization result as pretty JSON.
pub fn save_result<P: AsRef<Path>>(path: P, result: &OptimizationResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json)?;
    Ok(())
}
