use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BasketError, Result};
use crate::models::{Category, FoodItem, MacroProfile};

/// Stable identifier for a catalog ingredient.
///
/// Lookups go through IDs rather than free-text names, so a broken
/// candidate link is a load-time error instead of a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(String);

impl IngredientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One priced, macro-tagged ingredient known to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: IngredientId,
    pub name: String,
    pub category: Category,
    pub unit: String,
    pub price_per_unit: f64,
    pub macros: MacroProfile,
}

impl CatalogEntry {
    pub fn new(
        id: &str,
        name: &str,
        category: Category,
        price_per_unit: f64,
        macros: MacroProfile,
    ) -> Self {
        Self {
            id: IngredientId::new(id),
            name: name.to_string(),
            category,
            unit: "kg".to_string(),
            price_per_unit,
            macros,
        }
    }

    /// Protein grams bought per currency unit at this entry's price.
    #[inline]
    pub fn protein_per_cost(&self) -> f64 {
        if self.price_per_unit > 0.0 {
            self.macros.protein / self.price_per_unit
        } else {
            0.0
        }
    }

    /// Materialize this entry as a shopping-list item of the given quantity.
    pub fn to_item(&self, quantity: f64) -> FoodItem {
        FoodItem::new(
            self.id.clone(),
            self.name.clone(),
            self.category,
            self.unit.clone(),
            self.price_per_unit,
            quantity,
            self.macros,
        )
    }
}

/// Read-only substitution table: ingredient entries plus an ID-keyed
/// adjacency map from an ingredient to its same-category candidates,
/// ordered by descending protein-per-cost.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<IngredientId, CatalogEntry>,
    candidates: HashMap<IngredientId, Vec<IngredientId>>,
}

impl Catalog {
    /// Build a catalog from entries and candidate links.
    ///
    /// Every candidate ID must resolve to a known entry of the same
    /// category as the ingredient it substitutes. Candidate ladders are
    /// normalized to descending protein-per-cost order (ties: ascending
    /// price, then ID).
    pub fn from_parts(
        entries: Vec<CatalogEntry>,
        links: Vec<(IngredientId, Vec<IngredientId>)>,
    ) -> Result<Self> {
        let mut entry_map = HashMap::new();
        for entry in entries {
            entry_map.insert(entry.id.clone(), entry);
        }

        let mut candidate_map = HashMap::new();
        for (from, mut ladder) in links {
            let from_entry = entry_map.get(&from).ok_or_else(|| {
                BasketError::IngredientNotFound(from.to_string())
            })?;

            for candidate in &ladder {
                let candidate_entry =
                    entry_map
                        .get(candidate)
                        .ok_or_else(|| BasketError::UnknownCandidate {
                            entry: from.to_string(),
                            candidate: candidate.to_string(),
                        })?;

                if candidate_entry.category != from_entry.category {
                    return Err(BasketError::CategoryMismatch {
                        entry: from.to_string(),
                        candidate: candidate.to_string(),
                    });
                }
            }

            ladder.sort_by(|a, b| {
                let ea = &entry_map[a];
                let eb = &entry_map[b];
                eb.protein_per_cost()
                    .partial_cmp(&ea.protein_per_cost())
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| {
                        ea.price_per_unit
                            .partial_cmp(&eb.price_per_unit)
                            .unwrap_or(std::cmp::Ordering::Equal)
                    })
                    .then_with(|| a.cmp(b))
            });

            candidate_map.insert(from, ladder);
        }

        Ok(Self {
            entries: entry_map,
            candidates: candidate_map,
        })
    }

    /// Get an entry by ID.
    pub fn entry(&self, id: &IngredientId) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    /// Candidate IDs for an ingredient, in descending protein-per-cost
    /// order. Ingredients with no known substitutes return an empty slice
    /// and are never swapped.
    pub fn substitutes(&self, id: &IngredientId) -> &[IngredientId] {
        self.candidates.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Candidate entries for an ingredient, resolved and in ladder order.
    pub fn substitute_entries(&self, id: &IngredientId) -> Vec<&CatalogEntry> {
        self.substitutes(id)
            .iter()
            .filter_map(|c| self.entries.get(c))
            .collect()
    }

    /// Find an entry by display name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        let needle = name.to_lowercase();
        self.entries
            .values()
            .find(|e| e.name.to_lowercase() == needle)
    }

    /// All entries, in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protein(id: &str, name: &str, price: f64, protein_per_kg: f64) -> CatalogEntry {
        CatalogEntry::new(
            id,
            name,
            Category::Proteins,
            price,
            MacroProfile::new(protein_per_kg, 0.0, 50.0),
        )
    }

    fn sample_entries() -> Vec<CatalogEntry> {
        vec![
            protein("salmon-fillet", "Salmon fillet", 18.99, 200.0),
            protein("canned-tuna", "Canned tuna", 6.49, 250.0),
            protein("chicken-breast", "Chicken breast", 7.99, 230.0),
            CatalogEntry::new(
                "white-rice",
                "White rice",
                Category::Grains,
                2.49,
                MacroProfile::new(70.0, 780.0, 10.0),
            ),
        ]
    }

    #[test]
    fn test_ladder_sorted_by_protein_per_cost() {
        let links = vec![(
            IngredientId::new("salmon-fillet"),
            vec![
                IngredientId::new("chicken-breast"),
                IngredientId::new("canned-tuna"),
            ],
        )];
        let catalog = Catalog::from_parts(sample_entries(), links).unwrap();

        let ladder = catalog.substitutes(&IngredientId::new("salmon-fillet"));
        // Tuna: 250/6.49 = 38.5; breast: 230/7.99 = 28.8.
        assert_eq!(ladder[0].as_str(), "canned-tuna");
        assert_eq!(ladder[1].as_str(), "chicken-breast");
    }

    #[test]
    fn test_unknown_candidate_rejected_at_load() {
        let links = vec![(
            IngredientId::new("salmon-fillet"),
            vec![IngredientId::new("no-such-fish")],
        )];
        let err = Catalog::from_parts(sample_entries(), links).unwrap_err();
        assert!(matches!(err, BasketError::UnknownCandidate { .. }));
    }

    #[test]
    fn test_cross_category_candidate_rejected_at_load() {
        let links = vec![(
            IngredientId::new("salmon-fillet"),
            vec![IngredientId::new("white-rice")],
        )];
        let err = Catalog::from_parts(sample_entries(), links).unwrap_err();
        assert!(matches!(err, BasketError::CategoryMismatch { .. }));
    }

    #[test]
    fn test_no_substitutes_is_empty_slice() {
        let catalog = Catalog::from_parts(sample_entries(), vec![]).unwrap();
        assert!(catalog
            .substitutes(&IngredientId::new("chicken-breast"))
            .is_empty());
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let catalog = Catalog::from_parts(sample_entries(), vec![]).unwrap();
        assert!(catalog.find_by_name("SALMON FILLET").is_some());
        assert!(catalog.find_by_name("halibut").is_none());
    }

    #[test]
    fn test_to_item_derives_price() {
        let catalog = Catalog::from_parts(sample_entries(), vec![]).unwrap();
        let entry = catalog.entry(&IngredientId::new("white-rice")).unwrap();
        let item = entry.to_item(3.0);
        assert!((item.estimated_price - 7.47).abs() < 0.001);
        assert!((item.protein_grams() - 210.0).abs() < 0.001);
    }
}
