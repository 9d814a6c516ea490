use std::cmp::Ordering;

use crate::catalog::{Catalog, CatalogEntry};
use crate::models::FoodItem;
use crate::optimizer::guard::{DiversityGuard, ExclusionSet};

/// The single swap the selector proposes next.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSwap {
    /// Index of the item to replace in the working list.
    pub item_index: usize,

    /// The resolved replacement entry.
    pub candidate: CatalogEntry,

    /// Cost reduction on the item's quantity basis. Always positive.
    pub savings: f64,

    /// Signed change in protein grams the swap would cause.
    pub protein_impact: f64,
}

/// Pick the next swap to attempt, or `None` when no item has an
/// admissible money-saving candidate left.
///
/// For each working item the cheapest admissible catalog candidate is
/// taken; across items the largest absolute cost reduction wins. Ties go
/// to the smallest absolute protein impact, then to the item whose name
/// sorts first, so identical inputs always yield the same swap sequence.
pub fn select_swap(
    working: &[FoodItem],
    catalog: &Catalog,
    guard: &DiversityGuard,
    excluded: &ExclusionSet,
) -> Option<PlannedSwap> {
    let mut best: Option<(PlannedSwap, &FoodItem)> = None;

    for (idx, item) in working.iter().enumerate() {
        let Some(swap) = cheapest_admissible(working, idx, item, catalog, guard, excluded) else {
            continue;
        };

        best = match best {
            None => Some((swap, item)),
            Some((incumbent, incumbent_item)) => {
                if prefer(&swap, item, &incumbent, incumbent_item) == Ordering::Less {
                    Some((swap, item))
                } else {
                    Some((incumbent, incumbent_item))
                }
            }
        };
    }

    best.map(|(swap, _)| swap)
}

/// Cheapest admissible candidate for one item, if any saves money.
fn cheapest_admissible(
    working: &[FoodItem],
    idx: usize,
    item: &FoodItem,
    catalog: &Catalog,
    guard: &DiversityGuard,
    excluded: &ExclusionSet,
) -> Option<PlannedSwap> {
    let mut cheapest: Option<PlannedSwap> = None;

    for entry in catalog.substitute_entries(&item.id) {
        let new_price = entry.price_per_unit * item.quantity;
        let savings = item.estimated_price - new_price;
        if savings <= 0.0 {
            continue;
        }
        if !guard.admit(working, idx, entry, excluded).is_admitted() {
            continue;
        }

        let replace = match &cheapest {
            None => true,
            // Ladder order is deterministic, so a strict comparison keeps
            // the first of two equally-priced candidates.
            Some(current) => savings > current.savings,
        };

        if replace {
            cheapest = Some(PlannedSwap {
                item_index: idx,
                candidate: entry.clone(),
                savings,
                protein_impact: entry.macros.protein * item.quantity - item.protein_grams(),
            });
        }
    }

    cheapest
}

/// Ordering between two per-item proposals; `Less` means `a` wins.
fn prefer(a: &PlannedSwap, a_item: &FoodItem, b: &PlannedSwap, b_item: &FoodItem) -> Ordering {
    b.savings
        .partial_cmp(&a.savings)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            a.protein_impact
                .abs()
                .partial_cmp(&b.protein_impact.abs())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a_item.name.cmp(&b_item.name))
}
