use crate::catalog::{builtin_catalog, Catalog};
use crate::error::{BasketError, Result};
use crate::models::{FoodItem, OptimizationResult, SubstitutionRecord};
use crate::optimizer::constants::{COST_TOLERANCE, MAX_SUBSTITUTION_ROUNDS};
use crate::optimizer::guard::{DiversityGuard, ExclusionSet, VarietyConfig};
use crate::optimizer::metrics::summarize;
use crate::optimizer::selector::{select_swap, PlannedSwap};

/// Control-loop state of one optimization run.
#[derive(Debug)]
enum DriverState {
    Evaluating,
    Swapping(PlannedSwap),
    Terminated,
}

/// Optimize a shopping list against a budget using the builtin catalog and
/// default variety protection.
///
/// The caller's list is never mutated; the result carries a fresh list.
/// An unreachable budget is not an error: it comes back as the
/// `over_savings_minimum` status with the closest achievable list.
pub fn optimize(
    items: &[FoodItem],
    total_cost: f64,
    budget: f64,
    excluded_foods: &[String],
) -> Result<OptimizationResult> {
    optimize_with(
        builtin_catalog(),
        VarietyConfig::default(),
        items,
        total_cost,
        budget,
        excluded_foods,
    )
}

/// Optimize against an explicit catalog and variety configuration.
pub fn optimize_with(
    catalog: &Catalog,
    config: VarietyConfig,
    items: &[FoodItem],
    total_cost: f64,
    budget: f64,
    excluded_foods: &[String],
) -> Result<OptimizationResult> {
    validate_input(items, total_cost, budget)?;

    let excluded = ExclusionSet::new(excluded_foods);
    let mut guard = DiversityGuard::new(config);
    let mut working: Vec<FoodItem> = items.to_vec();
    let mut substitutions: Vec<SubstitutionRecord> = Vec::new();

    let mut state = DriverState::Evaluating;
    let mut rounds = 0;

    loop {
        state = match state {
            DriverState::Evaluating => {
                if working_total(&working) <= budget || rounds >= MAX_SUBSTITUTION_ROUNDS {
                    DriverState::Terminated
                } else {
                    match select_swap(&working, catalog, &guard, &excluded) {
                        Some(swap) => DriverState::Swapping(swap),
                        None => DriverState::Terminated,
                    }
                }
            }
            DriverState::Swapping(swap) => {
                let record = apply_swap(&mut working, &mut guard, &swap);
                substitutions.push(record);
                rounds += 1;
                DriverState::Evaluating
            }
            DriverState::Terminated => break,
        };
    }

    Ok(summarize(working, substitutions, budget))
}

fn validate_input(items: &[FoodItem], total_cost: f64, budget: f64) -> Result<()> {
    if items.is_empty() {
        return Err(BasketError::EmptyShoppingList);
    }
    if budget < 0.0 {
        return Err(BasketError::InvalidInput(format!(
            "budget must be >= 0, got {budget}"
        )));
    }

    let actual: f64 = items.iter().map(|i| i.estimated_price).sum();
    if (actual - total_cost).abs() > COST_TOLERANCE {
        return Err(BasketError::InvalidInput(format!(
            "total cost {total_cost:.2} does not match item prices summing to {actual:.2}"
        )));
    }

    Ok(())
}

fn working_total(items: &[FoodItem]) -> f64 {
    items.iter().map(|i| i.estimated_price).sum()
}

/// Replace the chosen item with its candidate on the same quantity basis
/// and log the substitution.
fn apply_swap(
    working: &mut [FoodItem],
    guard: &mut DiversityGuard,
    swap: &PlannedSwap,
) -> SubstitutionRecord {
    let old = working[swap.item_index].clone();
    let replacement = swap.candidate.to_item(old.quantity);
    let record = SubstitutionRecord {
        from_name: old.name.clone(),
        to_name: replacement.name.clone(),
        savings: swap.savings,
        protein_impact: swap.protein_impact,
        reason: format!(
            "Cheaper {} option saves €{:.2} (protein {:+.1} g)",
            old.category, swap.savings, swap.protein_impact
        ),
    };

    working[swap.item_index] = replacement;
    guard.record_swap(&old);
    record
}
