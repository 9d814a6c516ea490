use crate::models::{FoodItem, OptimizationResult, SavingsStatus, SubstitutionRecord};

/// Derive totals, the efficiency score, and the terminal status for a
/// finished run.
///
/// Status semantics: no swaps and under budget means the original list
/// already fit (`within_savings`); swaps that land under budget are
/// `adjusted_to_savings`; a final total still above budget is the honest
/// best-effort outcome `over_savings_minimum`, never an error.
pub fn summarize(
    items: Vec<FoodItem>,
    substitutions: Vec<SubstitutionRecord>,
    budget: f64,
) -> OptimizationResult {
    let total_estimated_cost: f64 = items.iter().map(|i| i.estimated_price).sum();
    let total_protein: f64 = items.iter().map(FoodItem::protein_grams).sum();

    let efficiency_score = if total_estimated_cost > 0.0 {
        total_protein / total_estimated_cost
    } else {
        0.0
    };

    let savings_status = if total_estimated_cost > budget {
        SavingsStatus::OverSavingsMinimum
    } else if substitutions.is_empty() {
        SavingsStatus::WithinSavings
    } else {
        SavingsStatus::AdjustedToSavings
    };

    OptimizationResult {
        items,
        substitutions_applied: substitutions,
        total_estimated_cost,
        total_protein,
        efficiency_score,
        savings_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IngredientId;
    use crate::models::{Category, MacroProfile};

    fn item(name: &str, price_per_kg: f64, quantity: f64, protein_per_kg: f64) -> FoodItem {
        FoodItem::new(
            IngredientId::new(name.to_lowercase().replace(' ', "-")),
            name,
            Category::Proteins,
            "kg",
            price_per_kg,
            quantity,
            MacroProfile::new(protein_per_kg, 0.0, 0.0),
        )
    }

    fn record(savings: f64) -> SubstitutionRecord {
        SubstitutionRecord {
            from_name: "A".to_string(),
            to_name: "B".to_string(),
            savings,
            protein_impact: 0.0,
            reason: "test".to_string(),
        }
    }

    #[test]
    fn test_totals_sum_over_items() {
        let items = vec![
            item("Chicken breast", 7.99, 1.0, 230.0),
            item("Canned tuna", 6.49, 2.0, 250.0),
        ];
        let result = summarize(items, vec![], 100.0);

        assert!((result.total_estimated_cost - 20.97).abs() < 0.001);
        assert!((result.total_protein - 730.0).abs() < 0.001);
    }

    #[test]
    fn test_efficiency_is_protein_per_euro() {
        let items = vec![item("Chicken breast", 8.0, 1.0, 240.0)];
        let result = summarize(items, vec![], 100.0);
        assert!((result.efficiency_score - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_efficiency_zero_cost_guard() {
        let items = vec![item("Water", 0.0, 1.0, 0.0)];
        let result = summarize(items, vec![], 100.0);
        assert_eq!(result.efficiency_score, 0.0);
    }

    #[test]
    fn test_status_within_when_untouched() {
        let items = vec![item("Chicken breast", 7.99, 1.0, 230.0)];
        let result = summarize(items, vec![], 50.0);
        assert_eq!(result.savings_status, SavingsStatus::WithinSavings);
    }

    #[test]
    fn test_status_adjusted_after_swaps() {
        let items = vec![item("Canned tuna", 6.49, 1.0, 250.0)];
        let result = summarize(items, vec![record(5.0)], 10.0);
        assert_eq!(result.savings_status, SavingsStatus::AdjustedToSavings);
    }

    #[test]
    fn test_status_over_regardless_of_swaps() {
        let items = vec![item("Chicken breast", 7.99, 10.0, 230.0)];

        let untouched = summarize(items.clone(), vec![], 20.0);
        assert_eq!(untouched.savings_status, SavingsStatus::OverSavingsMinimum);

        let swapped = summarize(items, vec![record(3.0)], 20.0);
        assert_eq!(swapped.savings_status, SavingsStatus::OverSavingsMinimum);
    }

    #[test]
    fn test_total_savings_sums_records() {
        let items = vec![item("Canned tuna", 6.49, 1.0, 250.0)];
        let result = summarize(items, vec![record(5.0), record(2.5)], 10.0);
        assert!((result.total_savings() - 7.5).abs() < 0.001);
    }
}
