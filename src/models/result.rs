use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::FoodItem;

/// One applied substitution, in application order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionRecord {
    /// Name of the item that was swapped out.
    pub from_name: String,

    /// Name of the catalog candidate that replaced it.
    pub to_name: String,

    /// Cost reduction in currency units. Always positive.
    pub savings: f64,

    /// Signed change in protein grams caused by the swap.
    pub protein_impact: f64,

    /// Human-readable explanation for the presentation layer.
    pub reason: String,
}

/// Terminal classification of the optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsStatus {
    /// The original list already fit the budget; nothing was swapped.
    WithinSavings,

    /// Substitutions brought the list under the budget.
    AdjustedToSavings,

    /// The budget is unreachable under the active constraints; the list
    /// returned is the closest achievable one.
    OverSavingsMinimum,
}

impl fmt::Display for SavingsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SavingsStatus::WithinSavings => "within_savings",
            SavingsStatus::AdjustedToSavings => "adjusted_to_savings",
            SavingsStatus::OverSavingsMinimum => "over_savings_minimum",
        };
        f.write_str(name)
    }
}

/// Outcome of a full optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// The working list after all substitutions.
    pub items: Vec<FoodItem>,

    /// Substitutions in the order they were applied.
    pub substitutions_applied: Vec<SubstitutionRecord>,

    /// Sum of estimated prices across `items`.
    pub total_estimated_cost: f64,

    /// Sum of quantity-scaled protein grams across `items`.
    pub total_protein: f64,

    /// Protein grams per currency unit spent.
    pub efficiency_score: f64,

    pub savings_status: SavingsStatus,
}

impl OptimizationResult {
    /// Total savings across all applied substitutions.
    pub fn total_savings(&self) -> f64 {
        self.substitutions_applied.iter().map(|s| s.savings).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&SavingsStatus::OverSavingsMinimum).unwrap();
        assert_eq!(json, "\"over_savings_minimum\"");

        let back: SavingsStatus = serde_json::from_str("\"within_savings\"").unwrap();
        assert_eq!(back, SavingsStatus::WithinSavings);
    }

    #[test]
    fn test_status_display_matches_wire_form() {
        assert_eq!(SavingsStatus::AdjustedToSavings.to_string(), "adjusted_to_savings");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = SubstitutionRecord {
            from_name: "Salmon fillet".to_string(),
            to_name: "Canned tuna".to_string(),
            savings: 25.0,
            protein_impact: 100.0,
            reason: "cheaper proteins option".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"fromName\""));
        assert!(json.contains("\"proteinImpact\""));
    }
}
