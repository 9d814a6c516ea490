use crate::catalog::CatalogEntry;
use crate::models::{OptimizationResult, SavingsStatus};

/// Display an optimization result as a formatted report.
pub fn display_result(result: &OptimizationResult, budget: f64) {
    println!();
    println!("=== Optimized List ===");
    println!();

    let max_name_len = result
        .items
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10);

    for (i, item) in result.items.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  {:>5.1} {} | €{:>6.2}",
            i + 1,
            item.name,
            item.quantity,
            item.unit,
            item.estimated_price,
            width = max_name_len
        );
    }

    if !result.substitutions_applied.is_empty() {
        println!();
        println!("--- Substitutions ---");
        for sub in &result.substitutions_applied {
            let sign = if sub.protein_impact >= 0.0 { "+" } else { "" };
            println!(
                "{} → {} | saved €{:.2} (protein {}{:.1} g)",
                sub.from_name, sub.to_name, sub.savings, sign, sub.protein_impact
            );
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Total cost: €{:.2} (budget €{:.2})", result.total_estimated_cost, budget);
    println!("Total protein: {:.1} g", result.total_protein);
    println!("Efficiency: {:.2} g protein per €", result.efficiency_score);
    if !result.substitutions_applied.is_empty() {
        println!("Total saved: €{:.2}", result.total_savings());
    }
    println!("{}", status_line(result.savings_status));
    println!();
}

/// Honest user-facing framing for each terminal status.
fn status_line(status: SavingsStatus) -> &'static str {
    match status {
        SavingsStatus::WithinSavings => "Your list already fits the budget — nothing was changed.",
        SavingsStatus::AdjustedToSavings => {
            "Adjusted to fit your budget with the substitutions above."
        }
        SavingsStatus::OverSavingsMinimum => {
            "Couldn't reach the budget without reducing variety — this is the closest achievable list."
        }
    }
}

/// Display the candidate ladder for one catalog ingredient.
pub fn display_substitute_ladder(entry: &CatalogEntry, candidates: &[&CatalogEntry]) {
    println!(
        "{} ({}) — €{:.2}/{}",
        entry.name, entry.category, entry.price_per_unit, entry.unit
    );

    if candidates.is_empty() {
        println!("No known substitutes; this ingredient is never swapped.");
        return;
    }

    for candidate in candidates {
        println!(
            "  -> {:<24} €{:>5.2}/{} | {:>5.1} g protein per €",
            candidate.name,
            candidate.price_per_unit,
            candidate.unit,
            candidate.protein_per_cost()
        );
    }
}
