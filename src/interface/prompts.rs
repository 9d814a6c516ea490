use dialoguer::{Confirm, Input};
use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::error::{BasketError, Result};

/// Prompt for the weekly grocery budget.
pub fn prompt_budget() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("What is your grocery budget for this list?")
        .default("50".to_string())
        .interact_text()?;

    let budget: f64 = input
        .parse()
        .map_err(|_| BasketError::InvalidInput("Invalid number".to_string()))?;

    if budget < 0.0 {
        return Err(BasketError::InvalidInput(
            "Budget must be >= 0".to_string(),
        ));
    }

    Ok(budget)
}

/// Prompt for foods the optimizer must never introduce, with fuzzy
/// matching against catalog names.
pub fn prompt_excluded_foods(catalog: &Catalog) -> Result<Vec<String>> {
    let mut excluded = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a food to exclude (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Try exact match first (case-insensitive)
        if let Some(entry) = catalog.find_by_name(input) {
            excluded.push(entry.name.clone());
            println!("Excluded: {}", entry.name);
            continue;
        }

        // Try fuzzy matching
        let mut candidates: Vec<(&str, f64)> = catalog
            .entries()
            .map(|e| {
                (
                    e.name.as_str(),
                    jaro_winkler(&e.name.to_lowercase(), &input.to_lowercase()),
                )
            })
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let Some((name, _)) = candidates.first() else {
            println!("No catalog food matches '{}'", input);
            continue;
        };

        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", name))
            .default(true)
            .interact()?;

        if confirm {
            excluded.push(name.to_string());
            println!("Excluded: {}", name);
        }
    }

    Ok(excluded)
}

/// Simple yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
