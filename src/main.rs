use clap::Parser;
use std::path::Path;

use budget_basket_rs::catalog::builtin_catalog;
use budget_basket_rs::cli::{Cli, Command};
use budget_basket_rs::error::Result;
use budget_basket_rs::interface::{
    display_result, display_substitute_ladder, prompt_budget, prompt_excluded_foods,
    prompt_yes_no,
};
use budget_basket_rs::optimizer::optimize;
use budget_basket_rs::state::{load_shopping_list, save_result};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Optimize {
            budget,
            exclude,
            json,
        } => cmd_optimize(&cli.file, budget, exclude, json),
        Command::Substitutes { name } => cmd_substitutes(&name),
    }
}

/// Optimize a shopping list file against a budget.
fn cmd_optimize(
    file_path: &str,
    budget: Option<f64>,
    exclude: Vec<String>,
    json: bool,
) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Shopping list file not found: {}", file_path);
        eprintln!("Export one from the planner, or pass --file.");
        return Ok(());
    }

    let catalog = builtin_catalog();
    let items = load_shopping_list(path, catalog)?;

    if items.is_empty() {
        println!("The shopping list is empty; nothing to optimize.");
        return Ok(());
    }

    let total_cost: f64 = items.iter().map(|i| i.estimated_price).sum();

    if !json {
        println!("Loaded {} items, total €{:.2}", items.len(), total_cost);
    }

    let budget = match budget {
        Some(b) => b,
        None => prompt_budget()?,
    };

    let excluded = if exclude.is_empty() && !json {
        prompt_excluded_foods(catalog)?
    } else {
        exclude
    };

    let result = optimize(&items, total_cost, budget, &excluded)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    display_result(&result, budget);

    if !result.substitutions_applied.is_empty() {
        let save = prompt_yes_no("Save the optimized list?", true)?;
        if save {
            let out_path = path.with_extension("optimized.json");
            save_result(&out_path, &result)?;
            println!("Saved to {}", out_path.display());
        }
    }

    Ok(())
}

/// Show the substitution candidates for one ingredient.
fn cmd_substitutes(name: &str) -> Result<()> {
    let catalog = builtin_catalog();

    let entry = match catalog.find_by_name(name) {
        Some(entry) => entry,
        None => {
            // Suggest the closest catalog name before giving up.
            let suggestion = catalog
                .entries()
                .map(|e| {
                    (
                        &e.name,
                        strsim::jaro_winkler(&e.name.to_lowercase(), &name.to_lowercase()),
                    )
                })
                .filter(|(_, score)| *score > 0.7)
                .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

            match suggestion {
                Some((closest, _)) => {
                    println!("No catalog entry named '{}'. Did you mean '{}'?", name, closest);
                }
                None => println!("No catalog entry named '{}'", name),
            }
            return Ok(());
        }
    };

    let candidates = catalog.substitute_entries(&entry.id);
    display_substitute_ladder(entry, &candidates);

    Ok(())
}
