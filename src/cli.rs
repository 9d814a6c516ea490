use clap::{Parser, Subcommand};

/// BudgetBasket — trims a priced shopping list down to a budget by
/// swapping in cheaper same-category ingredients.
#[derive(Parser, Debug)]
#[command(name = "budget_basket")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the shopping list file (JSON, or CSV with id,quantity rows).
    #[arg(short, long, default_value = "shopping_list.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Optimize the shopping list against a budget.
    Optimize {
        /// Budget in EUR. Prompted for when omitted.
        #[arg(short, long)]
        budget: Option<f64>,

        /// Food name the optimizer must never introduce. Repeatable.
        #[arg(long = "exclude", value_name = "NAME")]
        exclude: Vec<String>,

        /// Print the result as JSON instead of a report (no prompts).
        #[arg(long)]
        json: bool,
    },

    /// Show the substitution candidates for one catalog ingredient.
    Substitutes {
        /// Ingredient name (fuzzy matched against the catalog).
        name: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Optimize {
            budget: None,
            exclude: Vec::new(),
            json: false,
        }
    }
}
