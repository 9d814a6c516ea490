use thiserror::Error;

#[derive(Debug, Error)]
pub enum BasketError {
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Empty shopping list")]
    EmptyShoppingList,

    #[error("Catalog entry '{entry}' lists unknown candidate '{candidate}'")]
    UnknownCandidate { entry: String, candidate: String },

    #[error("Catalog entry '{entry}' lists cross-category candidate '{candidate}'")]
    CategoryMismatch { entry: String, candidate: String },
}

pub type Result<T> = std::result::Result<T, BasketError>;
