mod food;
mod result;

pub use food::{Category, FoodItem, MacroProfile};
pub use result::{OptimizationResult, SavingsStatus, SubstitutionRecord};
