pub mod constants;
pub mod driver;
pub mod guard;
pub mod metrics;
pub mod selector;

pub use constants::*;
pub use driver::{optimize, optimize_with};
pub use guard::{Admission, DiversityGuard, ExclusionSet, RejectReason, VarietyConfig};
pub use metrics::summarize;
pub use selector::{select_swap, PlannedSwap};
