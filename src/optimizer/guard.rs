use std::collections::HashSet;

use crate::catalog::CatalogEntry;
use crate::models::FoodItem;
use crate::optimizer::constants::{MAX_PROTEIN_SWAPS, MIN_PROTEIN_SOURCES};

/// Variety-protection parameters for one optimization run.
#[derive(Debug, Clone)]
pub struct VarietyConfig {
    /// Distinct protein-category names the list must keep once it has
    /// that many.
    pub min_protein_sources: usize,

    /// Cap on protein-category substitutions per run.
    pub max_protein_swaps: usize,
}

impl Default for VarietyConfig {
    fn default() -> Self {
        Self {
            min_protein_sources: MIN_PROTEIN_SOURCES,
            max_protein_swaps: MAX_PROTEIN_SWAPS,
        }
    }
}

/// Caller-supplied food names that substitutions must never introduce.
/// Matching is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    pub fn new(excluded: &[String]) -> Self {
        Self {
            names: excluded.iter().map(|n| n.to_lowercase()).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Why a proposed substitution was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The candidate's name is in the caller's exclusion set.
    ExcludedFood,

    /// The swap would drop distinct protein names below the floor.
    ProteinFloor,

    /// The protein-substitution cap for this run is spent.
    ProteinCapReached,
}

impl RejectReason {
    /// Short code for logs and tests.
    pub fn code(self) -> &'static str {
        match self {
            RejectReason::ExcludedFood => "excluded_food",
            RejectReason::ProteinFloor => "protein_floor",
            RejectReason::ProteinCapReached => "protein_cap_reached",
        }
    }
}

/// Admissibility verdict for a proposed substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    Rejected(RejectReason),
}

impl Admission {
    #[inline]
    pub fn is_admitted(self) -> bool {
        matches!(self, Admission::Admitted)
    }
}

/// Enforces nutritional-variety invariants over the working list.
///
/// The guard only answers questions; the driver applies swaps and reports
/// protein substitutions back via [`DiversityGuard::record_swap`].
#[derive(Debug)]
pub struct DiversityGuard {
    config: VarietyConfig,
    protein_swaps: usize,
}

impl DiversityGuard {
    pub fn new(config: VarietyConfig) -> Self {
        Self {
            config,
            protein_swaps: 0,
        }
    }

    /// Decide whether replacing `working[remove_idx]` with `candidate` is
    /// admissible against the current working list.
    pub fn admit(
        &self,
        working: &[FoodItem],
        remove_idx: usize,
        candidate: &CatalogEntry,
        excluded: &ExclusionSet,
    ) -> Admission {
        if excluded.contains(&candidate.name) {
            return Admission::Rejected(RejectReason::ExcludedFood);
        }

        let removed = &working[remove_idx];

        if removed.category.is_protein() {
            let before = distinct_protein_names(working).len();
            let after = protein_names_after_swap(working, remove_idx, candidate).len();
            if before >= self.config.min_protein_sources
                && after < self.config.min_protein_sources
            {
                return Admission::Rejected(RejectReason::ProteinFloor);
            }

            if self.protein_swaps >= self.config.max_protein_swaps {
                return Admission::Rejected(RejectReason::ProteinCapReached);
            }
        }

        Admission::Admitted
    }

    /// Record an applied swap so the protein cap advances.
    pub fn record_swap(&mut self, removed: &FoodItem) {
        if removed.category.is_protein() {
            self.protein_swaps += 1;
        }
    }

    pub fn protein_swaps(&self) -> usize {
        self.protein_swaps
    }

    pub fn config(&self) -> &VarietyConfig {
        &self.config
    }
}

/// Distinct protein-category names in a list (lowercase).
pub fn distinct_protein_names(items: &[FoodItem]) -> HashSet<String> {
    items
        .iter()
        .filter(|i| i.category.is_protein())
        .map(FoodItem::key)
        .collect()
}

/// Distinct protein names after simulating the full swap: the item at
/// `remove_idx` leaves and the candidate joins.
fn protein_names_after_swap(
    items: &[FoodItem],
    remove_idx: usize,
    candidate: &CatalogEntry,
) -> HashSet<String> {
    let mut names: HashSet<String> = items
        .iter()
        .enumerate()
        .filter(|(idx, item)| *idx != remove_idx && item.category.is_protein())
        .map(|(_, item)| item.key())
        .collect();

    if candidate.category.is_protein() {
        names.insert(candidate.name.to_lowercase());
    }

    names
}
