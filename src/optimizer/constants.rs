/// Minimum distinct protein-category names a list must keep once it has
/// that many. Variety-protection parameter.
pub const MIN_PROTEIN_SOURCES: usize = 2;

/// Maximum protein-category substitutions per optimization run.
/// Variety-protection parameter.
pub const MAX_PROTEIN_SWAPS: usize = 2;

/// Tolerance when validating the caller-supplied total cost (half a cent).
pub const COST_TOLERANCE: f64 = 0.005;

/// Hard stop for the substitution loop. Every round strictly reduces the
/// working total, so in practice the loop exits long before this.
pub const MAX_SUBSTITUTION_ROUNDS: usize = 64;
