//! Constants for multiplication strategy thresholds.

/// Degree at or below which the recursive strategies fall back to the
/// schoolbook kernel.
pub const KARATSUBA_BASE_CASE_DEGREE: usize = 1;

/// Default degree threshold at which the adaptive strategy switches from
/// the schoolbook kernel to Karatsuba. Below this size the recursion
/// overhead outweighs the saved coefficient multiplications.
pub const DEFAULT_KARATSUBA_THRESHOLD: usize = 8;
