//! Error type for polynomial construction and access.

/// Error type for polynomial operations.
///
/// Every failure is a caller-correctable input error, detected by a local
/// precondition check before any output is produced. There is no retry
/// policy and no partial-failure state.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PolyError {
    /// Strict coefficient access beyond the polynomial's degree.
    #[error("coefficient index {index} is out of valid bounds [0, {length})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of coefficients, `degree + 1`.
        length: usize,
    },

    /// A NaN or infinite value was supplied as a coefficient.
    #[error("coefficient at exponent {exponent} is NaN or infinite")]
    NonFiniteCoefficient {
        /// Exponent the value was supplied for.
        exponent: usize,
    },
}
