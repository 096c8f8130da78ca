//! Multiplication strategy trait and implementations.
//!
//! `Multiplier` is the narrow interface over the three algorithms.
//! `AdaptiveStrategy` selects between the exact kernels by operand degree;
//! the approximate FFT strategy must be chosen explicitly, because its
//! result needs the round-and-trim contract applied.

use tracing::debug;

use crate::constants::DEFAULT_KARATSUBA_THRESHOLD;
use crate::polynomial::Polynomial;
use crate::{fft_based, karatsuba, naive};

/// Narrow interface for polynomial multiplication.
///
/// Every strategy is a pure function from two immutable inputs to one
/// immutable output; none of them carries state across calls.
pub trait Multiplier: Send + Sync {
    /// Multiply two polynomials.
    fn multiply(&self, p: &Polynomial, q: &Polynomial) -> Polynomial;

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}

/// Schoolbook convolution strategy, O(N·M), exact.
#[derive(Default)]
pub struct NaiveStrategy;

impl NaiveStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Multiplier for NaiveStrategy {
    fn multiply(&self, p: &Polynomial, q: &Polynomial) -> Polynomial {
        naive::multiply_naive(p, q)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}

/// Karatsuba divide-and-conquer strategy, O(N^1.585), exact.
#[derive(Default)]
pub struct KaratsubaStrategy;

impl KaratsubaStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Multiplier for KaratsubaStrategy {
    fn multiply(&self, p: &Polynomial, q: &Polynomial) -> Polynomial {
        karatsuba::multiply_karatsuba(p, q)
    }

    fn name(&self) -> &'static str {
        "Karatsuba"
    }
}

/// FFT convolution strategy, O(N log N), approximate.
///
/// The raw product carries floating noise; see
/// [`fft_based::multiply_fft`] for the round-and-trim contract.
#[derive(Default)]
pub struct FFTStrategy;

impl FFTStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Multiplier for FFTStrategy {
    fn multiply(&self, p: &Polynomial, q: &Polynomial) -> Polynomial {
        fft_based::multiply_fft(p, q)
    }

    fn name(&self) -> &'static str {
        "FFT"
    }
}

/// Adaptive strategy selecting an exact kernel by operand degree.
pub struct AdaptiveStrategy {
    karatsuba_threshold: usize,
}

impl AdaptiveStrategy {
    /// Create an adaptive strategy switching to Karatsuba at the given
    /// degree threshold.
    #[must_use]
    pub fn new(karatsuba_threshold: usize) -> Self {
        Self {
            karatsuba_threshold,
        }
    }
}

impl Default for AdaptiveStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_KARATSUBA_THRESHOLD)
    }
}

impl Multiplier for AdaptiveStrategy {
    fn multiply(&self, p: &Polynomial, q: &Polynomial) -> Polynomial {
        let max_degree = p.degree().max(q.degree());
        if max_degree >= self.karatsuba_threshold {
            debug!(max_degree, strategy = "Karatsuba", "adaptive dispatch");
            karatsuba::multiply_karatsuba(p, q)
        } else {
            debug!(max_degree, strategy = "Naive", "adaptive dispatch");
            naive::multiply_naive(p, q)
        }
    }

    fn name(&self) -> &'static str {
        "Adaptive"
    }
}
