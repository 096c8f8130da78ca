//! # polycalc-core
//!
//! Core library for the PolyCalc-rs polynomial arithmetic engine.
//! Implements an immutable `Polynomial` value type over arbitrary-precision
//! decimal coefficients, with evaluation, calculus operators, and three
//! interoperable multiplication strategies: schoolbook, Karatsuba, and
//! FFT-based convolution.

pub mod builder;
pub mod constants;
pub mod error;
pub mod fft_based;
pub mod karatsuba;
pub mod naive;
pub mod polynomial;
pub mod strategy;

// Re-exports
pub use builder::{IntoCoefficient, PolynomialBuilder};
pub use constants::DEFAULT_KARATSUBA_THRESHOLD;
pub use error::PolyError;
pub use fft_based::multiply_fft;
pub use karatsuba::multiply_karatsuba;
pub use naive::multiply_naive;
pub use polynomial::Polynomial;
pub use strategy::{
    AdaptiveStrategy, FFTStrategy, KaratsubaStrategy, Multiplier, NaiveStrategy,
};

/// Multiply two polynomials with the default exact adaptive strategy.
///
/// This is a convenience function for simple use cases. To pick an
/// algorithm explicitly (including the approximate FFT path and its
/// round-and-trim contract), use the [`Multiplier`] strategies directly.
///
/// # Example
/// ```
/// use polycalc_core::Polynomial;
///
/// let p = Polynomial::from_real_coefficients(&[3.0, -2.0, 1.0]).unwrap();
/// let q = Polynomial::from_real_coefficients(&[4.0, 1.0]).unwrap();
/// let product = polycalc_core::multiply(&p, &q);
///
/// assert_eq!(product.degree(), 3);
/// ```
#[must_use]
pub fn multiply(p: &Polynomial, q: &Polynomial) -> Polynomial {
    AdaptiveStrategy::default().multiply(p, q)
}
