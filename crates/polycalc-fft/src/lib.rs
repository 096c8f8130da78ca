//! # polycalc-fft
//!
//! FFT-based convolution of decimal coefficient sequences.
//!
//! The transform maps exact `BigDecimal` coefficients into the complex
//! domain, where the roots of unity are floating-point approximations.
//! Results are therefore approximate; callers are expected to round and
//! trim them against an explicit tolerance.

pub mod complex;
pub mod complex_poly;
pub mod transform;

// Re-exports
pub use complex::ComplexScalar;
pub use complex_poly::ComplexPolynomial;
pub use transform::{convolve, forward, inverse, FFT_WORKING_SCALE};
