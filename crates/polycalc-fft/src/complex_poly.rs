//! Complex-coefficient scratch polynomials for the FFT strategy.

use bigdecimal::BigDecimal;

use crate::complex::ComplexScalar;
use crate::FFT_WORKING_SCALE;

/// An ordered sequence of [`ComplexScalar`] coefficients, index = exponent.
///
/// Used as scratch space while a transform is in flight. The transform
/// requires a power-of-two length; that padding is the caller's obligation
/// (see [`crate::convolve`]), not an invariant of this type.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexPolynomial {
    coefficients: Vec<ComplexScalar>,
}

impl ComplexPolynomial {
    /// Create a complex polynomial from its coefficient sequence.
    #[must_use]
    pub fn from_coefficients(coefficients: Vec<ComplexScalar>) -> Self {
        Self { coefficients }
    }

    /// Lift real decimal coefficients into the complex domain with zero
    /// imaginary parts.
    #[must_use]
    pub fn from_real(coefficients: &[BigDecimal]) -> Self {
        Self {
            coefficients: coefficients
                .iter()
                .map(|c| ComplexScalar::from_real(c.clone()))
                .collect(),
        }
    }

    /// Get the number of coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Check if the polynomial has no coefficients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Get the coefficient sequence.
    #[must_use]
    pub fn coefficients(&self) -> &[ComplexScalar] {
        &self.coefficients
    }

    /// Return a copy zero-padded to `length` coefficients.
    ///
    /// Returns the polynomial unchanged when it is already long enough.
    #[must_use]
    pub fn padded(&self, length: usize) -> Self {
        if length <= self.len() {
            return self.clone();
        }
        let mut coefficients = self.coefficients.clone();
        coefficients.resize(length, ComplexScalar::zero());
        Self { coefficients }
    }

    /// Split into the even-indexed and odd-indexed sub-sequences.
    ///
    /// This is the decimation-in-time step; the caller recombines the two
    /// halves with butterfly operations.
    #[must_use]
    pub fn split_even_odd(&self) -> (Self, Self) {
        let half = self.len() / 2;
        let mut even = Vec::with_capacity(self.len() - half);
        let mut odd = Vec::with_capacity(half);
        for (index, coefficient) in self.coefficients.iter().enumerate() {
            if index % 2 == 0 {
                even.push(coefficient.clone());
            } else {
                odd.push(coefficient.clone());
            }
        }
        (Self { coefficients: even }, Self { coefficients: odd })
    }

    /// Multiply two transformed sequences pointwise.
    ///
    /// Both sequences must have the same length. Products are rounded to
    /// the transform's working scale.
    #[must_use]
    pub fn pointwise_multiply(&self, other: &Self) -> Self {
        assert_eq!(self.len(), other.len());
        Self {
            coefficients: self
                .coefficients
                .iter()
                .zip(other.coefficients.iter())
                .map(|(a, b)| a.multiply(b).rounded(FFT_WORKING_SCALE))
                .collect(),
        }
    }

    /// Convert back to real decimal coefficients, discarding the imaginary
    /// parts.
    ///
    /// Lossy on purpose: after an inverse transform of a real convolution
    /// the imaginary parts are floating noise around zero.
    #[must_use]
    pub fn into_real_coefficients(self) -> Vec<BigDecimal> {
        self.coefficients
            .into_iter()
            .map(|c| {
                let (re, _) = c.into_parts();
                re
            })
            .collect()
    }
}
