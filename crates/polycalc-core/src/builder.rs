//! Sparse polynomial builder, generic over the input coefficient type.

use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, Zero};

use crate::error::PolyError;
use crate::polynomial::Polynomial;

/// Conversion into a decimal coefficient.
///
/// One generic conversion seam replaces separate decimal and floating
/// builder variants: every input representation is converted to the
/// canonical `BigDecimal` form at insertion time, and representations with
/// non-finite values (`f64`) fail there.
pub trait IntoCoefficient {
    /// Convert into a decimal coefficient, or `None` when the value has no
    /// decimal representation (NaN or infinite).
    fn into_coefficient(self) -> Option<BigDecimal>;
}

impl IntoCoefficient for BigDecimal {
    fn into_coefficient(self) -> Option<BigDecimal> {
        Some(self)
    }
}

impl IntoCoefficient for f64 {
    fn into_coefficient(self) -> Option<BigDecimal> {
        BigDecimal::from_f64(self)
    }
}

impl IntoCoefficient for i64 {
    fn into_coefficient(self) -> Option<BigDecimal> {
        Some(BigDecimal::from(self))
    }
}

impl IntoCoefficient for i32 {
    fn into_coefficient(self) -> Option<BigDecimal> {
        Some(BigDecimal::from(self))
    }
}

/// Builder accumulating sparse `(exponent, coefficient)` pairs.
///
/// Duplicate exponents overwrite; exponents never supplied materialize as
/// zero coefficients. An empty builder produces the zero polynomial.
#[derive(Debug, Default)]
pub struct PolynomialBuilder {
    coefficients: BTreeMap<usize, BigDecimal>,
}

impl PolynomialBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coefficient for `exponent`.
    ///
    /// Fails with [`PolyError::NonFiniteCoefficient`] when the value is NaN
    /// or infinite; the builder is consumed either way, so a failed
    /// insertion cannot leak a half-built polynomial.
    pub fn coefficient(
        mut self,
        exponent: usize,
        value: impl IntoCoefficient,
    ) -> Result<Self, PolyError> {
        let coefficient = value
            .into_coefficient()
            .ok_or(PolyError::NonFiniteCoefficient { exponent })?;
        self.coefficients.insert(exponent, coefficient);
        Ok(self)
    }

    /// Materialize the polynomial.
    #[must_use]
    pub fn build(self) -> Polynomial {
        let Some(&max_exponent) = self.coefficients.keys().next_back() else {
            return Polynomial::zero();
        };
        let mut dense = vec![BigDecimal::zero(); max_exponent + 1];
        for (exponent, coefficient) in self.coefficients {
            dense[exponent] = coefficient;
        }
        Polynomial::from_coefficients(dense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_exponents_fill_gaps_with_zeros() {
        let p = Polynomial::builder()
            .coefficient(10, 10)
            .unwrap()
            .coefficient(5000, 5000)
            .unwrap()
            .build();

        assert_eq!(p.degree(), 5000);
        assert_eq!(p.coefficient(10).unwrap(), &BigDecimal::from(10));
        assert_eq!(p.coefficient(5000).unwrap(), &BigDecimal::from(5000));
        assert!(p.coefficient(4999).unwrap().is_zero());
    }

    #[test]
    fn duplicate_exponents_overwrite() {
        let p = Polynomial::builder()
            .coefficient(2, 1.0)
            .unwrap()
            .coefficient(2, 9.0)
            .unwrap()
            .build();

        assert_eq!(p.degree(), 2);
        assert_eq!(p.coefficient(2).unwrap(), &BigDecimal::from(9));
    }

    #[test]
    fn empty_builder_yields_zero_polynomial() {
        let p = Polynomial::builder().build();
        assert_eq!(p, Polynomial::zero());
    }

    #[test]
    fn nan_coefficient_is_rejected_at_insertion() {
        let result = Polynomial::builder().coefficient(3, f64::NAN);
        assert!(matches!(
            result,
            Err(PolyError::NonFiniteCoefficient { exponent: 3 })
        ));
    }

    #[test]
    fn infinite_coefficient_is_rejected_at_insertion() {
        let result = Polynomial::builder().coefficient(4, f64::NEG_INFINITY);
        assert!(matches!(
            result,
            Err(PolyError::NonFiniteCoefficient { exponent: 4 })
        ));
    }

    #[test]
    fn mixed_input_representations_agree() {
        let from_ints = Polynomial::builder()
            .coefficient(0, 3)
            .unwrap()
            .coefficient(1, -2i64)
            .unwrap()
            .build();
        let from_floats = Polynomial::builder()
            .coefficient(0, 3.0)
            .unwrap()
            .coefficient(1, -2.0)
            .unwrap()
            .build();
        let from_decimals = Polynomial::builder()
            .coefficient(0, BigDecimal::from(3))
            .unwrap()
            .coefficient(1, BigDecimal::from(-2))
            .unwrap()
            .build();

        assert_eq!(from_ints, from_floats);
        assert_eq!(from_ints, from_decimals);
    }
}
