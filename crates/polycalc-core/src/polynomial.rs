//! The `Polynomial` value type: decimal coefficients in coefficient form.
//!
//! A `Polynomial` represents `Σ cᵢ·xⁱ` with `BigDecimal` coefficients and
//! is immutable once constructed: every operation returns a new value, so
//! shared references never observe mutation.

use std::ops::{Add, Neg};

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{FromPrimitive, Zero};

use crate::builder::PolynomialBuilder;
use crate::error::PolyError;

/// A polynomial over arbitrary-precision decimal coefficients.
///
/// Canonical representation: `coefficients.len() == degree + 1`, and the
/// stored leading coefficient is non-zero except for the zero polynomial,
/// which is always `degree == 0` with a single zero coefficient — never an
/// empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    /// `coefficients[i]` is the coefficient of `x^i`; the constant term is
    /// at index 0.
    coefficients: Vec<BigDecimal>,
    degree: usize,
}

impl Polynomial {
    /// The canonical zero polynomial `y = 0`.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coefficients: vec![BigDecimal::zero()],
            degree: 0,
        }
    }

    /// Construct from a dense coefficient sequence, constant term first.
    ///
    /// The degree is the highest exponent with a non-zero coefficient;
    /// trailing zero coefficients are trimmed. An empty sequence yields the
    /// zero polynomial.
    #[must_use]
    pub fn from_coefficients(mut coefficients: Vec<BigDecimal>) -> Self {
        if coefficients.is_empty() {
            return Self::zero();
        }
        let mut degree = coefficients.len() - 1;
        while degree > 0 && coefficients[degree].is_zero() {
            degree -= 1;
        }
        coefficients.truncate(degree + 1);
        Self {
            coefficients,
            degree,
        }
    }

    /// Construct from a dense `f64` coefficient sequence.
    ///
    /// NaN and infinite values are rejected with
    /// [`PolyError::NonFiniteCoefficient`]; finite values are converted to
    /// their exact decimal expansion.
    pub fn from_real_coefficients(coefficients: &[f64]) -> Result<Self, PolyError> {
        let converted = coefficients
            .iter()
            .enumerate()
            .map(|(exponent, &value)| {
                BigDecimal::from_f64(value)
                    .ok_or(PolyError::NonFiniteCoefficient { exponent })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_coefficients(converted))
    }

    /// Create a sparse builder accumulating `(exponent, coefficient)` pairs.
    #[must_use]
    pub fn builder() -> PolynomialBuilder {
        PolynomialBuilder::new()
    }

    /// The degree: the highest exponent with a non-zero coefficient.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The number of coefficients, `degree + 1`.
    #[must_use]
    pub fn length(&self) -> usize {
        self.degree + 1
    }

    /// Whether this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.degree == 0 && self.coefficients[0].is_zero()
    }

    /// Strict coefficient accessor.
    ///
    /// Fails with [`PolyError::IndexOutOfRange`] when `index` exceeds the
    /// degree. Exponents within `[0, degree]` always succeed; gaps are
    /// stored zeros.
    pub fn coefficient(&self, index: usize) -> Result<&BigDecimal, PolyError> {
        self.coefficients.get(index).ok_or(PolyError::IndexOutOfRange {
            index,
            length: self.length(),
        })
    }

    /// Dense view of the coefficients, constant term first.
    #[must_use]
    pub fn coefficients(&self) -> &[BigDecimal] {
        &self.coefficients
    }

    /// Evaluate at `x` using Horner's rule, with exact decimal arithmetic.
    #[must_use]
    pub fn evaluate(&self, x: &BigDecimal) -> BigDecimal {
        let mut value = self.coefficients[self.degree].clone();
        for coefficient in self.coefficients[..self.degree].iter().rev() {
            value = value * x + coefficient;
        }
        value
    }

    /// Coefficient-wise addition; the shorter operand is implicitly
    /// zero-extended. Addition never drops precision.
    #[must_use]
    pub fn sum(&self, other: &Self) -> Self {
        let length = self.length().max(other.length());
        let zero = BigDecimal::zero();
        let mut coefficients = Vec::with_capacity(length);
        for index in 0..length {
            let a = self.coefficients.get(index).unwrap_or(&zero);
            let b = other.coefficients.get(index).unwrap_or(&zero);
            coefficients.push(a + b);
        }
        Self::from_coefficients(coefficients)
    }

    /// Coefficient-wise negation; the degree is unchanged.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_coefficients(self.coefficients.iter().map(|c| -c).collect())
    }

    /// The derivative: coefficient at exponent `p - 1` becomes `c[p] · p`.
    ///
    /// The derivative of a constant is the zero polynomial.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree == 0 {
            return Self::zero();
        }
        let coefficients = self.coefficients[1..]
            .iter()
            .enumerate()
            .map(|(index, c)| c * BigDecimal::from((index + 1) as u64))
            .collect();
        Self::from_coefficients(coefficients)
    }

    /// The integral with the given integration constant at exponent 0.
    ///
    /// The coefficient at exponent `p + 1` is `c[p] / (p + 1)`, rounded
    /// away from zero at the operand coefficient's own scale
    /// ([`RoundingMode::Up`]). Division of non-terminating decimals has no
    /// exact representation, so this policy is fixed and part of the
    /// contract.
    #[must_use]
    pub fn integral(&self, constant: BigDecimal) -> Self {
        let mut coefficients = Vec::with_capacity(self.length() + 1);
        coefficients.push(constant);
        for (pow, c) in self.coefficients.iter().enumerate() {
            let divisor = BigDecimal::from((pow + 1) as u64);
            coefficients.push(
                (c / &divisor).with_scale_round(c.fractional_digit_count(), RoundingMode::Up),
            );
        }
        Self::from_coefficients(coefficients)
    }

    /// Return a copy with every coefficient re-expressed at `scale`
    /// fractional digits under the given rounding policy.
    ///
    /// Used to normalize precision before cross-strategy comparisons.
    #[must_use]
    pub fn set_scale(&self, scale: i64, mode: RoundingMode) -> Self {
        Self::from_coefficients(
            self.coefficients
                .iter()
                .map(|c| c.with_scale_round(scale, mode))
                .collect(),
        )
    }

    /// Strip trailing coefficients with `|c| < epsilon`, recomputing the
    /// degree.
    ///
    /// Applied after the FFT strategy to discard floating-point noise and
    /// recover the degree the exact strategies produce.
    #[must_use]
    pub fn minimize_degree(&self, epsilon: &BigDecimal) -> Self {
        let mut end = self.coefficients.len();
        while end > 1 && self.coefficients[end - 1].abs() < *epsilon {
            end -= 1;
        }
        Self::from_coefficients(self.coefficients[..end].to_vec())
    }

    /// Compare coefficients over the union of both index ranges,
    /// zero-extending the shorter operand; true iff every pairwise absolute
    /// difference is below `epsilon`.
    #[must_use]
    pub fn approximate_equals(&self, other: &Self, epsilon: &BigDecimal) -> bool {
        let length = self.length().max(other.length());
        let zero = BigDecimal::zero();
        (0..length).all(|index| {
            let a = self.coefficients.get(index).unwrap_or(&zero);
            let b = other.coefficients.get(index).unwrap_or(&zero);
            (a - b).abs() < *epsilon
        })
    }

    /// Multiply by `x^m`: shift every coefficient `m` exponents upward.
    #[must_use]
    pub fn shift(&self, m: usize) -> Self {
        let mut coefficients = vec![BigDecimal::zero(); m];
        coefficients.extend_from_slice(&self.coefficients);
        Self::from_coefficients(coefficients)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        self.sum(rhs)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        self.sum(&rhs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.negate()
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.negate()
    }
}
