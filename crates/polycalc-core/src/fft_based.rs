//! FFT-based polynomial multiplication.

use crate::polynomial::Polynomial;

/// Multiply two polynomials through the complex-domain FFT backend.
///
/// O(N log N), but approximate: the transform's roots of unity are
/// floating-point values, so the raw product carries small noise in every
/// coefficient and usually an inflated degree. The documented contract is
/// that the caller applies [`Polynomial::set_scale`] and
/// [`Polynomial::minimize_degree`] with an explicit tolerance to recover a
/// value comparable with the exact strategies:
///
/// ```
/// use bigdecimal::{BigDecimal, RoundingMode};
/// use num_traits::FromPrimitive;
/// use polycalc_core::{multiply_fft, multiply_naive, Polynomial};
///
/// let a = Polynomial::from_real_coefficients(&[3.0, 2.0]).unwrap();
/// let b = Polynomial::from_real_coefficients(&[-5.0, 4.0]).unwrap();
///
/// let epsilon = BigDecimal::from_f64(0.01).unwrap();
/// let product = multiply_fft(&a, &b)
///     .set_scale(2, RoundingMode::HalfUp)
///     .minimize_degree(&epsilon);
///
/// assert!(product.approximate_equals(&multiply_naive(&a, &b), &epsilon));
/// ```
#[must_use]
pub fn multiply_fft(p: &Polynomial, q: &Polynomial) -> Polynomial {
    Polynomial::from_coefficients(polycalc_fft::convolve(
        p.coefficients(),
        q.coefficients(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive::multiply_naive;
    use bigdecimal::{BigDecimal, RoundingMode};
    use num_traits::FromPrimitive;

    fn poly(coefficients: &[f64]) -> Polynomial {
        Polynomial::from_real_coefficients(coefficients).unwrap()
    }

    fn epsilon() -> BigDecimal {
        BigDecimal::from_f64(0.01).unwrap()
    }

    #[test]
    fn rounded_and_trimmed_product_matches_naive() {
        // (2x + 3)(4x - 5) = 8x² + 2x - 15
        let a = poly(&[3.0, 2.0]);
        let b = poly(&[-5.0, 4.0]);

        let product = multiply_fft(&a, &b)
            .set_scale(2, RoundingMode::HalfUp)
            .minimize_degree(&epsilon());
        let expected = poly(&[-15.0, 2.0, 8.0]);

        assert_eq!(product.degree(), 2);
        assert_eq!(product, expected);
        assert_eq!(product, multiply_naive(&a, &b));
    }

    #[test]
    fn trimming_recovers_the_exact_degree() {
        let a = poly(&[1.0, 0.0, 0.0, 2.0]);
        let b = poly(&[5.0, -3.0, 1.0]);

        let product = multiply_fft(&a, &b)
            .set_scale(2, RoundingMode::HalfUp)
            .minimize_degree(&epsilon());

        assert_eq!(product.degree(), a.degree() + b.degree());
    }

    #[test]
    fn zero_operand_collapses_to_zero_after_trim() {
        let a = poly(&[1.0, 2.0, 3.0]);
        let product = multiply_fft(&a, &Polynomial::zero())
            .set_scale(2, RoundingMode::HalfUp)
            .minimize_degree(&epsilon());
        assert!(product.is_zero());
    }
}
