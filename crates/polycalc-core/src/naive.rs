//! Schoolbook polynomial multiplication.

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::polynomial::Polynomial;

/// Multiply two polynomials by schoolbook convolution.
///
/// Accumulates `product[i + j] += a[i] · b[j]` over all coefficient pairs:
/// O(N·M) decimal multiplications, exact given exact inputs. This kernel is
/// also the base case the recursive strategies fall back to.
#[must_use]
pub fn multiply_naive(p: &Polynomial, q: &Polynomial) -> Polynomial {
    Polynomial::from_coefficients(convolve(p.coefficients(), q.coefficients()))
}

/// Schoolbook convolution on raw coefficient slices; the result has
/// `a.len() + b.len() - 1` coefficients.
pub(crate) fn convolve(a: &[BigDecimal], b: &[BigDecimal]) -> Vec<BigDecimal> {
    let mut product = vec![BigDecimal::zero(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            product[i + j] += x * y;
        }
    }
    product
}
