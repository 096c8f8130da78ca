//! Karatsuba divide-and-conquer polynomial multiplication.

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::constants::KARATSUBA_BASE_CASE_DEGREE;
use crate::naive;
use crate::polynomial::Polynomial;

/// Multiply two polynomials with the Karatsuba recursion.
///
/// Both operands are zero-extended to a common length `n` and split at
/// `m = ceil(n / 2)` into `p = p_lo + x^m·p_hi`. Three recursive
/// sub-products replace the four of the schoolbook expansion:
///
/// ```text
/// r1 = p_lo · q_lo
/// r2 = p_hi · q_hi
/// r3 = (p_lo + p_hi) · (q_lo + q_hi)
/// p·q = r1 + x^m·(r3 - r1 - r2) + x^{2m}·r2
/// ```
///
/// which brings the multiplication count down to `n^log2(3)`. Exact given
/// exact inputs; agrees with the schoolbook kernel coefficient for
/// coefficient.
#[must_use]
pub fn multiply_karatsuba(p: &Polynomial, q: &Polynomial) -> Polynomial {
    Polynomial::from_coefficients(multiply(p.coefficients(), q.coefficients()))
}

pub(crate) fn multiply(p: &[BigDecimal], q: &[BigDecimal]) -> Vec<BigDecimal> {
    let n = p.len().max(q.len());

    // Fall back once the larger operand's degree reaches the base case.
    if n <= KARATSUBA_BASE_CASE_DEGREE + 1 {
        return naive::convolve(p, q);
    }

    // The split point always rounds up; the alignment of the x^m and x^{2m}
    // shifts below depends on both operands splitting at the same m.
    let m = n.div_ceil(2);
    let (p_lo, p_hi) = split(p, m, n);
    let (q_lo, q_hi) = split(q, m, n);

    let r1 = multiply(&p_lo, &q_lo);
    let r2 = multiply(&p_hi, &q_hi);
    let r3 = multiply(&add(&p_lo, &p_hi), &add(&q_lo, &q_hi));

    let cross = sub(&sub(&r3, &r1), &r2);

    let mut product = vec![BigDecimal::zero(); 2 * n - 1];
    add_shifted(&mut product, &r1, 0);
    add_shifted(&mut product, &cross, m);
    add_shifted(&mut product, &r2, 2 * m);
    product
}

/// Split an operand of virtual (zero-extended) length `n` at exponent `m`,
/// returning the `(low, high)` halves of lengths `m` and `n - m`.
fn split(coefficients: &[BigDecimal], m: usize, n: usize) -> (Vec<BigDecimal>, Vec<BigDecimal>) {
    let mut low = vec![BigDecimal::zero(); m];
    let mut high = vec![BigDecimal::zero(); n - m];
    for (index, coefficient) in coefficients.iter().enumerate() {
        if index < m {
            low[index] = coefficient.clone();
        } else {
            high[index - m] = coefficient.clone();
        }
    }
    (low, high)
}

/// Coefficient-wise sum, zero-extending the shorter slice.
fn add(a: &[BigDecimal], b: &[BigDecimal]) -> Vec<BigDecimal> {
    let zero = BigDecimal::zero();
    (0..a.len().max(b.len()))
        .map(|i| a.get(i).unwrap_or(&zero) + b.get(i).unwrap_or(&zero))
        .collect()
}

/// Coefficient-wise difference, zero-extending the shorter slice.
fn sub(a: &[BigDecimal], b: &[BigDecimal]) -> Vec<BigDecimal> {
    let zero = BigDecimal::zero();
    (0..a.len().max(b.len()))
        .map(|i| a.get(i).unwrap_or(&zero) - b.get(i).unwrap_or(&zero))
        .collect()
}

/// Accumulate `source` into `accumulator` starting at exponent `offset`.
fn add_shifted(accumulator: &mut [BigDecimal], source: &[BigDecimal], offset: usize) {
    for (index, value) in source.iter().enumerate() {
        accumulator[offset + index] += value;
    }
}
