//! Recursive radix-2 decimation-in-time transform and convolution.

use bigdecimal::BigDecimal;
use tracing::trace;

use crate::complex::ComplexScalar;
use crate::complex_poly::ComplexPolynomial;

/// Fractional digits kept on every intermediate transform value.
///
/// The roots of unity carry at most `f64` precision (about 16 significant
/// digits), so keeping 32 fractional digits bounds decimal scale growth
/// across recursion levels without losing any accuracy the roots had.
pub const FFT_WORKING_SCALE: i64 = 32;

/// Forward transform of a power-of-two length complex polynomial.
pub fn forward(poly: &ComplexPolynomial) -> ComplexPolynomial {
    assert!(
        poly.len().is_power_of_two(),
        "transform length must be a power of two"
    );
    transform(poly, false)
}

/// Inverse transform: conjugate-root recursion, then division by `N`.
pub fn inverse(poly: &ComplexPolynomial) -> ComplexPolynomial {
    assert!(
        poly.len().is_power_of_two(),
        "transform length must be a power of two"
    );
    let n = poly.len();
    let transformed = transform(poly, true);
    let scale = ComplexScalar::from_real(BigDecimal::from(n as u64));
    ComplexPolynomial::from_coefficients(
        transformed
            .coefficients()
            .iter()
            .map(|c| c.divide(&scale).rounded(FFT_WORKING_SCALE))
            .collect(),
    )
}

/// Cooley-Tukey recursion: split by index parity, transform both halves,
/// recombine with butterflies `y[k] = e[k] + ω^k·o[k]`,
/// `y[k + n/2] = e[k] - ω^k·o[k]`.
fn transform(poly: &ComplexPolynomial, inverted: bool) -> ComplexPolynomial {
    let n = poly.len();
    if n == 1 {
        return poly.clone();
    }

    let (even, odd) = poly.split_even_odd();
    let even = transform(&even, inverted);
    let odd = transform(&odd, inverted);

    let mut root = ComplexScalar::principal_root_of_unity(n);
    if inverted {
        root = root.conjugate();
    }

    let half = n / 2;
    let mut combined = vec![ComplexScalar::zero(); n];
    let mut omega = ComplexScalar::one();

    for k in 0..half {
        let twiddled = omega
            .multiply(&odd.coefficients()[k])
            .rounded(FFT_WORKING_SCALE);
        combined[k] = even.coefficients()[k].add(&twiddled);
        combined[k + half] = even.coefficients()[k].sub(&twiddled);
        omega = omega.multiply(&root).rounded(FFT_WORKING_SCALE);
    }

    ComplexPolynomial::from_coefficients(combined)
}

/// Convolve two real decimal coefficient sequences through the complex
/// domain.
///
/// Both operands are zero-padded to the next power of two at or above
/// `a.len() + b.len() - 1`; padding to anything shorter would wrap the
/// cyclic convolution around and corrupt the high-order terms. The result
/// is truncated back to `a.len() + b.len() - 1` coefficients with the
/// imaginary parts dropped; it still carries floating noise that the
/// caller must round and trim against an explicit tolerance.
#[must_use]
pub fn convolve(a: &[BigDecimal], b: &[BigDecimal]) -> Vec<BigDecimal> {
    assert!(
        !a.is_empty() && !b.is_empty(),
        "operands must have at least one coefficient"
    );

    let result_len = a.len() + b.len() - 1;
    let padded_len = result_len.next_power_of_two();
    trace!(result_len, padded_len, "fft convolution");

    let lhs = forward(&ComplexPolynomial::from_real(a).padded(padded_len));
    let rhs = forward(&ComplexPolynomial::from_real(b).padded(padded_len));

    let product = inverse(&lhs.pointwise_multiply(&rhs));

    let mut coefficients = product.into_real_coefficients();
    coefficients.truncate(result_len);
    coefficients
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    fn dec(value: f64) -> BigDecimal {
        BigDecimal::from_f64(value).unwrap()
    }

    fn assert_close(actual: &BigDecimal, expected: f64) {
        let diff = (actual - dec(expected)).abs();
        assert!(diff < dec(1e-9), "expected {expected}, got {actual}");
    }

    #[test]
    fn transform_length_one_is_identity() {
        let poly = ComplexPolynomial::from_real(&[dec(42.0)]);
        let transformed = forward(&poly);
        assert_eq!(transformed, poly);
    }

    #[test]
    fn forward_then_inverse_recovers_input() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let coefficients: Vec<BigDecimal> = values.iter().map(|&v| dec(v)).collect();
        let poly = ComplexPolynomial::from_real(&coefficients);

        let roundtrip = inverse(&forward(&poly));

        for (got, &expected) in roundtrip.coefficients().iter().zip(values.iter()) {
            assert_close(got.re(), expected);
            assert_close(got.im(), 0.0);
        }
    }

    #[test]
    fn forward_of_constant_concentrates_in_first_bin() {
        // DFT of [c, c, c, c] is [4c, 0, 0, 0].
        let coefficients = vec![dec(2.5); 4];
        let poly = ComplexPolynomial::from_real(&coefficients);
        let transformed = forward(&poly);
        assert_close(transformed.coefficients()[0].re(), 10.0);
        for bin in &transformed.coefficients()[1..] {
            assert_close(bin.re(), 0.0);
            assert_close(bin.im(), 0.0);
        }
    }

    #[test]
    fn convolve_linear_terms() {
        // (3 + 2x)(-5 + 4x) = -15 + 2x + 8x²
        let a = [dec(3.0), dec(2.0)];
        let b = [dec(-5.0), dec(4.0)];
        let product = convolve(&a, &b);
        assert_eq!(product.len(), 3);
        assert_close(&product[0], -15.0);
        assert_close(&product[1], 2.0);
        assert_close(&product[2], 8.0);
    }

    #[test]
    fn convolve_against_schoolbook() {
        // (1 + 2x + 3x²)(4 + 5x) = 4 + 13x + 22x² + 15x³
        let a = [dec(1.0), dec(2.0), dec(3.0)];
        let b = [dec(4.0), dec(5.0)];
        let product = convolve(&a, &b);
        assert_eq!(product.len(), 4);
        assert_close(&product[0], 4.0);
        assert_close(&product[1], 13.0);
        assert_close(&product[2], 22.0);
        assert_close(&product[3], 15.0);
    }

    #[test]
    fn convolve_with_constant_scales() {
        let a = [dec(2.0)];
        let b = [dec(1.0), dec(-3.0), dec(5.0)];
        let product = convolve(&a, &b);
        assert_eq!(product.len(), 3);
        assert_close(&product[0], 2.0);
        assert_close(&product[1], -6.0);
        assert_close(&product[2], 10.0);
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn forward_rejects_non_power_of_two_length() {
        let poly = ComplexPolynomial::from_real(&[dec(1.0), dec(2.0), dec(3.0)]);
        let _ = forward(&poly);
    }
}
