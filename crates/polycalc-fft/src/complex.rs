//! Immutable complex numbers over decimal real and imaginary parts.

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{FromPrimitive, One, Zero};

/// An immutable complex number with `BigDecimal` real and imaginary parts.
///
/// Arithmetic on the parts is exact decimal arithmetic; the only floating
/// approximation enters through [`ComplexScalar::principal_root_of_unity`].
/// Equality is component-wise exact equality with no built-in tolerance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexScalar {
    re: BigDecimal,
    im: BigDecimal,
}

impl ComplexScalar {
    /// Create a complex number from its real and imaginary parts.
    #[must_use]
    pub fn new(re: BigDecimal, im: BigDecimal) -> Self {
        Self { re, im }
    }

    /// Create a purely real complex number.
    #[must_use]
    pub fn from_real(re: BigDecimal) -> Self {
        Self {
            re,
            im: BigDecimal::zero(),
        }
    }

    /// The additive identity `0 + 0i`.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            re: BigDecimal::zero(),
            im: BigDecimal::zero(),
        }
    }

    /// The multiplicative identity `1 + 0i`.
    #[must_use]
    pub fn one() -> Self {
        Self {
            re: BigDecimal::one(),
            im: BigDecimal::zero(),
        }
    }

    /// Get the real part.
    #[must_use]
    pub fn re(&self) -> &BigDecimal {
        &self.re
    }

    /// Get the imaginary part.
    #[must_use]
    pub fn im(&self) -> &BigDecimal {
        &self.im
    }

    /// Consume the number, yielding its `(real, imaginary)` parts.
    #[must_use]
    pub fn into_parts(self) -> (BigDecimal, BigDecimal) {
        (self.re, self.im)
    }

    /// Component-wise addition.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            re: &self.re + &other.re,
            im: &self.im + &other.im,
        }
    }

    /// Component-wise subtraction.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            re: &self.re - &other.re,
            im: &self.im - &other.im,
        }
    }

    /// Component-wise negation.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            re: -&self.re,
            im: -&self.im,
        }
    }

    /// The complex conjugate `re - im·i`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self {
            re: self.re.clone(),
            im: -&self.im,
        }
    }

    /// Complex multiplication `(ac - bd) + (ad + bc)i`, exact.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let re = &self.re * &other.re - &self.im * &other.im;
        let im = &self.re * &other.im + &self.im * &other.re;
        Self { re, im }
    }

    /// Complex division via the conjugate: `z / w = z·w̄ / |w|²`.
    ///
    /// Non-terminating quotients are rounded at bigdecimal's default
    /// division precision. The divisor must be non-zero.
    #[must_use]
    pub fn divide(&self, other: &Self) -> Self {
        let denom = &other.re * &other.re + &other.im * &other.im;
        let re = (&self.re * &other.re + &self.im * &other.im) / &denom;
        let im = (&self.im * &other.re - &self.re * &other.im) / &denom;
        Self { re, im }
    }

    /// Round both parts to `scale` fractional digits (half-even).
    ///
    /// The transform rounds intermediates this way to keep decimal scale
    /// growth bounded across recursion levels.
    #[must_use]
    pub fn rounded(&self, scale: i64) -> Self {
        Self {
            re: self.re.with_scale_round(scale, RoundingMode::HalfEven),
            im: self.im.with_scale_round(scale, RoundingMode::HalfEven),
        }
    }

    /// The principal `n`-th root of unity `(cos(2π/n), sin(2π/n))`.
    ///
    /// Computed with `f64` trigonometry; this is the one place where the
    /// exact decimal data model meets a floating approximation.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn principal_root_of_unity(n: usize) -> Self {
        assert!(n > 0, "root of unity order must be positive");
        let angle = 2.0 * std::f64::consts::PI / n as f64;
        Self {
            re: BigDecimal::from_f64(angle.cos())
                .expect("cosine of a finite angle is finite"),
            im: BigDecimal::from_f64(angle.sin())
                .expect("sine of a finite angle is finite"),
        }
    }
}
