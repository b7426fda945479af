use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::Complex;

/// A single vector component: a real or a complex number.
///
/// Arithmetic between a real and a complex value promotes to complex.
/// Equality is exact; tolerance-based comparison goes through
/// [`Tolerance`](super::Tolerance). A complex value whose imaginary part is
/// zero is equal to the real value with the same real part.
#[derive(Debug, Clone, Copy)]
pub enum Scalar {
    Real(f64),
    Complex(Complex<f64>),
}

impl Scalar {
    /// The additive identity.
    pub const ZERO: Self = Self::Real(0.0);

    /// The multiplicative identity.
    pub const ONE: Self = Self::Real(1.0);

    /// Returns the value as a complex number.
    #[must_use]
    pub fn to_complex(self) -> Complex<f64> {
        match self {
            Self::Real(r) => Complex::new(r, 0.0),
            Self::Complex(c) => c,
        }
    }

    /// Returns the real value, or `None` for a complex component.
    #[must_use]
    pub fn as_real(self) -> Option<f64> {
        match self {
            Self::Real(r) => Some(r),
            Self::Complex(_) => None,
        }
    }

    /// Returns `true` if the component is a complex number.
    #[must_use]
    pub fn is_complex(self) -> bool {
        matches!(self, Self::Complex(_))
    }

    /// Real part.
    #[must_use]
    pub fn re(self) -> f64 {
        match self {
            Self::Real(r) => r,
            Self::Complex(c) => c.re,
        }
    }

    /// Imaginary part, `0.0` for reals.
    #[must_use]
    pub fn im(self) -> f64 {
        match self {
            Self::Real(_) => 0.0,
            Self::Complex(c) => c.im,
        }
    }

    /// Absolute value for reals, modulus for complex numbers.
    #[must_use]
    pub fn abs(self) -> f64 {
        match self {
            Self::Real(r) => r.abs(),
            Self::Complex(c) => c.norm(),
        }
    }

    /// Squared absolute value (`|z|²`).
    #[must_use]
    pub fn abs_sq(self) -> f64 {
        match self {
            Self::Real(r) => r * r,
            Self::Complex(c) => c.norm_sqr(),
        }
    }

    /// Returns `true` if the value is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Real(r) => r == 0.0,
            Self::Complex(c) => c.re == 0.0 && c.im == 0.0,
        }
    }

    /// Returns `true` if any part is NaN.
    #[must_use]
    pub fn is_nan(self) -> bool {
        match self {
            Self::Real(r) => r.is_nan(),
            Self::Complex(c) => c.re.is_nan() || c.im.is_nan(),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Real(a), Self::Real(b)) => a == b,
            _ => self.to_complex() == other.to_complex(),
        }
    }
}

impl PartialEq<f64> for Scalar {
    fn eq(&self, other: &f64) -> bool {
        *self == Self::Real(*other)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Complex(c) => write!(f, "{c}"),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Self::Real(f64::from(value))
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Real(f64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Real(f64::from(value))
    }
}

impl From<i64> for Scalar {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Real(value as f64)
    }
}

impl From<Complex<f64>> for Scalar {
    fn from(value: Complex<f64>) -> Self {
        Self::Complex(value)
    }
}

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Scalar {
            type Output = Scalar;

            fn $method(self, rhs: Scalar) -> Scalar {
                match (self, rhs) {
                    (Scalar::Real(a), Scalar::Real(b)) => Scalar::Real(a $op b),
                    (a, b) => Scalar::Complex(a.to_complex() $op b.to_complex()),
                }
            }
        }

        impl $trait<f64> for Scalar {
            type Output = Scalar;

            fn $method(self, rhs: f64) -> Scalar {
                self $op Scalar::Real(rhs)
            }
        }
    };
}

impl_scalar_binop!(Add, add, +);
impl_scalar_binop!(Sub, sub, -);
impl_scalar_binop!(Mul, mul, *);
impl_scalar_binop!(Div, div, /);

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        match self {
            Self::Real(r) => Self::Real(-r),
            Self::Complex(c) => Self::Complex(-c),
        }
    }
}

impl std::iter::Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::ZERO, |acc, s| acc + s)
    }
}
