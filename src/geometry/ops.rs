//! Operator sugar for [`Vector`].
//!
//! Every operator forwards to a named method on `Vector`; operators that can
//! fail (dimension mismatch, division by zero, zero-vector normalization)
//! yield a [`Result`]. Binary operators are implemented on `&Vector` so the
//! named methods keep precedence in method-call syntax.
//!
//! | expression | method |
//! |---|---|
//! | `&a + b`, `b + &a` | [`Vector::add`] |
//! | `&a - b`, `b - &a` | [`Vector::sub`] |
//! | `&a * 2.0`, `2.0 * &a` | [`Vector::scale`] |
//! | `&a / 2.0` | [`Vector::div`] |
//! | `&a * &b`, `&a * [x, y, z]`, `[x, y, z] * &a` | [`Vector::cross`] |
//! | `-a`, `-&a` | [`Vector::negated`] |
//! | `!&a` | [`Vector::norm`] |

use std::ops::{Add, Div, Mul, Neg, Not, Sub};

use crate::error::Result;
use crate::math::IntoComponents;

use super::Vector;

impl<T: IntoComponents> Add<T> for &Vector {
    type Output = Result<Vector>;

    fn add(self, rhs: T) -> Result<Vector> {
        Vector::add(self, rhs)
    }
}

impl<T: IntoComponents> Sub<T> for &Vector {
    type Output = Result<Vector>;

    fn sub(self, rhs: T) -> Result<Vector> {
        Vector::sub(self, rhs)
    }
}

// Reflected forms for collections on the left: `b + a` is `a + b`, and
// `b - a` is `-a + b`.
macro_rules! impl_reflected {
    ($($lhs:ty),* $(,)?) => {
        $(
            impl Add<&Vector> for $lhs {
                type Output = Result<Vector>;

                fn add(self, rhs: &Vector) -> Result<Vector> {
                    rhs.add(self)
                }
            }

            impl Sub<&Vector> for $lhs {
                type Output = Result<Vector>;

                fn sub(self, rhs: &Vector) -> Result<Vector> {
                    rhs.negated().add(self)
                }
            }
        )*
    };
}

impl_reflected!(Vec<f64>, &[f64]);

impl<const N: usize> Add<&Vector> for [f64; N] {
    type Output = Result<Vector>;

    fn add(self, rhs: &Vector) -> Result<Vector> {
        rhs.add(self)
    }
}

impl<const N: usize> Sub<&Vector> for [f64; N] {
    type Output = Result<Vector>;

    fn sub(self, rhs: &Vector) -> Result<Vector> {
        rhs.negated().add(self)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        rhs.scale(self)
    }
}

impl Div<f64> for &Vector {
    type Output = Result<Vector>;

    fn div(self, rhs: f64) -> Result<Vector> {
        Vector::div(self, rhs)
    }
}

impl Mul<&Vector> for &Vector {
    type Output = Result<Vector>;

    fn mul(self, rhs: &Vector) -> Result<Vector> {
        self.cross(rhs)
    }
}

impl Mul<[f64; 3]> for &Vector {
    type Output = Result<Vector>;

    fn mul(self, rhs: [f64; 3]) -> Result<Vector> {
        self.cross(rhs)
    }
}

impl Mul<&Vector> for [f64; 3] {
    type Output = Result<Vector>;

    fn mul(self, rhs: &Vector) -> Result<Vector> {
        Vector::new(self)?.cross(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negated()
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negated()
    }
}

impl Not for &Vector {
    type Output = Result<Vector>;

    fn not(self) -> Result<Vector> {
        self.norm()
    }
}
