use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{GeomError, Result};

use super::numeric::IntoScalar;
use super::Scalar;

/// Default absolute tolerance for component comparisons.
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

/// Bit pattern of the process-wide epsilon.
static EPSILON: AtomicU64 = AtomicU64::new(DEFAULT_TOLERANCE.to_bits());

/// Returns the current process-wide comparison tolerance.
#[must_use]
pub fn tolerance() -> f64 {
    f64::from_bits(EPSILON.load(Ordering::Relaxed))
}

/// Sets the process-wide comparison tolerance.
///
/// The new value applies to every later comparison that does not pass its
/// own [`Tolerance`]. Writes are atomic, but a caller that changes the
/// tolerance while other threads compare vectors gets no guarantee about
/// which epsilon those comparisons observe.
///
/// # Errors
///
/// Returns a type error if `epsilon` is not a real number and a value error
/// if it is not strictly positive.
pub fn set_tolerance(epsilon: impl IntoScalar) -> Result<()> {
    let epsilon = Tolerance::validate(epsilon)?;
    let previous = f64::from_bits(EPSILON.swap(epsilon.to_bits(), Ordering::Relaxed));
    tracing::debug!(previous, epsilon, "comparison tolerance changed");
    Ok(())
}

/// An absolute tolerance used to compare components.
///
/// Two components `a` and `b` are equal when they are identical or when
/// `|a - b| < epsilon`. The comparison is absolute, not relative: very large
/// magnitudes rarely compare equal after rounding, and very small ones
/// always do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Creates a tolerance.
    ///
    /// # Errors
    ///
    /// Returns a type error if `epsilon` is not a real number and a value
    /// error if it is not strictly positive.
    pub fn new(epsilon: impl IntoScalar) -> Result<Self> {
        Ok(Self {
            epsilon: Self::validate(epsilon)?,
        })
    }

    /// Snapshot of the process-wide tolerance.
    #[must_use]
    pub fn global() -> Self {
        Self {
            epsilon: tolerance(),
        }
    }

    /// The threshold below which differences are ignored.
    #[must_use]
    pub fn epsilon(self) -> f64 {
        self.epsilon
    }

    /// Compares two components.
    #[must_use]
    pub fn is_equal(self, a: Scalar, b: Scalar) -> bool {
        within(a, b, self.epsilon)
    }

    /// Compares two real values.
    #[must_use]
    pub fn is_equal_f64(self, a: f64, b: f64) -> bool {
        self.is_equal(Scalar::Real(a), Scalar::Real(b))
    }

    fn validate(epsilon: impl IntoScalar) -> Result<f64> {
        let epsilon = epsilon
            .into_scalar()?
            .as_real()
            .ok_or(GeomError::ComplexNotAllowed { what: "tolerance" })?;
        if epsilon.is_nan() || epsilon <= 0.0 {
            return Err(GeomError::NotPositive {
                what: "tolerance",
                value: epsilon,
            });
        }
        Ok(epsilon)
    }
}

/// Identical components, or components closer than `epsilon`.
pub(crate) fn within(a: Scalar, b: Scalar, epsilon: f64) -> bool {
    a == b || (a - b).abs() < epsilon
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_TOLERANCE,
        }
    }
}
