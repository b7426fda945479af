//! Coercion of loosely typed operands into vector components.
//!
//! Every arithmetic entry point accepts `impl IntoComponents` (a collection)
//! or `impl IntoScalar` (a single number) and validates it once, here, at the
//! boundary. Statically typed inputs (`f64`, arrays, nalgebra vectors) always
//! coerce; [`Value`] carries operands whose kind is only known at runtime and
//! is where type errors originate.

use std::fmt;

use crate::error::{GeomError, Result};

use super::{Complex, Scalar};

/// A dynamically typed operand.
///
/// Booleans are deliberately distinct from numbers: they never coerce to a
/// [`Scalar`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Real(f64),
    Complex(Complex<f64>),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// Builds a [`Value::List`] from any iterable of convertible items.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns `true` for a single real, integer or complex number.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Real(_) | Self::Complex(_))
    }

    fn to_scalar(&self) -> Result<Scalar> {
        match self {
            Self::Int(i) => Ok(Scalar::from(*i)),
            Self::Real(r) => Ok(Scalar::Real(*r)),
            Self::Complex(c) => Ok(Scalar::Complex(*c)),
            Self::Bool(_) => Err(GeomError::BooleanNotAllowed { what: "value" }),
            other => Err(GeomError::NotNumeric {
                what: "value",
                found: other.to_string(),
            }),
        }
    }

    fn to_components(&self) -> Result<Vec<Scalar>> {
        match self {
            Self::List(items) => items.iter().map(Self::to_scalar).collect(),
            other => Err(GeomError::NotACollection {
                what: "operand",
                found: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Bool(b) => write!(f, "boolean {b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Text(s) => write!(f, "text {s:?}"),
            Self::List(items) => write!(f, "list of {} items", items.len()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<Complex<f64>> for Value {
    fn from(value: Complex<f64>) -> Self {
        Self::Complex(value)
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Real(r) => Self::Real(r),
            Scalar::Complex(c) => Self::Complex(c),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::list(value)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Self {
        Self::list(value)
    }
}

/// Returns `true` if `value` is a number or a collection of numbers.
///
/// Booleans, text and `None` are not numeric, and neither is a collection
/// containing any of them or a nested collection. An empty collection is
/// numeric.
#[must_use]
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::List(items) => items.iter().all(Value::is_number),
        other => other.is_number(),
    }
}

/// Fallible conversion of a single operand into a [`Scalar`].
pub trait IntoScalar {
    /// Converts the operand.
    ///
    /// # Errors
    ///
    /// Returns a type error if the operand is not a number.
    fn into_scalar(self) -> Result<Scalar>;
}

macro_rules! impl_into_scalar {
    ($($ty:ty),*) => {
        $(
            impl IntoScalar for $ty {
                fn into_scalar(self) -> Result<Scalar> {
                    Ok(Scalar::from(self))
                }
            }
        )*
    };
}

impl_into_scalar!(f64, f32, i32, u32, i64, Complex<f64>);

impl IntoScalar for Scalar {
    fn into_scalar(self) -> Result<Scalar> {
        Ok(self)
    }
}

impl IntoScalar for &Scalar {
    fn into_scalar(self) -> Result<Scalar> {
        Ok(*self)
    }
}

impl IntoScalar for Value {
    fn into_scalar(self) -> Result<Scalar> {
        self.to_scalar()
    }
}

impl IntoScalar for &Value {
    fn into_scalar(self) -> Result<Scalar> {
        self.to_scalar()
    }
}

/// Capability of being coerced into a fixed-dimension numeric sequence.
///
/// Implemented for [`Vector`](crate::geometry::Vector), arrays, slices,
/// `Vec`s and tuples of numbers, nalgebra vectors and points, and
/// [`Value`]. A `Result` source propagates its own error unchanged.
pub trait IntoComponents {
    /// Converts the operand into components.
    ///
    /// # Errors
    ///
    /// Returns a type error if the operand is not a collection or contains
    /// a non-numeric element.
    fn into_components(self) -> Result<Vec<Scalar>>;
}

impl<T: IntoScalar> IntoComponents for Vec<T> {
    fn into_components(self) -> Result<Vec<Scalar>> {
        self.into_iter().map(IntoScalar::into_scalar).collect()
    }
}

impl<T: IntoScalar, const N: usize> IntoComponents for [T; N] {
    fn into_components(self) -> Result<Vec<Scalar>> {
        self.into_iter().map(IntoScalar::into_scalar).collect()
    }
}

impl<T: IntoScalar + Clone> IntoComponents for &[T] {
    fn into_components(self) -> Result<Vec<Scalar>> {
        self.iter().cloned().map(IntoScalar::into_scalar).collect()
    }
}

impl<T: IntoScalar + Clone> IntoComponents for &Vec<T> {
    fn into_components(self) -> Result<Vec<Scalar>> {
        self.as_slice().into_components()
    }
}

impl<T: IntoScalar + Clone, const N: usize> IntoComponents for &[T; N] {
    fn into_components(self) -> Result<Vec<Scalar>> {
        self.as_slice().into_components()
    }
}

impl<A: IntoScalar, B: IntoScalar> IntoComponents for (A, B) {
    fn into_components(self) -> Result<Vec<Scalar>> {
        Ok(vec![self.0.into_scalar()?, self.1.into_scalar()?])
    }
}

impl<A: IntoScalar, B: IntoScalar, C: IntoScalar> IntoComponents for (A, B, C) {
    fn into_components(self) -> Result<Vec<Scalar>> {
        Ok(vec![
            self.0.into_scalar()?,
            self.1.into_scalar()?,
            self.2.into_scalar()?,
        ])
    }
}

impl IntoComponents for Value {
    fn into_components(self) -> Result<Vec<Scalar>> {
        self.to_components()
    }
}

impl IntoComponents for &Value {
    fn into_components(self) -> Result<Vec<Scalar>> {
        self.to_components()
    }
}

impl<T: IntoComponents> IntoComponents for Result<T> {
    fn into_components(self) -> Result<Vec<Scalar>> {
        self?.into_components()
    }
}

impl<const D: usize> IntoComponents for nalgebra::SVector<f64, D> {
    fn into_components(self) -> Result<Vec<Scalar>> {
        Ok(self.iter().copied().map(Scalar::Real).collect())
    }
}

impl<const D: usize> IntoComponents for &nalgebra::SVector<f64, D> {
    fn into_components(self) -> Result<Vec<Scalar>> {
        Ok(self.iter().copied().map(Scalar::Real).collect())
    }
}

impl<const D: usize> IntoComponents for nalgebra::Point<f64, D> {
    fn into_components(self) -> Result<Vec<Scalar>> {
        Ok(self.coords.iter().copied().map(Scalar::Real).collect())
    }
}
