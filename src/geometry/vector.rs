use std::fmt;
use std::iter::Copied;
use std::slice;

use crate::error::{ErrorKind, GeomError, Result};
use crate::math::tolerance::within;
use crate::math::{tolerance, IntoComponents, IntoScalar, Scalar, Tolerance, Vector2, Vector3};

/// A mathematical vector of any dimension.
///
/// The dimension is fixed at construction; components are real or complex
/// numbers and can be changed in place. Every operation that returns a
/// vector returns a new, independently owned value.
///
/// Binary operations accept any [`IntoComponents`] operand of the same
/// dimension: another `Vector`, an array, a slice, a tuple, a nalgebra
/// vector or a [`Value`](crate::math::Value) list. Operands are validated
/// before anything is computed or mutated.
///
/// Operator sugar is provided on references (`&a + &b`, `&a * 2.0`,
/// `-&a`); see the `ops` module for the full list.
#[derive(Debug, Clone)]
pub struct Vector {
    components: Vec<Scalar>,
}

impl Vector {
    /// Creates a vector from a collection of numbers.
    ///
    /// # Errors
    ///
    /// Returns a type error if `components` is not a collection or holds a
    /// non-numeric element (booleans included), and a value error if it is
    /// empty.
    pub fn new(components: impl IntoComponents) -> Result<Self> {
        let components = components.into_components()?;
        if components.is_empty() {
            return Err(GeomError::Empty);
        }
        Ok(Self { components })
    }

    /// Creates the zero vector of dimension `dim`.
    ///
    /// # Errors
    ///
    /// Returns a value error if `dim` is zero.
    pub fn zeros(dim: usize) -> Result<Self> {
        Self::new(vec![Scalar::ZERO; dim])
    }

    /// Returns the dimension.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always `false` for a constructed vector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn components(&self) -> &[Scalar] {
        &self.components
    }

    /// Iterates over the components.
    pub fn iter(&self) -> Copied<slice::Iter<'_, Scalar>> {
        self.components.iter().copied()
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns an index error if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<Scalar> {
        self.components
            .get(index)
            .copied()
            .ok_or(GeomError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Replaces the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns a type error if `value` is not numeric and an index error if
    /// `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: impl IntoScalar) -> Result<()> {
        let value = value.into_scalar()?;
        let len = self.len();
        let slot = self
            .components
            .get_mut(index)
            .ok_or(GeomError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// The x-component, equivalent to `get(0)`.
    ///
    /// # Errors
    ///
    /// Never fails for a constructed vector; kept fallible for symmetry with
    /// [`y`](Self::y) and [`z`](Self::z).
    pub fn x(&self) -> Result<Scalar> {
        self.get(0)
    }

    /// The y-component, equivalent to `get(1)`.
    ///
    /// # Errors
    ///
    /// Returns an index error for 1D vectors.
    pub fn y(&self) -> Result<Scalar> {
        self.get(1)
    }

    /// The z-component, equivalent to `get(2)`.
    ///
    /// # Errors
    ///
    /// Returns an index error for vectors with fewer than 3 dimensions.
    pub fn z(&self) -> Result<Scalar> {
        self.get(2)
    }

    /// Sets the x-component.
    ///
    /// # Errors
    ///
    /// See [`set`](Self::set).
    pub fn set_x(&mut self, value: impl IntoScalar) -> Result<()> {
        self.set(0, value)
    }

    /// Sets the y-component.
    ///
    /// # Errors
    ///
    /// See [`set`](Self::set).
    pub fn set_y(&mut self, value: impl IntoScalar) -> Result<()> {
        self.set(1, value)
    }

    /// Sets the z-component.
    ///
    /// # Errors
    ///
    /// See [`set`](Self::set).
    pub fn set_z(&mut self, value: impl IntoScalar) -> Result<()> {
        self.set(2, value)
    }

    /// Compares against `other` using the process-wide tolerance.
    ///
    /// Operands that are not numeric collections compare unequal.
    ///
    /// # Errors
    ///
    /// Returns a value error if `other` is a numeric collection of a
    /// different dimension.
    pub fn equals(&self, other: impl IntoComponents) -> Result<bool> {
        self.equals_within(other, Tolerance::global())
    }

    /// Compares against `other` using an explicit tolerance.
    ///
    /// Components `a` and `b` match when `|a - b| < epsilon`, or when they
    /// are identical (so equal infinities match). NaN never matches.
    ///
    /// # Errors
    ///
    /// Returns a value error if `other` is a numeric collection of a
    /// different dimension.
    pub fn equals_within(&self, other: impl IntoComponents, tol: Tolerance) -> Result<bool> {
        let other = match other.into_components() {
            Ok(other) => other,
            Err(err) if err.kind() == ErrorKind::Type => return Ok(false),
            Err(err) => return Err(err),
        };
        self.check_dimension(other.len())?;
        Ok(self
            .iter()
            .zip(other)
            .all(|(a, b)| tol.is_equal(a, b)))
    }

    /// Returns `self + other`.
    ///
    /// # Errors
    ///
    /// Returns a type error if `other` is not numeric and a value error if
    /// its dimension differs.
    pub fn add(&self, other: impl IntoComponents) -> Result<Vector> {
        let other = self.operand(other)?;
        Ok(self.zip_with(&other, |a, b| a + b))
    }

    /// Returns `self - other`.
    ///
    /// # Errors
    ///
    /// Returns a type error if `other` is not numeric and a value error if
    /// its dimension differs.
    pub fn sub(&self, other: impl IntoComponents) -> Result<Vector> {
        let other = self.operand(other)?;
        Ok(self.zip_with(&other, |a, b| a - b))
    }

    /// Returns the vector scaled by `scalar`.
    ///
    /// # Errors
    ///
    /// Returns a type error if `scalar` is not a number.
    pub fn mul(&self, scalar: impl IntoScalar) -> Result<Vector> {
        let scalar = scalar.into_scalar()?;
        Ok(self.map(|c| c * scalar))
    }

    /// Returns the vector divided by `scalar`.
    ///
    /// # Errors
    ///
    /// Returns a type error if `scalar` is not a number and a divide-by-zero
    /// error if it is exactly zero.
    pub fn div(&self, scalar: impl IntoScalar) -> Result<Vector> {
        let scalar = nonzero_divisor(scalar)?;
        Ok(self.map(|c| c / scalar))
    }

    /// Returns the vector scaled by a real factor.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Vector {
        self.map(|c| c * factor)
    }

    /// Returns the cross product `self × other`.
    ///
    /// # Errors
    ///
    /// Returns a type error if `other` is not numeric and a value error
    /// unless both operands are 3D.
    pub fn cross(&self, other: impl IntoComponents) -> Result<Vector> {
        let b = other.into_components()?;
        let a = &self.components;
        if a.len() != 3 || b.len() != 3 {
            return Err(GeomError::CrossDimension {
                left: a.len(),
                right: b.len(),
            });
        }
        Ok(Self {
            components: vec![
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
        })
    }

    /// Returns the dot product, the sum of component-wise products.
    ///
    /// Complex components are not conjugated.
    ///
    /// # Errors
    ///
    /// Returns a type error if `other` is not numeric and a value error if
    /// its dimension differs.
    pub fn dot(&self, other: impl IntoComponents) -> Result<Scalar> {
        let other = self.operand(other)?;
        Ok(self.iter().zip(other).map(|(a, b)| a * b).sum())
    }

    /// Squared magnitude, `Σ|cᵢ|²`.
    #[must_use]
    pub fn mag_sq(&self) -> f64 {
        self.iter().map(Scalar::abs_sq).sum()
    }

    /// Euclidean magnitude.
    ///
    /// Components are divided by the largest modulus before squaring, so the
    /// result stays finite and nonzero wherever the true magnitude does.
    #[must_use]
    pub fn mag(&self) -> f64 {
        let scale = self.iter().map(Scalar::abs).fold(0.0, f64::max);
        if scale == 0.0 || scale.is_infinite() {
            return self.mag_sq().sqrt();
        }
        scale * self.iter().map(|c| (c / scale).abs_sq()).sum::<f64>().sqrt()
    }

    /// Returns a vector pointing the opposite way with the same magnitude.
    #[must_use]
    pub fn negated(&self) -> Vector {
        self.map(|c| -c)
    }

    /// Returns the unit vector in the same direction.
    ///
    /// # Errors
    ///
    /// Returns a value error for the zero vector.
    pub fn norm(&self) -> Result<Vector> {
        let mag = self.nonzero_mag()?;
        Ok(self.map(|c| c / mag))
    }

    /// Scales the vector to unit magnitude in place.
    ///
    /// # Errors
    ///
    /// Returns a value error for the zero vector; the vector is unchanged.
    pub fn normalize(&mut self) -> Result<()> {
        let mag = self.nonzero_mag()?;
        tracing::trace!(dimension = self.len(), magnitude = mag, "normalizing vector");
        self.components.iter_mut().for_each(|c| *c = *c / mag);
        Ok(())
    }

    /// Adds `other` in place.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add); the vector is unchanged on error.
    pub fn add_on(&mut self, other: impl IntoComponents) -> Result<()> {
        let other = self.operand(other)?;
        for (c, o) in self.components.iter_mut().zip(other) {
            *c = *c + o;
        }
        Ok(())
    }

    /// Subtracts `other` in place.
    ///
    /// # Errors
    ///
    /// Same as [`sub`](Self::sub); the vector is unchanged on error.
    pub fn take_away(&mut self, other: impl IntoComponents) -> Result<()> {
        let other = self.operand(other)?;
        for (c, o) in self.components.iter_mut().zip(other) {
            *c = *c - o;
        }
        Ok(())
    }

    /// Multiplies every component by `scalar` in place.
    ///
    /// # Errors
    ///
    /// Same as [`mul`](Self::mul); the vector is unchanged on error.
    pub fn mul_by(&mut self, scalar: impl IntoScalar) -> Result<()> {
        let scalar = scalar.into_scalar()?;
        self.components.iter_mut().for_each(|c| *c = *c * scalar);
        Ok(())
    }

    /// Divides every component by `scalar` in place.
    ///
    /// # Errors
    ///
    /// Same as [`div`](Self::div); the vector is unchanged on error.
    pub fn div_by(&mut self, scalar: impl IntoScalar) -> Result<()> {
        let scalar = nonzero_divisor(scalar)?;
        self.components.iter_mut().for_each(|c| *c = *c / scalar);
        Ok(())
    }

    /// Euclidean distance between the points `self` and `other`.
    ///
    /// # Errors
    ///
    /// Same as [`sub`](Self::sub).
    pub fn distance_to(&self, other: impl IntoComponents) -> Result<f64> {
        Ok(self.sub(other)?.mag())
    }

    /// Converts a real 2D vector to nalgebra.
    ///
    /// # Errors
    ///
    /// Returns a value error unless the vector is 2D and a type error if a
    /// component is complex.
    pub fn to_vector2(&self) -> Result<Vector2> {
        let [x, y] = self.real_components::<2>()?;
        Ok(Vector2::new(x, y))
    }

    /// Converts a real 3D vector to nalgebra.
    ///
    /// # Errors
    ///
    /// Returns a value error unless the vector is 3D and a type error if a
    /// component is complex.
    pub fn to_vector3(&self) -> Result<Vector3> {
        let [x, y, z] = self.real_components::<3>()?;
        Ok(Vector3::new(x, y, z))
    }

    pub(crate) fn check_dimension(&self, found: usize) -> Result<()> {
        if found == self.len() {
            Ok(())
        } else {
            Err(GeomError::DimensionMismatch {
                expected: self.len(),
                found,
            })
        }
    }

    fn operand(&self, other: impl IntoComponents) -> Result<Vec<Scalar>> {
        let other = other.into_components()?;
        self.check_dimension(other.len())?;
        Ok(other)
    }

    fn map(&self, f: impl Fn(Scalar) -> Scalar) -> Vector {
        Self {
            components: self.iter().map(f).collect(),
        }
    }

    fn zip_with(&self, other: &[Scalar], f: impl Fn(Scalar, Scalar) -> Scalar) -> Vector {
        Self {
            components: self
                .iter()
                .zip(other.iter().copied())
                .map(|(a, b)| f(a, b))
                .collect(),
        }
    }

    fn nonzero_mag(&self) -> Result<f64> {
        let mag = self.mag();
        if mag == 0.0 {
            return Err(GeomError::ZeroVector);
        }
        Ok(mag)
    }

    fn real_components<const D: usize>(&self) -> Result<[f64; D]> {
        self.check_dimension(D)?;
        let mut out = [0.0; D];
        for (slot, c) in out.iter_mut().zip(self.iter()) {
            *slot = c
                .as_real()
                .ok_or(GeomError::ComplexNotAllowed { what: "component" })?;
        }
        Ok(out)
    }
}

fn nonzero_divisor(scalar: impl IntoScalar) -> Result<Scalar> {
    let scalar = scalar.into_scalar()?;
    if scalar.is_zero() {
        return Err(GeomError::DivideByZero);
    }
    Ok(scalar)
}

impl IntoComponents for Vector {
    fn into_components(self) -> Result<Vec<Scalar>> {
        Ok(self.components)
    }
}

impl IntoComponents for &Vector {
    fn into_components(self) -> Result<Vec<Scalar>> {
        Ok(self.components.clone())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = Scalar;
    type IntoIter = Copied<slice::Iter<'a, Scalar>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vector2> for Vector {
    fn from(v: Vector2) -> Self {
        Self {
            components: vec![Scalar::Real(v.x), Scalar::Real(v.y)],
        }
    }
}

impl From<Vector3> for Vector {
    fn from(v: Vector3) -> Self {
        Self {
            components: vec![Scalar::Real(v.x), Scalar::Real(v.y), Scalar::Real(v.z)],
        }
    }
}

/// Tolerance-based equality with the process-wide epsilon.
///
/// Vectors of different dimensions are unequal here; use
/// [`Vector::equals`] to have the mismatch reported as an error.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other).unwrap_or(false)
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Vector {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.equals(other).unwrap_or(false)
    }
}

impl approx::AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| within(a, b, epsilon))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Complex, Value};
    use approx::assert_abs_diff_eq;

    fn v(components: &[f64]) -> Vector {
        Vector::new(components).unwrap()
    }

    fn tol() -> Tolerance {
        Tolerance::default()
    }

    #[test]
    fn new_from_many_collections() {
        let expected = v(&[1.0, 2.0, 3.0]);
        assert_eq!(Vector::new((1, 2, 3)).unwrap(), expected);
        assert_eq!(Vector::new([1.0, 2.0, 3.0]).unwrap(), expected);
        assert_eq!(Vector::new(vec![1, 2, 3]).unwrap(), expected);
        assert_eq!(Vector::new(Value::from([1, 2, 3])).unwrap(), expected);
        assert_eq!(Vector::new(&expected).unwrap(), expected);
        assert_eq!(Vector::new(Vector3::new(1.0, 2.0, 3.0)).unwrap(), expected);
    }

    #[test]
    fn new_rejects_bad_input() {
        let empty: [f64; 0] = [];
        assert_eq!(Vector::new(empty).unwrap_err(), GeomError::Empty);
        let text = Value::List(vec![Value::from("1"), Value::from(2.0), Value::from(3)]);
        assert_eq!(Vector::new(text).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(Vector::new(Value::from(1)).unwrap_err().kind(), ErrorKind::Type);
        let booleans = Value::List(vec![Value::from(true), Value::from(1)]);
        assert_eq!(Vector::new(booleans).unwrap_err().kind(), ErrorKind::Type);
    }

    #[test]
    fn zeros() {
        assert_eq!(Vector::zeros(3).unwrap(), v(&[0.0, 0.0, 0.0]));
        assert_eq!(Vector::zeros(0).unwrap_err(), GeomError::Empty);
    }

    #[test]
    fn len_is_dimension() {
        assert_eq!(v(&[0.0]).len(), 1);
        assert_eq!(v(&[0.0; 5]).len(), 5);
        assert_eq!(v(&[1.0, -2.0]).components(), &[Scalar::Real(1.0), Scalar::Real(-2.0)]);
    }

    #[test]
    fn get_checks_bounds_at_len() {
        let a = v(&[0.0, 2.0, 4.0]);
        assert_eq!(a.get(2).unwrap(), 4.0);
        assert_eq!(
            a.get(3).unwrap_err(),
            GeomError::IndexOutOfRange { index: 3, len: 3 }
        );
        assert_eq!(a.get(19).unwrap_err().kind(), ErrorKind::Index);

        let long = Vector::new((0..20).map(|i| 3 * i).collect::<Vec<i32>>()).unwrap();
        assert_eq!(long.get(19).unwrap(), 57.0);
    }

    #[test]
    fn named_accessors() {
        let one = v(&[7.0]);
        assert_eq!(one.x().unwrap(), 7.0);
        assert_eq!(one.y().unwrap_err().kind(), ErrorKind::Index);
        assert_eq!(one.z().unwrap_err().kind(), ErrorKind::Index);

        let mut three = v(&[0.0, 2.0, 4.0]);
        assert_eq!(three.z().unwrap(), 4.0);
        three.set_y(-1.5).unwrap();
        three.set_z(Complex::new(0.0, 1.0)).unwrap();
        assert_eq!(three.y().unwrap(), -1.5);
        assert!(three.z().unwrap().is_complex());
    }

    #[test]
    fn set_validates_before_writing() {
        let mut a = v(&[1.0, 2.0]);
        assert_eq!(a.set(2, 5.0).unwrap_err().kind(), ErrorKind::Index);
        assert_eq!(a.set(0, Value::from("5")).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(a.set(0, Value::from(true)).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(a, v(&[1.0, 2.0]));
    }

    #[test]
    fn equality_uses_tolerance() {
        assert!(v(&[0.0]).equals_within([0.0], tol()).unwrap());
        assert!(v(&[3.33334]).equals_within([3.33333], tol()).unwrap());
        assert!(v(&[-12000.0, -57.42]).equals_within([-12000.0, -57.42], tol()).unwrap());

        let tight = Tolerance::new(0.000_001).unwrap();
        assert!(!v(&[3.33334]).equals_within([3.33333], tight).unwrap());
        assert!(!v(&[-10000.0, 10000.0]).equals_within([10000.0, -10000.0], tight).unwrap());
        assert!(!v(&[2.0, 3.0, 4.0]).equals_within([3.0, 3.0, 3.0], tight).unwrap());
    }

    #[test]
    fn equality_flips_at_the_boundary() {
        let tol = Tolerance::new(0.25).unwrap();
        assert!(v(&[1.0]).equals_within([1.125], tol).unwrap());
        assert!(!v(&[1.0]).equals_within([1.25], tol).unwrap());
        assert!(!v(&[1.0]).equals_within([1.5], tol).unwrap());
    }

    #[test]
    fn equality_dimension_mismatch_is_an_error() {
        let err = v(&[1.0, 2.0]).equals([1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, GeomError::DimensionMismatch { expected: 2, found: 3 });
        assert_ne!(v(&[1.0, 2.0]), v(&[1.0, 2.0, 3.0]));
    }

    #[test]
    fn equality_against_non_numeric_is_false() {
        assert!(!v(&[0.0]).equals(Value::None).unwrap());
        assert!(!v(&[0.0]).equals(Value::from("0")).unwrap());
        assert!(!v(&[0.0, 1.0]).equals(Value::list(["a", "b"])).unwrap());
    }

    #[test]
    fn equality_with_special_values() {
        let big = v(&[f64::MAX, -f64::MAX]);
        assert_eq!(big, big.clone());
        let inf = v(&[-0.3, f64::INFINITY, f64::NEG_INFINITY]);
        assert_eq!(inf, inf.clone());
        assert_ne!(
            v(&[1.0, f64::NEG_INFINITY, 2.0]),
            v(&[f64::NEG_INFINITY, 1.0, 2.0])
        );
        let nan = v(&[1.0, f64::NAN, 3.0]);
        assert_ne!(nan, nan.clone());
    }

    #[test]
    fn equality_with_complex_components() {
        let a = Vector::new([Complex::new(1.0, 1.0), Complex::new(-1.0, -1.0)]).unwrap();
        assert_eq!(a, a.clone());
        let mixed = Vector::new(vec![
            Value::from(1.0),
            Value::from(-3),
            Value::from(Complex::new(0.0, 0.2)),
        ])
        .unwrap();
        assert_eq!(mixed, mixed.clone());
        assert_eq!(v(&[3.0]), Vector::new([Complex::new(3.0, 0.0)]).unwrap());
    }

    #[test]
    fn add_and_sub() {
        let cases: [(&[f64], &[f64], &[f64], &[f64]); 4] = [
            (&[0.0], &[0.0], &[0.0], &[0.0]),
            (&[1.34], &[3.0], &[4.34], &[-1.66]),
            (&[-4.0, 6.0], &[6.0, -4.0], &[2.0, 2.0], &[-10.0, 10.0]),
            (
                &[1900.0, 2000.0, 3000.0],
                &[0.01, 1.01, 0.5],
                &[1900.01, 2001.01, 3000.5],
                &[1899.99, 1998.99, 2999.5],
            ),
        ];
        for (ca, cb, sum, diff) in cases {
            let a = v(ca);
            let b = v(cb);
            assert_eq!(a.add(&b).unwrap(), v(sum));
            assert_eq!(b.add(ca).unwrap(), v(sum));
            assert_eq!(a.sub(&b).unwrap(), v(diff));
            assert_eq!(a.add(b.negated()).unwrap(), v(diff));
            assert_eq!(b.sub(ca).unwrap(), v(diff).negated());

            let mut m = a.clone();
            m.add_on(cb).unwrap();
            assert_eq!(m, v(sum));
            let mut m = b.clone();
            m.take_away(&a).unwrap();
            assert_eq!(m, v(diff).negated());
        }
    }

    #[test]
    fn add_rejects_bad_operands() {
        let mut a = v(&[1.0, 2.0]);
        let text = Value::List(vec![Value::from(3), Value::from("4")]);
        assert_eq!(a.add(&text).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(a.sub(&text).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(a.add_on(&text).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(a.take_away(&text).unwrap_err().kind(), ErrorKind::Type);

        let empty: &[f64] = &[];
        for bad in [&[3.0, 4.0, 5.0][..], empty, &[2.0][..]] {
            assert_eq!(a.add(bad).unwrap_err().kind(), ErrorKind::Value);
            assert_eq!(a.sub(bad).unwrap_err().kind(), ErrorKind::Value);
            assert_eq!(a.add_on(bad).unwrap_err().kind(), ErrorKind::Value);
            assert_eq!(a.take_away(bad).unwrap_err().kind(), ErrorKind::Value);
        }
        assert_eq!(a, v(&[1.0, 2.0]));
    }

    #[test]
    fn scalar_multiplication() {
        let cases: [(&[f64], f64, &[f64]); 4] = [
            (&[0.0], 30.0, &[0.0]),
            (&[133_333.0], -2.0, &[-266_666.0]),
            (&[3.0, -4.5], 0.0, &[0.0, 0.0]),
            (&[-2.0, -1.5, -1.0], -33.3, &[66.6, 49.95, 33.3]),
        ];
        for (c, m, e) in cases {
            let a = v(c);
            assert_eq!(a.mul(m).unwrap(), v(e));
            assert_eq!(a.scale(m), v(e));
            let mut mv = a.clone();
            mv.mul_by(m).unwrap();
            assert_eq!(mv, v(e));
        }
    }

    #[test]
    fn scalar_division() {
        let cases: [(&[f64], f64, &[f64]); 4] = [
            (&[0.0], 1.0, &[0.0]),
            (&[133_333.0], 133_333.0, &[1.0]),
            (&[3.0, -4.5], -0.5, &[-6.0, 9.0]),
            (&[-2.0, -1.5, -1.0], 4.0, &[-0.5, -0.375, -0.25]),
        ];
        for (c, d, e) in cases {
            let a = v(c);
            assert_eq!(a.div(d).unwrap(), v(e));
            let mut dv = a.clone();
            dv.div_by(d).unwrap();
            assert_eq!(dv, v(e));
        }
    }

    #[test]
    fn scalar_ops_reject_non_numbers() {
        let mut a = v(&[1.0, 2.0, 3.0]);
        let bad = [
            Value::from("3"),
            Value::from(true),
            Value::None,
            Value::from([3, 4]),
        ];
        for b in &bad {
            assert_eq!(a.mul(b).unwrap_err().kind(), ErrorKind::Type);
            assert_eq!(a.div(b).unwrap_err().kind(), ErrorKind::Type);
            assert_eq!(a.mul_by(b).unwrap_err().kind(), ErrorKind::Type);
            assert_eq!(a.div_by(b).unwrap_err().kind(), ErrorKind::Type);
        }
        assert_eq!(a, v(&[1.0, 2.0, 3.0]));
    }

    #[test]
    fn division_by_zero() {
        let mut a = v(&[1.0, 2.0, 3.0]);
        assert_eq!(a.div(0).unwrap_err(), GeomError::DivideByZero);
        assert_eq!(a.div(Complex::new(0.0, 0.0)).unwrap_err().kind(), ErrorKind::DivideByZero);
        assert_eq!(a.div_by(0.0).unwrap_err(), GeomError::DivideByZero);
        assert_eq!(a, v(&[1.0, 2.0, 3.0]));
    }

    #[test]
    fn cross_product() {
        let x = v(&[1.0, 0.0, 0.0]);
        let y = v(&[0.0, 1.0, 0.0]);
        assert_eq!(x.cross(&y).unwrap(), v(&[0.0, 0.0, 1.0]));
        assert_eq!(y.cross(&x).unwrap(), v(&[0.0, 0.0, -1.0]));

        let a = v(&[1.5, -2.0, 3.25]);
        let b = v(&[-4.0, 0.5, 2.0]);
        assert_eq!(a.cross(&b).unwrap(), b.cross(&a).unwrap().negated());
        assert_eq!(a.cross([-4.0, 0.5, 2.0]).unwrap(), a.cross(&b).unwrap());
    }

    #[test]
    fn cross_requires_3d() {
        let a = v(&[1.0, 2.0, 3.0]);
        assert_eq!(
            a.cross([1.0, 2.0]).unwrap_err(),
            GeomError::CrossDimension { left: 3, right: 2 }
        );
        assert_eq!(v(&[1.0, 2.0]).cross(&a).unwrap_err().kind(), ErrorKind::Value);
        assert_eq!(
            a.cross(Value::list(["x", "y", "z"])).unwrap_err().kind(),
            ErrorKind::Type
        );
    }

    #[test]
    fn dot_product() {
        let cases: [(&[f64], &[f64], f64); 4] = [
            (&[0.0], &[30.0], 0.0),
            (&[1.0], &[0.5], 0.5),
            (&[0.003, 0.004], &[-0.008, 0.006], 0.0),
            (&[4_123_213.0, 12_093_201.0, 3_298_928.0], &[2.0, 3.3, 4.01], 61_382_690.58),
        ];
        for (a, b, e) in cases {
            let av = v(a);
            assert!((av.dot(b).unwrap().re() - e).abs() < 0.001);
            assert!((v(b).dot(&av).unwrap().re() - e).abs() < 0.001);
        }
    }

    #[test]
    fn dot_rejects_bad_operands() {
        assert_eq!(v(&[1.0]).dot(Value::list(["zero"])).unwrap_err().kind(), ErrorKind::Type);
        let nested = Value::from(vec![Value::from([1, 2]), Value::from([3, 4])]);
        assert_eq!(v(&[1.0, 1.0]).dot(&nested).unwrap_err().kind(), ErrorKind::Type);
        let mixed = Value::List(vec![Value::from(true), Value::from(0), Value::from("False")]);
        assert_eq!(v(&[1.0, 1.0, 1.0]).dot(mixed).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(v(&[1.0]).dot([1.0, 1.0]).unwrap_err().kind(), ErrorKind::Value);
        assert_eq!(v(&[1.0, 1.0, 1.0]).dot([1.0, 1.0]).unwrap_err().kind(), ErrorKind::Value);
    }

    #[test]
    fn magnitude() {
        let cases: [(&[f64], f64); 5] = [
            (&[0.0], 0.0),
            (&[1.0], 1.0),
            (&[3.0, 4.0], 5.0),
            (&[1.0, 1.0], 2f64.sqrt()),
            (&[0.1, 4.0, 79.0], 79.101_3),
        ];
        for (c, e) in cases {
            let a = v(c);
            assert!((a.mag() - e).abs() < 0.0001, "{a} has magnitude {}", a.mag());
            assert!((a.mag_sq() - e * e).abs() < 0.01);
        }
        let complex = Vector::new([Complex::new(3.0, 4.0)]).unwrap();
        assert_abs_diff_eq!(complex.mag(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn negation() {
        assert_eq!(v(&[0.0]).negated(), v(&[0.0]));
        assert_eq!(v(&[1.0]).negated(), v(&[-1.0]));
        assert_eq!(v(&[-2.0, -3.0]).negated(), v(&[2.0, 3.0]));
        assert_eq!(v(&[34.5, -22.0, 130.0]).negated(), v(&[-34.5, 22.0, -130.0]));
    }

    #[test]
    fn normalization() {
        for c in [&[1.0][..], &[3.0, 4.0][..], &[0.1, 10.0, 100.0][..]] {
            let a = v(c);
            let n1 = a.norm().unwrap();
            let mut n2 = a.clone();
            n2.normalize().unwrap();
            for n in [&n1, &n2] {
                assert_abs_diff_eq!(n.mag(), 1.0, epsilon = 1e-4);
                let m = a.x().unwrap().re() / n.x().unwrap().re();
                assert!(m > 0.0);
                for (i, j) in a.iter().zip(n.iter()) {
                    assert!((m - i.re() / j.re()).abs() < 1e-4);
                }
            }
            assert_abs_diff_eq!(n1.norm().unwrap(), n1);
        }
    }

    #[test]
    fn magnitude_at_the_extremes_of_f64() {
        let huge = v(&[1e200, 1e200]);
        assert!((huge.mag() / 1e200 - 2f64.sqrt()).abs() < 1e-12);
        let n = huge.norm().unwrap();
        assert_abs_diff_eq!(n.mag(), 1.0, epsilon = 1e-12);
        assert_eq!(n, [0.5f64.sqrt(), 0.5f64.sqrt()]);

        let mut tiny = v(&[1e-200, 0.0]);
        assert_abs_diff_eq!(tiny.mag() / 1e-200, 1.0, epsilon = 1e-12);
        tiny.normalize().unwrap();
        assert_eq!(tiny, [1.0, 0.0]);
    }

    #[test]
    fn normalizing_zero_vector_fails() {
        let mut zero = v(&[0.0, 0.0]);
        assert_eq!(zero.norm().unwrap_err(), GeomError::ZeroVector);
        assert_eq!(zero.normalize().unwrap_err().kind(), ErrorKind::Value);
        assert_eq!(zero, v(&[0.0, 0.0]));
    }

    #[test]
    fn nalgebra_conversions() {
        let a = Vector::from(Vector2::new(1.0, -2.0));
        assert_eq!(a.to_vector2().unwrap(), Vector2::new(1.0, -2.0));
        assert_eq!(a.to_vector3().unwrap_err().kind(), ErrorKind::Value);
        let c = Vector::new([Complex::new(1.0, 1.0), Complex::new(0.0, 0.0)]).unwrap();
        assert_eq!(c.to_vector2().unwrap_err().kind(), ErrorKind::Type);
        let b = Vector::from(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(b.to_vector3().unwrap(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn distance_between_points() {
        assert_abs_diff_eq!(v(&[1.0, 1.0]).distance_to([4.0, 5.0]).unwrap(), 5.0);
    }

    #[test]
    fn display() {
        assert_eq!(v(&[1.0, -2.5]).to_string(), "(1, -2.5)");
    }
}
