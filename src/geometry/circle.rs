use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use crate::error::{GeomError, Result};
use crate::math::{IntoComponents, IntoScalar, Tolerance, Value};

use super::Vector;

/// A circle in the plane.
///
/// The center is an owned 2D [`Vector`], copied from whatever the caller
/// passed in; the radius is a non-negative real. Area and circumference are
/// derived from the radius, and setting either one recomputes the radius.
///
/// Scaling and translation return new circles and leave `self` untouched.
#[derive(Debug, Clone)]
pub struct Circle {
    center: Vector,
    radius: f64,
}

/// A circle attribute that can be scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircleAttr {
    Radius,
    Circumference,
    Area,
}

impl CircleAttr {
    /// Radius of a circle whose attribute equals `value`.
    fn radius_for(self, value: f64) -> f64 {
        match self {
            Self::Radius => value,
            Self::Circumference => value / TAU,
            Self::Area => (value / PI).sqrt(),
        }
    }

    /// Factor applied to the radius when this attribute is scaled by `factor`.
    fn radius_factor(self, factor: f64) -> f64 {
        match self {
            Self::Radius | Self::Circumference => factor,
            Self::Area => factor.sqrt(),
        }
    }
}

impl FromStr for CircleAttr {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "radius" => Ok(Self::Radius),
            "circumference" => Ok(Self::Circumference),
            "area" => Ok(Self::Area),
            other => Err(GeomError::UnknownAttribute(other.to_owned())),
        }
    }
}

impl fmt::Display for CircleAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Radius => "radius",
            Self::Circumference => "circumference",
            Self::Area => "area",
        })
    }
}

/// Anything naming a [`CircleAttr`].
pub trait IntoAttr {
    /// Resolves the attribute.
    ///
    /// # Errors
    ///
    /// Returns a value error for an unknown name and a type error if the
    /// operand is not text.
    fn into_attr(self) -> Result<CircleAttr>;
}

impl IntoAttr for CircleAttr {
    fn into_attr(self) -> Result<CircleAttr> {
        Ok(self)
    }
}

impl IntoAttr for &str {
    fn into_attr(self) -> Result<CircleAttr> {
        self.parse()
    }
}

impl IntoAttr for String {
    fn into_attr(self) -> Result<CircleAttr> {
        self.parse()
    }
}

impl IntoAttr for &Value {
    fn into_attr(self) -> Result<CircleAttr> {
        match self {
            Value::Text(name) => name.parse(),
            other => Err(GeomError::AttributeNotText {
                found: other.to_string(),
            }),
        }
    }
}

impl IntoAttr for Value {
    fn into_attr(self) -> Result<CircleAttr> {
        (&self).into_attr()
    }
}

/// The other operand of [`Circle::intersects`].
#[derive(Debug, Clone)]
pub enum Target {
    Circle(Circle),
    Point(Vector),
}

/// Anything [`Circle::intersects`] can test against: a circle or any
/// numeric collection, which must hold exactly two components.
pub trait IntoTarget {
    /// Converts the operand.
    ///
    /// # Errors
    ///
    /// Returns a type error if the operand is neither a circle nor a 2D
    /// numeric collection.
    fn into_target(self) -> Result<Target>;
}

impl IntoTarget for Target {
    fn into_target(self) -> Result<Target> {
        Ok(self)
    }
}

impl IntoTarget for Circle {
    fn into_target(self) -> Result<Target> {
        Ok(Target::Circle(self))
    }
}

impl IntoTarget for &Circle {
    fn into_target(self) -> Result<Target> {
        Ok(Target::Circle(self.clone()))
    }
}

impl<T: IntoComponents> IntoTarget for T {
    fn into_target(self) -> Result<Target> {
        let components = self.into_components()?;
        if components.len() != 2 {
            return Err(GeomError::NotAPoint {
                found: components.len(),
            });
        }
        Ok(Target::Point(Vector::new(components)?))
    }
}

impl Circle {
    /// Creates a circle.
    ///
    /// # Errors
    ///
    /// Returns a type error if `center` is not a numeric collection or
    /// `radius` is not a real number, and a value error if the center is not
    /// 2D or the radius is negative. Errors from a fallible `center` source
    /// propagate unchanged.
    pub fn new(center: impl IntoComponents, radius: impl IntoScalar) -> Result<Self> {
        Ok(Self {
            center: planar(center)?,
            radius: non_negative(radius, "radius")?,
        })
    }

    /// Returns the center.
    #[must_use]
    pub fn center(&self) -> &Vector {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Replaces the center.
    ///
    /// # Errors
    ///
    /// Same as the `center` argument of [`Circle::new`].
    pub fn set_center(&mut self, center: impl IntoComponents) -> Result<()> {
        self.center = planar(center)?;
        Ok(())
    }

    /// Replaces the radius.
    ///
    /// # Errors
    ///
    /// Returns a type error for a non-real radius and a value error for a
    /// negative one.
    pub fn set_radius(&mut self, radius: impl IntoScalar) -> Result<()> {
        self.radius = non_negative(radius, "radius")?;
        Ok(())
    }

    /// `π·r²`.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Sets the radius to `sqrt(area / π)`.
    ///
    /// # Errors
    ///
    /// Returns a type error for a non-real area and a value error for a
    /// negative one.
    pub fn set_area(&mut self, area: impl IntoScalar) -> Result<()> {
        let area = non_negative(area, "area")?;
        self.radius = CircleAttr::Area.radius_for(area);
        Ok(())
    }

    /// `2·π·r`.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        TAU * self.radius
    }

    /// Sets the radius to `circumference / 2π`.
    ///
    /// # Errors
    ///
    /// Returns a type error for a non-real circumference and a value error
    /// for a negative one.
    pub fn set_circumference(&mut self, circumference: impl IntoScalar) -> Result<()> {
        let circumference = non_negative(circumference, "circumference")?;
        self.radius = CircleAttr::Circumference.radius_for(circumference);
        Ok(())
    }

    /// Returns the value of `attr`.
    #[must_use]
    pub fn attr(&self, attr: CircleAttr) -> f64 {
        match attr {
            CircleAttr::Radius => self.radius,
            CircleAttr::Circumference => self.circumference(),
            CircleAttr::Area => self.area(),
        }
    }

    /// Returns a circle with the same center whose `attr` equals `value`.
    ///
    /// # Errors
    ///
    /// Returns a value error for an unknown attribute name or a negative
    /// value, and a type error for a non-text attribute or non-real value.
    pub fn scaled_to(&self, value: impl IntoScalar, attr: impl IntoAttr) -> Result<Circle> {
        let attr = attr.into_attr()?;
        let value = non_negative(value, "value")?;
        Ok(self.with_radius(attr.radius_for(value)))
    }

    /// Returns a circle with the same center whose `attr` is multiplied by
    /// `factor`.
    ///
    /// Scaling the radius or circumference by `k` scales the radius by `k`;
    /// scaling the area by `k` scales the radius by `sqrt(k)`.
    ///
    /// # Errors
    ///
    /// Same as [`scaled_to`](Self::scaled_to).
    pub fn scaled_by(&self, factor: impl IntoScalar, attr: impl IntoAttr) -> Result<Circle> {
        let attr = attr.into_attr()?;
        let factor = non_negative(factor, "factor")?;
        Ok(self.with_radius(self.radius * attr.radius_factor(factor)))
    }

    /// Returns a circle with the same radius centered at `position`.
    ///
    /// # Errors
    ///
    /// Same as the `center` argument of [`Circle::new`].
    pub fn moved_to(&self, position: impl IntoComponents) -> Result<Circle> {
        Ok(Self {
            center: planar(position)?,
            radius: self.radius,
        })
    }

    /// Returns a circle with the same radius whose center is translated by
    /// `offset`.
    ///
    /// # Errors
    ///
    /// Returns a type error if `offset` is not numeric and a value error if
    /// it is not 2D.
    pub fn moved_by(&self, offset: impl IntoComponents) -> Result<Circle> {
        Ok(Self {
            center: self.center.add(offset)?,
            radius: self.radius,
        })
    }

    /// Distance between the centers of two circles.
    #[must_use]
    pub fn distance_to(&self, other: &Circle) -> f64 {
        distance(&self.center, &other.center)
    }

    /// Returns `true` if the point lies inside or on the circle.
    ///
    /// # Errors
    ///
    /// Returns a type error if `point` is not a numeric collection and a
    /// value error if it is not 2D.
    pub fn contains(&self, point: impl IntoComponents) -> Result<bool> {
        let point = planar(point)?;
        Ok(distance(&self.center, &point) <= self.radius)
    }

    /// Returns `true` if `other` touches or overlaps this circle.
    ///
    /// For a circle, the centers must be no further apart than the sum of
    /// the radii; for a point, it must lie inside or on this circle. Both
    /// boundaries are closed.
    ///
    /// # Errors
    ///
    /// Returns a type error if `other` is neither a circle nor a 2D numeric
    /// collection.
    pub fn intersects(&self, other: impl IntoTarget) -> Result<bool> {
        match other.into_target()? {
            Target::Circle(other) => Ok(self.distance_to(&other) <= self.radius + other.radius),
            Target::Point(point) => self.contains(point),
        }
    }

    fn with_radius(&self, radius: f64) -> Circle {
        Self {
            center: self.center.clone(),
            radius,
        }
    }
}

/// Same center and radius within the process-wide tolerance.
impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && Tolerance::global().is_equal_f64(self.radius, other.radius)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(center={}, radius={})", self.center, self.radius)
    }
}

fn planar(center: impl IntoComponents) -> Result<Vector> {
    let center = Vector::new(center)?;
    if center.len() != 2 {
        return Err(GeomError::DimensionMismatch {
            expected: 2,
            found: center.len(),
        });
    }
    Ok(center)
}

fn non_negative(value: impl IntoScalar, what: &'static str) -> Result<f64> {
    let value = value
        .into_scalar()?
        .as_real()
        .ok_or(GeomError::ComplexNotAllowed { what })?;
    if value.is_nan() || value < 0.0 {
        return Err(GeomError::Negative { what, value });
    }
    Ok(value)
}

fn distance(a: &Vector, b: &Vector) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(p, q)| (p - q).abs_sq())
        .sum::<f64>()
        .sqrt()
}
