//! Vector and circle primitives with tolerance-based equality.
//!
//! [`Vector`] is a fixed-dimension, mutable sequence of real or complex
//! components; [`Circle`] is a 2D center plus a non-negative radius. All
//! equality checks compare components against an absolute tolerance,
//! process-wide by default (see [`set_tolerance`]) or passed per call as a
//! [`Tolerance`].
//!
//! ```
//! use geom::{Circle, Vector};
//!
//! let v = Vector::new([3.0, 4.0])?;
//! assert_eq!(v.mag(), 5.0);
//!
//! let x = Vector::new([1.0, 0.0, 0.0])?;
//! assert_eq!(x.cross([0.0, 1.0, 0.0])?, Vector::new([0.0, 0.0, 1.0])?);
//!
//! let a = Circle::new((0.0, 0.0), 5.0)?;
//! assert!(a.intersects(&Circle::new((10.0, 0.0), 5.0)?)?);
//! # Ok::<(), geom::GeomError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{ErrorKind, GeomError, Result};
pub use geometry::{Circle, CircleAttr, Vector};
pub use math::{is_numeric, set_tolerance, tolerance, Scalar, Tolerance, Value};
