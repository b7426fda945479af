pub mod numeric;
pub mod scalar;
pub mod tolerance;

pub use nalgebra::Complex;
pub use numeric::{is_numeric, IntoComponents, IntoScalar, Value};
pub use scalar::Scalar;
pub use tolerance::{set_tolerance, tolerance, Tolerance, DEFAULT_TOLERANCE};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;
