pub mod circle;
pub mod ops;
pub mod vector;

pub use circle::{Circle, CircleAttr, IntoAttr, IntoTarget, Target};
pub use vector::Vector;
