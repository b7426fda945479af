use thiserror::Error;

/// Broad classification of a [`GeomError`].
///
/// Callers that only care about the category of failure (wrong kind of
/// operand, bad value, bad index, division by zero) match on this instead of
/// the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operand has the wrong kind.
    Type,
    /// The operand has the right kind but an invalid value.
    Value,
    /// Out-of-bounds component access.
    Index,
    /// Scalar division by zero.
    DivideByZero,
}

/// Error type for vector and circle operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    #[error("{what} must be numeric, got {found}")]
    NotNumeric { what: &'static str, found: String },

    #[error("{what} must be numeric, booleans are not accepted")]
    BooleanNotAllowed { what: &'static str },

    #[error("{what} must be a collection of numbers, got {found}")]
    NotACollection { what: &'static str, found: String },

    #[error("{what} must be a real number, got a complex value")]
    ComplexNotAllowed { what: &'static str },

    #[error("attribute name must be text, got {found}")]
    AttributeNotText { found: String },

    #[error("expected a circle or a 2D point, got a collection of {found} numbers")]
    NotAPoint { found: usize },

    #[error("vector must have at least one component")]
    Empty,

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("cross product is only defined for 3D vectors, got {left}D and {right}D")]
    CrossDimension { left: usize, right: usize },

    #[error("cannot normalize the zero vector")]
    ZeroVector,

    #[error("{what} must not be negative, got {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("{what} must be positive, got {value}")]
    NotPositive { what: &'static str, value: f64 },

    #[error("unknown circle attribute {0:?}, expected radius, circumference or area")]
    UnknownAttribute(String),

    #[error("vector has less than {} dimensions", .index + 1)]
    IndexOutOfRange { index: usize, len: usize },

    #[error("division by zero")]
    DivideByZero,
}

impl GeomError {
    /// Returns the broad category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotNumeric { .. }
            | Self::BooleanNotAllowed { .. }
            | Self::NotACollection { .. }
            | Self::ComplexNotAllowed { .. }
            | Self::AttributeNotText { .. }
            | Self::NotAPoint { .. } => ErrorKind::Type,
            Self::Empty
            | Self::DimensionMismatch { .. }
            | Self::CrossDimension { .. }
            | Self::ZeroVector
            | Self::Negative { .. }
            | Self::NotPositive { .. }
            | Self::UnknownAttribute(_) => ErrorKind::Value,
            Self::IndexOutOfRange { .. } => ErrorKind::Index,
            Self::DivideByZero => ErrorKind::DivideByZero,
        }
    }
}

/// Convenience type alias for results using [`GeomError`].
pub type Result<T> = std::result::Result<T, GeomError>;
