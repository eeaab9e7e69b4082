use std::{error, fmt};

/// Describes why an operation on a mask was rejected.
///
/// Every operation which can fail validates its input before touching the
/// stored state, so a shape is unchanged after returning an error.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MaskError {
    /// A vertex index was outside of the valid range. `len` is the exclusive
    /// upper bound which applied to the operation (the vertex count for
    /// access and removal, one more than that for insertion).
    IndexOutOfBounds { index: usize, len: usize },
    /// A point had fewer coordinates than the dimensionality of the shape.
    DimensionMismatch { expected: usize, actual: usize },
    /// A shape was constructed from no vertices, or an edit would have left
    /// it without any.
    NoVertices,
    /// A shape parameter (semi-axis length, exponent) was not a positive
    /// finite number.
    InvalidParameter(String),
    /// The operation is not supported by this kind of shape.
    UnsupportedOperation(&'static str),
}

impl MaskError {
    /// Whether this error reports an out-of-range index, an undersized point,
    /// or the removal of the last vertex, as opposed to an operation the shape
    /// does not support.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. } | Self::DimensionMismatch { .. } | Self::NoVertices)
    }

    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfBounds { index, len })
        }
    }

    #[inline]
    pub(crate) fn check_dimensions(expected: usize, actual: usize) -> Result<(), Self> {
        if actual >= expected {
            Ok(())
        } else {
            Err(Self::DimensionMismatch { expected, actual })
        }
    }
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => write!(f, "Index {} is out of bounds for length {}", index, len),
            Self::DimensionMismatch { expected, actual } => write!(f, "Point must have at least {} dimensions, but has {}", expected, actual),
            Self::NoVertices => write!(f, "Shape must contain at least one vertex"),
            Self::InvalidParameter(msg) => write!(f, "Invalid shape parameter: {}", msg),
            Self::UnsupportedOperation(op) => write!(f, "Operation '{}' is not supported by this shape", op),
        }
    }
}

impl error::Error for MaskError { }
