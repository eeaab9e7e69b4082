use std::fmt;

/// Describes whether the points on the boundary of a mask are members of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryType {
    /// Boundary points are excluded.
    Open,
    /// Boundary points are included.
    Closed,
    /// Some boundary points are included and others are not.
    /// Which ones is decided by the concrete shape.
    Unspecified,
}

impl fmt::Display for BoundaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Unspecified => write!(f, "unspecified"),
        }
    }
}
