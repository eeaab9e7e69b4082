use std::fmt;

use smallvec::SmallVec;

use crate::{MaskError, RealLocalizable};

/// Inline storage for the coordinates of a point. Points of up to four
/// dimensions do not allocate.
pub type Coordinates = SmallVec<[f64; 4]>;

/// An owned point in n-dimensional real space.
///
/// Shapes store their vertices as `RealPoint`s copied from the caller's input,
/// so later changes to the input never alias the stored geometry.
#[derive(Clone, PartialEq)]
pub struct RealPoint(Coordinates);

impl RealPoint {
    /// Copies the first `n` coordinates of `l`. Extra coordinates are
    /// dropped; a point with fewer than `n` coordinates is rejected.
    pub fn truncated<L: RealLocalizable + ?Sized>(l: &L, n: usize) -> Result<Self, MaskError> {
        MaskError::check_dimensions(n, l.num_dimensions())?;
        Ok(Self((0..n).map(|d| l.real_position(d)).collect()))
    }

    pub fn coordinates(&self) -> &[f64] {
        &self.0
    }

    /// Moves this point to `position`, keeping its own dimensionality.
    pub fn set_position<L: RealLocalizable + ?Sized>(&mut self, position: &L) -> Result<(), MaskError> {
        MaskError::check_dimensions(self.0.len(), position.num_dimensions())?;
        for (d, c) in self.0.iter_mut().enumerate() {
            *c = position.real_position(d);
        }
        Ok(())
    }

    /// Translates this point by `offset`, keeping its own dimensionality.
    pub fn move_by<L: RealLocalizable + ?Sized>(&mut self, offset: &L) -> Result<(), MaskError> {
        MaskError::check_dimensions(self.0.len(), offset.num_dimensions())?;
        for (d, c) in self.0.iter_mut().enumerate() {
            *c += offset.real_position(d);
        }
        Ok(())
    }

    /// Whether the first `self.num_dimensions()` coordinates of `l` equal this point's.
    pub(crate) fn coincides<L: RealLocalizable + ?Sized>(&self, l: &L) -> bool {
        l.num_dimensions() >= self.0.len() && self.0.iter().enumerate().all(|(d, &c)| c == l.real_position(d))
    }
}

impl RealLocalizable for RealPoint {
    #[inline(always)]
    fn num_dimensions(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    fn real_position(&self, d: usize) -> f64 {
        self.0[d]
    }
}

impl<const N: usize> From<[f64; N]> for RealPoint {
    fn from(coordinates: [f64; N]) -> Self {
        Self(coordinates.iter().copied().collect())
    }
}

impl fmt::Debug for RealPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("RealPoint");
        for c in self.0.iter() {
            tuple.field(c);
        }
        tuple.finish()
    }
}

impl fmt::Display for RealPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (d, c) in self.0.iter().enumerate() {
            if d > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}
