use std::fmt;

use crate::Coordinates;

/// An axis-aligned box in n-dimensional real space.
pub trait RealInterval {
    /// The number of axes of the interval
    fn num_dimensions(&self) -> usize;
    /// The lower bound along axis `d`
    fn real_min(&self, d: usize) -> f64;
    /// The upper bound along axis `d`
    fn real_max(&self, d: usize) -> f64;

    /// Writes the lower bounds into `min`, one entry per axis. Entries past
    /// `num_dimensions()` are left untouched.
    fn real_min_into(&self, min: &mut [f64]) {
        for (d, m) in min.iter_mut().take(self.num_dimensions()).enumerate() {
            *m = self.real_min(d);
        }
    }

    /// Writes the upper bounds into `max`, one entry per axis. Entries past
    /// `num_dimensions()` are left untouched.
    fn real_max_into(&self, max: &mut [f64]) {
        for (d, m) in max.iter_mut().take(self.num_dimensions()).enumerate() {
            *m = self.real_max(d);
        }
    }
}

/// The bounding interval of a shape: `min[d] <= max[d]` on every axis.
#[derive(Clone, PartialEq)]
pub struct Bounds {
    min: Coordinates,
    max: Coordinates,
}

impl Bounds {
    pub(crate) fn new(min: Coordinates, max: Coordinates) -> Self {
        debug_assert_eq!(min.len(), max.len());
        Self { min, max }
    }

    pub fn min(&self) -> &[f64] { &self.min }
    pub fn max(&self) -> &[f64] { &self.max }
}

impl RealInterval for Bounds {
    #[inline(always)]
    fn num_dimensions(&self) -> usize {
        self.min.len()
    }

    #[inline(always)]
    fn real_min(&self, d: usize) -> f64 {
        self.min[d]
    }

    #[inline(always)]
    fn real_max(&self, d: usize) -> f64 {
        self.max[d]
    }
}

impl fmt::Debug for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bounds({:?}..={:?})", &self.min[..], &self.max[..])
    }
}
