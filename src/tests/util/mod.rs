pub mod polygon;
mod vtest;

pub use vtest::VTest;

use crate::{RealInterval, RealLocalizable};

/// Whether the bounds of `shape` are ordered on every axis and contain every point of `points`.
pub fn bounds_contain<'a, S, I>(shape: &S, points: I) -> bool
where S: RealInterval, I: IntoIterator<Item = &'a crate::RealPoint> {
    let n = shape.num_dimensions();
    (0..n).all(|d| shape.real_min(d) <= shape.real_max(d)) &&
        points.into_iter().all(|p| (0..n).all(|d| shape.real_min(d) <= p.real_position(d) && p.real_position(d) <= shape.real_max(d)))
}

/// The bounds of `shape` as `(min, max)` arrays.
pub fn bounds_of<S: RealInterval>(shape: &S) -> (Vec<f64>, Vec<f64>) {
    let mut min = vec![0.; shape.num_dimensions()];
    let mut max = vec![0.; shape.num_dimensions()];
    shape.real_min_into(&mut min);
    shape.real_max_into(&mut max);
    (min, max)
}
