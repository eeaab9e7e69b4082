use log::debug;

use crate::{BoundaryType, Bounds, Coordinates, MaskError, RealInterval, RealLocalizable, RealMask, math};

/// An n-dimensional superellipsoid: the points `p` where
/// `sum_d (|p[d] - center[d]| / semi_axis_lengths[d])^exponent` is at most 1
/// (closed) or less than 1 (open).
///
/// An exponent of 2 gives an ellipsoid, 1 a diamond, and large exponents
/// approach a box.
#[derive(Debug, Clone, PartialEq)]
pub struct SuperEllipsoid {
    center: Coordinates,
    semi_axis_lengths: Coordinates,
    exponent: f64,
    boundary_type: BoundaryType,
    bounds: Bounds,
}

impl SuperEllipsoid {
    /// Creates a superellipsoid which contains its boundary.
    ///
    /// The dimensionality is the smaller of the dimensionalities of `center`
    /// and `semi_axis_lengths`.
    pub fn closed<C, R>(center: &C, semi_axis_lengths: &R, exponent: f64) -> Result<Self, MaskError>
    where C: RealLocalizable + ?Sized, R: RealLocalizable + ?Sized {
        Self::build(center, semi_axis_lengths, exponent, BoundaryType::Closed)
    }

    /// Creates a superellipsoid which excludes its boundary.
    pub fn open<C, R>(center: &C, semi_axis_lengths: &R, exponent: f64) -> Result<Self, MaskError>
    where C: RealLocalizable + ?Sized, R: RealLocalizable + ?Sized {
        Self::build(center, semi_axis_lengths, exponent, BoundaryType::Open)
    }

    fn build<C, R>(center: &C, semi_axis_lengths: &R, exponent: f64, boundary_type: BoundaryType) -> Result<Self, MaskError>
    where C: RealLocalizable + ?Sized, R: RealLocalizable + ?Sized {
        let n = center.num_dimensions().min(semi_axis_lengths.num_dimensions());
        if !(exponent.is_finite() && exponent > 0.) {
            return Err(MaskError::InvalidParameter(format!("exponent must be positive and finite, got {}", exponent)));
        }

        let center: Coordinates = (0..n).map(|d| center.real_position(d)).collect();
        let semi_axis_lengths: Coordinates = (0..n).map(|d| semi_axis_lengths.real_position(d)).collect();
        if let Some((d, r)) = semi_axis_lengths.iter().enumerate().find(|(_, r)| !(r.is_finite() && **r > 0.)) {
            return Err(MaskError::InvalidParameter(format!("semi-axis length {} must be positive and finite, got {}", d, r)));
        }

        let bounds = Bounds::new(
            center.iter().zip(semi_axis_lengths.iter()).map(|(c, r)| c - r).collect(),
            center.iter().zip(semi_axis_lengths.iter()).map(|(c, r)| c + r).collect(),
        );
        debug!("Created {} {}D superellipsoid with exponent {}", boundary_type, n, exponent);
        Ok(Self { center, semi_axis_lengths, exponent, boundary_type, bounds })
    }

    pub fn center(&self) -> &[f64] { &self.center }
    pub fn semi_axis_lengths(&self) -> &[f64] { &self.semi_axis_lengths }
    pub fn exponent(&self) -> f64 { self.exponent }

    /// The semi-axis length along axis `d`.
    pub fn semi_axis_length(&self, d: usize) -> Result<f64, MaskError> {
        self.semi_axis_lengths.get(d).copied().ok_or(MaskError::IndexOutOfBounds { index: d, len: self.semi_axis_lengths.len() })
    }

    /// The powered radial distance of `l` from the center; 1 on the boundary.
    pub fn distance_powered<L: RealLocalizable + ?Sized>(&self, l: &L) -> f64 {
        math::distance_powered(&self.center, &self.semi_axis_lengths, self.exponent, l)
    }
}

impl RealMask for SuperEllipsoid {
    fn test<L: RealLocalizable + ?Sized>(&self, l: &L) -> bool {
        if l.num_dimensions() < self.center.len() {
            return false;
        }
        let distance = self.distance_powered(l);
        match self.boundary_type {
            BoundaryType::Open => distance < 1.,
            _ => distance <= 1.,
        }
    }

    fn boundary_type(&self) -> BoundaryType {
        self.boundary_type
    }
}

impl RealInterval for SuperEllipsoid {
    fn num_dimensions(&self) -> usize { self.center.len() }
    fn real_min(&self, d: usize) -> f64 { self.bounds.real_min(d) }
    fn real_max(&self, d: usize) -> f64 { self.bounds.real_max(d) }
}
