use std::{cmp, slice};

use log::debug;
use ordered_float::OrderedFloat;

use crate::{BoundaryType, Bounds, MaskError, RealInterval, RealLocalizable, RealMask, RealPoint, math, vertex_list::VertexList};

/// A finite set of points in n-dimensional space. A point is a member of the
/// mask exactly when it coincides with a member of the collection.
///
/// Mutation is optional: collections which do not support it keep the default
/// implementations, which fail with [MaskError::UnsupportedOperation].
/// The boundary type of a point collection is always [BoundaryType::Closed].
pub trait RealPointCollection: RealMask + RealInterval {
    /// The iterator returned by [RealPointCollection::points]
    type Points<'a>: Iterator<Item = &'a RealPoint> where Self: 'a;

    /// Iterates over the points of the collection.
    fn points(&self) -> Self::Points<'_>;

    /// Adds `point` to the collection.
    fn add_point<L: RealLocalizable + ?Sized>(&mut self, _point: &L) -> Result<(), MaskError> {
        Err(MaskError::UnsupportedOperation("add_point"))
    }

    /// Removes one point coinciding with `point` from the collection, returning
    /// whether there was one.
    fn remove_point<L: RealLocalizable + ?Sized>(&mut self, _point: &L) -> Result<bool, MaskError> {
        Err(MaskError::UnsupportedOperation("remove_point"))
    }
}

/// A mutable [RealPointCollection] which keeps its points in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultPointCollection {
    points: VertexList,
}

impl DefaultPointCollection {
    /// Creates a collection whose dimensionality is that of the first point.
    pub fn new<I>(points: I) -> Result<Self, MaskError>
    where I: IntoIterator, I::Item: RealLocalizable {
        let points = VertexList::with_first_dimensionality(points)?;
        debug!("Created {}D point collection with {} points", points.n(), points.len());
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a collection keeps at least one point.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl RealMask for DefaultPointCollection {
    fn test<L: RealLocalizable + ?Sized>(&self, l: &L) -> bool {
        self.points.position(l).is_some()
    }

    fn boundary_type(&self) -> BoundaryType {
        BoundaryType::Closed
    }
}

impl RealInterval for DefaultPointCollection {
    fn num_dimensions(&self) -> usize { self.points.n() }
    fn real_min(&self, d: usize) -> f64 { self.points.real_min(d) }
    fn real_max(&self, d: usize) -> f64 { self.points.real_max(d) }
}

impl RealPointCollection for DefaultPointCollection {
    type Points<'a> = slice::Iter<'a, RealPoint>;

    fn points(&self) -> Self::Points<'_> {
        self.points.vertices().iter()
    }

    fn add_point<L: RealLocalizable + ?Sized>(&mut self, point: &L) -> Result<(), MaskError> {
        self.points.insert(self.points.len(), point)
    }

    /// Removing the last point of the collection fails with [MaskError::NoVertices].
    fn remove_point<L: RealLocalizable + ?Sized>(&mut self, point: &L) -> Result<bool, MaskError> {
        match self.points.position(point) {
            Some(index) => self.points.remove(index).map(|_| true),
            None => Ok(false),
        }
    }
}

/// A [RealPointCollection] fixed at construction.
///
/// The points are kept sorted lexicographically, so membership tests are a
/// binary search. [RealPointCollection::points] iterates in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImmutablePointCollection {
    n: usize,
    points: Vec<RealPoint>,
    bounds: Bounds,
}

impl ImmutablePointCollection {
    /// Creates a collection whose dimensionality is that of the first point.
    /// Duplicate points are kept.
    pub fn new<I>(points: I) -> Result<Self, MaskError>
    where I: IntoIterator, I::Item: RealLocalizable {
        let mut points = points.into_iter().peekable();
        let n = points.peek().ok_or(MaskError::NoVertices)?.num_dimensions();
        let mut points = points
            .map(|p| RealPoint::truncated(&p, n))
            .collect::<Result<Vec<_>, _>>()?;
        points.sort_by(|a, b| lexicographic(a.coordinates(), |d| b.real_position(d)));
        let bounds = math::bounds_real(&points, n)?;
        debug!("Created immutable {}D point collection with {} points", n, points.len());
        Ok(Self { n, points, bounds })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a collection keeps at least one point.
    pub fn is_empty(&self) -> bool {
        false
    }
}

fn lexicographic(a: &[f64], b: impl Fn(usize) -> f64) -> cmp::Ordering {
    a.iter()
        .enumerate()
        .map(|(d, &c)| OrderedFloat(c).cmp(&OrderedFloat(b(d))))
        .find(|o| *o != cmp::Ordering::Equal)
        .unwrap_or(cmp::Ordering::Equal)
}

impl RealMask for ImmutablePointCollection {
    fn test<L: RealLocalizable + ?Sized>(&self, l: &L) -> bool {
        if l.num_dimensions() < self.n {
            return false;
        }
        // NaN sorts equal to NaN but is never a member
        self.points.binary_search_by(|p| lexicographic(p.coordinates(), |d| l.real_position(d)))
            .map_or(false, |i| self.points[i].coincides(l))
    }

    fn boundary_type(&self) -> BoundaryType {
        BoundaryType::Closed
    }
}

impl RealInterval for ImmutablePointCollection {
    fn num_dimensions(&self) -> usize { self.n }
    fn real_min(&self, d: usize) -> f64 { self.bounds.real_min(d) }
    fn real_max(&self, d: usize) -> f64 { self.bounds.real_max(d) }
}

impl RealPointCollection for ImmutablePointCollection {
    type Points<'a> = slice::Iter<'a, RealPoint>;

    fn points(&self) -> Self::Points<'_> {
        self.points.iter()
    }
}
