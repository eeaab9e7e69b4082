use std::hash;

use log::debug;

use crate::{BoundaryType, MaskError, Polyshape, RealInterval, RealLocalizable, RealMask, RealPoint, math, vertex_list::VertexList};

/// An open chain of line segments in n-dimensional space.
///
/// A polyline has no interior: a point is a member exactly when it lies on
/// one of the segments between consecutive vertices. There is no segment from
/// the last vertex back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    vertices: VertexList,
}

impl Polyline {
    /// Creates a polyline through `vertices` in order.
    ///
    /// The dimensionality is that of the first vertex. Later vertices with
    /// more coordinates are truncated; vertices with fewer are rejected.
    pub fn new<I>(vertices: I) -> Result<Self, MaskError>
    where I: IntoIterator, I::Item: RealLocalizable {
        let vertices = VertexList::with_first_dimensionality(vertices)?;
        debug!("Created {}D polyline with {} vertices", vertices.n(), vertices.len());
        Ok(Self { vertices })
    }

    /// Iterates over the segments as pairs of consecutive vertices.
    pub fn segments(&self) -> impl Iterator<Item = (&RealPoint, &RealPoint)> + '_ {
        self.vertices.vertices().windows(2).map(|w| (&w[0], &w[1]))
    }
}

impl RealMask for Polyline {
    fn test<L: RealLocalizable + ?Sized>(&self, l: &L) -> bool {
        let n = self.vertices.n();
        if l.num_dimensions() < n {
            return false;
        }
        // a single vertex has no segments, so nothing is a member
        self.segments().any(|(a, b)| math::line_contains(a.coordinates(), b.coordinates(), l, n))
    }

    /// Always [BoundaryType::Closed]: every member point is a boundary point.
    fn boundary_type(&self) -> BoundaryType {
        BoundaryType::Closed
    }
}

impl RealInterval for Polyline {
    fn num_dimensions(&self) -> usize { self.vertices.n() }
    fn real_min(&self, d: usize) -> f64 { self.vertices.real_min(d) }
    fn real_max(&self, d: usize) -> f64 { self.vertices.real_max(d) }
}

impl Polyshape for Polyline {
    fn vertices(&self) -> &[RealPoint] {
        self.vertices.vertices()
    }

    fn add_vertex<L: RealLocalizable + ?Sized>(&mut self, index: usize, vertex: &L) -> Result<(), MaskError> {
        self.vertices.insert(index, vertex)
    }

    fn remove_vertex(&mut self, index: usize) -> Result<RealPoint, MaskError> {
        self.vertices.remove(index)
    }

    fn set_vertex<L: RealLocalizable + ?Sized>(&mut self, index: usize, position: &L) -> Result<(), MaskError> {
        self.vertices.set(index, position)
    }

    fn move_vertex<L: RealLocalizable + ?Sized>(&mut self, index: usize, offset: &L) -> Result<(), MaskError> {
        self.vertices.translate(index, offset)
    }
}

impl hash::Hash for Polyline {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.vertices.hash_weighted(state);
    }
}
