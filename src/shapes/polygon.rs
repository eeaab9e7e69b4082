use std::hash;

use log::debug;

use crate::{BoundaryType, MaskError, Polyshape, RealInterval, RealLocalizable, RealMask, RealPoint, math::{self, PolygonLocation}, vertex_list::VertexList};

/// A simple polygon in the plane.
///
/// A polygon embedded in higher dimensional space uses only the first two
/// coordinates of its vertices and of tested points. How points on the edges
/// are classified depends on the [BoundaryType]:
///
/// | location | `Closed` | `Open` | `Unspecified` |
/// |----------|----------|--------|---------------|
/// | interior | yes      | yes    | yes           |
/// | edge     | yes      | no     | ray cast parity |
/// | exterior | no       | no     | no            |
///
/// The `Unspecified` polygon reports the raw result of the crossing count,
/// which includes some edges and excludes others depending on their
/// orientation relative to the horizontal ray.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    vertices: VertexList,
    boundary_type: BoundaryType,
}

impl Polygon2D {
    /// Creates a polygon with [BoundaryType::Unspecified] edges.
    pub fn new<I>(vertices: I) -> Result<Self, MaskError>
    where I: IntoIterator, I::Item: RealLocalizable {
        Self::with_boundary_type(vertices, BoundaryType::Unspecified)
    }

    /// Creates a polygon which excludes all of its edges.
    pub fn open<I>(vertices: I) -> Result<Self, MaskError>
    where I: IntoIterator, I::Item: RealLocalizable {
        Self::with_boundary_type(vertices, BoundaryType::Open)
    }

    /// Creates a polygon which includes all of its edges.
    pub fn closed<I>(vertices: I) -> Result<Self, MaskError>
    where I: IntoIterator, I::Item: RealLocalizable {
        Self::with_boundary_type(vertices, BoundaryType::Closed)
    }

    /// Creates a polygon from vertices in order, implicitly closed from the
    /// last vertex back to the first.
    ///
    /// Fails if there are no vertices or if a vertex has fewer than two coordinates.
    pub fn with_boundary_type<I>(vertices: I, boundary_type: BoundaryType) -> Result<Self, MaskError>
    where I: IntoIterator, I::Item: RealLocalizable {
        let vertices = VertexList::new(vertices, 2)?;
        debug!("Created {} polygon with {} vertices", boundary_type, vertices.len());
        Ok(Self { vertices, boundary_type })
    }

    /// Creates a polygon from separate x and y coordinate arrays. If their
    /// lengths differ, the extra coordinates of the longer one are ignored.
    pub fn from_xy(x: &[f64], y: &[f64], boundary_type: BoundaryType) -> Result<Self, MaskError> {
        Self::with_boundary_type(x.iter().zip(y).map(|(&x, &y)| [x, y]), boundary_type)
    }

    /// Classifies `l` against this polygon, independent of its boundary type.
    pub fn locate<L: RealLocalizable + ?Sized>(&self, l: &L) -> PolygonLocation {
        math::classify_polygon(self.vertices.vertices(), l)
    }
}

impl RealMask for Polygon2D {
    fn test<L: RealLocalizable + ?Sized>(&self, l: &L) -> bool {
        if l.num_dimensions() < 2 {
            return false;
        }
        match (self.locate(l), self.boundary_type) {
            (PolygonLocation::Interior, _) => true,
            (PolygonLocation::Exterior, _) => false,
            (PolygonLocation::Edge { .. }, BoundaryType::Closed) => true,
            (PolygonLocation::Edge { .. }, BoundaryType::Open) => false,
            (PolygonLocation::Edge { parity }, BoundaryType::Unspecified) => parity,
        }
    }

    fn boundary_type(&self) -> BoundaryType {
        self.boundary_type
    }
}

impl RealInterval for Polygon2D {
    fn num_dimensions(&self) -> usize { self.vertices.n() }
    fn real_min(&self, d: usize) -> f64 { self.vertices.real_min(d) }
    fn real_max(&self, d: usize) -> f64 { self.vertices.real_max(d) }
}

impl Polyshape for Polygon2D {
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

impl hash::Hash for Polygon2D {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.boundary_type.hash(state);
        self.vertices.hash_weighted(state);
    }
}
