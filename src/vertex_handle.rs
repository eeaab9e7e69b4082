use std::fmt;

use crate::{MaskError, Polyshape, RealLocalizable, RealPoint};

/// A handle on one vertex of a [Polyshape], obtained from [Polyshape::vertex_mut].
///
/// The handle is the pair of a mutable borrow of the shape and a vertex index.
/// Every edit goes through the shape's own index-based operations, so the
/// shape's bounds are exact again as soon as the edit returns.
pub struct VertexMut<'a, S: Polyshape> {
    shape: &'a mut S,
    index: usize,
}

impl<'a, S: Polyshape> VertexMut<'a, S> {
    pub(crate) fn new(shape: &'a mut S, index: usize) -> Self {
        debug_assert!(index < shape.num_vertices());
        Self { shape, index }
    }

    pub fn index(&self) -> usize { self.index }

    /// The current position of the vertex.
    pub fn position(&self) -> &RealPoint {
        &self.shape.vertices()[self.index]
    }

    /// Moves the vertex to `position`. See [Polyshape::set_vertex].
    pub fn set_position<L: RealLocalizable + ?Sized>(&mut self, position: &L) -> Result<(), MaskError> {
        self.shape.set_vertex(self.index, position)
    }

    /// Translates the vertex by `offset`. See [Polyshape::move_vertex].
    pub fn move_by<L: RealLocalizable + ?Sized>(&mut self, offset: &L) -> Result<(), MaskError> {
        self.shape.move_vertex(self.index, offset)
    }
}

impl<'a, S: Polyshape> RealLocalizable for VertexMut<'a, S> {
    #[inline(always)]
    fn num_dimensions(&self) -> usize {
        self.position().num_dimensions()
    }

    #[inline(always)]
    fn real_position(&self, d: usize) -> f64 {
        self.position().real_position(d)
    }
}

impl<'a, S: Polyshape> fmt::Debug for VertexMut<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{} {:?}", self.index, self.position())
    }
}
