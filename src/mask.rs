use crate::{BoundaryType, MaskError, RealInterval, RealLocalizable, RealPoint, VertexMut};

/// A membership predicate over n-dimensional real space.
pub trait RealMask {
    /// Whether `l` is a member of the mask.
    ///
    /// Points with fewer coordinates than the mask's dimensionality are never
    /// members; extra coordinates are ignored.
    fn test<L: RealLocalizable + ?Sized>(&self, l: &L) -> bool;

    /// How points on the boundary of the mask are treated by [RealMask::test].
    fn boundary_type(&self) -> BoundaryType;
}

/// A [RealMask] with a bounding interval.
///
/// Automatically implemented for all [RealMask] + [RealInterval] types
pub trait RealMaskRealInterval: RealMask + RealInterval { }

impl<T> RealMaskRealInterval for T
where T: RealMask + RealInterval
{ }

/// A shape defined by an ordered, editable list of vertices.
///
/// All edits validate the index and the dimensionality of the supplied point
/// before changing anything, and leave the bounding interval exact when they
/// return. Points with more coordinates than the shape are truncated; points
/// with fewer are rejected.
pub trait Polyshape: RealMaskRealInterval {
    /// All vertices, in order.
    fn vertices(&self) -> &[RealPoint];

    fn num_vertices(&self) -> usize {
        self.vertices().len()
    }

    /// The vertex at `index`.
    fn vertex(&self, index: usize) -> Result<&RealPoint, MaskError> {
        let vertices = self.vertices();
        vertices.get(index).ok_or(MaskError::IndexOutOfBounds { index, len: vertices.len() })
    }

    /// Inserts `vertex` before `index`. `index` may equal [Polyshape::num_vertices] to append.
    fn add_vertex<L: RealLocalizable + ?Sized>(&mut self, index: usize, vertex: &L) -> Result<(), MaskError>;

    /// Removes and returns the vertex at `index`. The last remaining vertex cannot be removed.
    fn remove_vertex(&mut self, index: usize) -> Result<RealPoint, MaskError>;

    /// Moves the vertex at `index` to `position`.
    fn set_vertex<L: RealLocalizable + ?Sized>(&mut self, index: usize, position: &L) -> Result<(), MaskError>;

    /// Translates the vertex at `index` by `offset`.
    fn move_vertex<L: RealLocalizable + ?Sized>(&mut self, index: usize, offset: &L) -> Result<(), MaskError>;

    /// A handle for editing the vertex at `index` in place.
    fn vertex_mut(&mut self, index: usize) -> Result<VertexMut<'_, Self>, MaskError>
    where Self: Sized {
        MaskError::check_index(index, self.num_vertices())?;
        Ok(VertexMut::new(self, index))
    }
}
