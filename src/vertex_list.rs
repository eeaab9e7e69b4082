use std::hash;

use log::trace;
use ordered_float::OrderedFloat;

use crate::{Bounds, MaskError, RealInterval, RealLocalizable, RealPoint, math};

/// An ordered list of `n`-dimensional vertices together with their exact
/// bounding interval.
///
/// Every mutation validates its input before touching the list, then rescans
/// all vertices to rebuild the bounds. The list is never empty.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VertexList {
    n: usize,
    vertices: Vec<RealPoint>,
    bounds: Bounds,
}

impl VertexList {
    /// Copies the first `n` coordinates of every point.
    pub fn new<I>(points: I, n: usize) -> Result<Self, MaskError>
    where I: IntoIterator, I::Item: RealLocalizable {
        let vertices = points.into_iter()
            .map(|p| RealPoint::truncated(&p, n))
            .collect::<Result<Vec<_>, _>>()?;
        let bounds = math::bounds_real(&vertices, n)?;
        Ok(Self { n, vertices, bounds })
    }

    /// Like [VertexList::new], with `n` taken from the first point.
    pub fn with_first_dimensionality<I>(points: I) -> Result<Self, MaskError>
    where I: IntoIterator, I::Item: RealLocalizable {
        let mut points = points.into_iter().peekable();
        let n = points.peek().ok_or(MaskError::NoVertices)?.num_dimensions();
        Self::new(points, n)
    }

    pub fn n(&self) -> usize { self.n }
    pub fn len(&self) -> usize { self.vertices.len() }
    pub fn vertices(&self) -> &[RealPoint] { &self.vertices }
    pub fn bounds(&self) -> &Bounds { &self.bounds }

    pub fn get(&self, index: usize) -> Result<&RealPoint, MaskError> {
        self.vertices.get(index).ok_or(MaskError::IndexOutOfBounds { index, len: self.vertices.len() })
    }

    pub fn position<L: RealLocalizable + ?Sized>(&self, l: &L) -> Option<usize> {
        self.vertices.iter().position(|v| v.coincides(l))
    }

    /// Inserts a vertex before `index`; `index == len` appends.
    pub fn insert<L: RealLocalizable + ?Sized>(&mut self, index: usize, vertex: &L) -> Result<(), MaskError> {
        MaskError::check_index(index, self.vertices.len() + 1)?;
        let vertex = RealPoint::truncated(vertex, self.n)?;
        self.vertices.insert(index, vertex);
        self.update_bounds();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<RealPoint, MaskError> {
        MaskError::check_index(index, self.vertices.len())?;
        if self.vertices.len() == 1 {
            return Err(MaskError::NoVertices);
        }
        let vertex = self.vertices.remove(index);
        self.update_bounds();
        Ok(vertex)
    }

    pub fn set<L: RealLocalizable + ?Sized>(&mut self, index: usize, position: &L) -> Result<(), MaskError> {
        MaskError::check_index(index, self.vertices.len())?;
        self.vertices[index].set_position(position)?;
        self.update_bounds();
        Ok(())
    }

    pub fn translate<L: RealLocalizable + ?Sized>(&mut self, index: usize, offset: &L) -> Result<(), MaskError> {
        MaskError::check_index(index, self.vertices.len())?;
        self.vertices[index].move_by(offset)?;
        self.update_bounds();
        Ok(())
    }

    /// Feeds the dimensionality, the vertex count and the weighted sum
    /// `sum_i (11 + 3i) * |v_i|²` into `state`. Consistent with `==`.
    pub fn hash_weighted<H: hash::Hasher>(&self, state: &mut H) {
        use hash::Hash;

        let mut weight = 11.;
        let mut sum = 0.;
        for v in self.vertices.iter() {
            sum += weight * v.coordinates().iter().map(|c| c * c).sum::<f64>();
            weight += 3.;
        }
        self.n.hash(state);
        self.vertices.len().hash(state);
        OrderedFloat(sum).hash(state);
    }

    fn update_bounds(&mut self) {
        let (first, rest) = match self.vertices.split_first() {
            Some(split) => split,
            None => return,
        };
        let mut min = first.coordinates().iter().copied().collect::<crate::Coordinates>();
        let mut max = min.clone();
        for v in rest {
            for (d, &c) in v.coordinates().iter().enumerate() {
                if c < min[d] {
                    min[d] = c;
                }
                if c > max[d] {
                    max[d] = c;
                }
            }
        }
        self.bounds = Bounds::new(min, max);
        trace!("Recomputed bounds of {} vertices: {:?}", self.vertices.len(), self.bounds);
    }
}

impl RealInterval for VertexList {
    #[inline(always)]
    fn num_dimensions(&self) -> usize {
        self.n
    }

    #[inline(always)]
    fn real_min(&self, d: usize) -> f64 {
        self.bounds.real_min(d)
    }

    #[inline(always)]
    fn real_max(&self, d: usize) -> f64 {
        self.bounds.real_max(d)
    }
}
