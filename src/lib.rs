//! Real-valued geometric masks: membership predicates over continuous
//! n-dimensional space, used to describe regions of interest in image data.
//!
//! Every shape answers [RealMask::test] for arbitrary points and exposes an
//! exact axis-aligned bounding interval through [RealInterval]. Whether points
//! on a shape's boundary are members is governed by its [BoundaryType].
//!
//! Shapes defined by vertices ([Polygon2D], [Polyline]) can be edited in place
//! through [Polyshape]; their bounds are recomputed before every edit returns.

mod boundary;
mod bounds;
mod errors;
mod inputs;
mod mask;
pub mod math;
mod shapes;
mod vertex_handle;
mod vertex_list;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use boundary::BoundaryType;
pub use bounds::{Bounds, RealInterval};
pub use errors::MaskError;
pub use mask::{Polyshape, RealMask, RealMaskRealInterval};
pub use math::PolygonLocation;
pub use vertex_handle::VertexMut;

pub use inputs::*;
pub use shapes::*;

pub use num_traits::AsPrimitive;
