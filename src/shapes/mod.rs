mod point_collection;
pub use point_collection::{DefaultPointCollection, ImmutablePointCollection, RealPointCollection};
mod polygon;
pub use polygon::Polygon2D;
mod polyline;
pub use polyline::Polyline;
mod super_ellipsoid;
pub use super_ellipsoid::SuperEllipsoid;
