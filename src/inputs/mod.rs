mod localizable;
pub use localizable::RealLocalizable;
mod real_point;
pub use real_point::{Coordinates, RealPoint};
