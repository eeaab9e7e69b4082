//! Stateless geometric predicates shared by all shapes.
//!
//! Every predicate uses plain floating point comparisons. Inputs with
//! degenerate geometry (coincident vertices, zero-length edges) get no
//! special robustness treatment beyond what is documented per function.

use smallvec::SmallVec;

use crate::{Bounds, Coordinates, MaskError, RealLocalizable, RealPoint};

/// Where a point lies relative to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonLocation {
    /// Strictly inside.
    Interior,
    /// Exactly on one of the edges (vertices included). `parity` is the
    /// crossing-count result of the ray cast for this point, which is `true`
    /// for some edges and `false` for others.
    Edge { parity: bool },
    /// Strictly outside.
    Exterior,
}

/// Computes the bounding interval of the first `n` coordinates of `points`.
///
/// Fails if there are no points, or if any point has fewer than `n` coordinates.
pub fn bounds_real<I>(points: I, n: usize) -> Result<Bounds, MaskError>
where I: IntoIterator, I::Item: RealLocalizable {
    let mut points = points.into_iter();
    let first = points.next().ok_or(MaskError::NoVertices)?;
    MaskError::check_dimensions(n, first.num_dimensions())?;
    let mut min: Coordinates = (0..n).map(|d| first.real_position(d)).collect();
    let mut max = min.clone();
    for p in points {
        MaskError::check_dimensions(n, p.num_dimensions())?;
        for d in 0..n {
            let c = p.real_position(d);
            if c < min[d] {
                min[d] = c;
            }
            if c > max[d] {
                max[d] = c;
            }
        }
    }
    Ok(Bounds::new(min, max))
}

/// Tests whether `p` lies on the closed segment from `a` to `b`, using the
/// first `n` coordinates of each.
///
/// The offset `p - a` must be parallel to `b - a` on every pair of axes (the
/// 2D cross product, applied pairwise), and the parametric coefficient
/// `t = (p - a)·(b - a) / |b - a|²` must lie in `[0, 1]`. A zero-length
/// segment contains only its endpoint.
pub fn line_contains<L: RealLocalizable + ?Sized>(a: &[f64], b: &[f64], p: &L, n: usize) -> bool {
    let mut direction: SmallVec<[f64; 4]> = SmallVec::with_capacity(n);
    let mut offset: SmallVec<[f64; 4]> = SmallVec::with_capacity(n);
    let mut dot = 0.;
    let mut length_squared = 0.;
    for d in 0..n {
        let dir = b[d] - a[d];
        let off = p.real_position(d) - a[d];
        dot += dir * off;
        length_squared += dir * dir;
        direction.push(dir);
        offset.push(off);
    }

    if length_squared == 0. {
        return offset.iter().all(|&off| off == 0.);
    }

    // 0 <= t <= 1 without dividing
    if dot < 0. || dot > length_squared {
        return false;
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if offset[i] * direction[j] != offset[j] * direction[i] {
                return false;
            }
        }
    }
    true
}

/// Casts a horizontal ray from `p` through the implicitly closed polygon
/// `vertices` (only their first two coordinates are read).
///
/// An edge from `vj` to `vi` counts as crossed when it straddles the ray
/// (`(vi.y > p.y) != (vj.y > p.y)`) and `p.x` is strictly less than the
/// intersection's x coordinate. Points on an edge are reported separately
/// since the crossing parity is arbitrary for them.
pub fn classify_polygon<L: RealLocalizable + ?Sized>(vertices: &[RealPoint], p: &L) -> PolygonLocation {
    let len = vertices.len();
    if len == 0 {
        return PolygonLocation::Exterior;
    }

    let x = p.real_position(0);
    let y = p.real_position(1);
    let mut parity = false;
    let mut on_edge = false;

    let mut j = len - 1;
    for i in 0..len {
        let vi = vertices[i].coordinates();
        let vj = vertices[j].coordinates();
        let (xi, yi) = (vi[0], vi[1]);
        let (xj, yj) = (vj[0], vj[1]);

        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            parity = !parity;
        }
        if !on_edge && line_contains(vj, vi, p, 2) {
            on_edge = true;
        }
        j = i;
    }

    match (on_edge, parity) {
        (true, parity) => PolygonLocation::Edge { parity },
        (false, true) => PolygonLocation::Interior,
        (false, false) => PolygonLocation::Exterior,
    }
}

/// Computes `sum_d (|p[d] - center[d]| / semi_axis_lengths[d])^exponent` over
/// the first `center.len()` axes.
///
/// The superellipsoid with these parameters is the set of points where this
/// is at most `1`.
pub fn distance_powered<L: RealLocalizable + ?Sized>(center: &[f64], semi_axis_lengths: &[f64], exponent: f64, p: &L) -> f64 {
    center.iter()
        .zip(semi_axis_lengths)
        .enumerate()
        .map(|(d, (&c, &r))| ((p.real_position(d) - c).abs() / r).powf(exponent))
        .sum()
}
