use num_traits::AsPrimitive;

/// A point in n-dimensional real space.
///
/// The coordinate type of the implementations provided here only needs to
/// implement [AsPrimitive<f64>](num_traits::AsPrimitive), reexported as
/// [crate::AsPrimitive], so integer points such as `[15, 15]` are accepted
/// as well as floating point ones.
pub trait RealLocalizable {
    /// The number of coordinates of this point
    fn num_dimensions(&self) -> usize;
    /// The coordinate along axis `d`. `d` must be less than [RealLocalizable::num_dimensions].
    fn real_position(&self, d: usize) -> f64;
}

impl<T: RealLocalizable + ?Sized> RealLocalizable for &T {
    #[inline(always)]
    fn num_dimensions(&self) -> usize {
        (**self).num_dimensions()
    }

    #[inline(always)]
    fn real_position(&self, d: usize) -> f64 {
        (**self).real_position(d)
    }
}

impl<C: AsPrimitive<f64>, const N: usize> RealLocalizable for [C; N] {
    #[inline(always)]
    fn num_dimensions(&self) -> usize {
        N
    }

    #[inline(always)]
    fn real_position(&self, d: usize) -> f64 {
        self[d].as_()
    }
}

impl<C: AsPrimitive<f64>> RealLocalizable for [C] {
    #[inline(always)]
    fn num_dimensions(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn real_position(&self, d: usize) -> f64 {
        self[d].as_()
    }
}

impl<C: AsPrimitive<f64>> RealLocalizable for Vec<C> {
    #[inline(always)]
    fn num_dimensions(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn real_position(&self, d: usize) -> f64 {
        self[d].as_()
    }
}

impl<C: AsPrimitive<f64>> RealLocalizable for (C, C) {
    #[inline(always)]
    fn num_dimensions(&self) -> usize {
        2
    }

    #[inline(always)]
    fn real_position(&self, d: usize) -> f64 {
        match d {
            0 => self.0.as_(),
            1 => self.1.as_(),
            _ => panic!("Axis {} is out of bounds for a 2D point", d),
        }
    }
}

impl<C: AsPrimitive<f64>> RealLocalizable for (C, C, C) {
    #[inline(always)]
    fn num_dimensions(&self) -> usize {
        3
    }

    #[inline(always)]
    fn real_position(&self, d: usize) -> f64 {
        match d {
            0 => self.0.as_(),
            1 => self.1.as_(),
            2 => self.2.as_(),
            _ => panic!("Axis {} is out of bounds for a 3D point", d),
        }
    }
}
