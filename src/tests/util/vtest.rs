use crate::RealLocalizable;

/// A caller-side point type, to check that shapes accept any [RealLocalizable].
#[derive(Default, Clone, PartialEq, PartialOrd)]
pub struct VTest {
    coords: Vec<f32>,
}

impl VTest {
    pub fn new(coords: &[f32]) -> Self { VTest { coords: coords.to_vec() } }
}

impl std::fmt::Debug for VTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.coords)
    }
}

impl RealLocalizable for VTest {
    #[inline(always)]
    fn num_dimensions(&self) -> usize { self.coords.len() }

    #[inline(always)]
    fn real_position(&self, d: usize) -> f64 { self.coords[d] as f64 }
}

impl From<(f32, f32)> for VTest {
    fn from((x, y): (f32, f32)) -> VTest {
        VTest::new(&[x, y])
    }
}

impl From<(f32, f32, f32)> for VTest {
    fn from((x, y, z): (f32, f32, f32)) -> VTest {
        VTest::new(&[x, y, z])
    }
}
