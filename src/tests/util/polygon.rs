/// A pentagon with a pointed top: the vertices are `(15, 15)`, `(20, 20)`,
/// `(25, 15)`, `(25, 10)`, `(15, 10)`.
pub fn house() -> Vec<[f64; 2]> {
    vec![[15., 15.], [20., 20.], [25., 15.], [25., 10.], [15., 10.]]
}

/// One point on each edge of [house], in edge order starting with the edge
/// from vertex 0 to vertex 1.
pub fn house_edges() -> Vec<[f64; 2]> {
    vec![[17., 17.], [22., 18.], [25., 11.], [19., 10.], [15., 13.]]
}

pub const HOUSE_INSIDE: [f64; 2] = [20., 14.];
pub const HOUSE_OUTSIDE: [f64; 2] = [26., 30.];

pub fn square() -> Vec<[f64; 2]> {
    vec![[0., 0.], [10., 0.], [10., 10.], [0., 10.]]
}

pub fn star() -> Vec<[f64; 2]> {
    vec![
        [1.0, 0.0],
        [2.0, 2.0],
        [0.0, 1.0],
        [-2.0, 2.0],
        [-1.0, 0.0],
        [-2.0, -2.0],
        [0.0, -1.0],
        [2.0, -2.0],
    ]
}

pub fn regular(n: usize, radius: f64) -> Vec<[f64; 2]> {
    (0..n).map(|i| {
        let theta = std::f64::consts::PI * 2. * (i as f64) / (n as f64);
        let (y, x) = theta.sin_cos();
        [x * radius, y * radius]
    }).collect()
}

pub fn all() -> Vec<Vec<[f64; 2]>> {
    vec![house(), square(), star()]
}
