use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Polygon2D, Polyline, Polyshape, RealInterval};

use super::util::{self, polygon};

fn random_point<R: Rng>(rng: &mut R, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(-100.0..100.0)).collect()
}

/// Applies a random edit (insert, remove, set or move) and checks the bounds afterwards.
fn random_edits<S: Polyshape, R: Rng>(shape: &mut S, rng: &mut R, n: usize, steps: usize) {
    for step in 0..steps {
        let len = shape.num_vertices();
        match rng.gen_range(0..4) {
            0 => shape.add_vertex(rng.gen_range(0..=len), &random_point(rng, n)).unwrap(),
            1 if len > 1 => { shape.remove_vertex(rng.gen_range(0..len)).unwrap(); }
            2 => shape.set_vertex(rng.gen_range(0..len), &random_point(rng, n)).unwrap(),
            _ => shape.vertex_mut(rng.gen_range(0..len)).unwrap().move_by(&random_point(rng, n)).unwrap(),
        }
        assert!(util::bounds_contain(&*shape, shape.vertices()), "step {}", step);

        // the bounds are tight: every face of the box touches a vertex
        for d in 0..n {
            assert!(shape.vertices().iter().any(|v| v.coordinates()[d] == shape.real_min(d)), "step {}", step);
            assert!(shape.vertices().iter().any(|v| v.coordinates()[d] == shape.real_max(d)), "step {}", step);
        }
    }
}

#[test]
fn polygon_bounds_stay_exact() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for points in polygon::all() {
        let mut p = Polygon2D::new(&points).unwrap();
        random_edits(&mut p, &mut rng, 2, 500);
    }
}

#[test]
fn polyline_bounds_stay_exact() {
    let mut rng = StdRng::seed_from_u64(0xb0b);
    for n in 1..=5 {
        let start: Vec<Vec<f64>> = (0..4).map(|_| random_point(&mut rng, n)).collect();
        let mut line = Polyline::new(&start).unwrap();
        random_edits(&mut line, &mut rng, n, 300);
    }
}

#[test]
fn remove_then_readd_restores_bounds() {
    let mut p = Polygon2D::closed(&polygon::star()).unwrap();
    let before = util::bounds_of(&p);
    for i in 0..p.num_vertices() {
        let v = p.remove_vertex(i).unwrap();
        p.add_vertex(i, &v).unwrap();
        assert_eq!(util::bounds_of(&p), before);
    }
    assert_eq!(p, Polygon2D::closed(&polygon::star()).unwrap());
}

#[test]
fn extra_coordinates_are_truncated_on_edit() {
    let mut p = Polygon2D::new(&polygon::house()).unwrap();
    p.vertex_mut(0).unwrap().set_position(&[1., 2., 3.]).unwrap();
    assert_eq!(p.vertex(0).unwrap().coordinates(), &[1., 2.]);

    p.add_vertex(3, &[1., 2., 3.]).unwrap();
    assert_eq!(p.vertex(3).unwrap().coordinates(), &[1., 2.]);
    assert_eq!(p.num_dimensions(), 2);
}
