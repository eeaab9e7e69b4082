use crate::{BoundaryType, MaskError, RealInterval, RealMask, SuperEllipsoid};

use super::util;

#[test]
fn closed_unit_circle() {
    let e = SuperEllipsoid::closed(&[0., 0.], &[1., 1.], 2.).unwrap();
    assert!(e.test(&[1., 0.]));
    assert!(e.test(&[0., -1.]));
    assert!(e.test(&[0.5, 0.5]));
    assert!(!e.test(&[1.0001, 0.]));
    assert!(!e.test(&[0.8, 0.8]));
    assert_eq!(e.boundary_type(), BoundaryType::Closed);
}

#[test]
fn open_unit_circle() {
    let e = SuperEllipsoid::open(&[0., 0.], &[1., 1.], 2.).unwrap();
    assert!(!e.test(&[1., 0.]));
    assert!(e.test(&[0.9999, 0.]));
    assert!(!e.test(&[1.0001, 0.]));
    assert_eq!(e.boundary_type(), BoundaryType::Open);
}

#[test]
fn exponent_selects_family() {
    let corner = [0.9, 0.9];
    let diamond = SuperEllipsoid::closed(&[0., 0.], &[1., 1.], 1.).unwrap();
    let ellipse = SuperEllipsoid::closed(&[0., 0.], &[1., 1.], 2.).unwrap();
    let boxy = SuperEllipsoid::closed(&[0., 0.], &[1., 1.], 50.).unwrap();
    assert!(!diamond.test(&corner));
    assert!(!ellipse.test(&corner));
    assert!(boxy.test(&corner));

    assert!(diamond.test(&[0.5, 0.5]));
    assert!(!diamond.test(&[0.5, 0.75]));
}

#[test]
fn three_dimensional_ellipsoid() {
    let e = SuperEllipsoid::closed(&[10., 20., 30.], &[2., 4., 8.], 2.).unwrap();
    assert_eq!(e.num_dimensions(), 3);
    assert!(e.test(&[12., 20., 30.]));
    assert!(e.test(&[10., 16., 30.]));
    assert!(e.test(&[10., 20., 22.]));
    assert!(!e.test(&[12., 21., 30.]));
    // too few coordinates
    assert!(!e.test(&[10., 20.]));
    assert_eq!(util::bounds_of(&e), (vec![8., 16., 22.], vec![12., 24., 38.]));
}

#[test]
fn dimensionality_is_the_shorter_array() {
    let e = SuperEllipsoid::closed(&[1., 2., 3.], &[1., 1.], 2.).unwrap();
    assert_eq!(e.num_dimensions(), 2);
    assert_eq!(e.center(), &[1., 2.]);
    assert_eq!(e.semi_axis_lengths(), &[1., 1.]);
    assert_eq!(e.semi_axis_length(1), Ok(1.));
    assert_eq!(e.semi_axis_length(2), Err(MaskError::IndexOutOfBounds { index: 2, len: 2 }));
    assert_eq!(e.exponent(), 2.);
    assert_eq!(e.distance_powered(&[2., 2.]), 1.);
}

#[test]
fn invalid_parameters() {
    assert!(matches!(SuperEllipsoid::closed(&[0., 0.], &[1., 0.], 2.), Err(MaskError::InvalidParameter(_))));
    assert!(matches!(SuperEllipsoid::closed(&[0., 0.], &[1., -1.], 2.), Err(MaskError::InvalidParameter(_))));
    assert!(matches!(SuperEllipsoid::closed(&[0., 0.], &[1., 1.], 0.), Err(MaskError::InvalidParameter(_))));
    assert!(matches!(SuperEllipsoid::open(&[0., 0.], &[1., 1.], f64::INFINITY), Err(MaskError::InvalidParameter(_))));
}
