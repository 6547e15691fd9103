use super::{
    fast, incircle, incircle_certified, insphere, insphere_certified, orient2d,
    orient2d_certified, orient3d, orient3d_certified, Coord, Coord3D, Stage,
};

fn c2(v: [f64; 2]) -> Coord<f64> {
    Coord::from(v)
}

fn c3(v: [f64; 3]) -> Coord3D<f64> {
    Coord3D::from(v)
}

#[test]
fn test_orient2d() {
    let from = Coord { x: -1f64, y: -1.0 };
    let to = Coord { x: 1f64, y: 1.0 };
    let p1 = Coord {
        x: ::core::f64::MIN_POSITIVE,
        y: ::core::f64::MIN_POSITIVE,
    };
    let p2 = Coord {
        x: -::core::f64::MIN_POSITIVE,
        y: -::core::f64::MIN_POSITIVE,
    };
    let p3 = Coord {
        x: -::core::f64::MIN_POSITIVE,
        y: ::core::f64::MIN_POSITIVE,
    };
    let p4 = Coord {
        x: ::core::f64::MIN_POSITIVE,
        y: -::core::f64::MIN_POSITIVE,
    };

    for &(p, sign) in &[(p1, 0.0), (p2, 0.0), (p3, 1.0), (p4, -1.0)] {
        let det = orient2d(from, to, p);
        assert!(det == sign || det.signum() == sign.signum());
    }
}

#[test]
fn test_orient2d_table() {
    let cases: [([f64; 6], f64); 11] = [
        ([0., 0., 0., 1., 1., 0.], -1.),
        ([0., 0., 1., 0., 0., 1.], 1.),
        ([0., 1e-66, 0., 1e-66, 1e-65, 0.], 0.),
        ([0., 1e-66, 0., 2e-66, 1e-65, 0.], -1.),
        ([0., 1e-30, 0., 1e-30, 1e-65, 0.], 0.),
        ([1e-30, 0., 1e-30, 0., 0., 1e-65], 0.),
        ([1e-30, 0., 0., 1e-65, 1e-30, 0.], 0.),
        (
            [
                24.00000000000005,
                24.000000000000053,
                7.3000000000000194,
                7.3000000000000167,
                0.50000000000001621,
                0.5,
            ],
            1.,
        ),
        (
            [
                27.643564356435643,
                -21.881188118811881,
                83.366336633663366,
                15.544554455445542,
                73.415841584158414,
                8.8613861386138595,
            ],
            1.,
        ),
        (
            [
                -233.33333333333334,
                50.93333333333333,
                200.0,
                49.200000000000003,
                166.66666666666669,
                49.333333333333336,
            ],
            1.,
        ),
        (
            [
                0.50000000000001243,
                0.50000000000000189,
                24.000000000000068,
                24.000000000000071,
                17.300000000000001,
                17.300000000000001,
            ],
            1.,
        ),
    ];
    for (v, sign) in cases {
        let (a, b, c) = (c2([v[0], v[1]]), c2([v[2], v[3]]), c2([v[4], v[5]]));
        let det = orient2d(a, b, c);
        assert!(
            det == sign || (det != 0.0 && det.signum() == sign.signum()),
            "{a:?} {b:?} {c:?}: got {det}, expected sign {sign}"
        );
        assert_eq!(orient2d(b, a, c), -det);
    }
}

#[test]
fn test_orient2d_literal_scenario() {
    let a = Coord::new(0.0, 0.0);
    let b = Coord::new(1.0, 0.0);
    let c = Coord::new(0.0, 1.0);
    assert!(orient2d(a, b, c) > 0.0);
    assert!(orient2d(a, c, b) < 0.0);
    assert_eq!(orient2d(a, a, c), 0.0);
}

#[test]
fn test_orient2d_f32() {
    let a = Coord { x: 0.1f32, y: 0.1 };
    let b = Coord { x: 0.2f32, y: 0.2 };
    let c = Coord { x: 0.3f32, y: 0.3 };
    let wide = orient2d(
        Coord::new(f64::from(0.1f32), f64::from(0.1f32)),
        Coord::new(f64::from(0.2f32), f64::from(0.2f32)),
        Coord::new(f64::from(0.3f32), f64::from(0.3f32)),
    );
    assert_eq!(orient2d(a, b, c), wide);
}

#[test]
fn test_orient3d() {
    // plane
    let pa = Coord3D {
        x: 1.,
        y: 0.,
        z: 1.,
    };
    let pb = Coord3D {
        x: -1.,
        y: 0.,
        z: -1.,
    };
    let pc = Coord3D {
        x: -1.,
        y: 0.,
        z: 0.,
    };

    // above plane - negative value expected
    let p1 = Coord3D {
        x: ::core::f64::MIN_POSITIVE,
        y: ::core::f64::MIN_POSITIVE,
        z: ::core::f64::MIN_POSITIVE,
    };
    // below plane - positive value expected
    let p2 = Coord3D {
        x: -::core::f64::MIN_POSITIVE,
        y: -::core::f64::MIN_POSITIVE,
        z: -::core::f64::MIN_POSITIVE,
    };
    // coplanar - zero expected
    let p3 = Coord3D {
        x: 0.,
        y: 0.,
        z: 0.,
    };

    for &(p, sign) in &[(p1, -1.0), (p2, 1.0), (p3, 0.0)] {
        let det = orient3d(pa, pb, pc, p);
        assert!(det == sign || det.signum() == sign.signum());
    }
}

#[test]
fn test_orient3d_table() {
    let a = c3([0., 0., 0.]);
    let b = c3([0., 1., 0.]);
    let c = c3([1., 0., 0.]);
    let d = c3([1., 1., 1.]);
    assert!(orient3d(a, b, c, d) > 0.0);
    assert!(orient3d(a, c, b, d) < 0.0);
    assert_eq!(orient3d(a, a, c, d), 0.0);
}

#[test]
fn test_incircle() {
    let from = Coord { x: -1f64, y: -1.0 };
    let to = Coord { x: 1f64, y: 1.0 };
    let p_left = Coord {
        x: -::core::f64::MIN_POSITIVE,
        y: ::core::f64::MIN_POSITIVE,
    };
    let p_right = Coord {
        x: ::core::f64::MIN_POSITIVE,
        y: -::core::f64::MIN_POSITIVE,
    };
    let p_query = Coord { x: 2.0, y: 2.0 };

    assert!(incircle(from, p_left, to, p_query) > 0.0);
    assert!(incircle(from, to, p_right, p_query) > 0.0);
}

#[test]
fn test_incircle_literal_scenario() {
    let a = Coord::new(0.0, 0.0);
    let b = Coord::new(1.0, 0.0);
    let c = Coord::new(0.0, 1.0);
    let d = Coord::new(0.5, 0.5);
    assert!(incircle(a, b, c, d) > 0.0);
    assert!(incircle(a, c, b, d) < 0.0);
    assert!(incircle(a, b, c, Coord::new(1.0, 1.0)) == 0.0);
    assert!(incircle(a, b, c, Coord::new(1.0, 1.5)) < 0.0);
}

#[test]
fn test_insphere() {
    let pa = Coord3D {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    let pb = Coord3D {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    let pc = Coord3D {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };
    let pd = Coord3D {
        x: 0.0,
        y: -1.0,
        z: 0.0,
    };

    // point outside sphere
    let pe1 = Coord3D {
        x: -1.01,
        y: 0.,
        z: 0.,
    };
    // point inside sphere
    let pe2 = Coord3D {
        x: 0.,
        y: 0.,
        z: 0.99,
    };
    // cospherical point
    let pe3 = Coord3D {
        x: 0.,
        y: 0.,
        z: -1.,
    };

    assert!(insphere(pa, pb, pc, pd, pe1) < 0.0);
    assert!(insphere(pa, pb, pc, pd, pe2) > 0.0);
    assert!(insphere(pa, pb, pc, pd, pe3) == 0.0);
}

#[test]
fn test_insphere_literal_scenario() {
    let o = c3([0., 0., 0.]);
    let x = c3([1., 0., 0.]);
    let y = c3([0., 1., 0.]);
    let z = c3([0., 0., 1.]);
    let center = c3([0.5, 0.5, 0.5]);

    // o, y, x, z is positively oriented, o, x, y, z is not.
    assert!(orient3d(o, y, x, z) > 0.0);
    assert!(orient3d(o, x, y, z) < 0.0);
    assert!(insphere(o, y, x, z, center) > 0.0);
    assert!(insphere(o, x, y, z, center) < 0.0);
    assert_eq!(insphere(o, y, x, z, c3([1., 1., 1.])), 0.0);
}

#[test]
fn test_issue48_a() {
    let pa = Coord {
        x: 2.1045541600524288e-15,
        y: -1.0000000000000016,
    };
    let pb = Coord {
        x: 1.000000000000005,
        y: -3.350874324301223e-16,
    };
    let pc = Coord {
        x: 7.553997323229233e-15,
        y: 0.9999999999999958,
    };
    let pd = Coord {
        x: -0.9999999999999922,
        y: -7.073397829693697e-15,
    };
    assert!(incircle(pa, pb, pc, pd) < 0.0);
    assert!(incircle(pb, pa, pc, pd) > 0.0);
}

#[test]
fn test_issue48_b() {
    let pa = Coord {
        x: 9.128561612013288e-15,
        y: -1.0000000000000029,
    };
    let pb = Coord {
        x: 1.0000000000000044,
        y: -5.451395142523081e-15,
    };
    let pc = Coord {
        x: 3.851214418148064e-15,
        y: 0.9999999999999961,
    };
    let pd = Coord {
        x: -0.9999999999999946,
        y: -6.6797960341085084e-15,
    };
    assert!(incircle(pa, pb, pc, pd) > 0.0);
}

#[test]
fn test_stage_filter() {
    let a = Coord::new(0.0, 0.0);
    let b = Coord::new(1.0, 0.0);
    let c = Coord::new(0.0, 1.0);
    assert_eq!(orient2d_certified(a, b, c).stage, Stage::Filter);
    assert_eq!(
        incircle_certified(a, b, c, Coord::new(0.5, 0.5)).stage,
        Stage::Filter
    );

    let o = c3([0., 0., 0.]);
    let x = c3([1., 0., 0.]);
    let y = c3([0., 1., 0.]);
    let z = c3([0., 0., 1.]);
    assert_eq!(orient3d_certified(o, y, x, z).stage, Stage::Filter);
    assert_eq!(
        insphere_certified(o, y, x, z, c3([0.5, 0.5, 0.5])).stage,
        Stage::Filter
    );
}

#[test]
fn test_stage_adaptive_on_exact_degeneracy() {
    // Integer differences are exact, so the adaptive estimate is already exact.
    let r = orient2d_certified(Coord::new(0., 0.), Coord::new(1., 1.), Coord::new(2., 2.));
    assert_eq!((r.value, r.stage), (0.0, Stage::Adaptive));

    let r = orient3d_certified(
        c3([0., 0., 0.]),
        c3([1., 0., 0.]),
        c3([0., 1., 0.]),
        c3([3., 5., 0.]),
    );
    assert_eq!((r.value, r.stage), (0.0, Stage::Adaptive));

    let r = incircle_certified(
        Coord::new(1., 0.),
        Coord::new(0., 1.),
        Coord::new(-1., 0.),
        Coord::new(0., -1.),
    );
    assert_eq!((r.value, r.stage), (0.0, Stage::Adaptive));

    let r = insphere_certified(
        c3([1., 0., 0.]),
        c3([0., 1., 0.]),
        c3([0., 0., 1.]),
        c3([0., -1., 0.]),
        c3([0., 0., -1.]),
    );
    assert_eq!((r.value, r.stage), (0.0, Stage::Adaptive));
}

#[test]
fn test_stage_adaptive_correction() {
    let a = Coord::new(12.0, 12.0);
    let b = Coord::new(24.0, 24.0);
    let c = Coord::new(0.5, 0.5 + f64::EPSILON / 2.0);
    assert_eq!(fast::orient2d(a, b, c), 0.0);

    let r = orient2d_certified(a, b, c);
    assert!(r.value > 0.0);
    assert_eq!(r.stage, Stage::Adaptive);

    let r = orient2d_certified(b, a, c);
    assert!(r.value < 0.0);
    assert_eq!(r.stage, Stage::Adaptive);
}

#[test]
fn test_stage_exact() {
    let from = Coord::new(-1.0, -1.0);
    let to = Coord::new(1.0, 1.0);
    let on = Coord::new(f64::MIN_POSITIVE, f64::MIN_POSITIVE);
    let left = Coord::new(-f64::MIN_POSITIVE, f64::MIN_POSITIVE);

    let r = orient2d_certified(from, to, on);
    assert_eq!((r.value, r.stage), (0.0, Stage::Exact));

    let r = orient2d_certified(from, to, left);
    assert!(r.value > 0.0);
    assert_eq!(r.stage, Stage::Exact);

    let r = orient2d_certified(to, from, left);
    assert!(r.value < 0.0);
    assert_eq!(r.stage, Stage::Exact);
}

#[test]
fn test_negated_certificate_keeps_stage() {
    let r = orient2d_certified(Coord::new(0., 0.), Coord::new(1., 0.), Coord::new(0., 1.));
    let n = -r;
    assert_eq!(n.value, -r.value);
    assert_eq!(n.stage, r.stage);
}

#[test]
fn test_determinism() {
    let a = c3([0.1, 0.2, 0.3]);
    let b = c3([0.4, 0.5, 0.6]);
    let c = c3([0.7, 0.8, 0.9]);
    let d = c3([0.3, 0.1, 0.2]);
    let e = c3([1.0 / 3.0, 1.0 / 7.0, 0.5]);
    let first = insphere_certified(a, b, c, d, e);
    for _ in 0..8 {
        assert_eq!(insphere_certified(a, b, c, d, e), first);
        assert_eq!(
            orient3d(a, b, c, d).to_bits(),
            orient3d(a, b, c, d).to_bits()
        );
    }
}
