// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::cmp::Ordering;

use tracing::trace;

use crate::bounds::error_bounds;
use crate::expansion::{two_diff_tail, Expansion};
use crate::{abs, Certified, Coord};

/// Returns a positive value if the coordinates `pa`, `pb`, and `pc` occur in counterclockwise order
/// (`pc` lies to the **left** of the directed line defined by coordinates `pa` and `pb`).
/// Returns a negative value if they occur in clockwise order (`pc` lies to the **right** of the directed line `pa, pb`).
/// Returns `0` if they are **collinear**.
///
/// Swapping `pa` and `pb` negates the result exactly.
pub fn orient2d<T: Into<f64>>(pa: Coord<T>, pb: Coord<T>, pc: Coord<T>) -> f64 {
    orient2d_certified(pa, pb, pc).value
}

/// [`orient2d`], together with the stage that certified the sign.
pub fn orient2d_certified<T: Into<f64>>(pa: Coord<T>, pb: Coord<T>, pc: Coord<T>) -> Certified {
    let pa = pa.to_f64();
    let pb = pb.to_f64();
    let pc = pc.to_f64();

    let detleft = (pa.x - pc.x) * (pb.y - pc.y);
    let detright = (pa.y - pc.y) * (pb.x - pc.x);
    let det = detleft - detright;

    // Opposite signs (or a zero left term) leave no room for cancellation.
    let detsum = if detleft > 0.0 {
        if detright <= 0.0 {
            return Certified::filter(det);
        }
        detleft + detright
    } else if detleft < 0.0 {
        if detright >= 0.0 {
            return Certified::filter(det);
        }
        -detleft - detright
    } else {
        return Certified::filter(det);
    };

    let errbound = error_bounds().ccwerrbound_a * detsum;
    if det >= errbound || -det >= errbound {
        return Certified::filter(det);
    }
    trace!(det, errbound, "orient2d filter inconclusive");

    // Later stages are evaluated with `pa` and `pb` in a fixed order so that
    // swapping them negates the result bit for bit.
    if pa.x.total_cmp(&pb.x).then(pa.y.total_cmp(&pb.y)) == Ordering::Greater {
        -orient2d_adapt(pb, pa, pc, detsum)
    } else {
        orient2d_adapt(pa, pb, pc, detsum)
    }
}

fn orient2d_adapt(pa: Coord<f64>, pb: Coord<f64>, pc: Coord<f64>, detsum: f64) -> Certified {
    let bounds = error_bounds();
    let acx = pa.x - pc.x;
    let bcx = pb.x - pc.x;
    let acy = pa.y - pc.y;
    let bcy = pb.y - pc.y;

    let b = Expansion::cross(acx, bcy, acy, bcx);
    let mut det = b.estimate();
    let errbound = bounds.ccwerrbound_b * detsum;
    if det >= errbound || -det >= errbound {
        return Certified::adaptive(det);
    }

    let acxtail = two_diff_tail(pa.x, pc.x, acx);
    let bcxtail = two_diff_tail(pb.x, pc.x, bcx);
    let acytail = two_diff_tail(pa.y, pc.y, acy);
    let bcytail = two_diff_tail(pb.y, pc.y, bcy);

    if acxtail == 0.0 && acytail == 0.0 && bcxtail == 0.0 && bcytail == 0.0 {
        return Certified::adaptive(det);
    }

    let errbound = bounds.ccwerrbound_c * detsum + bounds.resulterrbound * abs(det);
    det += (acx * bcytail + bcy * acxtail) - (acy * bcxtail + bcx * acytail);
    if det >= errbound || -det >= errbound {
        return Certified::adaptive(det);
    }
    trace!(det, errbound, "orient2d adaptive stage inconclusive");

    Certified::exact(orient2d_exact(pa, pb, pc))
}

/// The exact determinant
/// ```text
/// | ax ay 1 |
/// | bx by 1 |
/// | cx cy 1 |
/// ```
/// as the sum of the three exact 2x2 minors.
pub(crate) fn orient2d_exact(pa: Coord<f64>, pb: Coord<f64>, pc: Coord<f64>) -> f64 {
    let ab = Expansion::cross(pa.x, pb.y, pb.x, pa.y);
    let bc = Expansion::cross(pb.x, pc.y, pc.x, pb.y);
    let ca = Expansion::cross(pc.x, pa.y, pa.x, pc.y);

    let abbc: Expansion<8> = ab.sum(&bc);
    let det: Expansion<12> = abbc.sum(&ca);
    det.most_significant()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::BigRational;
    use num_traits::Zero;

    fn rational_sign(pa: Coord<f64>, pb: Coord<f64>, pc: Coord<f64>) -> Ordering {
        let r = |v: f64| BigRational::from_float(v).unwrap();
        let det = (r(pa.x) - r(pc.x)) * (r(pb.y) - r(pc.y)) - (r(pa.y) - r(pc.y)) * (r(pb.x) - r(pc.x));
        det.cmp(&BigRational::zero())
    }

    #[test]
    fn exact_evaluator_matches_rationals() {
        let coords = [-1.5, -0.1, 0.0, 0.3, 1.0, 7.25, 1e10];
        for &ax in &coords {
            for &by in &coords {
                for &cx in &coords {
                    let pa = Coord::new(ax, 0.7);
                    let pb = Coord::new(1.0 / 3.0, by);
                    let pc = Coord::new(cx, -2.0);
                    let det = orient2d_exact(pa, pb, pc);
                    assert_eq!(det.partial_cmp(&0.0).unwrap(), rational_sign(pa, pb, pc));
                }
            }
        }
    }

    #[test]
    fn exact_evaluator_on_collinear_points() {
        let pa = Coord::new(0.1, 0.1);
        let pb = Coord::new(0.2, 0.2);
        let pc = Coord::new(0.3, 0.3);
        assert_eq!(orient2d_exact(pa, pa, pc), 0.0);
        assert_eq!(
            orient2d_exact(pa, pb, pc).partial_cmp(&0.0).unwrap(),
            rational_sign(pa, pb, pc)
        );
    }
}
