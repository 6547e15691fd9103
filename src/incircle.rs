// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use tracing::trace;

use crate::bounds::error_bounds;
use crate::expansion::{two_diff_tail, Expansion};
use crate::{abs, Certified, Coord};

/// Returns a positive value if the coordinate `pd` lies **inside** the circle passing through `pa`, `pb`, and `pc`.
/// Returns a negative value if it lies **outside** the circle.
/// Returns `0` if the four points are **cocircular**.
///
/// The points `pa`, `pb`, and `pc` must be in counterclockwise order, or the sign of the result will be reversed.
pub fn incircle<T: Into<f64>>(pa: Coord<T>, pb: Coord<T>, pc: Coord<T>, pd: Coord<T>) -> f64 {
    incircle_certified(pa, pb, pc, pd).value
}

/// [`incircle`], together with the stage that certified the sign.
pub fn incircle_certified<T: Into<f64>>(
    pa: Coord<T>,
    pb: Coord<T>,
    pc: Coord<T>,
    pd: Coord<T>,
) -> Certified {
    let pa = pa.to_f64();
    let pb = pb.to_f64();
    let pc = pc.to_f64();
    let pd = pd.to_f64();

    let adx = pa.x - pd.x;
    let bdx = pb.x - pd.x;
    let cdx = pc.x - pd.x;
    let ady = pa.y - pd.y;
    let bdy = pb.y - pd.y;
    let cdy = pc.y - pd.y;

    let bdxcdy = bdx * cdy;
    let cdxbdy = cdx * bdy;
    let alift = adx * adx + ady * ady;

    let cdxady = cdx * ady;
    let adxcdy = adx * cdy;
    let blift = bdx * bdx + bdy * bdy;

    let adxbdy = adx * bdy;
    let bdxady = bdx * ady;
    let clift = cdx * cdx + cdy * cdy;

    let det = alift * (bdxcdy - cdxbdy) + blift * (cdxady - adxcdy) + clift * (adxbdy - bdxady);

    let permanent = (abs(bdxcdy) + abs(cdxbdy)) * alift
        + (abs(cdxady) + abs(adxcdy)) * blift
        + (abs(adxbdy) + abs(bdxady)) * clift;
    let errbound = error_bounds().iccerrbound_a * permanent;
    if det > errbound || -det > errbound {
        return Certified::filter(det);
    }
    trace!(det, errbound, "incircle filter inconclusive");

    incircle_adapt(pa, pb, pc, pd, permanent)
}

fn incircle_adapt(
    pa: Coord<f64>,
    pb: Coord<f64>,
    pc: Coord<f64>,
    pd: Coord<f64>,
    permanent: f64,
) -> Certified {
    let bounds = error_bounds();
    let adx = pa.x - pd.x;
    let bdx = pb.x - pd.x;
    let cdx = pc.x - pd.x;
    let ady = pa.y - pd.y;
    let bdy = pb.y - pd.y;
    let cdy = pc.y - pd.y;

    let bc = Expansion::cross(bdx, cdy, cdx, bdy);
    let adet = lift::<4, 8, 16, 32>(&bc, adx, ady);

    let ca = Expansion::cross(cdx, ady, adx, cdy);
    let bdet = lift::<4, 8, 16, 32>(&ca, bdx, bdy);

    let ab = Expansion::cross(adx, bdy, bdx, ady);
    let cdet = lift::<4, 8, 16, 32>(&ab, cdx, cdy);

    let abdet: Expansion<64> = adet.sum(&bdet);
    let fin: Expansion<96> = abdet.sum(&cdet);

    let mut det = fin.estimate();
    let errbound = bounds.iccerrbound_b * permanent;
    if det >= errbound || -det >= errbound {
        return Certified::adaptive(det);
    }

    let adxtail = two_diff_tail(pa.x, pd.x, adx);
    let adytail = two_diff_tail(pa.y, pd.y, ady);
    let bdxtail = two_diff_tail(pb.x, pd.x, bdx);
    let bdytail = two_diff_tail(pb.y, pd.y, bdy);
    let cdxtail = two_diff_tail(pc.x, pd.x, cdx);
    let cdytail = two_diff_tail(pc.y, pd.y, cdy);
    if adxtail == 0.0
        && bdxtail == 0.0
        && cdxtail == 0.0
        && adytail == 0.0
        && bdytail == 0.0
        && cdytail == 0.0
    {
        return Certified::adaptive(det);
    }

    let errbound = bounds.iccerrbound_c * permanent + bounds.resulterrbound * abs(det);
    det += ((adx * adx + ady * ady)
        * ((bdx * cdytail + cdy * bdxtail) - (bdy * cdxtail + cdx * bdytail))
        + 2.0 * (adx * adxtail + ady * adytail) * (bdx * cdy - bdy * cdx))
        + ((bdx * bdx + bdy * bdy)
            * ((cdx * adytail + ady * cdxtail) - (cdy * adxtail + adx * cdytail))
            + 2.0 * (bdx * bdxtail + bdy * bdytail) * (cdx * ady - cdy * adx))
        + ((cdx * cdx + cdy * cdy)
            * ((adx * bdytail + bdy * adxtail) - (ady * bdxtail + bdx * adytail))
            + 2.0 * (cdx * cdxtail + cdy * cdytail) * (adx * bdy - ady * bdx));
    if det >= errbound || -det >= errbound {
        return Certified::adaptive(det);
    }
    trace!(det, errbound, "incircle adaptive stage inconclusive");

    Certified::exact(incircle_exact(pa, pb, pc, pd))
}

// minor * (x^2 + y^2), exactly.
#[inline]
fn lift<const N: usize, const H: usize, const Q: usize, const L: usize>(
    minor: &Expansion<N>,
    x: f64,
    y: f64,
) -> Expansion<L> {
    let xx = minor.scale::<H>(x).scale::<Q>(x);
    let yy = minor.scale::<H>(y).scale::<Q>(y);
    xx.sum(&yy)
}

/// The exact 4x4 determinant with rows `(x, y, x^2 + y^2, 1)`, expanded
/// along the lifted column.
pub(crate) fn incircle_exact(
    pa: Coord<f64>,
    pb: Coord<f64>,
    pc: Coord<f64>,
    pd: Coord<f64>,
) -> f64 {
    let ab = Expansion::cross(pa.x, pb.y, pb.x, pa.y);
    let bc = Expansion::cross(pb.x, pc.y, pc.x, pb.y);
    let cd = Expansion::cross(pc.x, pd.y, pd.x, pc.y);
    let da = Expansion::cross(pd.x, pa.y, pa.x, pd.y);
    let ac = Expansion::cross(pa.x, pc.y, pc.x, pa.y);
    let bd = Expansion::cross(pb.x, pd.y, pd.x, pb.y);

    let cda: Expansion<12> = cd.sum::<4, 8>(&da).sum(&ac);
    let dab: Expansion<12> = da.sum::<4, 8>(&ab).sum(&bd);
    let abc: Expansion<12> = ab.sum::<4, 8>(&bc).sum(&-ac);
    let bcd: Expansion<12> = bc.sum::<4, 8>(&cd).sum(&-bd);

    let adet: Expansion<96> = lift::<12, 24, 48, 96>(&bcd, pa.x, pa.y);
    let bdet: Expansion<96> = -lift::<12, 24, 48, 96>(&cda, pb.x, pb.y);
    let cdet: Expansion<96> = lift::<12, 24, 48, 96>(&dab, pc.x, pc.y);
    let ddet: Expansion<96> = -lift::<12, 24, 48, 96>(&abc, pd.x, pd.y);

    let abdet: Expansion<192> = adet.sum(&bdet);
    let cddet: Expansion<192> = cdet.sum(&ddet);
    let deter: Expansion<384> = abdet.sum(&cddet);
    deter.most_significant()
}
