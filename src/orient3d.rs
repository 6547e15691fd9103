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
use crate::{abs, Certified, Coord3D};

/// Returns a positive value if the point `pd` lies below the plane passing through `pa`, `pb`, and `pc`
/// ("below" is defined so that `pa`, `pb`, and `pc` appear in counterclockwise order when viewed from above the plane).
/// Returns a negative value if `pd` lies above the plane.
/// Returns `0` if they are **coplanar**.
pub fn orient3d<T: Into<f64>>(
    pa: Coord3D<T>,
    pb: Coord3D<T>,
    pc: Coord3D<T>,
    pd: Coord3D<T>,
) -> f64 {
    orient3d_certified(pa, pb, pc, pd).value
}

/// [`orient3d`], together with the stage that certified the sign.
pub fn orient3d_certified<T: Into<f64>>(
    pa: Coord3D<T>,
    pb: Coord3D<T>,
    pc: Coord3D<T>,
    pd: Coord3D<T>,
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
    let adz = pa.z - pd.z;
    let bdz = pb.z - pd.z;
    let cdz = pc.z - pd.z;

    let bdxcdy = bdx * cdy;
    let cdxbdy = cdx * bdy;

    let cdxady = cdx * ady;
    let adxcdy = adx * cdy;

    let adxbdy = adx * bdy;
    let bdxady = bdx * ady;

    let det = adz * (bdxcdy - cdxbdy) + bdz * (cdxady - adxcdy) + cdz * (adxbdy - bdxady);

    let permanent = (abs(bdxcdy) + abs(cdxbdy)) * abs(adz)
        + (abs(cdxady) + abs(adxcdy)) * abs(bdz)
        + (abs(adxbdy) + abs(bdxady)) * abs(cdz);

    let errbound = error_bounds().o3derrbound_a * permanent;
    if det > errbound || -det > errbound {
        return Certified::filter(det);
    }
    trace!(det, errbound, "orient3d filter inconclusive");

    orient3d_adapt(pa, pb, pc, pd, permanent)
}

fn orient3d_adapt(
    pa: Coord3D<f64>,
    pb: Coord3D<f64>,
    pc: Coord3D<f64>,
    pd: Coord3D<f64>,
    permanent: f64,
) -> Certified {
    let bounds = error_bounds();
    let adx = pa.x - pd.x;
    let bdx = pb.x - pd.x;
    let cdx = pc.x - pd.x;
    let ady = pa.y - pd.y;
    let bdy = pb.y - pd.y;
    let cdy = pc.y - pd.y;
    let adz = pa.z - pd.z;
    let bdz = pb.z - pd.z;
    let cdz = pc.z - pd.z;

    let bc = Expansion::cross(bdx, cdy, cdx, bdy);
    let adet: Expansion<8> = bc.scale(adz);

    let ca = Expansion::cross(cdx, ady, adx, cdy);
    let bdet: Expansion<8> = ca.scale(bdz);

    let ab = Expansion::cross(adx, bdy, bdx, ady);
    let cdet: Expansion<8> = ab.scale(cdz);

    let abdet: Expansion<16> = adet.sum(&bdet);
    let fin: Expansion<24> = abdet.sum(&cdet);

    let mut det = fin.estimate();
    let errbound = bounds.o3derrbound_b * permanent;
    if det >= errbound || -det >= errbound {
        return Certified::adaptive(det);
    }

    let adxtail = two_diff_tail(pa.x, pd.x, adx);
    let bdxtail = two_diff_tail(pb.x, pd.x, bdx);
    let cdxtail = two_diff_tail(pc.x, pd.x, cdx);
    let adytail = two_diff_tail(pa.y, pd.y, ady);
    let bdytail = two_diff_tail(pb.y, pd.y, bdy);
    let cdytail = two_diff_tail(pc.y, pd.y, cdy);
    let adztail = two_diff_tail(pa.z, pd.z, adz);
    let bdztail = two_diff_tail(pb.z, pd.z, bdz);
    let cdztail = two_diff_tail(pc.z, pd.z, cdz);

    if [
        adxtail, bdxtail, cdxtail, adytail, bdytail, cdytail, adztail, bdztail, cdztail,
    ]
    .iter()
    .all(|&tail| tail == 0.0)
    {
        return Certified::adaptive(det);
    }

    let errbound = bounds.o3derrbound_c * permanent + bounds.resulterrbound * abs(det);
    det += (adz * ((bdx * cdytail + cdy * bdxtail) - (bdy * cdxtail + cdx * bdytail))
        + adztail * (bdx * cdy - bdy * cdx))
        + (bdz * ((cdx * adytail + ady * cdxtail) - (cdy * adxtail + adx * cdytail))
            + bdztail * (cdx * ady - cdy * adx))
        + (cdz * ((adx * bdytail + bdy * adxtail) - (ady * bdxtail + bdx * adytail))
            + cdztail * (adx * bdy - ady * bdx));
    if det >= errbound || -det >= errbound {
        return Certified::adaptive(det);
    }
    trace!(det, errbound, "orient3d adaptive stage inconclusive");

    Certified::exact(orient3d_exact(pa, pb, pc, pd))
}

/// The exact 4x4 determinant with rows `(x, y, z, 1)`, expanded along the `z`
/// column into exact 3x3 minors of the `xy` projections.
pub(crate) fn orient3d_exact(
    pa: Coord3D<f64>,
    pb: Coord3D<f64>,
    pc: Coord3D<f64>,
    pd: Coord3D<f64>,
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

    let adet: Expansion<24> = bcd.scale(pa.z);
    let bdet: Expansion<24> = cda.scale(-pb.z);
    let cdet: Expansion<24> = dab.scale(pc.z);
    let ddet: Expansion<24> = abc.scale(-pd.z);

    let abdet: Expansion<48> = adet.sum(&bdet);
    let cddet: Expansion<48> = cdet.sum(&ddet);
    let deter: Expansion<96> = abdet.sum(&cddet);
    deter.most_significant()
}
