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

/// Returns a positive value if the point `pe` lies **inside** the sphere passing through `pa`, `pb`, `pc`, and `pd`.
/// Returns a negative value if it lies **outside** the sphere.
/// Returns `0` if the five points are **cospherical**.
///
/// The points `pa`, `pb`, `pc`, and `pd` must be ordered so that they have a positive orientation
/// (as defined by [`orient3d`](crate::orient3d)), or the sign of the result will be reversed.
pub fn insphere<T: Into<f64>>(
    pa: Coord3D<T>,
    pb: Coord3D<T>,
    pc: Coord3D<T>,
    pd: Coord3D<T>,
    pe: Coord3D<T>,
) -> f64 {
    insphere_certified(pa, pb, pc, pd, pe).value
}

/// [`insphere`], together with the stage that certified the sign.
pub fn insphere_certified<T: Into<f64>>(
    pa: Coord3D<T>,
    pb: Coord3D<T>,
    pc: Coord3D<T>,
    pd: Coord3D<T>,
    pe: Coord3D<T>,
) -> Certified {
    let pa = pa.to_f64();
    let pb = pb.to_f64();
    let pc = pc.to_f64();
    let pd = pd.to_f64();
    let pe = pe.to_f64();

    let aex = pa.x - pe.x;
    let bex = pb.x - pe.x;
    let cex = pc.x - pe.x;
    let dex = pd.x - pe.x;
    let aey = pa.y - pe.y;
    let bey = pb.y - pe.y;
    let cey = pc.y - pe.y;
    let dey = pd.y - pe.y;
    let aez = pa.z - pe.z;
    let bez = pb.z - pe.z;
    let cez = pc.z - pe.z;
    let dez = pd.z - pe.z;

    let aexbey = aex * bey;
    let bexaey = bex * aey;
    let ab = aexbey - bexaey;
    let bexcey = bex * cey;
    let cexbey = cex * bey;
    let bc = bexcey - cexbey;
    let cexdey = cex * dey;
    let dexcey = dex * cey;
    let cd = cexdey - dexcey;
    let dexaey = dex * aey;
    let aexdey = aex * dey;
    let da = dexaey - aexdey;

    let aexcey = aex * cey;
    let cexaey = cex * aey;
    let ac = aexcey - cexaey;
    let bexdey = bex * dey;
    let dexbey = dex * bey;
    let bd = bexdey - dexbey;

    let abc = aez * bc - bez * ac + cez * ab;
    let bcd = bez * cd - cez * bd + dez * bc;
    let cda = cez * da + dez * ac + aez * cd;
    let dab = dez * ab + aez * bd + bez * da;

    let alift = aex * aex + aey * aey + aez * aez;
    let blift = bex * bex + bey * bey + bez * bez;
    let clift = cex * cex + cey * cey + cez * cez;
    let dlift = dex * dex + dey * dey + dez * dez;

    let det = (dlift * abc - clift * dab) + (blift * cda - alift * bcd);

    let aezplus = abs(aez);
    let bezplus = abs(bez);
    let cezplus = abs(cez);
    let dezplus = abs(dez);
    let aexbeyplus = abs(aexbey);
    let bexaeyplus = abs(bexaey);
    let bexceyplus = abs(bexcey);
    let cexbeyplus = abs(cexbey);
    let cexdeyplus = abs(cexdey);
    let dexceyplus = abs(dexcey);
    let dexaeyplus = abs(dexaey);
    let aexdeyplus = abs(aexdey);
    let aexceyplus = abs(aexcey);
    let cexaeyplus = abs(cexaey);
    let bexdeyplus = abs(bexdey);
    let dexbeyplus = abs(dexbey);
    let permanent = ((cexdeyplus + dexceyplus) * bezplus
        + (dexbeyplus + bexdeyplus) * cezplus
        + (bexceyplus + cexbeyplus) * dezplus)
        * alift
        + ((dexaeyplus + aexdeyplus) * cezplus
            + (aexceyplus + cexaeyplus) * dezplus
            + (cexdeyplus + dexceyplus) * aezplus)
            * blift
        + ((aexbeyplus + bexaeyplus) * dezplus
            + (bexdeyplus + dexbeyplus) * aezplus
            + (dexaeyplus + aexdeyplus) * bezplus)
            * clift
        + ((bexceyplus + cexbeyplus) * aezplus
            + (cexaeyplus + aexceyplus) * bezplus
            + (aexbeyplus + bexaeyplus) * cezplus)
            * dlift;
    let errbound = error_bounds().isperrbound_a * permanent;
    if det > errbound || -det > errbound {
        return Certified::filter(det);
    }
    trace!(det, errbound, "insphere filter inconclusive");

    insphere_adapt(pa, pb, pc, pd, pe, permanent)
}

fn insphere_adapt(
    pa: Coord3D<f64>,
    pb: Coord3D<f64>,
    pc: Coord3D<f64>,
    pd: Coord3D<f64>,
    pe: Coord3D<f64>,
    permanent: f64,
) -> Certified {
    let bounds = error_bounds();
    let aex = pa.x - pe.x;
    let bex = pb.x - pe.x;
    let cex = pc.x - pe.x;
    let dex = pd.x - pe.x;
    let aey = pa.y - pe.y;
    let bey = pb.y - pe.y;
    let cey = pc.y - pe.y;
    let dey = pd.y - pe.y;
    let aez = pa.z - pe.z;
    let bez = pb.z - pe.z;
    let cez = pc.z - pe.z;
    let dez = pd.z - pe.z;

    let ab = Expansion::cross(aex, bey, bex, aey);
    let bc = Expansion::cross(bex, cey, cex, bey);
    let cd = Expansion::cross(cex, dey, dex, cey);
    let da = Expansion::cross(dex, aey, aex, dey);
    let ac = Expansion::cross(aex, cey, cex, aey);
    let bd = Expansion::cross(bex, dey, dex, bey);

    let bcd = triple(&cd, bez, &bd, -cez, &bc, dez);
    let cda = triple(&da, cez, &ac, dez, &cd, aez);
    let dab = triple(&ab, dez, &bd, aez, &da, bez);
    let abc = triple(&bc, aez, &ac, -bez, &ab, cez);

    let adet = -lift::<24, 48, 96, 192, 288>(&bcd, aex, aey, aez);
    let bdet = lift::<24, 48, 96, 192, 288>(&cda, bex, bey, bez);
    let cdet = -lift::<24, 48, 96, 192, 288>(&dab, cex, cey, cez);
    let ddet = lift::<24, 48, 96, 192, 288>(&abc, dex, dey, dez);

    let abdet: Expansion<576> = adet.sum(&bdet);
    let cddet: Expansion<576> = cdet.sum(&ddet);
    let fin: Expansion<1152> = abdet.sum(&cddet);

    let mut det = fin.estimate();
    let errbound = bounds.isperrbound_b * permanent;
    if det >= errbound || -det >= errbound {
        return Certified::adaptive(det);
    }

    let aextail = two_diff_tail(pa.x, pe.x, aex);
    let aeytail = two_diff_tail(pa.y, pe.y, aey);
    let aeztail = two_diff_tail(pa.z, pe.z, aez);
    let bextail = two_diff_tail(pb.x, pe.x, bex);
    let beytail = two_diff_tail(pb.y, pe.y, bey);
    let beztail = two_diff_tail(pb.z, pe.z, bez);
    let cextail = two_diff_tail(pc.x, pe.x, cex);
    let ceytail = two_diff_tail(pc.y, pe.y, cey);
    let ceztail = two_diff_tail(pc.z, pe.z, cez);
    let dextail = two_diff_tail(pd.x, pe.x, dex);
    let deytail = two_diff_tail(pd.y, pe.y, dey);
    let deztail = two_diff_tail(pd.z, pe.z, dez);
    if [
        aextail, aeytail, aeztail, bextail, beytail, beztail, cextail, ceytail, ceztail, dextail,
        deytail, deztail,
    ]
    .iter()
    .all(|&tail| tail == 0.0)
    {
        return Certified::adaptive(det);
    }

    let ab3 = ab.most_significant();
    let bc3 = bc.most_significant();
    let cd3 = cd.most_significant();
    let da3 = da.most_significant();
    let ac3 = ac.most_significant();
    let bd3 = bd.most_significant();

    let errbound = bounds.isperrbound_c * permanent + bounds.resulterrbound * abs(det);
    let abeps = (aex * beytail + bey * aextail) - (aey * bextail + bex * aeytail);
    let bceps = (bex * ceytail + cey * bextail) - (bey * cextail + cex * beytail);
    let cdeps = (cex * deytail + dey * cextail) - (cey * dextail + dex * ceytail);
    let daeps = (dex * aeytail + aey * dextail) - (dey * aextail + aex * deytail);
    let aceps = (aex * ceytail + cey * aextail) - (aey * cextail + cex * aeytail);
    let bdeps = (bex * deytail + dey * bextail) - (bey * dextail + dex * beytail);
    det += (((bex * bex + bey * bey + bez * bez)
        * ((cez * daeps + dez * aceps + aez * cdeps)
            + (ceztail * da3 + deztail * ac3 + aeztail * cd3))
        + (dex * dex + dey * dey + dez * dez)
            * ((aez * bceps - bez * aceps + cez * abeps)
                + (aeztail * bc3 - beztail * ac3 + ceztail * ab3)))
        - ((aex * aex + aey * aey + aez * aez)
            * ((bez * cdeps - cez * bdeps + dez * bceps)
                + (beztail * cd3 - ceztail * bd3 + deztail * bc3))
            + (cex * cex + cey * cey + cez * cez)
                * ((dez * abeps + aez * bdeps + bez * daeps)
                    + (deztail * ab3 + aeztail * bd3 + beztail * da3))))
        + 2.0
            * (((bex * bextail + bey * beytail + bez * beztail)
                * (cez * da3 + dez * ac3 + aez * cd3)
                + (dex * dextail + dey * deytail + dez * deztail)
                    * (aez * bc3 - bez * ac3 + cez * ab3))
                - ((aex * aextail + aey * aeytail + aez * aeztail)
                    * (bez * cd3 - cez * bd3 + dez * bc3)
                    + (cex * cextail + cey * ceytail + cez * ceztail)
                        * (dez * ab3 + aez * bd3 + bez * da3)));
    if det >= errbound || -det >= errbound {
        return Certified::adaptive(det);
    }
    trace!(det, errbound, "insphere adaptive stage inconclusive");

    Certified::exact(insphere_exact(pa, pb, pc, pd, pe))
}

// p * pz + q * qz + r * rz, exactly.
#[inline]
fn triple(
    p: &Expansion<4>,
    pz: f64,
    q: &Expansion<4>,
    qz: f64,
    r: &Expansion<4>,
    rz: f64,
) -> Expansion<24> {
    let pq: Expansion<16> = p.scale::<8>(pz).sum(&q.scale::<8>(qz));
    r.scale::<8>(rz).sum(&pq)
}

// (p + q) - (r + s), exactly.
#[inline]
fn quad(
    p: &Expansion<24>,
    q: &Expansion<24>,
    r: &Expansion<24>,
    s: &Expansion<24>,
) -> Expansion<96> {
    let pq: Expansion<48> = p.sum(q);
    let rs: Expansion<48> = r.sum(s);
    pq.sum(&-rs)
}

// minor * (x^2 + y^2 + z^2), exactly.
#[inline]
fn lift<const N: usize, const H: usize, const Q: usize, const XY: usize, const L: usize>(
    minor: &Expansion<N>,
    x: f64,
    y: f64,
    z: f64,
) -> Expansion<L> {
    let xx = minor.scale::<H>(x).scale::<Q>(x);
    let yy = minor.scale::<H>(y).scale::<Q>(y);
    let zz = minor.scale::<H>(z).scale::<Q>(z);
    xx.sum::<Q, XY>(&yy).sum(&zz)
}

/// The exact 5x5 determinant with rows `(x, y, z, x^2 + y^2 + z^2, 1)`,
/// expanded along the lifted column into ten exact 3x3 minors.
pub(crate) fn insphere_exact(
    pa: Coord3D<f64>,
    pb: Coord3D<f64>,
    pc: Coord3D<f64>,
    pd: Coord3D<f64>,
    pe: Coord3D<f64>,
) -> f64 {
    let ab = Expansion::cross(pa.x, pb.y, pb.x, pa.y);
    let bc = Expansion::cross(pb.x, pc.y, pc.x, pb.y);
    let cd = Expansion::cross(pc.x, pd.y, pd.x, pc.y);
    let de = Expansion::cross(pd.x, pe.y, pe.x, pd.y);
    let ea = Expansion::cross(pe.x, pa.y, pa.x, pe.y);
    let ac = Expansion::cross(pa.x, pc.y, pc.x, pa.y);
    let bd = Expansion::cross(pb.x, pd.y, pd.x, pb.y);
    let ce = Expansion::cross(pc.x, pe.y, pe.x, pc.y);
    let da = Expansion::cross(pd.x, pa.y, pa.x, pd.y);
    let eb = Expansion::cross(pe.x, pb.y, pb.x, pe.y);

    let abc = triple(&bc, pa.z, &ac, -pb.z, &ab, pc.z);
    let bcd = triple(&cd, pb.z, &bd, -pc.z, &bc, pd.z);
    let cde = triple(&de, pc.z, &ce, -pd.z, &cd, pe.z);
    let dea = triple(&ea, pd.z, &da, -pe.z, &de, pa.z);
    let eab = triple(&ab, pe.z, &eb, -pa.z, &ea, pb.z);
    let abd = triple(&bd, pa.z, &da, pb.z, &ab, pd.z);
    let bce = triple(&ce, pb.z, &eb, pc.z, &bc, pe.z);
    let cda = triple(&da, pc.z, &ac, pd.z, &cd, pa.z);
    let deb = triple(&eb, pd.z, &bd, pe.z, &de, pb.z);
    let eac = triple(&ac, pe.z, &ce, pa.z, &ea, pc.z);

    let bcde = quad(&cde, &bce, &deb, &bcd);
    let cdea = quad(&dea, &cda, &eac, &cde);
    let deab = quad(&eab, &deb, &abd, &dea);
    let eabc = quad(&abc, &eac, &bce, &eab);
    let abcd = quad(&bcd, &abd, &cda, &abc);

    let adet = lift::<96, 192, 384, 768, 1152>(&bcde, pa.x, pa.y, pa.z);
    let bdet = lift::<96, 192, 384, 768, 1152>(&cdea, pb.x, pb.y, pb.z);
    let cdet = lift::<96, 192, 384, 768, 1152>(&deab, pc.x, pc.y, pc.z);
    let ddet = lift::<96, 192, 384, 768, 1152>(&eabc, pd.x, pd.y, pd.z);
    let edet = lift::<96, 192, 384, 768, 1152>(&abcd, pe.x, pe.y, pe.z);

    let abdet: Expansion<2304> = adet.sum(&bdet);
    let cddet: Expansion<2304> = cdet.sum(&ddet);
    let cdedet: Expansion<3456> = cddet.sum(&edet);
    let deter: Expansion<5760> = abdet.sum(&cdedet);
    deter.most_significant()
}
