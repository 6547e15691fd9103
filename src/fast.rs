// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Plain floating-point evaluation of the predicate determinants.
//!
//! These functions have no error bound and no exact fallback, so their sign
//! can be wrong, zero, or inverted for nearly degenerate input. They exist for
//! comparison and benchmarking. Sign conventions match the robust predicates.

use crate::{Coord, Coord3D};

/// Approximate [`orient2d`](crate::orient2d).
pub fn orient2d<T: Into<f64>>(pa: Coord<T>, pb: Coord<T>, pc: Coord<T>) -> f64 {
    let pa = pa.to_f64();
    let pb = pb.to_f64();
    let pc = pc.to_f64();

    let acx = pa.x - pc.x;
    let bcx = pb.x - pc.x;
    let acy = pa.y - pc.y;
    let bcy = pb.y - pc.y;
    acx * bcy - acy * bcx
}

/// Approximate [`orient3d`](crate::orient3d).
pub fn orient3d<T: Into<f64>>(
    pa: Coord3D<T>,
    pb: Coord3D<T>,
    pc: Coord3D<T>,
    pd: Coord3D<T>,
) -> f64 {
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

    adx * (bdy * cdz - bdz * cdy) + bdx * (cdy * adz - cdz * ady) + cdx * (ady * bdz - adz * bdy)
}

/// Approximate [`incircle`](crate::incircle).
pub fn incircle<T: Into<f64>>(pa: Coord<T>, pb: Coord<T>, pc: Coord<T>, pd: Coord<T>) -> f64 {
    let pa = pa.to_f64();
    let pb = pb.to_f64();
    let pc = pc.to_f64();
    let pd = pd.to_f64();

    let adx = pa.x - pd.x;
    let ady = pa.y - pd.y;
    let bdx = pb.x - pd.x;
    let bdy = pb.y - pd.y;
    let cdx = pc.x - pd.x;
    let cdy = pc.y - pd.y;

    let abdet = adx * bdy - bdx * ady;
    let bcdet = bdx * cdy - cdx * bdy;
    let cadet = cdx * ady - adx * cdy;
    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;

    alift * bcdet + blift * cadet + clift * abdet
}

/// Approximate [`insphere`](crate::insphere).
pub fn insphere<T: Into<f64>>(
    pa: Coord3D<T>,
    pb: Coord3D<T>,
    pc: Coord3D<T>,
    pd: Coord3D<T>,
    pe: Coord3D<T>,
) -> f64 {
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

    let ab = aex * bey - bex * aey;
    let bc = bex * cey - cex * bey;
    let cd = cex * dey - dex * cey;
    let da = dex * aey - aex * dey;
    let ac = aex * cey - cex * aey;
    let bd = bex * dey - dex * bey;

    let abc = aez * bc - bez * ac + cez * ab;
    let bcd = bez * cd - cez * bd + dez * bc;
    let cda = cez * da + dez * ac + aez * cd;
    let dab = dez * ab + aez * bd + bez * da;

    let alift = aex * aex + aey * aey + aez * aez;
    let blift = bex * bex + bey * bey + bez * bez;
    let clift = cex * cex + cey * cey + cez * cez;
    let dlift = dex * dex + dey * dey + dez * dez;

    (dlift * abc - clift * dab) + (blift * cda - alift * bcd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs_on_well_conditioned_input() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(1.0, 0.0);
        let c = Coord::new(0.0, 1.0);
        assert!(orient2d(a, b, c) > 0.0);
        assert!(orient2d(b, a, c) < 0.0);
        assert!(incircle(a, b, c, Coord::new(0.5, 0.5)) > 0.0);
        assert!(incircle(a, b, c, Coord::new(2.0, 2.0)) < 0.0);

        let o = Coord3D::new(0.0, 0.0, 0.0);
        let x = Coord3D::new(1.0, 0.0, 0.0);
        let y = Coord3D::new(0.0, 1.0, 0.0);
        let z = Coord3D::new(0.0, 0.0, 1.0);
        assert!(orient3d(o, y, x, Coord3D::new(1.0, 1.0, 1.0)) > 0.0);
        assert!(orient3d(o, x, y, Coord3D::new(1.0, 1.0, 1.0)) < 0.0);
        assert!(insphere(o, y, x, z, Coord3D::new(0.5, 0.5, 0.5)) > 0.0);
        assert!(insphere(o, x, y, z, Coord3D::new(0.5, 0.5, 0.5)) < 0.0);
    }

    #[test]
    fn cancellation_hides_the_sign() {
        let a = Coord::new(12.0, 12.0);
        let b = Coord::new(24.0, 24.0);
        let c = Coord::new(0.5, 0.5 + f64::EPSILON / 2.0);
        assert_eq!(orient2d(a, b, c), 0.0);
    }
}
