#![cfg_attr(feature = "no_std", no_std)]
// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Adaptive Precision Robust Predicates for Computational Geometry
//! Sign-exact orientation, in-circle and in-sphere tests, built on the
//! adaptive floating-point expansion arithmetic of Jonathan Richard Shewchuk
//! ([https://www.cs.cmu.edu/~quake/robust.html](https://www.cs.cmu.edu/~quake/robust.html)).
//!
//! Every predicate evaluates a determinant whose *sign* answers a geometric
//! question – "on which side of a line (2d) or plane (3d) does a point lie?",
//! "is a point inside the circle (sphere) through three (four) others?".
//! Evaluation runs in stages. A fast floating-point filter with a certified
//! error bound answers almost every query. Only inputs close to degeneracy fall
//! through to the adaptive stage, which rebuilds the determinant with exact
//! expansion arithmetic, and finally to an exact evaluation. The sign returned
//! is always the sign of the exact determinant of the input coordinates.
//!
//! The public API accepts both `f32` and `f64` points, converting to `f64`
//! internally. This has no effect on precision, as the
//! [IEEE-754 standard](https://drive.google.com/file/d/0B3O3Ys97VjtxYXBCY08wanNoZ1U/view)
//! (section 5.3) guarantees that conversion from `f32` to `f64` is exact.
//!
//! Inputs must be finite, and intermediate products must neither overflow nor
//! underflow. The `TryFrom<&[f64]>` conversions of [`Coord`] and [`Coord3D`]
//! reject malformed or non-finite input at the boundary.
//!
//! ```
//! use adaptive_predicates::{orient2d, Coord};
//!
//! let det = orient2d(Coord::new(0., 0.), Coord::new(1., 0.), Coord::new(0., 1.));
//! assert!(det > 0.);
//! ```
//!
//! # Features
//! - `no_std`: Build without the Rust standard library

use core::ops::Neg;

pub mod bounds;
mod convert;
mod error;
pub mod expansion;
pub mod fast;
mod incircle;
mod insphere;
mod orient2d;
mod orient3d;

#[cfg(test)]
mod tests;

pub use bounds::{error_bounds, ErrorBounds};
pub use error::{Axis, CoordError};
pub use expansion::Expansion;
pub use incircle::{incircle, incircle_certified};
pub use insphere::{insphere, insphere_certified};
pub use orient2d::{orient2d, orient2d_certified};
pub use orient3d::{orient3d, orient3d_certified};

/// A two dimensional coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coord<T: Into<f64>> {
    pub x: T,
    pub y: T,
}

impl<T: Into<f64>> Coord<T> {
    pub const fn new(x: T, y: T) -> Self {
        Coord { x, y }
    }

    #[inline(always)]
    pub(crate) fn to_f64(self) -> Coord<f64> {
        Coord {
            x: self.x.into(),
            y: self.y.into(),
        }
    }
}

/// A three dimensional coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coord3D<T: Into<f64>> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Into<f64>> Coord3D<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Coord3D { x, y, z }
    }

    #[inline(always)]
    pub(crate) fn to_f64(self) -> Coord3D<f64> {
        Coord3D {
            x: self.x.into(),
            y: self.y.into(),
            z: self.z.into(),
        }
    }
}

/// The evaluation stage that certified the sign of a predicate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The floating-point determinant cleared the filter's error bound.
    Filter,
    /// An estimate of the exact expansion of the rounded differences, possibly
    /// corrected by the roundoff of the differences, cleared its bound.
    Adaptive,
    /// The determinant was evaluated exactly from the raw coordinates.
    Exact,
}

/// A predicate value together with the stage that certified its sign.
///
/// Only the sign of `value` is guaranteed. Its magnitude approximates the
/// determinant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Certified {
    pub value: f64,
    pub stage: Stage,
}

impl Certified {
    #[inline(always)]
    pub(crate) const fn filter(value: f64) -> Self {
        Certified {
            value,
            stage: Stage::Filter,
        }
    }

    #[inline(always)]
    pub(crate) const fn adaptive(value: f64) -> Self {
        Certified {
            value,
            stage: Stage::Adaptive,
        }
    }

    #[inline(always)]
    pub(crate) const fn exact(value: f64) -> Self {
        Certified {
            value,
            stage: Stage::Exact,
        }
    }
}

impl Neg for Certified {
    type Output = Self;

    fn neg(self) -> Self {
        Certified {
            value: -self.value,
            stage: self.stage,
        }
    }
}

#[inline(always)]
pub(crate) fn abs(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & !(1 << 63))
}
