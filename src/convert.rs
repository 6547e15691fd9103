// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversions from plain arrays, tuples and flat slices into coordinates.

use crate::error::{finite, Axis, CoordError};
use crate::{Coord, Coord3D};

impl<T: Into<f64>> From<[T; 2]> for Coord<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Coord { x, y }
    }
}

impl<T: Into<f64>> From<(T, T)> for Coord<T> {
    fn from((x, y): (T, T)) -> Self {
        Coord { x, y }
    }
}

impl<T: Into<f64>> From<[T; 3]> for Coord3D<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Coord3D { x, y, z }
    }
}

impl<T: Into<f64>> From<(T, T, T)> for Coord3D<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Coord3D { x, y, z }
    }
}

/// Reads `[x, y]`, rejecting any other length and non-finite values.
impl TryFrom<&[f64]> for Coord<f64> {
    type Error = CoordError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match *values {
            [x, y] => Ok(Coord {
                x: finite(Axis::X, x)?,
                y: finite(Axis::Y, y)?,
            }),
            _ => Err(CoordError::Arity {
                expected: 2,
                actual: values.len(),
            }),
        }
    }
}

/// Reads `[x, y, z]`, rejecting any other length and non-finite values.
impl TryFrom<&[f64]> for Coord3D<f64> {
    type Error = CoordError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match *values {
            [x, y, z] => Ok(Coord3D {
                x: finite(Axis::X, x)?,
                y: finite(Axis::Y, y)?,
                z: finite(Axis::Z, z)?,
            }),
            _ => Err(CoordError::Arity {
                expected: 3,
                actual: values.len(),
            }),
        }
    }
}
