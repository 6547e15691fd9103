// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt;

use thiserror::Error;

/// A coordinate axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// Why raw values could not be turned into a [`Coord`](crate::Coord) or
/// [`Coord3D`](crate::Coord3D).
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum CoordError {
    #[error("expected {expected} coordinate values, found {actual}")]
    Arity { expected: usize, actual: usize },
    #[error("{axis} coordinate is not finite: {value}")]
    NonFinite { axis: Axis, value: f64 },
}

pub(crate) fn finite(axis: Axis, value: f64) -> Result<f64, CoordError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoordError::NonFinite { axis, value })
    }
}
