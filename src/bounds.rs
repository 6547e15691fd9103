// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Machine constants and the error-bound coefficients of every predicate.

/// The arithmetic constants the predicates certify their results against.
///
/// `epsilon` is the largest power of two such that `1.0 + epsilon == 1.0` in
/// round-to-nearest arithmetic, `splitter` is `2^ceil(p / 2) + 1` for the
/// `p`-bit significand and is used to split a double into two halves for
/// exact multiplication. The remaining fields are the conservative relative
/// error bounds of the filter (`_a`), adaptive (`_b`) and corrected (`_c`)
/// stages of each predicate, plus the bound on the final rounding of a
/// corrected estimate (`resulterrbound`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ErrorBounds {
    pub epsilon: f64,
    pub splitter: f64,
    pub resulterrbound: f64,
    pub ccwerrbound_a: f64,
    pub ccwerrbound_b: f64,
    pub ccwerrbound_c: f64,
    pub o3derrbound_a: f64,
    pub o3derrbound_b: f64,
    pub o3derrbound_c: f64,
    pub iccerrbound_a: f64,
    pub iccerrbound_b: f64,
    pub iccerrbound_c: f64,
    pub isperrbound_a: f64,
    pub isperrbound_b: f64,
    pub isperrbound_c: f64,
}

impl ErrorBounds {
    /// Derives epsilon and the splitter by repeated halving, then every
    /// bound from epsilon.
    pub const fn compute() -> Self {
        let half = 0.5;
        let mut every_other = true;
        let mut epsilon = 1.0;
        let mut splitter = 1.0;
        let mut check = 1.0;
        loop {
            let lastcheck = check;
            epsilon *= half;
            if every_other {
                splitter *= 2.0;
            }
            every_other = !every_other;
            check = 1.0 + epsilon;
            if check == 1.0 || check == lastcheck {
                break;
            }
        }
        splitter += 1.0;

        ErrorBounds {
            epsilon,
            splitter,
            resulterrbound: (3.0 + 8.0 * epsilon) * epsilon,
            ccwerrbound_a: (3.0 + 16.0 * epsilon) * epsilon,
            ccwerrbound_b: (2.0 + 12.0 * epsilon) * epsilon,
            ccwerrbound_c: (9.0 + 64.0 * epsilon) * epsilon * epsilon,
            o3derrbound_a: (7.0 + 56.0 * epsilon) * epsilon,
            o3derrbound_b: (3.0 + 28.0 * epsilon) * epsilon,
            o3derrbound_c: (26.0 + 288.0 * epsilon) * epsilon * epsilon,
            iccerrbound_a: (10.0 + 96.0 * epsilon) * epsilon,
            iccerrbound_b: (4.0 + 48.0 * epsilon) * epsilon,
            iccerrbound_c: (44.0 + 576.0 * epsilon) * epsilon * epsilon,
            isperrbound_a: (16.0 + 224.0 * epsilon) * epsilon,
            isperrbound_b: (5.0 + 72.0 * epsilon) * epsilon,
            isperrbound_c: (71.0 + 1408.0 * epsilon) * epsilon * epsilon,
        }
    }
}

static BOUNDS: ErrorBounds = ErrorBounds::compute();

/// The process-wide error bounds, evaluated at compile time.
#[inline(always)]
pub fn error_bounds() -> &'static ErrorBounds {
    &BOUNDS
}
