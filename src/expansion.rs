// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![allow(non_snake_case)]

//! Exact floating-point expansion arithmetic.
//!
//! An expansion is a sum of doubles, stored by increasing magnitude, whose
//! components are pairwise nonoverlapping: the lowest set bit of each
//! component is more significant than the highest set bit of every smaller
//! one. The exact real value represented is the sum of the components, so the
//! sign of a zero-eliminated expansion is the sign of its largest component.
//!
//! All operations assume round-to-nearest-even IEEE-754 arithmetic and that no
//! intermediate value overflows or underflows.

use core::ops::Neg;

use crate::bounds::error_bounds;

/// `x + y == a + b` exactly, where `x` is the rounded sum.
#[inline]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let bvirt = x - a;
    let avirt = x - bvirt;
    let bround = b - bvirt;
    let around = a - avirt;
    (x, around + bround)
}

/// Like [`two_sum`], but requires `|a| >= |b|`.
#[inline]
pub fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let bvirt = x - a;
    (x, b - bvirt)
}

/// `x + y == a - b` exactly, where `x` is the rounded difference.
#[inline]
pub fn two_diff(a: f64, b: f64) -> (f64, f64) {
    let x = a - b;
    (x, two_diff_tail(a, b, x))
}

/// The roundoff of `x = a - b`.
#[inline]
pub fn two_diff_tail(a: f64, b: f64, x: f64) -> f64 {
    let bvirt = a - x;
    let avirt = x + bvirt;
    let bround = bvirt - b;
    let around = a - avirt;
    around + bround
}

/// Splits `a` into two halves of at most 26 significant bits each.
#[inline]
pub fn split(a: f64) -> (f64, f64) {
    let c = error_bounds().splitter * a;
    let abig = c - a;
    let ahi = c - abig;
    let alo = a - ahi;
    (ahi, alo)
}

/// `x + y == a * b` exactly, where `x` is the rounded product.
#[inline]
pub fn two_product(a: f64, b: f64) -> (f64, f64) {
    let (bhi, blo) = split(b);
    two_product_presplit(a, b, bhi, blo)
}

#[inline]
fn two_product_presplit(a: f64, b: f64, bhi: f64, blo: f64) -> (f64, f64) {
    let x = a * b;
    let (ahi, alo) = split(a);
    let err1 = x - ahi * bhi;
    let err2 = err1 - alo * bhi;
    let err3 = err2 - ahi * blo;
    (x, alo * blo - err3)
}

/// `(a1 + a0) - b` as a three-component expansion, most significant first.
#[inline]
pub fn two_one_diff(a1: f64, a0: f64, b: f64) -> (f64, f64, f64) {
    let (i, x0) = two_diff(a0, b);
    let (x2, x1) = two_sum(a1, i);
    (x2, x1, x0)
}

/// `(a1 + a0) - (b1 + b0)` as a four-component expansion, most significant first.
#[inline]
pub fn two_two_diff(a1: f64, a0: f64, b1: f64, b0: f64) -> (f64, f64, f64, f64) {
    let (j, r0, x0) = two_one_diff(a1, a0, b0);
    let (x3, x2, x1) = two_one_diff(j, r0, b1);
    (x3, x2, x1, x0)
}

/// Sums two nonoverlapping expansions into `h` and returns the number of
/// components written. Zero components are dropped, but a zero result is
/// stored as a single `0.0`.
///
/// `h` must hold at least `e.len() + f.len()` components and neither input may
/// be empty.
pub fn fast_expansion_sum_zeroelim(e: &[f64], f: &[f64], h: &mut [f64]) -> usize {
    let mut enow = e[0];
    let mut fnow = f[0];
    let mut eindex = 0;
    let mut findex = 0;
    let mut Q;
    if (fnow > enow) == (fnow > -enow) {
        Q = enow;
        eindex += 1;
    } else {
        Q = fnow;
        findex += 1;
    }

    let mut hindex = 0;
    if eindex < e.len() && findex < f.len() {
        enow = e[eindex];
        fnow = f[findex];
        let (Qnew, hh) = if (fnow > enow) == (fnow > -enow) {
            eindex += 1;
            fast_two_sum(enow, Q)
        } else {
            findex += 1;
            fast_two_sum(fnow, Q)
        };
        Q = Qnew;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }

        while eindex < e.len() && findex < f.len() {
            enow = e[eindex];
            fnow = f[findex];
            let (Qnew, hh) = if (fnow > enow) == (fnow > -enow) {
                eindex += 1;
                two_sum(Q, enow)
            } else {
                findex += 1;
                two_sum(Q, fnow)
            };
            Q = Qnew;
            if hh != 0.0 {
                h[hindex] = hh;
                hindex += 1;
            }
        }
    }

    for &rest in e[eindex..].iter().chain(&f[findex..]) {
        let (Qnew, hh) = two_sum(Q, rest);
        Q = Qnew;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
    }

    if Q != 0.0 || hindex == 0 {
        h[hindex] = Q;
        hindex += 1;
    }
    hindex
}

/// Multiplies a nonoverlapping expansion by `b` into `h`, returning the number
/// of components written. `h` must hold at least `2 * e.len()` components.
pub fn scale_expansion_zeroelim(e: &[f64], b: f64, h: &mut [f64]) -> usize {
    let (bhi, blo) = split(b);
    let (mut Q, hh) = two_product_presplit(e[0], b, bhi, blo);
    let mut hindex = 0;
    if hh != 0.0 {
        h[hindex] = hh;
        hindex += 1;
    }
    for &enow in &e[1..] {
        let (product1, product0) = two_product_presplit(enow, b, bhi, blo);
        let (sum, hh) = two_sum(Q, product0);
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
        let (Qnew, hh) = fast_two_sum(product1, sum);
        Q = Qnew;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
    }
    if Q != 0.0 || hindex == 0 {
        h[hindex] = Q;
        hindex += 1;
    }
    hindex
}

/// Adds the scalar `b` to a nonoverlapping expansion, writing the result into
/// `h`. `h` must hold at least `e.len() + 1` components.
pub fn grow_expansion_zeroelim(e: &[f64], b: f64, h: &mut [f64]) -> usize {
    let mut Q = b;
    let mut hindex = 0;
    for &enow in e {
        let (Qnew, hh) = two_sum(Q, enow);
        Q = Qnew;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
    }
    if Q != 0.0 || hindex == 0 {
        h[hindex] = Q;
        hindex += 1;
    }
    hindex
}

/// A one-pass floating-point approximation of the value of an expansion.
pub fn estimate(e: &[f64]) -> f64 {
    e.iter().fold(0.0, |q, cur| q + cur)
}

/// Checks that the nonzero components of `e` grow in magnitude and do not
/// overlap.
pub fn is_nonoverlapping(e: &[f64]) -> bool {
    let mut nonzero = e.iter().copied().filter(|c| *c != 0.0);
    let Some(mut prev) = nonzero.next() else {
        return true;
    };
    for cur in nonzero {
        let (_, prev_high) = bit_range(prev);
        let (cur_low, _) = bit_range(cur);
        if prev_high >= cur_low {
            return false;
        }
        prev = cur;
    }
    true
}

// Exponents of the least and most significant set bits of a nonzero finite double.
fn bit_range(v: f64) -> (i32, i32) {
    let bits = v.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1 << 52) - 1);
    let (significand, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };
    let low = exponent + significand.trailing_zeros() as i32;
    let high = exponent + 63 - significand.leading_zeros() as i32;
    (low, high)
}

/// A fixed-capacity expansion of at most `N` components.
///
/// The capacity of every combinator's output is part of its type and checked
/// at compile time, so predicate code never allocates and never overruns.
#[derive(Copy, Clone, Debug)]
pub struct Expansion<const N: usize> {
    components: [f64; N],
    len: usize,
}

impl<const N: usize> Expansion<N> {
    /// The expansion representing zero.
    pub const fn zero() -> Self {
        const { assert!(N >= 1, "an expansion holds at least one component") };
        Expansion {
            components: [0.0; N],
            len: 1,
        }
    }

    /// Wraps components that are already ordered by increasing magnitude and
    /// nonoverlapping.
    pub const fn from_components(components: [f64; N]) -> Self {
        const { assert!(N >= 1, "an expansion holds at least one component") };
        Expansion { components, len: N }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.components[..self.len]
    }

    pub fn estimate(&self) -> f64 {
        estimate(self.as_slice())
    }

    /// The largest component. Carries the sign of the whole expansion once
    /// zero components have been eliminated.
    pub fn most_significant(&self) -> f64 {
        self.components[self.len - 1]
    }

    /// The exact sum `self + other`.
    pub fn sum<const M: usize, const K: usize>(&self, other: &Expansion<M>) -> Expansion<K> {
        const { assert!(K >= N + M, "sum capacity must cover both operands") };
        let mut h = [0.0; K];
        let len = fast_expansion_sum_zeroelim(self.as_slice(), other.as_slice(), &mut h);
        Expansion { components: h, len }
    }

    /// The exact product `self * b`.
    pub fn scale<const K: usize>(&self, b: f64) -> Expansion<K> {
        const { assert!(K >= 2 * N, "scale capacity must be twice the input") };
        let mut h = [0.0; K];
        let len = scale_expansion_zeroelim(self.as_slice(), b, &mut h);
        Expansion { components: h, len }
    }

    /// The exact sum `self + b`.
    pub fn grow<const K: usize>(&self, b: f64) -> Expansion<K> {
        const { assert!(K > N, "grow capacity must exceed the input") };
        let mut h = [0.0; K];
        let len = grow_expansion_zeroelim(self.as_slice(), b, &mut h);
        Expansion { components: h, len }
    }
}

impl Expansion<4> {
    /// The exact value of `a * b - c * d`.
    ///
    /// All four components are kept, including zeros.
    #[inline]
    pub fn cross(a: f64, b: f64, c: f64, d: f64) -> Self {
        let (ab1, ab0) = two_product(a, b);
        let (cd1, cd0) = two_product(c, d);
        let (x3, x2, x1, x0) = two_two_diff(ab1, ab0, cd1, cd0);
        Expansion::from_components([x0, x1, x2, x3])
    }
}

impl<const N: usize> Neg for Expansion<N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for c in &mut self.components[..self.len] {
            *c = -*c;
        }
        self
    }
}
