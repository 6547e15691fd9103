#![no_main]

use adaptive_predicates::{orient2d, Coord};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [(f64, f64); 3]| {
    if data.iter().any(|&(x, y)| !x.is_finite() || !y.is_finite()) {
        return;
    }
    let pa = Coord { x: data[0].0, y: data[0].1 };
    let pb = Coord { x: data[1].0, y: data[1].1 };
    let pc = Coord { x: data[2].0, y: data[2].1 };

    let result = orient2d(pa, pb, pc);
    if !result.is_finite() {
        // overflow of the rounded differences
        return;
    }

    assert_eq!(orient2d(pb, pa, pc), -result);
});
