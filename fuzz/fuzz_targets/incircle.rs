#![no_main]

use adaptive_predicates::{incircle, Coord};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [(f32, f32); 4]| {
    let pa = Coord { x: data[0].0, y: data[0].1 };
    let pb = Coord { x: data[1].0, y: data[1].1 };
    let pc = Coord { x: data[2].0, y: data[2].1 };
    let pd = Coord { x: data[3].0, y: data[3].1 };
    if data.iter().any(|&(x, y)| !x.is_finite() || !y.is_finite()) {
        return;
    }

    let result = incircle(pa, pb, pc, pd);

    assert!(result.is_finite());
});
