#![no_main]

use adaptive_predicates::{insphere, Coord3D};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [(f32, f32, f32); 5]| {
    if data
        .iter()
        .any(|&(x, y, z)| !x.is_finite() || !y.is_finite() || !z.is_finite())
    {
        return;
    }
    let [a, b, c, d, e] = data.map(Coord3D::from);

    let result = insphere(a, b, c, d, e);

    assert!(result.is_finite());
});
