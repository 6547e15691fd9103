#![no_main]

use adaptive_predicates::{orient3d, Coord3D};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [(f32, f32, f32); 4]| {
    if data
        .iter()
        .any(|&(x, y, z)| !x.is_finite() || !y.is_finite() || !z.is_finite())
    {
        return;
    }
    let [a, b, c, d] = data.map(Coord3D::from);

    let result = orient3d(a, b, c, d);

    assert!(result.is_finite());
    assert_eq!(
        orient3d(b, a, c, d).partial_cmp(&0.0),
        (-result).partial_cmp(&0.0)
    );
});
