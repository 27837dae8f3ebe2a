#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [[f64; 2]; 3]| {
    // finite, non-overflowing coordinates are a caller contract
    if data.iter().flatten().any(|v| !v.is_finite() || v.abs() > 1e60) {
        return;
    }
    let bound = data.iter().flatten().fold(1.0f64, |m, v| m.max(v.abs()));
    let ctx = exactpred::PredicateContext::new(bound, bound, bound);

    let result = ctx.orient2d(data[0], data[1], data[2]);

    assert!(result.is_finite());
});
