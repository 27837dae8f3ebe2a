#![no_main]

use libfuzzer_sys::fuzz_target;

fn sign(x: f64) -> i32 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

fuzz_target!(|data: [[f64; 2]; 4]| {
    // exclude overflow-range magnitudes and sub-ulp denormal coordinates,
    // both outside the no-overflow/no-underflow arithmetic contract
    if data
        .iter()
        .flatten()
        .any(|v| !v.is_finite() || v.abs() > 1e60 || (*v != 0.0 && v.abs() < 1e-60))
    {
        return;
    }
    let bound = data.iter().flatten().fold(1.0f64, |m, v| m.max(v.abs()));
    let ctx = exactpred::PredicateContext::new(bound, bound, bound);

    let result = ctx.incircle(data[0], data[1], data[2], data[3]);

    assert!(result.is_finite());
    // the standalone exact path must agree with the adaptive path's sign
    let exact = exactpred::incircle_exact(data[0], data[1], data[2], data[3]);
    if exact.is_finite() {
        assert_eq!(sign(result), sign(exact));
    }
});
