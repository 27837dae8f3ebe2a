// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Multi-term expansion operators.
//!
//! An expansion is a sequence of doubles sorted by increasing magnitude whose
//! components do not overlap in bit range; its exact value is the infinite-
//! precision sum of its components. The operators here merge and scale
//! expansions while preserving that invariant, dropping zero components as
//! they go. Output buffers must not alias the inputs and must be sized for
//! the worst case (`len(e) + len(f)` for sums, `2 * len(e)` for scaling);
//! callers pass fixed stack arrays sized per call site.

use crate::arithmetic::{
    fast_two_sum, split, two_one_product, two_product_presplit, two_sum,
};

/// Merges expansions `e` and `f` into `h`, returning the number of components
/// written. `h` must not alias either input.
pub(crate) fn fast_expansion_sum_zeroelim(e: &[f64], f: &[f64], h: &mut [f64]) -> usize {
    let mut enow = e[0];
    let mut fnow = f[0];
    let mut eindex = 0;
    let mut findex = 0;
    let mut q;
    // (fnow > enow) == (fnow > -enow) is a branch-cheap |enow| <= |fnow|
    if (fnow > enow) == (fnow > -enow) {
        q = enow;
        eindex += 1;
    } else {
        q = fnow;
        findex += 1;
    }

    let mut hindex = 0;
    if eindex < e.len() && findex < f.len() {
        enow = e[eindex];
        fnow = f[findex];
        let (qnew, hh) = if (fnow > enow) == (fnow > -enow) {
            eindex += 1;
            fast_two_sum(enow, q)
        } else {
            findex += 1;
            fast_two_sum(fnow, q)
        };
        q = qnew;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }

        while eindex < e.len() && findex < f.len() {
            enow = e[eindex];
            fnow = f[findex];
            let (qnew, hh) = if (fnow > enow) == (fnow > -enow) {
                eindex += 1;
                two_sum(q, enow)
            } else {
                findex += 1;
                two_sum(q, fnow)
            };
            q = qnew;
            if hh != 0.0 {
                h[hindex] = hh;
                hindex += 1;
            }
        }
    }

    while eindex < e.len() {
        let (qnew, hh) = two_sum(q, e[eindex]);
        q = qnew;
        eindex += 1;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
    }

    while findex < f.len() {
        let (qnew, hh) = two_sum(q, f[findex]);
        q = qnew;
        findex += 1;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
    }

    if q != 0.0 || hindex == 0 {
        h[hindex] = q;
        hindex += 1;
    }
    hindex
}

/// Multiplies expansion `e` by the scalar `b` into `h`, returning the number
/// of components written. `h` must not alias `e`.
pub(crate) fn scale_expansion_zeroelim(e: &[f64], b: f64, h: &mut [f64]) -> usize {
    let (bhi, blo) = split(b);
    let (mut q, hh) = two_product_presplit(e[0], b, bhi, blo);
    let mut hindex = 0;
    if hh != 0.0 {
        h[hindex] = hh;
        hindex += 1;
    }
    for &enow in &e[1..] {
        let (product1, product0) = two_product_presplit(enow, b, bhi, blo);
        let (sum, hh) = two_sum(q, product0);
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
        let (qnew, hh) = fast_two_sum(product1, sum);
        q = qnew;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
    }
    if q != 0.0 || hindex == 0 {
        h[hindex] = q;
        hindex += 1;
    }
    hindex
}

/// Exact product of two two-component expansions, at most 8 components.
/// Built by merging the two partial [`two_one_product`]s rather than the
/// fully fused formulation; the result and bound are identical.
pub(crate) fn two_two_product(a1: f64, a0: f64, b1: f64, b0: f64, h: &mut [f64; 8]) -> usize {
    let (u3, u2, u1, u0) = two_one_product(a1, a0, b1);
    let (v3, v2, v1, v0) = two_one_product(a1, a0, b0);
    fast_expansion_sum_zeroelim(&[u0, u1, u2, u3], &[v0, v1, v2, v3], h)
}

/// Non-exact single-double approximation of an expansion's value, used only
/// to decide whether the value is far enough from zero.
pub(crate) fn estimate(e: &[f64]) -> f64 {
    let mut q = e[0];
    for &component in &e[1..] {
        q += component;
    }
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::two_sum;

    #[test]
    fn sum_with_zero_expansion_is_identity() {
        let (hi, lo) = two_sum((1u64 << 54) as f64, 11.0);
        let e = [lo, hi];
        let mut h = [0f64; 4];
        let hlen = fast_expansion_sum_zeroelim(&e, &[0.0], &mut h);
        assert_eq!(&h[..hlen], &e);
    }

    #[test]
    fn scale_by_one_is_identity() {
        let (hi, lo) = two_sum((1u64 << 54) as f64, 11.0);
        let e = [lo, hi];
        let mut h = [0f64; 4];
        let hlen = scale_expansion_zeroelim(&e, 1.0, &mut h);
        assert_eq!(&h[..hlen], &e);
    }

    #[test]
    fn sum_cancels_to_single_zero() {
        let e = [3.0, (1u64 << 40) as f64];
        let f = [-3.0, -((1u64 << 40) as f64)];
        let mut h = [0f64; 4];
        let hlen = fast_expansion_sum_zeroelim(&e, &f, &mut h);
        assert_eq!(&h[..hlen], &[0.0]);
    }

    #[test]
    fn scale_is_exact_over_integers() {
        let (hi, lo) = two_sum((1u64 << 52) as f64, 9.0);
        let e = [lo, hi];
        let b = ((1u64 << 10) + 1) as f64;
        let mut h = [0f64; 4];
        let hlen = scale_expansion_zeroelim(&e, b, &mut h);
        let got: i128 = h[..hlen].iter().map(|&c| c as i128).sum();
        assert_eq!(got, ((1i128 << 52) + 9) * ((1i128 << 10) + 1));
    }

    #[test]
    fn two_two_product_is_exact_over_integers() {
        let (a1, a0) = two_sum((1u64 << 50) as f64, 21.0);
        let (b1, b0) = two_sum((1u64 << 30) as f64, 17.0);
        let mut h = [0f64; 8];
        let hlen = two_two_product(a1, a0, b1, b0, &mut h);
        let got: i128 = h[..hlen].iter().map(|&c| c as i128).sum();
        assert_eq!(got, ((1i128 << 50) + 21) * ((1i128 << 30) + 17));
        // components come out sorted by increasing magnitude
        for pair in h[..hlen].windows(2) {
            assert!(pair[0].abs() < pair[1].abs() || pair[0] == 0.0);
        }
    }

    #[test]
    fn estimate_matches_plain_summation() {
        let e = [0.25, 2.0, 1024.0];
        assert_eq!(estimate(&e), 1026.25);
    }
}
