// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-circle test, plus two independent exact formulations used as
//! cross-checks by the test suite and benchmarks.

use crate::arithmetic::{
    abs, square, two_diff, two_diff_tail, two_product, two_two_diff, two_two_sum,
};
use crate::context::PredicateContext;
use crate::expansion::{
    estimate, fast_expansion_sum_zeroelim, scale_expansion_zeroelim, two_two_product,
};
use crate::Point2;

impl PredicateContext {
    /// Returns a positive value if `pd` lies inside the circle through `pa`,
    /// `pb` and `pc`, a negative value if it lies outside, and exactly `0.0`
    /// if the four points are cocircular.
    ///
    /// `pa`, `pb` and `pc` must occur in counterclockwise order, or the sign
    /// of the result is reversed. This is a caller contract and is not
    /// validated.
    pub fn incircle(&self, pa: Point2, pb: Point2, pc: Point2, pd: Point2) -> f64 {
        let adx = pa[0] - pd[0];
        let bdx = pb[0] - pd[0];
        let cdx = pc[0] - pd[0];
        let ady = pa[1] - pd[1];
        let bdy = pb[1] - pd[1];
        let cdy = pc[1] - pd[1];

        let bdxcdy = bdx * cdy;
        let cdxbdy = cdx * bdy;
        let alift = adx * adx + ady * ady;

        let cdxady = cdx * ady;
        let adxcdy = adx * cdy;
        let blift = bdx * bdx + bdy * bdy;

        let adxbdy = adx * bdy;
        let bdxady = bdx * ady;
        let clift = cdx * cdx + cdy * cdy;

        let det =
            alift * (bdxcdy - cdxbdy) + blift * (cdxady - adxcdy) + clift * (adxbdy - bdxady);

        let permanent = (abs(bdxcdy) + abs(cdxbdy)) * alift
            + (abs(cdxady) + abs(adxcdy)) * blift
            + (abs(adxbdy) + abs(bdxady)) * clift;
        let errbound = self.iccerrbound_a * permanent;
        if det > errbound || -det > errbound {
            return det;
        }
        self.incircle_adapt(pa, pb, pc, pd, permanent)
    }

    fn incircle_adapt(
        &self,
        pa: Point2,
        pb: Point2,
        pc: Point2,
        pd: Point2,
        permanent: f64,
    ) -> f64 {
        let mut temp8 = [0f64; 8];
        let mut temp16a = [0f64; 16];
        let mut temp16b = [0f64; 16];
        let mut temp16c = [0f64; 16];
        let mut temp32a = [0f64; 32];
        let mut temp32b = [0f64; 32];
        let mut temp48 = [0f64; 48];
        let mut temp64 = [0f64; 64];

        let adx = pa[0] - pd[0];
        let bdx = pb[0] - pd[0];
        let cdx = pc[0] - pd[0];
        let ady = pa[1] - pd[1];
        let bdy = pb[1] - pd[1];
        let cdy = pc[1] - pd[1];

        let (bdxcdy1, bdxcdy0) = two_product(bdx, cdy);
        let (cdxbdy1, cdxbdy0) = two_product(cdx, bdy);
        let (bc3, bc2, bc1, bc0) = two_two_diff(bdxcdy1, bdxcdy0, cdxbdy1, cdxbdy0);
        let bc = [bc0, bc1, bc2, bc3];

        let mut axbc = [0f64; 8];
        let axbclen = scale_expansion_zeroelim(&bc, adx, &mut axbc);
        let mut axxbc = [0f64; 16];
        let axxbclen = scale_expansion_zeroelim(&axbc[..axbclen], adx, &mut axxbc);
        let mut aybc = [0f64; 8];
        let aybclen = scale_expansion_zeroelim(&bc, ady, &mut aybc);
        let mut ayybc = [0f64; 16];
        let ayybclen = scale_expansion_zeroelim(&aybc[..aybclen], ady, &mut ayybc);
        let mut adet = [0f64; 32];
        let alen = fast_expansion_sum_zeroelim(&axxbc[..axxbclen], &ayybc[..ayybclen], &mut adet);

        let (cdxady1, cdxady0) = two_product(cdx, ady);
        let (adxcdy1, adxcdy0) = two_product(adx, cdy);
        let (ca3, ca2, ca1, ca0) = two_two_diff(cdxady1, cdxady0, adxcdy1, adxcdy0);
        let ca = [ca0, ca1, ca2, ca3];

        let mut bxca = [0f64; 8];
        let bxcalen = scale_expansion_zeroelim(&ca, bdx, &mut bxca);
        let mut bxxca = [0f64; 16];
        let bxxcalen = scale_expansion_zeroelim(&bxca[..bxcalen], bdx, &mut bxxca);
        let mut byca = [0f64; 8];
        let bycalen = scale_expansion_zeroelim(&ca, bdy, &mut byca);
        let mut byyca = [0f64; 16];
        let byycalen = scale_expansion_zeroelim(&byca[..bycalen], bdy, &mut byyca);
        let mut bdet = [0f64; 32];
        let blen = fast_expansion_sum_zeroelim(&bxxca[..bxxcalen], &byyca[..byycalen], &mut bdet);

        let (adxbdy1, adxbdy0) = two_product(adx, bdy);
        let (bdxady1, bdxady0) = two_product(bdx, ady);
        let (ab3, ab2, ab1, ab0) = two_two_diff(adxbdy1, adxbdy0, bdxady1, bdxady0);
        let ab = [ab0, ab1, ab2, ab3];

        let mut cxab = [0f64; 8];
        let cxablen = scale_expansion_zeroelim(&ab, cdx, &mut cxab);
        let mut cxxab = [0f64; 16];
        let cxxablen = scale_expansion_zeroelim(&cxab[..cxablen], cdx, &mut cxxab);
        let mut cyab = [0f64; 8];
        let cyablen = scale_expansion_zeroelim(&ab, cdy, &mut cyab);
        let mut cyyab = [0f64; 16];
        let cyyablen = scale_expansion_zeroelim(&cyab[..cyablen], cdy, &mut cyyab);
        let mut cdet = [0f64; 32];
        let clen = fast_expansion_sum_zeroelim(&cxxab[..cxxablen], &cyyab[..cyyablen], &mut cdet);

        let mut abdet = [0f64; 64];
        let ablen = fast_expansion_sum_zeroelim(&adet[..alen], &bdet[..blen], &mut abdet);
        let mut fin1 = [0f64; 1152];
        let mut finlength = fast_expansion_sum_zeroelim(&abdet[..ablen], &cdet[..clen], &mut fin1);

        let mut det = estimate(&fin1[..finlength]);
        let errbound = self.iccerrbound_b * permanent;
        if det >= errbound || -det >= errbound {
            return det;
        }

        let adxtail = two_diff_tail(pa[0], pd[0], adx);
        let adytail = two_diff_tail(pa[1], pd[1], ady);
        let bdxtail = two_diff_tail(pb[0], pd[0], bdx);
        let bdytail = two_diff_tail(pb[1], pd[1], bdy);
        let cdxtail = two_diff_tail(pc[0], pd[0], cdx);
        let cdytail = two_diff_tail(pc[1], pd[1], cdy);
        if adxtail == 0.0
            && bdxtail == 0.0
            && cdxtail == 0.0
            && adytail == 0.0
            && bdytail == 0.0
            && cdytail == 0.0
        {
            return det;
        }

        let errbound = self.iccerrbound_c * permanent + self.resulterrbound * abs(det);
        det += ((adx * adx + ady * ady)
            * ((bdx * cdytail + cdy * bdxtail) - (bdy * cdxtail + cdx * bdytail))
            + 2.0 * (adx * adxtail + ady * adytail) * (bdx * cdy - bdy * cdx))
            + ((bdx * bdx + bdy * bdy)
                * ((cdx * adytail + ady * cdxtail) - (cdy * adxtail + adx * cdytail))
                + 2.0 * (bdx * bdxtail + bdy * bdytail) * (cdx * ady - cdy * adx))
            + ((cdx * cdx + cdy * cdy)
                * ((adx * bdytail + bdy * adxtail) - (ady * bdxtail + bdx * adytail))
                + 2.0 * (cdx * cdxtail + cdy * cdytail) * (adx * bdy - ady * bdx));

        if det >= errbound || -det >= errbound {
            return det;
        }

        let mut fin2 = [0f64; 1152];

        let aa = if bdxtail != 0.0 || bdytail != 0.0 || cdxtail != 0.0 || cdytail != 0.0 {
            let (adxadx1, adxadx0) = square(adx);
            let (adyady1, adyady0) = square(ady);
            let (aa3, aa2, aa1, aa0) = two_two_sum(adxadx1, adxadx0, adyady1, adyady0);
            [aa0, aa1, aa2, aa3]
        } else {
            [0f64; 4]
        };

        let bb = if cdxtail != 0.0 || cdytail != 0.0 || adxtail != 0.0 || adytail != 0.0 {
            let (bdxbdx1, bdxbdx0) = square(bdx);
            let (bdybdy1, bdybdy0) = square(bdy);
            let (bb3, bb2, bb1, bb0) = two_two_sum(bdxbdx1, bdxbdx0, bdybdy1, bdybdy0);
            [bb0, bb1, bb2, bb3]
        } else {
            [0f64; 4]
        };

        let cc = if adxtail != 0.0 || adytail != 0.0 || bdxtail != 0.0 || bdytail != 0.0 {
            let (cdxcdx1, cdxcdx0) = square(cdx);
            let (cdycdy1, cdycdy0) = square(cdy);
            let (cc3, cc2, cc1, cc0) = two_two_sum(cdxcdx1, cdxcdx0, cdycdy1, cdycdy0);
            [cc0, cc1, cc2, cc3]
        } else {
            [0f64; 4]
        };

        let mut axtbclen = 9;
        let mut axtbc = [0f64; 8];
        if adxtail != 0.0 {
            axtbclen = scale_expansion_zeroelim(&bc, adxtail, &mut axtbc);
            let temp16alen = scale_expansion_zeroelim(&axtbc[..axtbclen], 2.0 * adx, &mut temp16a);

            let mut axtcc = [0f64; 8];
            let axtcclen = scale_expansion_zeroelim(&cc, adxtail, &mut axtcc);
            let temp16blen = scale_expansion_zeroelim(&axtcc[..axtcclen], bdy, &mut temp16b);

            let mut axtbb = [0f64; 8];
            let axtbblen = scale_expansion_zeroelim(&bb, adxtail, &mut axtbb);
            let temp16clen = scale_expansion_zeroelim(&axtbb[..axtbblen], -cdy, &mut temp16c);

            let temp32alen = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp16b[..temp16blen],
                &mut temp32a,
            );
            let temp48len = fast_expansion_sum_zeroelim(
                &temp16c[..temp16clen],
                &temp32a[..temp32alen],
                &mut temp48,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
            core::mem::swap(&mut fin1, &mut fin2);
        }

        let mut aytbclen = 9;
        let mut aytbc = [0f64; 8];
        if adytail != 0.0 {
            aytbclen = scale_expansion_zeroelim(&bc, adytail, &mut aytbc);
            let temp16alen = scale_expansion_zeroelim(&aytbc[..aytbclen], 2.0 * ady, &mut temp16a);

            let mut aytbb = [0f64; 8];
            let aytbblen = scale_expansion_zeroelim(&bb, adytail, &mut aytbb);
            let temp16blen = scale_expansion_zeroelim(&aytbb[..aytbblen], cdx, &mut temp16b);

            let mut aytcc = [0f64; 8];
            let aytcclen = scale_expansion_zeroelim(&cc, adytail, &mut aytcc);
            let temp16clen = scale_expansion_zeroelim(&aytcc[..aytcclen], -bdx, &mut temp16c);

            let temp32alen = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp16b[..temp16blen],
                &mut temp32a,
            );
            let temp48len = fast_expansion_sum_zeroelim(
                &temp16c[..temp16clen],
                &temp32a[..temp32alen],
                &mut temp48,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
            core::mem::swap(&mut fin1, &mut fin2);
        }

        let mut bxtcalen = 9;
        let mut bxtca = [0f64; 8];
        if bdxtail != 0.0 {
            bxtcalen = scale_expansion_zeroelim(&ca, bdxtail, &mut bxtca);
            let temp16alen = scale_expansion_zeroelim(&bxtca[..bxtcalen], 2.0 * bdx, &mut temp16a);

            let mut bxtaa = [0f64; 8];
            let bxtaalen = scale_expansion_zeroelim(&aa, bdxtail, &mut bxtaa);
            let temp16blen = scale_expansion_zeroelim(&bxtaa[..bxtaalen], cdy, &mut temp16b);

            let mut bxtcc = [0f64; 8];
            let bxtcclen = scale_expansion_zeroelim(&cc, bdxtail, &mut bxtcc);
            let temp16clen = scale_expansion_zeroelim(&bxtcc[..bxtcclen], -ady, &mut temp16c);

            let temp32alen = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp16b[..temp16blen],
                &mut temp32a,
            );
            let temp48len = fast_expansion_sum_zeroelim(
                &temp16c[..temp16clen],
                &temp32a[..temp32alen],
                &mut temp48,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
            core::mem::swap(&mut fin1, &mut fin2);
        }

        let mut bytcalen = 9;
        let mut bytca = [0f64; 8];
        if bdytail != 0.0 {
            bytcalen = scale_expansion_zeroelim(&ca, bdytail, &mut bytca);
            let temp16alen = scale_expansion_zeroelim(&bytca[..bytcalen], 2.0 * bdy, &mut temp16a);

            let mut bytcc = [0f64; 8];
            let bytcclen = scale_expansion_zeroelim(&cc, bdytail, &mut bytcc);
            let temp16blen = scale_expansion_zeroelim(&bytcc[..bytcclen], adx, &mut temp16b);

            let mut bytaa = [0f64; 8];
            let bytaalen = scale_expansion_zeroelim(&aa, bdytail, &mut bytaa);
            let temp16clen = scale_expansion_zeroelim(&bytaa[..bytaalen], -cdx, &mut temp16c);

            let temp32alen = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp16b[..temp16blen],
                &mut temp32a,
            );
            let temp48len = fast_expansion_sum_zeroelim(
                &temp16c[..temp16clen],
                &temp32a[..temp32alen],
                &mut temp48,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
            core::mem::swap(&mut fin1, &mut fin2);
        }

        let mut cxtablen = 9;
        let mut cxtab = [0f64; 8];
        if cdxtail != 0.0 {
            cxtablen = scale_expansion_zeroelim(&ab, cdxtail, &mut cxtab);
            let temp16alen = scale_expansion_zeroelim(&cxtab[..cxtablen], 2.0 * cdx, &mut temp16a);

            let mut cxtbb = [0f64; 8];
            let cxtbblen = scale_expansion_zeroelim(&bb, cdxtail, &mut cxtbb);
            let temp16blen = scale_expansion_zeroelim(&cxtbb[..cxtbblen], ady, &mut temp16b);

            let mut cxtaa = [0f64; 8];
            let cxtaalen = scale_expansion_zeroelim(&aa, cdxtail, &mut cxtaa);
            let temp16clen = scale_expansion_zeroelim(&cxtaa[..cxtaalen], -bdy, &mut temp16c);

            let temp32alen = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp16b[..temp16blen],
                &mut temp32a,
            );
            let temp48len = fast_expansion_sum_zeroelim(
                &temp16c[..temp16clen],
                &temp32a[..temp32alen],
                &mut temp48,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
            core::mem::swap(&mut fin1, &mut fin2);
        }

        let mut cytablen = 9;
        let mut cytab = [0f64; 8];
        if cdytail != 0.0 {
            cytablen = scale_expansion_zeroelim(&ab, cdytail, &mut cytab);
            let temp16alen = scale_expansion_zeroelim(&cytab[..cytablen], 2.0 * cdy, &mut temp16a);

            let mut cytaa = [0f64; 8];
            let cytaalen = scale_expansion_zeroelim(&aa, cdytail, &mut cytaa);
            let temp16blen = scale_expansion_zeroelim(&cytaa[..cytaalen], bdx, &mut temp16b);

            let mut cytbb = [0f64; 8];
            let cytbblen = scale_expansion_zeroelim(&bb, cdytail, &mut cytbb);
            let temp16clen = scale_expansion_zeroelim(&cytbb[..cytbblen], -adx, &mut temp16c);

            let temp32alen = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp16b[..temp16blen],
                &mut temp32a,
            );
            let temp48len = fast_expansion_sum_zeroelim(
                &temp16c[..temp16clen],
                &temp32a[..temp32alen],
                &mut temp48,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
            core::mem::swap(&mut fin1, &mut fin2);
        }

        if adxtail != 0.0 || adytail != 0.0 {
            let mut bctt = [0f64; 4];
            let mut bct = [0f64; 8];
            let bcttlen;
            let bctlen;
            if bdxtail != 0.0 || bdytail != 0.0 || cdxtail != 0.0 || cdytail != 0.0 {
                let (ti1, ti0) = two_product(bdxtail, cdy);
                let (tj1, tj0) = two_product(bdx, cdytail);
                let (u3, u2, u1, u0) = two_two_sum(ti1, ti0, tj1, tj0);
                let u = [u0, u1, u2, u3];
                let negate = -bdy;
                let (ti1, ti0) = two_product(cdxtail, negate);
                let negate = -bdytail;
                let (tj1, tj0) = two_product(cdx, negate);
                let (v3, v2, v1, v0) = two_two_sum(ti1, ti0, tj1, tj0);
                let v = [v0, v1, v2, v3];
                bctlen = fast_expansion_sum_zeroelim(&u, &v, &mut bct);

                let (ti1, ti0) = two_product(bdxtail, cdytail);
                let (tj1, tj0) = two_product(cdxtail, bdytail);
                let (bctt3, bctt2, bctt1, bctt0) = two_two_diff(ti1, ti0, tj1, tj0);
                bctt = [bctt0, bctt1, bctt2, bctt3];
                bcttlen = 4;
            } else {
                bct[0] = 0.0;
                bctlen = 1;
                bctt[0] = 0.0;
                bcttlen = 1;
            }

            if adxtail != 0.0 {
                let temp16alen =
                    scale_expansion_zeroelim(&axtbc[..axtbclen], adxtail, &mut temp16a);
                let mut axtbct = [0f64; 16];
                let axtbctlen = scale_expansion_zeroelim(&bct[..bctlen], adxtail, &mut axtbct);
                let temp32alen =
                    scale_expansion_zeroelim(&axtbct[..axtbctlen], 2.0 * adx, &mut temp32a);
                let temp48len = fast_expansion_sum_zeroelim(
                    &temp16a[..temp16alen],
                    &temp32a[..temp32alen],
                    &mut temp48,
                );
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp48[..temp48len],
                    &mut fin2,
                );
                core::mem::swap(&mut fin1, &mut fin2);

                if bdytail != 0.0 {
                    let temp8len = scale_expansion_zeroelim(&cc, adxtail, &mut temp8);
                    let temp16alen =
                        scale_expansion_zeroelim(&temp8[..temp8len], bdytail, &mut temp16a);
                    finlength = fast_expansion_sum_zeroelim(
                        &fin1[..finlength],
                        &temp16a[..temp16alen],
                        &mut fin2,
                    );
                    core::mem::swap(&mut fin1, &mut fin2);
                }
                if cdytail != 0.0 {
                    let temp8len = scale_expansion_zeroelim(&bb, -adxtail, &mut temp8);
                    let temp16alen =
                        scale_expansion_zeroelim(&temp8[..temp8len], cdytail, &mut temp16a);
                    finlength = fast_expansion_sum_zeroelim(
                        &fin1[..finlength],
                        &temp16a[..temp16alen],
                        &mut fin2,
                    );
                    core::mem::swap(&mut fin1, &mut fin2);
                }

                let temp32alen =
                    scale_expansion_zeroelim(&axtbct[..axtbctlen], adxtail, &mut temp32a);
                let mut axtbctt = [0f64; 8];
                let axtbcttlen = scale_expansion_zeroelim(&bctt[..bcttlen], adxtail, &mut axtbctt);
                let temp16alen =
                    scale_expansion_zeroelim(&axtbctt[..axtbcttlen], 2.0 * adx, &mut temp16a);
                let temp16blen =
                    scale_expansion_zeroelim(&axtbctt[..axtbcttlen], adxtail, &mut temp16b);
                let temp32blen = fast_expansion_sum_zeroelim(
                    &temp16a[..temp16alen],
                    &temp16b[..temp16blen],
                    &mut temp32b,
                );
                let temp64len = fast_expansion_sum_zeroelim(
                    &temp32a[..temp32alen],
                    &temp32b[..temp32blen],
                    &mut temp64,
                );
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp64[..temp64len],
                    &mut fin2,
                );
                core::mem::swap(&mut fin1, &mut fin2);
            }

            if adytail != 0.0 {
                let temp16alen =
                    scale_expansion_zeroelim(&aytbc[..aytbclen], adytail, &mut temp16a);
                let mut aytbct = [0f64; 16];
                let aytbctlen = scale_expansion_zeroelim(&bct[..bctlen], adytail, &mut aytbct);
                let temp32alen =
                    scale_expansion_zeroelim(&aytbct[..aytbctlen], 2.0 * ady, &mut temp32a);
                let temp48len = fast_expansion_sum_zeroelim(
                    &temp16a[..temp16alen],
                    &temp32a[..temp32alen],
                    &mut temp48,
                );
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp48[..temp48len],
                    &mut fin2,
                );
                core::mem::swap(&mut fin1, &mut fin2);

                let temp32alen =
                    scale_expansion_zeroelim(&aytbct[..aytbctlen], adytail, &mut temp32a);
                let mut aytbctt = [0f64; 8];
                let aytbcttlen = scale_expansion_zeroelim(&bctt[..bcttlen], adytail, &mut aytbctt);
                let temp16alen =
                    scale_expansion_zeroelim(&aytbctt[..aytbcttlen], 2.0 * ady, &mut temp16a);
                let temp16blen =
                    scale_expansion_zeroelim(&aytbctt[..aytbcttlen], adytail, &mut temp16b);
                let temp32blen = fast_expansion_sum_zeroelim(
                    &temp16a[..temp16alen],
                    &temp16b[..temp16blen],
                    &mut temp32b,
                );
                let temp64len = fast_expansion_sum_zeroelim(
                    &temp32a[..temp32alen],
                    &temp32b[..temp32blen],
                    &mut temp64,
                );
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp64[..temp64len],
                    &mut fin2,
                );
                core::mem::swap(&mut fin1, &mut fin2);
            }
        }

        if bdxtail != 0.0 || bdytail != 0.0 {
            let mut catt = [0f64; 4];
            let mut cat = [0f64; 8];
            let cattlen;
            let catlen;
            if cdxtail != 0.0 || cdytail != 0.0 || adxtail != 0.0 || adytail != 0.0 {
                let (ti1, ti0) = two_product(cdxtail, ady);
                let (tj1, tj0) = two_product(cdx, adytail);
                let (u3, u2, u1, u0) = two_two_sum(ti1, ti0, tj1, tj0);
                let u = [u0, u1, u2, u3];
                let negate = -cdy;
                let (ti1, ti0) = two_product(adxtail, negate);
                let negate = -cdytail;
                let (tj1, tj0) = two_product(adx, negate);
                let (v3, v2, v1, v0) = two_two_sum(ti1, ti0, tj1, tj0);
                let v = [v0, v1, v2, v3];
                catlen = fast_expansion_sum_zeroelim(&u, &v, &mut cat);

                let (ti1, ti0) = two_product(cdxtail, adytail);
                let (tj1, tj0) = two_product(adxtail, cdytail);
                let (catt3, catt2, catt1, catt0) = two_two_diff(ti1, ti0, tj1, tj0);
                catt = [catt0, catt1, catt2, catt3];
                cattlen = 4;
            } else {
                cat[0] = 0.0;
                catlen = 1;
                catt[0] = 0.0;
                cattlen = 1;
            }

            if bdxtail != 0.0 {
                let temp16alen =
                    scale_expansion_zeroelim(&bxtca[..bxtcalen], bdxtail, &mut temp16a);
                let mut bxtcat = [0f64; 16];
                let bxtcatlen = scale_expansion_zeroelim(&cat[..catlen], bdxtail, &mut bxtcat);
                let temp32alen =
                    scale_expansion_zeroelim(&bxtcat[..bxtcatlen], 2.0 * bdx, &mut temp32a);
                let temp48len = fast_expansion_sum_zeroelim(
                    &temp16a[..temp16alen],
                    &temp32a[..temp32alen],
                    &mut temp48,
                );
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp48[..temp48len],
                    &mut fin2,
                );
                core::mem::swap(&mut fin1, &mut fin2);

                if cdytail != 0.0 {
                    let temp8len = scale_expansion_zeroelim(&aa, bdxtail, &mut temp8);
                    let temp16alen =
                        scale_expansion_zeroelim(&temp8[..temp8len], cdytail, &mut temp16a);
                    finlength = fast_expansion_sum_zeroelim(
                        &fin1[..finlength],
                        &temp16a[..temp16alen],
                        &mut fin2,
                    );
                    core::mem::swap(&mut fin1, &mut fin2);
                }
                if adytail != 0.0 {
                    let temp8len = scale_expansion_zeroelim(&cc, -bdxtail, &mut temp8);
                    let temp16alen =
                        scale_expansion_zeroelim(&temp8[..temp8len], adytail, &mut temp16a);
                    finlength = fast_expansion_sum_zeroelim(
                        &fin1[..finlength],
                        &temp16a[..temp16alen],
                        &mut fin2,
                    );
                    core::mem::swap(&mut fin1, &mut fin2);
                }

                let temp32alen =
                    scale_expansion_zeroelim(&bxtcat[..bxtcatlen], bdxtail, &mut temp32a);
                let mut bxtcatt = [0f64; 8];
                let bxtcattlen = scale_expansion_zeroelim(&catt[..cattlen], bdxtail, &mut bxtcatt);
                let temp16alen =
                    scale_expansion_zeroelim(&bxtcatt[..bxtcattlen], 2.0 * bdx, &mut temp16a);
                let temp16blen =
                    scale_expansion_zeroelim(&bxtcatt[..bxtcattlen], bdxtail, &mut temp16b);
                let temp32blen = fast_expansion_sum_zeroelim(
                    &temp16a[..temp16alen],
                    &temp16b[..temp16blen],
                    &mut temp32b,
                );
                let temp64len = fast_expansion_sum_zeroelim(
                    &temp32a[..temp32alen],
                    &temp32b[..temp32blen],
                    &mut temp64,
                );
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp64[..temp64len],
                    &mut fin2,
                );
                core::mem::swap(&mut fin1, &mut fin2);
            }
            if bdytail != 0.0 {
                let temp16alen =
                    scale_expansion_zeroelim(&bytca[..bytcalen], bdytail, &mut temp16a);
                let mut bytcat = [0f64; 16];
                let bytcatlen = scale_expansion_zeroelim(&cat[..catlen], bdytail, &mut bytcat);
                let temp32alen =
                    scale_expansion_zeroelim(&bytcat[..bytcatlen], 2.0 * bdy, &mut temp32a);
                let temp48len = fast_expansion_sum_zeroelim(
                    &temp16a[..temp16alen],
                    &temp32a[..temp32alen],
                    &mut temp48,
                );
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp48[..temp48len],
                    &mut fin2,
                );
                core::mem::swap(&mut fin1, &mut fin2);

                let temp32alen =
                    scale_expansion_zeroelim(&bytcat[..bytcatlen], bdytail, &mut temp32a);
                let mut bytcatt = [0f64; 8];
                let bytcattlen = scale_expansion_zeroelim(&catt[..cattlen], bdytail, &mut bytcatt);
                let temp16alen =
                    scale_expansion_zeroelim(&bytcatt[..bytcattlen], 2.0 * bdy, &mut temp16a);
                let temp16blen =
                    scale_expansion_zeroelim(&bytcatt[..bytcattlen], bdytail, &mut temp16b);
                let temp32blen = fast_expansion_sum_zeroelim(
                    &temp16a[..temp16alen],
                    &temp16b[..temp16blen],
                    &mut temp32b,
                );
                let temp64len = fast_expansion_sum_zeroelim(
                    &temp32a[..temp32alen],
                    &temp32b[..temp32blen],
                    &mut temp64,
                );
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp64[..temp64len],
                    &mut fin2,
                );
                core::mem::swap(&mut fin1, &mut fin2);
            }
        }

        if cdxtail != 0.0 || cdytail != 0.0 {
            let mut abtt = [0f64; 4];
            let mut abt = [0f64; 8];
            let abttlen;
            let abtlen;
            if adxtail != 0.0 || adytail != 0.0 || bdxtail != 0.0 || bdytail != 0.0 {
                let (ti1, ti0) = two_product(adxtail, bdy);
                let (tj1, tj0) = two_product(adx, bdytail);
                let (u3, u2, u1, u0) = two_two_sum(ti1, ti0, tj1, tj0);
                let u = [u0, u1, u2, u3];
                let negate = -ady;
                let (ti1, ti0) = two_product(bdxtail, negate);
                let negate = -adytail;
                let (tj1, tj0) = two_product(bdx, negate);
                let (v3, v2, v1, v0) = two_two_sum(ti1, ti0, tj1, tj0);
                let v = [v0, v1, v2, v3];
                abtlen = fast_expansion_sum_zeroelim(&u, &v, &mut abt);

                let (ti1, ti0) = two_product(adxtail, bdytail);
                let (tj1, tj0) = two_product(bdxtail, adytail);
                let (abtt3, abtt2, abtt1, abtt0) = two_two_diff(ti1, ti0, tj1, tj0);
                abtt = [abtt0, abtt1, abtt2, abtt3];
                abttlen = 4;
            } else {
                abt[0] = 0.0;
                abtlen = 1;
                abtt[0] = 0.0;
                abttlen = 1;
            }

            if cdxtail != 0.0 {
                let temp16alen =
                    scale_expansion_zeroelim(&cxtab[..cxtablen], cdxtail, &mut temp16a);
                let mut cxtabt = [0f64; 16];
                let cxtabtlen = scale_expansion_zeroelim(&abt[..abtlen], cdxtail, &mut cxtabt);
                let temp32alen =
                    scale_expansion_zeroelim(&cxtabt[..cxtabtlen], 2.0 * cdx, &mut temp32a);
                let temp48len = fast_expansion_sum_zeroelim(
                    &temp16a[..temp16alen],
                    &temp32a[..temp32alen],
                    &mut temp48,
                );
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp48[..temp48len],
                    &mut fin2,
                );
                core::mem::swap(&mut fin1, &mut fin2);

                if adytail != 0.0 {
                    let temp8len = scale_expansion_zeroelim(&bb, cdxtail, &mut temp8);
                    let temp16alen =
                        scale_expansion_zeroelim(&temp8[..temp8len], adytail, &mut temp16a);
                    finlength = fast_expansion_sum_zeroelim(
                        &fin1[..finlength],
                        &temp16a[..temp16alen],
                        &mut fin2,
                    );
                    core::mem::swap(&mut fin1, &mut fin2);
                }
                if bdytail != 0.0 {
                    let temp8len = scale_expansion_zeroelim(&aa, -cdxtail, &mut temp8);
                    let temp16alen =
                        scale_expansion_zeroelim(&temp8[..temp8len], bdytail, &mut temp16a);
                    finlength = fast_expansion_sum_zeroelim(
                        &fin1[..finlength],
                        &temp16a[..temp16alen],
                        &mut fin2,
                    );
                    core::mem::swap(&mut fin1, &mut fin2);
                }

                let temp32alen =
                    scale_expansion_zeroelim(&cxtabt[..cxtabtlen], cdxtail, &mut temp32a);
                let mut cxtabtt = [0f64; 8];
                let cxtabttlen = scale_expansion_zeroelim(&abtt[..abttlen], cdxtail, &mut cxtabtt);
                let temp16alen =
                    scale_expansion_zeroelim(&cxtabtt[..cxtabttlen], 2.0 * cdx, &mut temp16a);
                let temp16blen =
                    scale_expansion_zeroelim(&cxtabtt[..cxtabttlen], cdxtail, &mut temp16b);
                let temp32blen = fast_expansion_sum_zeroelim(
                    &temp16a[..temp16alen],
                    &temp16b[..temp16blen],
                    &mut temp32b,
                );
                let temp64len = fast_expansion_sum_zeroelim(
                    &temp32a[..temp32alen],
                    &temp32b[..temp32blen],
                    &mut temp64,
                );
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp64[..temp64len],
                    &mut fin2,
                );
                core::mem::swap(&mut fin1, &mut fin2);
            }
            if cdytail != 0.0 {
                let temp16alen =
                    scale_expansion_zeroelim(&cytab[..cytablen], cdytail, &mut temp16a);
                let mut cytabt = [0f64; 16];
                let cytabtlen = scale_expansion_zeroelim(&abt[..abtlen], cdytail, &mut cytabt);
                let temp32alen =
                    scale_expansion_zeroelim(&cytabt[..cytabtlen], 2.0 * cdy, &mut temp32a);
                let temp48len = fast_expansion_sum_zeroelim(
                    &temp16a[..temp16alen],
                    &temp32a[..temp32alen],
                    &mut temp48,
                );
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp48[..temp48len],
                    &mut fin2,
                );
                core::mem::swap(&mut fin1, &mut fin2);

                let temp32alen =
                    scale_expansion_zeroelim(&cytabt[..cytabtlen], cdytail, &mut temp32a);
                let mut cytabtt = [0f64; 8];
                let cytabttlen = scale_expansion_zeroelim(&abtt[..abttlen], cdytail, &mut cytabtt);
                let temp16alen =
                    scale_expansion_zeroelim(&cytabtt[..cytabttlen], 2.0 * cdy, &mut temp16a);
                let temp16blen =
                    scale_expansion_zeroelim(&cytabtt[..cytabttlen], cdytail, &mut temp16b);
                let temp32blen = fast_expansion_sum_zeroelim(
                    &temp16a[..temp16alen],
                    &temp16b[..temp16blen],
                    &mut temp32b,
                );
                let temp64len = fast_expansion_sum_zeroelim(
                    &temp32a[..temp32alen],
                    &temp32b[..temp32blen],
                    &mut temp64,
                );
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp64[..temp64len],
                    &mut fin2,
                );
                core::mem::swap(&mut fin1, &mut fin2);
            }
        }
        fin1[finlength - 1]
    }
}

/// The cross product `p x q` as a four-component expansion.
fn cross_expansion(px: f64, py: f64, qx: f64, qy: f64) -> [f64; 4] {
    let (pxqy1, pxqy0) = two_product(px, qy);
    let (qxpy1, qxpy0) = two_product(qx, py);
    let (x3, x2, x1, x0) = two_two_diff(pxqy1, pxqy0, qxpy1, qxpy0);
    [x0, x1, x2, x3]
}

/// Always-exact in-circle test over the raw (untranslated) four-by-four
/// lifted determinant. Never takes an approximate early exit, so it needs no
/// error-bound context; it exists as an independent cross-check for the
/// adaptive path and is not part of the fast call chain.
pub fn incircle_exact(pa: Point2, pb: Point2, pc: Point2, pd: Point2) -> f64 {
    let ab = cross_expansion(pa[0], pa[1], pb[0], pb[1]);
    let bc = cross_expansion(pb[0], pb[1], pc[0], pc[1]);
    let cd = cross_expansion(pc[0], pc[1], pd[0], pd[1]);
    let da = cross_expansion(pd[0], pd[1], pa[0], pa[1]);
    let ac = cross_expansion(pa[0], pa[1], pc[0], pc[1]);
    let bd = cross_expansion(pb[0], pb[1], pd[0], pd[1]);

    // Minors over the ones column: [pqr] = pq + qr + rp.
    let mut temp8 = [0f64; 8];
    let mut cda = [0f64; 12];
    let mut dab = [0f64; 12];
    let mut abc = [0f64; 12];
    let mut bcd = [0f64; 12];
    let temp8len = fast_expansion_sum_zeroelim(&cd, &da, &mut temp8);
    let cdalen = fast_expansion_sum_zeroelim(&temp8[..temp8len], &ac, &mut cda);
    let temp8len = fast_expansion_sum_zeroelim(&da, &ab, &mut temp8);
    let dablen = fast_expansion_sum_zeroelim(&temp8[..temp8len], &bd, &mut dab);
    let bdneg = [-bd[0], -bd[1], -bd[2], -bd[3]];
    let acneg = [-ac[0], -ac[1], -ac[2], -ac[3]];
    let temp8len = fast_expansion_sum_zeroelim(&ab, &bc, &mut temp8);
    let abclen = fast_expansion_sum_zeroelim(&temp8[..temp8len], &acneg, &mut abc);
    let temp8len = fast_expansion_sum_zeroelim(&bc, &cd, &mut temp8);
    let bcdlen = fast_expansion_sum_zeroelim(&temp8[..temp8len], &bdneg, &mut bcd);

    // Scale each minor by the matching point's lifted coordinate; the
    // alternating cofactor signs are folded into the second scaling factor.
    let mut temp24 = [0f64; 24];
    let mut det48x = [0f64; 48];
    let mut det48y = [0f64; 48];
    let mut adet = [0f64; 96];
    let mut bdet = [0f64; 96];
    let mut cdet = [0f64; 96];
    let mut ddet = [0f64; 96];

    let mut xlen = scale_expansion_zeroelim(&bcd[..bcdlen], pa[0], &mut temp24);
    xlen = scale_expansion_zeroelim(&temp24[..xlen], pa[0], &mut det48x);
    let mut ylen = scale_expansion_zeroelim(&bcd[..bcdlen], pa[1], &mut temp24);
    ylen = scale_expansion_zeroelim(&temp24[..ylen], pa[1], &mut det48y);
    let alen = fast_expansion_sum_zeroelim(&det48x[..xlen], &det48y[..ylen], &mut adet);

    let mut xlen = scale_expansion_zeroelim(&cda[..cdalen], pb[0], &mut temp24);
    xlen = scale_expansion_zeroelim(&temp24[..xlen], -pb[0], &mut det48x);
    let mut ylen = scale_expansion_zeroelim(&cda[..cdalen], pb[1], &mut temp24);
    ylen = scale_expansion_zeroelim(&temp24[..ylen], -pb[1], &mut det48y);
    let blen = fast_expansion_sum_zeroelim(&det48x[..xlen], &det48y[..ylen], &mut bdet);

    let mut xlen = scale_expansion_zeroelim(&dab[..dablen], pc[0], &mut temp24);
    xlen = scale_expansion_zeroelim(&temp24[..xlen], pc[0], &mut det48x);
    let mut ylen = scale_expansion_zeroelim(&dab[..dablen], pc[1], &mut temp24);
    ylen = scale_expansion_zeroelim(&temp24[..ylen], pc[1], &mut det48y);
    let clen = fast_expansion_sum_zeroelim(&det48x[..xlen], &det48y[..ylen], &mut cdet);

    let mut xlen = scale_expansion_zeroelim(&abc[..abclen], pd[0], &mut temp24);
    xlen = scale_expansion_zeroelim(&temp24[..xlen], -pd[0], &mut det48x);
    let mut ylen = scale_expansion_zeroelim(&abc[..abclen], pd[1], &mut temp24);
    ylen = scale_expansion_zeroelim(&temp24[..ylen], -pd[1], &mut det48y);
    let dlen = fast_expansion_sum_zeroelim(&det48x[..xlen], &det48y[..ylen], &mut ddet);

    let mut abdet = [0f64; 192];
    let mut cddet = [0f64; 192];
    let mut deter = [0f64; 384];
    let ablen = fast_expansion_sum_zeroelim(&adet[..alen], &bdet[..blen], &mut abdet);
    let cdlen = fast_expansion_sum_zeroelim(&cdet[..clen], &ddet[..dlen], &mut cddet);
    let deterlen = fast_expansion_sum_zeroelim(&abdet[..ablen], &cddet[..cdlen], &mut deter);
    deter[deterlen - 1]
}

/// Exact product of two expansions by repeated scaling and merging.
/// `e` may hold at most 16 components and `f` at most 16; the accumulator
/// bound is `2 * len(e) * len(f) <= 512`.
fn expansion_product(e: &[f64], f: &[f64], h: &mut [f64; 512]) -> usize {
    let mut swap = [0f64; 512];
    let mut scaled = [0f64; 32];
    h[0] = 0.0;
    let mut hlen = 1;
    for &b in f {
        if b == 0.0 {
            continue;
        }
        let scaledlen = scale_expansion_zeroelim(e, b, &mut scaled);
        let newlen = fast_expansion_sum_zeroelim(&h[..hlen], &scaled[..scaledlen], &mut swap);
        core::mem::swap(h, &mut swap);
        hlen = newlen;
    }
    hlen
}

/// Slow but exact in-circle test that recomputes the determinant from fully
/// expanded point differences (head plus round-off tail), sharing no partial
/// results with the adaptive path. Present purely so the test suite and
/// benchmarks have a second, structurally independent exact formulation to
/// compare against.
pub fn incircle_slow(pa: Point2, pb: Point2, pc: Point2, pd: Point2) -> f64 {
    let (adx, adxtail) = two_diff(pa[0], pd[0]);
    let (ady, adytail) = two_diff(pa[1], pd[1]);
    let (bdx, bdxtail) = two_diff(pb[0], pd[0]);
    let (bdy, bdytail) = two_diff(pb[1], pd[1]);
    let (cdx, cdxtail) = two_diff(pc[0], pd[0]);
    let (cdy, cdytail) = two_diff(pc[1], pd[1]);

    let mut axby = [0f64; 8];
    let mut bxay = [0f64; 8];
    let mut bxcy = [0f64; 8];
    let mut cxby = [0f64; 8];
    let mut cxay = [0f64; 8];
    let mut axcy = [0f64; 8];
    let axbylen = two_two_product(adx, adxtail, bdy, bdytail, &mut axby);
    let bxaylen = two_two_product(bdx, bdxtail, ady, adytail, &mut bxay);
    let bxcylen = two_two_product(bdx, bdxtail, cdy, cdytail, &mut bxcy);
    let cxbylen = two_two_product(cdx, cdxtail, bdy, bdytail, &mut cxby);
    let cxaylen = two_two_product(cdx, cdxtail, ady, adytail, &mut cxay);
    let axcylen = two_two_product(adx, adxtail, cdy, cdytail, &mut axcy);
    for component in &mut bxay[..bxaylen] {
        *component = -*component;
    }
    for component in &mut cxby[..cxbylen] {
        *component = -*component;
    }
    for component in &mut axcy[..axcylen] {
        *component = -*component;
    }

    let mut ab = [0f64; 16];
    let mut bc = [0f64; 16];
    let mut ca = [0f64; 16];
    let ablen = fast_expansion_sum_zeroelim(&axby[..axbylen], &bxay[..bxaylen], &mut ab);
    let bclen = fast_expansion_sum_zeroelim(&bxcy[..bxcylen], &cxby[..cxbylen], &mut bc);
    let calen = fast_expansion_sum_zeroelim(&cxay[..cxaylen], &axcy[..axcylen], &mut ca);

    let mut axx = [0f64; 8];
    let mut ayy = [0f64; 8];
    let mut alift = [0f64; 16];
    let axxlen = two_two_product(adx, adxtail, adx, adxtail, &mut axx);
    let ayylen = two_two_product(ady, adytail, ady, adytail, &mut ayy);
    let aliftlen = fast_expansion_sum_zeroelim(&axx[..axxlen], &ayy[..ayylen], &mut alift);

    let mut bxx = [0f64; 8];
    let mut byy = [0f64; 8];
    let mut blift = [0f64; 16];
    let bxxlen = two_two_product(bdx, bdxtail, bdx, bdxtail, &mut bxx);
    let byylen = two_two_product(bdy, bdytail, bdy, bdytail, &mut byy);
    let bliftlen = fast_expansion_sum_zeroelim(&bxx[..bxxlen], &byy[..byylen], &mut blift);

    let mut cxx = [0f64; 8];
    let mut cyy = [0f64; 8];
    let mut clift = [0f64; 16];
    let cxxlen = two_two_product(cdx, cdxtail, cdx, cdxtail, &mut cxx);
    let cyylen = two_two_product(cdy, cdytail, cdy, cdytail, &mut cyy);
    let cliftlen = fast_expansion_sum_zeroelim(&cxx[..cxxlen], &cyy[..cyylen], &mut clift);

    let mut adet = [0f64; 512];
    let mut bdet = [0f64; 512];
    let mut cdet = [0f64; 512];
    let alen = expansion_product(&alift[..aliftlen], &bc[..bclen], &mut adet);
    let blen = expansion_product(&blift[..bliftlen], &ca[..calen], &mut bdet);
    let clen = expansion_product(&clift[..cliftlen], &ab[..ablen], &mut cdet);

    let mut abdet = [0f64; 1024];
    let mut deter = [0f64; 1536];
    let ablen = fast_expansion_sum_zeroelim(&adet[..alen], &bdet[..blen], &mut abdet);
    let deterlen = fast_expansion_sum_zeroelim(&abdet[..ablen], &cdet[..clen], &mut deter);
    deter[deterlen - 1]
}
