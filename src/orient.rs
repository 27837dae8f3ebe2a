// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Line-side and plane-side orientation tests.

use crate::arithmetic::{abs, two_diff_tail, two_one_product, two_product, two_two_diff};
use crate::context::PredicateContext;
use crate::expansion::{estimate, fast_expansion_sum_zeroelim, scale_expansion_zeroelim};
use crate::{Point2, Point3};

impl PredicateContext {
    /// Returns a positive value if `pa`, `pb` and `pc` occur in
    /// counterclockwise order (`pc` lies to the left of the directed line
    /// `pa -> pb`), a negative value if they occur in clockwise order, and
    /// exactly `0.0` if they are collinear.
    pub fn orient2d(&self, pa: Point2, pb: Point2, pc: Point2) -> f64 {
        let detleft = (pa[0] - pc[0]) * (pb[1] - pc[1]);
        let detright = (pa[1] - pc[1]) * (pb[0] - pc[0]);
        let det = detleft - detright;

        let detsum = if detleft > 0.0 {
            if detright <= 0.0 {
                return det;
            }
            detleft + detright
        } else if detleft < 0.0 {
            if detright >= 0.0 {
                return det;
            }
            -detleft - detright
        } else {
            return det;
        };

        let errbound = self.ccwerrbound_a * detsum;
        if det >= errbound || -det >= errbound {
            return det;
        }

        self.orient2d_adapt(pa, pb, pc, detsum)
    }

    fn orient2d_adapt(&self, pa: Point2, pb: Point2, pc: Point2, detsum: f64) -> f64 {
        let acx = pa[0] - pc[0];
        let bcx = pb[0] - pc[0];
        let acy = pa[1] - pc[1];
        let bcy = pb[1] - pc[1];

        let (detleft, detlefttail) = two_product(acx, bcy);
        let (detright, detrighttail) = two_product(acy, bcx);

        let (b3, b2, b1, b0) = two_two_diff(detleft, detlefttail, detright, detrighttail);
        let b = [b0, b1, b2, b3];

        let mut det = estimate(&b);
        let errbound = self.ccwerrbound_b * detsum;
        if det >= errbound || -det >= errbound {
            return det;
        }

        let acxtail = two_diff_tail(pa[0], pc[0], acx);
        let bcxtail = two_diff_tail(pb[0], pc[0], bcx);
        let acytail = two_diff_tail(pa[1], pc[1], acy);
        let bcytail = two_diff_tail(pb[1], pc[1], bcy);

        if acxtail == 0.0 && acytail == 0.0 && bcxtail == 0.0 && bcytail == 0.0 {
            return det;
        }

        let errbound = self.ccwerrbound_c * detsum + self.resulterrbound * abs(det);
        det += (acx * bcytail + bcy * acxtail) - (acy * bcxtail + bcx * acytail);
        if det >= errbound || -det >= errbound {
            return det;
        }

        let (s1, s0) = two_product(acxtail, bcy);
        let (t1, t0) = two_product(acytail, bcx);
        let (u3, u2, u1, u0) = two_two_diff(s1, s0, t1, t0);
        let u = [u0, u1, u2, u3];
        let mut c1 = [0f64; 8];
        let c1len = fast_expansion_sum_zeroelim(&b, &u, &mut c1);

        let (s1, s0) = two_product(acx, bcytail);
        let (t1, t0) = two_product(acy, bcxtail);
        let (u3, u2, u1, u0) = two_two_diff(s1, s0, t1, t0);
        let u = [u0, u1, u2, u3];
        let mut c2 = [0f64; 12];
        let c2len = fast_expansion_sum_zeroelim(&c1[..c1len], &u, &mut c2);

        let (s1, s0) = two_product(acxtail, bcytail);
        let (t1, t0) = two_product(acytail, bcxtail);
        let (u3, u2, u1, u0) = two_two_diff(s1, s0, t1, t0);
        let u = [u0, u1, u2, u3];
        let mut d = [0f64; 16];
        let dlen = fast_expansion_sum_zeroelim(&c2[..c2len], &u, &mut d);
        d[dlen - 1]
    }

    /// Returns a positive value if `pd` lies below the plane through `pa`,
    /// `pb` and `pc` ("below" meaning the three appear counterclockwise when
    /// viewed from above), a negative value if it lies above, and exactly
    /// `0.0` if the four points are coplanar.
    pub fn orient3d(&self, pa: Point3, pb: Point3, pc: Point3, pd: Point3) -> f64 {
        let adx = pa[0] - pd[0];
        let bdx = pb[0] - pd[0];
        let cdx = pc[0] - pd[0];
        let ady = pa[1] - pd[1];
        let bdy = pb[1] - pd[1];
        let cdy = pc[1] - pd[1];
        let adz = pa[2] - pd[2];
        let bdz = pb[2] - pd[2];
        let cdz = pc[2] - pd[2];

        let bdxcdy = bdx * cdy;
        let cdxbdy = cdx * bdy;

        let cdxady = cdx * ady;
        let adxcdy = adx * cdy;

        let adxbdy = adx * bdy;
        let bdxady = bdx * ady;

        let det = adz * (bdxcdy - cdxbdy) + bdz * (cdxady - adxcdy) + cdz * (adxbdy - bdxady);

        // Input-independent filter: one comparison settles almost every
        // well-separated configuration within the context's bounds.
        if det > self.o3d_static_filter || -det > self.o3d_static_filter {
            return det;
        }

        let permanent = (abs(bdxcdy) + abs(cdxbdy)) * abs(adz)
            + (abs(cdxady) + abs(adxcdy)) * abs(bdz)
            + (abs(adxbdy) + abs(bdxady)) * abs(cdz);

        let errbound = self.o3derrbound_a * permanent;
        if det > errbound || -det > errbound {
            return det;
        }

        self.orient3d_adapt(pa, pb, pc, pd, permanent)
    }

    fn orient3d_adapt(
        &self,
        pa: Point3,
        pb: Point3,
        pc: Point3,
        pd: Point3,
        permanent: f64,
    ) -> f64 {
        let adx = pa[0] - pd[0];
        let bdx = pb[0] - pd[0];
        let cdx = pc[0] - pd[0];
        let ady = pa[1] - pd[1];
        let bdy = pb[1] - pd[1];
        let cdy = pc[1] - pd[1];
        let adz = pa[2] - pd[2];
        let bdz = pb[2] - pd[2];
        let cdz = pc[2] - pd[2];

        let (bdxcdy1, bdxcdy0) = two_product(bdx, cdy);
        let (cdxbdy1, cdxbdy0) = two_product(cdx, bdy);
        let (bc3, bc2, bc1, bc0) = two_two_diff(bdxcdy1, bdxcdy0, cdxbdy1, cdxbdy0);
        let bc = [bc0, bc1, bc2, bc3];
        let mut adet = [0f64; 8];
        let alen = scale_expansion_zeroelim(&bc, adz, &mut adet);

        let (cdxady1, cdxady0) = two_product(cdx, ady);
        let (adxcdy1, adxcdy0) = two_product(adx, cdy);
        let (ca3, ca2, ca1, ca0) = two_two_diff(cdxady1, cdxady0, adxcdy1, adxcdy0);
        let ca = [ca0, ca1, ca2, ca3];
        let mut bdet = [0f64; 8];
        let blen = scale_expansion_zeroelim(&ca, bdz, &mut bdet);

        let (adxbdy1, adxbdy0) = two_product(adx, bdy);
        let (bdxady1, bdxady0) = two_product(bdx, ady);
        let (ab3, ab2, ab1, ab0) = two_two_diff(adxbdy1, adxbdy0, bdxady1, bdxady0);
        let ab = [ab0, ab1, ab2, ab3];
        let mut cdet = [0f64; 8];
        let clen = scale_expansion_zeroelim(&ab, cdz, &mut cdet);

        let mut abdet = [0f64; 16];
        let ablen = fast_expansion_sum_zeroelim(&adet[..alen], &bdet[..blen], &mut abdet);
        let mut fin1 = [0f64; 192];
        let mut finlength = fast_expansion_sum_zeroelim(&abdet[..ablen], &cdet[..clen], &mut fin1);

        let mut det = estimate(&fin1[..finlength]);
        let mut errbound = self.o3derrbound_b * permanent;
        if det >= errbound || -det >= errbound {
            return det;
        }

        let adxtail = two_diff_tail(pa[0], pd[0], adx);
        let bdxtail = two_diff_tail(pb[0], pd[0], bdx);
        let cdxtail = two_diff_tail(pc[0], pd[0], cdx);
        let adytail = two_diff_tail(pa[1], pd[1], ady);
        let bdytail = two_diff_tail(pb[1], pd[1], bdy);
        let cdytail = two_diff_tail(pc[1], pd[1], cdy);
        let adztail = two_diff_tail(pa[2], pd[2], adz);
        let bdztail = two_diff_tail(pb[2], pd[2], bdz);
        let cdztail = two_diff_tail(pc[2], pd[2], cdz);

        if adxtail == 0.0
            && bdxtail == 0.0
            && cdxtail == 0.0
            && adytail == 0.0
            && bdytail == 0.0
            && cdytail == 0.0
            && adztail == 0.0
            && bdztail == 0.0
            && cdztail == 0.0
        {
            return det;
        }

        errbound = self.o3derrbound_c * permanent + self.resulterrbound * abs(det);
        det += (adz * ((bdx * cdytail + cdy * bdxtail) - (bdy * cdxtail + cdx * bdytail))
            + adztail * (bdx * cdy - bdy * cdx))
            + (bdz * ((cdx * adytail + ady * cdxtail) - (cdy * adxtail + adx * cdytail))
                + bdztail * (cdx * ady - cdy * adx))
            + (cdz * ((adx * bdytail + bdy * adxtail) - (ady * bdxtail + bdx * adytail))
                + cdztail * (adx * bdy - ady * bdx));
        if det >= errbound || -det >= errbound {
            return det;
        }

        let mut finnow = fin1;
        let mut finother = [0f64; 192];

        let mut at_b = [0f64; 4];
        let mut at_c = [0f64; 4];
        let mut bt_c = [0f64; 4];
        let mut bt_a = [0f64; 4];
        let mut ct_a = [0f64; 4];
        let mut ct_b = [0f64; 4];
        let at_blen: usize;
        let at_clen: usize;
        let bt_clen: usize;
        let bt_alen: usize;
        let ct_alen: usize;
        let ct_blen: usize;
        if adxtail == 0.0 {
            if adytail == 0.0 {
                at_b[0] = 0.0;
                at_blen = 1;
                at_c[0] = 0.0;
                at_clen = 1;
            } else {
                let negate = -adytail;
                (at_b[1], at_b[0]) = two_product(negate, bdx);
                at_blen = 2;
                (at_c[1], at_c[0]) = two_product(adytail, cdx);
                at_clen = 2;
            }
        } else if adytail == 0.0 {
            (at_b[1], at_b[0]) = two_product(adxtail, bdy);
            at_blen = 2;
            let negate = -adxtail;
            (at_c[1], at_c[0]) = two_product(negate, cdy);
            at_clen = 2;
        } else {
            let (adxt_bdy1, adxt_bdy0) = two_product(adxtail, bdy);
            let (adyt_bdx1, adyt_bdx0) = two_product(adytail, bdx);
            (at_b[3], at_b[2], at_b[1], at_b[0]) =
                two_two_diff(adxt_bdy1, adxt_bdy0, adyt_bdx1, adyt_bdx0);
            at_blen = 4;
            let (adyt_cdx1, adyt_cdx0) = two_product(adytail, cdx);
            let (adxt_cdy1, adxt_cdy0) = two_product(adxtail, cdy);
            (at_c[3], at_c[2], at_c[1], at_c[0]) =
                two_two_diff(adyt_cdx1, adyt_cdx0, adxt_cdy1, adxt_cdy0);
            at_clen = 4;
        }
        if bdxtail == 0.0 {
            if bdytail == 0.0 {
                bt_c[0] = 0.0;
                bt_clen = 1;
                bt_a[0] = 0.0;
                bt_alen = 1;
            } else {
                let negate = -bdytail;
                (bt_c[1], bt_c[0]) = two_product(negate, cdx);
                bt_clen = 2;
                (bt_a[1], bt_a[0]) = two_product(bdytail, adx);
                bt_alen = 2;
            }
        } else if bdytail == 0.0 {
            (bt_c[1], bt_c[0]) = two_product(bdxtail, cdy);
            bt_clen = 2;
            let negate = -bdxtail;
            (bt_a[1], bt_a[0]) = two_product(negate, ady);
            bt_alen = 2;
        } else {
            let (bdxt_cdy1, bdxt_cdy0) = two_product(bdxtail, cdy);
            let (bdyt_cdx1, bdyt_cdx0) = two_product(bdytail, cdx);
            (bt_c[3], bt_c[2], bt_c[1], bt_c[0]) =
                two_two_diff(bdxt_cdy1, bdxt_cdy0, bdyt_cdx1, bdyt_cdx0);
            bt_clen = 4;
            let (bdyt_adx1, bdyt_adx0) = two_product(bdytail, adx);
            let (bdxt_ady1, bdxt_ady0) = two_product(bdxtail, ady);
            (bt_a[3], bt_a[2], bt_a[1], bt_a[0]) =
                two_two_diff(bdyt_adx1, bdyt_adx0, bdxt_ady1, bdxt_ady0);
            bt_alen = 4;
        }
        if cdxtail == 0.0 {
            if cdytail == 0.0 {
                ct_a[0] = 0.0;
                ct_alen = 1;
                ct_b[0] = 0.0;
                ct_blen = 1;
            } else {
                let negate = -cdytail;
                (ct_a[1], ct_a[0]) = two_product(negate, adx);
                ct_alen = 2;
                (ct_b[1], ct_b[0]) = two_product(cdytail, bdx);
                ct_blen = 2;
            }
        } else if cdytail == 0.0 {
            (ct_a[1], ct_a[0]) = two_product(cdxtail, ady);
            ct_alen = 2;
            let negate = -cdxtail;
            (ct_b[1], ct_b[0]) = two_product(negate, bdy);
            ct_blen = 2;
        } else {
            let (cdxt_ady1, cdxt_ady0) = two_product(cdxtail, ady);
            let (cdyt_adx1, cdyt_adx0) = two_product(cdytail, adx);
            (ct_a[3], ct_a[2], ct_a[1], ct_a[0]) =
                two_two_diff(cdxt_ady1, cdxt_ady0, cdyt_adx1, cdyt_adx0);
            ct_alen = 4;
            let (cdyt_bdx1, cdyt_bdx0) = two_product(cdytail, bdx);
            let (cdxt_bdy1, cdxt_bdy0) = two_product(cdxtail, bdy);
            (ct_b[3], ct_b[2], ct_b[1], ct_b[0]) =
                two_two_diff(cdyt_bdx1, cdyt_bdx0, cdxt_bdy1, cdxt_bdy0);
            ct_blen = 4;
        }

        let mut bct = [0f64; 8];
        let mut cat = [0f64; 8];
        let mut abt = [0f64; 8];
        let mut u = [0f64; 4];
        let mut v = [0f64; 12];
        let mut w = [0f64; 16];
        let mut vlength: usize;
        let mut wlength: usize;

        let bctlen = fast_expansion_sum_zeroelim(&bt_c[..bt_clen], &ct_b[..ct_blen], &mut bct);
        wlength = scale_expansion_zeroelim(&bct[..bctlen], adz, &mut w);
        let mut finlength =
            fast_expansion_sum_zeroelim(&finnow[..finlength], &w[..wlength], &mut finother);
        core::mem::swap(&mut finnow, &mut finother);

        let catlen = fast_expansion_sum_zeroelim(&ct_a[..ct_alen], &at_c[..at_clen], &mut cat);
        wlength = scale_expansion_zeroelim(&cat[..catlen], bdz, &mut w);
        finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &w[..wlength], &mut finother);
        core::mem::swap(&mut finnow, &mut finother);

        let abtlen = fast_expansion_sum_zeroelim(&at_b[..at_blen], &bt_a[..bt_alen], &mut abt);
        wlength = scale_expansion_zeroelim(&abt[..abtlen], cdz, &mut w);
        finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &w[..wlength], &mut finother);
        core::mem::swap(&mut finnow, &mut finother);

        if adztail != 0.0 {
            vlength = scale_expansion_zeroelim(&bc, adztail, &mut v);
            finlength =
                fast_expansion_sum_zeroelim(&finnow[..finlength], &v[..vlength], &mut finother);
            core::mem::swap(&mut finnow, &mut finother);
        }
        if bdztail != 0.0 {
            vlength = scale_expansion_zeroelim(&ca, bdztail, &mut v);
            finlength =
                fast_expansion_sum_zeroelim(&finnow[..finlength], &v[..vlength], &mut finother);
            core::mem::swap(&mut finnow, &mut finother);
        }
        if cdztail != 0.0 {
            vlength = scale_expansion_zeroelim(&ab, cdztail, &mut v);
            finlength =
                fast_expansion_sum_zeroelim(&finnow[..finlength], &v[..vlength], &mut finother);
            core::mem::swap(&mut finnow, &mut finother);
        }

        if adxtail != 0.0 {
            if bdytail != 0.0 {
                let (adxt_bdyt1, adxt_bdyt0) = two_product(adxtail, bdytail);
                (u[3], u[2], u[1], u[0]) = two_one_product(adxt_bdyt1, adxt_bdyt0, cdz);
                finlength =
                    fast_expansion_sum_zeroelim(&finnow[..finlength], &u, &mut finother);
                core::mem::swap(&mut finnow, &mut finother);
                if cdztail != 0.0 {
                    (u[3], u[2], u[1], u[0]) = two_one_product(adxt_bdyt1, adxt_bdyt0, cdztail);
                    finlength =
                        fast_expansion_sum_zeroelim(&finnow[..finlength], &u, &mut finother);
                    core::mem::swap(&mut finnow, &mut finother);
                }
            }
            if cdytail != 0.0 {
                let negate = -adxtail;
                let (adxt_cdyt1, adxt_cdyt0) = two_product(negate, cdytail);
                (u[3], u[2], u[1], u[0]) = two_one_product(adxt_cdyt1, adxt_cdyt0, bdz);
                finlength =
                    fast_expansion_sum_zeroelim(&finnow[..finlength], &u, &mut finother);
                core::mem::swap(&mut finnow, &mut finother);
                if bdztail != 0.0 {
                    (u[3], u[2], u[1], u[0]) = two_one_product(adxt_cdyt1, adxt_cdyt0, bdztail);
                    finlength =
                        fast_expansion_sum_zeroelim(&finnow[..finlength], &u, &mut finother);
                    core::mem::swap(&mut finnow, &mut finother);
                }
            }
        }
        if bdxtail != 0.0 {
            if cdytail != 0.0 {
                let (bdxt_cdyt1, bdxt_cdyt0) = two_product(bdxtail, cdytail);
                (u[3], u[2], u[1], u[0]) = two_one_product(bdxt_cdyt1, bdxt_cdyt0, adz);
                finlength =
                    fast_expansion_sum_zeroelim(&finnow[..finlength], &u, &mut finother);
                core::mem::swap(&mut finnow, &mut finother);
                if adztail != 0.0 {
                    (u[3], u[2], u[1], u[0]) = two_one_product(bdxt_cdyt1, bdxt_cdyt0, adztail);
                    finlength =
                        fast_expansion_sum_zeroelim(&finnow[..finlength], &u, &mut finother);
                    core::mem::swap(&mut finnow, &mut finother);
                }
            }
            if adytail != 0.0 {
                let negate = -bdxtail;
                let (bdxt_adyt1, bdxt_adyt0) = two_product(negate, adytail);
                (u[3], u[2], u[1], u[0]) = two_one_product(bdxt_adyt1, bdxt_adyt0, cdz);
                finlength =
                    fast_expansion_sum_zeroelim(&finnow[..finlength], &u, &mut finother);
                core::mem::swap(&mut finnow, &mut finother);
                if cdztail != 0.0 {
                    (u[3], u[2], u[1], u[0]) = two_one_product(bdxt_adyt1, bdxt_adyt0, cdztail);
                    finlength =
                        fast_expansion_sum_zeroelim(&finnow[..finlength], &u, &mut finother);
                    core::mem::swap(&mut finnow, &mut finother);
                }
            }
        }
        if cdxtail != 0.0 {
            if adytail != 0.0 {
                let (cdxt_adyt1, cdxt_adyt0) = two_product(cdxtail, adytail);
                (u[3], u[2], u[1], u[0]) = two_one_product(cdxt_adyt1, cdxt_adyt0, bdz);
                finlength =
                    fast_expansion_sum_zeroelim(&finnow[..finlength], &u, &mut finother);
                core::mem::swap(&mut finnow, &mut finother);
                if bdztail != 0.0 {
                    (u[3], u[2], u[1], u[0]) = two_one_product(cdxt_adyt1, cdxt_adyt0, bdztail);
                    finlength =
                        fast_expansion_sum_zeroelim(&finnow[..finlength], &u, &mut finother);
                    core::mem::swap(&mut finnow, &mut finother);
                }
            }
            if bdytail != 0.0 {
                let negate = -cdxtail;
                let (cdxt_bdyt1, cdxt_bdyt0) = two_product(negate, bdytail);
                (u[3], u[2], u[1], u[0]) = two_one_product(cdxt_bdyt1, cdxt_bdyt0, adz);
                finlength =
                    fast_expansion_sum_zeroelim(&finnow[..finlength], &u, &mut finother);
                core::mem::swap(&mut finnow, &mut finother);
                if adztail != 0.0 {
                    (u[3], u[2], u[1], u[0]) = two_one_product(cdxt_bdyt1, cdxt_bdyt0, adztail);
                    finlength =
                        fast_expansion_sum_zeroelim(&finnow[..finlength], &u, &mut finother);
                    core::mem::swap(&mut finnow, &mut finother);
                }
            }
        }

        if adztail != 0.0 {
            wlength = scale_expansion_zeroelim(&bct[..bctlen], adztail, &mut w);
            finlength =
                fast_expansion_sum_zeroelim(&finnow[..finlength], &w[..wlength], &mut finother);
            core::mem::swap(&mut finnow, &mut finother);
        }
        if bdztail != 0.0 {
            wlength = scale_expansion_zeroelim(&cat[..catlen], bdztail, &mut w);
            finlength =
                fast_expansion_sum_zeroelim(&finnow[..finlength], &w[..wlength], &mut finother);
            core::mem::swap(&mut finnow, &mut finother);
        }
        if cdztail != 0.0 {
            wlength = scale_expansion_zeroelim(&abt[..abtlen], cdztail, &mut w);
            finlength =
                fast_expansion_sum_zeroelim(&finnow[..finlength], &w[..wlength], &mut finother);
            core::mem::swap(&mut finnow, &mut finother);
        }

        finnow[finlength - 1]
    }
}
