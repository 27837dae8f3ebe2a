// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-sphere test over the five-by-five lifted-paraboloid determinant.

use crate::arithmetic::{abs, two_diff_tail, two_product, two_two_diff};
use crate::context::PredicateContext;
use crate::expansion::{estimate, fast_expansion_sum_zeroelim, scale_expansion_zeroelim};
use crate::Point3;

impl PredicateContext {
    /// Returns a positive value if `pe` lies inside the sphere through `pa`,
    /// `pb`, `pc` and `pd`, a negative value if it lies outside, and exactly
    /// `0.0` if the five points are cospherical.
    ///
    /// `pa`, `pb`, `pc` and `pd` must be ordered with positive orientation
    /// (as by [`PredicateContext::orient3d`]), or the sign of the result is
    /// reversed. This is a caller contract and is not validated.
    pub fn insphere(&self, pa: Point3, pb: Point3, pc: Point3, pd: Point3, pe: Point3) -> f64 {
        let aex = pa[0] - pe[0];
        let bex = pb[0] - pe[0];
        let cex = pc[0] - pe[0];
        let dex = pd[0] - pe[0];
        let aey = pa[1] - pe[1];
        let bey = pb[1] - pe[1];
        let cey = pc[1] - pe[1];
        let dey = pd[1] - pe[1];
        let aez = pa[2] - pe[2];
        let bez = pb[2] - pe[2];
        let cez = pc[2] - pe[2];
        let dez = pd[2] - pe[2];

        let aexbey = aex * bey;
        let bexaey = bex * aey;
        let ab = aexbey - bexaey;
        let bexcey = bex * cey;
        let cexbey = cex * bey;
        let bc = bexcey - cexbey;
        let cexdey = cex * dey;
        let dexcey = dex * cey;
        let cd = cexdey - dexcey;
        let dexaey = dex * aey;
        let aexdey = aex * dey;
        let da = dexaey - aexdey;

        let aexcey = aex * cey;
        let cexaey = cex * aey;
        let ac = aexcey - cexaey;
        let bexdey = bex * dey;
        let dexbey = dex * bey;
        let bd = bexdey - dexbey;

        let abc = aez * bc - bez * ac + cez * ab;
        let bcd = bez * cd - cez * bd + dez * bc;
        let cda = cez * da + dez * ac + aez * cd;
        let dab = dez * ab + aez * bd + bez * da;

        let alift = aex * aex + aey * aey + aez * aez;
        let blift = bex * bex + bey * bey + bez * bez;
        let clift = cex * cex + cey * cey + cez * cez;
        let dlift = dex * dex + dey * dey + dez * dez;

        let det = (dlift * abc - clift * dab) + (blift * cda - alift * bcd);

        // Input-independent filter first; the permanent is only worth
        // computing for the configurations the filter cannot settle.
        if det > self.isp_static_filter || -det > self.isp_static_filter {
            return det;
        }

        let aezplus = abs(aez);
        let bezplus = abs(bez);
        let cezplus = abs(cez);
        let dezplus = abs(dez);
        let aexbeyplus = abs(aexbey);
        let bexaeyplus = abs(bexaey);
        let bexceyplus = abs(bexcey);
        let cexbeyplus = abs(cexbey);
        let cexdeyplus = abs(cexdey);
        let dexceyplus = abs(dexcey);
        let dexaeyplus = abs(dexaey);
        let aexdeyplus = abs(aexdey);
        let aexceyplus = abs(aexcey);
        let cexaeyplus = abs(cexaey);
        let bexdeyplus = abs(bexdey);
        let dexbeyplus = abs(dexbey);
        let permanent = ((cexdeyplus + dexceyplus) * bezplus
            + (dexbeyplus + bexdeyplus) * cezplus
            + (bexceyplus + cexbeyplus) * dezplus)
            * alift
            + ((dexaeyplus + aexdeyplus) * cezplus
                + (aexceyplus + cexaeyplus) * dezplus
                + (cexdeyplus + dexceyplus) * aezplus)
                * blift
            + ((aexbeyplus + bexaeyplus) * dezplus
                + (bexdeyplus + dexbeyplus) * aezplus
                + (dexaeyplus + aexdeyplus) * bezplus)
                * clift
            + ((bexceyplus + cexbeyplus) * aezplus
                + (cexaeyplus + aexceyplus) * bezplus
                + (aexbeyplus + bexaeyplus) * cezplus)
                * dlift;
        let errbound = self.isperrbound_a * permanent;
        if det > errbound || -det > errbound {
            return det;
        }

        self.insphere_adapt(pa, pb, pc, pd, pe, permanent)
    }

    fn insphere_adapt(
        &self,
        pa: Point3,
        pb: Point3,
        pc: Point3,
        pd: Point3,
        pe: Point3,
        permanent: f64,
    ) -> f64 {
        let aex = pa[0] - pe[0];
        let bex = pb[0] - pe[0];
        let cex = pc[0] - pe[0];
        let dex = pd[0] - pe[0];
        let aey = pa[1] - pe[1];
        let bey = pb[1] - pe[1];
        let cey = pc[1] - pe[1];
        let dey = pd[1] - pe[1];
        let aez = pa[2] - pe[2];
        let bez = pb[2] - pe[2];
        let cez = pc[2] - pe[2];
        let dez = pd[2] - pe[2];

        let (aexbey1, aexbey0) = two_product(aex, bey);
        let (bexaey1, bexaey0) = two_product(bex, aey);
        let (ab3, ab2, ab1, ab0) = two_two_diff(aexbey1, aexbey0, bexaey1, bexaey0);
        let ab = [ab0, ab1, ab2, ab3];

        let (bexcey1, bexcey0) = two_product(bex, cey);
        let (cexbey1, cexbey0) = two_product(cex, bey);
        let (bc3, bc2, bc1, bc0) = two_two_diff(bexcey1, bexcey0, cexbey1, cexbey0);
        let bc = [bc0, bc1, bc2, bc3];

        let (cexdey1, cexdey0) = two_product(cex, dey);
        let (dexcey1, dexcey0) = two_product(dex, cey);
        let (cd3, cd2, cd1, cd0) = two_two_diff(cexdey1, cexdey0, dexcey1, dexcey0);
        let cd = [cd0, cd1, cd2, cd3];

        let (dexaey1, dexaey0) = two_product(dex, aey);
        let (aexdey1, aexdey0) = two_product(aex, dey);
        let (da3, da2, da1, da0) = two_two_diff(dexaey1, dexaey0, aexdey1, aexdey0);
        let da = [da0, da1, da2, da3];

        let (aexcey1, aexcey0) = two_product(aex, cey);
        let (cexaey1, cexaey0) = two_product(cex, aey);
        let (ac3, ac2, ac1, ac0) = two_two_diff(aexcey1, aexcey0, cexaey1, cexaey0);
        let ac = [ac0, ac1, ac2, ac3];

        let (bexdey1, bexdey0) = two_product(bex, dey);
        let (dexbey1, dexbey0) = two_product(dex, bey);
        let (bd3, bd2, bd1, bd0) = two_two_diff(bexdey1, bexdey0, dexbey1, dexbey0);
        let bd = [bd0, bd1, bd2, bd3];

        let mut temp8a = [0f64; 8];
        let mut temp8b = [0f64; 8];
        let mut temp8c = [0f64; 8];
        let mut temp16 = [0f64; 16];
        let mut temp24 = [0f64; 24];
        let mut temp48 = [0f64; 48];
        let mut xdet = [0f64; 96];
        let mut ydet = [0f64; 96];
        let mut zdet = [0f64; 96];
        let mut xydet = [0f64; 192];
        let mut adet = [0f64; 288];
        let mut bdet = [0f64; 288];
        let mut cdet = [0f64; 288];
        let mut ddet = [0f64; 288];
        let mut abdet = [0f64; 576];
        let mut cddet = [0f64; 576];
        let mut fin1 = [0f64; 1152];

        let mut temp8alen = scale_expansion_zeroelim(&cd, bez, &mut temp8a);
        let mut temp8blen = scale_expansion_zeroelim(&bd, -cez, &mut temp8b);
        let mut temp8clen = scale_expansion_zeroelim(&bc, dez, &mut temp8c);
        let mut temp16len =
            fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
        let mut temp24len =
            fast_expansion_sum_zeroelim(&temp8c[..temp8clen], &temp16[..temp16len], &mut temp24);
        let mut temp48len = scale_expansion_zeroelim(&temp24[..temp24len], aex, &mut temp48);
        let mut xlen = scale_expansion_zeroelim(&temp48[..temp48len], -aex, &mut xdet);
        temp48len = scale_expansion_zeroelim(&temp24[..temp24len], aey, &mut temp48);
        let mut ylen = scale_expansion_zeroelim(&temp48[..temp48len], -aey, &mut ydet);
        temp48len = scale_expansion_zeroelim(&temp24[..temp24len], aez, &mut temp48);
        let mut zlen = scale_expansion_zeroelim(&temp48[..temp48len], -aez, &mut zdet);
        let mut xylen = fast_expansion_sum_zeroelim(&xdet[..xlen], &ydet[..ylen], &mut xydet);
        let alen = fast_expansion_sum_zeroelim(&xydet[..xylen], &zdet[..zlen], &mut adet);

        temp8alen = scale_expansion_zeroelim(&da, cez, &mut temp8a);
        temp8blen = scale_expansion_zeroelim(&ac, dez, &mut temp8b);
        temp8clen = scale_expansion_zeroelim(&cd, aez, &mut temp8c);
        temp16len =
            fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
        temp24len =
            fast_expansion_sum_zeroelim(&temp8c[..temp8clen], &temp16[..temp16len], &mut temp24);
        temp48len = scale_expansion_zeroelim(&temp24[..temp24len], bex, &mut temp48);
        xlen = scale_expansion_zeroelim(&temp48[..temp48len], bex, &mut xdet);
        temp48len = scale_expansion_zeroelim(&temp24[..temp24len], bey, &mut temp48);
        ylen = scale_expansion_zeroelim(&temp48[..temp48len], bey, &mut ydet);
        temp48len = scale_expansion_zeroelim(&temp24[..temp24len], bez, &mut temp48);
        zlen = scale_expansion_zeroelim(&temp48[..temp48len], bez, &mut zdet);
        xylen = fast_expansion_sum_zeroelim(&xdet[..xlen], &ydet[..ylen], &mut xydet);
        let blen = fast_expansion_sum_zeroelim(&xydet[..xylen], &zdet[..zlen], &mut bdet);

        temp8alen = scale_expansion_zeroelim(&ab, dez, &mut temp8a);
        temp8blen = scale_expansion_zeroelim(&bd, aez, &mut temp8b);
        temp8clen = scale_expansion_zeroelim(&da, bez, &mut temp8c);
        temp16len =
            fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
        temp24len =
            fast_expansion_sum_zeroelim(&temp8c[..temp8clen], &temp16[..temp16len], &mut temp24);
        temp48len = scale_expansion_zeroelim(&temp24[..temp24len], cex, &mut temp48);
        xlen = scale_expansion_zeroelim(&temp48[..temp48len], -cex, &mut xdet);
        temp48len = scale_expansion_zeroelim(&temp24[..temp24len], cey, &mut temp48);
        ylen = scale_expansion_zeroelim(&temp48[..temp48len], -cey, &mut ydet);
        temp48len = scale_expansion_zeroelim(&temp24[..temp24len], cez, &mut temp48);
        zlen = scale_expansion_zeroelim(&temp48[..temp48len], -cez, &mut zdet);
        xylen = fast_expansion_sum_zeroelim(&xdet[..xlen], &ydet[..ylen], &mut xydet);
        let clen = fast_expansion_sum_zeroelim(&xydet[..xylen], &zdet[..zlen], &mut cdet);

        temp8alen = scale_expansion_zeroelim(&bc, aez, &mut temp8a);
        temp8blen = scale_expansion_zeroelim(&ac, -bez, &mut temp8b);
        temp8clen = scale_expansion_zeroelim(&ab, cez, &mut temp8c);
        temp16len =
            fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
        temp24len =
            fast_expansion_sum_zeroelim(&temp8c[..temp8clen], &temp16[..temp16len], &mut temp24);
        temp48len = scale_expansion_zeroelim(&temp24[..temp24len], dex, &mut temp48);
        xlen = scale_expansion_zeroelim(&temp48[..temp48len], dex, &mut xdet);
        temp48len = scale_expansion_zeroelim(&temp24[..temp24len], dey, &mut temp48);
        ylen = scale_expansion_zeroelim(&temp48[..temp48len], dey, &mut ydet);
        temp48len = scale_expansion_zeroelim(&temp24[..temp24len], dez, &mut temp48);
        zlen = scale_expansion_zeroelim(&temp48[..temp48len], dez, &mut zdet);
        xylen = fast_expansion_sum_zeroelim(&xdet[..xlen], &ydet[..ylen], &mut xydet);
        let dlen = fast_expansion_sum_zeroelim(&xydet[..xylen], &zdet[..zlen], &mut ddet);

        let ablen = fast_expansion_sum_zeroelim(&adet[..alen], &bdet[..blen], &mut abdet);
        let cdlen = fast_expansion_sum_zeroelim(&cdet[..clen], &ddet[..dlen], &mut cddet);
        let finlength = fast_expansion_sum_zeroelim(&abdet[..ablen], &cddet[..cdlen], &mut fin1);

        let mut det = estimate(&fin1[..finlength]);
        let mut errbound = self.isperrbound_b * permanent;
        if det >= errbound || -det >= errbound {
            return det;
        }

        let aextail = two_diff_tail(pa[0], pe[0], aex);
        let aeytail = two_diff_tail(pa[1], pe[1], aey);
        let aeztail = two_diff_tail(pa[2], pe[2], aez);
        let bextail = two_diff_tail(pb[0], pe[0], bex);
        let beytail = two_diff_tail(pb[1], pe[1], bey);
        let beztail = two_diff_tail(pb[2], pe[2], bez);
        let cextail = two_diff_tail(pc[0], pe[0], cex);
        let ceytail = two_diff_tail(pc[1], pe[1], cey);
        let ceztail = two_diff_tail(pc[2], pe[2], cez);
        let dextail = two_diff_tail(pd[0], pe[0], dex);
        let deytail = two_diff_tail(pd[1], pe[1], dey);
        let deztail = two_diff_tail(pd[2], pe[2], dez);
        if aextail == 0.0
            && aeytail == 0.0
            && aeztail == 0.0
            && bextail == 0.0
            && beytail == 0.0
            && beztail == 0.0
            && cextail == 0.0
            && ceytail == 0.0
            && ceztail == 0.0
            && dextail == 0.0
            && deytail == 0.0
            && deztail == 0.0
        {
            return det;
        }

        errbound = self.isperrbound_c * permanent + self.resulterrbound * abs(det);
        let abeps = (aex * beytail + bey * aextail) - (aey * bextail + bex * aeytail);
        let bceps = (bex * ceytail + cey * bextail) - (bey * cextail + cex * beytail);
        let cdeps = (cex * deytail + dey * cextail) - (cey * dextail + dex * ceytail);
        let daeps = (dex * aeytail + aey * dextail) - (dey * aextail + aex * deytail);
        let aceps = (aex * ceytail + cey * aextail) - (aey * cextail + cex * aeytail);
        let bdeps = (bex * deytail + dey * bextail) - (bey * dextail + dex * beytail);
        det += (((bex * bex + bey * bey + bez * bez)
            * ((cez * daeps + dez * aceps + aez * cdeps)
                + (ceztail * da3 + deztail * ac3 + aeztail * cd3))
            + (dex * dex + dey * dey + dez * dez)
                * ((aez * bceps - bez * aceps + cez * abeps)
                    + (aeztail * bc3 - beztail * ac3 + ceztail * ab3)))
            - ((aex * aex + aey * aey + aez * aez)
                * ((bez * cdeps - cez * bdeps + dez * bceps)
                    + (beztail * cd3 - ceztail * bd3 + deztail * bc3))
                + (cex * cex + cey * cey + cez * cez)
                    * ((dez * abeps + aez * bdeps + bez * daeps)
                        + (deztail * ab3 + aeztail * bd3 + beztail * da3))))
            + 2.0
                * (((bex * bextail + bey * beytail + bez * beztail)
                    * (cez * da3 + dez * ac3 + aez * cd3)
                    + (dex * dextail + dey * deytail + dez * deztail)
                        * (aez * bc3 - bez * ac3 + cez * ab3))
                    - ((aex * aextail + aey * aeytail + aez * aeztail)
                        * (bez * cd3 - cez * bd3 + dez * bc3)
                        + (cex * cextail + cey * ceytail + cez * ceztail)
                            * (dez * ab3 + aez * bd3 + bez * da3)));
        if det >= errbound || -det >= errbound {
            return det;
        }

        // The tail-by-tail correction terms are too numerous to be worth
        // enumerating adaptively; past this point the always-exact
        // evaluation is the cheapest remaining option.
        insphere_exact(pa, pb, pc, pd, pe)
    }
}

/// Last-resort in-sphere evaluation over the raw coordinates, with no
/// approximate early exit. Only reachable through near- or exactly-
/// cospherical configurations that defeat every adaptive bound.
fn insphere_exact(pa: Point3, pb: Point3, pc: Point3, pd: Point3, pe: Point3) -> f64 {
    let (axby1, axby0) = two_product(pa[0], pb[1]);
    let (bxay1, bxay0) = two_product(pb[0], pa[1]);
    let (ab3, ab2, ab1, ab0) = two_two_diff(axby1, axby0, bxay1, bxay0);
    let ab = [ab0, ab1, ab2, ab3];

    let (bxcy1, bxcy0) = two_product(pb[0], pc[1]);
    let (cxby1, cxby0) = two_product(pc[0], pb[1]);
    let (bc3, bc2, bc1, bc0) = two_two_diff(bxcy1, bxcy0, cxby1, cxby0);
    let bc = [bc0, bc1, bc2, bc3];

    let (cxdy1, cxdy0) = two_product(pc[0], pd[1]);
    let (dxcy1, dxcy0) = two_product(pd[0], pc[1]);
    let (cd3, cd2, cd1, cd0) = two_two_diff(cxdy1, cxdy0, dxcy1, dxcy0);
    let cd = [cd0, cd1, cd2, cd3];

    let (dxey1, dxey0) = two_product(pd[0], pe[1]);
    let (exdy1, exdy0) = two_product(pe[0], pd[1]);
    let (de3, de2, de1, de0) = two_two_diff(dxey1, dxey0, exdy1, exdy0);
    let de = [de0, de1, de2, de3];

    let (exay1, exay0) = two_product(pe[0], pa[1]);
    let (axey1, axey0) = two_product(pa[0], pe[1]);
    let (ea3, ea2, ea1, ea0) = two_two_diff(exay1, exay0, axey1, axey0);
    let ea = [ea0, ea1, ea2, ea3];

    let (axcy1, axcy0) = two_product(pa[0], pc[1]);
    let (cxay1, cxay0) = two_product(pc[0], pa[1]);
    let (ac3, ac2, ac1, ac0) = two_two_diff(axcy1, axcy0, cxay1, cxay0);
    let ac = [ac0, ac1, ac2, ac3];

    let (bxdy1, bxdy0) = two_product(pb[0], pd[1]);
    let (dxby1, dxby0) = two_product(pd[0], pb[1]);
    let (bd3, bd2, bd1, bd0) = two_two_diff(bxdy1, bxdy0, dxby1, dxby0);
    let bd = [bd0, bd1, bd2, bd3];

    let (cxey1, cxey0) = two_product(pc[0], pe[1]);
    let (excy1, excy0) = two_product(pe[0], pc[1]);
    let (ce3, ce2, ce1, ce0) = two_two_diff(cxey1, cxey0, excy1, excy0);
    let ce = [ce0, ce1, ce2, ce3];

    let (dxay1, dxay0) = two_product(pd[0], pa[1]);
    let (axdy1, axdy0) = two_product(pa[0], pd[1]);
    let (da3, da2, da1, da0) = two_two_diff(dxay1, dxay0, axdy1, axdy0);
    let da = [da0, da1, da2, da3];

    let (exby1, exby0) = two_product(pe[0], pb[1]);
    let (bxey1, bxey0) = two_product(pb[0], pe[1]);
    let (eb3, eb2, eb1, eb0) = two_two_diff(exby1, exby0, bxey1, bxey0);
    let eb = [eb0, eb1, eb2, eb3];

    let mut temp8a = [0f64; 8];
    let mut temp8b = [0f64; 8];
    let mut temp16 = [0f64; 16];
    let mut temp48a = [0f64; 48];
    let mut temp48b = [0f64; 48];

    let mut abc = [0f64; 24];
    let mut bcd = [0f64; 24];
    let mut cde = [0f64; 24];
    let mut dea = [0f64; 24];
    let mut eab = [0f64; 24];
    let mut abd = [0f64; 24];
    let mut bce = [0f64; 24];
    let mut cda = [0f64; 24];
    let mut deb = [0f64; 24];
    let mut eac = [0f64; 24];

    let mut abcd = [0f64; 96];
    let mut bcde = [0f64; 96];
    let mut cdea = [0f64; 96];
    let mut deab = [0f64; 96];
    let mut eabc = [0f64; 96];

    let mut temp192 = [0f64; 192];
    let mut det384x = [0f64; 384];
    let mut det384y = [0f64; 384];
    let mut det384z = [0f64; 384];

    let mut detxy = [0f64; 768];

    let mut adet = [0f64; 1152];
    let mut bdet = [0f64; 1152];
    let mut cdet = [0f64; 1152];
    let mut ddet = [0f64; 1152];
    let mut edet = [0f64; 1152];

    let mut abdet = [0f64; 2304];
    let mut cddet = [0f64; 2304];
    let mut cdedet = [0f64; 3456];

    let mut deter = [0f64; 5760];

    let mut temp8alen = scale_expansion_zeroelim(&bc, pa[2], &mut temp8a);
    let mut temp8blen = scale_expansion_zeroelim(&ac, -pb[2], &mut temp8b);
    let mut temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    temp8alen = scale_expansion_zeroelim(&ab, pc[2], &mut temp8a);
    let abclen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut abc);

    temp8alen = scale_expansion_zeroelim(&cd, pb[2], &mut temp8a);
    temp8blen = scale_expansion_zeroelim(&bd, -pc[2], &mut temp8b);
    temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    temp8alen = scale_expansion_zeroelim(&bc, pd[2], &mut temp8a);
    let bcdlen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut bcd);

    temp8alen = scale_expansion_zeroelim(&de, pc[2], &mut temp8a);
    temp8blen = scale_expansion_zeroelim(&ce, -pd[2], &mut temp8b);
    temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    temp8alen = scale_expansion_zeroelim(&cd, pe[2], &mut temp8a);
    let cdelen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut cde);

    temp8alen = scale_expansion_zeroelim(&ea, pd[2], &mut temp8a);
    temp8blen = scale_expansion_zeroelim(&da, -pe[2], &mut temp8b);
    temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    temp8alen = scale_expansion_zeroelim(&de, pa[2], &mut temp8a);
    let dealen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut dea);

    temp8alen = scale_expansion_zeroelim(&ab, pe[2], &mut temp8a);
    temp8blen = scale_expansion_zeroelim(&eb, -pa[2], &mut temp8b);
    temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    temp8alen = scale_expansion_zeroelim(&ea, pb[2], &mut temp8a);
    let eablen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut eab);

    temp8alen = scale_expansion_zeroelim(&bd, pa[2], &mut temp8a);
    temp8blen = scale_expansion_zeroelim(&da, pb[2], &mut temp8b);
    temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    temp8alen = scale_expansion_zeroelim(&ab, pd[2], &mut temp8a);
    let abdlen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut abd);

    temp8alen = scale_expansion_zeroelim(&ce, pb[2], &mut temp8a);
    temp8blen = scale_expansion_zeroelim(&eb, pc[2], &mut temp8b);
    temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    temp8alen = scale_expansion_zeroelim(&bc, pe[2], &mut temp8a);
    let bcelen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut bce);

    temp8alen = scale_expansion_zeroelim(&da, pc[2], &mut temp8a);
    temp8blen = scale_expansion_zeroelim(&ac, pd[2], &mut temp8b);
    temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    temp8alen = scale_expansion_zeroelim(&cd, pa[2], &mut temp8a);
    let cdalen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut cda);

    temp8alen = scale_expansion_zeroelim(&eb, pd[2], &mut temp8a);
    temp8blen = scale_expansion_zeroelim(&bd, pe[2], &mut temp8b);
    temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    temp8alen = scale_expansion_zeroelim(&de, pb[2], &mut temp8a);
    let deblen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut deb);

    temp8alen = scale_expansion_zeroelim(&ac, pe[2], &mut temp8a);
    temp8blen = scale_expansion_zeroelim(&ce, pa[2], &mut temp8b);
    temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    temp8alen = scale_expansion_zeroelim(&ea, pc[2], &mut temp8a);
    let eaclen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut eac);

    let mut temp48alen = fast_expansion_sum_zeroelim(&cde[..cdelen], &bce[..bcelen], &mut temp48a);
    let mut temp48blen = fast_expansion_sum_zeroelim(&deb[..deblen], &bcd[..bcdlen], &mut temp48b);
    for component in &mut temp48b[..temp48blen] {
        *component = -*component;
    }
    let bcdelen =
        fast_expansion_sum_zeroelim(&temp48a[..temp48alen], &temp48b[..temp48blen], &mut bcde);
    let mut xlen = scale_expansion_zeroelim(&bcde[..bcdelen], pa[0], &mut temp192);
    xlen = scale_expansion_zeroelim(&temp192[..xlen], pa[0], &mut det384x);
    let mut ylen = scale_expansion_zeroelim(&bcde[..bcdelen], pa[1], &mut temp192);
    ylen = scale_expansion_zeroelim(&temp192[..ylen], pa[1], &mut det384y);
    let mut zlen = scale_expansion_zeroelim(&bcde[..bcdelen], pa[2], &mut temp192);
    zlen = scale_expansion_zeroelim(&temp192[..zlen], pa[2], &mut det384z);
    let mut xylen = fast_expansion_sum_zeroelim(&det384x[..xlen], &det384y[..ylen], &mut detxy);
    let alen = fast_expansion_sum_zeroelim(&detxy[..xylen], &det384z[..zlen], &mut adet);

    temp48alen = fast_expansion_sum_zeroelim(&dea[..dealen], &cda[..cdalen], &mut temp48a);
    temp48blen = fast_expansion_sum_zeroelim(&eac[..eaclen], &cde[..cdelen], &mut temp48b);
    for component in &mut temp48b[..temp48blen] {
        *component = -*component;
    }
    let cdealen =
        fast_expansion_sum_zeroelim(&temp48a[..temp48alen], &temp48b[..temp48blen], &mut cdea);
    xlen = scale_expansion_zeroelim(&cdea[..cdealen], pb[0], &mut temp192);
    xlen = scale_expansion_zeroelim(&temp192[..xlen], pb[0], &mut det384x);
    ylen = scale_expansion_zeroelim(&cdea[..cdealen], pb[1], &mut temp192);
    ylen = scale_expansion_zeroelim(&temp192[..ylen], pb[1], &mut det384y);
    zlen = scale_expansion_zeroelim(&cdea[..cdealen], pb[2], &mut temp192);
    zlen = scale_expansion_zeroelim(&temp192[..zlen], pb[2], &mut det384z);
    xylen = fast_expansion_sum_zeroelim(&det384x[..xlen], &det384y[..ylen], &mut detxy);
    let blen = fast_expansion_sum_zeroelim(&detxy[..xylen], &det384z[..zlen], &mut bdet);

    temp48alen = fast_expansion_sum_zeroelim(&eab[..eablen], &deb[..deblen], &mut temp48a);
    temp48blen = fast_expansion_sum_zeroelim(&abd[..abdlen], &dea[..dealen], &mut temp48b);
    for component in &mut temp48b[..temp48blen] {
        *component = -*component;
    }
    let deablen =
        fast_expansion_sum_zeroelim(&temp48a[..temp48alen], &temp48b[..temp48blen], &mut deab);
    xlen = scale_expansion_zeroelim(&deab[..deablen], pc[0], &mut temp192);
    xlen = scale_expansion_zeroelim(&temp192[..xlen], pc[0], &mut det384x);
    ylen = scale_expansion_zeroelim(&deab[..deablen], pc[1], &mut temp192);
    ylen = scale_expansion_zeroelim(&temp192[..ylen], pc[1], &mut det384y);
    zlen = scale_expansion_zeroelim(&deab[..deablen], pc[2], &mut temp192);
    zlen = scale_expansion_zeroelim(&temp192[..zlen], pc[2], &mut det384z);
    xylen = fast_expansion_sum_zeroelim(&det384x[..xlen], &det384y[..ylen], &mut detxy);
    let clen = fast_expansion_sum_zeroelim(&detxy[..xylen], &det384z[..zlen], &mut cdet);

    temp48alen = fast_expansion_sum_zeroelim(&abc[..abclen], &eac[..eaclen], &mut temp48a);
    temp48blen = fast_expansion_sum_zeroelim(&bce[..bcelen], &eab[..eablen], &mut temp48b);
    for component in &mut temp48b[..temp48blen] {
        *component = -*component;
    }
    let eabclen =
        fast_expansion_sum_zeroelim(&temp48a[..temp48alen], &temp48b[..temp48blen], &mut eabc);
    xlen = scale_expansion_zeroelim(&eabc[..eabclen], pd[0], &mut temp192);
    xlen = scale_expansion_zeroelim(&temp192[..xlen], pd[0], &mut det384x);
    ylen = scale_expansion_zeroelim(&eabc[..eabclen], pd[1], &mut temp192);
    ylen = scale_expansion_zeroelim(&temp192[..ylen], pd[1], &mut det384y);
    zlen = scale_expansion_zeroelim(&eabc[..eabclen], pd[2], &mut temp192);
    zlen = scale_expansion_zeroelim(&temp192[..zlen], pd[2], &mut det384z);
    xylen = fast_expansion_sum_zeroelim(&det384x[..xlen], &det384y[..ylen], &mut detxy);
    let dlen = fast_expansion_sum_zeroelim(&detxy[..xylen], &det384z[..zlen], &mut ddet);

    temp48alen = fast_expansion_sum_zeroelim(&bcd[..bcdlen], &abd[..abdlen], &mut temp48a);
    temp48blen = fast_expansion_sum_zeroelim(&cda[..cdalen], &abc[..abclen], &mut temp48b);
    for component in &mut temp48b[..temp48blen] {
        *component = -*component;
    }
    let abcdlen =
        fast_expansion_sum_zeroelim(&temp48a[..temp48alen], &temp48b[..temp48blen], &mut abcd);
    xlen = scale_expansion_zeroelim(&abcd[..abcdlen], pe[0], &mut temp192);
    xlen = scale_expansion_zeroelim(&temp192[..xlen], pe[0], &mut det384x);
    ylen = scale_expansion_zeroelim(&abcd[..abcdlen], pe[1], &mut temp192);
    ylen = scale_expansion_zeroelim(&temp192[..ylen], pe[1], &mut det384y);
    zlen = scale_expansion_zeroelim(&abcd[..abcdlen], pe[2], &mut temp192);
    zlen = scale_expansion_zeroelim(&temp192[..zlen], pe[2], &mut det384z);
    xylen = fast_expansion_sum_zeroelim(&det384x[..xlen], &det384y[..ylen], &mut detxy);
    let elen = fast_expansion_sum_zeroelim(&detxy[..xylen], &det384z[..zlen], &mut edet);

    let ablen = fast_expansion_sum_zeroelim(&adet[..alen], &bdet[..blen], &mut abdet);
    let cdlen = fast_expansion_sum_zeroelim(&cdet[..clen], &ddet[..dlen], &mut cddet);
    let cdelen = fast_expansion_sum_zeroelim(&cddet[..cdlen], &edet[..elen], &mut cdedet);
    let deterlen = fast_expansion_sum_zeroelim(&abdet[..ablen], &cdedet[..cdelen], &mut deter);

    deter[deterlen - 1]
}
