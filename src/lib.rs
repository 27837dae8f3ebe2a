#![cfg_attr(feature = "no_std", no_std)]
// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Adaptive-Precision Robust Geometric Predicates
//!
//! Sign-exact orientation, in-circle and in-sphere tests following the
//! adaptive-precision arithmetic of Jonathan Richard Shewchuk
//! ([https://www.cs.cmu.edu/~quake/robust.html](https://www.cs.cmu.edu/~quake/robust.html)).
//!
//! Floating-point evaluation of the small determinants behind these queries
//! can round to the wrong sign when the input is nearly degenerate, and a
//! single wrong sign is enough to corrupt a triangulation or mesh-repair
//! pass built on top. The predicates here guarantee the sign: each one first
//! evaluates the determinant in plain `f64` and certifies it against an
//! error bound, escalating through progressively tighter (and costlier)
//! exact-expansion stages only when the cheaper stage cannot prove the sign.
//! The final stage is fully exact, so even exactly-degenerate input returns
//! exactly `0.0`. No stage allocates; scratch space is fixed-size stack
//! arrays.
//!
//! The error-bound table lives in an explicit [`PredicateContext`] built
//! from the largest coordinate magnitudes the scene will use:
//!
//! ```
//! use exactpred::PredicateContext;
//!
//! let ctx = PredicateContext::new(512.0, 512.0, 512.0);
//! let above = ctx.orient3d(
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [0.3, 0.3, -2.0],
//! );
//! assert!(above > 0.0);
//! ```
//!
//! # Caller contract
//!
//! Coordinates must be finite and within the magnitudes the context was
//! built with. Neither condition is checked at runtime (a check on every
//! call would tax the hot path); violating them voids the sign guarantee.
//! Sub-normal intermediate values (coordinates differing by less than about
//! `1e-292`) fall outside the round-off model as well.
//!
//! # Features
//! - `no_std`: build without the Rust standard library

mod arithmetic;
mod context;
mod expansion;
mod incircle;
mod insphere;
mod orient;
#[cfg(test)]
mod tests;

pub use crate::context::PredicateContext;
pub use crate::incircle::{incircle_exact, incircle_slow};

/// A two dimensional point, `[x, y]`.
pub type Point2 = [f64; 2];

/// A three dimensional point, `[x, y, z]`.
pub type Point3 = [f64; 3];
