// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

//! Tolerant floating point comparison and small vector helpers.
//!
//! Comparing doubles with `==` breaks down as soon as values have gone
//! through any arithmetic.  A fixed threshold works near zero but not for
//! large magnitudes, a relative threshold works for large magnitudes but
//! vanishes near zero.  The comparisons here accept a difference that is
//! below either of the two.

use itertools::Itertools;

/// Relative tolerance, scaled by the magnitude of the compared values.
pub const EPSILON: f64 = 100. * f64::EPSILON;

/// Absolute tolerance for values close to zero.
pub const SMALL_THRESHOLD: f64 = 100. * f64::MIN_POSITIVE;

/// Tolerant equality.  NaN is never equal to anything, including itself.
pub fn is_equal(a: f64, b: f64) -> bool {
    // also covers matching infinities
    if a == b {
        return true;
    }
    let difference = (a - b).abs();
    let typical = EPSILON * (a.abs() + b.abs());
    difference < SMALL_THRESHOLD.max(typical)
}

pub fn is_greater(a: f64, b: f64) -> bool {
    !is_equal(a, b) && a > b
}

pub fn is_greater_equal(a: f64, b: f64) -> bool {
    is_equal(a, b) || a > b
}

pub fn is_less(a: f64, b: f64) -> bool {
    !is_equal(a, b) && a < b
}

pub fn is_less_equal(a: f64, b: f64) -> bool {
    is_equal(a, b) || a < b
}

/// Sign of `x` as `1.0` or `-1.0`, where anything equal to zero counts as
/// positive.  NaN stays NaN.
pub fn sign(x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if is_greater_equal(x, 0.) {
        1.
    } else {
        -1.
    }
}

/// Element-wise tolerant equality.  Panics if the lengths differ.
pub fn are_vectors_equal(v1: &[f64], v2: &[f64]) -> bool {
    v1.iter().zip_eq(v2).all(|(&a, &b)| is_equal(a, b))
}

pub fn dot_product(v1: &[f64], v2: &[f64]) -> f64 {
    v1.iter().zip_eq(v2).map(|(a, b)| a * b).sum()
}

/// Cross product of two 3-vectors.  Any other size yields a vector of NaNs.
pub fn cross_product(v1: &[f64], v2: &[f64]) -> Vec<f64> {
    if v1.len() == 3 && v2.len() == 3 {
        vec![
            v1[1] * v2[2] - v1[2] * v2[1],
            v1[2] * v2[0] - v1[0] * v2[2],
            v1[0] * v2[1] - v1[1] * v2[0],
        ]
    } else {
        vec![f64::NAN; v1.len()]
    }
}

pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Euclidean distance between two points.
pub fn distance(p1: &[f64], p2: &[f64]) -> f64 {
    p1.iter().zip_eq(p2).map(|(a, b)| (b - a) * (b - a)).sum::<f64>().sqrt()
}

/// Vector scaled to unit length.
pub fn unit_vector(v: &[f64]) -> Vec<f64> {
    let mag = magnitude(v);
    v.iter().map(|x| x / mag).collect()
}

/// Checks whether two vectors point the same way, regardless of length.
pub fn is_direction_equal(v1: &[f64], v2: &[f64]) -> bool {
    are_vectors_equal(&unit_vector(v1), &unit_vector(v2))
}

/// `acos` with the argument clamped to its domain, so that rounding noise
/// just outside of [-1, 1] does not produce NaN.
pub fn clamped_acos(x: f64) -> f64 {
    if x.is_nan() {
        x
    } else {
        x.max(-1.).min(1.).acos()
    }
}
