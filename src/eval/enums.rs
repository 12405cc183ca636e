// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use std::fmt;
use std::ops::{Index, IndexMut};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::util::are_vectors_equal;

/// Number of axes a machine position or path has.
pub const NUM_AXES: usize = 12;

/// Number of coefficients per axis of a path.
pub const NUM_COEFFICIENTS: usize = 4;

/// Feed rate value that stands for "as fast as the machine can go".
pub const RAPID_RATE: f64 = -1.;

/// An axis supported by the command language.
///
/// The discriminant is the index into `Coords` and coefficient rows.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, EnumString)]
pub enum Axis {
    X, Y, Z,
    U, V, W,
    P, Q, R,
    A, B, C,
}

impl Axis {
    /// The axis addressed by an (uppercase) word letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        let mut buf = [0; 4];
        letter.encode_utf8(&mut buf).parse().ok()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn all() -> impl Iterator<Item=Axis> {
        Axis::iter()
    }
}

/// A plane as selected by G17-G19.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum Plane {
    XY, XZ, YZ,
}

impl Plane {
    /// The two axes spanning the plane, in the order used for arcs.
    pub fn axes(self) -> (Axis, Axis) {
        match self {
            Plane::XY => (Axis::X, Axis::Y),
            Plane::XZ => (Axis::X, Axis::Z),
            Plane::YZ => (Axis::Y, Axis::Z),
        }
    }
}

/// The motion modal group (G0-G3).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MotionMode {
    Rapid,
    Linear,
    Clockwise,
    CounterClockwise,
}

impl MotionMode {
    pub fn is_arc(self) -> bool {
        match self {
            MotionMode::Clockwise | MotionMode::CounterClockwise => true,
            _ => false
        }
    }
}

/// The distance modal group (G90-G91).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DistanceMode {
    Absolute,
    Incremental,
}

/// How the coefficients of an axis are to be interpreted.
///
/// * `Polynomial`: `x(s) = A*s^3 + B*s^2 + C*s + D`
/// * `Trigonometric`: `x(s) = A*sin(B*(s - C)) + D`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum PathType {
    Polynomial,
    Trigonometric,
}

impl Default for PathType {
    fn default() -> Self { PathType::Polynomial }
}

impl PathType {
    /// Evaluate one coefficient row at `s`.
    pub fn eval(self, row: &[f64; NUM_COEFFICIENTS], s: f64) -> f64 {
        let [a, b, c, d] = *row;
        match self {
            PathType::Polynomial => ((a * s + b) * s + c) * s + d,
            PathType::Trigonometric => a * (b * (s - c)).sin() + d,
        }
    }
}

/// The feed rate a path is run with.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Feed {
    /// Move as fast as mechanically possible.
    Rapid,
    Rate(f64),
}

impl Feed {
    /// Numeric form, with `RAPID_RATE` standing in for rapid moves.
    pub fn as_f64(self) -> f64 {
        match self {
            Feed::Rapid => RAPID_RATE,
            Feed::Rate(r) => r,
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Feed::Rapid => write!(f, "rapid"),
            Feed::Rate(r) => write!(f, "F{}", r),
        }
    }
}

/// A full set of axis values, either a machine position or a per-axis
/// quantity such as a position error.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Coords(pub [f64; NUM_AXES]);

impl Coords {
    pub fn zero() -> Self {
        Coords([0.; NUM_AXES])
    }

    /// Tolerant comparison over all axes.
    pub fn approx_eq(&self, other: &Coords) -> bool {
        are_vectors_equal(&self.0, &other.0)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<[f64; NUM_AXES]> for Coords {
    fn from(arr: [f64; NUM_AXES]) -> Self {
        Coords(arr)
    }
}

impl Index<Axis> for Coords {
    type Output = f64;
    fn index(&self, axis: Axis) -> &f64 {
        &self.0[axis.index()]
    }
}

impl IndexMut<Axis> for Coords {
    fn index_mut(&mut self, axis: Axis) -> &mut f64 {
        &mut self.0[axis.index()]
    }
}

impl fmt::Debug for Coords {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for axis in Axis::all() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}={}", axis, self[axis])?;
        }
        Ok(())
    }
}
