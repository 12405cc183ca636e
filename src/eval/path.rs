// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

//! Derivation of path coefficients.
//!
//! Every path is parametrized by `s`, which runs from 0 at the start point to
//! 1 at the end point.  Each axis has its own function of `s`:
//!
//! * straight lines use `x(s) = A*s^3 + B*s^2 + C*s + D` with `A = B = 0`,
//!   `C = x(1) - x(0)` and `D = x(0)`;
//! * arcs use `x(s) = A*sin(B*(s - C)) + D` for the two axes of the selected
//!   plane, where `A` is the radius, `B` the signed angle swept, `C` the phase
//!   and `D` the center coordinate.
//!
//! Axes outside of the arc plane stay polynomial, so an arc that also moves
//! a third axis becomes a helix.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::util::*;
use super::enums::*;
use super::error::ErrType;
use super::{ModalState, Offsets};

const TAU: f64 = 2. * PI;

/// A fully determined motion of the machine.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub feed: Feed,
    /// `Trigonometric` for arcs, `Polynomial` for straight moves.
    pub kind: PathType,
    pub plane: Option<Plane>,
    /// How each axis' coefficient row is interpreted.
    pub types: [PathType; NUM_AXES],
    pub coefficients: [[f64; NUM_COEFFICIENTS]; NUM_AXES],
    /// Fitted end position minus the requested one.  Only arcs can have
    /// nonzero entries here.
    pub position_error: Coords,
    /// The position at `s = 1`.
    pub end: Coords,
}

impl Path {
    /// A straight move from `start` to `end`.
    pub fn linear(feed: Feed, start: &Coords, end: &Coords) -> Self {
        let mut coefficients = [[0.; NUM_COEFFICIENTS]; NUM_AXES];
        for (row, (&x0, &x1)) in coefficients.iter_mut().zip(start.0.iter().zip(&end.0)) {
            *row = line_row(x0, x1);
        }
        Path {
            feed,
            kind: PathType::Polynomial,
            plane: None,
            types: [PathType::Polynomial; NUM_AXES],
            coefficients,
            position_error: Coords::zero(),
            end: *end,
        }
    }

    pub fn row(&self, axis: Axis) -> &[f64; NUM_COEFFICIENTS] {
        &self.coefficients[axis.index()]
    }

    pub fn axis_type(&self, axis: Axis) -> PathType {
        self.types[axis.index()]
    }

    /// Position of a single axis at `s`.
    pub fn pose_axis(&self, axis: Axis, s: f64) -> f64 {
        self.axis_type(axis).eval(self.row(axis), s)
    }

    /// Position of all axes at `s`.
    pub fn pose(&self, s: f64) -> Coords {
        let mut pose = Coords::zero();
        for axis in Axis::all() {
            pose[axis] = self.pose_axis(axis, s);
        }
        pose
    }
}

fn line_row(x0: f64, x1: f64) -> [f64; NUM_COEFFICIENTS] {
    [0., 0., x1 - x0, x0]
}

/// Generate the path for a line, given the already committed modal state,
/// the start position, the requested target and the line's arc offsets.
///
/// Returns `Ok(None)` for lines that don't move the machine.
pub(crate) fn generate_path(modal: &ModalState, start: &Coords, target: &Coords,
                            offsets: &Offsets, offset_given: bool)
                            -> Result<Option<Path>, ErrType> {
    let mode = match modal.motion_mode {
        Some(mode) => mode,
        None => return Ok(None),
    };
    let moved = !start.approx_eq(target);

    let mut path = match mode {
        MotionMode::Rapid => {
            if !moved {
                return Ok(None);
            }
            Path::linear(Feed::Rapid, start, target)
        }
        MotionMode::Linear => {
            if !moved {
                return Ok(None);
            }
            check_feed_rate(modal.feed_rate)?;
            Path::linear(Feed::Rate(modal.feed_rate), start, target)
        }
        MotionMode::Clockwise | MotionMode::CounterClockwise => {
            // without target or center there is nothing to go around
            if !moved && !offset_given {
                return Ok(None);
            }
            let plane = modal.plane.ok_or(ErrType::NoPlaneSelected)?;
            check_feed_rate(modal.feed_rate)?;
            arc(mode == MotionMode::Clockwise, plane, modal.feed_rate,
                start, target, offsets)?
        }
    };
    path.plane = modal.plane;
    Ok(Some(path))
}

fn check_feed_rate(feed_rate: f64) -> Result<(), ErrType> {
    if is_greater(feed_rate, 0.) {
        Ok(())
    } else {
        Err(ErrType::InvalidFeedRate)
    }
}

/// Fit a circular path in `plane` from `start` towards `target`, around the
/// center given by `offsets` relative to `start`.
///
/// The radius is taken from the start point.  If the target lies at a
/// different distance from the center, the fitted end point misses it; the
/// difference is reported in `position_error`.
fn arc(clockwise: bool, plane: Plane, feed_rate: f64, start: &Coords, target: &Coords,
       offsets: &Offsets) -> Result<Path, ErrType> {
    let (ax0, ax1) = plane.axes();
    let start_pt = [start[ax0], start[ax1]];
    let end_pt = [target[ax0], target[ax1]];
    let center = [start_pt[0] + offsets.get(ax0), start_pt[1] + offsets.get(ax1)];

    if are_vectors_equal(&center, &start_pt) {
        return Err(ErrType::OffsetEqualsStart);
    }
    if are_vectors_equal(&center, &end_pt) {
        return Err(ErrType::OffsetEqualsEnd);
    }

    let to_start = [start_pt[0] - center[0], start_pt[1] - center[1]];
    let to_end = [end_pt[0] - center[0], end_pt[1] - center[1]];

    let radius = magnitude(&to_start);
    let angle = if are_vectors_equal(&start_pt, &end_pt) {
        // full circle: the general formula below degenerates
        if clockwise { -TAU } else { TAU }
    } else {
        let base = clamped_acos(dot_product(&to_start, &to_end) /
                                (radius * magnitude(&to_end)));
        let winding = to_start[0] * to_end[1] - to_start[1] * to_end[0];
        match (clockwise, is_greater_equal(winding, 0.)) {
            (true, true) => base - TAU,
            (true, false) => -base,
            (false, true) if is_equal(base, 0.) => TAU,
            (false, true) => base,
            (false, false) => TAU - base,
        }
    };

    let phase_1 = clamped_acos(to_start[0] / radius) / angle * sign(-to_start[1]);
    let phase_0 = phase_1 - FRAC_PI_2 / angle;

    let mut path = Path::linear(Feed::Rate(feed_rate), start, target);
    path.kind = PathType::Trigonometric;
    for &(axis, phase, offset) in &[(ax0, phase_0, center[0]), (ax1, phase_1, center[1])] {
        let row = [radius, angle, phase, offset];
        let actual = PathType::Trigonometric.eval(&row, 1.);
        path.coefficients[axis.index()] = row;
        path.types[axis.index()] = PathType::Trigonometric;
        path.position_error[axis] = actual - target[axis];
        path.end[axis] = actual;
    }
    Ok(path)
}
