// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

//! Scalar kinematics: every joint is its axis times a constant factor.
//!
//! There are as many joints as axes.

use crate::eval::{Axis, Coords, Path, PathType};

pub struct ScalarKins {
    scale: Coords,
}

impl ScalarKins {
    pub fn new(scale: Coords) -> Self {
        ScalarKins { scale }
    }

    /// Translate a path into joint space.
    ///
    /// Polynomial rows are scaled as a whole; for trigonometric rows only
    /// the amplitude and the center move, angle and phase stay.
    pub fn load(&self, path: &Path) -> Path {
        let mut joint = path.clone();
        for axis in Axis::all() {
            let factor = self.scale[axis];
            let row = &mut joint.coefficients[axis.index()];
            match path.axis_type(axis) {
                PathType::Polynomial => row.iter_mut().for_each(|c| *c *= factor),
                PathType::Trigonometric => {
                    row[0] *= factor;
                    row[3] *= factor;
                }
            }
            joint.position_error[axis] *= factor;
            joint.end[axis] *= factor;
        }
        joint
    }

    /// Joint-space pose of the machine along `path` at `s` in [0, 1].
    pub fn pose(&self, path: &Path, s: f64) -> Coords {
        self.load(path).pose(s)
    }
}
