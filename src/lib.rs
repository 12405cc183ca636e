// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

//! Turns lines of NC motion commands (a small G-code dialect) into
//! parametric motion paths.
//!
//! Each line is tokenized into letter/value words, the words update the
//! modal state of an interpreter, and the result is a path described by four
//! coefficients per axis.  Straight moves are cubic polynomials in a
//! parameter `s` running from 0 to 1, arcs are sine functions of `s`.
//!
//! ## Basic usage
//!
//! ```rust
//! use ncpath::eval::{Axis, Coords, Interpreter};
//!
//! let mut interp = Interpreter::new();
//! let start = Coords::zero();
//!
//! let block = interp.parse_block("G0 X100", &start).unwrap();
//! let path = block.path.unwrap();
//! assert_eq!(path.row(Axis::X), &[0., 0., 100., 0.]);
//! assert_eq!(path.pose(0.5)[Axis::X], 50.);
//! ```
//!
//! For running a whole program, `ncpath::machine::Machine` keeps track of
//! the position between lines and collects the paths in a queue.
//!
//! ## Supported words
//!
//! * `G0`, `G1`, `G2`, `G3`: rapid, linear, clockwise and counterclockwise
//!   motion
//! * `G17`, `G18`, `G19`: plane selection for arcs
//! * `G90`, `G91`: distance mode (recorded only)
//! * `F`: feed rate
//! * `X Y Z U V W P Q R A B C`: target coordinates
//! * `I J K`: arc center offsets from the start point
//!
//! Anything else makes the line invalid.

pub mod ast;
pub mod parse;
pub mod eval;
pub mod queue;
pub mod machine;

#[cfg(feature = "kins")]
pub mod kins;

// float comparison and vector helpers
pub mod util;
