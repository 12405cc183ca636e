// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use thiserror::Error;

use super::enums::*;

/// An error while executing a program, with the (1-based) line it occurred on.
#[derive(Debug, Error)]
#[error("Error in line {lineno}: {errtype}")]
pub struct EvalError {
    pub lineno: usize,
    #[source]
    pub errtype: ErrType,
}

/// Everything that can make a block invalid.
///
/// All of these are fatal to the line they occur on, but never to the
/// interpreter: the next line can be parsed as usual.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErrType {
    /// Unexpected character sequencing, e.g. a value without a letter.
    #[error("Grammar error in G-code block")]
    Grammar,
    /// A well-formed word with an unknown letter or an unsupported G value.
    #[error("Invalid G-code word: {0}{1}")]
    InvalidWord(char, f64),
    /// A numeric literal longer than `MAX_DECIMAL_LENGTH` characters.
    #[error("Decimal value exceeded max length")]
    ValueTooLong,
    /// A literal made of valid characters that still isn't a number, like `1-2`.
    #[error("Malformed decimal value {0:?}")]
    InvalidNumber(String),
    /// An axis word for an axis the interpreter was not configured with.
    #[error("Axis {0} is not available")]
    InvalidAxis(Axis),
    #[error("Feed rate is zero or negative")]
    InvalidFeedRate,
    #[error("No plane selected")]
    NoPlaneSelected,
    #[error("Offset point cannot equal start point")]
    OffsetEqualsStart,
    #[error("Offset point cannot equal end point")]
    OffsetEqualsEnd,
}
