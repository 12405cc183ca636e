// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use std::fmt::{self, Display, Formatter};

/// A single letter/value pair of a line, such as `X100`.
///
/// The letter is always uppercase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Word {
    pub key: char,
    pub value: f64,
}

impl Word {
    pub fn new(key: char, value: f64) -> Self {
        Word { key: key.to_ascii_uppercase(), value }
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}{}", self.key, self.value)
    }
}

/// Renders the words of a line separated by spaces.
pub struct Line<'a>(pub &'a [Word]);

impl Display for Line<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (i, word) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}
