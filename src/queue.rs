// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use std::collections::VecDeque;

use crate::eval::Path;

/// First-in, first-out buffer of paths between the interpreter and whatever
/// runs the paths.
///
/// There is no internal locking; share it between threads only behind your
/// own synchronization.
#[derive(Clone, Debug, Default)]
pub struct PathQueue {
    paths: VecDeque<Path>,
}

impl PathQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, path: Path) {
        self.paths.push_back(path);
    }

    /// Remove and return the oldest path, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<Path> {
        self.paths.pop_front()
    }

    /// The oldest path, without removing it.
    pub fn peek(&self) -> Option<&Path> {
        self.paths.front()
    }

    /// Remove all paths.
    pub fn flush(&mut self) {
        self.paths.clear();
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item=&Path> {
        self.paths.iter()
    }
}

impl Extend<Path> for PathQueue {
    fn extend<T: IntoIterator<Item=Path>>(&mut self, iter: T) {
        self.paths.extend(iter);
    }
}
