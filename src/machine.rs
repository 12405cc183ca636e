// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use crate::eval::{Block, Coords, ErrType, EvalError, Interpreter};
use crate::queue::PathQueue;

/// Drives an interpreter over a command stream, tracking the machine
/// position and collecting the generated paths.
///
/// After an arc, the fitted end point becomes the new position, so any
/// fitting error carries over into the following lines.
pub struct Machine {
    interp: Interpreter,
    position: Coords,
    queue: PathQueue,
    // arc position errors above this get a warning
    error_tolerance: f64,
}

impl Machine {
    pub fn new(interp: Interpreter) -> Self {
        Machine {
            interp,
            position: Coords::zero(),
            queue: PathQueue::new(),
            error_tolerance: 1e-6,
        }
    }

    pub fn with_position(mut self, position: Coords) -> Self {
        self.position = position;
        self
    }

    pub fn with_error_tolerance(mut self, tolerance: f64) -> Self {
        self.error_tolerance = tolerance;
        self
    }

    pub fn position(&self) -> &Coords {
        &self.position
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interp
    }

    pub fn queue(&self) -> &PathQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut PathQueue {
        &mut self.queue
    }

    /// Forget all modal state, e.g. before starting another program.
    pub fn flush_modal(&mut self) {
        self.interp.flush();
    }

    /// Execute a single line.  A generated path is queued and the position
    /// moves to its end.
    pub fn execute(&mut self, line: &str) -> Result<Block, ErrType> {
        let block = self.interp.parse_block(line, &self.position)?;
        if let Some(path) = &block.path {
            let worst = path.position_error.as_slice().iter()
                .fold(0f64, |acc, e| acc.max(e.abs()));
            if worst > self.error_tolerance {
                log::warn!("arc end point misses the target by {} in line {:?}", worst, line);
            }
            log::debug!("queueing path, {} in queue", self.queue.len() + 1);
            self.queue.enqueue(path.clone());
        }
        self.position = block.end;
        Ok(block)
    }

    /// Execute all lines of a program, stopping at the first invalid one.
    ///
    /// Returns the number of paths generated.
    pub fn run(&mut self, program: &str) -> Result<usize, EvalError> {
        let mut count = 0;
        for (n, line) in program.lines().enumerate() {
            let block = self.execute(line)
                            .map_err(|e| EvalError { lineno: n + 1, errtype: e })?;
            if block.is_path() {
                count += 1;
            }
        }
        Ok(count)
    }
}
