// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

mod enums;
mod error;
mod path;

use fixedbitset::FixedBitSet as BitSet;
use strum::IntoEnumIterator;

use crate::ast::Word;
use crate::parse;
use crate::util::is_equal;

pub use self::enums::*;
pub use self::error::*;
pub use self::path::*;

/// Settings that stay active across lines until changed by a word or reset
/// by `Interpreter::flush`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    pub motion_mode: Option<MotionMode>,
    pub plane: Option<Plane>,
    pub distance_mode: Option<DistanceMode>,
    pub feed_rate: f64,
}

/// Arc center offsets given by I, J and K, relative to the start point.
///
/// These only live for the line they appear on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offsets(pub [f64; 3]);

impl Offsets {
    /// The offset along `axis`; zero for everything but X, Y and Z.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.0[0],
            Axis::Y => self.0[1],
            Axis::Z => self.0[2],
            _ => 0.
        }
    }
}

/// The result of a successfully parsed line.
#[derive(Clone, Debug)]
pub struct Block {
    /// The motion requested by the line, if any.  Lines that only set modal
    /// data have none.
    pub path: Option<Path>,
    /// The active plane after the line.
    pub plane: Option<Plane>,
    /// Where the machine ends up after the line.  For arcs this is the
    /// fitted end point, not necessarily the requested one.
    pub end: Coords,
}

impl Block {
    pub fn is_path(&self) -> bool {
        self.path.is_some()
    }
}

/// Everything collected from the words of a single line.  Modal changes are
/// staged here and only committed once the whole line was accepted.
struct LineWords {
    modal: ModalState,
    offsets: Offsets,
    target: Coords,
    // letters seen on this line, A = 0
    seen: BitSet,
}

impl LineWords {
    fn new(modal: &ModalState, start: &Coords) -> Self {
        LineWords {
            modal: modal.clone(),
            offsets: Offsets::default(),
            target: *start,
            seen: BitSet::with_capacity(26),
        }
    }

    fn mark(&mut self, key: char) {
        if key.is_ascii_uppercase() {
            self.seen.insert((key as u8 - b'A') as usize);
        }
    }

    fn has_any(&self, keys: &str) -> bool {
        keys.bytes().any(|k| self.seen[(k - b'A') as usize])
    }
}

/// The Interpreter turns lines into blocks, keeping track of the modal
/// state between them.
///
/// Each independent command stream needs its own interpreter.
pub struct Interpreter {
    // available axes
    axes: Vec<Axis>,
    state: ModalState,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl Interpreter {
    /// An interpreter accepting words for all axes.
    pub fn new() -> Self {
        Interpreter::with_axes(Axis::iter().collect::<Vec<_>>())
    }

    /// An interpreter that rejects words for axes not in `axes`.
    pub fn with_axes(axes: impl Into<Vec<Axis>>) -> Self {
        Interpreter {
            axes: axes.into(),
            state: ModalState::default(),
        }
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn modal_state(&self) -> &ModalState {
        &self.state
    }

    /// Reset all modal groups to undefined and the feed rate to zero.
    ///
    /// Call this between independent programs.
    pub fn flush(&mut self) {
        self.state = ModalState::default();
    }

    /// Parse one line, starting from machine position `start`.
    ///
    /// Tokenizer and word errors leave the modal state untouched.  Errors
    /// found while generating the path happen after the line's modal words
    /// took effect.
    pub fn parse_block(&mut self, line: &str, start: &Coords) -> Result<Block, ErrType> {
        let mut words = LineWords::new(&self.state, start);
        let result = parse::for_each_word(line, |word| self.apply_word(&mut words, word));
        if let Err(e) = result {
            log::debug!("rejected line {:?}: {}", line, e);
            return Err(e);
        }
        let offset_given = words.has_any("IJK");
        self.state = words.modal;

        let path = generate_path(&self.state, start, &words.target,
                                 &words.offsets, offset_given)
            .map_err(|e| {
                log::debug!("no path for line {:?}: {}", line, e);
                e
            })?;
        let end = path.as_ref().map_or(*start, |p| p.end);
        if let Some(path) = &path {
            log::debug!("{} path to {:?} at {}", path.kind, end, path.feed);
        }
        Ok(Block { path, plane: self.state.plane, end })
    }

    // -- private API --

    /// Apply one word to the staged line data.  Later words overwrite
    /// earlier ones.
    fn apply_word(&self, line: &mut LineWords, word: Word) -> Result<(), ErrType> {
        let Word { key, value } = word;
        let invalid = || ErrType::InvalidWord(key, value);
        if let Some(axis) = Axis::from_letter(key) {
            if !self.axes.contains(&axis) {
                return Err(ErrType::InvalidAxis(axis));
            }
            line.target[axis] = value;
        } else {
            match key {
                'F' => line.modal.feed_rate = value,
                'G' => apply_gcode(&mut line.modal, value).ok_or_else(invalid)?,
                'I' => line.offsets.0[0] = value,
                'J' => line.offsets.0[1] = value,
                'K' => line.offsets.0[2] = value,
                _ => return Err(invalid()),
            }
        }
        line.mark(key);
        Ok(())
    }
}

/// Set the modal group a G code belongs to.  Returns `None` for unsupported
/// codes.
fn apply_gcode(modal: &mut ModalState, code: f64) -> Option<()> {
    match code {
        c if is_equal(c, 0.)  => modal.motion_mode = Some(MotionMode::Rapid),
        c if is_equal(c, 1.)  => modal.motion_mode = Some(MotionMode::Linear),
        c if is_equal(c, 2.)  => modal.motion_mode = Some(MotionMode::Clockwise),
        c if is_equal(c, 3.)  => modal.motion_mode = Some(MotionMode::CounterClockwise),
        c if is_equal(c, 17.) => modal.plane = Some(Plane::XY),
        c if is_equal(c, 18.) => modal.plane = Some(Plane::XZ),
        c if is_equal(c, 19.) => modal.plane = Some(Plane::YZ),
        c if is_equal(c, 90.) => modal.distance_mode = Some(DistanceMode::Absolute),
        c if is_equal(c, 91.) => modal.distance_mode = Some(DistanceMode::Incremental),
        _ => return None
    }
    Some(())
}
