// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

//! Tokenizer turning a line into letter/value words.
//!
//! This is a small finite automaton over character classes.  It only knows
//! about grammar (a letter, then a value, then a separator); what the words
//! mean is up to the interpreter.

use std::iter;

use crate::ast::Word;
use crate::eval::{ErrType, EvalError};

/// Longest accepted numeric literal.  Doubles carry about 15 significant
/// digits, plus sign, decimal point, exponent marker and exponent sign.
///
/// Use `1E-18` instead of `0.000000000000000001` for long numbers.
pub const MAX_DECIMAL_LENGTH: usize = 19;

/// Classification of input characters.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CharType {
    /// `e` or `E`, which is either a letter or part of an exponent.
    E,
    /// Any other ASCII letter.
    Letter,
    /// `0-9`, `.`, `+` and `-`.
    Digit,
    /// Whitespace and line terminators.
    Empty,
    Invalid,
}

impl CharType {
    pub fn of(c: char) -> Self {
        match c {
            'e' | 'E' => CharType::E,
            c if c.is_ascii_alphabetic() => CharType::Letter,
            '0'..='9' | '.' | '+' | '-' => CharType::Digit,
            ' ' | '\t' | '\r' | '\n' | '\0' => CharType::Empty,
            _ => CharType::Invalid,
        }
    }
}

/// Tokenizer states.  `Error` is absorbing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum State {
    Idle,
    Key,
    Value,
    Parse,
    Error,
}

impl State {
    /// The transition table.
    pub fn next(self, input: CharType) -> State {
        use CharType::*;
        match (self, input) {
            (State::Idle, E)        => State::Key,
            (State::Idle, Letter)   => State::Key,
            (State::Idle, Digit)    => State::Error,
            (State::Idle, Empty)    => State::Idle,
            (State::Idle, Invalid)  => State::Error,

            (State::Key, E)         => State::Error,
            (State::Key, Letter)    => State::Error,
            (State::Key, Digit)     => State::Value,
            (State::Key, Empty)     => State::Error,
            (State::Key, Invalid)   => State::Error,

            (State::Value, E)       => State::Value,
            (State::Value, Letter)  => State::Error,
            (State::Value, Digit)   => State::Value,
            (State::Value, Empty)   => State::Parse,
            (State::Value, Invalid) => State::Error,

            (State::Parse, E)       => State::Key,
            (State::Parse, Letter)  => State::Key,
            (State::Parse, Digit)   => State::Error,
            (State::Parse, Empty)   => State::Idle,
            (State::Parse, Invalid) => State::Error,

            (State::Error, _)       => State::Error,
        }
    }
}

fn is_terminator(c: char) -> bool {
    c == '\r' || c == '\n' || c == '\0'
}

/// Strict, locale independent conversion of a numeric literal.
pub fn parse_decimal(text: &str) -> Result<f64, ErrType> {
    text.parse().map_err(|_| ErrType::InvalidNumber(text.into()))
}

/// Run the tokenizer over one line, calling `handle` for every completed
/// word in order.
///
/// The line ends at the first CR, LF or NUL, or at the end of the string.
/// The first error, either from the grammar or from `handle`, aborts the
/// line and is returned.
pub fn for_each_word<F>(line: &str, mut handle: F) -> Result<(), ErrType>
where F: FnMut(Word) -> Result<(), ErrType>
{
    let mut state = State::Idle;
    let mut key = ' ';
    let mut value = String::with_capacity(MAX_DECIMAL_LENGTH);

    // the terminator is processed too, it completes the last word
    let chars = line.chars().take_while(|&c| !is_terminator(c)).chain(iter::once('\0'));
    for c in chars {
        state = state.next(CharType::of(c));
        match state {
            State::Idle => (),
            State::Key => key = c.to_ascii_uppercase(),
            State::Value => {
                if value.len() >= MAX_DECIMAL_LENGTH {
                    return Err(ErrType::ValueTooLong);
                }
                value.push(c);
            }
            State::Parse => {
                let word = Word::new(key, parse_decimal(&value)?);
                log::trace!("tokenized word {}", word);
                value.clear();
                handle(word)?;
            }
            State::Error => return Err(ErrType::Grammar),
        }
    }
    Ok(())
}

/// Tokenize one line into its words.
pub fn parse_line(line: &str) -> Result<Vec<Word>, ErrType> {
    let mut words = vec![];
    for_each_word(line, |word| {
        words.push(word);
        Ok(())
    })?;
    Ok(words)
}

/// Tokenize every line of a program.  Line numbers in errors start at 1.
pub fn parse_program(input: &str) -> Result<Vec<Vec<Word>>, EvalError> {
    input.lines().enumerate().map(|(n, line)| {
        parse_line(line).map_err(|errtype| EvalError { lineno: n + 1, errtype })
    }).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_types() {
        assert_eq!(CharType::of('e'), CharType::E);
        assert_eq!(CharType::of('E'), CharType::E);
        assert_eq!(CharType::of('g'), CharType::Letter);
        assert_eq!(CharType::of('Z'), CharType::Letter);
        assert_eq!(CharType::of('7'), CharType::Digit);
        assert_eq!(CharType::of('.'), CharType::Digit);
        assert_eq!(CharType::of('-'), CharType::Digit);
        assert_eq!(CharType::of('+'), CharType::Digit);
        assert_eq!(CharType::of('\t'), CharType::Empty);
        assert_eq!(CharType::of('\0'), CharType::Empty);
        assert_eq!(CharType::of(','), CharType::Invalid);
        assert_eq!(CharType::of('ä'), CharType::Invalid);
    }

    #[test]
    fn test_error_absorbs() {
        for &input in &[CharType::E, CharType::Letter, CharType::Digit,
                        CharType::Empty, CharType::Invalid] {
            assert_eq!(State::Error.next(input), State::Error);
            assert_eq!(State::Idle.next(CharType::Invalid), State::Error);
            assert_eq!(State::Key.next(input) == State::Value, input == CharType::Digit);
        }
    }

    #[test]
    fn test_words() {
        let words = parse_line("g01 x100.5  Y-2e3\tZ+.25 E1").unwrap();
        assert_eq!(words, vec![
            Word::new('G', 1.),
            Word::new('X', 100.5),
            Word::new('Y', -2000.),
            Word::new('Z', 0.25),
            Word::new('E', 1.),
        ]);
        assert!(parse_line("").unwrap().is_empty());
        assert!(parse_line("   \t").unwrap().is_empty());
    }

    #[test]
    fn test_terminators() {
        assert_eq!(parse_line("X1\r\nY2").unwrap(), vec![Word::new('X', 1.)]);
        assert_eq!(parse_line("X1\nY2").unwrap(), vec![Word::new('X', 1.)]);
        assert_eq!(parse_line("X1\0Y2").unwrap(), vec![Word::new('X', 1.)]);
        // garbage after the terminator is never looked at
        assert_eq!(parse_line("X1\n$$").unwrap(), vec![Word::new('X', 1.)]);
    }

    #[test]
    fn test_grammar_errors() {
        for snippet in &["G", "1G", "GG0", "G 01", "G01 X100 100Y", "G01 X5Y10",
                         "G01 X5, Y10", "X1 $", "EE1"] {
            assert_eq!(parse_line(snippet), Err(ErrType::Grammar), "{}", snippet);
        }
    }

    #[test]
    fn test_invalid_numbers() {
        for snippet in &["X-", "X1-2", "X.", "X1e", "X--1", "X1.2.3"] {
            match parse_line(snippet) {
                Err(ErrType::InvalidNumber(_)) => (),
                other => panic!("{}: {:?}", snippet, other),
            }
        }
    }

    #[test]
    fn test_value_length() {
        // exactly at the limit
        let ok = format!("X{}", "1".repeat(MAX_DECIMAL_LENGTH));
        assert!(parse_line(&ok).is_ok());
        let long = format!("X{}", "1".repeat(MAX_DECIMAL_LENGTH + 1));
        assert_eq!(parse_line(&long), Err(ErrType::ValueTooLong));
        assert_eq!(parse_line("X0.000000000000000001"), Err(ErrType::ValueTooLong));
        assert_eq!(parse_line("X1E-18").unwrap(), vec![Word::new('X', 1e-18)]);
    }

    #[test]
    fn test_handler_error_aborts() {
        let mut seen = vec![];
        let res = for_each_word("X1 Y2 Z3", |word| {
            seen.push(word.key);
            if word.key == 'Y' { Err(ErrType::InvalidWord('Y', 2.)) } else { Ok(()) }
        });
        assert_eq!(res, Err(ErrType::InvalidWord('Y', 2.)));
        assert_eq!(seen, vec!['X', 'Y']);
    }

    #[test]
    fn test_program() {
        let prog = parse_program("G0 X1\n\nG1 Y2 F10\n").unwrap();
        assert_eq!(prog.len(), 3);
        assert!(prog[1].is_empty());
        let err = parse_program("G0 X1\nG1 Y2,\n").unwrap_err();
        assert_eq!(err.lineno, 2);
        assert_eq!(err.errtype, ErrType::Grammar);
    }
}
