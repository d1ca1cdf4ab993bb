//! Types and API for regex matching.
//!
//! This module defines the [`Regex`] struct, a convenience wrapper around a
//! compiled [`Program`]. Grounded on the teacher's `regex.rs` `Regex`/
//! `RegexEngine` split, collapsed to a single engine: the teacher dispatches
//! between a `PikeVM` and a JIT-compiled `JittedRegex` at runtime, but a JIT
//! backend is out of scope here (spec.md §9's Open Question resolution), so
//! there is nothing left to dispatch over and `Regex` wraps `Program`
//! directly.

use crate::error::Error;
use crate::program::Program;
use crate::util::{Captures, Match, Span};
use crate::vm::CAPTURE_SLOTS;

/// A compiled regular expression, ready to match against byte slices.
pub struct Regex {
    program: Program,
}

impl Regex {
    /// Compiles `pattern`. The pattern itself is a byte sequence; it is not
    /// required to be valid UTF-8 (spec.md's grammar is byte-oriented).
    pub fn new(pattern: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            program: Program::compile(pattern)?,
        })
    }

    /// The underlying compiled program, e.g. to pass to
    /// [`crate::debug::disassemble`].
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Returns whether `subject` contains a match, without computing match
    /// bounds.
    pub fn is_match(&self, subject: &[u8]) -> bool {
        let mut captures = [None; CAPTURE_SLOTS];
        self.program
            .exec(subject, &mut captures)
            .expect("a compiled program always has at least one instruction")
    }

    /// Finds the leftmost match in `subject`, if any.
    pub fn find<'s>(&self, subject: &'s [u8]) -> Option<Match<'s>> {
        self.find_captures(subject).map(|c| c.group0())
    }

    /// Finds the leftmost match in `subject`, together with the bounds of
    /// every participating capture group.
    pub fn find_captures<'s>(&self, subject: &'s [u8]) -> Option<Captures<'s>> {
        let mut slots = [None; CAPTURE_SLOTS];
        let matched = self
            .program
            .exec(subject, &mut slots)
            .expect("a compiled program always has at least one instruction");
        if !matched {
            return None;
        }
        let spans = slots_to_spans(&slots);
        Some(Captures::new(subject, spans))
    }

    /// Iterates over all non-overlapping matches in `subject`, leftmost
    /// first.
    pub fn find_iter<'r, 's>(&'r self, subject: &'s [u8]) -> FindMatches<'r, 's> {
        FindMatches {
            regex: self,
            subject,
            pos: 0,
        }
    }
}

fn slots_to_spans(slots: &[Option<usize>; CAPTURE_SLOTS]) -> Box<[Option<Span>]> {
    slots
        .chunks_exact(2)
        .map(|pair| match (pair[0], pair[1]) {
            (Some(from), Some(to)) => Some(Span { from, to }),
            _ => None,
        })
        .collect()
}

/// Iterator returned by [`Regex::find_iter`].
pub struct FindMatches<'r, 's> {
    regex: &'r Regex,
    subject: &'s [u8],
    pos: usize,
}

impl<'r, 's> Iterator for FindMatches<'r, 's> {
    type Item = Match<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.subject.len() {
            return None;
        }
        let m = self.regex.find(&self.subject[self.pos..])?;
        let shifted = Match::new(
            self.subject,
            Span {
                from: m.span.from + self.pos,
                to: m.span.to + self.pos,
            },
        );
        self.pos += m.next_match_start();
        Some(shifted)
    }
}
