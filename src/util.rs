//! Shared result types returned by [`crate::regex::Regex`].
//!
//! Grounded on the teacher's `util.rs` (`Span`/`Match`/`Captures` split),
//! narrowed from `&str`/codepoint bounds to `&[u8]`/byte offsets since this
//! engine has no notion of a codepoint (spec.md's Non-goals rule out
//! Unicode entirely).

use std::ops::Range;

/// A byte-offset span into a subject slice.
#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub from: usize,
    pub to: usize,
}

impl Span {
    pub fn empty(&self) -> bool {
        self.from == self.to
    }
}

impl From<Range<usize>> for Span {
    fn from(value: Range<usize>) -> Self {
        Self {
            from: value.start,
            to: value.end,
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(val: Span) -> Self {
        val.from..val.to
    }
}

/// A successful non-capturing match: the bounds of the overall match ($0).
#[derive(Copy, Debug, Clone)]
pub struct Match<'s> {
    pub subject: &'s [u8],
    pub span: Span,
}

impl<'s> Match<'s> {
    pub fn new(subject: &'s [u8], span: impl Into<Span>) -> Self {
        Self {
            subject,
            span: span.into(),
        }
    }

    pub fn as_bytes(&self) -> &'s [u8] {
        &self.subject[self.span.from..self.span.to]
    }

    /// The byte offset where a following non-overlapping search should
    /// resume. An empty match advances by one byte so a caller looping
    /// over matches doesn't spin forever on the same position.
    pub fn next_match_start(&self) -> usize {
        if self.span.empty() {
            self.span.to + 1
        } else {
            self.span.to
        }
    }
}

/// A successful capturing match. Holds the bounds of every group that
/// participated, including the implicit group 0 (the whole match); groups
/// that didn't participate are `None`.
#[derive(Debug, Clone)]
pub struct Captures<'s> {
    subject: &'s [u8],
    spans: Box<[Option<Span>]>,
}

impl<'s> Captures<'s> {
    pub fn new(subject: &'s [u8], spans: Box<[Option<Span>]>) -> Self {
        Self { subject, spans }
    }

    pub fn get(&self, group_index: usize) -> Option<Match<'s>> {
        let span = (*self.spans.get(group_index)?)?;
        Some(Match {
            subject: self.subject,
            span,
        })
    }

    pub fn group0(&self) -> Match<'s> {
        self.get(0).expect("group 0 always participates in a match")
    }

    pub fn group_len(&self) -> usize {
        self.spans.len()
    }
}
