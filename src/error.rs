//! Error types shared by the parser, compiler and VM.
//!
//! Grounded on the teacher's `thompson::bytecode::CompileError`: a plain
//! enum that implements [`std::error::Error`] by hand rather than pulling
//! in an error-derive crate.
//!
//! spec.md §7 names two error kinds, `EINVAL` and `ENOMEM`, but also lists
//! "class allocator overflowed its 32-bit budget" and "arena exhausted"
//! among the *programming-error* conditions that must abort/panic rather
//! than return a code. In this safe-Rust port, true allocation failure
//! (`ENOMEM`) is likewise not a catchable condition — `Vec`/`Box` allocation
//! failure aborts the process via the global allocator, not a `Result` —
//! so `Error` only ever carries the one kind of failure this engine can
//! actually report: `EINVAL`.

use std::fmt;

/// Something went wrong executing a compiled program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument was invalid: an empty program handed to `exec`,
    /// or (in the driver) a malformed command line.
    InvalidArgument(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
