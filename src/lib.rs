//! # regexvm
//!
//! **regexvm** is a small, byte-oriented regular expression engine: a
//! recursive-descent parser, a linear bytecode compiler, and a Pike/
//! Thompson-style breadth-first matching VM with submatch capture.
//!
//! ## Usage
//!
//! ```rust
//! use regexvm::Regex;
//!
//! let re = Regex::new(b"[0-9]+").unwrap();
//! assert!(re.is_match(b"abc123"));
//! let mat = re.find(b"abc123").unwrap();
//! assert_eq!(mat.as_bytes(), b"123");
//! ```
//!
//! ## Crate organization
//!
//! - `parser`: recursive-descent parser, producing an [`ast::Arena`] of
//!   [`ast::AstNode`] values.
//! - `charclass`: the `[...]` character-class bitmask table shared by the
//!   parser and the compiled program.
//! - `compile`: AST-to-bytecode compiler.
//! - `program`: the compiled [`program::Program`] (instructions + class
//!   table) and its `exec` entry point.
//! - `vm`: the Pike VM that `Program::exec` runs.
//! - `regex`: a convenience [`Regex`] wrapper over `Program`.
//! - `debug`: disassembler.
//! - `driver`: the command-line grep-like front end (see `src/main.rs`).
//! - `util`: shared match/capture result types.
//!
//! ## License
//!
//! Licensed under MIT or Apache-2.0.

pub mod ast;
pub mod charclass;
pub mod compile;
pub mod debug;
pub mod driver;
pub mod error;
pub mod parser;
pub mod program;
pub mod regex;
pub mod util;
pub mod vm;

pub use error::Error;
pub use program::Program;
pub use regex::Regex;
