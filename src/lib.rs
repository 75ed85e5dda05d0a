//! # cobol-scanner
//!
//! The external scanner for a COBOL grammar.
//!
//! File Layout
//!
//! A grammar runtime can classify most of a COBOL source with ordinary character classes,
//! but not the parts whose meaning depends on the column they sit in, on the current
//! source format, or on a literal running over the end of a card. Those decisions live
//! here, in a small stateful classifier the runtime calls whenever one of its
//! external tokens is admissible.
//!
//! src/
//!   ├── scanner      The classifier: format mode, token kinds, recognizers, the Lexer contract
//!   ├── host         A reference host that drives the scanner over a whole source
//!   ├── config       Layered configuration for the host and the CLI
//!   ├── ffi          The tree-sitter external scanner ABI
//!   └── error        Errors of the fallible code around the classifier
//!
//! The classifier itself never fails with an error: a recognizer either commits a token or
//! reports that it does not apply. See [scanner] for the recognizers and their order.

#![allow(rustdoc::invalid_html_tags)]

pub mod config;
pub mod error;
pub mod ffi;
pub mod host;
pub mod scanner;

pub use error::{Error, Result};
pub use scanner::{FormatMode, Lexer, Scanner, SourceCursor, TokenKind, TokenKindSet, Zone};
