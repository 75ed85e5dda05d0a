//! Reference host
//!
//! A grammar runtime is what normally decides which external tokens are admissible and what
//! happens when the scanner declines. This module stands in for one so that the scanner can be
//! run over whole sources outside a parser: the CLI dumps its tokens and the tests use it to
//! check recognizers in context.
//!
//!     program_tokens   Fallback lexer for program text, built with logos
//!     driver           The host loop: admissibility, rewinding, paragraph tracking

pub mod driver;
pub mod program_tokens;

pub use driver::{tokenize, Host, HostOptions, Token, TokenClass, Tokenized};
pub use program_tokens::ProgramToken;
