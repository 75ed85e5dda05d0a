//! Recognizers
//!
//!     One module per external token family. Every recognizer has the same shape: it reads
//!     the lexer from the position the scan started at and either commits a token (marks the
//!     end, names the kind, returns `true`) or returns `false` without committing.
//!
//!     Recognizers that depend on the source layout take the current [FormatMode] and fail
//!     outright in free format. The directive recognizer is the only one that changes it.
//!
//! [FormatMode]: crate::scanner::mode::FormatMode

pub mod comment_entry;
pub mod continued_string;
pub mod directive;
pub mod margin;
pub mod whitespace;

/// Outcome of the indicator column recognizer, which can fail in two ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// A `*` or `/` comment line was committed.
    Comment,
    /// The indicator was stepped over; the scan ends without a token.
    Consumed,
    /// Not at the indicator column, or not in fixed format.
    NotApplicable,
}
