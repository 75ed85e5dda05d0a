//! Scanner
//!
//!     This module holds the column-sensitive classifier a COBOL grammar calls for the tokens
//!     it cannot describe with character classes. The grammar runtime owns the character
//!     stream; the scanner only reads the lookahead and the column through the [Lexer]
//!     contract, asks for advances, and names the token it commits.
//!
//! Source Format
//!
//!     Fixed format splits every physical line into zones:
//!
//!         columns 0-5    sequence area         prefix comment text
//!         column  6      indicator             `*` or `/` comment line, `-` continuation
//!         columns 7-71   program area          ordinary tokens, parsed by the grammar
//!         columns 72-    identification area   suffix comment text
//!
//!     Free format has no zones. A `>>SOURCE FORMAT IS FREE|FIXED` directive switches between
//!     the two, and the switch is the only state the scanner keeps across calls. See
//!     [mode](mode) for the state and its one byte serialization.
//!
//! The Recognizers
//!
//!     Each scan call receives the set of token kinds the grammar accepts at the current
//!     position and tries the matching recognizers in a fixed order, all against the same
//!     starting position:
//!         1. Format directive. See [directive](recognizers::directive).
//!         2. Whitespace, including `;` and `,`. See [whitespace](recognizers::whitespace).
//!         3. Prefix comment (column 0), indicator comment (column 6), suffix comment
//!            (column 72 and beyond). See [margin](recognizers::margin).
//!         4. Comment entry. See [comment_entry](recognizers::comment_entry).
//!         5. Continued string. See [continued_string](recognizers::continued_string).
//!
//!     The first recognizer to commit wins. Failing is not an error, it only means the
//!     recognizer does not apply and the grammar should try its own rules.
//!
//! Failed Attempts
//!
//!     Recognizers advance the shared cursor while they probe, and a failed directive or
//!     comment entry attempt leaves the cursor wherever probing stopped. Hosts restore the
//!     position on failure; [SourceCursor] offers checkpoints for that. The one deliberate
//!     exception is the indicator column: a non-comment indicator is stepped over and the end
//!     is marked past it before failing, so the host can resume in the program area.

pub mod classifier;
pub mod common;
pub mod cursor;
pub mod keywords;
pub mod mode;
pub mod recognizers;
pub mod token;

pub use classifier::Scanner;
pub use common::Lexer;
pub use cursor::{Checkpoint, SourceCursor, DEFAULT_TAB_WIDTH};
pub use mode::{FormatMode, Zone};
pub use recognizers::continued_string::logical_literal;
pub use token::{TokenKind, TokenKindSet};
