//! Token Classification
//!
//! The stateful classifier a grammar runtime calls at every point where one of the external
//! tokens is admissible. The only state it keeps between calls is the source format, which
//! the runtime saves and restores through [Scanner::serialize] and [Scanner::deserialize].
use crate::scanner::common::Lexer;
use crate::scanner::mode::FormatMode;
use crate::scanner::recognizers::{
    comment_entry, continued_string, directive, margin, whitespace, Indicator,
};
use crate::scanner::token::{TokenKind, TokenKindSet};
use tracing::trace;

/// The external scanner of a COBOL grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scanner {
    mode: FormatMode,
}

impl Scanner {
    /// A scanner in fixed format.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: FormatMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: FormatMode) {
        self.mode = mode;
    }

    /// Tries the admissible recognizers in priority order and commits the first match.
    ///
    /// Returns `false` when none applies. Nothing is committed then, though the lexer may
    /// have been advanced.
    pub fn scan<L: Lexer>(&mut self, lexer: &mut L, admissible: &TokenKindSet) -> bool {
        if lexer.at_eof() {
            return false;
        }
        trace!(column = lexer.column(), lookahead = ?lexer.lookahead(), mode = %self.mode, "scan");

        if admissible.contains(TokenKind::FormatDirective) && directive::scan(lexer, &mut self.mode)
        {
            return true;
        }

        if admissible.contains(TokenKind::Whitespace) && whitespace::scan(lexer) {
            return true;
        }

        if admissible.contains(TokenKind::PrefixComment) && margin::scan_prefix(lexer, self.mode) {
            return true;
        }

        if admissible.contains(TokenKind::LineComment) {
            match margin::scan_indicator(lexer, self.mode) {
                Indicator::Comment => return true,
                Indicator::Consumed => {
                    trace!("indicator column stepped over");
                    return false;
                }
                Indicator::NotApplicable => {}
            }
        }

        if admissible.contains(TokenKind::SuffixComment) && margin::scan_suffix(lexer, self.mode) {
            return true;
        }

        if admissible.contains(TokenKind::CommentEntryText) {
            return comment_entry::scan(lexer);
        }

        if admissible.contains(TokenKind::ContinuedString) {
            return continued_string::scan(lexer, self.mode);
        }

        false
    }

    /// The state as saved by the runtime.
    pub fn serialize(&self) -> [u8; FormatMode::SERIALIZED_LEN] {
        [self.mode.to_byte()]
    }

    /// Writes the state into `buffer`, returning the number of bytes written.
    pub fn serialize_into(&self, buffer: &mut [u8]) -> usize {
        let state = self.serialize();
        match buffer.get_mut(..state.len()) {
            Some(target) => {
                target.copy_from_slice(&state);
                state.len()
            }
            None => 0,
        }
    }

    /// Restores a saved state. An empty buffer leaves the current state in place.
    pub fn deserialize(&mut self, buffer: &[u8]) {
        if let Some(&byte) = buffer.first() {
            self.mode = FormatMode::from_byte(byte);
        }
    }
}
