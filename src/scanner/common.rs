//! Common scanner module
//!
//! This module contains the interface between the scanner and the character stream it reads.

use crate::scanner::token::TokenKind;

/// The character stream a grammar runtime hands to the scanner.
///
/// The runtime owns the buffer and the position. The scanner reads the current character and
/// its column, advances, and on success marks where the token ends and which kind it is.
pub trait Lexer {
    /// The current character, `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// 0-based column of the current character on its physical line.
    fn column(&self) -> u32;

    /// Moves past the current character.
    ///
    /// With `skip` set the character is insignificant: while the token holds no significant
    /// character yet, skipping moves the token start along with the cursor.
    fn advance(&mut self, skip: bool);

    /// Freezes the end of the token at the current position.
    fn mark_end(&mut self);

    /// Names the kind of the token being committed.
    fn set_result(&mut self, kind: TokenKind);

    /// Shorthand for a lookahead test.
    fn at(&self, c: char) -> bool {
        self.lookahead() == Some(c)
    }

    /// True at end of input.
    fn at_eof(&self) -> bool {
        self.lookahead().is_none()
    }

    /// True at a newline or at end of input.
    fn at_line_end(&self) -> bool {
        matches!(self.lookahead(), None | Some('\n'))
    }

    /// Advances over spaces and tabs.
    fn skip_blanks(&mut self, skip: bool) {
        while matches!(self.lookahead(), Some(' ') | Some('\t')) {
            self.advance(skip);
        }
    }

    /// Advances up to, but not over, the next newline.
    fn advance_to_line_end(&mut self, skip: bool) {
        while !self.at_line_end() {
            self.advance(skip);
        }
    }

    /// Marks the end and names the token in one step.
    fn commit(&mut self, kind: TokenKind) -> bool {
        self.set_result(kind);
        self.mark_end();
        true
    }
}
