//! Separator runs
//!
//! COBOL treats `;` and `,` as separators interchangeable with spaces, so a run mixing them
//! with any whitespace, newlines included, is a single token.

use crate::scanner::common::Lexer;
use crate::scanner::token::TokenKind;

pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ';' || c == ','
}

pub fn scan<L: Lexer>(lexer: &mut L) -> bool {
    if !lexer.lookahead().is_some_and(is_separator) {
        return false;
    }
    while lexer.lookahead().is_some_and(is_separator) {
        lexer.advance(false);
    }
    lexer.commit(TokenKind::Whitespace)
}
