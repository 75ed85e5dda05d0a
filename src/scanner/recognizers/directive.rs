//! Source format directive
//!
//! Recognizes `>>SOURCE FORMAT [IS] FREE` and `>>SOURCE FORMAT [IS] FIXED`, in any ASCII case
//! and with any run of spaces or tabs between the words, and switches the format mode.
//! Anything after the mode keyword up to the end of the line belongs to the directive.
//!
//! A mismatch anywhere ends the attempt without a token. The characters read up to the
//! mismatch stay consumed; hosts rewind.

use crate::scanner::common::Lexer;
use crate::scanner::mode::FormatMode;
use crate::scanner::token::TokenKind;
use tracing::debug;

pub fn scan<L: Lexer>(lexer: &mut L, mode: &mut FormatMode) -> bool {
    lexer.skip_blanks(false);
    if !expect(lexer, ">>") {
        return false;
    }
    lexer.skip_blanks(false);
    if !expect(lexer, "SOURCE") {
        return false;
    }
    lexer.skip_blanks(false);
    if !expect(lexer, "FORMAT") {
        return false;
    }
    lexer.skip_blanks(false);
    if at_letter(lexer, 'I') {
        if !expect(lexer, "IS") {
            return false;
        }
        lexer.skip_blanks(false);
    }

    let Some(requested) = format_keyword(lexer) else {
        return false;
    };
    if *mode != requested {
        debug!(from = %mode, to = %requested, "source format switched");
    }
    *mode = requested;

    lexer.advance_to_line_end(false);
    lexer.commit(TokenKind::FormatDirective)
}

/// `FREE` or `FIXED`.
fn format_keyword<L: Lexer>(lexer: &mut L) -> Option<FormatMode> {
    if !expect(lexer, "F") {
        return None;
    }
    if at_letter(lexer, 'R') {
        expect(lexer, "REE").then_some(FormatMode::Free)
    } else if at_letter(lexer, 'I') {
        expect(lexer, "IXED").then_some(FormatMode::Fixed)
    } else {
        None
    }
}

fn at_letter<L: Lexer>(lexer: &L, upper: char) -> bool {
    lexer
        .lookahead()
        .is_some_and(|c| c.to_ascii_uppercase() == upper)
}

/// Consumes `word` letter by letter, stopping at the first mismatch.
fn expect<L: Lexer>(lexer: &mut L, word: &str) -> bool {
    for expected in word.chars() {
        if !at_letter(lexer, expected) {
            return false;
        }
        lexer.advance(false);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::cursor::SourceCursor;

    fn run(source: &str, mode: FormatMode) -> (bool, FormatMode, SourceCursor<'_>) {
        let mut cursor = SourceCursor::new(source);
        let mut mode = mode;
        let matched = scan(&mut cursor, &mut mode);
        (matched, mode, cursor)
    }

    #[test]
    fn test_free_directive() {
        let (matched, mode, cursor) = run(">>SOURCE FORMAT IS FREE\n", FormatMode::Fixed);
        assert!(matched);
        assert_eq!(mode, FormatMode::Free);
        assert_eq!(cursor.token(), Some((TokenKind::FormatDirective, 0..23)));
    }

    #[test]
    fn test_fixed_directive_lowercase_without_is() {
        let (matched, mode, _) = run("  >> source\tformat fixed", FormatMode::Free);
        assert!(matched);
        assert_eq!(mode, FormatMode::Fixed);
    }

    #[test]
    fn test_rest_of_line_belongs_to_directive() {
        let (matched, _, cursor) =
            run(">>SOURCE FORMAT FREE trailing words\nNEXT", FormatMode::Fixed);
        assert!(matched);
        assert_eq!(cursor.token(), Some((TokenKind::FormatDirective, 0..35)));
        assert_eq!(cursor.lookahead(), Some('\n'));
    }

    #[test]
    fn test_single_chevron_fails() {
        let (matched, mode, cursor) = run(">SOURCE FORMAT FREE", FormatMode::Fixed);
        assert!(!matched);
        assert_eq!(mode, FormatMode::Fixed);
        assert_eq!(cursor.marked_end(), None);
    }

    #[test]
    fn test_unknown_mode_keeps_state() {
        let (matched, mode, _) = run(">>SOURCE FORMAT IS VARIABLE", FormatMode::Free);
        assert!(!matched);
        assert_eq!(mode, FormatMode::Free);
    }

    #[test]
    fn test_truncated_keyword_fails() {
        let (matched, mode, _) = run(">>SOURCE FORMAT FRE", FormatMode::Fixed);
        assert!(!matched);
        assert_eq!(mode, FormatMode::Fixed);
    }

    #[test]
    fn test_i_without_s_fails() {
        let (matched, _, _) = run(">>SOURCE FORMAT I FREE", FormatMode::Fixed);
        assert!(!matched);
    }
}
