//! Margin comments of fixed format
//!
//! The sequence area, the indicator column and the identification area carry text the
//! compiler never reads. Each recognizer here only fires in its own zone and only in fixed
//! format.

use super::Indicator;
use crate::scanner::common::Lexer;
use crate::scanner::mode::{FormatMode, Zone};
use crate::scanner::token::TokenKind;

/// Columns 0-5 of a non-empty line.
pub fn scan_prefix<L: Lexer>(lexer: &mut L, mode: FormatMode) -> bool {
    if mode.is_free() || lexer.column() != 0 || lexer.at_line_end() {
        return false;
    }
    while Zone::of(lexer.column()) == Zone::Sequence && !lexer.at_line_end() {
        lexer.advance(false);
    }
    lexer.commit(TokenKind::PrefixComment)
}

/// Column 6: `*` and `/` comment out the whole line.
///
/// Any other indicator is stepped over with the end marked past it, so the grammar picks up
/// in the program area instead of offering the indicator column again.
pub fn scan_indicator<L: Lexer>(lexer: &mut L, mode: FormatMode) -> Indicator {
    if mode.is_free() || Zone::of(lexer.column()) != Zone::Indicator {
        return Indicator::NotApplicable;
    }
    match lexer.lookahead() {
        Some('*') | Some('/') => {
            lexer.advance_to_line_end(false);
            lexer.commit(TokenKind::LineComment);
            Indicator::Comment
        }
        None => Indicator::NotApplicable,
        Some(_) => {
            lexer.advance(true);
            lexer.mark_end();
            Indicator::Consumed
        }
    }
}

/// Column 72 onwards, up to the newline.
pub fn scan_suffix<L: Lexer>(lexer: &mut L, mode: FormatMode) -> bool {
    if mode.is_free() || Zone::of(lexer.column()) != Zone::Identification {
        return false;
    }
    lexer.advance_to_line_end(false);
    lexer.commit(TokenKind::SuffixComment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::cursor::SourceCursor;

    fn at_column(source: &str, column: usize) -> SourceCursor<'_> {
        let mut cursor = SourceCursor::new(source);
        for _ in 0..column {
            cursor.advance(true);
        }
        cursor.begin_token();
        cursor
    }

    #[test]
    fn test_prefix_takes_six_columns() {
        let mut cursor = at_column("000100 IDENTIFICATION DIVISION.", 0);
        assert!(scan_prefix(&mut cursor, FormatMode::Fixed));
        assert_eq!(cursor.token(), Some((TokenKind::PrefixComment, 0..6)));
        assert_eq!(cursor.column(), 6);
    }

    #[test]
    fn test_prefix_stops_at_short_line_end() {
        let mut cursor = at_column("0001\nX", 0);
        assert!(scan_prefix(&mut cursor, FormatMode::Fixed));
        assert_eq!(cursor.token(), Some((TokenKind::PrefixComment, 0..4)));
    }

    #[test]
    fn test_prefix_rejects_empty_line_and_other_columns() {
        let mut cursor = at_column("\nX", 0);
        assert!(!scan_prefix(&mut cursor, FormatMode::Fixed));
        let mut cursor = at_column("000100", 2);
        assert!(!scan_prefix(&mut cursor, FormatMode::Fixed));
    }

    #[test]
    fn test_line_comment() {
        let source = "000100* A COMMENT LINE\nNEXT";
        let mut cursor = at_column(source, 6);
        assert_eq!(scan_indicator(&mut cursor, FormatMode::Fixed), Indicator::Comment);
        assert_eq!(cursor.token(), Some((TokenKind::LineComment, 6..22)));
    }

    #[test]
    fn test_page_eject_is_a_comment() {
        let mut cursor = at_column("      /", 6);
        assert_eq!(scan_indicator(&mut cursor, FormatMode::Fixed), Indicator::Comment);
    }

    #[test]
    fn test_other_indicator_consumes_one_character() {
        let mut cursor = at_column("      D DISPLAY X.", 6);
        assert_eq!(scan_indicator(&mut cursor, FormatMode::Fixed), Indicator::Consumed);
        assert_eq!(cursor.offset(), 7);
        assert_eq!(cursor.marked_end(), Some(7));
        assert_eq!(cursor.result(), None);
    }

    #[test]
    fn test_suffix() {
        let line = format!("{}{}\n", " ".repeat(72), "SEQ00010");
        let mut cursor = at_column(&line, 72);
        assert!(scan_suffix(&mut cursor, FormatMode::Fixed));
        assert_eq!(cursor.token(), Some((TokenKind::SuffixComment, 72..80)));

        let mut cursor = at_column(&line, 71);
        assert!(!scan_suffix(&mut cursor, FormatMode::Fixed));
    }

    #[test]
    fn test_free_format_disables_margins() {
        let mut cursor = at_column("000100* COMMENT", 0);
        assert!(!scan_prefix(&mut cursor, FormatMode::Free));
        let mut cursor = at_column("000100* COMMENT", 6);
        assert_eq!(
            scan_indicator(&mut cursor, FormatMode::Free),
            Indicator::NotApplicable
        );
        let line = " ".repeat(80);
        let mut cursor = at_column(&line, 75);
        assert!(!scan_suffix(&mut cursor, FormatMode::Free));
    }
}
