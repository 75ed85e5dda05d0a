//! Continued string literals
//!
//! In fixed format a literal that reaches column 72 without its closing quote carries on in
//! the program area of the next line, whose indicator column holds `-`:
//!
//!     000100     MOVE "THE FIRST PART OF A LONG LITERAL THAT RUNS TO COLUMN SEVENTY-TWO
//!     000200-    "AND ENDS HERE" TO WS-TEXT.
//!
//! The committed token spans from the opening quote to the closing quote, across every line
//! in between. The sequence area, the indicator and the identification area inside that span
//! are not part of the literal; [logical_literal] strips them.

use crate::scanner::common::Lexer;
use crate::scanner::mode::{FormatMode, Zone};
use crate::scanner::token::TokenKind;
use tracing::trace;

const SEQUENCE_AREA_WIDTH: usize = 6;

pub fn scan<L: Lexer>(lexer: &mut L, mode: FormatMode) -> bool {
    if mode.is_free() {
        return false;
    }
    loop {
        if !lexer.at('"') {
            return false;
        }
        lexer.advance(false);
        while !lexer.at_eof() && !lexer.at('"') && lexer.column() < Zone::IDENTIFICATION_START {
            lexer.advance(false);
        }
        if lexer.at('"') {
            lexer.advance(false);
            return lexer.commit(TokenKind::ContinuedString);
        }

        lexer.advance_to_line_end(true);
        if lexer.at_eof() {
            trace!("unterminated literal at end of input");
            return false;
        }
        lexer.advance(true);
        if !skip_continuation_margin(lexer) {
            trace!("literal not continued on the next line");
            return false;
        }
    }
}

/// Sequence area, `-` indicator, then the blanks before the resumed quote.
fn skip_continuation_margin<L: Lexer>(lexer: &mut L) -> bool {
    for _ in 0..SEQUENCE_AREA_WIDTH {
        if lexer.at_line_end() {
            return false;
        }
        lexer.advance(true);
    }
    if !lexer.at('-') {
        return false;
    }
    lexer.advance(true);
    while lexer.at(' ') && lexer.column() < Zone::IDENTIFICATION_START {
        lexer.advance(true);
    }
    true
}

/// The characters of a committed continued literal, without quotes or margins.
///
/// `start_column` is the column of the opening quote. Tabs count as one column.
pub fn logical_literal(text: &str, start_column: u32) -> String {
    let mut chars = text.chars().peekable();
    let mut content = String::new();
    if chars.next_if_eq(&'"').is_none() {
        return text.to_string();
    }
    let mut column = start_column + 1;

    while let Some(c) = chars.next() {
        match c {
            '"' if chars.peek().is_none() => break,
            '\n' => {
                column = 0;
                for _ in 0..SEQUENCE_AREA_WIDTH {
                    if chars.next_if(|&c| c != '\n').is_some() {
                        column += 1;
                    }
                }
                if chars.next_if_eq(&'-').is_some() {
                    column += 1;
                }
                while column < Zone::IDENTIFICATION_START && chars.next_if_eq(&' ').is_some() {
                    column += 1;
                }
                let resumes = chars.peek() == Some(&'"');
                let mut lookahead = chars.clone();
                lookahead.next();
                if resumes && lookahead.peek().is_some() {
                    chars.next();
                    column += 1;
                }
            }
            _ if column >= Zone::IDENTIFICATION_START => {
                column += 1;
            }
            _ => {
                content.push(c);
                column += 1;
            }
        }
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::cursor::SourceCursor;

    fn continued(first: &str, next: &str) -> String {
        format!("{first}\n{next}")
    }

    #[test]
    fn test_single_line_literal() {
        let mut cursor = SourceCursor::new("\"HELLO\" TO X");
        assert!(scan(&mut cursor, FormatMode::Fixed));
        assert_eq!(cursor.token(), Some((TokenKind::ContinuedString, 0..7)));
    }

    #[test]
    fn test_continuation_without_resume_quote() {
        let source = continued("\"AB", "000200-    CD\"");
        let mut cursor = SourceCursor::new(&source);
        assert!(scan(&mut cursor, FormatMode::Fixed));
        let (kind, span) = cursor.token().unwrap();
        assert_eq!(kind, TokenKind::ContinuedString);
        assert_eq!(span, 0..source.len());
        assert_eq!(logical_literal(&source[span], 0), "ABCD");
    }

    #[test]
    fn test_continuation_past_column_72() {
        let first = format!("{}\"{}", " ".repeat(11), "A".repeat(60));
        let first = format!("{first}SEQ00100");
        let source = continued(&first, "000200-    \"BC\".");
        let mut cursor = SourceCursor::new(&source);
        cursor.seek(11);
        assert!(scan(&mut cursor, FormatMode::Fixed));
        let (_, span) = cursor.token().unwrap();
        assert_eq!(span, 11..source.len() - 1);
        assert_eq!(
            logical_literal(&source[span], 11),
            format!("{}BC", "A".repeat(60))
        );
    }

    #[test]
    fn test_unterminated_literal_fails() {
        let mut cursor = SourceCursor::new("\"NEVER CLOSED");
        assert!(!scan(&mut cursor, FormatMode::Fixed));
        assert_eq!(cursor.result(), None);
        assert_eq!(cursor.marked_end(), None);
    }

    #[test]
    fn test_short_continuation_line_fails() {
        let line = format!("\"{}", "A".repeat(71));
        let source = continued(&line, "0002\n");
        let mut cursor = SourceCursor::new(&source);
        assert!(!scan(&mut cursor, FormatMode::Fixed));
    }

    #[test]
    fn test_missing_hyphen_fails() {
        let line = format!("\"{}", "A".repeat(71));
        let source = continued(&line, "000200     \"B\"");
        let mut cursor = SourceCursor::new(&source);
        assert!(!scan(&mut cursor, FormatMode::Fixed));
    }

    #[test]
    fn test_needs_opening_quote() {
        let mut cursor = SourceCursor::new("'SINGLE'");
        assert!(!scan(&mut cursor, FormatMode::Fixed));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_free_format_disabled() {
        let mut cursor = SourceCursor::new("\"HELLO\"");
        assert!(!scan(&mut cursor, FormatMode::Free));
    }
}
