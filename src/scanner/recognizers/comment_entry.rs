//! Comment entries
//!
//! The AUTHOR, INSTALLATION, DATE-WRITTEN, DATE-COMPILED and SECURITY paragraphs take free
//! text the grammar cannot parse. This recognizer gives the grammar permission to treat the
//! upcoming line as such text, unless the line starts with one of the
//! [comment entry keywords](crate::scanner::keywords::COMMENT_ENTRY_KEYWORDS), which means
//! structured code resumes.
//!
//! Everything the recognizer reads is skipped, so the committed token is empty and sits at the
//! point where reading stopped: past the text when it was found to be free text.

use crate::scanner::common::Lexer;
use crate::scanner::keywords::CommentEntryMatcher;
use crate::scanner::mode::Zone;
use crate::scanner::token::TokenKind;
use tracing::trace;

/// Outcome of checking a line against the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStart {
    /// The line starts with this keyword.
    Keyword(&'static str),
    /// No keyword can match any more.
    FreeText,
    /// The line ended while some keyword could still have matched.
    LineEnd,
}

pub fn scan<L: Lexer>(lexer: &mut L) -> bool {
    match classify_line_start(lexer) {
        LineStart::Keyword(keyword) => {
            trace!(keyword, "comment entry ends at keyword");
            false
        }
        LineStart::FreeText | LineStart::LineEnd => lexer.commit(TokenKind::CommentEntryText),
    }
}

/// Reads the line start against the keyword table, skipping everything it reads.
///
/// Free text is skipped up to column 71 or the end of the line.
pub fn classify_line_start<L: Lexer>(lexer: &mut L) -> LineStart {
    lexer.skip_blanks(true);
    let mut matcher = CommentEntryMatcher::comment_entry();
    loop {
        if let Some(keyword) = matcher.completed() {
            return LineStart::Keyword(keyword);
        }
        if past_program_area(lexer) {
            return LineStart::LineEnd;
        }
        if matcher.all_dead() {
            while lexer.column() < Zone::PROGRAM_LAST && !lexer.at_line_end() {
                lexer.advance(true);
            }
            return LineStart::FreeText;
        }
        if let Some(c) = lexer.lookahead() {
            matcher.feed(c);
        }
        lexer.advance(true);
    }
}

fn past_program_area<L: Lexer>(lexer: &L) -> bool {
    lexer.column() > Zone::PROGRAM_LAST || lexer.at_line_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::cursor::SourceCursor;

    #[test]
    fn test_keyword_line_is_not_comment_entry() {
        let mut cursor = SourceCursor::new("AUTHOR JOHN DOE.");
        assert!(!scan(&mut cursor));
        assert_eq!(cursor.result(), None);
    }

    #[test]
    fn test_free_text_is_comment_entry() {
        let mut cursor = SourceCursor::new("SOME FREE TEXT.\nNEXT");
        assert!(scan(&mut cursor));
        assert_eq!(cursor.token(), Some((TokenKind::CommentEntryText, 15..15)));
        assert_eq!(cursor.lookahead(), Some('\n'));
    }

    #[test]
    fn test_leading_blanks_skipped() {
        let mut cursor = SourceCursor::new("    \tprocedure division.");
        assert_eq!(
            classify_line_start(&mut cursor),
            LineStart::Keyword("procedure division")
        );
    }

    #[test]
    fn test_keyword_at_line_end_still_counts() {
        let mut cursor = SourceCursor::new("SECURITY\n");
        assert_eq!(classify_line_start(&mut cursor), LineStart::Keyword("security"));
    }

    #[test]
    fn test_partial_keyword_at_line_end() {
        let mut cursor = SourceCursor::new("DATE-WRIT\n");
        assert_eq!(classify_line_start(&mut cursor), LineStart::LineEnd);
        let mut cursor = SourceCursor::new("DATE-WRIT\n");
        assert!(scan(&mut cursor));
    }

    #[test]
    fn test_free_text_stops_at_column_71() {
        let line = format!("{}{}", "X".repeat(71), "YYYYYYYYYY");
        let mut cursor = SourceCursor::new(&line);
        assert_eq!(classify_line_start(&mut cursor), LineStart::FreeText);
        assert_eq!(cursor.column(), 71);
        assert_eq!(cursor.lookahead(), Some('Y'));
    }

    #[test]
    fn test_empty_line() {
        let mut cursor = SourceCursor::new("\nAUTHOR.");
        assert_eq!(classify_line_start(&mut cursor), LineStart::LineEnd);
        assert_eq!(cursor.offset(), 0);
    }
}
