//! Program-area tokens of the reference host
//!
//! When the scanner declines a position the host falls back to this logos lexer, which stands
//! in for the grammar's own character-class rules. It only needs to be good enough to move
//! past program text and to spot the paragraph headers that open a comment entry.

use logos::Logos;
use serde::Serialize;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgramToken {
    #[regex(r"[0-9]+(\.[0-9]+)?", priority = 5)]
    Number,

    #[regex(r"[A-Za-z0-9][A-Za-z0-9_-]*", priority = 4)]
    Word,

    #[regex(r#""[^"\n]*""#)]
    #[regex(r"'[^'\n]*'")]
    Literal,

    // Free format floating comment
    #[regex(r"\*>[^\n]*")]
    FloatingComment,

    #[token(".")]
    Period,

    #[regex(r"[^\sA-Za-z0-9.]")]
    Symbol,

    /// Text the lexer has no rule for.
    Unknown,
}

impl ProgramToken {
    pub fn name(self) -> &'static str {
        match self {
            ProgramToken::Number => "number",
            ProgramToken::Word => "word",
            ProgramToken::Literal => "literal",
            ProgramToken::FloatingComment => "floating_comment",
            ProgramToken::Period => "period",
            ProgramToken::Symbol => "symbol",
            ProgramToken::Unknown => "unknown",
        }
    }
}

/// Paragraph headers whose body is a comment entry.
pub const COMMENT_ENTRY_PARAGRAPHS: [&str; 5] = [
    "AUTHOR",
    "INSTALLATION",
    "DATE-WRITTEN",
    "DATE-COMPILED",
    "SECURITY",
];

pub fn opens_comment_entry(word: &str) -> bool {
    COMMENT_ENTRY_PARAGRAPHS
        .iter()
        .any(|paragraph| paragraph.eq_ignore_ascii_case(word))
}

/// Lexes the first token of `source`.
///
/// Returns the token and its byte length, which is at least one character for non-empty
/// input.
pub fn next_token(source: &str) -> Option<(ProgramToken, usize)> {
    let first = source.chars().next()?;
    let mut lexer = ProgramToken::lexer(source);
    match lexer.next() {
        Some(Ok(token)) if lexer.span().start == 0 && !lexer.span().is_empty() => {
            Some((token, lexer.span().end))
        }
        _ => Some((ProgramToken::Unknown, first.len_utf8())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<(ProgramToken, &str)> {
        let mut tokens = Vec::new();
        let mut rest = source;
        while let Some((token, len)) = next_token(rest) {
            if token != ProgramToken::Unknown || !rest[..len].trim().is_empty() {
                tokens.push((token, &rest[..len]));
            }
            rest = &rest[len..];
        }
        tokens
    }

    #[test]
    fn test_tokenizes_statement() {
        assert_eq!(
            lex_all("MOVE 12.5 TO WS-TOTAL."),
            vec![
                (ProgramToken::Word, "MOVE"),
                (ProgramToken::Number, "12.5"),
                (ProgramToken::Word, "TO"),
                (ProgramToken::Word, "WS-TOTAL"),
                (ProgramToken::Period, "."),
            ]
        );
    }

    #[test]
    fn test_literals_and_symbols() {
        assert_eq!(
            lex_all("DISPLAY 'HI' \"THERE\" (1)"),
            vec![
                (ProgramToken::Word, "DISPLAY"),
                (ProgramToken::Literal, "'HI'"),
                (ProgramToken::Literal, "\"THERE\""),
                (ProgramToken::Symbol, "("),
                (ProgramToken::Number, "1"),
                (ProgramToken::Symbol, ")"),
            ]
        );
    }

    #[test]
    fn test_unterminated_quote_is_a_symbol() {
        assert_eq!(next_token("\"OPEN"), Some((ProgramToken::Symbol, 1)));
    }

    #[test]
    fn test_floating_comment() {
        assert_eq!(next_token("*> note\nX"), Some((ProgramToken::FloatingComment, 7)));
    }

    #[test]
    fn test_whitespace_is_unknown() {
        assert_eq!(next_token(" X"), Some((ProgramToken::Unknown, 1)));
        assert_eq!(next_token(""), None);
    }

    #[test]
    fn test_comment_entry_paragraphs() {
        assert!(opens_comment_entry("author"));
        assert!(opens_comment_entry("Date-Written"));
        assert!(!opens_comment_entry("PROGRAM-ID"));
    }
}
