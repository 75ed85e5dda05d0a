//! The reference host loop
//!
//! [Host] plays the part of a grammar runtime: at every position it decides which external
//! tokens are admissible, calls the scanner, and falls back to [program tokens] when the
//! scanner declines. Every scan starts from a checkpoint, so a declined attempt leaves no
//! trace: the host rewinds before trying anything else.
//!
//! [program tokens]: super::program_tokens

use super::program_tokens::{self, ProgramToken};
use crate::scanner::{
    Checkpoint, FormatMode, Lexer, Scanner, SourceCursor, TokenKind, TokenKindSet, Zone,
    DEFAULT_TAB_WIDTH,
};
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use tracing::debug;

/// What produced a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "source", content = "kind", rename_all = "kebab-case")]
pub enum TokenClass {
    /// Committed by the scanner.
    External(TokenKind),
    /// Lexed by the host's fallback rules.
    Program(ProgramToken),
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenClass::External(kind) => f.write_str(kind.name()),
            TokenClass::Program(token) => f.write_str(token.name()),
        }
    }
}

/// A classified span of the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub class: TokenClass,
    pub span: Range<usize>,
    pub text: String,
    /// Scanner state saved before the token; resuming here restores it.
    pub state: u8,
}

/// `start..end class "text"`, the line format of text dumps.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{} {} {:?}",
            self.span.start, self.span.end, self.class, self.text
        )
    }
}

/// Options of a host run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostOptions {
    pub initial_format: FormatMode,
    pub tab_width: u32,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            initial_format: FormatMode::Fixed,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl From<&crate::config::ScanConfig> for HostOptions {
    fn from(config: &crate::config::ScanConfig) -> Self {
        Self {
            initial_format: config.initial_format,
            tab_width: config.tab_width,
        }
    }
}

/// Result of a host run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    /// Format mode after the last token.
    pub final_mode: FormatMode,
}

/// Where the grammar stands with respect to comment entry paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paragraph {
    Code,
    /// A comment entry paragraph name was read; its period is next.
    Header,
    CommentEntry,
}

enum Attempt {
    Token(TokenKind, Range<usize>),
    /// The scanner declined but marked an end to resume from.
    Skipped(usize),
    Declined,
}

/// Drives a [Scanner] over a whole source.
pub struct Host<'a> {
    cursor: SourceCursor<'a>,
    scanner: Scanner,
    paragraph: Paragraph,
    comment_entry_offered_at: Option<usize>,
    tokens: Vec<Token>,
}

impl<'a> Host<'a> {
    pub fn new(source: &'a str, options: HostOptions) -> Self {
        Self {
            cursor: SourceCursor::with_tab_width(source, options.tab_width),
            scanner: Scanner::with_mode(options.initial_format),
            paragraph: Paragraph::Code,
            comment_entry_offered_at: None,
            tokens: Vec::new(),
        }
    }

    /// A host resuming at `offset` with a saved scanner state, as after an edit.
    pub fn resume(source: &'a str, options: HostOptions, offset: usize, state: &[u8]) -> Self {
        let mut host = Self::new(source, options);
        host.scanner.deserialize(state);
        host.cursor.seek(offset);
        host
    }

    pub fn run(mut self) -> Tokenized {
        while !self.cursor.is_eof() {
            self.step();
        }
        Tokenized {
            tokens: self.tokens,
            final_mode: self.scanner.mode(),
        }
    }

    fn step(&mut self) {
        let start = self.cursor.checkpoint();
        let state = self.scanner.serialize()[0];
        let admissible = self.admissible();

        let mut attempt = self.attempt(start, admissible);
        if matches!(attempt, Attempt::Declined) && admissible.contains(TokenKind::FormatDirective) {
            attempt = self.attempt(start, admissible.without(TokenKind::FormatDirective));
        }

        match attempt {
            Attempt::Token(TokenKind::CommentEntryText, span) => {
                // The entry is committed empty after the text it skipped; the dump shows that text.
                self.comment_entry_offered_at = Some(span.end);
                let kind = TokenClass::External(TokenKind::CommentEntryText);
                self.push(kind, start.offset()..span.end, state);
            }
            Attempt::Token(kind, span) => {
                self.push(TokenClass::External(kind), span, state);
            }
            Attempt::Skipped(end) => self.cursor.seek(end),
            Attempt::Declined => {
                if admissible.contains(TokenKind::CommentEntryText) {
                    self.paragraph = Paragraph::Code;
                }
                self.cursor.restore(start);
                self.program_token(state);
            }
        }
    }

    /// The external tokens the stand-in grammar accepts at the cursor.
    fn admissible(&self) -> TokenKindSet {
        let mut admissible = TokenKindSet::all()
            .without(TokenKind::FormatDirective)
            .without(TokenKind::CommentEntryText);
        if self.rest_of_line().trim_start().starts_with(">>") {
            admissible.insert(TokenKind::FormatDirective);
        }
        if self.paragraph == Paragraph::CommentEntry
            && self.comment_entry_offered_at != Some(self.cursor.offset())
        {
            admissible.insert(TokenKind::CommentEntryText);
        }
        admissible
    }

    fn attempt(&mut self, start: Checkpoint, admissible: TokenKindSet) -> Attempt {
        self.cursor.restore(start);
        if self.scanner.scan(&mut self.cursor, &admissible) {
            if let Some((kind, span)) = self.cursor.token() {
                if self.cursor.offset() != span.end {
                    self.cursor.seek(span.end);
                }
                return Attempt::Token(kind, span);
            }
        }
        match self.cursor.marked_end() {
            Some(end) if end > start.offset() => Attempt::Skipped(end),
            _ => Attempt::Declined,
        }
    }

    fn program_token(&mut self, state: u8) {
        let start = self.cursor.offset();
        let Some((token, len)) = program_tokens::next_token(self.program_area()) else {
            self.cursor.advance(false);
            return;
        };
        debug!(?token, offset = start, "program token");
        let text = &self.cursor.source()[start..start + len];
        self.paragraph = match (self.paragraph, token) {
            (_, ProgramToken::Word) if program_tokens::opens_comment_entry(text) => {
                Paragraph::Header
            }
            (Paragraph::Header, ProgramToken::Period) => Paragraph::CommentEntry,
            (Paragraph::Header, _) => Paragraph::Code,
            (paragraph, _) => paragraph,
        };
        for _ in text.chars() {
            self.cursor.advance(false);
        }
        self.push(TokenClass::Program(token), start..start + len, state);
    }

    fn push(&mut self, class: TokenClass, span: Range<usize>, state: u8) {
        let text = self.cursor.source()[span.clone()].to_string();
        self.tokens.push(Token {
            class,
            span,
            text,
            state,
        });
    }

    fn rest_of_line(&self) -> &'a str {
        let rest = &self.cursor.source()[self.cursor.offset()..];
        rest.split('\n').next().unwrap_or(rest)
    }

    /// The text the fallback lexer may read: in fixed format it stops at column 72.
    fn program_area(&self) -> &'a str {
        let rest = self.rest_of_line();
        let column = self.cursor.column();
        if self.scanner.mode().is_free() || column >= Zone::IDENTIFICATION_START {
            return rest;
        }
        let width = (Zone::IDENTIFICATION_START - column) as usize;
        let end = rest.char_indices().nth(width).map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    }
}

/// Classifies a whole source.
pub fn tokenize(source: &str, options: HostOptions) -> Tokenized {
    Host::new(source, options).run()
}
