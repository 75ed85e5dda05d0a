//! Reference character stream for the scanner.
//!
//! [SourceCursor] implements [Lexer] over a `&str` the way a grammar runtime does: it owns the
//! position, counts columns, and records the token the scanner commits. It also rewinds, which
//! lets a host throw away whatever a failed scan consumed.

use crate::scanner::common::Lexer;
use crate::scanner::token::TokenKind;
use std::ops::Range;

/// Column width of a tab unless configured otherwise: one column, like any other character.
pub const DEFAULT_TAB_WIDTH: u32 = 1;

/// A saved cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    offset: usize,
    column: u32,
}

impl Checkpoint {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

/// Byte cursor over source text with column tracking and token bookkeeping.
#[derive(Debug, Clone)]
pub struct SourceCursor<'a> {
    source: &'a str,
    offset: usize,
    column: u32,
    tab_width: u32,
    token_start: usize,
    has_content: bool,
    marked_end: Option<usize>,
    result: Option<TokenKind>,
}

impl<'a> SourceCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_tab_width(source, DEFAULT_TAB_WIDTH)
    }

    /// A cursor whose tabs advance the column to the next multiple of `tab_width`.
    pub fn with_tab_width(source: &'a str, tab_width: u32) -> Self {
        Self {
            source,
            offset: 0,
            column: 0,
            tab_width: tab_width.max(1),
            token_start: 0,
            has_content: false,
            marked_end: None,
            result: None,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Clears the token state so the next token starts at the current position.
    pub fn begin_token(&mut self) {
        self.token_start = self.offset;
        self.has_content = false;
        self.marked_end = None;
        self.result = None;
    }

    pub fn token_start(&self) -> usize {
        self.token_start
    }

    pub fn marked_end(&self) -> Option<usize> {
        self.marked_end
    }

    pub fn result(&self) -> Option<TokenKind> {
        self.result
    }

    /// The committed token: its kind and the byte span from token start to marked end.
    pub fn token(&self) -> Option<(TokenKind, Range<usize>)> {
        let kind = self.result?;
        let end = self.marked_end?;
        Some((kind, self.token_start.min(end)..end))
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            offset: self.offset,
            column: self.column,
        }
    }

    /// Rewinds to `checkpoint` and clears the token state there.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.offset = checkpoint.offset;
        self.column = checkpoint.column;
        self.begin_token();
    }

    /// Moves to `offset` on the same cursor, recounting the column from the line start.
    ///
    /// An offset inside a character moves back to that character's start.
    pub fn seek(&mut self, offset: usize) {
        let mut offset = offset.min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }
        let line_start = self.source[..offset].rfind('\n').map_or(0, |i| i + 1);
        self.offset = line_start;
        self.column = 0;
        while self.offset < offset {
            self.step();
        }
        self.begin_token();
    }

    fn step(&mut self) {
        let Some(c) = self.lookahead() else {
            return;
        };
        self.offset += c.len_utf8();
        self.column = match c {
            '\n' => 0,
            '\t' => (self.column / self.tab_width + 1) * self.tab_width,
            _ => self.column + 1,
        };
    }
}

impl Lexer for SourceCursor<'_> {
    fn lookahead(&self) -> Option<char> {
        self.source.get(self.offset..)?.chars().next()
    }

    fn column(&self) -> u32 {
        self.column
    }

    fn advance(&mut self, skip: bool) {
        if self.is_eof() {
            return;
        }
        self.step();
        if skip && !self.has_content {
            self.token_start = self.offset;
        } else if !skip {
            self.has_content = true;
        }
    }

    fn mark_end(&mut self) {
        self.marked_end = Some(self.offset);
    }

    fn set_result(&mut self, kind: TokenKind) {
        self.result = Some(kind);
    }
}
