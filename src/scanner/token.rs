//! Token kinds produced by the scanner
//!
//! The ordinal of each kind is its index in a grammar runtime's admissible symbol array, so
//! the declaration order below is part of the external interface.

use serde::Serialize;
use std::fmt;

/// The external tokens a COBOL grammar delegates to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Whitespace,
    PrefixComment,
    SuffixComment,
    LineComment,
    FormatDirective,
    CommentEntryText,
    ContinuedString,
}

impl TokenKind {
    pub const COUNT: usize = 7;

    /// All kinds, in symbol order.
    pub const ALL: [TokenKind; TokenKind::COUNT] = [
        TokenKind::Whitespace,
        TokenKind::PrefixComment,
        TokenKind::SuffixComment,
        TokenKind::LineComment,
        TokenKind::FormatDirective,
        TokenKind::CommentEntryText,
        TokenKind::ContinuedString,
    ];

    /// Symbol index of this kind.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<TokenKind> {
        Self::ALL.get(index).copied()
    }

    /// The grammar-facing name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "white_spaces",
            TokenKind::PrefixComment => "line_prefix_comment",
            TokenKind::SuffixComment => "line_suffix_comment",
            TokenKind::LineComment => "line_comment",
            TokenKind::FormatDirective => "source_format_directive",
            TokenKind::CommentEntryText => "comment_entry",
            TokenKind::ContinuedString => "multiline_string",
        }
    }

    /// Comments and whitespace: text the grammar never sees as structure.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::PrefixComment
                | TokenKind::SuffixComment
                | TokenKind::LineComment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of kinds the grammar accepts at the current position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TokenKindSet {
    bits: u8,
}

impl TokenKindSet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub const fn all() -> Self {
        Self {
            bits: (1 << TokenKind::COUNT) - 1,
        }
    }

    pub fn of(kinds: &[TokenKind]) -> Self {
        kinds.iter().fold(Self::empty(), |set, &kind| set.with(kind))
    }

    /// Builds the set from a runtime's `valid_symbols` array.
    ///
    /// Entries past the known kinds are ignored.
    pub fn from_valid_symbols(valid: &[bool]) -> Self {
        valid
            .iter()
            .zip(TokenKind::ALL)
            .filter(|(valid, _)| **valid)
            .fold(Self::empty(), |set, (_, kind)| set.with(kind))
    }

    pub fn with(mut self, kind: TokenKind) -> Self {
        self.insert(kind);
        self
    }

    pub fn without(mut self, kind: TokenKind) -> Self {
        self.remove(kind);
        self
    }

    pub fn insert(&mut self, kind: TokenKind) {
        self.bits |= 1 << kind.index();
    }

    pub fn remove(&mut self, kind: TokenKind) {
        self.bits &= !(1 << kind.index());
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.bits & (1 << kind.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL
            .into_iter()
            .filter(move |&kind| self.contains(kind))
    }
}

impl FromIterator<TokenKind> for TokenKindSet {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, kind| set.with(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_order() {
        for (index, kind) in TokenKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), index);
            assert_eq!(TokenKind::from_index(index), Some(*kind));
        }
        assert_eq!(TokenKind::from_index(TokenKind::COUNT), None);
    }

    #[test]
    fn test_set_operations() {
        let set = TokenKindSet::of(&[TokenKind::Whitespace, TokenKind::ContinuedString]);
        assert!(set.contains(TokenKind::Whitespace));
        assert!(set.contains(TokenKind::ContinuedString));
        assert!(!set.contains(TokenKind::LineComment));

        let set = set.without(TokenKind::Whitespace);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![TokenKind::ContinuedString]);
        assert!(TokenKindSet::empty().is_empty());
        assert_eq!(TokenKindSet::all().iter().count(), TokenKind::COUNT);
    }

    #[test]
    fn test_from_valid_symbols() {
        let set = TokenKindSet::from_valid_symbols(&[
            true, false, false, true, false, false, true, true,
        ]);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![
                TokenKind::Whitespace,
                TokenKind::LineComment,
                TokenKind::ContinuedString
            ]
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(TokenKind::ContinuedString.to_string(), "multiline_string");
        assert!(TokenKind::SuffixComment.is_trivia());
        assert!(!TokenKind::CommentEntryText.is_trivia());
    }
}
