//! Paragraph keywords that end a comment entry
//!
//! A comment entry runs until a line starts with one of these phrases. Matching is done by a
//! set of independent matchers fed the same characters in lockstep, each dropping out on its
//! first mismatch.

/// Phrases that start structured code again after a comment entry, in match order.
pub const COMMENT_ENTRY_KEYWORDS: [&str; 9] = [
    "author",
    "installation",
    "date-written",
    "date-compiled",
    "security",
    "identification division",
    "environment division",
    "data division",
    "procedure division",
];

#[derive(Debug, Clone, Copy)]
struct Candidate {
    keyword: &'static str,
    matched: usize,
    live: bool,
}

impl Candidate {
    fn new(keyword: &'static str) -> Self {
        Self {
            keyword,
            matched: 0,
            live: true,
        }
    }

    fn is_complete(&self) -> bool {
        self.live && self.matched == self.keyword.len()
    }

    fn feed(&mut self, c: char) {
        if !self.live {
            return;
        }
        match self.keyword.as_bytes().get(self.matched) {
            Some(&expected) if c.eq_ignore_ascii_case(&(expected as char)) => self.matched += 1,
            _ => self.live = false,
        }
    }
}

/// Lockstep matcher over a fixed keyword table.
#[derive(Debug, Clone)]
pub struct KeywordMatcher<const N: usize> {
    candidates: [Candidate; N],
}

/// The matcher a comment entry line is checked with.
pub type CommentEntryMatcher = KeywordMatcher<9>;

impl CommentEntryMatcher {
    pub fn comment_entry() -> Self {
        Self::new(COMMENT_ENTRY_KEYWORDS)
    }
}

impl<const N: usize> KeywordMatcher<N> {
    pub fn new(keywords: [&'static str; N]) -> Self {
        Self {
            candidates: keywords.map(Candidate::new),
        }
    }

    /// Feeds the next character to every live candidate.
    pub fn feed(&mut self, c: char) {
        for candidate in self.candidates.iter_mut() {
            candidate.feed(c);
        }
    }

    /// The first keyword matched in full, if any.
    pub fn completed(&self) -> Option<&'static str> {
        self.candidates
            .iter()
            .find(|candidate| candidate.is_complete())
            .map(|candidate| candidate.keyword)
    }

    pub fn all_dead(&self) -> bool {
        self.candidates.iter().all(|candidate| !candidate.live)
    }

    /// Number of candidates still matching.
    pub fn live(&self) -> usize {
        self.candidates.iter().filter(|candidate| candidate.live).count()
    }
}
