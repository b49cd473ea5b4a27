//! Left-to-right scanning of a single pattern over a snippet.
//!
//! A scan resumes immediately after the end of the previous full match, so a
//! pattern never matches the same bytes twice. For the function matcher the
//! full match includes the opening parenthesis even though the reported
//! token does not.

use std::num::NonZeroUsize;
use std::ops::Range;

use regex::CaptureMatches;

use crate::category::Category;
use crate::pattern::Pattern;

/// One located occurrence of a pattern.
///
/// Offsets are byte offsets into the scanned text. The length is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    category: Category,
    start: usize,
    length: NonZeroUsize,
}

impl Match {
    /// Creates a match covering `range`.
    ///
    /// Returns `None` when the range is empty or reversed.
    #[must_use]
    pub fn new(category: Category, range: Range<usize>) -> Option<Self> {
        let length = NonZeroUsize::new(range.end.checked_sub(range.start)?)?;
        Some(Self {
            category,
            start: range.start,
            length,
        })
    }

    /// Returns the category of the match.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the byte offset where the match starts.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the length of the match in bytes.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length.get()
    }

    /// Returns the byte offset one past the end of the match.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start.saturating_add(self.length.get())
    }

    /// Returns the half-open byte range of the match.
    #[must_use]
    pub const fn byte_range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Returns whether the two half-open ranges intersect.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Returns the matched text within `source`.
    ///
    /// Returns `None` if `source` is not the text this match was found in.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.byte_range())
    }
}

/// Iterator over the matches of one pattern in one text.
#[derive(Debug)]
pub struct Scan<'p, 't> {
    category: Category,
    token_group: usize,
    captures: CaptureMatches<'p, 't>,
}

impl<'p, 't> Scan<'p, 't> {
    pub(crate) fn new(pattern: &'p Pattern, text: &'t str) -> Self {
        Self {
            category: pattern.category(),
            token_group: pattern.token_group(),
            captures: pattern.regex().captures_iter(text),
        }
    }
}

impl Iterator for Scan<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let captures = self.captures.next()?;
            let token = captures
                .get(self.token_group)
                .and_then(|group| Match::new(self.category, group.range()));
            if token.is_some() {
                return token;
            }
        }
    }
}
