//! Priority cascade over per-category matches.
//!
//! Categories are visited in catalog order. Each candidate is tested against
//! every match accepted so far, which at that point only holds matches from
//! strictly higher-priority categories; a candidate that overlaps any of them
//! is dropped. This is not a globally optimal cover: a lower-priority match
//! never displaces a higher-priority one, even when doing so would tag more
//! text.

use tracing::debug;

use crate::category::Category;
use crate::pattern::PatternCatalog;
use crate::scanner::Match;

/// Matches that survived overlap resolution, pairwise non-overlapping.
///
/// Members are stored in acceptance order: grouped by category, highest
/// priority first, and by start offset within a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptedSet {
    matches: Vec<Match>,
}

impl AcceptedSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            matches: Vec::new(),
        }
    }

    /// Scans `text` with every pattern in `catalog` and resolves overlaps by
    /// priority.
    #[must_use]
    pub fn resolve(catalog: &PatternCatalog, text: &str) -> Self {
        let mut accepted = Self::new();
        for pattern in catalog.iter() {
            let before = accepted.len();
            let mut dropped = 0_usize;
            for candidate in pattern.scan(text) {
                if !accepted.offer(candidate) {
                    dropped = dropped.saturating_add(1);
                }
            }
            debug!(
                category = %pattern.category(),
                accepted = accepted.len().saturating_sub(before),
                dropped,
                "resolved category"
            );
        }
        accepted
    }

    /// Adds `candidate` unless it overlaps a match already in the set.
    ///
    /// Returns whether the candidate was accepted. Callers must offer
    /// categories in priority order for the cascade to hold.
    pub fn offer(&mut self, candidate: Match) -> bool {
        if self.overlaps_any(&candidate) {
            return false;
        }
        self.matches.push(candidate);
        true
    }

    /// Returns whether `candidate` intersects any accepted match.
    #[must_use]
    pub fn overlaps_any(&self, candidate: &Match) -> bool {
        self.matches
            .iter()
            .any(|accepted| accepted.overlaps(candidate))
    }

    /// Iterates accepted matches in acceptance order.
    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter()
    }

    /// Returns the accepted matches sorted by start offset.
    #[must_use]
    pub fn in_source_order(&self) -> Vec<Match> {
        let mut ordered = self.matches.clone();
        ordered.sort_by_key(Match::start);
        ordered
    }

    /// Returns the number of accepted matches for `category`.
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.matches
            .iter()
            .filter(|found| found.category() == category)
            .count()
    }

    /// Returns the number of accepted matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns whether no match was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl<'a> IntoIterator for &'a AcceptedSet {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn resolve(text: &str) -> AcceptedSet {
        AcceptedSet::resolve(PatternCatalog::standard(), text)
    }

    fn tagged(text: &str) -> Vec<(Category, &str)> {
        resolve(text)
            .in_source_order()
            .into_iter()
            .filter_map(|found| found.text(text).map(|t| (found.category(), t)))
            .collect()
    }

    #[test]
    fn line_comment_swallows_everything_inside_it() {
        assert_eq!(
            tagged("// return foo(1) 'x'"),
            vec![(Category::Comment, "// return foo(1) 'x'")]
        );
    }

    #[test]
    fn string_suppresses_keyword_inside_it() {
        assert_eq!(
            tagged("const s = 'return';"),
            vec![(Category::Keyword, "const"), (Category::String, "'return'")]
        );
    }

    #[test]
    fn function_and_numbers_are_tagged_separately() {
        assert_eq!(
            tagged("foo(1, 2)"),
            vec![
                (Category::Function, "foo"),
                (Category::Number, "1"),
                (Category::Number, "2"),
            ]
        );
    }

    #[test]
    fn apostrophe_in_comment_does_not_open_a_string() {
        assert_eq!(
            tagged("// it's a test"),
            vec![(Category::Comment, "// it's a test")]
        );
    }

    #[test]
    fn keyword_call_is_tagged_as_keyword() {
        assert_eq!(tagged("if(x)"), vec![(Category::Keyword, "if")]);
    }

    #[test]
    fn string_starting_before_a_comment_is_dropped_when_it_runs_into_it() {
        // The comment claims `// b'` first; the string `'a // b'` starts
        // outside it but still intersects, so it is rejected.
        assert_eq!(
            tagged("x = 'a // b'"),
            vec![(Category::Comment, "// b'")]
        );
    }

    #[test]
    fn comment_marker_inside_string_is_still_a_comment() {
        // Comments are resolved first, so a `#` inside a literal wins.
        assert_eq!(
            tagged("'#' + 1"),
            vec![(Category::Comment, "#' + 1")]
        );
    }

    #[rstest]
    #[case("")]
    #[case("let x = 42; // done")]
    #[case("def f(a): return a # py\nprint(f(\"s\"))")]
    #[case("/* a 'b' */ 'c /* d */' e(1)")]
    fn accepted_matches_never_overlap(#[case] text: &str) {
        let accepted = resolve(text);
        let all: Vec<_> = accepted.iter().collect();
        for (index, left) in all.iter().enumerate() {
            for right in all.iter().skip(index.saturating_add(1)) {
                assert!(!left.overlaps(right), "{left:?} overlaps {right:?}");
            }
        }
    }

    #[test]
    fn acceptance_order_follows_priority() {
        let accepted = resolve("foo(1) // c");
        let categories: Vec<_> = accepted.iter().map(Match::category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn offer_rejects_overlap_with_earlier_acceptance() {
        let mut accepted = AcceptedSet::new();
        let comment = Match::new(Category::Comment, 0..8).expect("comment");
        let number = Match::new(Category::Number, 7..9).expect("number");
        let later = Match::new(Category::Number, 8..9).expect("number");
        assert!(accepted.offer(comment));
        assert!(!accepted.offer(number));
        assert!(accepted.offer(later));
        assert_eq!(accepted.count(Category::Number), 1);
    }

    #[test]
    fn resolution_is_stable() {
        let text = "async function run() { await go(10); }";
        assert_eq!(resolve(text), resolve(text));
    }
}
