//! Category matchers and the fixed catalog that orders them.
//!
//! A [`Pattern`] pairs a [`Category`] with a compiled regular expression. The
//! [`PatternCatalog`] holds one pattern per category in priority order and is
//! shared process-wide; it carries no per-call state.
//!
//! The `regex` engine guarantees linear-time search, so adversarial input
//! cannot trigger catastrophic backtracking in the block comment or string
//! rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::category::Category;
use crate::error::SyntaxError;
use crate::scanner::Scan;

/// Reserved words recognised by the keyword matcher.
pub const KEYWORDS: &[&str] = &[
    "const",
    "let",
    "var",
    "function",
    "async",
    "await",
    "return",
    "if",
    "else",
    "for",
    "while",
    "import",
    "from",
    "class",
    "def",
    "true",
    "false",
    "null",
    "undefined",
];

const COMMENT_SOURCE: &str = r"//[^\r\n]*|/\*[\s\S]*?\*/|#[^\r\n]*";
const STRING_SOURCE: &str = r#"'(?:\\.|[^\\'])*'|"(?:\\.|[^\\"])*"|`(?:\\.|[^\\`])*`"#;
const FUNCTION_SOURCE: &str = r"\b([A-Za-z_][A-Za-z0-9_]*)\(";
const NUMBER_SOURCE: &str = r"\b[0-9]+\b";

static STANDARD: LazyLock<PatternCatalog> = LazyLock::new(build_standard);

#[expect(
    clippy::expect_used,
    reason = "standard patterns are literals validated by the catalog tests"
)]
fn build_standard() -> PatternCatalog {
    PatternCatalog::try_standard().expect("standard catalog patterns must compile")
}

/// A compiled matcher for one category.
///
/// The token reported for each match is the span of `token_group`. Group 0
/// is the whole match; the function matcher uses group 1 so that the
/// trailing parenthesis is consumed by the scan but left out of the token.
#[derive(Debug, Clone)]
pub struct Pattern {
    category: Category,
    regex: Regex,
    token_group: usize,
}

impl Pattern {
    /// Compiles a pattern for `category`.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is not a valid regular expression or if
    /// it defines fewer capture groups than `token_group` requires.
    pub fn compile(
        category: Category,
        source: &str,
        token_group: usize,
    ) -> Result<Self, SyntaxError> {
        let regex = Regex::new(source)
            .map_err(|error| SyntaxError::pattern_compile(category, error.to_string()))?;

        let available = regex.captures_len();
        if token_group >= available {
            return Err(SyntaxError::missing_token_group(
                category,
                token_group,
                available,
            ));
        }

        Ok(Self {
            category,
            regex,
            token_group,
        })
    }

    /// Returns the category this pattern tags.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the regular expression source.
    #[must_use]
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the capture group that forms each token.
    #[must_use]
    pub const fn token_group(&self) -> usize {
        self.token_group
    }

    pub(crate) const fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Scans `text` for every non-overlapping occurrence of this pattern.
    ///
    /// The returned iterator owns no hidden cursor beyond its own position;
    /// calling `scan` again restarts from the beginning of the text.
    #[must_use]
    pub fn scan<'p, 't>(&'p self, text: &'t str) -> Scan<'p, 't> {
        Scan::new(self, text)
    }
}

/// The ordered set of matchers, one per category, highest priority first.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// Builds a catalog from patterns listed in priority order.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::CatalogOrder`] when a pattern's category does
    /// not sort strictly after the one before it.
    pub fn new(patterns: Vec<Pattern>) -> Result<Self, SyntaxError> {
        for pair in patterns.windows(2) {
            if let [previous, next] = pair
                && !previous.category().outranks(next.category())
            {
                return Err(SyntaxError::catalog_order(
                    previous.category(),
                    next.category(),
                ));
            }
        }
        Ok(Self { patterns })
    }

    /// Compiles the five standard matchers.
    ///
    /// # Errors
    ///
    /// Returns an error if a standard expression fails to compile, which
    /// indicates a defect in this crate.
    pub fn try_standard() -> Result<Self, SyntaxError> {
        let keyword_source = format!(r"\b(?:{})\b", KEYWORDS.join("|"));
        Self::new(vec![
            Pattern::compile(Category::Comment, COMMENT_SOURCE, 0)?,
            Pattern::compile(Category::String, STRING_SOURCE, 0)?,
            Pattern::compile(Category::Keyword, &keyword_source, 0)?,
            Pattern::compile(Category::Function, FUNCTION_SOURCE, 1)?,
            Pattern::compile(Category::Number, NUMBER_SOURCE, 0)?,
        ])
    }

    /// Returns the process-wide standard catalog, compiling it on first use.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Iterates the patterns in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Returns the pattern registered for `category`, if any.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&Pattern> {
        self.patterns
            .iter()
            .find(|pattern| pattern.category() == category)
    }

    /// Returns the number of patterns in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns whether the catalog has no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
