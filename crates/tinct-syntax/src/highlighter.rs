//! Entry point tying the catalog, resolver and renderer together.

use tracing::{debug, warn};

use crate::category::Category;
use crate::markup::{EscapePolicy, HtmlMarkup, Markup};
use crate::pattern::PatternCatalog;
use crate::renderer::render;
use crate::resolver::AcceptedSet;
use crate::scanner::Match;

/// Default upper bound on snippet size, in bytes.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024;

/// Tunables for a [`Highlighter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Escaping applied by the default HTML markup.
    pub escape: EscapePolicy,
    /// Snippets longer than this are rendered without tokenisation.
    pub max_input_bytes: usize,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            escape: EscapePolicy::Raw,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

/// Highlights snippets with the standard catalog.
///
/// A highlighter holds no mutable state, so one instance can serve
/// concurrent callers.
///
/// # Examples
///
/// ```
/// use tinct_syntax::{Category, Highlighter};
///
/// let highlighter = Highlighter::default();
/// let result = highlighter.highlight("const s = 'return';", Some("TypeScript"));
///
/// let tokens: Vec<_> = result.tokens().collect();
/// assert_eq!(tokens, vec![(Category::Keyword, "const"), (Category::String, "'return'")]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    catalog: &'static PatternCatalog,
    options: HighlightOptions,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(HighlightOptions::default())
    }
}

impl Highlighter {
    /// Creates a highlighter over the shared standard catalog.
    #[must_use]
    pub fn new(options: HighlightOptions) -> Self {
        Self {
            catalog: PatternCatalog::standard(),
            options,
        }
    }

    /// Returns the configured options.
    #[must_use]
    pub const fn options(&self) -> HighlightOptions {
        self.options
    }

    /// Highlights `code` as HTML spans.
    ///
    /// `language` is a display label only and never changes which matchers
    /// run.
    #[must_use]
    pub fn highlight<'a>(&self, code: &'a str, language: Option<&str>) -> Highlighted<'a> {
        self.highlight_with(code, language, &HtmlMarkup::new(self.options.escape))
    }

    /// Highlights `code` using `markup` for the wrappers.
    #[must_use]
    pub fn highlight_with<'a>(
        &self,
        code: &'a str,
        language: Option<&str>,
        markup: &dyn Markup,
    ) -> Highlighted<'a> {
        let skipped = code.len() > self.options.max_input_bytes;
        let accepted = if skipped {
            warn!(
                len = code.len(),
                limit = self.options.max_input_bytes,
                "snippet exceeds size limit; rendering without highlighting"
            );
            AcceptedSet::new()
        } else {
            AcceptedSet::resolve(self.catalog, code)
        };

        debug!(
            language = language.unwrap_or("plain"),
            bytes = code.len(),
            spans = accepted.len(),
            "highlighted snippet"
        );

        Highlighted {
            output: render(code, &accepted, markup),
            source: code,
            accepted,
            language: language.map(str::to_owned),
            skipped,
        }
    }
}

/// Result of highlighting one snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted<'a> {
    output: String,
    source: &'a str,
    accepted: AcceptedSet,
    language: Option<String>,
    skipped: bool,
}

impl<'a> Highlighted<'a> {
    /// Returns the rendered snippet.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consumes the result and returns the rendered snippet.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    /// Returns the original snippet.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the accepted matches.
    #[must_use]
    pub const fn accepted(&self) -> &AcceptedSet {
        &self.accepted
    }

    /// Iterates tagged tokens in source order.
    pub fn tokens(&self) -> impl Iterator<Item = (Category, &'a str)> + '_ {
        let source = self.source;
        self.accepted
            .in_source_order()
            .into_iter()
            .filter_map(move |found: Match| found.text(source).map(|t| (found.category(), t)))
    }

    /// Returns the cosmetic language label supplied by the caller.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Returns whether tokenisation was skipped because of the size limit.
    #[must_use]
    pub const fn skipped(&self) -> bool {
        self.skipped
    }
}
