//! Regex-driven syntax highlighting for short code snippets.
//!
//! The crate classifies substrings of a snippet into five categories and
//! renders them as an annotated string for a host display layer:
//!
//! - **Catalog** via [`PatternCatalog`]: one matcher per [`Category`], in
//!   priority order (comment, string, keyword, function, number)
//! - **Scanning** via [`Pattern::scan`]: every non-overlapping occurrence of
//!   one matcher, left to right
//! - **Overlap resolution** via [`AcceptedSet::resolve`]: a priority cascade
//!   in which earlier categories permanently block overlapping later ones
//! - **Rendering** via [`render`]: right-to-left splicing of [`Markup`]
//!   wrappers around the untouched original text
//!
//! This is not a lexer. The same five matchers run whatever language label
//! the caller supplies.
//!
//! # Example
//!
//! ```
//! use tinct_syntax::Highlighter;
//!
//! let highlighted = Highlighter::default().highlight("// hello", None);
//! assert_eq!(
//!     highlighted.output(),
//!     r#"<span class="text-green-400">// hello</span>"#
//! );
//! ```

mod category;
mod error;
mod highlighter;
mod markup;
mod pattern;
mod renderer;
mod resolver;
mod scanner;

pub use category::Category;
pub use error::SyntaxError;
pub use highlighter::{DEFAULT_MAX_INPUT_BYTES, HighlightOptions, Highlighted, Highlighter};
pub use markup::{AnsiMarkup, EscapePolicy, HtmlMarkup, Markup, escape_html};
pub use pattern::{KEYWORDS, Pattern, PatternCatalog};
pub use renderer::render;
pub use resolver::AcceptedSet;
pub use scanner::{Match, Scan};

#[cfg(test)]
mod tests;
