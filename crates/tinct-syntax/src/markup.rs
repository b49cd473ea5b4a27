//! Category wrappers for the host display layer.
//!
//! A [`Markup`] decides how a tagged span is delimited and whether text is
//! escaped for the display medium. Matching always runs on the raw snippet;
//! markup only affects rendering.

use std::borrow::Cow;

use crate::category::Category;

/// Delimiters and escaping for one output medium.
pub trait Markup {
    /// Returns the text emitted before a span of `category`.
    fn open(&self, category: Category) -> &str;

    /// Returns the text emitted after a span of `category`.
    fn close(&self, category: Category) -> &str;

    /// Escapes `text` for the output medium.
    ///
    /// The default leaves the text untouched.
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// Whether text is escaped before it reaches an HTML host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EscapePolicy {
    /// Emit snippet text verbatim inside the wrappers.
    #[default]
    Raw,
    /// Escape `&`, `<`, `>`, `"` and `'` in both tagged and untagged text.
    Html,
}

/// Wraps spans in `<span class="...">` elements with colour utility classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlMarkup {
    escape: EscapePolicy,
}

impl HtmlMarkup {
    /// Creates HTML markup with the given escape policy.
    #[must_use]
    pub const fn new(escape: EscapePolicy) -> Self {
        Self { escape }
    }

    /// Returns the escape policy.
    #[must_use]
    pub const fn escape_policy(&self) -> EscapePolicy {
        self.escape
    }

    /// Returns the class attribute value used for `category`.
    #[must_use]
    pub const fn class(category: Category) -> &'static str {
        match category {
            Category::Comment => "text-green-400",
            Category::String => "text-amber-400",
            Category::Keyword => "text-purple-400",
            Category::Function => "text-blue-400",
            Category::Number => "text-cyan-400",
        }
    }
}

impl Markup for HtmlMarkup {
    fn open(&self, category: Category) -> &str {
        match category {
            Category::Comment => r#"<span class="text-green-400">"#,
            Category::String => r#"<span class="text-amber-400">"#,
            Category::Keyword => r#"<span class="text-purple-400">"#,
            Category::Function => r#"<span class="text-blue-400">"#,
            Category::Number => r#"<span class="text-cyan-400">"#,
        }
    }

    fn close(&self, _category: Category) -> &str {
        "</span>"
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.escape {
            EscapePolicy::Raw => Cow::Borrowed(text),
            EscapePolicy::Html => escape_html(text),
        }
    }
}

/// Wraps spans in SGR colour sequences for terminals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnsiMarkup;

impl Markup for AnsiMarkup {
    fn open(&self, category: Category) -> &str {
        match category {
            Category::Comment => "\u{1b}[32m",
            Category::String => "\u{1b}[33m",
            Category::Keyword => "\u{1b}[35m",
            Category::Function => "\u{1b}[34m",
            Category::Number => "\u{1b}[36m",
        }
    }

    fn close(&self, _category: Category) -> &str {
        "\u{1b}[0m"
    }
}

/// Escapes the characters that are meaningful in HTML text and attributes.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len().saturating_add(16));
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
