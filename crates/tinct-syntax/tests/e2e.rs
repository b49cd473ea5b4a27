//! End-to-end tests for tinct-syntax using insta for snapshot testing.
//!
//! These tests drive the public API from snippet to rendered output, with
//! inline snapshots for the user-facing strings.

use insta::{assert_debug_snapshot, assert_snapshot};
use rstest::{fixture, rstest};

use tinct_syntax::{
    AcceptedSet, AnsiMarkup, Category, EscapePolicy, HighlightOptions, Highlighter, HtmlMarkup,
    Pattern, PatternCatalog, SyntaxError, render,
};

/// Fixture providing a highlighter with default options.
#[fixture]
fn highlighter() -> Highlighter {
    Highlighter::default()
}

// =============================================================================
// Happy Path: Rendering
// =============================================================================

#[rstest]
fn renders_function_call_with_numbers(highlighter: Highlighter) {
    let result = highlighter.highlight("foo(1, 2)", Some("TypeScript"));
    assert_snapshot!(
        result.output(),
        @r#"<span class="text-blue-400">foo</span>(<span class="text-cyan-400">1</span>, <span class="text-cyan-400">2</span>)"#
    );
}

#[rstest]
fn renders_string_that_contains_a_keyword(highlighter: Highlighter) {
    let result = highlighter.highlight("const s = 'return';", None);
    assert_snapshot!(
        result.output(),
        @r#"<span class="text-purple-400">const</span> s = <span class="text-amber-400">'return'</span>;"#
    );
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("a + b")]
fn input_without_tokens_is_returned_unchanged(highlighter: Highlighter, #[case] text: &str) {
    assert_eq!(highlighter.highlight(text, None).output(), text);
}

#[rstest]
fn reports_tokens_in_source_order(highlighter: Highlighter) {
    let result = highlighter.highlight("const x = add(2, 40); // sum", None);
    let tokens: Vec<_> = result.tokens().collect();
    assert_debug_snapshot!(tokens, @r#"
    [
        (
            Keyword,
            "const",
        ),
        (
            Function,
            "add",
        ),
        (
            Number,
            "2",
        ),
        (
            Number,
            "40",
        ),
        (
            Comment,
            "// sum",
        ),
    ]
    "#);
}

#[test]
fn escaped_html_neutralises_markup_in_the_snippet() {
    let highlighter = Highlighter::new(HighlightOptions {
        escape: EscapePolicy::Html,
        ..HighlightOptions::default()
    });
    let result = highlighter.highlight("let tag = '<b>';", None);
    assert_snapshot!(
        result.output(),
        @r#"<span class="text-purple-400">let</span> tag = <span class="text-amber-400">&#39;&lt;b&gt;&#39;</span>;"#
    );
}

#[test]
fn ansi_markup_can_be_selected_per_call() {
    let result = Highlighter::default().highlight_with("return 7", None, &AnsiMarkup);
    assert_eq!(result.output(), "\u{1b}[35mreturn\u{1b}[0m \u{1b}[36m7\u{1b}[0m");
}

#[test]
fn lower_level_pipeline_matches_the_facade() {
    let text = "if (ok) { run(3); } # done";
    let accepted = AcceptedSet::resolve(PatternCatalog::standard(), text);
    let manual = render(text, &accepted, &HtmlMarkup::default());
    assert_eq!(manual, Highlighter::default().highlight(text, None).output());
    assert_eq!(accepted.count(Category::Comment), 1);
    assert_eq!(accepted.count(Category::Keyword), 1);
    assert_eq!(accepted.count(Category::Function), 1);
    assert_eq!(accepted.count(Category::Number), 1);
}

// =============================================================================
// Unhappy Path: Catalog Construction
// =============================================================================

#[test]
fn invalid_pattern_error_is_descriptive() {
    let Err(error) = Pattern::compile(Category::Keyword, r"\b(?:if", 0) else {
        panic!("pattern should fail to compile");
    };
    assert!(matches!(error, SyntaxError::PatternCompile { .. }));
    assert!(error.to_string().starts_with("invalid pattern for keyword:"));
}

#[test]
fn misordered_catalog_error_names_both_categories() {
    let patterns = ["[0-9]+", "//.*"]
        .iter()
        .zip([Category::Number, Category::Comment])
        .map(|(source, category)| {
            Pattern::compile(category, source, 0).unwrap_or_else(|err| panic!("pattern: {err}"))
        })
        .collect();
    let Err(error) = PatternCatalog::new(patterns) else {
        panic!("catalog should reject out-of-order patterns");
    };
    assert_snapshot!(error.to_string(), @"catalog entry comment cannot follow number");
}
