//! Splices category wrappers into a snippet.
//!
//! Accepted matches are applied from the rightmost start offset to the
//! leftmost. Each splice only changes the working copy at or after its own
//! start, so the offsets of matches still to be processed stay valid.

use std::cmp::Reverse;
use std::ops::Range;

use crate::markup::Markup;
use crate::resolver::AcceptedSet;
use crate::scanner::Match;

/// Renders `text` with every accepted match wrapped by `markup`.
///
/// Untagged text is kept verbatim unless the markup escapes it, in which
/// case it is escaped in the same right-to-left pass. Matches whose range
/// does not fall inside `text` are skipped.
#[must_use]
pub fn render(text: &str, accepted: &AcceptedSet, markup: &dyn Markup) -> String {
    let mut ordered: Vec<&Match> = accepted.iter().collect();
    ordered.sort_by_key(|found| Reverse(found.start()));

    let mut output = text.to_owned();
    let mut untouched_end = text.len();

    for found in ordered {
        let Some(token) = found.text(text) else {
            continue;
        };
        if found.end() > untouched_end {
            continue;
        }

        escape_gap(&mut output, text, found.end()..untouched_end, markup);

        let category = found.category();
        let escaped = markup.escape(token);
        let open = markup.open(category);
        let close = markup.close(category);
        let mut wrapped = String::with_capacity(
            open.len()
                .saturating_add(escaped.len())
                .saturating_add(close.len()),
        );
        wrapped.push_str(open);
        wrapped.push_str(&escaped);
        wrapped.push_str(close);

        output.replace_range(found.byte_range(), &wrapped);
        untouched_end = found.start();
    }

    escape_gap(&mut output, text, 0..untouched_end, markup);
    output
}

/// Escapes an untagged region that is still identical in `output` and `text`.
fn escape_gap(output: &mut String, text: &str, range: Range<usize>, markup: &dyn Markup) {
    if range.is_empty() {
        return;
    }
    let Some(gap) = text.get(range.clone()) else {
        return;
    };
    let escaped = markup.escape(gap);
    if escaped != gap {
        output.replace_range(range, &escaped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::markup::{AnsiMarkup, EscapePolicy, HtmlMarkup};
    use crate::pattern::PatternCatalog;

    fn html(text: &str) -> String {
        let accepted = AcceptedSet::resolve(PatternCatalog::standard(), text);
        render(text, &accepted, &HtmlMarkup::default())
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(html(""), "");
    }

    #[test]
    fn text_without_matches_is_unchanged() {
        assert_eq!(html("a + b;"), "a + b;");
    }

    #[test]
    fn comment_is_wrapped_whole() {
        assert_eq!(
            html("// hello"),
            r#"<span class="text-green-400">// hello</span>"#
        );
    }

    #[test]
    fn splices_keep_untagged_text_between_matches() {
        assert_eq!(
            html("foo(1, 2)"),
            concat!(
                r#"<span class="text-blue-400">foo</span>("#,
                r#"<span class="text-cyan-400">1</span>, "#,
                r#"<span class="text-cyan-400">2</span>)"#
            )
        );
    }

    #[test]
    fn multibyte_text_keeps_offsets_valid() {
        assert_eq!(
            html("é = 1 // ü"),
            concat!(
                r#"é = <span class="text-cyan-400">1</span> "#,
                r#"<span class="text-green-400">// ü</span>"#
            )
        );
    }

    #[test]
    fn raw_policy_does_not_escape() {
        assert_eq!(
            html("a < 'b>'"),
            r#"a < <span class="text-amber-400">'b>'</span>"#
        );
    }

    #[test]
    fn html_policy_escapes_gaps_and_tokens() {
        let text = "a < 'b>' && c(1)";
        let accepted = AcceptedSet::resolve(PatternCatalog::standard(), text);
        let output = render(text, &accepted, &HtmlMarkup::new(EscapePolicy::Html));
        assert_eq!(
            output,
            concat!(
                "a &lt; ",
                r#"<span class="text-amber-400">&#39;b&gt;&#39;</span>"#,
                " &amp;&amp; ",
                r#"<span class="text-blue-400">c</span>("#,
                r#"<span class="text-cyan-400">1</span>)"#
            )
        );
    }

    #[test]
    fn ansi_markup_wraps_in_sgr_sequences() {
        let text = "let x";
        let accepted = AcceptedSet::resolve(PatternCatalog::standard(), text);
        assert_eq!(render(text, &accepted, &AnsiMarkup), "\u{1b}[35mlet\u{1b}[0m x");
    }

    #[test]
    fn out_of_range_matches_are_skipped() {
        let mut accepted = AcceptedSet::new();
        let stray = Match::new(Category::Number, 10..12).expect("non-empty");
        assert!(accepted.offer(stray));
        assert_eq!(render("short", &accepted, &HtmlMarkup::default()), "short");
    }
}
