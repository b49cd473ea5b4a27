use tinct_syntax::DEFAULT_MAX_INPUT_BYTES;

use crate::logging::LogFormat;
use crate::output::{EscapeMode, MarkupStyle};

/// Default log filter expression used by the binary.
///
/// Highlighting writes its result to stdout, so only warnings reach stderr
/// unless the operator asks for more.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}

/// Default markup for rendered snippets.
#[must_use]
pub const fn default_markup() -> MarkupStyle {
    MarkupStyle::Html
}

/// Default escaping for HTML output.
#[must_use]
pub const fn default_escape() -> EscapeMode {
    EscapeMode::Raw
}

/// Default upper bound on snippet size, in bytes.
#[must_use]
pub const fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}
