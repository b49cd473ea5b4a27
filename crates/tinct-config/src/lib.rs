//! Shared configuration for the tinct highlighter.
//!
//! Values are layered by `ortho_config`: built-in defaults, then a
//! configuration file (`--config-path` or `TINCT_CONFIG_PATH`), then
//! `TINCT_*` environment variables, then command-line flags.

mod defaults;
mod logging;
mod output;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use tinct_syntax::HighlightOptions;

pub use defaults::{
    DEFAULT_LOG_FILTER, default_escape, default_log_filter, default_log_filter_string,
    default_log_format, default_markup, default_max_input_bytes,
};
pub use logging::{LogFormat, LogFormatParseError};
pub use output::{EscapeMode, MarkupStyle};

/// Resolved configuration for the highlighter binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "TINCT")]
pub struct Config {
    /// Tracing filter expression, for example `warn` or `tinct_syntax=debug`.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Format of log lines written to stderr.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Markup wrapped around tagged spans.
    #[ortho_config(default = default_markup())]
    pub markup: MarkupStyle,
    /// Escaping applied to HTML output.
    #[ortho_config(default = default_escape())]
    pub escape: EscapeMode,
    /// Snippets longer than this many bytes are emitted without highlighting.
    #[ortho_config(default = default_max_input_bytes())]
    pub max_input_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            markup: default_markup(),
            escape: default_escape(),
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl Config {
    /// Returns the tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the markup style for rendered output.
    #[must_use]
    pub const fn markup(&self) -> MarkupStyle {
        self.markup
    }

    /// Returns the escape mode for HTML output.
    #[must_use]
    pub const fn escape(&self) -> EscapeMode {
        self.escape
    }

    /// Returns the snippet size limit in bytes.
    #[must_use]
    pub const fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    /// Maps the configuration onto highlighter options.
    #[must_use]
    pub fn highlight_options(&self) -> HighlightOptions {
        HighlightOptions {
            escape: self.escape.into(),
            max_input_bytes: self.max_input_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use tinct_syntax::{DEFAULT_MAX_INPUT_BYTES, EscapePolicy};

    use super::*;

    #[test]
    fn defaults_preserve_raw_html_output() {
        let config = Config::default();
        assert_eq!(config.markup(), MarkupStyle::Html);
        assert_eq!(config.escape(), EscapeMode::Raw);
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert_eq!(config.max_input_bytes(), DEFAULT_MAX_INPUT_BYTES);
    }

    #[test]
    fn highlight_options_follow_configuration() {
        let config = Config {
            escape: EscapeMode::Html,
            max_input_bytes: 128,
            ..Config::default()
        };
        let options = config.highlight_options();
        assert_eq!(options.escape, EscapePolicy::Html);
        assert_eq!(options.max_input_bytes, 128);
    }
}
