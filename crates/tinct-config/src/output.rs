//! Output selection for rendered snippets.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tinct_syntax::EscapePolicy;

/// Markup used to wrap tagged spans.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MarkupStyle {
    /// `<span class="...">` elements for a web host.
    #[default]
    Html,
    /// SGR colour sequences for a terminal.
    Ansi,
}

/// Escaping applied to HTML output.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EscapeMode {
    /// Emit snippet text verbatim.
    #[default]
    Raw,
    /// Escape characters that are meaningful in HTML.
    Html,
}

impl From<EscapeMode> for EscapePolicy {
    fn from(mode: EscapeMode) -> Self {
        match mode {
            EscapeMode::Raw => Self::Raw,
            EscapeMode::Html => Self::Html,
        }
    }
}
