//! CLI argument definitions for the tinct highlighter.

use camino::Utf8PathBuf;
use clap::Parser;

/// Command-line interface for the tinct snippet highlighter.
#[derive(Parser, Debug)]
#[command(name = "tinct", about = "Highlight a code snippet as annotated markup")]
pub(crate) struct Cli {
    /// Cosmetic language label; it never changes which matchers run.
    #[arg(long, value_name = "LABEL")]
    pub(crate) language: Option<String>,
    /// Snippet file to read; standard input is used when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub(crate) input: Option<Utf8PathBuf>,
}

impl Cli {
    /// Returns the input path, treating `-` as standard input.
    pub(crate) fn input_path(&self) -> Option<&Utf8PathBuf> {
        self.input.as_ref().filter(|path| path.as_str() != "-")
    }
}
