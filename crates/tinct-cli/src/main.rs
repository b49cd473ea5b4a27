//! CLI entrypoint for the tinct snippet highlighter.
//!
//! The binary delegates to [`tinct_cli::run`], which loads configuration,
//! processes command-line arguments, reads the snippet, and writes the
//! highlighted result to stdout.

use std::io::{self, StderrLock, StdinLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdin: StdinLock<'_> = io::stdin().lock();
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    tinct_cli::run(std::env::args_os(), &mut stdin, &mut stdout, &mut stderr)
}
