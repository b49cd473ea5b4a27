//! Command-line runtime for the tinct snippet highlighter.
//!
//! The module owns argument parsing, configuration bootstrapping, snippet
//! input, and output rendering. The runtime can be exercised from the binary
//! entrypoint and from tests where configuration loading and IO streams are
//! substituted.

use std::ffi::OsString;
use std::fs;
use std::io::{Read, Write};
use std::process::ExitCode;

use clap::Parser;
use tinct_config::{Config, MarkupStyle};
use tinct_syntax::{AnsiMarkup, Highlighted, Highlighter};
use tracing::info;

mod cli;
mod config;
mod errors;
mod telemetry;

use cli::Cli;
use config::{ConfigLoader, OrthoConfigLoader, prepare_cli_arguments, split_config_arguments};
use errors::AppError;

/// Bundles the IO streams provided to the CLI runtime.
struct IoStreams<'a, R: Read, W: Write, E: Write> {
    stdin: &'a mut R,
    stdout: &'a mut W,
    stderr: &'a mut E,
}

struct CliRunner<'a, R: Read, W: Write, E: Write, L: ConfigLoader> {
    io: IoStreams<'a, R, W, E>,
    loader: &'a L,
}

impl<'a, R, W, E, L> CliRunner<'a, R, W, E, L>
where
    R: Read,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    const fn new(io: IoStreams<'a, R, W, E>, loader: &'a L) -> Self {
        Self { io, loader }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        match self.highlight(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) if error.is_informational() => {
                if write!(self.io.stdout, "{error}").is_err() {
                    return ExitCode::FAILURE;
                }
                ExitCode::SUCCESS
            }
            Err(error) => {
                if writeln!(self.io.stderr, "{error}").is_err() {
                    return ExitCode::FAILURE;
                }
                ExitCode::FAILURE
            }
        }
    }

    fn highlight<I>(&mut self, args: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let arguments: Vec<OsString> = args.into_iter().collect();
        let split = split_config_arguments(&arguments);
        let cli = Cli::try_parse_from(prepare_cli_arguments(&arguments, &split))
            .map_err(AppError::CliUsage)?;
        let config = self.loader.load(&split.config_arguments)?;
        telemetry::initialise(&config)?;

        let snippet = self.read_snippet(&cli)?;
        let highlighted = highlight_snippet(&config, &snippet, cli.language.as_deref());
        info!(
            language = highlighted.language().unwrap_or("plain"),
            spans = highlighted.accepted().len(),
            skipped = highlighted.skipped(),
            "snippet rendered"
        );

        self.io
            .stdout
            .write_all(highlighted.output().as_bytes())
            .and_then(|()| self.io.stdout.flush())
            .map_err(AppError::WriteOutput)
    }

    fn read_snippet(&mut self, cli: &Cli) -> Result<String, AppError> {
        if let Some(path) = cli.input_path() {
            return fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            });
        }

        let mut snippet = String::new();
        self.io
            .stdin
            .read_to_string(&mut snippet)
            .map_err(AppError::ReadStdin)?;
        Ok(snippet)
    }
}

fn highlight_snippet<'a>(
    config: &Config,
    snippet: &'a str,
    language: Option<&str>,
) -> Highlighted<'a> {
    let highlighter = Highlighter::new(config.highlight_options());
    match config.markup() {
        MarkupStyle::Html => highlighter.highlight(snippet, language),
        MarkupStyle::Ansi => highlighter.highlight_with(snippet, language, &AnsiMarkup),
    }
}

fn run_with_loader<I, R, W, E, L>(args: I, io: IoStreams<'_, R, W, E>, loader: &L) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    CliRunner::new(io, loader).run(args)
}

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, R, W, E>(args: I, stdin: &mut R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    let io = IoStreams {
        stdin,
        stdout,
        stderr,
    };
    run_with_loader(args, io, &OrthoConfigLoader)
}
