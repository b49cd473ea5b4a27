//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to initialise logging: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read snippet from {path}: {source}")]
    ReadFile {
        path: Utf8PathBuf,
        source: io::Error,
    },
    #[error("failed to read snippet from standard input: {0}")]
    ReadStdin(io::Error),
    #[error("failed to write highlighted output: {0}")]
    WriteOutput(io::Error),
}

impl AppError {
    /// Returns whether the error is clap's help or version display rather
    /// than a genuine usage failure.
    pub(crate) fn is_informational(&self) -> bool {
        matches!(
            self,
            Self::CliUsage(error)
                if matches!(
                    error.kind(),
                    clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
                )
        )
    }
}
