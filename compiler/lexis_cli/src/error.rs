//! CLI error type.

use std::io;
use std::path::PathBuf;

use lexis::PatternSetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("unknown preset '{0}' (run `lexis presets` to list them)")]
    UnknownPreset(String),

    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("invalid preset configuration: {0}")]
    Config(#[from] PatternSetError),
}
