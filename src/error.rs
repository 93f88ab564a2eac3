use crate::config::validation::ValidationFailure;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("invalid configuration: {}", format_failures(.failures))]
    Configuration { failures: Vec<ValidationFailure> },

    #[error("invalid filename pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex_lite::Error,
    },

    #[error("failed to list source directory {}: {}", .directory.display(), .source)]
    Listing {
        directory: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot order file {name:?}: {reason}")]
    Ordering { name: String, reason: String },

    #[error("failed to read source file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write destination file {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn format_failures(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(ValidationFailure::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
