pub mod config;
pub mod error;
pub mod fs;
pub mod process;
pub mod types;
mod util;

pub use crate::config::merge_config::MergeConfig;
pub use crate::config::validation::{FailureCollector, ValidationFailure};
pub use crate::error::MergeError;
pub use crate::fs::{FileSystem, LocalFileSystem};
pub use crate::types::candidate::CandidateFile;

use process::merge::merge_files;

/// Configuration-time validation entry for a host pipeline. Reports every
/// violation in one aggregate error; deferred `${...}` values are exempt.
///
/// `run` performs the same validation again, since deferred values are only
/// resolved at execution time.
pub fn validate_config(config: &MergeConfig) -> Result<(), MergeError> {
    let mut collector = FailureCollector::new();
    config.validate(&mut collector);
    collector.into_result()
}

/// Merges the files selected by `config.source_path` into the single file at
/// `config.dest_path`, in deterministic part-file order.
pub fn run(config: &MergeConfig, fs: &dyn FileSystem) -> Result<(), MergeError> {
    merge_files(config, fs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_config_aggregates_all_violations() {
        let config = MergeConfig {
            source_path: String::new(),
            dest_path: String::new(),
            continue_on_error: false,
        };

        let error = validate_config(&config).unwrap_err();

        assert!(matches!(
            error,
            MergeError::Configuration { ref failures } if failures.len() == 2
        ));
    }

    #[test]
    fn validate_config_accepts_deferred_values() {
        let config = MergeConfig {
            source_path: "${runtime:source.dir}".to_string(),
            dest_path: "${runtime:dest.file}".to_string(),
            continue_on_error: false,
        };

        validate_config(&config).unwrap();
    }
}
