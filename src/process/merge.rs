use crate::config::merge_config::MergeConfig;
use crate::config::validation::FailureCollector;
use crate::error::MergeError;
use crate::fs::FileSystem;
use crate::process::order::sort_candidates;
use crate::process::source_location::SourceLocation;
use crate::util::ensure_parent_dir;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{error, info, warn};

/// Runs one merge: list, filter, order, concatenate, write.
///
/// Read and write failures are the only recoverable class, gated by
/// `continue_on_error`. Validation, listing, pattern and ordering failures
/// are always fatal. The destination is written exactly once, at the end,
/// from the fully assembled buffer; a run that accumulates zero bytes writes
/// no destination file at all.
pub fn merge_files(config: &MergeConfig, fs: &dyn FileSystem) -> Result<(), MergeError> {
    let mut collector = FailureCollector::new();
    config.validate(&mut collector);
    collector.into_result()?;

    let source = SourceLocation::parse(&config.source_path)?;
    let dest = Path::new(&config.dest_path);

    // Before listing, so the directory side effect happens even when the
    // listing turns out empty.
    ensure_parent_dir(fs, dest).map_err(|e| MergeError::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;

    let listing = fs
        .list_dir(&source.directory)
        .map_err(|e| MergeError::Listing {
            directory: source.directory.clone(),
            source: e,
        })?;

    let selected = match &source.pattern {
        Some(pattern) => listing
            .into_iter()
            .filter(|candidate| pattern.matches(&candidate.name))
            .collect(),
        None => listing,
    };

    if selected.is_empty() {
        match &source.pattern {
            Some(pattern) => warn!(
                "Not concatenating any files matching {} from source {}",
                pattern.text(),
                source.directory.display()
            ),
            None => warn!(
                "Not concatenating any files from source {}",
                source.directory.display()
            ),
        }
        return Ok(());
    }

    let ordered = sort_candidates(selected)?;

    let mut result = Vec::new();
    for candidate in &ordered {
        info!("Concatenating file {}", candidate.name);
        match read_file(fs, &candidate.path) {
            Ok(contents) => result.extend_from_slice(&contents),
            Err(e) => {
                if !config.continue_on_error {
                    return Err(MergeError::Read {
                        path: candidate.path.clone(),
                        source: e,
                    });
                }
                error!(
                    "Failed to concatenate file {} to {}: {e}",
                    candidate.path.display(),
                    dest.display()
                );
            }
        }
    }

    info!("Collected {} bytes from {} files", result.len(), ordered.len());

    if result.is_empty() {
        return Ok(());
    }

    match write_file(fs, dest, &result) {
        Ok(()) => {
            info!("Completed writing {}", dest.display());
            Ok(())
        }
        Err(e) => {
            if !config.continue_on_error {
                return Err(MergeError::Write {
                    path: dest.to_path_buf(),
                    source: e,
                });
            }
            error!("Failed to write destination file {}: {e}", dest.display());
            Ok(())
        }
    }
}

fn read_file(fs: &dyn FileSystem, path: &Path) -> std::io::Result<Vec<u8>> {
    let mut reader = fs.open_for_read(path)?;
    let mut contents = Vec::new();
    reader.read_to_end(&mut contents)?;
    Ok(contents)
}

fn write_file(fs: &dyn FileSystem, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut writer = fs.create_for_write(path)?;
    writer.write_all(bytes)?;
    writer.flush()
}
