use crate::types::candidate::CandidateFile;
use std::io::{self, Read, Write};
use std::path::Path;

/// The filesystem capabilities the merge engine needs. The engine never
/// touches `std::fs` directly, so a host can point it at any store that can
/// list a directory and stream bytes.
pub trait FileSystem {
    /// Immediate entries of `directory`, non-recursive.
    fn list_dir(&self, directory: &Path) -> io::Result<Vec<CandidateFile>>;

    /// Creates `directory` and any missing ancestors. Idempotent.
    fn create_dir_all(&self, directory: &Path) -> io::Result<()>;

    fn open_for_read(&self, path: &Path) -> io::Result<Box<dyn Read>>;

    /// Creates or truncates the file at `path`.
    fn create_for_write(&self, path: &Path) -> io::Result<Box<dyn Write>>;
}

pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn list_dir(&self, directory: &Path) -> io::Result<Vec<CandidateFile>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            entries.push(CandidateFile::new(
                entry.file_name().to_string_lossy().into_owned(),
                entry.path(),
            ));
        }
        Ok(entries)
    }

    fn create_dir_all(&self, directory: &Path) -> io::Result<()> {
        std::fs::create_dir_all(directory)
    }

    fn open_for_read(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(std::fs::File::open(path)?))
    }

    fn create_for_write(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        Ok(Box::new(std::fs::File::create(path)?))
    }
}
