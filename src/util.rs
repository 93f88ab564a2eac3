use crate::fs::FileSystem;
use std::io;
use std::path::Path;

/// Creates the parent directory of `path` (with any missing ancestors) if it
/// has one. Idempotent, like the underlying `create_dir_all`.
pub fn ensure_parent_dir(fs: &dyn FileSystem, path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs.create_dir_all(parent),
        _ => Ok(()),
    }
}
