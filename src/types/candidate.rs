use std::path::PathBuf;

/// One entry of the source directory listing. Lives only for the duration of
/// a single merge invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub path: PathBuf,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        CandidateFile {
            name: name.into(),
            path: path.into(),
        }
    }
}
