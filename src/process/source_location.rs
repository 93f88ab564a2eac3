use crate::error::MergeError;
use regex_lite::Regex;
use std::path::PathBuf;

/// The source path split into the directory to list and the filename pattern
/// carried by its final segment. An empty final segment (trailing slash)
/// means every entry is selected.
#[derive(Debug)]
pub struct SourceLocation {
    pub directory: PathBuf,
    pub pattern: Option<FileNamePattern>,
}

/// A compiled filename regex. Matching is against the whole filename, not a
/// substring, so the pattern is anchored at compile time.
#[derive(Debug)]
pub struct FileNamePattern {
    text: String,
    regex: Regex,
}

impl FileNamePattern {
    fn compile(text: &str) -> Result<FileNamePattern, MergeError> {
        let regex =
            Regex::new(&format!("^(?:{text})$")).map_err(|source| MergeError::InvalidPattern {
                pattern: text.to_string(),
                source,
            })?;
        Ok(FileNamePattern {
            text: text.to_string(),
            regex,
        })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl SourceLocation {
    pub fn parse(source_path: &str) -> Result<SourceLocation, MergeError> {
        let (directory, pattern_text) = match source_path.rsplit_once('/') {
            Some(("", pattern_text)) => (PathBuf::from("/"), pattern_text),
            Some((directory, pattern_text)) => (PathBuf::from(directory), pattern_text),
            // No separator at all: the whole path is a pattern against the
            // current directory.
            None => (PathBuf::from("."), source_path),
        };

        let pattern = if pattern_text.is_empty() {
            None
        } else {
            Some(FileNamePattern::compile(pattern_text)?)
        };

        Ok(SourceLocation { directory, pattern })
    }
}
