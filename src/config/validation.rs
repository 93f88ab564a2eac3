use crate::error::MergeError;
use std::fmt;

/// A single recorded validation violation, kept until all checks have run so
/// the caller sees every problem at once instead of just the first.
#[derive(Debug, Clone)]
pub struct ValidationFailure {
    pub message: String,
    pub field: Option<String>,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{} (field: {field})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

#[derive(Debug, Default)]
pub struct FailureCollector {
    failures: Vec<ValidationFailure>,
}

impl FailureCollector {
    pub fn new() -> Self {
        FailureCollector::default()
    }

    pub fn add_failure(&mut self, message: &str, field: Option<&str>) {
        self.failures.push(ValidationFailure {
            message: message.to_string(),
            field: field.map(str::to_string),
        });
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Raises an aggregate error if any failures were recorded.
    pub fn into_result(self) -> Result<(), MergeError> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(MergeError::Configuration {
                failures: self.failures,
            })
        }
    }
}
