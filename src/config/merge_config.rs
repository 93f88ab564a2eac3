use crate::config::validation::FailureCollector;
use anyhow::{Context, Result};
use serde::Deserialize;

pub const SOURCE_PATH: &str = "source_path";
pub const DEST_PATH: &str = "dest_path";

/// Configuration for one merge invocation.
///
/// The final path segment of `source_path` is a filename regex applied to the
/// entries of the parent directory; an empty segment (trailing slash) selects
/// everything. `dest_path` is the full path of the output file.
#[derive(Debug, Clone, Deserialize)]
pub struct MergeConfig {
    #[serde(default)]
    pub source_path: String,
    #[serde(default)]
    pub dest_path: String,
    #[serde(default)]
    pub continue_on_error: bool,
}

impl MergeConfig {
    pub fn read_from_file(file: &str) -> Result<MergeConfig> {
        let f = std::fs::File::open(file)
            .context(format!("Tried to read merge config from {file}"))?;
        serde_yaml::from_reader(f).map_err(Into::into)
    }

    /// Records a failure for every missing path instead of stopping at the
    /// first one. Deferred `${...}` values are resolved by the host framework
    /// only at execution time and are exempt; `run` validates again after
    /// resolution with this same logic.
    pub fn validate(&self, collector: &mut FailureCollector) {
        if !is_deferred(&self.source_path) && self.source_path.is_empty() {
            collector.add_failure("Source path must be specified.", Some(SOURCE_PATH));
        }

        if !is_deferred(&self.dest_path) && self.dest_path.is_empty() {
            collector.add_failure("Destination path must be specified.", Some(DEST_PATH));
        }
    }
}

fn is_deferred(value: &str) -> bool {
    match value.find("${") {
        Some(start) => value[start..].contains('}'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(source_path: &str, dest_path: &str) -> MergeConfig {
        MergeConfig {
            source_path: source_path.to_string(),
            dest_path: dest_path.to_string(),
            continue_on_error: false,
        }
    }

    #[test]
    fn valid_paths_record_no_failures() {
        let mut collector = FailureCollector::new();
        config("/data/out/part-.*", "/data/merged.csv").validate(&mut collector);
        assert!(collector.is_empty());
    }

    #[test]
    fn empty_source_and_dest_record_two_distinct_failures() {
        let mut collector = FailureCollector::new();
        config("", "").validate(&mut collector);

        let failures = collector.failures();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].field.as_deref(), Some(SOURCE_PATH));
        assert_eq!(failures[1].field.as_deref(), Some(DEST_PATH));
    }

    #[test]
    fn deferred_macro_values_pass_validation() {
        let mut collector = FailureCollector::new();
        config("${runtime:source.dir}", "${runtime:dest.file}").validate(&mut collector);
        assert!(collector.is_empty());
    }

    #[test]
    fn unterminated_macro_is_not_deferred() {
        assert!(!is_deferred("${runtime:source.dir"));
        assert!(is_deferred("/prefix/${name}/suffix"));
        assert!(!is_deferred("/plain/path"));
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let parsed: MergeConfig = serde_yaml::from_str("source_path: /data/in/\n").unwrap();
        assert_eq!(parsed.source_path, "/data/in/");
        assert_eq!(parsed.dest_path, "");
        assert!(!parsed.continue_on_error);
    }

    #[test]
    fn yaml_config_round_trips_all_fields() {
        let yaml = "source_path: /data/out/part-.*\ndest_path: /data/merged.csv\ncontinue_on_error: true\n";
        let parsed: MergeConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.source_path, "/data/out/part-.*");
        assert_eq!(parsed.dest_path, "/data/merged.csv");
        assert!(parsed.continue_on_error);
    }
}
