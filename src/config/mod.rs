pub mod merge_config;
pub mod validation;
