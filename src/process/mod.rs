pub mod merge;
pub mod order;
pub mod source_location;
