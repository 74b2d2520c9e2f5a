pub mod analyze;
pub mod completions;
