mod accumulator;
mod analyzer;
mod denied;
mod entry;
mod formatter;
mod ignore;
mod options;
mod size;
mod source;

#[cfg(test)]
mod testing;

pub use accumulator::{accumulate, Accumulator};
pub use analyzer::{analyze, analyze_with, normalize_root};
pub use denied::DeniedDirectories;
pub use entry::{total_size, RankedEntry};
pub use formatter::{format_json, format_summary, format_table, FormatOptions};
pub use ignore::{normalize_separators, IgnoreSet, RESERVED_PATH};
pub use options::{PathMode, ScanOptions};
pub use size::format_size;
pub use source::{DirItem, DirSource, EntryKind, OsEntries, OsSource};
