use serde::Serialize;

/// One immediate subdirectory of an analyzed root with its accumulated size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    /// Bare directory name (last path component)
    pub name: String,

    /// Bytes of regular files below the directory
    pub size: u64,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Sum of all entry sizes
pub fn total_size(entries: &[RankedEntry]) -> u64 {
    entries.iter().map(|e| e.size).sum()
}
