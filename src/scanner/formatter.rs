use std::time::Duration;

use serde::Serialize;

use crate::error::Result;

use super::entry::{total_size, RankedEntry};
use super::size::format_size;

/// Format options for table output
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Show only the first N entries
    pub top_n: Option<usize>,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }
}

/// Format ranked entries as a simple table, in the order given
pub fn format_table(entries: &[RankedEntry], options: &FormatOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:>12}  {}\n", "SIZE", "NAME"));
    output.push_str(&format!("{:->12}  {:-<50}\n", "", ""));

    let shown = options.top_n.unwrap_or(entries.len()).min(entries.len());
    for entry in &entries[..shown] {
        output.push_str(&format!("{:>12}  {}\n", format_size(entry.size), entry.name));
    }

    if shown < entries.len() {
        output.push_str(&format!("{:>12}  ... {} more\n", "", entries.len() - shown));
    }

    output
}

#[derive(Serialize)]
struct JsonReport<'a> {
    entries: &'a [RankedEntry],
    total: u64,
}

/// Format ranked entries and their total as JSON
pub fn format_json(entries: &[RankedEntry], pretty: bool) -> Result<String> {
    let report = JsonReport {
        entries,
        total: total_size(entries),
    };

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}

/// Closing lines: grand total and how long the run took
pub fn format_summary(total: u64, elapsed: Duration) -> String {
    format!(
        "Total: {}\nCompleted in {:.3} seconds",
        format_size(total),
        elapsed.as_secs_f64()
    )
}
