use std::path::Path;

use crate::error::{DirtallyError, Result};

use super::accumulator::Accumulator;
use super::denied::DeniedDirectories;
use super::entry::RankedEntry;
use super::ignore::{normalize_separators, IgnoreSet};
use super::options::ScanOptions;
use super::source::{DirSource, EntryKind, OsSource};

/// Rank the immediate subdirectories of `root` by total size.
pub fn analyze(root: &str, options: &ScanOptions) -> Result<Vec<RankedEntry>> {
    analyze_with(&OsSource, root, options)
}

/// Rank the immediate subdirectories of `root` as listed by `source`.
///
/// Each subdirectory gets its own accumulator pass with an empty denied
/// list. Files directly in `root` and ignored paths (exact match on the
/// full path) are left out. Symlinks directly under `root` are
/// skipped too, even when they point at directories. Failing to list `root`
/// itself is fatal.
pub fn analyze_with<S: DirSource>(
    source: &S,
    root: &str,
    options: &ScanOptions,
) -> Result<Vec<RankedEntry>> {
    let ignore = IgnoreSet::normalized(options.ignore.clone());
    let root = normalize_root(root, options.local_root);
    let root_path = Path::new(&root);

    tracing::debug!(root = %root, ignore = ?ignore, "Analyzing directory");

    let entries = source
        .read_dir(root_path)
        .map_err(|e| DirtallyError::from_io(root_path, e))?;

    let mut accumulator =
        Accumulator::new(source, &ignore, options.path_mode).with_diagnostics(options.print_errors);
    let mut ranked = Vec::new();

    for item in entries {
        let item = item.map_err(|e| DirtallyError::from_io(root_path, e))?;
        if item.kind != EntryKind::Dir {
            continue;
        }

        if ignore.contains(&item.path) {
            tracing::debug!(path = %item.path.display(), "Skipping ignored directory");
            continue;
        }

        let mut denied = DeniedDirectories::new();
        let size = accumulator.accumulate(&item.path, &mut denied)?;
        tracing::info!(
            path = %item.path.display(),
            size,
            denied = denied.len(),
            "Scanned directory"
        );

        ranked.push(RankedEntry::new(item.name(), size));
    }

    sort_ranked(&mut ranked, options.reverse);
    Ok(ranked)
}

/// Unify separators and, for a root relative to the working directory,
/// anchor it with `.`
pub fn normalize_root(root: &str, local: bool) -> String {
    let root = normalize_separators(root);
    if !local {
        root
    } else if root.starts_with('/') {
        format!(".{}", root)
    } else {
        format!("./{}", root)
    }
}

/// Stable sort by size; `reverse` puts the largest first
fn sort_ranked(entries: &mut [RankedEntry], reverse: bool) {
    if reverse {
        entries.sort_by(|a, b| b.size.cmp(&a.size));
    } else {
        entries.sort_by_key(|e| e.size);
    }
}
