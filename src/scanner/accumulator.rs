use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{DirtallyError, Result};

use super::denied::DeniedDirectories;
use super::ignore::IgnoreSet;
use super::options::PathMode;
use super::source::{DirSource, EntryKind, OsSource};

/// Sums regular file sizes below a directory.
///
/// Symbolic links are never counted or descended. A directory the OS refuses
/// to enumerate contributes whatever was counted before the refusal and is
/// recorded in the caller's [`DeniedDirectories`]; every other I/O error
/// aborts the scan.
///
/// With diagnostics enabled each refused directory is reported on `W`
/// (stderr unless replaced with [`Accumulator::with_diagnostic_writer`]).
pub struct Accumulator<'a, S, W = io::Stderr> {
    source: &'a S,
    ignore: &'a IgnoreSet,
    mode: PathMode,
    print_errors: bool,
    diagnostics: W,
}

impl<'a, S: DirSource> Accumulator<'a, S> {
    pub fn new(source: &'a S, ignore: &'a IgnoreSet, mode: PathMode) -> Self {
        Self {
            source,
            ignore,
            mode,
            print_errors: false,
            diagnostics: io::stderr(),
        }
    }
}

impl<'a, S: DirSource, W: Write> Accumulator<'a, S, W> {
    /// Report denied directories
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.print_errors = enabled;
        self
    }

    /// Send diagnostics to `writer` instead
    pub fn with_diagnostic_writer<V: Write>(self, writer: V) -> Accumulator<'a, S, V> {
        Accumulator {
            source: self.source,
            ignore: self.ignore,
            mode: self.mode,
            print_errors: self.print_errors,
            diagnostics: writer,
        }
    }

    /// Total bytes below `dir`, which also becomes the root for local ignore keys.
    pub fn accumulate(&mut self, dir: &Path, denied: &mut DeniedDirectories) -> Result<u64> {
        self.scan(dir, dir.as_os_str(), denied)
    }

    fn scan(&mut self, dir: &Path, scan_root: &OsStr, denied: &mut DeniedDirectories) -> Result<u64> {
        let mut total = 0;

        match self.scan_level(dir, scan_root, denied, &mut total) {
            Ok(()) => Ok(total),
            Err(DirtallyError::PermissionDenied(_)) => {
                denied.record(dir);
                tracing::debug!(path = %dir.display(), partial = total, "Permission denied");
                if self.print_errors {
                    writeln!(
                        self.diagnostics,
                        "permission denied for folder \"{}\"",
                        dir.display()
                    )
                    .map_err(|e| DirtallyError::from_io(dir, e))?;
                }
                Ok(total)
            }
            Err(e) => Err(e),
        }
    }

    /// Adds this level's files and subtrees into `total` as it goes, so a
    /// failure part way through leaves the partial sum behind.
    fn scan_level(
        &mut self,
        dir: &Path,
        scan_root: &OsStr,
        denied: &mut DeniedDirectories,
        total: &mut u64,
    ) -> Result<()> {
        let entries = self
            .source
            .read_dir(dir)
            .map_err(|e| DirtallyError::from_io(dir, e))?;

        for item in entries {
            let item = item.map_err(|e| DirtallyError::from_io(dir, e))?;
            let path = item.path.as_os_str();

            match item.kind {
                EntryKind::File => {
                    if !self.ignore.contains(self.mode.key(path, scan_root)) {
                        *total += item.len;
                    }
                }
                EntryKind::Dir => {
                    if denied.is_denied(&item.path) {
                        continue;
                    }
                    if !self.ignore.contains(self.mode.key(path, scan_root)) {
                        *total += self.scan(&item.path, scan_root, denied)?;
                    }
                }
                EntryKind::Symlink | EntryKind::Other => {}
            }
        }

        Ok(())
    }
}

/// Total bytes of regular files below `path` on the real filesystem.
pub fn accumulate(
    path: &Path,
    ignore: &IgnoreSet,
    mode: PathMode,
    denied: &mut DeniedDirectories,
) -> Result<u64> {
    Accumulator::new(&OsSource, ignore, mode).accumulate(path, denied)
}
