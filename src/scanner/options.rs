use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

/// How a candidate path is compared against the ignore list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    /// Ignore entries are relative to the top-level directory being scanned
    #[default]
    Local,
    /// Ignore entries are full paths
    Absolute,
}

impl PathMode {
    /// Comparison key for `path` inside a scan started at `scan_root`.
    ///
    /// Local mode strips a literal `"{scan_root}/"` prefix, byte for byte; no
    /// path resolution takes place, so `..` or symlinked spellings will not
    /// line up.
    pub fn key<'p>(&self, path: &'p OsStr, scan_root: &OsStr) -> &'p OsStr {
        match self {
            PathMode::Absolute => path,
            PathMode::Local => path
                .as_bytes()
                .strip_prefix(scan_root.as_bytes())
                .and_then(|rest| rest.strip_prefix(b"/"))
                .map(OsStr::from_bytes)
                .unwrap_or(path),
        }
    }
}

/// Configuration options for an analyzer run.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Paths to skip (None = reserved path only)
    pub ignore: Option<Vec<String>>,

    /// How ignore entries are matched inside each subdirectory scan
    pub path_mode: PathMode,

    /// Treat the root as relative to the working directory
    pub local_root: bool,

    /// Report directories that could not be read on stderr
    pub print_errors: bool,

    /// Largest first
    pub reverse: bool,
}

impl ScanOptions {
    /// Create a new ScanOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set paths to ignore
    pub fn with_ignore(mut self, paths: Vec<String>) -> Self {
        self.ignore = Some(paths);
        self
    }

    /// Set how ignore entries are compared
    pub fn with_path_mode(mut self, mode: PathMode) -> Self {
        self.path_mode = mode;
        self
    }

    /// Set whether the root is relative to the working directory
    pub fn with_local_root(mut self, local: bool) -> Self {
        self.local_root = local;
        self
    }

    /// Set whether permission failures are reported
    pub fn with_print_errors(mut self, print: bool) -> Self {
        self.print_errors = print;
        self
    }

    /// Set sort direction (true = descending)
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}
