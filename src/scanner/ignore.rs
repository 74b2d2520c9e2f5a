use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

/// Pseudo-filesystem that is never scanned, whatever the caller asks for.
pub const RESERVED_PATH: &str = "/proc";

/// Paths skipped during a scan, compared textually against candidate paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    paths: Vec<String>,
}

impl IgnoreSet {
    /// Build the ignore list for one analyzer run.
    ///
    /// A missing or empty list becomes just [`RESERVED_PATH`]; otherwise the
    /// reserved path is appended when absent. Backslashes become forward
    /// slashes. Each call returns a fresh set.
    pub fn normalized(paths: Option<Vec<String>>) -> Self {
        let mut paths = match paths {
            Some(paths) if !paths.is_empty() => paths,
            _ => vec![RESERVED_PATH.to_string()],
        };

        if !paths.iter().any(|p| p == RESERVED_PATH) {
            paths.push(RESERVED_PATH.to_string());
        }

        for path in &mut paths {
            *path = normalize_separators(path);
        }

        Self { paths }
    }

    /// Exact byte-for-byte match
    pub fn contains(&self, path: impl AsRef<OsStr>) -> bool {
        let path = path.as_ref().as_bytes();
        self.paths.iter().any(|p| p.as_bytes() == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl From<Vec<String>> for IgnoreSet {
    /// Take the list verbatim, without the reserved path or separator rewriting.
    fn from(paths: Vec<String>) -> Self {
        Self { paths }
    }
}

/// Rewrite `\` separators as `/`
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
