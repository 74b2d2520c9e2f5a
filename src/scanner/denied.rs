use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Directories the OS refused to enumerate during one top-level scan.
///
/// Any later candidate whose path starts with a recorded entry is not
/// descended into. Entries are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeniedDirectories {
    paths: Vec<PathBuf>,
}

impl DeniedDirectories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    /// Prefix check on the raw path bytes against every recorded path
    pub fn is_denied(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref().as_os_str().as_bytes();
        self.paths
            .iter()
            .any(|denied| path.starts_with(denied.as_os_str().as_bytes()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_new_is_empty() {
        let denied = DeniedDirectories::new();
        assert!(denied.is_empty());
        assert!(!denied.is_denied("/anything"));
    }

    #[test]
    fn test_prefix_matching() {
        let mut denied = DeniedDirectories::new();
        denied.record("/root/private");

        assert!(denied.is_denied("/root/private"));
        assert!(denied.is_denied("/root/private/keys"));
        assert!(!denied.is_denied("/root"));
        assert!(!denied.is_denied("/home/private"));
    }

    #[test]
    fn test_prefix_is_textual() {
        let mut denied = DeniedDirectories::new();
        denied.record("/srv/data");

        // Not component aware
        assert!(denied.is_denied("/srv/database"));
    }

    #[test]
    fn test_non_utf8_names_stay_distinct() {
        let mut denied = DeniedDirectories::new();
        denied.record(Path::new(OsStr::from_bytes(b"/r/a/\xff")));

        assert!(denied.is_denied(OsStr::from_bytes(b"/r/a/\xff/inner")));
        assert!(!denied.is_denied(OsStr::from_bytes(b"/r/a/\xfe")));
    }

    #[test]
    fn test_record_preserves_order() {
        let mut denied = DeniedDirectories::new();
        denied.record("/b");
        denied.record("/a");
        assert_eq!(
            denied.iter().collect::<Vec<_>>(),
            vec![Path::new("/b"), Path::new("/a")]
        );
        assert_eq!(denied.len(), 2);
    }
}
