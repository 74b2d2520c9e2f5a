use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What a directory entry is, judged without following symbolic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    /// Sockets, FIFOs, device nodes
    Other,
}

/// A single entry produced while enumerating a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirItem {
    /// Parent directory path joined with the entry name
    pub path: PathBuf,

    pub kind: EntryKind,

    /// Byte length for regular files, 0 for everything else
    pub len: u64,
}

impl DirItem {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind, len: u64) -> Self {
        Self {
            path: path.into(),
            kind,
            len,
        }
    }

    /// Last component of the path
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Something that can list the entries of a directory.
///
/// Opening a directory can fail, and so can every single entry yielded
/// afterwards. Callers treat both the same way.
pub trait DirSource {
    type Entries: Iterator<Item = io::Result<DirItem>>;

    fn read_dir(&self, dir: &Path) -> io::Result<Self::Entries>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSource;

impl DirSource for OsSource {
    type Entries = OsEntries;

    fn read_dir(&self, dir: &Path) -> io::Result<OsEntries> {
        Ok(OsEntries {
            dir: dir.to_path_buf(),
            inner: fs::read_dir(dir)?,
        })
    }
}

/// Entries of one open directory. The handle is released when this is dropped.
#[derive(Debug)]
pub struct OsEntries {
    dir: PathBuf,
    inner: fs::ReadDir,
}

impl Iterator for OsEntries {
    type Item = io::Result<DirItem>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.inner.next()? {
            Ok(e) => e,
            Err(e) => return Some(Err(e)),
        };
        Some(classify(&self.dir, &entry))
    }
}

fn classify(dir: &Path, entry: &fs::DirEntry) -> io::Result<DirItem> {
    // Join onto the path as given so "./x" stays "./x"
    let path = dir.join(entry.file_name());

    // DirEntry::file_type does not follow symlinks
    let file_type = entry.file_type()?;
    let item = if file_type.is_symlink() {
        DirItem::new(path, EntryKind::Symlink, 0)
    } else if file_type.is_dir() {
        DirItem::new(path, EntryKind::Dir, 0)
    } else if file_type.is_file() {
        let len = entry.metadata()?.len();
        DirItem::new(path, EntryKind::File, len)
    } else {
        DirItem::new(path, EntryKind::Other, 0)
    };

    Ok(item)
}
