//! In-memory directory trees for exercising failure paths that a real
//! filesystem will not produce on demand (e.g. when tests run as root).

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use super::source::{DirItem, DirSource, EntryKind};

#[derive(Debug, Clone)]
enum Step {
    Item(DirItem),
    Fail(io::ErrorKind),
}

#[derive(Debug, Default)]
pub struct MemorySource {
    listings: HashMap<PathBuf, Vec<Step>>,
    open_failures: HashMap<PathBuf, io::ErrorKind>,
    opened: RefCell<Vec<PathBuf>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.add(DirItem::new(path, EntryKind::Dir, 0));
        self.listings.entry(path.to_path_buf()).or_default();
        self
    }

    pub fn file(mut self, path: impl AsRef<Path>, len: u64) -> Self {
        self.add(DirItem::new(path.as_ref(), EntryKind::File, len));
        self
    }

    pub fn symlink(mut self, path: impl AsRef<Path>) -> Self {
        self.add(DirItem::new(path.as_ref(), EntryKind::Symlink, 0));
        self
    }

    /// Opening `path` fails with `kind`
    pub fn fail_open(mut self, path: impl AsRef<Path>, kind: io::ErrorKind) -> Self {
        self.open_failures.insert(path.as_ref().to_path_buf(), kind);
        self
    }

    /// The listing of `dir` yields an error at its current end
    pub fn fail_next(mut self, dir: impl AsRef<Path>, kind: io::ErrorKind) -> Self {
        self.listings
            .entry(dir.as_ref().to_path_buf())
            .or_default()
            .push(Step::Fail(kind));
        self
    }

    /// Every directory passed to `read_dir`, in call order
    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.borrow().clone()
    }

    fn add(&mut self, item: DirItem) {
        if let Some(parent) = item.path.parent() {
            self.listings
                .entry(parent.to_path_buf())
                .or_default()
                .push(Step::Item(item));
        }
    }
}

impl DirSource for MemorySource {
    type Entries = std::vec::IntoIter<io::Result<DirItem>>;

    fn read_dir(&self, dir: &Path) -> io::Result<Self::Entries> {
        self.opened.borrow_mut().push(dir.to_path_buf());

        if let Some(kind) = self.open_failures.get(dir) {
            return Err(io::Error::from(*kind));
        }

        let steps = self
            .listings
            .get(dir)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;

        let entries: Vec<_> = steps
            .iter()
            .map(|step| match step {
                Step::Item(item) => Ok(item.clone()),
                Step::Fail(kind) => Err(io::Error::from(*kind)),
            })
            .collect();

        Ok(entries.into_iter())
    }
}
