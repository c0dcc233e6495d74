//! Entries emitted by the walker

use std::fmt;
use std::path::{Path, PathBuf};

/// Whether an entry was classified as a directory or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Label printed before the path.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::File => "File",
            EntryKind::Directory => "Dir",
        }
    }
}

/// An absolute path plus its kind. Displays as `File:<path>` or `Dir:<path>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathEntry {
    kind: EntryKind,
    path: PathBuf,
}

impl PathEntry {
    pub fn new(kind: EntryKind, path: PathBuf) -> Self {
        Self { kind, path }
    }

    pub fn file(path: PathBuf) -> Self {
        Self::new(EntryKind::File, path)
    }

    pub fn directory(path: PathBuf) -> Self {
        Self::new(EntryKind::Directory, path)
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.label(), self.path.display())
    }
}
