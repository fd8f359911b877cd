//! Filesystem access behind a trait so aggregation can run against a fake tree.

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What a path points at, as seen by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

impl From<std::fs::FileType> for EntryKind {
    fn from(file_type: std::fs::FileType) -> Self {
        if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// An entry the walker could not read.
#[derive(Debug)]
pub struct EntryError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

pub type EntryIter<'a> = Box<dyn Iterator<Item = Result<FsEntry, EntryError>> + 'a>;

/// Directory enumeration capability used by [`crate::scan::FolderScanner`].
pub trait FileSystem {
    /// Kind of the entry at `path`, following a symlinked root.
    fn probe(&self, path: &Path) -> io::Result<EntryKind>;

    /// Every descendant of `root` (not `root` itself), depth first.
    fn walk<'a>(&'a self, root: &Path) -> EntryIter<'a>;

    /// Size in bytes of a regular file.
    fn file_size(&self, path: &Path) -> io::Result<u64>;
}

/// The real filesystem, walked with `walkdir`.
#[derive(Debug, Clone, Default)]
pub struct DiskFileSystem {
    follow_symlinks: bool,
}

impl DiskFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether symbolic links are resolved while walking
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

impl FileSystem for DiskFileSystem {
    fn probe(&self, path: &Path) -> io::Result<EntryKind> {
        Ok(std::fs::metadata(path)?.file_type().into())
    }

    fn walk<'a>(&'a self, root: &Path) -> EntryIter<'a> {
        let root_path = root.to_path_buf();
        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .map(move |item| match item {
                Ok(entry) => {
                    Ok(FsEntry { kind: entry.file_type().into(), path: entry.into_path() })
                }
                Err(err) => {
                    let path =
                        err.path().map(Path::to_path_buf).unwrap_or_else(|| root_path.clone());
                    Err(EntryError { path, source: io::Error::from(err) })
                }
            });
        Box::new(walker)
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemoryNode {
    File(u64),
    Directory,
    Symlink,
    UnreadableFile,
    UnlistableDirectory,
}

/// In-memory tree for exercising the scanner without touching disk.
///
/// Paths iterate in `BTreeMap` order, which is component-wise and therefore
/// depth first with siblings sorted by name, like [`DiskFileSystem`].
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    nodes: BTreeMap<PathBuf, MemoryNode>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), MemoryNode::Directory)
    }

    pub fn file(self, path: impl AsRef<Path>, size: u64) -> Self {
        self.insert(path.as_ref(), MemoryNode::File(size))
    }

    pub fn symlink(self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), MemoryNode::Symlink)
    }

    /// A regular file whose size query fails with permission denied.
    pub fn unreadable_file(self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), MemoryNode::UnreadableFile)
    }

    /// A directory that cannot be listed; anything beneath it is never yielded.
    pub fn unlistable_dir(self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), MemoryNode::UnlistableDirectory)
    }

    fn insert(mut self, path: &Path, node: MemoryNode) -> Self {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes.entry(ancestor.to_path_buf()).or_insert(MemoryNode::Directory);
        }
        self.nodes.insert(path.to_path_buf(), node);
        self
    }
}

fn permission_denied() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied")
}

impl FileSystem for MemoryFileSystem {
    fn probe(&self, path: &Path) -> io::Result<EntryKind> {
        match self.nodes.get(path) {
            Some(MemoryNode::File(_)) | Some(MemoryNode::UnreadableFile) => Ok(EntryKind::File),
            Some(MemoryNode::Directory) | Some(MemoryNode::UnlistableDirectory) => {
                Ok(EntryKind::Directory)
            }
            Some(MemoryNode::Symlink) => Ok(EntryKind::Symlink),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory")),
        }
    }

    fn walk<'a>(&'a self, root: &Path) -> EntryIter<'a> {
        let root = root.to_path_buf();
        let mut blocked: Option<PathBuf> = None;
        let entries = self
            .nodes
            .iter()
            .filter(move |(path, _)| path.starts_with(&root) && **path != root)
            .filter_map(move |(path, node)| {
                if blocked.as_ref().is_some_and(|b| path.starts_with(b)) {
                    return None;
                }
                let kind = match node {
                    MemoryNode::File(_) | MemoryNode::UnreadableFile => EntryKind::File,
                    MemoryNode::Directory => EntryKind::Directory,
                    MemoryNode::Symlink => EntryKind::Symlink,
                    MemoryNode::UnlistableDirectory => {
                        blocked = Some(path.clone());
                        return Some(Err(EntryError {
                            path: path.clone(),
                            source: permission_denied(),
                        }));
                    }
                };
                Some(Ok(FsEntry { path: path.clone(), kind }))
            });
        Box::new(entries)
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        match self.nodes.get(path) {
            Some(MemoryNode::File(size)) => Ok(*size),
            Some(MemoryNode::UnreadableFile) => Err(permission_denied()),
            Some(_) => Err(io::Error::new(io::ErrorKind::Other, "Not a regular file")),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory")),
        }
    }
}
