//! Folder scanner: one traversal, one accumulator, one frozen snapshot.

use crate::domain::{ExtensionBreakdown, LargestFile, ScanFilter, ScanStatistics, NO_EXTENSION};
use crate::error::ScanError;
use crate::scan::fs::{DiskFileSystem, EntryKind, FileSystem};
use chrono::Local;
use std::io;
use std::path::{Path, PathBuf};

/// Scanner that aggregates file statistics below a root folder.
pub struct FolderScanner<F: FileSystem = DiskFileSystem> {
    fs: F,
    filter: ScanFilter,
}

impl FolderScanner<DiskFileSystem> {
    /// Create a scanner over the real filesystem with no filter.
    pub fn new() -> Self {
        Self::with_fs(DiskFileSystem::new())
    }
}

impl Default for FolderScanner<DiskFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> FolderScanner<F> {
    pub fn with_fs(fs: F) -> Self {
        Self { fs, filter: ScanFilter::default() }
    }

    /// Set the filter applied to every regular file
    pub fn filter(mut self, filter: ScanFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn active_filter(&self) -> &ScanFilter {
        &self.filter
    }

    /// Check that `root` is an existing directory and return its absolute form.
    pub fn resolve_root(&self, root: &Path) -> Result<PathBuf, ScanError> {
        match self.fs.probe(root) {
            Ok(EntryKind::Directory) => {}
            Ok(_) => return Err(ScanError::NotADirectory(root.to_path_buf())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ScanError::NotFound(root.to_path_buf()));
            }
            Err(source) => {
                return Err(ScanError::Inaccessible { path: root.to_path_buf(), source });
            }
        }

        std::path::absolute(root)
            .map_err(|source| ScanError::Inaccessible { path: root.to_path_buf(), source })
    }

    /// Walk `root` and aggregate every regular file that passes the filter.
    ///
    /// Entries whose metadata cannot be read are logged and skipped; only root
    /// validation failures abort the scan.
    pub fn scan(&self, root: &Path) -> Result<ScanStatistics, ScanError> {
        let root = self.resolve_root(root)?;
        tracing::debug!("Scanning {} with filter {:?}", root.display(), self.filter);

        let mut acc = ScanAccumulator::default();

        for item in self.fs.walk(&root) {
            let entry = match item {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("Could not access {}: {}", err.path.display(), err.source);
                    acc.entries_skipped += 1;
                    continue;
                }
            };

            if entry.kind != EntryKind::File {
                continue;
            }

            let extension = extension_of(&entry.path);
            if !self.filter.accepts_extension(&extension) {
                continue;
            }

            let size = match self.fs.file_size(&entry.path) {
                Ok(size) => size,
                Err(err) => {
                    tracing::warn!("Could not access {}: {}", entry.path.display(), err);
                    acc.entries_skipped += 1;
                    continue;
                }
            };

            if !self.filter.accepts_size(size) {
                tracing::trace!("Below minimum size: {} ({} bytes)", entry.path.display(), size);
                continue;
            }

            acc.record(entry.path, &extension, size);
        }

        if acc.entries_skipped > 0 {
            tracing::info!("Skipped {} unreadable entries", acc.entries_skipped);
        }

        Ok(acc.finish(root, self.filter.clone()))
    }
}

/// Normalized extension of a file name, or [`NO_EXTENSION`].
///
/// Dotfiles such as `.bashrc` and names ending in `.` have no extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_else(|| NO_EXTENSION.to_string())
}

#[derive(Default)]
struct ScanAccumulator {
    total_files: usize,
    total_size_bytes: u64,
    largest_file: Option<LargestFile>,
    by_extension: ExtensionBreakdown,
    entries_skipped: usize,
}

impl ScanAccumulator {
    fn record(&mut self, path: PathBuf, extension: &str, size: u64) {
        self.total_files += 1;
        self.total_size_bytes += size;

        let counters = self.by_extension.upsert(extension);
        counters.count += 1;
        counters.total_bytes += size;

        // Strict comparison so the first file seen keeps a tie.
        if self.largest_file.as_ref().map_or(true, |largest| size > largest.size) {
            self.largest_file = Some(LargestFile { path, size });
        }
    }

    fn finish(self, root_path: PathBuf, applied_filter: ScanFilter) -> ScanStatistics {
        ScanStatistics {
            root_path,
            total_files: self.total_files,
            total_size_bytes: self.total_size_bytes,
            largest_file: self.largest_file,
            by_extension: self.by_extension,
            scan_timestamp: Local::now(),
            applied_filter,
            entries_skipped: self.entries_skipped,
        }
    }
}
