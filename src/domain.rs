//! Core data types shared by the scanner, the renderer and the CLI.

use chrono::{DateTime, Local};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Key used for files whose name carries no extension.
pub const NO_EXTENSION: &str = ".no-extension";

/// Gate deciding which regular files are counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanFilter {
    extension: Option<String>,
    min_size: Option<u64>,
}

impl ScanFilter {
    /// Build a filter from raw user input.
    ///
    /// The extension is lowercased and gets a leading dot if missing. An empty
    /// extension and a minimum size of zero both mean "no filter".
    pub fn new(extension: Option<&str>, min_size: Option<u64>) -> Self {
        let extension = extension.map(str::trim).filter(|e| !e.is_empty()).map(|e| {
            let lower = e.to_lowercase();
            if lower.starts_with('.') {
                lower
            } else {
                format!(".{}", lower)
            }
        });

        Self { extension, min_size: min_size.filter(|&m| m > 0) }
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn min_size(&self) -> Option<u64> {
        self.min_size
    }

    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extension.as_deref().map_or(true, |wanted| wanted == extension)
    }

    /// Files of exactly `min_size` bytes pass; only strictly smaller ones fail.
    pub fn accepts_size(&self, size: u64) -> bool {
        self.min_size.map_or(true, |min| size >= min)
    }
}

/// Count and byte total for one extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtensionStats {
    pub count: usize,
    pub total_bytes: u64,
}

/// Extension to counters mapping that remembers first-discovery order.
#[derive(Debug, Clone, Default)]
pub struct ExtensionBreakdown {
    entries: Vec<(String, ExtensionStats)>,
    index: HashMap<String, usize>,
}

impl ExtensionBreakdown {
    /// Return the counters for `extension`, inserting zeroed ones on first use.
    pub fn upsert(&mut self, extension: &str) -> &mut ExtensionStats {
        let slot = match self.index.get(extension) {
            Some(&slot) => slot,
            None => {
                self.entries.push((extension.to_string(), ExtensionStats::default()));
                self.index.insert(extension.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[slot].1
    }

    pub fn get(&self, extension: &str) -> Option<&ExtensionStats> {
        self.index.get(extension).map(|&slot| &self.entries[slot].1)
    }

    /// Entries in the order they were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtensionStats)> {
        self.entries.iter().map(|(ext, stats)| (ext.as_str(), stats))
    }

    /// Entries sorted by descending count. Equal counts keep discovery order.
    pub fn sorted_by_count(&self) -> Vec<(&str, &ExtensionStats)> {
        let mut rows: Vec<_> = self.iter().collect();
        rows.sort_by(|a, b| b.1.count.cmp(&a.1.count));
        rows
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargestFile {
    pub path: PathBuf,
    pub size: u64,
}

/// Frozen result of one scan.
#[derive(Debug, Clone)]
pub struct ScanStatistics {
    pub root_path: PathBuf,
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub largest_file: Option<LargestFile>,
    pub by_extension: ExtensionBreakdown,
    pub scan_timestamp: DateTime<Local>,
    pub applied_filter: ScanFilter,
    /// Entries dropped because their metadata could not be read.
    pub entries_skipped: usize,
}

/// Values read from a `folder-scan.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub ext: Option<String>,
    pub min_size: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub follow_symlinks: bool,
}
