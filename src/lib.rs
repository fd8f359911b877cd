//! folder-scan: recursive folder statistics
//!
//! Walks a directory tree once, counts regular files by extension and size,
//! and renders a fixed-layout text report.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod scan;
pub mod utils;

pub use domain::{ExtensionBreakdown, ExtensionStats, LargestFile, ScanFilter, ScanStatistics};
pub use error::ScanError;
pub use scan::FolderScanner;
