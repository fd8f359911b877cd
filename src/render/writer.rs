//! Report file persistence.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::path::{Component, Path, PathBuf};

const REPORT_PREFIX: &str = "scan_report";

/// Build `scan_report_<folder>_<YYYYMMDD_HHMMSS>.txt`.
///
/// `folder` is the path as the user gave it; when it has no final name
/// (`.`, `..`, `/`) the name of `resolved_root` is used instead.
pub fn report_filename(folder: &Path, resolved_root: &Path, at: DateTime<Local>) -> String {
    let name = folder_name(folder).or_else(|| folder_name(resolved_root)).unwrap_or_default();
    format!("{}_{}_{}.txt", REPORT_PREFIX, name, at.format("%Y%m%d_%H%M%S"))
}

fn folder_name(path: &Path) -> Option<String> {
    match path.components().next_back()? {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    }
}

/// Write `report` to a timestamped file and return the path written.
///
/// The file lands in `output_dir` (created if needed) or the current directory.
/// An existing file with the same name is overwritten.
pub fn save_report(
    report: &str,
    folder: &Path,
    resolved_root: &Path,
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let filename = report_filename(folder, resolved_root, Local::now());
    let report_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed creating output directory: {}", dir.display()))?;
            dir.join(&filename)
        }
        None => PathBuf::from(&filename),
    };

    std::fs::write(&report_path, report)
        .with_context(|| format!("Failed writing report: {}", report_path.display()))?;
    tracing::debug!("Wrote {} bytes to {}", report.len(), report_path.display());
    Ok(report_path)
}
