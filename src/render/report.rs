//! Plain-text scan report.

use crate::domain::ScanStatistics;
use crate::utils::{format_size, format_with_commas};

const RULE_WIDTH: usize = 60;
const EXTENSION_COLUMN: usize = 20;
const COUNT_COLUMN: usize = 10;

/// Render `stats` as the fixed-layout report. Lines are joined with `\n` and
/// there is no trailing newline.
pub fn render_report(stats: &ScanStatistics) -> String {
    let banner = "=".repeat(RULE_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    lines.push(banner.clone());
    lines.push("FOLDER SCAN REPORT".to_string());
    lines.push(banner.clone());
    lines.push(format!("Scan Time: {}", stats.scan_timestamp.format("%Y-%m-%d %H:%M:%S")));
    lines.push(format!("Folder: {}", stats.root_path.display()));
    if let Some(ext) = stats.applied_filter.extension() {
        lines.push(format!("Filter: {} files only", ext));
    }
    if let Some(min) = stats.applied_filter.min_size() {
        lines.push(format!(
            "Minimum Size: {} bytes ({})",
            format_with_commas(min),
            format_size(min)
        ));
    }
    lines.push(String::new());

    lines.push("SUMMARY".to_string());
    lines.push(rule.clone());
    lines.push(format!("Total Files: {}", stats.total_files));
    lines.push(format!("Total Size: {}", format_size(stats.total_size_bytes)));
    lines.push(String::new());

    match &stats.largest_file {
        Some(largest) => {
            let name = largest
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            lines.push(format!("Largest File: {}", name));
            lines.push(format!("Largest File Path: {}", largest.path.display()));
            lines.push(format!("Largest File Size: {}", format_size(largest.size)));
        }
        None => lines.push("No files found".to_string()),
    }
    lines.push(String::new());

    if !stats.by_extension.is_empty() {
        lines.push("FILE TYPES BREAKDOWN".to_string());
        lines.push(rule.clone());
        lines.push(format!(
            "{:<ew$} {:<cw$} {}",
            "Extension",
            "Count",
            "Total Size",
            ew = EXTENSION_COLUMN,
            cw = COUNT_COLUMN
        ));
        lines.push(rule);
        for (ext, counters) in stats.by_extension.sorted_by_count() {
            lines.push(format!(
                "{:<ew$} {:<cw$} {}",
                ext,
                counters.count,
                format_size(counters.total_bytes),
                ew = EXTENSION_COLUMN,
                cw = COUNT_COLUMN
            ));
        }
    }

    lines.push(banner);
    lines.join("\n")
}
