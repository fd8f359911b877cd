//! folder-scan: report file counts, sizes and extension breakdowns for a folder.

use anyhow::Result;

fn main() -> Result<()> {
    folder_scan::cli::run()
}
