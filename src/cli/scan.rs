//! Scan command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::render::{render_report, save_report};
use crate::scan::{DiskFileSystem, FolderScanner};
use crate::utils::{expand_home, format_with_commas};

#[derive(Args)]
pub struct ScanArgs {
    /// Folder to scan (a leading `~` is expanded)
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Only count files with this extension (e.g. `txt` or `.txt`)
    #[arg(long, value_name = "EXTENSION")]
    pub ext: Option<String>,

    /// Skip files smaller than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub min_size: Option<u64>,

    /// Directory to write the report file into (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Config file path (default: folder-scan.toml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Follow symbolic links when scanning
    #[arg(long)]
    pub follow_symlinks: bool,
}

pub fn run(args: ScanArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config = load_config(&cwd, args.config.as_deref())?;
    let settings = merge_cli_with_config(
        config,
        CliOverrides {
            ext: args.ext,
            min_size: args.min_size,
            output_dir: args.output_dir,
            follow_symlinks: args.follow_symlinks,
        },
    );

    let folder = expand_home(&args.folder);
    let fs = DiskFileSystem::new().follow_symlinks(settings.follow_symlinks);
    let scanner = FolderScanner::with_fs(fs).filter(settings.filter);

    let root = scanner.resolve_root(&folder)?;
    println!("Scanning folder: {}", root.display());
    if let Some(ext) = scanner.active_filter().extension() {
        println!("Filtering by extension: {}", ext);
    }
    if let Some(min) = scanner.active_filter().min_size() {
        println!("Minimum size: {} bytes", format_with_commas(min));
    }
    println!("Please wait...\n");

    let stats = scanner.scan(&root)?;
    let report = render_report(&stats);
    println!("{}", report);

    let report_path = save_report(&report, &folder, &root, settings.output_dir.as_deref())?;
    println!("\nReport saved to: {}", report_path.display());

    Ok(())
}
