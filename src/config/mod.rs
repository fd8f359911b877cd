//! Configuration loading and merging
//!
//! Settings come from an optional `folder-scan.toml` and the command line,
//! with CLI > File > Defaults precedence.

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides, ScanSettings};
