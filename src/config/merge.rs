//! Merge CLI arguments over file configuration

use crate::domain::{Config, ScanFilter};
use std::path::PathBuf;

/// Values given on the command line. `None`/`false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub ext: Option<String>,
    pub min_size: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub follow_symlinks: bool,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    pub filter: ScanFilter,
    pub output_dir: Option<PathBuf>,
    pub follow_symlinks: bool,
}

/// CLI values win over file values, which win over defaults.
pub fn merge_cli_with_config(config: Config, cli: CliOverrides) -> ScanSettings {
    let ext = cli.ext.or(config.ext);
    let min_size = cli.min_size.or(config.min_size);

    ScanSettings {
        filter: ScanFilter::new(ext.as_deref(), min_size),
        output_dir: cli.output_dir.or(config.output_dir),
        follow_symlinks: cli.follow_symlinks || config.follow_symlinks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config() {
        let config = Config {
            ext: Some("md".to_string()),
            min_size: Some(10),
            output_dir: Some(PathBuf::from("from-config")),
            follow_symlinks: false,
        };
        let cli = CliOverrides {
            ext: Some(".RS".to_string()),
            min_size: None,
            output_dir: Some(PathBuf::from("from-cli")),
            follow_symlinks: true,
        };

        let settings = merge_cli_with_config(config, cli);
        assert_eq!(settings.filter, ScanFilter::new(Some("rs"), Some(10)));
        assert_eq!(settings.output_dir, Some(PathBuf::from("from-cli")));
        assert!(settings.follow_symlinks);
    }

    #[test]
    fn defaults_when_nothing_given() {
        let settings = merge_cli_with_config(Config::default(), CliOverrides::default());
        assert_eq!(settings.filter, ScanFilter::default());
        assert!(settings.output_dir.is_none());
        assert!(!settings.follow_symlinks);
    }
}
