//! Path helpers

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the current user's home directory.
///
/// `~user` forms are left untouched, as is everything when no home directory
/// can be determined.
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home,
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
