//! Fatal scan errors.

use std::path::PathBuf;
use thiserror::Error;

/// Root precondition failures. These abort the run before any report exists.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Folder '{}' does not exist.", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a folder.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot access folder '{}': {source}", path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
