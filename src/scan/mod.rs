//! Directory traversal and aggregation

pub mod fs;
pub mod scanner;

pub use fs::{DiskFileSystem, FileSystem, MemoryFileSystem};
pub use scanner::{extension_of, FolderScanner};
