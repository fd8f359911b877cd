//! Small shared helpers

pub mod format;
pub mod paths;

pub use format::{format_size, format_with_commas};
pub use paths::expand_home;
