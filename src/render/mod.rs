//! Output rendering (text report and report file)

pub mod report;
pub mod writer;

pub use report::render_report;
pub use writer::{report_filename, save_report};
