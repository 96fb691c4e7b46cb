// Public API exports
pub mod config;
pub mod error;
pub mod extract;
pub mod report;
pub mod scan;
pub mod walker;

// Re-export main types for convenience
pub use config::{ScanConfig, DEFAULT_MAX_LENGTH, DEFAULT_OUTPUT, DEFAULT_ROOT};
pub use error::ScanError;

pub use extract::{fit_width, last_line, Extraction, SkipReason};

pub use report::{append_report, sort_records, Record};

pub use scan::{run_scan, ScanSummary};

pub use walker::walk;
