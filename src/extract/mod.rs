mod width;


pub use width::fit_width;

use std::fmt;
use std::fs;
use std::path::Path;

/// Outcome of reading one candidate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The last non-empty line, trailing whitespace stripped
    Extracted(String),
    /// The file produced no line and is left out of the index
    Skipped(SkipReason),
}

/// Why a candidate file contributed no line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Zero bytes, or nothing but whitespace
    Empty,
    /// Content is not valid UTF-8
    Binary,
    /// The file could not be opened or read
    Unreadable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Empty => write!(f, "empty"),
            SkipReason::Binary => write!(f, "binary"),
            SkipReason::Unreadable => write!(f, "unreadable"),
        }
    }
}

/// Read a file and isolate its last non-empty line.
///
/// The whole file is read; there is no reverse-seek shortcut. Files that
/// vanish or lose read permission between enumeration and this call are
/// reported as `Skipped(Unreadable)` rather than failing the run.
pub fn last_line(path: &Path) -> Extraction {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => return Extraction::Skipped(SkipReason::Unreadable),
    };

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => return Extraction::Skipped(SkipReason::Binary),
    };

    match text.lines().rev().find(|line| !line.trim().is_empty()) {
        Some(line) => Extraction::Extracted(line.trim_end().to_string()),
        None => Extraction::Skipped(SkipReason::Empty),
    }
}
