mod writer;


pub use writer::append_report;

/// One entry of the index: a fixed-width line paired with its source path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Last line of the file, already fitted to the configured width
    pub formatted_line: String,
    /// Path exactly as it was enumerated (absolute or relative)
    pub path: String,
}

impl Record {
    pub fn new(formatted_line: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            formatted_line: formatted_line.into(),
            path: path.into(),
        }
    }

    /// The tab-delimited output form, `formatted_line` first
    pub fn render(&self) -> String {
        format!("{}\t{}", self.formatted_line, self.path)
    }
}

/// Sort records by their full rendered string.
///
/// Because every formatted line has the same width, this clusters similar
/// line formats together and breaks ties on the path suffix. The sort is
/// stable and byte-lexicographic.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by_cached_key(Record::render);
}
