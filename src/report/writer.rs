use super::Record;
use crate::config::ScanConfig;
use crate::error::ScanError;
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;

/// Append a header block and the sorted records to the output file.
///
/// The destination is opened in append mode and created if missing, so
/// successive runs accumulate rather than overwrite. A crash mid-write
/// leaves a partial block behind; there is no atomic rename. Two runs
/// appending to the same file at once may interleave their blocks.
pub fn append_report(config: &ScanConfig, records: &[Record]) -> Result<(), ScanError> {
    let output_error = |source| ScanError::Output {
        path: config.output.clone(),
        source,
    };

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&config.output)
        .map_err(output_error)?;

    let mut block = format!("\n\n### Logs collected from {}", config.root.display());
    if let Some(host) = &config.host {
        block.push_str(&format!(" on {host}"));
    }
    if config.timestamp {
        block.push_str(&format!(" at {}", Utc::now().to_rfc3339()));
    }
    block.push_str(" ###\n\n\n");

    for record in records {
        block.push_str(&record.render());
        block.push('\n');
    }

    file.write_all(block.as_bytes()).map_err(output_error)
}
