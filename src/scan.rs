use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::extract::{self, Extraction, SkipReason};
use crate::report::{self, Record};
use crate::walker;
use log::debug;

/// Counters reported to the operator after a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Candidate files enumerated by the walker
    pub files_seen: usize,
    /// Records written to the output file
    pub records_written: usize,
    /// Files skipped because their content was not valid UTF-8
    pub skipped_binary: usize,
    /// Files skipped because they held no non-empty line
    pub skipped_empty: usize,
    /// Files that vanished or lost read permission mid-run
    pub skipped_unreadable: usize,
}

/// Run the whole pipeline once: walk, extract, sort, append.
///
/// Per-file problems never abort the run; they are counted and logged at
/// debug level. The only fatal conditions are an invalid root (checked
/// before the output file is touched) and failure to write the output.
pub fn run_scan(config: &ScanConfig) -> Result<ScanSummary, ScanError> {
    let mut summary = ScanSummary::default();
    let mut records = Vec::new();

    for path in walker::walk(&config.root)? {
        summary.files_seen += 1;
        match extract::last_line(&path) {
            Extraction::Extracted(line) => {
                let formatted = extract::fit_width(&line, config.max_length);
                records.push(Record::new(formatted, path.display().to_string()));
            }
            Extraction::Skipped(reason) => {
                debug!("skipping {} ({reason})", path.display());
                match reason {
                    SkipReason::Empty => summary.skipped_empty += 1,
                    SkipReason::Binary => summary.skipped_binary += 1,
                    SkipReason::Unreadable => summary.skipped_unreadable += 1,
                }
            }
        }
    }

    report::sort_records(&mut records);
    report::append_report(config, &records)?;
    summary.records_written = records.len();

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scenario_config(tmp: &TempDir, max_length: usize) -> ScanConfig {
        let root = tmp.path().join("logs");
        fs::create_dir(&root).unwrap();
        ScanConfig::new(root)
            .output(tmp.path().join("out.txt"))
            .max_length(max_length)
    }

    #[test]
    fn test_mixed_tree_scenario() {
        let tmp = TempDir::new().unwrap();
        let config = scenario_config(&tmp, 10);
        fs::write(config.root.join("a.log"), "2023 ok\n").unwrap();
        fs::write(config.root.join("b.log"), [0xff, 0x00, 0x9c]).unwrap();
        fs::write(config.root.join("empty.log"), "").unwrap();

        let summary = run_scan(&config).unwrap();
        assert_eq!(summary.files_seen, 3);
        assert_eq!(summary.records_written, 1);
        assert_eq!(summary.skipped_binary, 1);
        assert_eq!(summary.skipped_empty, 1);
        assert_eq!(summary.skipped_unreadable, 0);

        let content = fs::read_to_string(&config.output).unwrap();
        assert_eq!(content.matches("### Logs collected from").count(), 1);
        let expected = format!("2023 ok   \t{}\n", config.root.join("a.log").display());
        assert!(content.contains(&expected), "missing record in {content:?}");
        assert!(!content.contains("b.log"));
        assert!(!content.contains("empty.log"));
    }

    #[test]
    fn test_records_come_out_sorted() {
        let tmp = TempDir::new().unwrap();
        let config = scenario_config(&tmp, 5);
        fs::write(config.root.join("1.log"), "ccc\n").unwrap();
        fs::write(config.root.join("2.log"), "aaa\n").unwrap();
        fs::write(config.root.join("3.log"), "bbb\n").unwrap();

        run_scan(&config).unwrap();

        let content = fs::read_to_string(&config.output).unwrap();
        let a = content.find("aaa").unwrap();
        let b = content.find("bbb").unwrap();
        let c = content.find("ccc").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_invalid_root_leaves_output_untouched() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("out.txt");
        let config = ScanConfig::new(tmp.path().join("missing")).output(&output);

        assert!(matches!(run_scan(&config), Err(ScanError::RootNotFound(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_empty_tree_still_succeeds() {
        let tmp = TempDir::new().unwrap();
        let config = scenario_config(&tmp, 80);

        let summary = run_scan(&config).unwrap();
        assert_eq!(summary, ScanSummary::default());

        // header is written even when nothing was found
        let content = fs::read_to_string(&config.output).unwrap();
        assert_eq!(content.matches("### Logs collected from").count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_content_never_appears() {
        let tmp = TempDir::new().unwrap();
        let config = scenario_config(&tmp, 20);
        let target = tmp.path().join("outside.log");
        fs::write(&target, "linked content\n").unwrap();
        std::os::unix::fs::symlink(&target, config.root.join("alias.log")).unwrap();

        let summary = run_scan(&config).unwrap();
        assert_eq!(summary.records_written, 0);
        let content = fs::read_to_string(&config.output).unwrap();
        assert!(!content.contains("linked content"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_never_appears() {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let config = scenario_config(&tmp, 20);
        let locked = config.root.join("locked.log");
        fs::write(&locked, "hidden content\n").unwrap();
        fs::set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();

        // root bypasses permission bits; nothing to assert in that case
        if fs::read(&locked).is_ok() {
            return;
        }

        let summary = run_scan(&config).unwrap();
        assert_eq!(summary.records_written, 0);
        assert_eq!(summary.skipped_unreadable, 1);
        let content = fs::read_to_string(&config.output).unwrap();
        assert!(!content.contains("hidden content"));
    }
}
