use std::path::{Path, PathBuf};

/// Directory scanned when no root is given
pub const DEFAULT_ROOT: &str = "/var/log/";

/// Output file appended to when no destination is given
pub const DEFAULT_OUTPUT: &str = "log_formats.txt";

/// Fixed width applied to collected lines (configurable)
pub const DEFAULT_MAX_LENGTH: usize = 80;

/// Immutable per-run configuration, built once before the scan starts
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory tree to scan
    pub root: PathBuf,
    /// Destination file, opened in append mode
    pub output: PathBuf,
    /// Exact width of every formatted line, in characters
    pub max_length: usize,
    /// Host name recorded in the output header, if any
    pub host: Option<String>,
    /// Whether to record the collection time in the output header
    pub timestamp: bool,
}

impl ScanConfig {
    /// Create a configuration for a root directory with default settings
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            max_length: DEFAULT_MAX_LENGTH,
            host: None,
            timestamp: false,
        }
    }

    /// Set the output destination
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Set the fixed width for formatted lines
    pub fn max_length(mut self, width: usize) -> Self {
        self.max_length = width;
        self
    }

    /// Record a host name in the output header
    pub fn host(mut self, name: impl Into<String>) -> Self {
        self.host = Some(name.into());
        self
    }

    /// Record the collection time in the output header
    pub fn timestamp(mut self, enabled: bool) -> Self {
        self.timestamp = enabled;
        self
    }

    /// The root directory as a path
    pub fn root_path(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::new("/tmp/logs");
        assert_eq!(config.root, PathBuf::from("/tmp/logs"));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);
        assert!(config.host.is_none());
        assert!(!config.timestamp);
    }

    #[test]
    fn test_builder_chain() {
        let config = ScanConfig::new("/srv/logs")
            .output("out.txt")
            .max_length(40)
            .host("web01")
            .timestamp(true);
        assert_eq!(config.output, PathBuf::from("out.txt"));
        assert_eq!(config.max_length, 40);
        assert_eq!(config.host.as_deref(), Some("web01"));
        assert!(config.timestamp);
    }
}
