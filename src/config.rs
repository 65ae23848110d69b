use std::path::PathBuf;

/// File name used when no other location is configured.
pub const DEFAULT_TABLE_FILE: &str = "contacts.csv";

/// Runtime settings, handed to the store at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_path: PathBuf,
}

impl Config {
    pub fn new(table_path: impl Into<PathBuf>) -> Self {
        Self {
            table_path: table_path.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_FILE)
    }
}
