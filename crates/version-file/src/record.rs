use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// One read of a version file. Built fresh on every resolution.
///
/// Deserializing recomputes the trimmed value from `raw_text`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "StoredRecord")]
pub struct VersionRecord {
    path: PathBuf,
    raw_text: String,
    resolved_value: String,
}

impl VersionRecord {
    pub fn new(path: impl Into<PathBuf>, raw_text: String) -> Self {
        let resolved_value = raw_text.trim().to_string();
        Self {
            path: path.into(),
            raw_text,
            resolved_value,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File content exactly as read.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn resolved_value(&self) -> &str {
        &self.resolved_value
    }

    pub fn is_blank(&self) -> bool {
        self.resolved_value.is_empty()
    }

    pub fn into_value(self) -> String {
        self.resolved_value
    }
}

#[derive(Deserialize)]
struct StoredRecord {
    path: PathBuf,
    raw_text: String,
}

impl From<StoredRecord> for VersionRecord {
    fn from(stored: StoredRecord) -> Self {
        Self::new(stored.path, stored.raw_text)
    }
}

impl Display for VersionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.resolved_value)
    }
}
