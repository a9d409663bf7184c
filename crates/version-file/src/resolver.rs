use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Result, VersionFileError, VersionRecord};

pub const VERSION_FILE_NAME: &str = "VERSION";
pub const MANIFEST_DIR_VAR: &str = "CARGO_MANIFEST_DIR";

/// What to do with a version file that trims down to nothing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BlankPolicy {
    #[default]
    Reject,
    /// Hand back the empty string and log a warning.
    Allow,
}

#[derive(Debug, Clone, Default)]
pub struct Builder {
    base_dir: Option<PathBuf>,
    file_name: Option<String>,
    blank_policy: BlankPolicy,
}

impl Builder {
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn blank_policy(mut self, policy: BlankPolicy) -> Self {
        self.blank_policy = policy;
        self
    }

    /// Falls back to `CARGO_MANIFEST_DIR` when no base dir was given.
    pub fn build(self) -> Result<VersionResolver> {
        let base_dir = match self.base_dir {
            Some(dir) => dir,
            None => manifest_dir()?,
        };
        Ok(VersionResolver {
            base_dir,
            file_name: self
                .file_name
                .unwrap_or_else(|| VERSION_FILE_NAME.to_string()),
            blank_policy: self.blank_policy,
        })
    }
}

/// Reads the version of a package from a plain text file next to its
/// manifest. Holds no state between calls, every `resolve` hits the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionResolver {
    base_dir: PathBuf,
    file_name: String,
    blank_policy: BlankPolicy,
}

impl VersionResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            file_name: VERSION_FILE_NAME.to_string(),
            blank_policy: BlankPolicy::default(),
        }
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Anchors at the directory Cargo reports for the crate being built.
    /// Set for build scripts and during proc-macro expansion.
    pub fn from_manifest_dir() -> Result<Self> {
        Ok(Self::new(manifest_dir()?))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn blank_policy(&self) -> BlankPolicy {
        self.blank_policy
    }

    pub fn path(&self) -> PathBuf {
        self.base_dir.join(&self.file_name)
    }

    pub fn resolve(&self) -> Result<VersionRecord> {
        let path = self.path();
        debug!("resolving version from {}", path.display());

        let raw_text = fs::read_to_string(&path)
            .map_err(|err| VersionFileError::from_read(path.clone(), err))?;
        let record = VersionRecord::new(path, raw_text);

        if record.is_blank() {
            match self.blank_policy {
                BlankPolicy::Reject => {
                    return Err(VersionFileError::EmptyOrBlankVersion {
                        path: record.path().to_path_buf(),
                    });
                }
                BlankPolicy::Allow => {
                    warn!("version file {} is blank", record.path().display())
                }
            }
        }

        debug!("resolved version {:?}", record.resolved_value());
        Ok(record)
    }

    pub fn resolve_version(&self) -> Result<String> {
        self.resolve().map(VersionRecord::into_value)
    }
}

/// Reads `<base_dir>/VERSION` and returns its trimmed contents.
pub fn resolve_version(base_dir: impl AsRef<Path>) -> Result<String> {
    VersionResolver::new(base_dir.as_ref()).resolve_version()
}

fn manifest_dir() -> Result<PathBuf> {
    env::var_os(MANIFEST_DIR_VAR)
        .map(PathBuf::from)
        .ok_or(VersionFileError::MissingAnchor {
            var: MANIFEST_DIR_VAR,
            source: env::VarError::NotPresent,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_joins_base_dir_and_file_name() {
        let resolver = VersionResolver::new("/opt/pkg");
        assert_eq!(resolver.path(), PathBuf::from("/opt/pkg/VERSION"));
        assert_eq!(resolver.blank_policy(), BlankPolicy::Reject);
    }

    #[test]
    fn builder_overrides_defaults() {
        let resolver = VersionResolver::builder()
            .base_dir("/opt/pkg")
            .file_name("RELEASE")
            .blank_policy(BlankPolicy::Allow)
            .build()
            .unwrap();
        assert_eq!(resolver.file_name(), "RELEASE");
        assert_eq!(resolver.path(), PathBuf::from("/opt/pkg/RELEASE"));
        assert_eq!(resolver.blank_policy(), BlankPolicy::Allow);
    }

    #[test]
    fn manifest_dir_is_set_under_cargo() {
        // cargo sets CARGO_MANIFEST_DIR for test binaries too
        let resolver = VersionResolver::from_manifest_dir().unwrap();
        assert_eq!(resolver.base_dir(), Path::new(env!("CARGO_MANIFEST_DIR")));
    }

    #[test]
    fn blank_policy_serde_names() {
        let json = serde_json::to_string(&BlankPolicy::Allow).unwrap();
        assert_eq!(json, "\"allow\"");
        let policy: BlankPolicy = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(policy, BlankPolicy::Reject);
    }
}
