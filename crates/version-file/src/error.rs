use std::{env::VarError, io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionFileError {
    #[error("version file not found: {}", path.display())]
    MissingVersionFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Permissions, invalid UTF-8, or a directory where the file should be.
    #[error("failed to read version file '{}': {source}", path.display())]
    UnreadableVersionFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("version file '{}' is empty or contains only whitespace", path.display())]
    EmptyOrBlankVersion { path: PathBuf },

    #[error("{var} is not set, cannot locate the version file: {source}")]
    MissingAnchor {
        var: &'static str,
        #[source]
        source: VarError,
    },

    #[error("invalid environment variable name: {name:?}")]
    InvalidEnvName { name: String },

    #[error("version {value:?} for {var} spans multiple lines")]
    InvalidDirectiveValue { var: String, value: String },

    #[error("failed to write cargo directive: {source}")]
    DirectiveWrite {
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, VersionFileError>;

impl VersionFileError {
    pub(crate) fn from_read(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::MissingVersionFile { path, source },
            _ => Self::UnreadableVersionFile { path, source },
        }
    }

    /// Path of the version file involved, if the error concerns one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::MissingVersionFile { path, .. }
            | Self::UnreadableVersionFile { path, .. }
            | Self::EmptyOrBlankVersion { path } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_missing() {
        let err = VersionFileError::from_read(
            PathBuf::from("x/VERSION"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(err, VersionFileError::MissingVersionFile { .. }));
        assert!(err.to_string().contains("x/VERSION"));
    }

    #[test]
    fn other_kinds_map_to_unreadable() {
        for kind in [io::ErrorKind::PermissionDenied, io::ErrorKind::InvalidData] {
            let err = VersionFileError::from_read(PathBuf::from("VERSION"), io::Error::from(kind));
            assert!(matches!(err, VersionFileError::UnreadableVersionFile { .. }));
            assert_eq!(err.path(), Some(std::path::Path::new("VERSION")));
        }
    }
}
