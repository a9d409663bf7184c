use std::io::{self, Write};

use tracing::debug;

use crate::{Result, VersionFileError, VersionRecord, VersionResolver};

impl VersionResolver {
    /// Writes the `rerun-if-changed` and `rustc-env` directives for the
    /// resolved version to `out`.
    ///
    /// `rerun-if-changed` goes out before the read so cargo keeps watching
    /// the path even when the file does not exist yet.
    pub fn emit_cargo_directives<W: Write>(&self, var: &str, out: &mut W) -> Result<VersionRecord> {
        validate_env_name(var)?;

        let path = self.path();
        writeln!(out, "cargo:rerun-if-changed={}", path.display())
            .map_err(|source| VersionFileError::DirectiveWrite { source })?;

        let record = self.resolve()?;
        if record.resolved_value().contains(['\n', '\r']) {
            return Err(VersionFileError::InvalidDirectiveValue {
                var: var.to_string(),
                value: record.resolved_value().to_string(),
            });
        }

        writeln!(out, "cargo:rustc-env={}={}", var, record.resolved_value())
            .map_err(|source| VersionFileError::DirectiveWrite { source })?;
        debug!("exported {}={}", var, record.resolved_value());

        Ok(record)
    }
}

/// Build script entry point: reads `VERSION` next to the manifest and
/// exports it as `var`.
///
/// ```no_run
/// // build.rs
/// fn main() {
///     version_file::emit_version_env("MY_APP_VERSION").expect("VERSION file");
/// }
/// ```
pub fn emit_version_env(var: &str) -> Result<VersionRecord> {
    let resolver = VersionResolver::from_manifest_dir()?;
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    resolver.emit_cargo_directives(var, &mut lock)
}

fn validate_env_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains(|c: char| c == '=' || c == '\0' || c.is_whitespace()) {
        return Err(VersionFileError::InvalidEnvName {
            name: name.to_string(),
        });
    }
    Ok(())
}
