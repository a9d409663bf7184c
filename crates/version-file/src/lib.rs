//! Read a package version from a `VERSION` file instead of hard-coding it.
//!
//! In a `build.rs`:
//!
//! ```no_run
//! fn main() {
//!     version_file::emit_version_env("MY_APP_VERSION").expect("VERSION file");
//! }
//! ```
//!
//! and then `env!("MY_APP_VERSION")` in the crate. For a compile-time literal
//! without a build script see the `version-file-macros` crate.

mod cargo;
mod error;
mod record;
mod resolver;

pub use cargo::emit_version_env;
pub use error::{Result, VersionFileError};
pub use record::VersionRecord;
pub use resolver::{
    resolve_version, BlankPolicy, Builder, VersionResolver, MANIFEST_DIR_VAR, VERSION_FILE_NAME,
};
