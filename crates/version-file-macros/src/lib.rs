use std::path::Path;

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, LitStr};
use version_file::{VersionResolver, VERSION_FILE_NAME};

/// Expands to the trimmed contents of the crate's `VERSION` file as a
/// `&'static str`.
///
/// With an argument, the path is taken relative to `CARGO_MANIFEST_DIR`:
///
/// ```ignore
/// const VERSION: &str = version_file_macros::file_version!();
/// const RELEASE: &str = version_file_macros::file_version!("../../RELEASE");
/// ```
///
/// The file is registered as a compile input, so editing it rebuilds the crate.
#[proc_macro]
pub fn file_version(input: TokenStream) -> TokenStream {
    let relative = if input.is_empty() {
        LitStr::new(VERSION_FILE_NAME, Span::call_site())
    } else {
        parse_macro_input!(input as LitStr)
    };

    match expand(&relative) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(relative: &LitStr) -> syn::Result<proc_macro2::TokenStream> {
    let value = relative.value();
    let relative_path = Path::new(&value);
    let file_name = relative_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| syn::Error::new(relative.span(), "expected a path to a file"))?;

    let base = VersionResolver::from_manifest_dir()
        .map_err(|err| syn::Error::new(relative.span(), err.to_string()))?;
    let base_dir = match relative_path.parent() {
        Some(parent) => base.base_dir().join(parent),
        None => base.base_dir().to_path_buf(),
    };

    let resolver = VersionResolver::builder()
        .base_dir(base_dir)
        .file_name(file_name)
        .build()
        .map_err(|err| syn::Error::new(relative.span(), err.to_string()))?;
    let record = resolver
        .resolve()
        .map_err(|err| syn::Error::new(relative.span(), err.to_string()))?;

    let tracked = record
        .path()
        .to_str()
        .ok_or_else(|| syn::Error::new(relative.span(), "version file path is not valid UTF-8"))?;
    let version = record.resolved_value();

    Ok(quote! {
        {
            const _: &[u8] = include_bytes!(#tracked);
            #version
        }
    })
}
