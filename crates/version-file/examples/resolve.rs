use std::env;

use tracing::info;
use version_file::{BlankPolicy, VersionResolver};

// cargo run --example resolve -- [dir]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut builder = VersionResolver::builder().blank_policy(BlankPolicy::Reject);
    if let Some(dir) = env::args().nth(1) {
        builder = builder.base_dir(dir);
    }
    let resolver = builder.build()?;

    let record = resolver.resolve()?;
    info!("{} -> {}", record.path().display(), record);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
