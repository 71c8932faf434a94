//! Reference page build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use sassref_static::ReferenceBuilder;

use super::config::load_config;

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building Sass API reference...");

    let file_config = load_config(config_path)?;
    let config = file_config.build_config(output);

    let result = ReferenceBuilder::new(config).build()?;

    tracing::info!(
        "Rendered {} records in {} groups ({} private or vendored skipped) in {}ms",
        result.records,
        result.groups,
        result.dropped,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_path.display());

    Ok(())
}
