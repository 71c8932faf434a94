//! List the components and overrides shipped in the library package.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::config::load_config;

/// Run the contents command.
pub fn run(config_path: &Path) -> Result<()> {
    let file_config = load_config(config_path)?;
    let dist = PathBuf::from(&file_config.library.dist);

    let components = sassref_static::components(&dist)
        .with_context(|| format!("Failed to list components in {}", dist.display()))?;
    let overrides = sassref_static::overrides(&dist)
        .with_context(|| format!("Failed to list overrides in {}", dist.display()))?;

    tracing::info!(
        "Found {} components and {} overrides",
        components.len(),
        overrides.len()
    );

    println!("Components:");
    for name in &components {
        println!("  {}", name);
    }

    println!("Overrides:");
    for name in &overrides {
        println!("  {}", name);
    }

    Ok(())
}
