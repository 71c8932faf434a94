//! Write a default sassref.toml.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing sassref...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    tracing::info!("Run 'sassref build' after sassdoc has written its JSON output.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# sassref configuration

[docs]
# JSON written by sassdoc
data = "data/sassdoc.json"

# Markdown page to generate
output = "source/sass-api-reference.md"

# Page title
title = "Sass API reference"

[library]
# npm package being documented
package = "govuk-frontend"

# Lockfile the package version is read from
manifest = "package-lock.json"

# Repository used for "View source" links
repository = "https://github.com/alphagov/govuk-frontend"

# Installed Sass root containing components/ and overrides/
dist = "node_modules/govuk-frontend/dist/govuk"

[format]
# Skip records from bundled third-party code
vendor_prefix = "vendor/"

# Top-level groups shown first, in this order
group_order = ["settings", "tools", "helpers"]

# Subgroup headings that should not be sentence cased
[format.subgroup_labels]
ie8 = "IE8"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::config::load_config;
    use tempfile::tempdir;

    #[test]
    fn writes_loadable_default_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("sassref.toml");

        run(&path, false).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.library.package, "govuk-frontend");
        assert_eq!(
            config.format_options().subgroup_labels.get("ie8").map(String::as_str),
            Some("IE8")
        );
    }

    #[test]
    fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("sassref.toml");
        fs::write(&path, "# custom").unwrap();

        run(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# custom");

        run(&path, true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[library]"));
    }
}
