//! Configuration file (sassref.toml).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use sassref_doc::FormatOptions;
use sassref_static::BuildConfig;
use serde::Deserialize;

/// Configuration file structure (sassref.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub format: FormatConfig,
}

#[derive(Debug, Deserialize)]
pub struct DocsConfig {
    /// Sassdoc JSON output
    #[serde(default = "default_data")]
    pub data: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_title")]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct LibraryConfig {
    #[serde(default = "default_package")]
    pub package: String,
    /// npm lockfile the version is read from
    #[serde(default = "default_manifest")]
    pub manifest: String,
    #[serde(default = "default_repository")]
    pub repository: String,
    /// Installed Sass package root, holds components/ and overrides/
    #[serde(default = "default_dist")]
    pub dist: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct FormatConfig {
    vendor_prefix: Option<String>,
    group_order: Option<Vec<String>>,
    subgroup_labels: Option<HashMap<String, String>>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            data: default_data(),
            output: default_output(),
            title: default_title(),
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            manifest: default_manifest(),
            repository: default_repository(),
            dist: default_dist(),
        }
    }
}

fn default_data() -> String {
    "data/sassdoc.json".to_string()
}
fn default_output() -> String {
    "source/sass-api-reference.md".to_string()
}
fn default_title() -> String {
    "Sass API reference".to_string()
}
fn default_package() -> String {
    "govuk-frontend".to_string()
}
fn default_manifest() -> String {
    "package-lock.json".to_string()
}
fn default_repository() -> String {
    "https://github.com/alphagov/govuk-frontend".to_string()
}
fn default_dist() -> String {
    "node_modules/govuk-frontend/dist/govuk".to_string()
}

impl ConfigFile {
    /// Formatting options, with unset keys taken from the defaults.
    pub fn format_options(&self) -> FormatOptions {
        let defaults = FormatOptions::default();
        FormatOptions {
            vendor_prefix: self
                .format
                .vendor_prefix
                .clone()
                .unwrap_or(defaults.vendor_prefix),
            group_order: self
                .format
                .group_order
                .clone()
                .unwrap_or(defaults.group_order),
            subgroup_labels: self
                .format
                .subgroup_labels
                .clone()
                .unwrap_or(defaults.subgroup_labels),
        }
    }

    /// Build configuration, with `output` overriding the configured page path.
    pub fn build_config(&self, output: Option<PathBuf>) -> BuildConfig {
        BuildConfig {
            data_path: PathBuf::from(&self.docs.data),
            output_path: output.unwrap_or_else(|| PathBuf::from(&self.docs.output)),
            manifest_path: PathBuf::from(&self.library.manifest),
            package: self.library.package.clone(),
            repository: self.library.repository.clone(),
            title: self.docs.title.clone(),
            options: self.format_options(),
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}
