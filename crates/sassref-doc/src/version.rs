//! Library version lookup and links back to the library's source.

use std::cell::OnceCell;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::DocError;
use crate::options::FormatOptions;
use crate::record::DocumentationRecord;

/// First major version that lives in the monorepo package layout.
const PACKAGES_LAYOUT_MAJOR: u64 = 5;

/// A pinned library version, e.g. `5.1.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryVersion(String);

impl LibraryVersion {
    /// Parse a version string. A leading `v` is accepted; the rest must start
    /// with the major version digits.
    pub fn parse(raw: &str) -> Option<Self> {
        let version = raw.trim().trim_start_matches('v');
        if version.starts_with(|c: char| c.is_ascii_digit()) {
            Some(Self(version.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading digits of the version.
    pub fn major(&self) -> u64 {
        self.0
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .fold(0, |acc, c| {
                acc.saturating_mul(10)
                    .saturating_add(u64::from(c.to_digit(10).unwrap_or(0)))
            })
    }
}

impl fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read the version of `package` pinned in an npm lockfile.
///
/// Looks under `packages["node_modules/<package>"]` first and falls back to
/// the lockfile v1 `dependencies["<package>"]` entry.
pub fn resolve_library_version(manifest: &Path, package: &str) -> Result<LibraryVersion, DocError> {
    let unresolvable = |message: String| DocError::UnresolvableVersion {
        package: package.to_string(),
        manifest: manifest.display().to_string(),
        message,
    };

    let content = fs::read_to_string(manifest).map_err(|e| unresolvable(e.to_string()))?;
    let lock: Value = serde_json::from_str(&content).map_err(|e| unresolvable(e.to_string()))?;

    let raw = lock
        .get("packages")
        .and_then(|p| p.get(format!("node_modules/{}", package)))
        .or_else(|| lock.get("dependencies").and_then(|d| d.get(package)))
        .and_then(|entry| entry.get("version"))
        .and_then(Value::as_str)
        .ok_or_else(|| unresolvable("no pinned version entry".to_string()))?;

    let version = LibraryVersion::parse(raw)
        .ok_or_else(|| unresolvable(format!("`{}` is not a version", raw)))?;

    tracing::debug!("Resolved {} {} from {}", package, version, manifest.display());

    Ok(version)
}

/// Path inside the repository that holds the Sass sources for a version.
fn package_path(version: &LibraryVersion, package: &str) -> String {
    if version.major() < PACKAGES_LAYOUT_MAJOR {
        "/src".to_string()
    } else {
        format!("/packages/{}/src", package)
    }
}

/// Link to the lines of the library's source a record was extracted from.
pub fn build_source_link(
    record: &DocumentationRecord,
    version: &LibraryVersion,
    repository: &str,
    package: &str,
) -> String {
    format!(
        "{}/tree/v{}{}/govuk/{}#L{}-L{}",
        repository.trim_end_matches('/'),
        version,
        package_path(version, package),
        record.file.path,
        record.context.line.start,
        record.context.line.end
    )
}

/// Per-build state shared by everything that formats records.
///
/// The library version is read from the manifest on first use and reused
/// for the rest of the build.
#[derive(Debug)]
pub struct RenderContext {
    manifest: PathBuf,
    package: String,
    repository: String,
    options: FormatOptions,
    version: OnceCell<LibraryVersion>,
}

impl RenderContext {
    pub fn new(
        manifest: impl Into<PathBuf>,
        package: impl Into<String>,
        repository: impl Into<String>,
        options: FormatOptions,
    ) -> Self {
        Self {
            manifest: manifest.into(),
            package: package.into(),
            repository: repository.into(),
            options,
            version: OnceCell::new(),
        }
    }

    /// Context with an already known version; the manifest is never read.
    pub fn with_version(
        version: LibraryVersion,
        package: impl Into<String>,
        repository: impl Into<String>,
        options: FormatOptions,
    ) -> Self {
        let context = Self::new(PathBuf::new(), package, repository, options);
        let _ = context.version.set(version);
        context
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// The documented library's version, read from the manifest once.
    pub fn library_version(&self) -> Result<&LibraryVersion, DocError> {
        if let Some(version) = self.version.get() {
            return Ok(version);
        }

        let version = resolve_library_version(&self.manifest, &self.package)?;
        Ok(self.version.get_or_init(|| version))
    }

    /// Source link for a record using the resolved library version.
    pub fn source_link(&self, record: &DocumentationRecord) -> Result<String, DocError> {
        let version = self.library_version()?;
        Ok(build_source_link(
            record,
            version,
            &self.repository,
            &self.package,
        ))
    }
}
