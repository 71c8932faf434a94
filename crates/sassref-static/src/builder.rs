//! API reference page builder.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use sassref_doc::{
    filter_records, format_group_heading, format_heading, format_parameters_table,
    format_subgroup_heading, group_by_topic, parse_records, table_safe, usage_signature,
    DocError, DocumentationRecord, FormatOptions, RenderContext, TopicGroup, NO_DATA,
};

use crate::templates::{
    Context, ExampleBlock, ReferenceGroup, ReferenceItem, ReferenceSubgroup, ReturnRow,
    TemplateEngine,
};

/// Configuration for building the reference page.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Sassdoc JSON output
    pub data_path: PathBuf,

    /// Markdown file to write
    pub output_path: PathBuf,

    /// npm lockfile pinning the documented library
    pub manifest_path: PathBuf,

    /// Documented npm package
    pub package: String,

    /// Repository the source links point at
    pub repository: String,

    /// Page title
    pub title: String,

    pub options: FormatOptions,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/sassdoc.json"),
            output_path: PathBuf::from("source/sass-api-reference.md"),
            manifest_path: PathBuf::from("package-lock.json"),
            package: "govuk-frontend".to_string(),
            repository: "https://github.com/alphagov/govuk-frontend".to_string(),
            title: "Sass API reference".to_string(),
            options: FormatOptions::default(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of top-level groups rendered
    pub groups: usize,

    /// Number of records rendered
    pub records: usize,

    /// Number of private or vendored records left out
    pub dropped: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Written reference page
    pub output_path: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Doc(#[from] DocError),

    #[error("Failed to read documentation data: {0}")]
    ReadError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Builds the markdown API reference from sassdoc output.
pub struct ReferenceBuilder {
    config: BuildConfig,
    context: RenderContext,
    templates: TemplateEngine,
}

impl ReferenceBuilder {
    /// Create a new reference builder.
    pub fn new(config: BuildConfig) -> Self {
        let context = RenderContext::new(
            config.manifest_path.clone(),
            config.package.clone(),
            config.repository.clone(),
            config.options.clone(),
        );

        Self::with_context(config, context)
    }

    /// Create a builder around an existing render context.
    pub fn with_context(config: BuildConfig, context: RenderContext) -> Self {
        Self {
            config,
            context,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the reference page.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let records = self.load_records()?;
        let total = records.as_ref().map_or(0, Vec::len);

        let public = filter_records(records, &self.context.options().vendor_prefix)?;
        let kept = public.len();

        let groups = group_by_topic(public, &self.context.options().group_order);
        if groups.is_empty() {
            tracing::warn!("No public Sass API found in {}", self.config.data_path.display());
        }

        let context = Context {
            title: self.config.title.clone(),
            package: self.config.package.clone(),
            groups: self.reference_groups(&groups)?,
        };

        let markdown = self
            .templates
            .render_page(&context)
            .map_err(|e: minijinja::Error| BuildError::TemplateError(e.to_string()))?;

        if let Some(parent) = self.config.output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&self.config.output_path, markdown)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(BuildResult {
            groups: groups.len(),
            records: kept,
            dropped: total - kept,
            duration_ms: start.elapsed().as_millis() as u64,
            output_path: self.config.output_path.clone(),
        })
    }

    /// Read sassdoc output. A missing file means no data was generated.
    fn load_records(&self) -> Result<Option<Vec<DocumentationRecord>>, BuildError> {
        let path = &self.config.data_path;

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No documentation data at {}", path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(BuildError::ReadError(format!("{}: {}", path.display(), e)));
            }
        };

        let records = parse_records(&content)?;

        if let Some(records) = &records {
            tracing::info!("Loaded {} records from {}", records.len(), path.display());
        }

        Ok(records)
    }

    /// Format grouped records into display sections.
    pub fn reference_groups(
        &self,
        groups: &[TopicGroup],
    ) -> Result<Vec<ReferenceGroup>, BuildError> {
        let labels = &self.context.options().subgroup_labels;
        let mut sections = Vec::with_capacity(groups.len());

        for group in groups {
            let mut subgroups = Vec::with_capacity(group.subgroups.len());

            for subgroup in &group.subgroups {
                let items = subgroup
                    .records
                    .iter()
                    .map(|record| self.reference_item(record))
                    .collect::<Result<Vec<_>, _>>()?;

                subgroups.push(ReferenceSubgroup {
                    heading: format_subgroup_heading(&subgroup.name, labels),
                    items,
                });
            }

            sections.push(ReferenceGroup {
                heading: format_group_heading(&group.name),
                subgroups,
            });
        }

        Ok(sections)
    }

    fn reference_item(&self, record: &DocumentationRecord) -> Result<ReferenceItem, BuildError> {
        let returns = record.returns.as_ref().map(|r| ReturnRow {
            kind: r
                .kind
                .as_deref()
                .map(|k| format!("`{}`", k))
                .unwrap_or_else(|| NO_DATA.to_string()),
            description: r.description.as_deref().map(table_safe),
        });

        let examples = record
            .examples
            .iter()
            .map(|e| ExampleBlock {
                language: e.language.clone().unwrap_or_else(|| "scss".to_string()),
                code: e.code.trim_end().to_string(),
                description: e.description.as_ref().map(|d| d.trim().to_string()),
            })
            .collect();

        Ok(ReferenceItem {
            heading: format_heading(record),
            kind: record.context.kind.label().to_string(),
            description: record
                .description
                .as_ref()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            signature: usage_signature(record),
            parameters: format_parameters_table(&record.parameters),
            returns,
            examples,
            source_url: self.context.source_link(record)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::tempdir;

    const SASSDOC: &str = r#"[
      {
        "description": "Get colour\n\nUses the palette.\n",
        "context": {
          "type": "function",
          "name": "govuk-colour",
          "line": { "start": 12, "end": 30 }
        },
        "parameter": [
          { "type": "String", "name": "colour", "description": "Name of colour from the palette" },
          { "type": "Colour | Boolean", "name": "legacy", "default": "false" }
        ],
        "return": { "type": "Colour" },
        "group": ["helpers/colour"],
        "access": "public",
        "file": { "path": "helpers/_colour.scss" }
      },
      {
        "context": { "type": "mixin", "name": "govuk-clearfix", "code": "&::after { }", "line": { "start": 9, "end": 15 } },
        "group": ["helpers"],
        "access": "public",
        "file": { "path": "helpers/_clearfix.scss" }
      },
      {
        "context": { "type": "variable", "name": "govuk-secret", "line": { "start": 1, "end": 1 } },
        "group": ["helpers"],
        "access": "private",
        "file": { "path": "helpers/_secret.scss" }
      },
      {
        "context": { "type": "variable", "name": "govuk-page-width", "line": { "start": 3, "end": 3 } },
        "group": ["settings/measurements"],
        "access": "public",
        "file": { "path": "settings/_measurements.scss" }
      },
      {
        "context": { "type": "mixin", "name": "mq", "line": { "start": 1, "end": 90 } },
        "group": ["undefined"],
        "access": "public",
        "file": { "path": "vendor/_sass-mq.scss" }
      }
    ]"#;

    const LOCKFILE: &str =
        r#"{ "packages": { "node_modules/govuk-frontend": { "version": "5.2.0" } } }"#;

    fn config(root: &Path) -> BuildConfig {
        BuildConfig {
            data_path: root.join("data/sassdoc.json"),
            output_path: root.join("build/sass.md"),
            manifest_path: root.join("package-lock.json"),
            ..Default::default()
        }
    }

    fn write_fixture(root: &Path, sassdoc: &str) {
        fs::create_dir_all(root.join("data")).unwrap();
        fs::write(root.join("data/sassdoc.json"), sassdoc).unwrap();
        fs::write(root.join("package-lock.json"), LOCKFILE).unwrap();
    }

    #[test]
    fn builds_reference_page() {
        let temp = tempdir().unwrap();
        write_fixture(temp.path(), SASSDOC);

        let result = ReferenceBuilder::new(config(temp.path())).build().unwrap();

        assert_eq!(result.groups, 2);
        assert_eq!(result.records, 3);
        assert_eq!(result.dropped, 2);

        let md = fs::read_to_string(temp.path().join("build/sass.md")).unwrap();

        let settings = md.find("## Settings").unwrap();
        let helpers = md.find("## Helpers").unwrap();
        assert!(settings < helpers);

        assert!(md.contains("### Measurements"));
        assert!(md.contains("### Colour"));
        assert!(md.contains("### General helpers"));
        assert!(md.contains("#### $govuk-page-width"));
        assert!(md.contains("Get colour\n\nUses the palette.\n"));
        assert!(md.contains("govuk-colour($colour, $legacy: false)"));
        assert!(md.contains("@include govuk-clearfix;"));
        assert!(md.contains("| `$legacy` | `Colour` or `Boolean` | `false` |"));
        assert!(md.contains(
            "https://github.com/alphagov/govuk-frontend/tree/v5.2.0/packages/govuk-frontend/src/govuk/helpers/_colour.scss#L12-L30"
        ));
        assert!(!md.contains("govuk-secret"));
        assert!(!md.contains("sass-mq"));
    }

    #[test]
    fn missing_data_fails_the_build() {
        let temp = tempdir().unwrap();

        let err = ReferenceBuilder::new(config(temp.path()))
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            BuildError::Doc(DocError::MissingDocumentationData)
        ));
        assert!(!temp.path().join("build/sass.md").exists());
    }

    #[test]
    fn null_data_fails_the_build() {
        let temp = tempdir().unwrap();
        write_fixture(temp.path(), "null");

        let err = ReferenceBuilder::new(config(temp.path()))
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("npm install"));
    }

    #[test]
    fn empty_data_renders_placeholder_page() {
        let temp = tempdir().unwrap();
        write_fixture(temp.path(), "[]");
        fs::remove_file(temp.path().join("package-lock.json")).unwrap();

        let result = ReferenceBuilder::new(config(temp.path())).build().unwrap();
        assert_eq!(result.groups, 0);

        let md = fs::read_to_string(result.output_path).unwrap();
        assert!(md.contains("There is no public Sass API to document."));
    }

    #[test]
    fn missing_manifest_fails_when_links_are_needed() {
        let temp = tempdir().unwrap();
        write_fixture(temp.path(), SASSDOC);
        fs::remove_file(temp.path().join("package-lock.json")).unwrap();

        let err = ReferenceBuilder::new(config(temp.path()))
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            BuildError::Doc(DocError::UnresolvableVersion { .. })
        ));
    }

    #[test]
    fn applies_subgroup_labels() {
        let temp = tempdir().unwrap();
        write_fixture(
            temp.path(),
            r#"[{
              "context": { "type": "mixin", "name": "govuk-if-ie8", "line": { "start": 1, "end": 4 } },
              "group": ["helpers/ie8"],
              "access": "public",
              "file": { "path": "helpers/_ie8.scss" }
            }]"#,
        );

        let result = ReferenceBuilder::new(config(temp.path())).build().unwrap();
        let md = fs::read_to_string(result.output_path).unwrap();

        assert!(md.contains("### IE8\n"));
    }
}
