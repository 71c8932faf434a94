//! Template engine for rendering the API reference page.

use minijinja::{context, Environment};
use sassref_doc::DisplayParameter;

/// A documented return value.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ReturnRow {
    /// Backticked type, or the no-data placeholder
    pub kind: String,
    /// Table-safe description
    pub description: Option<String>,
}

/// A usage example.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ExampleBlock {
    pub language: String,
    pub code: String,
    pub description: Option<String>,
}

/// A documented symbol ready to render.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ReferenceItem {
    /// Heading text, `$name` for variables
    pub heading: String,
    /// Symbol kind label (variable, mixin, ...)
    pub kind: String,
    pub description: Option<String>,
    /// How the symbol is used from Sass
    pub signature: String,
    pub parameters: Vec<DisplayParameter>,
    pub returns: Option<ReturnRow>,
    pub examples: Vec<ExampleBlock>,
    /// Link to the symbol's source lines
    pub source_url: String,
}

/// A subgroup section.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ReferenceSubgroup {
    pub heading: String,
    pub items: Vec<ReferenceItem>,
}

/// A top-level group section.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ReferenceGroup {
    pub heading: String,
    pub subgroups: Vec<ReferenceSubgroup>,
}

/// Context for rendering the reference page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// Page title
    pub title: String,
    /// Documented library, e.g. `govuk-frontend`
    pub package: String,
    /// Grouped sections in display order
    pub groups: Vec<ReferenceGroup>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the default reference template.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_template_owned("reference.md".to_string(), REFERENCE_TEMPLATE.to_string())
            .expect("Failed to add reference template");

        Self { env }
    }

    /// Render the reference page.
    pub fn render_page(&self, context: &Context) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("reference.md")?;

        tmpl.render(context! {
            title => &context.title,
            package => &context.package,
            groups => &context.groups,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

// `.md` templates are not auto-escaped, table cells carry their own HTML.
const REFERENCE_TEMPLATE: &str = r##"# {{ title }}

This reference is generated from the Sass comments in `{{ package }}`.
{% if not groups %}

There is no public Sass API to document.
{% endif %}
{% for group in groups %}

## {{ group.heading }}
{% for subgroup in group.subgroups %}

### {{ subgroup.heading }}
{% for item in subgroup.items %}

#### {{ item.heading }}

{% if item.description %}
{{ item.description }}

{% endif %}
```scss
{{ item.signature }}
```
{% if item.parameters %}

| Name | Type | Default | Description |
| ---- | ---- | ------- | ----------- |
{% for param in item.parameters %}
| {{ param.name }} | {{ param.kind }} | {{ param.default_value }} | {{ param.description }} |
{% endfor %}
{% endif %}
{% if item.returns %}

Returns {{ item.returns.kind }}{% if item.returns.description %}: {{ item.returns.description }}{% endif %}

{% endif %}
{% for example in item.examples %}

{% if example.description %}
{{ example.description }}

{% endif %}
```{{ example.language }}
{{ example.code }}
```
{% endfor %}

[View source for {{ item.kind }} {{ item.heading }}]({{ item.source_url }})
{% endfor %}
{% endfor %}
{% endfor %}
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> ReferenceItem {
        ReferenceItem {
            heading: "govuk-colour".to_string(),
            kind: "function".to_string(),
            description: Some("Get colour".to_string()),
            signature: "govuk-colour($colour)".to_string(),
            parameters: vec![DisplayParameter {
                name: "`$colour`".to_string(),
                kind: "`String`".to_string(),
                default_value: sassref_doc::NO_DATA.to_string(),
                description: "Name of colour".to_string(),
            }],
            returns: Some(ReturnRow {
                kind: "`Colour`".to_string(),
                description: None,
            }),
            examples: vec![],
            source_url: "https://example.com/colour.scss#L1-L2".to_string(),
        }
    }

    #[test]
    fn renders_reference_sections() {
        let engine = TemplateEngine::new();

        let context = Context {
            title: "Sass API reference".to_string(),
            package: "govuk-frontend".to_string(),
            groups: vec![ReferenceGroup {
                heading: "Helpers".to_string(),
                subgroups: vec![ReferenceSubgroup {
                    heading: "Colour".to_string(),
                    items: vec![item()],
                }],
            }],
        };

        let md = engine.render_page(&context).unwrap();

        assert!(md.starts_with("# Sass API reference\n"));
        assert!(md.contains("## Helpers\n"));
        assert!(md.contains("### Colour\n"));
        assert!(md.contains("#### govuk-colour\n"));
        assert!(md.contains("```scss\ngovuk-colour($colour)\n```"));
        assert!(md.contains("Returns `Colour`"));
        assert!(md.contains("(https://example.com/colour.scss#L1-L2)"));
        assert!(!md.contains("no public Sass API"));
    }

    #[test]
    fn does_not_escape_table_cells() {
        let engine = TemplateEngine::new();

        let context = Context {
            title: "Reference".to_string(),
            package: "govuk-frontend".to_string(),
            groups: vec![ReferenceGroup {
                heading: "General".to_string(),
                subgroups: vec![ReferenceSubgroup {
                    heading: "General".to_string(),
                    items: vec![item()],
                }],
            }],
        };

        let md = engine.render_page(&context).unwrap();

        assert!(md.contains(
            "| `$colour` | `String` | <span aria-hidden='true'>—</span> | Name of colour |"
        ));
    }

    #[test]
    fn renders_empty_reference() {
        let engine = TemplateEngine::new();

        let context = Context {
            title: "Reference".to_string(),
            package: "govuk-frontend".to_string(),
            groups: vec![],
        };

        let md = engine.render_page(&context).unwrap();

        assert!(md.contains("There is no public Sass API to document."));
        assert!(!md.contains("## "));
    }
}
