//! Display formatting for headings, signatures and parameter tables.

use std::collections::HashMap;

use serde::Serialize;

use crate::record::{DocumentationRecord, Parameter, SymbolKind, UNDEFINED_GROUP};

/// Heading used for records without a group.
pub const GENERAL_LABEL: &str = "General";

/// Table cell content for missing data; the dash is hidden from assistive technology.
pub const NO_DATA: &str = "<span aria-hidden='true'>—</span>";

/// A parameter prepared for a markdown table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayParameter {
    pub name: String,
    pub kind: String,
    pub default_value: String,
    pub description: String,
}

/// Heading for a record; variables get a `$` prefix to tell them apart
/// from mixins and functions of the same name.
pub fn format_heading(record: &DocumentationRecord) -> String {
    match record.context.kind {
        SymbolKind::Variable => format!("${}", record.context.name),
        SymbolKind::Function
        | SymbolKind::Mixin
        | SymbolKind::Placeholder
        | SymbolKind::Css
        | SymbolKind::Other => record.context.name.clone(),
    }
}

/// Heading for a top-level group, e.g. `settings/colours` -> `Settings / Colours`.
pub fn format_group_heading(raw: &str) -> String {
    if raw == UNDEFINED_GROUP {
        return GENERAL_LABEL.to_string();
    }

    titlecase(&raw.replace('/', " / "))
}

/// Heading for a subgroup, e.g. `helpers/device-pixels` -> `Device pixels`.
///
/// Slugs found in `labels` use the label verbatim.
pub fn format_subgroup_heading(raw: &str, labels: &HashMap<String, String>) -> String {
    if raw == UNDEFINED_GROUP {
        return GENERAL_LABEL.to_string();
    }

    let Some((_, slug)) = raw.rsplit_once('/') else {
        return format!("{} {}", GENERAL_LABEL, raw);
    };

    if let Some(label) = labels.get(slug) {
        return label.clone();
    }

    capitalize(&slug.replace('-', " "))
}

/// Parameters as they would be written at a call site: `($colour, $legacy: false)`.
///
/// Defaults are quoted only for `String` parameters. No parameters renders
/// as an empty string.
pub fn format_inline_parameters(parameters: &[Parameter]) -> String {
    if parameters.is_empty() {
        return String::new();
    }

    let rendered: Vec<String> = parameters
        .iter()
        .map(|param| {
            let mut output = format!("${}", param.name);
            if let Some(default) = &param.default {
                output.push_str(": ");
                if param.kind.as_deref() == Some("String") {
                    output.push('"');
                    output.push_str(default);
                    output.push('"');
                } else {
                    output.push_str(default);
                }
            }
            output
        })
        .collect();

    format!("({})", rendered.join(", "))
}

/// Parameters prepared for a markdown table.
pub fn format_parameters_table(parameters: &[Parameter]) -> Vec<DisplayParameter> {
    parameters
        .iter()
        .map(|param| DisplayParameter {
            name: format!("`${}`", param.name),
            kind: param
                .kind
                .as_deref()
                .map(format_type)
                .unwrap_or_else(|| NO_DATA.to_string()),
            default_value: param
                .default
                .as_deref()
                .map(|d| format!("`{}`", d))
                .unwrap_or_else(|| NO_DATA.to_string()),
            description: param
                .description
                .as_deref()
                .map(table_safe)
                .unwrap_or_else(|| NO_DATA.to_string()),
        })
        .collect()
}

/// Code following a mixin call: a block if the mixin accepts `@content`.
pub fn mixin_trailing_code(code: &str) -> &'static str {
    if code.contains("@content") {
        " {\n  //..\n}"
    } else {
        ";"
    }
}

/// How the symbol is used from Sass.
pub fn usage_signature(record: &DocumentationRecord) -> String {
    let name = &record.context.name;
    let params = format_inline_parameters(&record.parameters);

    match record.context.kind {
        SymbolKind::Variable => format_heading(record),
        SymbolKind::Function if params.is_empty() => format!("{}()", name),
        SymbolKind::Function => format!("{}{}", name, params),
        SymbolKind::Mixin => {
            let trailing = mixin_trailing_code(record.context.code.as_deref().unwrap_or(""));
            format!("@include {}{}{}", name, params, trailing)
        }
        SymbolKind::Placeholder => format!("@extend %{};", name),
        SymbolKind::Css | SymbolKind::Other => name.clone(),
    }
}

/// `String | Boolean` -> `` `String` or `Boolean` ``
fn format_type(kind: &str) -> String {
    kind.split(" | ")
        .map(|alternative| format!("`{}`", alternative))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Make text safe for a markdown table cell.
///
/// Pipes would be read as cell delimiters and line breaks end the row.
pub fn table_safe(text: &str) -> String {
    text.replace('|', "&#124;").replace(['\n', '\r'], "")
}

fn titlecase(s: &str) -> String {
    s.replace(['-', '_'], " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first letter and lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
