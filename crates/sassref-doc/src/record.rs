//! Typed documentation records as emitted by sassdoc.

use serde::Deserialize;

/// Group name sassdoc assigns to items without an `@group` annotation.
pub const UNDEFINED_GROUP: &str = "undefined";

/// Visibility of a documented symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    Private,
    #[default]
    #[serde(other)]
    Other,
}

/// Kind of Sass symbol a record documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Variable,
    Function,
    Mixin,
    Placeholder,
    Css,
    #[default]
    #[serde(other)]
    Other,
}

impl SymbolKind {
    /// Label used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Function => "function",
            Self::Mixin => "mixin",
            Self::Placeholder => "placeholder",
            Self::Css => "css",
            Self::Other => "other",
        }
    }
}

/// Inclusive source line range of a symbol (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

/// File the symbol was extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceFile {
    /// Path relative to the library's Sass root
    pub path: String,
}

/// What the symbol is and where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SymbolContext {
    #[serde(rename = "type", default)]
    pub kind: SymbolKind,

    pub name: String,

    pub line: LineRange,

    /// Body of a mixin or function
    #[serde(default)]
    pub code: Option<String>,
}

/// One argument of a function or mixin.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Parameter {
    pub name: String,

    /// Declared type, possibly `"String | Boolean"` style alternatives
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Default value; its presence marks the parameter optional
    #[serde(default)]
    pub default: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// Documented return value of a function.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ReturnValue {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// A usage example attached to a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Example {
    #[serde(rename = "type", default)]
    pub language: Option<String>,

    pub code: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// A single documented Sass symbol.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentationRecord {
    #[serde(default)]
    pub access: Access,

    /// Group path, e.g. `["settings/colours"]`
    #[serde(default = "default_group")]
    pub group: Vec<String>,

    pub file: SourceFile,

    pub context: SymbolContext,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "parameter", default)]
    pub parameters: Vec<Parameter>,

    #[serde(rename = "return", default)]
    pub returns: Option<ReturnValue>,

    #[serde(rename = "example", default)]
    pub examples: Vec<Example>,
}

fn default_group() -> Vec<String> {
    vec![UNDEFINED_GROUP.to_string()]
}

impl DocumentationRecord {
    /// The full primary group entry, e.g. `settings/colours`.
    pub fn primary_group(&self) -> &str {
        self.group
            .first()
            .map(String::as_str)
            .unwrap_or(UNDEFINED_GROUP)
    }

    /// First slash-delimited segment of the primary group.
    pub fn top_level_group(&self) -> &str {
        let primary = self.primary_group();
        primary.split('/').next().unwrap_or(primary)
    }

    pub fn is_public(&self) -> bool {
        self.access == Access::Public
    }

    /// Whether the record comes from bundled third-party source.
    pub fn is_vendored(&self, vendor_prefix: &str) -> bool {
        !vendor_prefix.is_empty() && self.file.path.starts_with(vendor_prefix)
    }
}
