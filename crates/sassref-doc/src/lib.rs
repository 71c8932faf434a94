//! Sassdoc record formatting for the API reference.
//!
//! This crate turns the flat list of records emitted by sassdoc into a grouped,
//! ordered structure and formats headings, call signatures, parameter tables and
//! source links for display.

pub mod error;
pub mod format;
pub mod group;
pub mod options;
pub mod parser;
pub mod record;
pub mod version;

pub use error::DocError;
pub use format::{
    format_group_heading, format_heading, format_inline_parameters, format_parameters_table,
    format_subgroup_heading, mixin_trailing_code, table_safe, usage_signature, DisplayParameter,
    GENERAL_LABEL, NO_DATA,
};
pub use group::{filter_records, group_by_topic, Subgroup, TopicGroup};
pub use options::FormatOptions;
pub use parser::parse_records;
pub use record::{
    Access, DocumentationRecord, Example, LineRange, Parameter, ReturnValue, SourceFile,
    SymbolContext, SymbolKind, UNDEFINED_GROUP,
};
pub use version::{build_source_link, resolve_library_version, LibraryVersion, RenderContext};
