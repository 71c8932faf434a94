//! Markdown API reference builder for sassref.
//!
//! Loads sassdoc output, prepares it with `sassref-doc` and renders the
//! reference page the documentation site includes.

pub mod builder;
pub mod contents;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, ReferenceBuilder};
pub use contents::{components, overrides, ContentsError};
