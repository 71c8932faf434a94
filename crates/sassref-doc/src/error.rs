//! Errors raised while preparing documentation records for display.

/// Errors that can occur when loading or formatting documentation records.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error("No sassdoc data found, run `npm install` to regenerate the documentation data")]
    MissingDocumentationData,

    #[error("Invalid documentation data: {0}")]
    InvalidDocumentationData(String),

    #[error("Unable to resolve the {package} version from {manifest}: {message}")]
    UnresolvableVersion {
        package: String,
        manifest: String,
        message: String,
    },
}
