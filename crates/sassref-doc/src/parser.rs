//! Decoding of sassdoc JSON into typed records.

use crate::error::DocError;
use crate::record::{DocumentationRecord, UNDEFINED_GROUP};

/// Parse the JSON emitted by sassdoc.
///
/// Returns `Ok(None)` when the document is `null`, i.e. the extractor produced
/// no data at all. Fields the record model does not know about are ignored.
pub fn parse_records(source: &str) -> Result<Option<Vec<DocumentationRecord>>, DocError> {
    let records: Option<Vec<DocumentationRecord>> = serde_json::from_str(source)
        .map_err(|e| DocError::InvalidDocumentationData(e.to_string()))?;

    let Some(mut records) = records else {
        return Ok(None);
    };

    for record in &mut records {
        validate(record)?;
    }

    Ok(Some(records))
}

fn validate(record: &mut DocumentationRecord) -> Result<(), DocError> {
    if record.group.is_empty() {
        record.group.push(UNDEFINED_GROUP.to_string());
    }

    let line = record.context.line;
    if line.start == 0 || line.end < line.start {
        return Err(DocError::InvalidDocumentationData(format!(
            "{} in {} has an invalid line range {}-{}",
            record.context.name, record.file.path, line.start, line.end
        )));
    }

    Ok(())
}
