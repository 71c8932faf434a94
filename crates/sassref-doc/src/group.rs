//! Filtering and topic grouping of documentation records.

use crate::error::DocError;
use crate::record::DocumentationRecord;

/// Records sharing the same full group entry, e.g. `helpers/colour`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgroup {
    pub name: String,
    pub records: Vec<DocumentationRecord>,
}

/// Subgroups sharing the same top-level segment, e.g. `helpers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicGroup {
    pub name: String,
    pub subgroups: Vec<Subgroup>,
}

impl TopicGroup {
    /// Number of records across all subgroups.
    pub fn record_count(&self) -> usize {
        self.subgroups.iter().map(|s| s.records.len()).sum()
    }
}

/// Keep only public, non-vendored records, preserving input order.
///
/// `None` means the extractor produced no data at all, which is a
/// configuration error rather than an empty reference.
pub fn filter_records(
    records: Option<Vec<DocumentationRecord>>,
    vendor_prefix: &str,
) -> Result<Vec<DocumentationRecord>, DocError> {
    let records = records.ok_or(DocError::MissingDocumentationData)?;
    let total = records.len();

    let kept: Vec<DocumentationRecord> = records
        .into_iter()
        .filter(|r| r.is_public())
        .filter(|r| !r.is_vendored(vendor_prefix))
        .collect();

    tracing::debug!(
        "Kept {} of {} documentation records ({} private or vendored)",
        kept.len(),
        total,
        total - kept.len()
    );

    Ok(kept)
}

/// Group records by top-level topic, then by full group entry.
///
/// Subgroups and records keep first-seen order. Top-level groups are then
/// stably sorted so those named in `order` come first, in that order.
pub fn group_by_topic(records: Vec<DocumentationRecord>, order: &[String]) -> Vec<TopicGroup> {
    let mut groups: Vec<TopicGroup> = Vec::new();

    for record in records {
        let top = record.top_level_group().to_string();
        let sub = record.primary_group().to_string();

        let index = match groups.iter().position(|g| g.name == top) {
            Some(i) => i,
            None => {
                groups.push(TopicGroup {
                    name: top,
                    subgroups: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[index];

        match group.subgroups.iter_mut().find(|s| s.name == sub) {
            Some(subgroup) => subgroup.records.push(record),
            None => group.subgroups.push(Subgroup {
                name: sub,
                records: vec![record],
            }),
        }
    }

    // sort_by_key is stable, so unlisted groups keep first-seen order
    groups.sort_by_key(|g| {
        order
            .iter()
            .position(|name| *name == g.name)
            .unwrap_or(usize::MAX)
    });

    groups
}
