//! Options controlling filtering, ordering and heading labels.

use std::collections::HashMap;

/// Options for preparing records for display.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Records whose file path starts with this prefix are dropped
    pub vendor_prefix: String,

    /// Top-level groups listed first, in this order
    pub group_order: Vec<String>,

    /// Literal subgroup headings keyed by slug, e.g. `ie8` -> `IE8`
    pub subgroup_labels: HashMap<String, String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            vendor_prefix: "vendor/".to_string(),
            group_order: vec![
                "settings".to_string(),
                "tools".to_string(),
                "helpers".to_string(),
            ],
            subgroup_labels: HashMap::from([("ie8".to_string(), "IE8".to_string())]),
        }
    }
}
