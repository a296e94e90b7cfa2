use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::DistressBand;

/// Default number of leads shown by `list`.
pub const DEFAULT_LIST_LIMIT: usize = 20;

/// CLI configuration.
///
/// Example YAML:
/// ```yaml
/// store_path: /var/lib/leads/store.json
/// list_limit: 20
/// min_band: MEDIUM
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Store file location (default: ~/.config/lead-distress/store.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,

    /// Maximum number of leads shown by `list` (default: 20)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_limit: Option<usize>,

    /// Lowest band shown by `list` unless overridden on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_band: Option<DistressBand>,
}

impl Config {
    pub fn effective_list_limit(&self) -> usize {
        self.list_limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}
