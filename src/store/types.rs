use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::financial::FinancialRecord;
use crate::overview::SignalRecord;

pub const STORE_VERSION: u32 = 1;

pub type PropertyId = u64;

/// Everything persisted for the lead book: one overview and one financial
/// record per property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreState {
    pub version: u32,
    #[serde(default)]
    pub overviews: BTreeMap<PropertyId, OverviewEntry>,
    #[serde(default)]
    pub financials: BTreeMap<PropertyId, FinancialEntry>,
}

/// A stored overview with its cached distress score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewEntry {
    #[serde(flatten)]
    pub record: SignalRecord,
    #[serde(default)]
    pub distress_score: u32,
    /// JSON-encoded driver list, as computed at the last save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distress_drivers: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialEntry {
    #[serde(flatten)]
    pub record: FinancialRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreState {
    /// Create a new empty store state at the current version
    pub fn new() -> Self {
        Self {
            version: STORE_VERSION,
            overviews: BTreeMap::new(),
            financials: BTreeMap::new(),
        }
    }

    pub fn overview(&self, property_id: PropertyId) -> Option<&OverviewEntry> {
        self.overviews.get(&property_id)
    }

    pub fn financial(&self, property_id: PropertyId) -> Option<&FinancialEntry> {
        self.financials.get(&property_id)
    }
}
