use chrono::{DateTime, Utc};
use serde::Serialize;

use super::record::{OverviewPatch, SignalRecord};
use crate::scoring::{
    calculate_distress_score, decode_list, distress_band, DistressBand, DistressDriver,
};
use crate::store::{OverviewEntry, PropertyId, StoreState};

/// An overview record with a freshly computed distress score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView {
    pub property_id: PropertyId,
    #[serde(flatten)]
    pub record: SignalRecord,
    pub distress_score: u32,
    pub distress_band: DistressBand,
    /// JSON-encoded driver list
    pub distress_drivers: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub success: bool,
    pub distress_score: u32,
    pub distress_band: DistressBand,
}

/// Cached score of a property, cheap to read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistressSummary {
    pub score: u32,
    pub band: DistressBand,
    pub drivers: Vec<DistressDriver>,
}

impl Default for DistressSummary {
    fn default() -> Self {
        Self {
            score: 0,
            band: DistressBand::Low,
            drivers: Vec::new(),
        }
    }
}

fn encode_drivers(drivers: &[DistressDriver]) -> String {
    serde_json::to_string(drivers).unwrap_or_else(|_| "[]".to_string())
}

/// Fetch a property's overview, scoring it from the stored record.
///
/// Returns `None` if the property has no overview yet.
pub fn get_overview(state: &StoreState, property_id: PropertyId) -> Option<OverviewView> {
    let entry = state.overview(property_id)?;
    let result = calculate_distress_score(&entry.record);

    Some(OverviewView {
        property_id,
        record: entry.record.clone(),
        distress_score: result.score,
        distress_band: result.band,
        distress_drivers: encode_drivers(&result.drivers),
        created_at: entry.created_at,
        updated_at: entry.updated_at,
    })
}

/// Upsert a property's overview.
///
/// The patch is merged over the stored record first, then the score is
/// recomputed from the merged record and cached alongside it.
pub fn update_overview(
    state: &mut StoreState,
    property_id: PropertyId,
    patch: OverviewPatch,
) -> UpdateOutcome {
    let now = Utc::now();
    let existing = state.overviews.get(&property_id);

    let mut record = existing.map(|e| e.record.clone()).unwrap_or_default();
    let created_at = existing.map(|e| e.created_at).unwrap_or(now);

    record.apply(patch);
    let result = calculate_distress_score(&record);

    state.overviews.insert(
        property_id,
        OverviewEntry {
            record,
            distress_score: result.score,
            distress_drivers: Some(encode_drivers(&result.drivers)),
            created_at,
            updated_at: now,
        },
    );

    UpdateOutcome {
        success: true,
        distress_score: result.score,
        distress_band: result.band,
    }
}

/// Read the cached score and drivers without rescoring.
///
/// Defaults to a zero LOW score when the property has no overview. Cached
/// driver entries that no longer decode are skipped.
pub fn get_distress_score(state: &StoreState, property_id: PropertyId) -> DistressSummary {
    let Some(entry) = state.overview(property_id) else {
        return DistressSummary::default();
    };

    let drivers = decode_list(entry.distress_drivers.as_deref())
        .into_vec()
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();

    DistressSummary {
        score: entry.distress_score,
        band: distress_band(entry.distress_score),
        drivers,
    }
}
