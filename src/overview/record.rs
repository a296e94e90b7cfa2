use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::patch::{deserialize_some, deserialize_some_flag, merge_fields};

/// Qualitative signals recorded for one property.
///
/// List-valued fields hold JSON array strings exactly as stored; they are
/// decoded leniently at scoring time, so a malformed value never fails a read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignalRecord {
    // Property
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_use: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_tags: Option<String>,

    // Condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_tags: Option<String>,

    // Occupancy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eviction_risk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eviction_notes: Option<String>,

    // Seller situation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_financial_pressure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_life_events: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_legal_behavioral: Option<String>,

    // Legal & title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_ownership_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_court_lawsuit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_property_status: Option<String>,

    // Probate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probate_stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probate_findings: Option<String>,

    // Notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probate_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
}

/// Partial update of a [`SignalRecord`].
///
/// Absent keys keep the stored value, `null` clears it, anything else replaces it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct OverviewPatch {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub property_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub property_use: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub property_tags: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub condition_rating: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub condition_tags: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub occupancy: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub eviction_risk: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub eviction_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub seller_financial_pressure: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub seller_life_events: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub seller_legal_behavioral: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub legal_ownership_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub legal_court_lawsuit: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub legal_property_status: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some_flag")]
    pub probate: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub probate_stage: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub probate_findings: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub general_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub probate_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub internal_notes: Option<Option<String>>,
}

const STRING_FIELDS: &[&str] = &[
    "propertyType",
    "propertyUse",
    "conditionRating",
    "occupancy",
    "evictionRisk",
    "evictionNotes",
    "probateStage",
    "generalNotes",
    "probateNotes",
    "internalNotes",
];

const LIST_FIELDS: &[&str] = &[
    "propertyTags",
    "conditionTags",
    "sellerFinancialPressure",
    "sellerLifeEvents",
    "sellerLegalBehavioral",
    "legalOwnershipTitle",
    "legalCourtLawsuit",
    "legalPropertyStatus",
    "probateFindings",
];

impl SignalRecord {
    /// Whether the probate flag is set. Only the stored value 1 counts.
    pub fn is_probate(&self) -> bool {
        self.probate == Some(1)
    }

    /// Apply a patch on top of this record (shallow, field-level override).
    pub fn apply(&mut self, patch: OverviewPatch) {
        merge_fields!(
            self,
            patch,
            [
                property_type,
                property_use,
                property_tags,
                condition_rating,
                condition_tags,
                occupancy,
                eviction_risk,
                eviction_notes,
                seller_financial_pressure,
                seller_life_events,
                seller_legal_behavioral,
                legal_ownership_title,
                legal_court_lawsuit,
                legal_property_status,
                probate,
                probate_stage,
                probate_findings,
                general_notes,
                probate_notes,
                internal_notes,
            ]
        );
    }

    /// Build a record from arbitrary JSON without ever failing.
    ///
    /// Fields of the wrong type are treated as absent. List fields may be given
    /// either as encoded strings or as real JSON arrays (re-encoded as stored).
    /// The probate flag accepts `1`/`0`, `1.0`/`0.0` or `true`/`false`.
    pub fn from_json_value(value: &Value) -> Self {
        let mut normalized = serde_json::Map::new();

        for &key in STRING_FIELDS {
            if let Some(Value::String(s)) = value.get(key) {
                normalized.insert(key.to_string(), Value::String(s.clone()));
            }
        }

        for &key in LIST_FIELDS {
            match value.get(key) {
                Some(Value::String(s)) => {
                    normalized.insert(key.to_string(), Value::String(s.clone()));
                }
                Some(array @ Value::Array(_)) => {
                    normalized.insert(key.to_string(), Value::String(array.to_string()));
                }
                _ => {}
            }
        }

        let probate = match value.get("probate") {
            Some(Value::Bool(b)) => Some(i64::from(*b)),
            Some(Value::Number(n)) => n.as_i64().or_else(|| match n.as_f64() {
                Some(f) if f == 1.0 => Some(1),
                Some(f) if f == 0.0 => Some(0),
                _ => None,
            }),
            _ => None,
        };
        if let Some(flag) = probate {
            normalized.insert("probate".to_string(), Value::from(flag));
        }

        serde_json::from_value(Value::Object(normalized)).unwrap_or_default()
    }
}
