use super::decode::{decode_list, EncodedList};
use super::vocabulary::{self, contains};
use super::weights::{
    lookup, WeightTable, CONDITION_TAG_WEIGHTS, LEGAL_WEIGHTS, PROBATE_FINDING_WEIGHTS,
    SELLER_WEIGHTS,
};
use crate::overview::{OverviewPatch, SignalRecord};

/// Validate the single-valued fields of an overview patch.
/// Returns all validation errors at once (not just the first).
///
/// A `null` is always allowed since it clears the field.
pub fn validate_patch(patch: &OverviewPatch) -> Result<(), Vec<String>> {
    let checks: [(&str, &Option<Option<String>>, &[&str]); 6] = [
        ("conditionRating", &patch.condition_rating, vocabulary::CONDITION_RATINGS),
        ("occupancy", &patch.occupancy, vocabulary::OCCUPANCY_OPTIONS),
        ("evictionRisk", &patch.eviction_risk, vocabulary::EVICTION_RISKS),
        ("probateStage", &patch.probate_stage, vocabulary::PROBATE_STAGES),
        ("propertyType", &patch.property_type, vocabulary::PROPERTY_TYPES),
        ("propertyUse", &patch.property_use, vocabulary::PROPERTY_USES),
    ];

    let mut errors = Vec::new();

    for (field, value, allowed) in checks {
        if let Some(Some(value)) = value {
            if !contains(allowed, value) {
                errors.push(format!(
                    "{}: invalid value '{}' - expected one of: {}",
                    field,
                    value,
                    allowed.join(", ")
                ));
            }
        }
    }

    if let Some(Some(flag)) = patch.probate {
        if flag != 0 && flag != 1 {
            errors.push(format!("probate: must be 0 or 1, got {}", flag));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// List entries that are not in their field's vocabulary.
///
/// These are warnings, not errors: the score engine simply gives them no
/// points. Any value the engine weighs for a field counts as known. Non-string
/// entries are reported too.
pub fn unknown_signals(record: &SignalRecord) -> Vec<String> {
    let lists: [(&str, &Option<String>, &[&str], WeightTable); 9] = [
        ("propertyTags", &record.property_tags, vocabulary::PROPERTY_TAGS, &[]),
        (
            "conditionTags",
            &record.condition_tags,
            vocabulary::CONDITION_TAGS,
            CONDITION_TAG_WEIGHTS,
        ),
        (
            "sellerFinancialPressure",
            &record.seller_financial_pressure,
            vocabulary::SELLER_FINANCIAL_PRESSURE,
            SELLER_WEIGHTS,
        ),
        (
            "sellerLifeEvents",
            &record.seller_life_events,
            vocabulary::SELLER_LIFE_EVENTS,
            SELLER_WEIGHTS,
        ),
        (
            "sellerLegalBehavioral",
            &record.seller_legal_behavioral,
            vocabulary::SELLER_LEGAL_BEHAVIORAL,
            SELLER_WEIGHTS,
        ),
        (
            "legalOwnershipTitle",
            &record.legal_ownership_title,
            vocabulary::LEGAL_OWNERSHIP_TITLE,
            LEGAL_WEIGHTS,
        ),
        (
            "legalCourtLawsuit",
            &record.legal_court_lawsuit,
            vocabulary::LEGAL_COURT_LAWSUIT,
            LEGAL_WEIGHTS,
        ),
        (
            "legalPropertyStatus",
            &record.legal_property_status,
            vocabulary::LEGAL_PROPERTY_STATUS,
            LEGAL_WEIGHTS,
        ),
        (
            "probateFindings",
            &record.probate_findings,
            vocabulary::PROBATE_FINDINGS,
            PROBATE_FINDING_WEIGHTS,
        ),
    ];

    let mut warnings = Vec::new();

    for (field, raw, allowed, weights) in lists {
        let Some(raw) = raw else { continue };
        let decoded = decode_list(Some(raw.as_str()));
        if decoded == EncodedList::Empty {
            if !raw.trim().is_empty() {
                warnings.push(format!("{}: not a JSON list, ignored", field));
            }
            continue;
        }
        for entry in decoded.into_vec() {
            match entry.as_str() {
                Some(signal) if contains(allowed, signal) || lookup(weights, signal).is_some() => {}
                Some(signal) => {
                    warnings.push(format!("{}: unknown value '{}'", field, signal))
                }
                None => warnings.push(format!("{}: non-text entry {}", field, entry)),
            }
        }
    }

    warnings
}
