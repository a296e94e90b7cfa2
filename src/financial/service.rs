use chrono::Utc;
use serde::Serialize;

use super::record::{FinancialPatch, FinancialRecord};
use crate::scoring::vocabulary::{self, contains};
use crate::store::{FinancialEntry, PropertyId, StoreState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinancialUpdateOutcome {
    pub success: bool,
}

/// Fetch a property's financial record, or `None` if it has none yet.
pub fn get_financial(state: &StoreState, property_id: PropertyId) -> Option<&FinancialRecord> {
    state.financial(property_id).map(|entry| &entry.record)
}

/// Upsert a property's financial record.
///
/// When the patch carries any delinquent tax year, the stored total is
/// recalculated from the patch's tax years.
pub fn update_financial(
    state: &mut StoreState,
    property_id: PropertyId,
    patch: FinancialPatch,
) -> FinancialUpdateOutcome {
    let now = Utc::now();
    let entry = state
        .financials
        .entry(property_id)
        .or_insert_with(|| FinancialEntry {
            record: FinancialRecord::default(),
            created_at: now,
            updated_at: now,
        });

    entry.record.apply(patch);
    entry.updated_at = now;

    FinancialUpdateOutcome { success: true }
}

/// Validate the enumerated and flag fields of a financial patch.
/// Returns all validation errors at once (not just the first).
pub fn validate_financial_patch(patch: &FinancialPatch) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(Some(ref mortgage)) = patch.mortgage {
        if !contains(vocabulary::MORTGAGE_OPTIONS, mortgage) {
            errors.push(format!(
                "mortgage: invalid value '{}' - expected one of: {}",
                mortgage,
                vocabulary::MORTGAGE_OPTIONS.join(", ")
            ));
        }
    }

    let flags = [
        ("needsRepairs", patch.needs_repairs),
        ("liens", patch.liens),
        ("preForeclosure", patch.pre_foreclosure),
        ("auctionScheduled", patch.auction_scheduled),
        ("lisPendens", patch.lis_pendens),
        ("nodFiled", patch.nod_filed),
        ("codeViolations", patch.code_violations),
        ("taxLien", patch.tax_lien),
    ];
    for (field, value) in flags {
        if let Some(Some(flag)) = value {
            if flag != 0 && flag != 1 {
                errors.push(format!("{}: must be 0 or 1, got {}", field, flag));
            }
        }
    }

    let amounts = [
        ("delinquentTax2025", patch.delinquent_tax_2025),
        ("delinquentTax2024", patch.delinquent_tax_2024),
        ("delinquentTax2023", patch.delinquent_tax_2023),
        ("delinquentTax2022", patch.delinquent_tax_2022),
        ("delinquentTax2021", patch.delinquent_tax_2021),
        ("delinquentTax2020", patch.delinquent_tax_2020),
        ("estimatedRepairCost", patch.estimated_repair_cost),
        ("totalLienAmount", patch.total_lien_amount),
    ];
    for (field, value) in amounts {
        if let Some(Some(amount)) = value {
            if amount < 0.0 {
                errors.push(format!("{}: must be non-negative", field));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
