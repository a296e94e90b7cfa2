use serde::{Deserialize, Serialize};

use crate::patch::{deserialize_some, deserialize_some_flag, merge_fields};

/// Monetary distress fields for one property.
///
/// Kept parallel to the overview record; not part of the distress score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialRecord {
    // Delinquent taxes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delinquent_tax_2025: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delinquent_tax_2024: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delinquent_tax_2023: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delinquent_tax_2022: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delinquent_tax_2021: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delinquent_tax_2020: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delinquent_tax_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_notes: Option<String>,

    // Repairs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_repairs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repair_categories: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_repair_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repair_notes: Option<String>,

    // Debt & liens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mortgage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mortgage_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liens: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_lien_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lien_types: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lien_notes: Option<String>,

    // Foreclosure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_foreclosure: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auction_scheduled: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lis_pendens: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nod_filed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreclosure_notes: Option<String>,

    // Code / tax lien
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_violations: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lien: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_tax_notes: Option<String>,

    // Deed history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deed_history: Option<String>,
}

/// Partial update of a [`FinancialRecord`].
///
/// `delinquentTaxTotal` is not accepted: it is derived from the tax years.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct FinancialPatch {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub delinquent_tax_2025: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub delinquent_tax_2024: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub delinquent_tax_2023: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub delinquent_tax_2022: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub delinquent_tax_2021: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub delinquent_tax_2020: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub tax_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some_flag")]
    pub needs_repairs: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub repair_categories: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub estimated_repair_cost: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub repair_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub mortgage: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub mortgage_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some_flag")]
    pub liens: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub total_lien_amount: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub lien_types: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub lien_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some_flag")]
    pub pre_foreclosure: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some_flag")]
    pub auction_scheduled: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some_flag")]
    pub lis_pendens: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some_flag")]
    pub nod_filed: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub foreclosure_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some_flag")]
    pub code_violations: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some_flag")]
    pub tax_lien: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub code_tax_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub deed_history: Option<Option<String>>,
}

impl FinancialPatch {
    /// Sum of the tax years carried by this patch, or `None` when the patch
    /// has no non-null tax year at all. Missing or null years count as zero.
    pub fn delinquent_tax_total(&self) -> Option<f64> {
        let years = [
            self.delinquent_tax_2025,
            self.delinquent_tax_2024,
            self.delinquent_tax_2023,
            self.delinquent_tax_2022,
            self.delinquent_tax_2021,
            self.delinquent_tax_2020,
        ];

        let has_tax_data = years.iter().any(|year| matches!(year, Some(Some(_))));
        if !has_tax_data {
            return None;
        }

        Some(years.iter().map(|year| year.flatten().unwrap_or(0.0)).sum())
    }
}

impl FinancialRecord {
    /// Apply a patch on top of this record (shallow, field-level override).
    ///
    /// When the patch carries tax data, the stored total is replaced by the
    /// patch's own total.
    pub fn apply(&mut self, patch: FinancialPatch) {
        if let Some(total) = patch.delinquent_tax_total() {
            self.delinquent_tax_total = Some(total);
        }

        merge_fields!(
            self,
            patch,
            [
                delinquent_tax_2025,
                delinquent_tax_2024,
                delinquent_tax_2023,
                delinquent_tax_2022,
                delinquent_tax_2021,
                delinquent_tax_2020,
                tax_notes,
                needs_repairs,
                repair_categories,
                estimated_repair_cost,
                repair_notes,
                mortgage,
                mortgage_notes,
                liens,
                total_lien_amount,
                lien_types,
                lien_notes,
                pre_foreclosure,
                auction_scheduled,
                lis_pendens,
                nod_filed,
                foreclosure_notes,
                code_violations,
                tax_lien,
                code_tax_notes,
                deed_history,
            ]
        );
    }
}
