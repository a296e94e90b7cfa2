use serde::{Deserialize, Serialize};

use super::band::{distress_band, DistressBand};
use super::decode::{decode_list, EncodedList};
use super::weights::{
    lookup, Category, WeightTable, CONDITION_RATING_WEIGHTS, CONDITION_TAG_WEIGHTS,
    LEGAL_WEIGHTS, OCCUPANCY_WEIGHTS, PROBATE_BASE_WEIGHT, PROBATE_FINDING_WEIGHTS,
    SELLER_WEIGHTS,
};
use crate::overview::SignalRecord;

/// Number of drivers reported with a score.
pub const MAX_DRIVERS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistressDriver {
    pub signal: String,  // e.g. "Bankruptcy", "Rating: Poor", "Probate = Yes"
    pub points: u32,     // Uncapped weight of this signal
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub raw: u32,    // Sum of weights before clamping
    pub capped: u32, // Contribution to the total
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub categories: Vec<CategoryScore>,
}

impl ScoreBreakdown {
    pub fn get(&self, category: Category) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.category == category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: u32,
    pub band: DistressBand,
    pub drivers: Vec<DistressDriver>,
    pub breakdown: ScoreBreakdown,
}

/// Accumulates one category: raw sum plus the drivers it produced.
struct CategoryTally<'a> {
    category: Category,
    raw: u32,
    drivers: &'a mut Vec<DistressDriver>,
}

impl<'a> CategoryTally<'a> {
    fn new(category: Category, drivers: &'a mut Vec<DistressDriver>) -> Self {
        Self {
            category,
            raw: 0,
            drivers,
        }
    }

    fn add(&mut self, signal: String, points: u32) {
        if points == 0 {
            return;
        }
        self.raw += points;
        self.drivers.push(DistressDriver {
            signal,
            points,
            category: self.category,
        });
    }

    /// Weigh every string in the list against the table, in list order.
    fn add_list(&mut self, list: &EncodedList, table: WeightTable) {
        for signal in list.strings() {
            if let Some(points) = lookup(table, signal) {
                self.add(signal.to_string(), points);
            }
        }
    }

    fn finish(self) -> CategoryScore {
        CategoryScore {
            category: self.category,
            raw: self.raw,
            capped: self.raw.min(self.category.cap()),
        }
    }
}

fn decode(field: &Option<String>) -> EncodedList {
    decode_list(field.as_deref())
}

pub fn calculate_distress_score(record: &SignalRecord) -> ScoreResult {
    let mut drivers = Vec::new();
    let mut categories = Vec::with_capacity(Category::ALL.len());

    // Seller situation: financial pressure, then life events, then legal/behavioral
    let mut seller = CategoryTally::new(Category::SellerSituation, &mut drivers);
    seller.add_list(&decode(&record.seller_financial_pressure), SELLER_WEIGHTS);
    seller.add_list(&decode(&record.seller_life_events), SELLER_WEIGHTS);
    seller.add_list(&decode(&record.seller_legal_behavioral), SELLER_WEIGHTS);
    categories.push(seller.finish());

    // Condition: rating first, then tags
    let mut condition = CategoryTally::new(Category::Condition, &mut drivers);
    if let Some(ref rating) = record.condition_rating {
        if let Some(points) = lookup(CONDITION_RATING_WEIGHTS, rating) {
            condition.add(format!("Rating: {}", rating), points);
        }
    }
    condition.add_list(&decode(&record.condition_tags), CONDITION_TAG_WEIGHTS);
    categories.push(condition.finish());

    // Occupancy is single-valued
    let mut occupancy = CategoryTally::new(Category::Occupancy, &mut drivers);
    if let Some(ref status) = record.occupancy {
        if let Some(points) = lookup(OCCUPANCY_WEIGHTS, status) {
            occupancy.add(status.clone(), points);
        }
    }
    categories.push(occupancy.finish());

    // Legal & title: ownership/title, then court/lawsuit, then property status
    let mut legal = CategoryTally::new(Category::LegalTitle, &mut drivers);
    legal.add_list(&decode(&record.legal_ownership_title), LEGAL_WEIGHTS);
    legal.add_list(&decode(&record.legal_court_lawsuit), LEGAL_WEIGHTS);
    legal.add_list(&decode(&record.legal_property_status), LEGAL_WEIGHTS);
    categories.push(legal.finish());

    // Probate: base points for an open case, then findings
    let mut probate = CategoryTally::new(Category::Probate, &mut drivers);
    if record.is_probate() {
        probate.add("Probate = Yes".to_string(), PROBATE_BASE_WEIGHT);
    }
    probate.add_list(&decode(&record.probate_findings), PROBATE_FINDING_WEIGHTS);
    categories.push(probate.finish());

    let score = categories.iter().map(|c| c.capped).sum();

    // Stable sort keeps evaluation order for ties
    drivers.sort_by(|a, b| b.points.cmp(&a.points));
    drivers.truncate(MAX_DRIVERS);

    ScoreResult {
        score,
        band: distress_band(score),
        drivers,
        breakdown: ScoreBreakdown { categories },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::encode_list;

    fn list(items: &[&str]) -> Option<String> {
        Some(encode_list(items))
    }

    fn capped(result: &ScoreResult, category: Category) -> u32 {
        result.breakdown.get(category).map(|c| c.capped).unwrap_or(0)
    }

    fn maximal_record() -> SignalRecord {
        SignalRecord {
            seller_financial_pressure: list(&[
                "Need Cash Quickly",
                "Bankruptcy",
                "Medical Bills",
                "Job Loss",
            ]),
            seller_life_events: list(&["Divorce", "Death in the Family"]),
            seller_legal_behavioral: list(&["Going to Jail/Incarceration", "Hoarder Situation"]),
            condition_rating: Some("Poor".to_string()),
            condition_tags: list(&["Condemned", "Fire Damage", "Major Repairs Needed"]),
            occupancy: Some("Squatter Occupied".to_string()),
            legal_ownership_title: list(&[
                "Break in Chain of Title",
                "Title Issues",
                "Multiple Owners",
            ]),
            legal_court_lawsuit: list(&["Pending Lawsuit"]),
            legal_property_status: list(&["Property Occupied Without Consent", "Code Violations"]),
            probate: Some(1),
            probate_findings: list(&["Will Contested", "Missing or Unknown Heirs", "Minor Involved"]),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_record_scores_zero() {
        let result = calculate_distress_score(&SignalRecord::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.band, DistressBand::Low);
        assert!(result.drivers.is_empty());
        assert_eq!(result.breakdown.categories.len(), 5);
    }

    #[test]
    fn test_seller_points() {
        let record = SignalRecord {
            seller_financial_pressure: list(&["Need Cash Quickly", "Bankruptcy"]),
            seller_life_events: list(&["Divorce"]),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        assert_eq!(result.score, 21); // 8 + 8 + 5
        assert!(result.drivers.iter().any(|d| d.signal == "Need Cash Quickly"));
        assert!(result.drivers.iter().any(|d| d.signal == "Bankruptcy"));
    }

    #[test]
    fn test_seller_capped_at_25() {
        let record = SignalRecord {
            seller_financial_pressure: list(&[
                "Need Cash Quickly",
                "Bankruptcy",
                "Medical Bills",
                "Job Loss",
            ]),
            seller_life_events: list(&["Divorce", "Death in the Family"]),
            seller_legal_behavioral: list(&["Going to Jail/Incarceration"]),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        let seller = result.breakdown.get(Category::SellerSituation).unwrap();
        assert_eq!(seller.raw, 48);
        assert_eq!(seller.capped, 25);
        assert_eq!(result.score, 25);
    }

    #[test]
    fn test_condition_capped_at_25() {
        let record = SignalRecord {
            condition_rating: Some("Poor".to_string()),
            condition_tags: list(&["Major Repairs Needed", "Mold Damage"]),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        // 15 + 10 + 7 = 32
        assert_eq!(result.score, 25);
        assert!(result.drivers.iter().any(|d| d.signal == "Rating: Poor"));
    }

    #[test]
    fn test_excellent_rating_has_no_driver() {
        let record = SignalRecord {
            condition_rating: Some("Excellent".to_string()),
            condition_tags: list(&[]),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        assert_eq!(result.score, 0);
        assert!(result.drivers.is_empty());
    }

    #[test]
    fn test_squatter_occupancy() {
        let record = SignalRecord {
            occupancy: Some("Squatter Occupied".to_string()),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        assert_eq!(result.score, 15);
        assert_eq!(result.drivers[0].signal, "Squatter Occupied");
        assert_eq!(result.drivers[0].category, Category::Occupancy);
    }

    #[test]
    fn test_owner_occupied_scores_zero() {
        let record = SignalRecord {
            occupancy: Some("Owner Occupied".to_string()),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        assert_eq!(result.score, 0);
        assert!(result.drivers.is_empty());
    }

    #[test]
    fn test_legal_capped_at_20() {
        let record = SignalRecord {
            legal_ownership_title: list(&["Break in Chain of Title", "Multiple Owners"]),
            legal_court_lawsuit: list(&["Pending Lawsuit"]),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        // 15 + 6 + 10 = 31
        assert_eq!(result.score, 20);
    }

    #[test]
    fn test_probate_capped_at_15() {
        let record = SignalRecord {
            probate: Some(1),
            probate_findings: list(&["Will Contested", "Minor Involved"]),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        assert_eq!(result.score, 15);
        assert!(result.drivers.iter().any(|d| d.signal == "Probate = Yes"));
    }

    #[test]
    fn test_probate_findings_without_flag() {
        let record = SignalRecord {
            probate: Some(0),
            probate_findings: list(&["Will Contested"]),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        assert_eq!(result.score, 10);
        assert!(!result.drivers.iter().any(|d| d.signal == "Probate = Yes"));
    }

    #[test]
    fn test_combined_scenario() {
        let record = SignalRecord {
            seller_financial_pressure: list(&["Need Cash Quickly"]),
            seller_life_events: list(&["Divorce"]),
            condition_rating: Some("Poor".to_string()),
            condition_tags: list(&["Boarded Up"]),
            occupancy: Some("Vacant".to_string()),
            legal_ownership_title: list(&["Title Issues"]),
            probate: Some(1),
            probate_findings: list(&[]),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);

        assert_eq!(capped(&result, Category::SellerSituation), 13);
        assert_eq!(capped(&result, Category::Condition), 21);
        assert_eq!(capped(&result, Category::Occupancy), 10);
        assert_eq!(capped(&result, Category::LegalTitle), 12);
        assert_eq!(capped(&result, Category::Probate), 10);
        assert_eq!(result.score, 66);
        assert_eq!(result.band, DistressBand::High);
    }

    #[test]
    fn test_maximal_record_scores_100() {
        let result = calculate_distress_score(&maximal_record());
        assert_eq!(result.score, 100);
        for category in Category::ALL {
            assert_eq!(capped(&result, category), category.cap());
        }
    }

    #[test]
    fn test_score_equals_sum_of_capped_categories() {
        let result = calculate_distress_score(&maximal_record());
        let sum: u32 = result.breakdown.categories.iter().map(|c| c.capped).sum();
        assert_eq!(result.score, sum);
        for c in &result.breakdown.categories {
            assert!(c.capped <= c.category.cap());
            assert!(c.capped <= c.raw);
        }
    }

    #[test]
    fn test_drivers_top_five_sorted() {
        let record = SignalRecord {
            seller_financial_pressure: list(&["Need Cash Quickly", "Bankruptcy"]),
            condition_rating: Some("Poor".to_string()),
            condition_tags: list(&["Fire Damage", "Condemned"]),
            occupancy: Some("Squatter Occupied".to_string()),
            legal_ownership_title: list(&["Break in Chain of Title"]),
            probate: Some(1),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        assert_eq!(result.drivers.len(), MAX_DRIVERS);
        for pair in result.drivers.windows(2) {
            assert!(pair[0].points >= pair[1].points);
        }
    }

    #[test]
    fn test_driver_ties_keep_evaluation_order() {
        let record = SignalRecord {
            seller_financial_pressure: list(&["Bankruptcy", "Need Cash Quickly"]),
            condition_rating: Some("Poor".to_string()),
            condition_tags: list(&["Condemned", "Fire Damage"]),
            occupancy: Some("Squatter Occupied".to_string()),
            legal_ownership_title: list(&["Break in Chain of Title"]),
            probate: Some(1),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        let signals: Vec<&str> = result.drivers.iter().map(|d| d.signal.as_str()).collect();
        // 15-point ties: condition rating, condition tag, occupancy, legal
        // 10-point ties: Fire Damage before Probate = Yes
        assert_eq!(
            signals,
            vec![
                "Rating: Poor",
                "Condemned",
                "Squatter Occupied",
                "Break in Chain of Title",
                "Fire Damage",
            ]
        );
    }

    #[test]
    fn test_drivers_are_uncapped() {
        let record = SignalRecord {
            condition_rating: Some("Poor".to_string()),
            condition_tags: list(&["Condemned", "Unlivable"]),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        assert_eq!(result.score, 25);
        let driver_points: u32 = result.drivers.iter().map(|d| d.points).sum();
        assert_eq!(driver_points, 45);
    }

    #[test]
    fn test_duplicates_are_double_counted() {
        let record = SignalRecord {
            seller_life_events: list(&["Divorce", "Divorce"]),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        assert_eq!(result.score, 10);
        assert_eq!(result.drivers.len(), 2);
    }

    #[test]
    fn test_null_fields_score_zero() {
        let record = SignalRecord {
            seller_financial_pressure: None,
            condition_rating: None,
            occupancy: None,
            probate: None,
            probate_findings: None,
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        assert_eq!(result.score, 0);
        assert!(result.drivers.is_empty());
    }

    #[test]
    fn test_malformed_lists_score_zero() {
        let record = SignalRecord {
            seller_financial_pressure: Some("not valid json".to_string()),
            condition_tags: Some("{bad}".to_string()),
            legal_ownership_title: Some(r#"{"Title Issues": true}"#.to_string()),
            probate_findings: Some(r#"[10, null, ["Will Contested"]]"#.to_string()),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        assert_eq!(result.score, 0);
        assert!(result.drivers.is_empty());
    }

    #[test]
    fn test_unknown_values_contribute_nothing() {
        let record = SignalRecord {
            condition_rating: Some("Terrible".to_string()),
            occupancy: Some("vacant".to_string()),
            seller_financial_pressure: list(&["Behind Taxes"]),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_seller_signal_in_any_seller_list() {
        // Weight tables are per category, not per list
        let record = SignalRecord {
            seller_life_events: list(&["Bankruptcy"]),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        assert_eq!(result.score, 8);
    }

    #[test]
    fn test_driver_categories_labeled() {
        let record = SignalRecord {
            seller_financial_pressure: list(&["Bankruptcy"]),
            condition_rating: Some("Poor".to_string()),
            occupancy: Some("Vacant".to_string()),
            legal_ownership_title: list(&["Title Issues"]),
            probate: Some(1),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        for category in Category::ALL {
            assert!(result.drivers.iter().any(|d| d.category == category));
        }
    }

    #[test]
    fn test_driver_serializes_category_label() {
        let driver = DistressDriver {
            signal: "Title Issues".to_string(),
            points: 12,
            category: Category::LegalTitle,
        };
        let json = serde_json::to_string(&driver).unwrap();
        assert_eq!(
            json,
            r#"{"signal":"Title Issues","points":12,"category":"Legal & Title"}"#
        );
    }

    fn names(table: WeightTable) -> Vec<&'static str> {
        table.iter().map(|(name, _)| *name).collect()
    }

    fn doubled(table: WeightTable) -> Option<String> {
        let mut all = names(table);
        all.extend(names(table));
        Some(encode_list(&all))
    }

    #[test]
    fn test_score_bounds_hold_across_records() {
        let mut records = vec![SignalRecord::default(), maximal_record()];

        // Every weighted value, twice over, in every list it can appear in
        records.push(SignalRecord {
            seller_financial_pressure: doubled(SELLER_WEIGHTS),
            seller_life_events: doubled(SELLER_WEIGHTS),
            seller_legal_behavioral: doubled(SELLER_WEIGHTS),
            condition_rating: Some("Poor".to_string()),
            condition_tags: doubled(CONDITION_TAG_WEIGHTS),
            occupancy: Some("Squatter Occupied".to_string()),
            legal_ownership_title: doubled(LEGAL_WEIGHTS),
            legal_court_lawsuit: doubled(LEGAL_WEIGHTS),
            legal_property_status: doubled(LEGAL_WEIGHTS),
            probate: Some(1),
            probate_findings: doubled(PROBATE_FINDING_WEIGHTS),
            ..Default::default()
        });

        // One record per rating and occupancy value, each with a growing
        // prefix of every list table
        for (i, (rating, _)) in CONDITION_RATING_WEIGHTS.iter().enumerate() {
            for (j, (status, _)) in OCCUPANCY_WEIGHTS.iter().enumerate() {
                let take = i + j;
                let prefix = |table: WeightTable| {
                    let picked: Vec<&str> = names(table).into_iter().take(take).collect();
                    Some(encode_list(&picked))
                };
                records.push(SignalRecord {
                    condition_rating: Some(rating.to_string()),
                    occupancy: Some(status.to_string()),
                    seller_financial_pressure: prefix(SELLER_WEIGHTS),
                    condition_tags: prefix(CONDITION_TAG_WEIGHTS),
                    legal_court_lawsuit: prefix(LEGAL_WEIGHTS),
                    probate: Some((take % 2) as i64),
                    probate_findings: prefix(PROBATE_FINDING_WEIGHTS),
                    ..Default::default()
                });
            }
        }

        // Malformed and mixed-type lists
        records.push(SignalRecord {
            seller_life_events: Some("{not json".to_string()),
            condition_tags: Some(r#"[1, null, "Condemned", {"a": 1}]"#.to_string()),
            legal_property_status: Some(r#""Code Violations""#.to_string()),
            probate: Some(7),
            ..Default::default()
        });

        for record in &records {
            let result = calculate_distress_score(record);
            assert!(result.score <= 100, "score {} for {:?}", result.score, record);
            assert!(result.drivers.len() <= MAX_DRIVERS);
            assert_eq!(result.band, distress_band(result.score));
            for pair in result.drivers.windows(2) {
                assert!(pair[0].points >= pair[1].points);
            }
            let sum: u32 = result.breakdown.categories.iter().map(|c| c.capped).sum();
            assert_eq!(result.score, sum);
        }

        let saturated = calculate_distress_score(&records[2]);
        assert_eq!(saturated.score, 100);
    }
}
