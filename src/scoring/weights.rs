use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five independently capped signal groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Seller Situation")]
    SellerSituation,
    #[serde(rename = "Condition")]
    Condition,
    #[serde(rename = "Occupancy")]
    Occupancy,
    #[serde(rename = "Legal & Title")]
    LegalTitle,
    #[serde(rename = "Probate")]
    Probate,
}

impl Category {
    /// All categories in evaluation order.
    pub const ALL: [Category; 5] = [
        Category::SellerSituation,
        Category::Condition,
        Category::Occupancy,
        Category::LegalTitle,
        Category::Probate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::SellerSituation => "Seller Situation",
            Category::Condition => "Condition",
            Category::Occupancy => "Occupancy",
            Category::LegalTitle => "Legal & Title",
            Category::Probate => "Probate",
        }
    }

    /// Maximum points the category may add to the total.
    pub fn cap(&self) -> u32 {
        match self {
            Category::SellerSituation => 25,
            Category::Condition => 25,
            Category::Occupancy => 15,
            Category::LegalTitle => 20,
            Category::Probate => 15,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub type WeightTable = &'static [(&'static str, u32)];

pub const SELLER_WEIGHTS: WeightTable = &[
    ("Need Cash Quickly", 8),
    ("Job Loss", 6),
    ("Medical Bills", 6),
    ("Divorce", 5),
    ("Death in the Family", 5),
    ("Bankruptcy", 8),
    ("Hoarder Situation", 4),
    ("Relocating", 4),
    ("Downsizing", 4),
    ("Moving to Another City", 4),
    ("Moving to Another County", 4),
    ("Moving to Another State", 4),
    ("Deportation", 10),
    ("Going to Jail/Incarceration", 10),
];

pub const CONDITION_RATING_WEIGHTS: WeightTable = &[
    ("Excellent", 0),
    ("Good", 2),
    ("Fair", 6),
    ("Average", 10),
    ("Poor", 15),
];

pub const CONDITION_TAG_WEIGHTS: WeightTable = &[
    ("Major Repairs Needed", 10),
    ("Needs New Roof", 8),
    ("Mold Damage", 7),
    ("Water Damage", 7),
    ("Fire Damage", 10),
    ("Boarded Up", 6),
    ("Condemned", 15),
    ("Unlivable", 15),
    ("Deferred Maintenance", 5),
];

pub const OCCUPANCY_WEIGHTS: WeightTable = &[
    ("Vacant", 10),
    ("Squatter Occupied", 15),
    ("Tenant Occupied", 6),
    ("Unknown", 4),
    ("Owner Occupied", 0),
];

pub const LEGAL_WEIGHTS: WeightTable = &[
    ("Break in Chain of Title", 15),
    ("Title Issues", 12),
    ("Unclear Ownership Interests", 10),
    ("Pending Lawsuit", 10),
    ("Judgments or Lawsuits", 8),
    ("Trust Involved", 4),
    ("Multiple Owners", 6),
    ("Code Violations", 6),
    ("Property Occupied Without Consent", 10),
];

pub const PROBATE_FINDING_WEIGHTS: WeightTable = &[
    ("Missing or Unknown Heirs", 8),
    ("Family Dispute", 6),
    ("Executor Lacks Authority to Sell", 8),
    ("Court Approval Required", 6),
    ("Probate Not Completed", 6),
    ("Will Contested", 10),
    ("Minor Involved", 8),
];

/// Points for an open probate case, independent of findings.
pub const PROBATE_BASE_WEIGHT: u32 = 10;

/// Look up a signal's weight. Matching is exact and case-sensitive.
pub fn lookup(table: WeightTable, signal: &str) -> Option<u32> {
    table
        .iter()
        .find(|(name, _)| *name == signal)
        .map(|(_, weight)| *weight)
}
