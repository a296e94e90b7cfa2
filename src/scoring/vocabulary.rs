//! Allowed values for overview fields, as offered by the lead editor.
//!
//! These are wider than the weight tables: many values are informational and
//! carry no points (e.g. "Behind Taxes", "LLC Owned").

pub const PROPERTY_TYPES: &[&str] = &[
    "Single Family Home",
    "Condo",
    "Duplex",
    "Triplex",
    "Fourplex",
    "Townhouse",
    "Mobile Home",
    "Vacant Lot",
    "Other",
];

pub const PROPERTY_USES: &[&str] = &["Residential", "Commercial", "Mixed Use"];

pub const PROPERTY_TAGS: &[&str] = &[
    "Agricultural Land",
    "Cottage",
    "Ranch Land",
    "Bungalow",
    "Farm Land",
    "Residential Lot",
    "Infill Lot",
    "Timber Land",
    "Commercial Lot",
    "Manufactured Home",
    "Villa",
    "Co-op",
    "Modular Home",
    "Waterfront Lot",
];

pub const CONDITION_RATINGS: &[&str] = &["Excellent", "Good", "Fair", "Average", "Poor"];

pub const CONDITION_TAGS: &[&str] = &[
    // Damage/repairs
    "Major Repairs Needed",
    "Needs Repairs",
    "Needs New Roof",
    "Old/Damaged Carpet",
    "Deferred Maintenance",
    "Under Construction",
    "Partially Renovated",
    // Water/environmental
    "Water Damage",
    "Flood Damage",
    "Mold Damage",
    // Fire/storm
    "Fire Damage",
    "Hurricane Damage",
    // Exterior/visual
    "Boarded Up",
    "Warning Stickers on Door",
    "Locked Gates",
    "Abandoned",
    // Severe/unsafe
    "Condemned",
    "Unlivable",
];

pub const OCCUPANCY_OPTIONS: &[&str] = &[
    "Vacant",
    "Owner Occupied",
    "Tenant Occupied",
    "Squatter Occupied",
    "Unknown",
];

pub const EVICTION_RISKS: &[&str] = &["Low", "Medium", "High"];

pub const SELLER_FINANCIAL_PRESSURE: &[&str] = &[
    "Behind Taxes",
    "Need Cash Quickly",
    "Medical Bills",
    "Job Loss",
    "Bankruptcy",
];

pub const SELLER_LIFE_EVENTS: &[&str] = &[
    "Divorce",
    "Death in the Family",
    "Relocating",
    "Downsizing",
    "Moving to Another City",
    "Moving to Another County",
    "Moving to Another State",
];

pub const SELLER_LEGAL_BEHAVIORAL: &[&str] = &[
    "Deportation",
    "Going to Jail/Incarceration",
    "Hoarder Situation",
];

pub const LEGAL_OWNERSHIP_TITLE: &[&str] = &[
    "Title Issues",
    "Break in Chain of Title",
    "Unclear Ownership Interests",
    "Multiple Owners",
    "Missing or Unknown Owners",
    "Trust Involved",
    "Trust or Estate Issues",
    "LLC Owned",
    "Out-of-State Owner",
    "Sellers Name with HE",
    "Sellers Name with REV TRUST",
    "Sellers Name with JTRS",
    "Sellers Name with ETAL",
    "Sellers Name with Est of",
];

pub const LEGAL_COURT_LAWSUIT: &[&str] = &[
    "Pending Lawsuit",
    "Judgments or Lawsuits",
    "Legal Issues",
    "Court Approval Required",
    "Issues with Attorney",
];

pub const LEGAL_PROPERTY_STATUS: &[&str] = &[
    "Property Occupied Without Consent",
    "Code Violations",
    "Condemned",
];

pub const PROBATE_STAGES: &[&str] = &[
    "Not Started",
    "Open Case",
    "Executor Assigned",
    "Court Approval Required",
    "Ready to Sell",
    "Probate Not Completed",
    "Finished",
];

pub const PROBATE_FINDINGS: &[&str] = &[
    "Missing or Unknown Heirs",
    "Heir Disagreements",
    "Family Dispute",
    "Everyone on Board",
    "Not Everyone on Board",
    "Minor Involved",
    "Executor Lacks Authority to Sell",
    "No Court-Appointed Executor",
    "Court Approval Required",
    "Probate Not Completed",
    "Issues with Attorney",
    "Will Contested",
    "Estate Debts Exceed Value",
    "Trust and Probate Overlap",
];

pub const MORTGAGE_OPTIONS: &[&str] = &["Yes", "No", "Unknown"];

pub fn contains(vocabulary: &[&str], value: &str) -> bool {
    vocabulary.iter().any(|v| *v == value)
}
