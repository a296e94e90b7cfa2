pub mod ranking;
pub mod record;
pub mod service;

pub use ranking::{rank_overviews, RankFilter, RankedLead};
pub use record::{OverviewPatch, SignalRecord};
pub use service::{
    get_distress_score, get_overview, update_overview, DistressSummary, OverviewView,
    UpdateOutcome,
};
