use chrono::{DateTime, Utc};
use serde::Serialize;

use super::service::get_distress_score;
use crate::scoring::{DistressBand, DistressDriver};
use crate::store::{PropertyId, StoreState};

/// Which leads to include in a ranking.
#[derive(Debug, Clone, Default)]
pub struct RankFilter {
    pub min_band: Option<DistressBand>,
    pub updated_since: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
}

/// A lead with its cached distress score, for "what to work next" views.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedLead {
    pub property_id: PropertyId,
    pub score: u32,
    pub band: DistressBand,
    pub top_driver: Option<DistressDriver>,
    pub updated_at: DateTime<Utc>,
}

/// Rank stored overviews by cached distress score.
///
/// Highest score first; ties go to the lower property id.
pub fn rank_overviews(state: &StoreState, filter: &RankFilter) -> Vec<RankedLead> {
    let mut leads: Vec<RankedLead> = state
        .overviews
        .iter()
        .filter(|(_, entry)| match filter.updated_since {
            Some(since) => entry.updated_at >= since,
            None => true,
        })
        .map(|(&property_id, entry)| {
            let summary = get_distress_score(state, property_id);
            RankedLead {
                property_id,
                score: summary.score,
                band: summary.band,
                top_driver: summary.drivers.into_iter().next(),
                updated_at: entry.updated_at,
            }
        })
        .filter(|lead| match filter.min_band {
            Some(min) => lead.band >= min,
            None => true,
        })
        .collect();

    leads.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.property_id.cmp(&b.property_id))
    });

    if let Some(limit) = filter.limit {
        leads.truncate(limit);
    }

    leads
}
