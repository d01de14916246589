//! Ministry recommendations. Matches a user's top gifts against the catalog.

use crate::domain::{GiftKey, GiftScores, MinistryDefinition, MinistryRecommendation};
use crate::ports::MinistryCatalogPort;
use std::sync::Arc;
use tracing::debug;

/// Maximum number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 5;

const REQUIRED_WEIGHT: f64 = 40.0;
const OPTIMAL_WEIGHT: f64 = 20.0;
const OPTIMAL_BONUS_STEP: f64 = 10.0;
const OPTIMAL_BONUS_CAP: f64 = 30.0;

pub struct MinistryService {
    catalog: Arc<dyn MinistryCatalogPort>,
}

impl MinistryService {
    pub fn new(catalog: Arc<dyn MinistryCatalogPort>) -> Self {
        Self { catalog }
    }

    /// Rank catalog ministries for the user's top gifts.
    ///
    /// Only ministries with at least one required gift among the top gifts are
    /// eligible. Returns at most [`MAX_RECOMMENDATIONS`], best first; ties keep
    /// catalog order.
    pub fn recommend(
        &self,
        scores: &GiftScores,
        top_gifts_count: usize,
    ) -> Vec<MinistryRecommendation> {
        let top = scores.top_keys(top_gifts_count);
        let mut recommendations: Vec<MinistryRecommendation> = self
            .catalog
            .ministries()
            .iter()
            .filter_map(|ministry| {
                score_ministry(ministry, &top).map(|score| MinistryRecommendation {
                    ministry: ministry.clone(),
                    compatibility_score: score,
                })
            })
            .collect();

        recommendations.sort_by(|a, b| b.compatibility_score.total_cmp(&a.compatibility_score));
        let eligible = recommendations.len();
        recommendations.truncate(MAX_RECOMMENDATIONS);
        debug!(
            catalog = self.catalog.ministries().len(),
            eligible,
            returned = recommendations.len(),
            "ministry recommendations ranked"
        );
        recommendations
    }
}

/// Normalized score for one ministry, or `None` when no required gift matches.
fn score_ministry(ministry: &MinistryDefinition, top: &[GiftKey]) -> Option<f64> {
    let matched_required = count_matches(&ministry.required_gifts, top);
    if matched_required == 0 {
        return None;
    }
    let matched_optimal = count_matches(&ministry.optimal_gifts, top);

    let bonus = (matched_optimal as f64 * OPTIMAL_BONUS_STEP).min(OPTIMAL_BONUS_CAP);
    let raw = matched_required as f64 * REQUIRED_WEIGHT
        + matched_optimal as f64 * OPTIMAL_WEIGHT
        + bonus;
    let max_possible = ministry.required_gifts.len() as f64 * REQUIRED_WEIGHT
        + ministry.optimal_gifts.len() as f64 * OPTIMAL_WEIGHT
        + OPTIMAL_BONUS_CAP;

    Some((raw / max_possible * 100.0).min(100.0))
}

fn count_matches(gifts: &[GiftKey], top: &[GiftKey]) -> usize {
    gifts.iter().filter(|g| top.contains(g)).count()
}
