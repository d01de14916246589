//! Profile service. Runs every analysis for one set of scores.
//!
//! Coordinates the compatibility, ministry and insight services into a single report.

use super::{CompatibilityService, InsightService, MinistryService};
use crate::domain::{GiftScores, ProfileReport, RankedGift};
use crate::ports::{GiftNamePort, MinistryCatalogPort, display_name_or_key};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Default number of top gifts considered by the analyses.
pub const DEFAULT_TOP_GIFTS: usize = 3;

pub struct ProfileService {
    names: Arc<dyn GiftNamePort>,
    compatibility: CompatibilityService,
    ministries: MinistryService,
    insights: InsightService,
}

impl ProfileService {
    /// Create a new profile service.
    ///
    /// # Arguments
    /// * `names` - Gift display-name lookup used in all generated text
    /// * `catalog` - Ministry catalog, loaded once at startup
    pub fn new(names: Arc<dyn GiftNamePort>, catalog: Arc<dyn MinistryCatalogPort>) -> Self {
        Self {
            compatibility: CompatibilityService::new(Arc::clone(&names)),
            ministries: MinistryService::new(catalog),
            insights: InsightService::new(Arc::clone(&names)),
            names,
        }
    }

    /// Build the full report. Never fails; empty input gives an empty report.
    pub fn build_report(&self, scores: &GiftScores, top_gifts_count: usize) -> ProfileReport {
        let top_gifts = scores
            .top(top_gifts_count)
            .into_iter()
            .map(|(gift, score)| RankedGift {
                gift,
                name: display_name_or_key(self.names.as_ref(), gift),
                score,
            })
            .collect();

        let report = ProfileReport {
            generated_at: Utc::now(),
            top_gifts,
            compatibility: self.compatibility.analyze(scores, top_gifts_count),
            ministries: self.ministries.recommend(scores, top_gifts_count),
            insight: self.insights.insights(scores),
            unknown_keys: scores.unknown_keys().to_vec(),
        };

        info!(
            gifts = scores.len(),
            top_gifts_count,
            compatibility = report.compatibility.len(),
            ministries = report.ministries.len(),
            pattern = ?report.insight.dominance_pattern,
            "profile report built"
        );
        report
    }
}
