//! Domain entities. Pure data structures for the scoring core.
//!
//! Output records are built fresh per call and never mutated afterwards.

use super::{DomainError, GiftKey};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How well a primary gift combines with the user's other top gifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftCompatibility {
    pub primary_gift: GiftKey,
    pub secondary_gifts: Vec<GiftKey>,
    /// Normalized to 0..=100.
    pub compatibility_score: f64,
    pub strength_areas: Vec<String>,
    pub potential_challenges: Vec<String>,
    /// Empty when no strong synergy was found.
    pub synergy_description: String,
}

/// Catalog entry describing a ministry and the gifts it calls for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinistryDefinition {
    pub name: String,
    pub description: String,
    pub required_gifts: Vec<GiftKey>,
    #[serde(default)]
    pub optimal_gifts: Vec<GiftKey>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub growth_areas: Vec<String>,
}

impl MinistryDefinition {
    /// Check catalog invariants: a name and at least one required gift.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Catalog("ministry without a name".to_string()));
        }
        if self.required_gifts.is_empty() {
            return Err(DomainError::Catalog(format!(
                "ministry '{}' has no required gifts",
                self.name
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinistryRecommendation {
    #[serde(flatten)]
    pub ministry: MinistryDefinition,
    /// Normalized to 0..=100.
    pub compatibility_score: f64,
}

/// Shape of a user's gift profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DominancePattern {
    #[default]
    Balanced,
    Specialist,
    Multifaceted,
}

impl DominancePattern {
    /// Localized label shown to users.
    pub fn label(self) -> &'static str {
        match self {
            DominancePattern::Balanced => "Equilibrado",
            DominancePattern::Specialist => "Especialista",
            DominancePattern::Multifaceted => "Multifacetado",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileInsight {
    pub dominance_pattern: DominancePattern,
    pub balance_analysis: String,
    pub development_suggestions: Vec<String>,
    /// Third-ranked gift. Reported for callers; classification does not use it yet.
    pub tertiary_gift: Option<GiftKey>,
}

/// A top gift with its score and display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGift {
    pub gift: GiftKey,
    pub name: String,
    pub score: f64,
}

/// Everything the engine derives from one set of scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub generated_at: DateTime<Utc>,
    pub top_gifts: Vec<RankedGift>,
    pub compatibility: Vec<GiftCompatibility>,
    pub ministries: Vec<MinistryRecommendation>,
    pub insight: ProfileInsight,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_keys: Vec<String>,
}
