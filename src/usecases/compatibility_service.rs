//! Compatibility analysis. Scores how a user's top gifts combine.
//!
//! Uses the static synergy matrix; gift names come from the injected lookup.

use crate::domain::synergy::MAX_PAIR_WEIGHT;
use crate::domain::{GiftCompatibility, GiftKey, GiftScores, SynergyRelation, synergy_entry};
use crate::ports::{GiftNamePort, display_name_or_key};
use std::sync::Arc;
use tracing::debug;

/// Service that pairs each top gift with the others and scores the combination.
pub struct CompatibilityService {
    names: Arc<dyn GiftNamePort>,
}

impl CompatibilityService {
    pub fn new(names: Arc<dyn GiftNamePort>) -> Self {
        Self { names }
    }

    /// Analyze the `top_gifts_count` highest-scoring gifts against each other.
    ///
    /// Gifts without a matrix entry are skipped. An empty result means no
    /// compatibility data is available, not an error. Sorted by score descending.
    pub fn analyze(&self, scores: &GiftScores, top_gifts_count: usize) -> Vec<GiftCompatibility> {
        let top = scores.top_keys(top_gifts_count);
        let mut results: Vec<GiftCompatibility> = top
            .iter()
            .filter_map(|&primary| self.analyze_primary(primary, &top))
            .collect();

        // Stable: equal scores keep rank order.
        results.sort_by(|a, b| b.compatibility_score.total_cmp(&a.compatibility_score));
        debug!(
            candidates = top.len(),
            results = results.len(),
            "compatibility analysis done"
        );
        results
    }

    fn analyze_primary(&self, primary: GiftKey, top: &[GiftKey]) -> Option<GiftCompatibility> {
        let Some(entry) = synergy_entry(primary) else {
            debug!(gift = %primary, "no synergy entry, skipping");
            return None;
        };

        let secondary_gifts: Vec<GiftKey> =
            top.iter().copied().filter(|&g| g != primary).collect();
        let primary_name = self.name(primary);

        let mut raw_score = 0;
        let mut strength_areas = Vec::new();
        let mut potential_challenges = Vec::new();

        for &secondary in &secondary_gifts {
            let Some(relation) = entry.relation(secondary) else {
                continue;
            };
            raw_score += relation.weight();
            match relation {
                SynergyRelation::Strong => {
                    let area = entry
                        .description(secondary)
                        .map(str::to_string)
                        .unwrap_or_else(|| {
                            format!(
                                "{} e {} formam uma combinação poderosa",
                                primary_name,
                                self.name(secondary)
                            )
                        });
                    strength_areas.push(area);
                }
                SynergyRelation::Moderate => {}
                SynergyRelation::Challenge => {
                    potential_challenges.push(format!(
                        "{} e {} podem ter abordagens diferentes que precisam de equilíbrio",
                        primary_name,
                        self.name(secondary)
                    ));
                }
            }
        }

        let synergy_description = if strength_areas.is_empty() {
            String::new()
        } else {
            format!(
                "Seu dom de {} trabalha em harmonia com seus outros dons principais",
                primary_name
            )
        };

        Some(GiftCompatibility {
            primary_gift: primary,
            compatibility_score: normalize(raw_score, secondary_gifts.len()),
            secondary_gifts,
            strength_areas,
            potential_challenges,
            synergy_description,
        })
    }

    fn name(&self, gift: GiftKey) -> String {
        display_name_or_key(self.names.as_ref(), gift)
    }
}

/// Raw score as a percentage of the best case. 0 when there is nothing to pair with.
fn normalize(raw_score: i32, secondary_count: usize) -> f64 {
    if secondary_count == 0 {
        return 0.0;
    }
    let max = (secondary_count as i32 * MAX_PAIR_WEIGHT) as f64;
    (raw_score as f64 / max * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::names::{PortugueseGiftNames, TableGiftNames};
    use GiftKey::*;

    fn service() -> CompatibilityService {
        CompatibilityService::new(Arc::new(PortugueseGiftNames))
    }

    fn find(results: &[GiftCompatibility], gift: GiftKey) -> &GiftCompatibility {
        results
            .iter()
            .find(|r| r.primary_gift == gift)
            .expect("gift present in results")
    }

    #[test]
    fn test_strong_synergies_score_full_marks() {
        let scores =
            GiftScores::from_pairs([(Prophecy, 90.0), (Teaching, 85.0), (Leadership, 40.0)]);
        let results = service().analyze(&scores, 3);

        assert_eq!(results.len(), 3);
        let prophecy = find(&results, Prophecy);
        assert_eq!(prophecy.secondary_gifts, vec![Teaching, Leadership]);
        assert_eq!(prophecy.compatibility_score, 100.0);
        let pair = synergy_entry(Prophecy).unwrap().description(Teaching).unwrap();
        assert!(prophecy.strength_areas.iter().any(|s| s == pair));
        assert!(prophecy.potential_challenges.is_empty());
        assert!(prophecy.synergy_description.contains("Profecia"));

        // Teaching: Prophecy strong (+3), Leadership moderate (+2) -> 5/6
        let teaching = find(&results, Teaching);
        assert!((teaching.compatibility_score - 500.0 / 6.0).abs() < 1e-9);
        assert_eq!(teaching.strength_areas.len(), 1);

        assert_eq!(results[0].primary_gift, Prophecy);
    }

    #[test]
    fn test_challenge_clamps_to_zero() {
        let scores = GiftScores::from_pairs([(Giving, 90.0), (Prophecy, 80.0)]);
        let results = service().analyze(&scores, 3);

        let giving = find(&results, Giving);
        assert_eq!(giving.compatibility_score, 0.0);
        assert_eq!(giving.potential_challenges.len(), 1);
        assert!(giving.potential_challenges[0].contains("Contribuição"));
        assert!(giving.potential_challenges[0].contains("Profecia"));
        assert!(giving.strength_areas.is_empty());
        assert!(giving.synergy_description.is_empty());
    }

    #[test]
    fn test_single_gift_has_no_secondaries() {
        let scores = GiftScores::from_pairs([(Service, 50.0)]);
        let results = service().analyze(&scores, 3);

        assert_eq!(results.len(), 1);
        let service = &results[0];
        assert_eq!(service.primary_gift, Service);
        assert!(service.secondary_gifts.is_empty());
        assert!(service.strength_areas.is_empty());
        assert!(service.potential_challenges.is_empty());
        assert_eq!(service.compatibility_score, 0.0);
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        assert!(service().analyze(&GiftScores::new(), 3).is_empty());
        let scores = GiftScores::from_pairs([(Service, 50.0)]);
        assert!(service().analyze(&scores, 0).is_empty());
    }

    #[test]
    fn test_top_count_limits_candidates() {
        let scores = GiftScores::from_pairs([
            (Prophecy, 90.0),
            (Teaching, 85.0),
            (Leadership, 40.0),
            (Mercy, 10.0),
        ]);
        let results = service().analyze(&scores, 2);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.primary_gift != Leadership));

        let all = service().analyze(&scores, 10);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_sorted_and_in_range() {
        let scores = GiftScores::from_pairs([
            (Prophecy, 30.0),
            (Service, 60.0),
            (Teaching, 45.0),
            (Exhortation, 20.0),
            (Giving, 55.0),
            (Leadership, 35.0),
            (Mercy, 50.0),
        ]);
        for n in 0..=7 {
            let results = service().analyze(&scores, n);
            assert!(
                results
                    .windows(2)
                    .all(|w| w[0].compatibility_score >= w[1].compatibility_score)
            );
            assert!(
                results
                    .iter()
                    .all(|r| (0.0..=100.0).contains(&r.compatibility_score))
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let scores = GiftScores::from_pairs([(Mercy, 70.0), (Service, 70.0), (Giving, 70.0)]);
        let first = serde_json::to_string(&service().analyze(&scores, 3)).unwrap();
        let reordered = GiftScores::from_pairs([(Giving, 70.0), (Mercy, 70.0), (Service, 70.0)]);
        let second = serde_json::to_string(&service().analyze(&reordered, 3)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fallback_description_uses_raw_key_on_name_miss() {
        // Mercy -> Giving is a strong synergy without curated text.
        let names = TableGiftNames::new([(Mercy, "Misericórdia".to_string())]);
        let service = CompatibilityService::new(Arc::new(names));
        let scores = GiftScores::from_pairs([(Mercy, 80.0), (Giving, 60.0)]);
        let results = service.analyze(&scores, 2);

        let mercy = find(&results, Mercy);
        assert_eq!(
            mercy.strength_areas,
            vec!["Misericórdia e E_GIVING formam uma combinação poderosa".to_string()]
        );
        let giving = find(&results, Giving);
        assert!(giving.synergy_description.contains("E_GIVING"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(6, 2), 100.0);
        assert_eq!(normalize(-2, 2), 0.0);
        assert_eq!(normalize(3, 0), 0.0);
        assert!((normalize(2, 1) - 200.0 / 3.0).abs() < 1e-9);
    }
}
