//! Profile insights. Classifies the shape of a user's gift scores.

use crate::domain::{DominancePattern, GiftKey, GiftScores, ProfileInsight};
use crate::ports::{GiftNamePort, display_name_or_key};
use std::sync::Arc;

/// Gap between first and second gift above which the profile is specialised.
const SPECIALIST_GAP: f64 = 20.0;
/// Gap below which the top gifts count as equally strong.
const MULTIFACETED_GAP: f64 = 10.0;

pub struct InsightService {
    names: Arc<dyn GiftNamePort>,
}

impl InsightService {
    pub fn new(names: Arc<dyn GiftNamePort>) -> Self {
        Self { names }
    }

    /// Classify the profile from the top three gifts.
    ///
    /// Fewer than two gifts yields the default balanced insight with no text.
    pub fn insights(&self, scores: &GiftScores) -> ProfileInsight {
        let top = scores.top(3);
        let (Some(&(primary, primary_score)), Some(&(secondary, secondary_score))) =
            (top.first(), top.get(1))
        else {
            return ProfileInsight::default();
        };
        // TODO: the third gift is not part of classification until product defines its role.
        let tertiary_gift = top.get(2).map(|(g, _)| *g);

        let primary_name = self.name(primary);
        let difference = primary_score - secondary_score;

        let (dominance_pattern, balance_analysis, development_suggestions) =
            if difference > SPECIALIST_GAP {
                (
                    DominancePattern::Specialist,
                    format!(
                        "Você tem um dom claramente dominante: {}. Isso indica uma especialização bem definida no seu chamado.",
                        primary_name
                    ),
                    vec![
                        format!("Aprofunde-se no desenvolvimento do dom de {}", primary_name),
                        format!(
                            "Busque ministérios que utilizem especificamente o dom de {}",
                            primary_name
                        ),
                        "Procure mentores que compartilhem o mesmo dom principal".to_string(),
                    ],
                )
            } else if difference < MULTIFACETED_GAP {
                (
                    DominancePattern::Multifaceted,
                    "Você possui vários dons com intensidade semelhante, o que revela versatilidade ministerial.".to_string(),
                    vec![
                        "Considere ministérios que combinem vários dons".to_string(),
                        "Explore funções de liderança que aproveitem sua versatilidade"
                            .to_string(),
                    ],
                )
            } else {
                let secondary_name = self.name(secondary);
                (
                    DominancePattern::Balanced,
                    format!(
                        "Seus dons de {} e {} se complementam, formando um perfil equilibrado.",
                        primary_name, secondary_name
                    ),
                    vec![
                        format!("Concentre-se em {} como seu dom principal", primary_name),
                        format!("Use {} para complementar seu dom principal", secondary_name),
                    ],
                )
            };

        ProfileInsight {
            dominance_pattern,
            balance_analysis,
            development_suggestions,
            tertiary_gift,
        }
    }

    fn name(&self, gift: GiftKey) -> String {
        display_name_or_key(self.names.as_ref(), gift)
    }
}
