//! Static synergy matrix between gifts.
//!
//! Read-only table compiled into the binary. Each primary gift lists the gifts
//! it works strongly or moderately with, the gifts it is in tension with, and
//! curated descriptions for notable pairs.

use super::GiftKey;
use super::GiftKey::*;

/// How a secondary gift relates to a primary gift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynergyRelation {
    Strong,
    Moderate,
    Challenge,
}

impl SynergyRelation {
    /// Contribution to the raw compatibility score.
    pub fn weight(self) -> i32 {
        match self {
            SynergyRelation::Strong => 3,
            SynergyRelation::Moderate => 2,
            SynergyRelation::Challenge => -1,
        }
    }
}

/// Highest weight a single secondary gift can contribute.
pub const MAX_PAIR_WEIGHT: i32 = 3;

#[derive(Debug)]
pub struct SynergyEntry {
    pub primary: GiftKey,
    pub strong: &'static [GiftKey],
    pub moderate: &'static [GiftKey],
    pub challenges: &'static [GiftKey],
    pub descriptions: &'static [(GiftKey, &'static str)],
}

impl SynergyEntry {
    pub fn relation(&self, secondary: GiftKey) -> Option<SynergyRelation> {
        if self.strong.contains(&secondary) {
            Some(SynergyRelation::Strong)
        } else if self.moderate.contains(&secondary) {
            Some(SynergyRelation::Moderate)
        } else if self.challenges.contains(&secondary) {
            Some(SynergyRelation::Challenge)
        } else {
            None
        }
    }

    pub fn description(&self, secondary: GiftKey) -> Option<&'static str> {
        self.descriptions
            .iter()
            .find(|(g, _)| *g == secondary)
            .map(|(_, d)| *d)
    }

    /// Gifts listed in more than one relation set.
    pub fn overlaps(&self) -> Vec<GiftKey> {
        GiftKey::ALL
            .into_iter()
            .filter(|g| {
                let hits = [self.strong, self.moderate, self.challenges]
                    .iter()
                    .filter(|set| set.contains(g))
                    .count();
                hits > 1
            })
            .collect()
    }
}

static MATRIX: &[SynergyEntry] = &[
    SynergyEntry {
        primary: Prophecy,
        strong: &[Teaching, Leadership],
        moderate: &[Exhortation, Service],
        challenges: &[Mercy],
        descriptions: &[
            (
                Teaching,
                "Profecia e Ensino: a verdade revelada é explicada com clareza e fundamento bíblico",
            ),
            (
                Leadership,
                "Profecia e Liderança: visão clara combinada com a capacidade de mobilizar pessoas",
            ),
        ],
    },
    SynergyEntry {
        primary: Service,
        strong: &[Giving, Mercy],
        moderate: &[Leadership, Exhortation],
        challenges: &[Prophecy],
        descriptions: &[
            (
                Giving,
                "Serviço e Contribuição: necessidades práticas supridas com recursos e mãos dispostas",
            ),
            (
                Mercy,
                "Serviço e Misericórdia: cuidado prático que alcança quem está sofrendo",
            ),
        ],
    },
    SynergyEntry {
        primary: Teaching,
        strong: &[Prophecy, Exhortation],
        moderate: &[Leadership],
        challenges: &[Mercy],
        descriptions: &[
            (
                Prophecy,
                "Ensino e Profecia: ensino fiel que confronta e traz convicção",
            ),
            (
                Exhortation,
                "Ensino e Exortação: conhecimento transformado em aplicação prática para a vida",
            ),
        ],
    },
    SynergyEntry {
        primary: Exhortation,
        strong: &[Teaching, Mercy],
        moderate: &[Prophecy, Leadership],
        challenges: &[],
        descriptions: &[
            (
                Teaching,
                "Exortação e Ensino: encorajamento fundamentado na Palavra que gera crescimento",
            ),
            (
                Mercy,
                "Exortação e Misericórdia: acolhimento que também aponta caminhos de restauração",
            ),
        ],
    },
    SynergyEntry {
        primary: Giving,
        strong: &[Service, Mercy],
        moderate: &[Leadership],
        challenges: &[Prophecy],
        descriptions: &[
            (
                Service,
                "Contribuição e Serviço: generosidade que se traduz em ação concreta",
            ),
            (
                Mercy,
                "Contribuição e Misericórdia: recursos direcionados a quem mais precisa",
            ),
        ],
    },
    SynergyEntry {
        primary: Leadership,
        strong: &[Prophecy, Service],
        moderate: &[Teaching, Exhortation],
        challenges: &[Mercy],
        descriptions: &[
            (
                Prophecy,
                "Liderança e Profecia: direção estratégica guiada por uma visão clara",
            ),
            (
                Service,
                "Liderança e Serviço: organização que transforma planos em realizações",
            ),
        ],
    },
    SynergyEntry {
        primary: Mercy,
        strong: &[Service, Exhortation, Giving],
        moderate: &[],
        challenges: &[Prophecy, Leadership],
        descriptions: &[
            (
                Service,
                "Misericórdia e Serviço: compaixão expressa em cuidado prático",
            ),
            (
                Exhortation,
                "Misericórdia e Exortação: empatia que fortalece e encoraja",
            ),
        ],
    },
];

/// Synergy entry for a primary gift, if the matrix has one.
pub fn synergy_entry(primary: GiftKey) -> Option<&'static SynergyEntry> {
    MATRIX.iter().find(|e| e.primary == primary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_sets_are_disjoint() {
        for entry in MATRIX {
            assert!(
                entry.overlaps().is_empty(),
                "{} has overlapping relations: {:?}",
                entry.primary,
                entry.overlaps()
            );
        }
    }

    #[test]
    fn test_no_gift_relates_to_itself() {
        for entry in MATRIX {
            assert_eq!(entry.relation(entry.primary), None);
        }
    }

    #[test]
    fn test_every_gift_has_an_entry() {
        for gift in GiftKey::ALL {
            assert!(synergy_entry(gift).is_some(), "missing entry for {}", gift);
        }
    }

    #[test]
    fn test_descriptions_only_for_strong_synergies() {
        for entry in MATRIX {
            for (secondary, _) in entry.descriptions {
                assert_eq!(entry.relation(*secondary), Some(SynergyRelation::Strong));
            }
        }
    }

    #[test]
    fn test_known_relations() {
        let prophecy = synergy_entry(Prophecy).unwrap();
        assert_eq!(prophecy.relation(Teaching), Some(SynergyRelation::Strong));
        assert_eq!(prophecy.relation(Leadership), Some(SynergyRelation::Strong));
        assert!(prophecy.description(Teaching).is_some());

        let giving = synergy_entry(Giving).unwrap();
        assert_eq!(giving.relation(Prophecy), Some(SynergyRelation::Challenge));
    }

    #[test]
    fn test_overlaps_detects_conflicts() {
        let broken = SynergyEntry {
            primary: Prophecy,
            strong: &[Teaching],
            moderate: &[],
            challenges: &[Teaching],
            descriptions: &[],
        };
        assert_eq!(broken.overlaps(), vec![Teaching]);
    }
}
