//! Built-in ministry catalog, compiled into the binary.

use crate::domain::GiftKey::{self, *};
use crate::domain::MinistryDefinition;
use crate::ports::MinistryCatalogPort;

struct Seed {
    name: &'static str,
    description: &'static str,
    required: &'static [GiftKey],
    optimal: &'static [GiftKey],
    responsibilities: &'static [&'static str],
    growth_areas: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        name: "Ensino e Pregação",
        description: "Comunicar a Palavra com clareza, profundidade e aplicação prática",
        required: &[Teaching],
        optimal: &[Prophecy, Exhortation],
        responsibilities: &[
            "Preparar e ministrar estudos bíblicos",
            "Pregar em cultos e encontros",
            "Desenvolver materiais de ensino",
        ],
        growth_areas: &[
            "Hermenêutica e exegese",
            "Comunicação e oratória",
            "Didática para diferentes faixas etárias",
        ],
    },
    Seed {
        name: "Aconselhamento e Cuidado Pastoral",
        description: "Acompanhar pessoas em momentos de crise, dor e crescimento espiritual",
        required: &[Mercy, Exhortation],
        optimal: &[Teaching],
        responsibilities: &[
            "Atender pessoas em aconselhamento",
            "Visitar enfermos e enlutados",
            "Acompanhar novos convertidos",
        ],
        growth_areas: &[
            "Escuta ativa e empatia",
            "Fundamentos de aconselhamento bíblico",
            "Limites saudáveis no cuidado",
        ],
    },
    Seed {
        name: "Liderança e Administração",
        description: "Conduzir equipes e organizar recursos para cumprir a visão da igreja",
        required: &[Leadership],
        optimal: &[Prophecy, Teaching],
        responsibilities: &[
            "Coordenar equipes e ministérios",
            "Planejar eventos e projetos",
            "Acompanhar metas e resultados",
        ],
        growth_areas: &[
            "Gestão de pessoas",
            "Planejamento estratégico",
            "Delegação e formação de líderes",
        ],
    },
    Seed {
        name: "Ação Social e Assistência",
        description: "Servir a comunidade suprindo necessidades práticas com amor",
        required: &[Service, Mercy],
        optimal: &[Giving],
        responsibilities: &[
            "Organizar campanhas de arrecadação",
            "Distribuir alimentos e roupas",
            "Visitar famílias em vulnerabilidade",
        ],
        growth_areas: &[
            "Mapeamento de necessidades locais",
            "Parcerias com a comunidade",
            "Gestão de voluntários",
        ],
    },
    Seed {
        name: "Intercessão e Discernimento",
        description: "Sustentar a igreja em oração e discernir direções espirituais",
        required: &[Prophecy],
        optimal: &[Mercy, Exhortation],
        responsibilities: &[
            "Conduzir momentos de oração",
            "Interceder por pedidos da comunidade",
            "Apoiar a liderança em discernimento",
        ],
        growth_areas: &[
            "Vida devocional consistente",
            "Sensibilidade e sabedoria ao falar",
            "Trabalho em equipe com a liderança",
        ],
    },
    Seed {
        name: "Missões e Evangelismo",
        description: "Anunciar o evangelho e apoiar a expansão do Reino dentro e fora da cidade",
        required: &[Exhortation, Prophecy],
        optimal: &[Leadership, Giving],
        responsibilities: &[
            "Participar de ações evangelísticas",
            "Apoiar missionários e projetos",
            "Mobilizar a igreja para missões",
        ],
        growth_areas: &[
            "Apologética e comunicação do evangelho",
            "Sensibilidade transcultural",
            "Mobilização de recursos",
        ],
    },
    Seed {
        name: "Mordomia e Finanças",
        description: "Administrar com fidelidade os recursos confiados à igreja",
        required: &[Giving],
        optimal: &[Leadership, Service],
        responsibilities: &[
            "Acompanhar orçamento e prestação de contas",
            "Incentivar a generosidade",
            "Apoiar projetos com recursos",
        ],
        growth_areas: &[
            "Educação financeira",
            "Transparência e governança",
            "Visão de longo prazo",
        ],
    },
    Seed {
        name: "Hospitalidade e Recepção",
        description: "Acolher visitantes e membros, criando um ambiente de pertencimento",
        required: &[Service],
        optimal: &[Mercy, Exhortation],
        responsibilities: &[
            "Receber pessoas nos cultos",
            "Integrar visitantes",
            "Organizar confraternizações",
        ],
        growth_areas: &[
            "Comunicação interpessoal",
            "Atenção a detalhes",
            "Acompanhamento de novos membros",
        ],
    },
    Seed {
        name: "Discipulado e Mentoria",
        description: "Investir em pessoas de forma próxima para formar discípulos maduros",
        required: &[Teaching, Exhortation],
        optimal: &[Leadership, Mercy],
        responsibilities: &[
            "Conduzir grupos de discipulado",
            "Mentorear novos líderes",
            "Acompanhar o crescimento espiritual de discípulos",
        ],
        growth_areas: &[
            "Relacionamentos de longo prazo",
            "Formação de caráter",
            "Multiplicação de discipuladores",
        ],
    },
];

/// Catalog backed by the compiled-in seed table.
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    ministries: Vec<MinistryDefinition>,
}

impl BuiltinCatalog {
    pub fn new() -> Self {
        let ministries = SEEDS
            .iter()
            .map(|s| MinistryDefinition {
                name: s.name.to_string(),
                description: s.description.to_string(),
                required_gifts: s.required.to_vec(),
                optimal_gifts: s.optimal.to_vec(),
                responsibilities: s.responsibilities.iter().map(|r| r.to_string()).collect(),
                growth_areas: s.growth_areas.iter().map(|g| g.to_string()).collect(),
            })
            .collect();
        Self { ministries }
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MinistryCatalogPort for BuiltinCatalog {
    fn ministries(&self) -> &[MinistryDefinition] {
        &self.ministries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_entries_are_valid() {
        let catalog = BuiltinCatalog::new();
        assert_eq!(catalog.ministries().len(), SEEDS.len());
        for ministry in catalog.ministries() {
            ministry.validate().unwrap();
        }
    }

    #[test]
    fn test_names_are_unique() {
        let catalog = BuiltinCatalog::new();
        let names: HashSet<&str> = catalog.ministries().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names.len(), catalog.ministries().len());
    }

    #[test]
    fn test_every_gift_is_required_somewhere() {
        let catalog = BuiltinCatalog::new();
        for gift in GiftKey::ALL {
            assert!(
                catalog
                    .ministries()
                    .iter()
                    .any(|m| m.required_gifts.contains(&gift)),
                "no ministry requires {}",
                gift
            );
        }
    }
}
