//! Report rendering for the terminal: human-readable text or pretty JSON.

use crate::domain::{DomainError, ProfileReport};
use std::fmt::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(DomainError::Config(format!("unknown output format: {}", other))),
        }
    }
}

pub fn render_report(report: &ProfileReport, format: OutputFormat) -> Result<String, DomainError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| DomainError::Render(format!("serialize report: {}", e))),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

/// Whole-percent display; the report itself keeps full precision.
fn percent(score: f64) -> String {
    format!("{:.0}%", score.round())
}

fn render_text(report: &ProfileReport) -> String {
    // Writing into a String cannot fail.
    let mut out = String::new();

    let timestamp = report.generated_at.format("%Y-%m-%d %H:%M UTC");
    let _ = writeln!(out, "# Perfil de Dons Espirituais");
    let _ = writeln!(out, "Gerado em: {}\n", timestamp);

    if report.top_gifts.is_empty() {
        let _ = writeln!(out, "Nenhuma pontuação de dons informada.");
        return out;
    }

    let _ = writeln!(out, "## Dons principais");
    for (i, gift) in report.top_gifts.iter().enumerate() {
        let _ = writeln!(out, "{}. {} ({}): {}", i + 1, gift.name, gift.gift, gift.score);
    }

    let insight = &report.insight;
    let _ = writeln!(out, "\n## Padrão do perfil: {}", insight.dominance_pattern.label());
    if !insight.balance_analysis.is_empty() {
        let _ = writeln!(out, "{}", insight.balance_analysis);
    }
    for suggestion in &insight.development_suggestions {
        let _ = writeln!(out, "- {}", suggestion);
    }

    if !report.compatibility.is_empty() {
        let _ = writeln!(out, "\n## Compatibilidade entre dons");
        for c in &report.compatibility {
            let _ = writeln!(out, "### {} - {}", c.primary_gift, percent(c.compatibility_score));
            if !c.synergy_description.is_empty() {
                let _ = writeln!(out, "{}", c.synergy_description);
            }
            for area in &c.strength_areas {
                let _ = writeln!(out, "+ {}", area);
            }
            for challenge in &c.potential_challenges {
                let _ = writeln!(out, "! {}", challenge);
            }
        }
    }

    let _ = writeln!(out, "\n## Ministérios recomendados");
    if report.ministries.is_empty() {
        let _ = writeln!(out, "Nenhum ministério compatível encontrado.");
    }
    for rec in &report.ministries {
        let _ = writeln!(
            out,
            "- {} ({}): {}",
            rec.ministry.name,
            percent(rec.compatibility_score),
            rec.ministry.description
        );
    }

    if !report.unknown_keys.is_empty() {
        let _ = writeln!(
            out,
            "\nChaves ignoradas: {}",
            report.unknown_keys.join(", ")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::BuiltinCatalog;
    use crate::adapters::names::PortugueseGiftNames;
    use crate::domain::{GiftKey, GiftScores};
    use crate::usecases::ProfileService;
    use std::sync::Arc;

    fn report() -> ProfileReport {
        let service =
            ProfileService::new(Arc::new(PortugueseGiftNames), Arc::new(BuiltinCatalog::new()));
        let scores = GiftScores::from_pairs([
            (GiftKey::Teaching, 100.0),
            (GiftKey::Leadership, 40.0),
            (GiftKey::Mercy, 10.0),
        ]);
        service.build_report(&scores, 3)
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" text ".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_report_sections() {
        let text = render_report(&report(), OutputFormat::Text).unwrap();
        assert!(text.contains("Dons principais"));
        assert!(text.contains("1. Ensino (C_TEACHING): 100"));
        assert!(text.contains("Especialista"));
        assert!(text.contains("Ensino e Pregação"));
    }

    #[test]
    fn test_text_report_shows_generation_time() {
        let mut fixed = report();
        fixed.generated_at = chrono::DateTime::parse_from_rfc3339("2024-03-05T14:07:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let text = render_report(&fixed, OutputFormat::Text).unwrap();
        assert!(text.contains("Gerado em: 2024-03-05 14:07 UTC"));

        let json = render_report(&fixed, OutputFormat::Json).unwrap();
        assert!(json.contains("\"generated_at\": \"2024-03-05T14:07:00Z\""), "{}", json);
    }

    #[test]
    fn test_json_report_round_trips() {
        let original = report();
        let json = render_report(&original, OutputFormat::Json).unwrap();
        let parsed: ProfileReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_empty_report_text() {
        let service =
            ProfileService::new(Arc::new(PortugueseGiftNames), Arc::new(BuiltinCatalog::new()));
        let empty = service.build_report(&GiftScores::new(), 3);
        let text = render_report(&empty, OutputFormat::Text).unwrap();
        assert!(text.contains("Nenhuma pontuação"));
    }
}
