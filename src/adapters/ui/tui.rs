//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Main menu: enter scores by hand, load a scores file, or exit.

use super::render::{OutputFormat, render_report};
use crate::adapters::scores::source_for_path;
use crate::domain::{DomainError, GiftKey, GiftScores};
use crate::ports::{GiftNamePort, InputPort, display_name_or_key};
use crate::usecases::ProfileService;
use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{CustomType, InquireError, Select, Text};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Applies the prompt theme globally. Call once before the first prompt.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("✦").with_fg(Color::LightMagenta))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightYellow));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ManualEntry,
    LoadFile,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 3] = [MenuChoice::ManualEntry, MenuChoice::LoadFile, MenuChoice::Exit];
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::ManualEntry => "Informar pontuações manualmente",
            MenuChoice::LoadFile => "Carregar arquivo de pontuações (JSON ou CSV)",
            MenuChoice::Exit => "Sair",
        };
        f.write_str(label)
    }
}

fn prompt_error(e: InquireError) -> DomainError {
    DomainError::Input(e.to_string())
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    profile: Arc<ProfileService>,
    names: Arc<dyn GiftNamePort>,
    top_gifts_count: usize,
    format: OutputFormat,
}

impl TuiInputPort {
    pub fn new(
        profile: Arc<ProfileService>,
        names: Arc<dyn GiftNamePort>,
        top_gifts_count: usize,
        format: OutputFormat,
    ) -> Self {
        Self {
            profile,
            names,
            top_gifts_count,
            format,
        }
    }

    fn prompt_scores(&self) -> Result<GiftScores, DomainError> {
        let mut scores = GiftScores::new();
        for gift in GiftKey::ALL {
            let label = format!("{} ({}):", display_name_or_key(self.names.as_ref(), gift), gift);
            let score = CustomType::<f64>::new(&label)
                .with_default(0.0)
                .with_error_message("Informe um número, por exemplo 42 ou 37.5")
                .prompt()
                .map_err(prompt_error)?;
            scores.insert(gift, score);
        }
        Ok(scores)
    }

    async fn load_file(&self) -> Result<GiftScores, DomainError> {
        let path = Text::new("Caminho do arquivo:").prompt().map_err(prompt_error)?;
        source_for_path(path.trim()).load_scores().await
    }

    fn show(&self, scores: &GiftScores) -> Result<(), DomainError> {
        let report = self.profile.build_report(scores, self.top_gifts_count);
        println!("{}", render_report(&report, self.format)?);
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let selected = Select::new("O que deseja fazer?", MenuChoice::ALL.to_vec()).prompt();
            let choice = match selected {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    MenuChoice::Exit
                }
                Err(e) => return Err(prompt_error(e)),
            };

            let scores = match choice {
                MenuChoice::Exit => {
                    info!("exiting");
                    return Ok(());
                }
                MenuChoice::ManualEntry => self.prompt_scores(),
                MenuChoice::LoadFile => self.load_file().await,
            };

            match scores {
                Ok(scores) => self.show(&scores)?,
                Err(e) => {
                    warn!(error = %e, "could not read scores");
                    eprintln!("Erro: {}", e);
                }
            }
        }
    }
}
