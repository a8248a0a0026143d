use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use std::str::FromStr;
use tracing::info;

use crate::analysis::{Category, WebsiteAnalyzer};
use crate::config::Config;
use crate::llm::factory;
use crate::ui::{SectionToggles, Session, SubmitOutcome, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Load config, apply CLI overrides, and build a session around it.
pub fn build_session(
    config_path: Option<String>,
    model_override: Option<String>,
    dry_run: bool,
) -> Result<Session> {
    let mut config = Config::load_with_path(config_path)?;
    if let Some(model) = model_override {
        info!("Model override: {}", model);
        config.llm.model = model;
    }
    info!(
        "Provider: {} (model: {})",
        config.llm.provider, config.llm.model
    );
    info!("Dry run: {}", dry_run);

    let client = factory::create_client(&config, dry_run)?;
    Ok(Session::new(WebsiteAnalyzer::from_config(&config, client)))
}

pub async fn run(
    url: String,
    format: OutputFormat,
    collapse: Vec<String>,
    config_path: Option<String>,
    model_override: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let toggles = collapsed_toggles(&collapse)?;
    let mut session = build_session(config_path, model_override, dry_run)?;

    if let SubmitOutcome::Rejected(field_error) = session.submit(&url).await {
        bail!("{}", field_error);
    }
    *session.toggles_mut() = toggles;

    match session.state() {
        ViewState::Ready { result, .. } => {
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(result.as_ref())
                        .context("failed to serialize analysis result")?;
                    println!("{}", json);
                }
                OutputFormat::Text => print!("{}", session.render()),
            }
            Ok(())
        }
        ViewState::Failed { message, .. } => bail!("{}", message),
        ViewState::Idle | ViewState::Loading { .. } => {
            bail!("analysis did not complete")
        }
    }
}

/// Toggles with the named categories collapsed.
fn collapsed_toggles(names: &[String]) -> Result<SectionToggles> {
    let mut toggles = SectionToggles::default();
    for name in names {
        toggles.set(Category::from_str(name)?, false);
    }
    Ok(toggles)
}
