use std::sync::Arc;
use tracing::{error, info};

use super::error::AnalysisError;
use super::parser::parse_analysis;
use super::schema::AnalysisResult;
use crate::config::Config;
use crate::llm::client::{GenerationOptions, LlmClient};
use crate::llm::prompts;

/// Sends one analysis prompt per URL and validates what comes back.
#[derive(Clone)]
pub struct WebsiteAnalyzer {
    /// `None` when no credential was configured
    client: Option<Arc<dyn LlmClient>>,
    credential_env: String,
    options: GenerationOptions,
    custom_prompt: Option<String>,
    strict: bool,
}

impl WebsiteAnalyzer {
    pub fn new(client: Option<Arc<dyn LlmClient>>, credential_env: impl Into<String>) -> Self {
        Self {
            client,
            credential_env: credential_env.into(),
            options: GenerationOptions::default(),
            custom_prompt: None,
            strict: false,
        }
    }

    pub fn from_config(config: &Config, client: Option<Arc<dyn LlmClient>>) -> Self {
        Self::new(client, config.llm.api_key_env_name())
            .with_options(GenerationOptions::from_config(
                &config.analysis,
                config.llm.get_max_tokens(),
            ))
            .with_custom_prompt(config.prompts.custom.clone())
            .with_strict(config.analysis.strict_recommendations)
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_custom_prompt(mut self, custom_prompt: Option<String>) -> Self {
        self.custom_prompt = custom_prompt;
        self
    }

    /// Require `title` and `description` on every recommendation.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Analyze `url` with a single provider call. No retries.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        let Some(client) = &self.client else {
            return Err(AnalysisError::MissingCredential {
                env_var: self.credential_env.clone(),
            });
        };

        let prompt = prompts::analysis_prompt(url, self.custom_prompt.as_deref());
        info!("Analyzing {}", url);

        let text = match client.generate(&prompt, &self.options).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error analyzing website with provider: {:#}", e);
                return Err(AnalysisError::Provider(format!("{:#}", e)));
            }
        };

        let result = parse_analysis(&text, self.strict)?;
        info!("Received {} recommendation(s)", result.total());
        Ok(result)
    }
}
