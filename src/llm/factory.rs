use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

use super::client::{LlmClient, MockLlmClient};
use super::client_impl::{GeminiClient, OpenAIClient};
use crate::config::{Config, Provider};

/// Build the provider client described by `config`.
///
/// A missing credential is not an error here: it yields `Ok(None)` and a
/// warning, and the analyzer reports it on the first submission.
pub fn create_client(config: &Config, dry_run: bool) -> Result<Option<Arc<dyn LlmClient>>> {
    if dry_run {
        return Ok(Some(Arc::new(MockLlmClient::new())));
    }

    let Some(api_key) = config.get_api_key() else {
        warn!(
            "{} environment variable is not set; analysis requests will fail until it is configured",
            config.llm.api_key_env_name()
        );
        return Ok(None);
    };

    let llm = &config.llm;
    let key = api_key.expose().to_string();

    let client: Arc<dyn LlmClient> = match llm.provider {
        Provider::Gemini => match &llm.base_url {
            Some(base_url) => Arc::new(GeminiClient::with_base_url(
                key,
                llm.model.clone(),
                base_url.clone(),
                llm.timeout_secs,
            )?),
            None => Arc::new(GeminiClient::new(key, llm.model.clone(), llm.timeout_secs)?),
        },

        Provider::OpenAI => match &llm.base_url {
            Some(base_url) => Arc::new(OpenAIClient::with_base_url(
                key,
                llm.model.clone(),
                base_url.clone(),
                llm.timeout_secs,
            )?),
            None => Arc::new(OpenAIClient::new(key, llm.model.clone(), llm.timeout_secs)?),
        },

        Provider::OpenAICompatible => {
            let base_url = llm
                .base_url
                .clone()
                .unwrap_or_else(|| "http://localhost:11434/v1".to_string());
            Arc::new(OpenAIClient::with_base_url(
                key,
                llm.model.clone(),
                base_url,
                llm.timeout_secs,
            )?)
        }
    };

    Ok(Some(client))
}
