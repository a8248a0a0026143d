use anyhow::Result;
use async_trait::async_trait;

use crate::config::{AnalysisConfig, DEFAULT_TEMPERATURE};

/// Per-request generation settings passed to a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    /// Ask for a JSON-typed response body
    pub json_output: bool,
    pub max_output_tokens: u32,
}

impl GenerationOptions {
    pub fn from_config(analysis: &AnalysisConfig, max_output_tokens: u32) -> Self {
        Self {
            temperature: analysis.temperature,
            json_output: analysis.json_output,
            max_output_tokens,
        }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            json_output: true,
            max_output_tokens: 8192,
        }
    }
}

/// A generative model reachable through one request/reply call.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;
}

/// Canned client for `--dry-run`. Never touches the network.
pub struct MockLlmClient;

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, prompt: &str, _options: &GenerationOptions) -> Result<String> {
        if prompt.contains("Analyze the website with the URL") {
            // Fenced on purpose so dry runs exercise fence stripping
            Ok(r#"```json
{
  "ux_recommendations": [
    {
      "title": "Clarify primary navigation",
      "description": "Group top-level links by visitor intent and keep the menu to seven items or fewer."
    },
    {
      "title": "Add visible focus states",
      "description": "Keyboard users cannot tell which control is focused. Add a high-contrast outline to links and buttons."
    }
  ],
  "design_recommendations": [
    {
      "title": "Strengthen visual hierarchy",
      "description": "Use one dominant heading size above the fold and reduce competing accent colors."
    }
  ],
  "seo_recommendations": [
    {
      "title": "Write a unique meta description",
      "description": "The home page should summarize its offer in 150-160 characters."
    },
    {
      "title": "Publish an XML sitemap",
      "description": "Reference it from robots.txt so crawlers discover deep pages."
    }
  ],
  "product_attractiveness_recommendations": [
    {
      "title": "Not applicable",
      "description": "No clear products or services were identified for this site."
    }
  ]
}
```"#
                .to_string())
        } else {
            Ok(r#"{"status": "mock"}"#.to_string())
        }
    }
}
