use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::util::SecretString;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-04-17";
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub prompts: PromptsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "openai-compatible")]
    OpenAICompatible,
}

impl Provider {
    /// Env var consulted when `api_key_env` is not set in the config.
    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            Provider::Gemini => DEFAULT_API_KEY_ENV,
            Provider::OpenAI | Provider::OpenAICompatible => "OPENAI_API_KEY",
        }
    }

    /// Local OpenAI-compatible servers usually run without a key.
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, Provider::OpenAICompatible)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::Gemini => "gemini",
            Provider::OpenAI => "openai",
            Provider::OpenAICompatible => "openai-compatible",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub provider: Provider,
    pub model: String,
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,

    /// Optional cap on generated tokens. Provider default when unset:
    /// - gemini: 8192
    /// - openai / openai-compatible: 4096
    #[serde(default)]
    pub max_tokens: Option<u32>,

    /// HTTP timeout for the single analysis request (default: 120)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl LlmConfig {
    pub fn get_max_tokens(&self) -> u32 {
        if let Some(tokens) = self.max_tokens {
            return tokens;
        }
        match self.provider {
            Provider::Gemini => 8192,
            Provider::OpenAI | Provider::OpenAICompatible => 4096,
        }
    }

    /// Name of the env var holding the credential.
    pub fn api_key_env_name(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or_else(|| self.provider.default_api_key_env())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Sampling temperature sent with every request (default: 0.7)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Ask the provider for JSON-typed output (default: true)
    #[serde(default = "default_true")]
    pub json_output: bool,

    /// Reject recommendation entries without string `title` and `description`.
    /// When false, missing fields become empty strings and non-object entries are dropped.
    #[serde(default)]
    pub strict_recommendations: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            json_output: true,
            strict_recommendations: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PromptsConfig {
    /// Extra instructions appended to the analysis prompt
    #[serde(default)]
    pub custom: Option<String>,
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path);
        }

        for candidate in Self::search_paths() {
            if candidate.is_file() {
                debug!("Loading config from {:?}", candidate);
                return Self::load_from_path(&candidate);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    /// Candidate config files, highest priority first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("sitelens.toml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("sitelens").join("config.toml"));
        }
        paths
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse TOML in {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the credential from the environment.
    ///
    /// Returns `None` when the key is required but unset or blank. Callers keep
    /// running and surface the missing key when an analysis is attempted.
    pub fn get_api_key(&self) -> Option<SecretString> {
        let env_var = self.llm.api_key_env_name();

        // Special case: "none" means no API key needed (e.g., Ollama)
        if env_var.eq_ignore_ascii_case("none") {
            return Some(SecretString::new(String::new()));
        }

        match env::var(env_var) {
            Ok(value) if !value.trim().is_empty() => Some(SecretString::new(value)),
            _ if !self.llm.provider.requires_api_key() => Some(SecretString::new(String::new())),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                provider: Provider::Gemini,
                model: DEFAULT_GEMINI_MODEL.to_string(),
                api_key_env: Some(DEFAULT_API_KEY_ENV.to_string()),
                base_url: None,
                max_tokens: None,
                timeout_secs: default_timeout_secs(),
            },
            analysis: AnalysisConfig::default(),
            prompts: PromptsConfig::default(),
        }
    }
}
