use thiserror::Error;

/// Why an analysis produced no result.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No credential was found when the client was built
    #[error("API key is not configured. Please set the {env_var} environment variable.")]
    MissingCredential { env_var: String },

    /// The provider call failed (network, auth, rate limit, empty response)
    #[error("Failed to analyze website: {0}")]
    Provider(String),

    /// Response text was not JSON after fence stripping
    #[error("Failed to analyze website: the model response was not valid JSON ({0})")]
    InvalidJson(#[source] serde_json::Error),

    /// JSON parsed but breaks the four-category contract
    #[error(
        "Failed to analyze website: parsed JSON data does not match the expected analysis structure ({key})"
    )]
    StructureMismatch { key: String },

    /// The analysis task died without returning
    #[error("An unexpected error occurred.")]
    Unexpected,
}

impl AnalysisError {
    pub fn structure(key: impl Into<String>) -> Self {
        AnalysisError::StructureMismatch { key: key.into() }
    }

    /// True for failures caused by what the provider sent back.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidJson(_) | AnalysisError::StructureMismatch { .. }
        )
    }
}
