use thiserror::Error;
use url::Url;

/// Input problems reported next to the URL field. Never sent to the provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter a website URL.")]
    Empty,

    #[error("Please enter a valid website URL (e.g., https://example.com).")]
    Invalid,
}

/// Syntax-only check of a submitted URL. Returns the trimmed input.
pub fn validate_url(input: &str) -> Result<String, FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty);
    }

    Url::parse(trimmed).map_err(|_| FieldError::Invalid)?;
    Ok(trimmed.to_string())
}
