use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a URL to shorten")]
    Empty,
    #[error("Invalid URL format")]
    Malformed,
}

/// Returns true if `input` parses as an absolute URL with a scheme.
pub fn is_valid_url(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }
    Url::parse(input).is_ok()
}

/// Trims raw form input and checks it, yielding the URL to submit.
pub fn validate_input(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !is_valid_url(trimmed) {
        return Err(ValidationError::Malformed);
    }
    Ok(trimmed.to_string())
}
