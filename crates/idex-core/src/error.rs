//! Single surfaced error kind for the identity fetch path.
//!
//! Network errors, non-JSON bodies, schema mismatches, and remote-side
//! errors all collapse into `FetchFailure`. The only recovery is dismissing
//! the error panel and resubmitting.

use thiserror::Error;

/// Generic user-facing message when the underlying cause has no better text.
pub const GENERIC_FETCH_MESSAGE: &str =
    "Failed to fetch structured identity data. This may be due to a complex query or API limitations.";

/// One failed identity lookup. Carries a human-readable message and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchFailure {
    pub message: String,
}

impl FetchFailure {
    /// Wrap a cause string, falling back to the generic message when blank.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::generic()
        } else {
            Self { message }
        }
    }

    pub fn generic() -> Self {
        Self {
            message: GENERIC_FETCH_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_message_falls_back_to_generic() {
        assert_eq!(FetchFailure::new("   ").message, GENERIC_FETCH_MESSAGE);
        assert_eq!(FetchFailure::new("").message, GENERIC_FETCH_MESSAGE);
    }

    #[test]
    fn specific_message_is_kept() {
        let err = FetchFailure::new("Gemini API error 429: quota exceeded");
        assert_eq!(err.to_string(), "Gemini API error 429: quota exceeded");
    }
}
