//! Identity data model: the shape of one completed lookup.
//!
//! Field names and optionality match the JSON schema declared to the model
//! (see `gemini_service::identity_response_schema`). A response that parses
//! but violates the mandatory fields is rejected here rather than trusting
//! the remote side's schema enforcement.

use crate::error::FetchFailure;
use serde::{Deserialize, Serialize};

/// Classification of the queried subject, decided by the remote model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityCategory {
    Person,
    Object,
    Place,
}

impl IdentityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityCategory::Person => "Person",
            IdentityCategory::Object => "Object",
            IdentityCategory::Place => "Place",
        }
    }
}

/// One scholarly/document reference. No identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperAsset {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub snippet: String,
}

/// One image or video reference; the collection it lives in decides which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub platform: String,
}

/// The sole unit of application state produced per query. Replaced wholesale
/// on every new search; never merged or mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResult {
    pub name: String,
    pub category: IdentityCategory,
    pub summary: String,
    pub papers: Vec<PaperAsset>,
    pub images: Vec<MediaAsset>,
    pub videos: Vec<MediaAsset>,
}

impl IdentityResult {
    /// Trim, parse, and validate a raw model response body.
    /// Any parse error or mandatory-field violation is a hard `FetchFailure`.
    pub fn from_json_text(text: &str) -> Result<Self, FetchFailure> {
        let parsed: Self = serde_json::from_str(text.trim())
            .map_err(|e| FetchFailure::new(format!("Malformed identity payload: {}", e)))?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Local re-validation of the invariants the response schema promises:
    /// non-empty name and summary, and `title` + `url` on every asset.
    pub fn validate(&self) -> Result<(), FetchFailure> {
        if self.name.trim().is_empty() {
            return Err(FetchFailure::new("Identity payload has an empty name"));
        }
        if self.summary.trim().is_empty() {
            return Err(FetchFailure::new("Identity payload has an empty summary"));
        }
        for paper in &self.papers {
            if paper.title.trim().is_empty() || paper.url.trim().is_empty() {
                return Err(FetchFailure::new(
                    "Paper asset is missing a mandatory title or url",
                ));
            }
        }
        for asset in self.images.iter().chain(self.videos.iter()) {
            if asset.title.trim().is_empty() || asset.url.trim().is_empty() {
                return Err(FetchFailure::new(
                    "Media asset is missing a mandatory title or url",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_as_plain_label() {
        assert_eq!(
            serde_json::to_string(&IdentityCategory::Place).unwrap(),
            "\"Place\""
        );
        let parsed: IdentityCategory = serde_json::from_str("\"Person\"").unwrap();
        assert_eq!(parsed, IdentityCategory::Person);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(serde_json::from_str::<IdentityCategory>("\"Building\"").is_err());
    }

    #[test]
    fn absent_optional_fields_default_to_empty() {
        let paper: PaperAsset =
            serde_json::from_str(r#"{"title":"X","url":"http://a"}"#).unwrap();
        assert_eq!(paper.source, "");
        assert_eq!(paper.snippet, "");
    }
}
