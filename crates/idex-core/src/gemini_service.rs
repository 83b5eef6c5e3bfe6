//! Gemini grounding bridge: one `generateContent` round trip per query.
//!
//! The request asks for live web grounding (`google_search` tool) and a
//! strict JSON response schema matching the identity data model. There is
//! no retry, no streaming, and no partial-result handling: success returns
//! a complete `IdentityResult`, failure returns a `FetchFailure`.
//!
//! API key: `IDEX_API_KEY` (or `GEMINI_API_KEY` / `API_KEY`) in `.env`.
//! Default model: `gemini-3-flash-preview`.

use crate::config::{resolve_api_key, ExplorerConfig};
use crate::error::FetchFailure;
use crate::identity::IdentityResult;
use crate::prompts;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

// Gemini generateContent request/response wire types
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    tools: Vec<Tool>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct TextPart {
    text: String,
}

#[derive(Serialize)]
struct Tool {
    google_search: Value,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Stateless Gemini client. Safe to invoke concurrently for different
/// queries; the explorer shell only ever has one in flight at a time.
pub struct GeminiBridge {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiBridge {
    /// Create a bridge using the credential from environment (`.env` supported
    /// by the caller via dotenvy). Returns `None` if no key is found.
    pub fn from_env() -> Option<Self> {
        let key = resolve_api_key()?;
        let config = ExplorerConfig::from_env();
        Some(Self::new(key).with_model(&config.model).with_timeout(config.http_timeout_secs))
    }

    /// Create a bridge with an explicit API key (injected for testability).
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key: api_key.trim().to_string(),
            model: DEFAULT_MODEL.to_string(),
            client,
        }
    }

    /// Set the model (e.g. `gemini-3-flash-preview`).
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Override the transport timeout (seconds).
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(Duration::from_secs(secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        self
    }

    /// One grounded lookup: classify the subject, summarize it, and gather
    /// paper/image/video references. All failure causes collapse into
    /// `FetchFailure`.
    pub async fn fetch_identity(&self, name: &str) -> Result<IdentityResult, FetchFailure> {
        let url = format!("{}/models/{}:generateContent", GEMINI_API_BASE, self.model);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![TextPart {
                    text: prompts::deep_analysis(name),
                }],
            }],
            tools: vec![Tool {
                google_search: json!({}),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: identity_response_schema(),
            },
        };

        tracing::info!(target: "idex::bridge", model = %self.model, "Dispatching grounded identity lookup");

        let res = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| FetchFailure::new(format!("Gemini request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            tracing::warn!(target: "idex::bridge", %status, "Gemini API returned an error");
            return Err(FetchFailure::new(format!(
                "Gemini API error {}: {}",
                status, body
            )));
        }

        let parsed: GenerateResponse = res
            .json()
            .await
            .map_err(|e| FetchFailure::new(format!("Gemini response parse failed: {}", e)))?;

        let text = candidate_text(&parsed)
            .ok_or_else(|| FetchFailure::new("Gemini returned no candidate text"))?;

        IdentityResult::from_json_text(&text)
    }
}

/// Concatenated text of the first candidate's parts, `None` when absent or blank.
fn candidate_text(response: &GenerateResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// JSON schema declared to the model: §3 shapes with `title` and `url`
/// mandatory on every asset and all six top-level fields required.
fn identity_response_schema() -> Value {
    let paper = json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "url": { "type": "STRING" },
            "source": { "type": "STRING" },
            "snippet": { "type": "STRING" }
        },
        "required": ["title", "url"]
    });
    let media = json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "url": { "type": "STRING" },
            "platform": { "type": "STRING" }
        },
        "required": ["title", "url"]
    });
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "category": {
                "type": "STRING",
                "description": "Must be one of: 'Person', 'Object', or 'Place'"
            },
            "summary": { "type": "STRING" },
            "papers": { "type": "ARRAY", "items": paper },
            "images": { "type": "ARRAY", "items": media },
            "videos": { "type": "ARRAY", "items": media }
        },
        "required": ["name", "category", "summary", "papers", "images", "videos"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_all_six_top_level_fields() {
        let schema = identity_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec!["name", "category", "summary", "papers", "images", "videos"]
        );
        for collection in ["papers", "images", "videos"] {
            let item_required = &schema["properties"][collection]["items"]["required"];
            assert_eq!(item_required, &json!(["title", "url"]));
        }
    }

    #[test]
    fn candidate_text_concatenates_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(candidate_text(&response).as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn missing_candidates_yield_none() {
        let empty: GenerateResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(candidate_text(&empty).is_none());

        let blank: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#,
        )
        .unwrap();
        assert!(candidate_text(&blank).is_none());
    }

    #[test]
    fn request_body_uses_gemini_field_names() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![TextPart {
                    text: "q".to_string(),
                }],
            }],
            tools: vec![Tool {
                google_search: json!({}),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: identity_response_schema(),
            },
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["contents"][0]["parts"][0]["text"], "q");
        assert_eq!(v["tools"][0]["google_search"], json!({}));
        assert_eq!(v["generationConfig"]["responseMimeType"], "application/json");
        assert!(v["generationConfig"]["responseSchema"].is_object());
    }
}
