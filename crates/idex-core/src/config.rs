//! Environment configuration for the explorer.
//!
//! | Env | Default | Description |
//! |-----|---------|-------------|
//! | IDEX_API_KEY / GEMINI_API_KEY / API_KEY | — | Gemini credential, first non-empty wins. |
//! | IDEX_MODEL | gemini-3-flash-preview | Model id for generateContent. |
//! | IDEX_HTTP_TIMEOUT_SECS | 60 | Transport timeout for the one round trip. |

use crate::gemini_service::DEFAULT_MODEL;

/// Fetch-side configuration loaded from environment. Unset or invalid => defaults.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub model: String,
    pub http_timeout_secs: u64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            http_timeout_secs: 60,
        }
    }
}

impl ExplorerConfig {
    pub fn from_env() -> Self {
        Self {
            model: env_string("IDEX_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            http_timeout_secs: env_u64("IDEX_HTTP_TIMEOUT_SECS", 60),
        }
    }
}

/// Resolve the API credential. Priority: IDEX_API_KEY > GEMINI_API_KEY > API_KEY.
/// Empty or whitespace-only values are treated as unset.
pub fn resolve_api_key() -> Option<String> {
    ["IDEX_API_KEY", "GEMINI_API_KEY", "API_KEY"]
        .iter()
        .find_map(|name| env_string(name))
}

fn env_string(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(v) => {
            let v = v.trim().to_string();
            if v.is_empty() {
                None
            } else {
                Some(v)
            }
        }
        Err(_) => None,
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(v) => v.trim().parse().unwrap_or(default),
        Err(_) => default,
    }
}
