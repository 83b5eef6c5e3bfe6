//! idex-core: Identity Explorer core library.
//!
//! Data model for identity lookups, the Gemini grounding bridge (one
//! `generateContent` round trip with live web search), and the explorer
//! shell (Idle/Loading/Error/Result view-model) that frontends poll.

mod config;
mod error;
mod gemini_service;
mod identity;
pub mod prompts;
mod shell;

pub use config::{resolve_api_key, ExplorerConfig};
pub use error::FetchFailure;
pub use gemini_service::{GeminiBridge, DEFAULT_MODEL};
pub use identity::{IdentityCategory, IdentityResult, MediaAsset, PaperAsset};
pub use shell::{BridgeSource, ExplorerShell, ExplorerState, IdentitySource};
