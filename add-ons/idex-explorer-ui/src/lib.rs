//! idex-explorer-ui: Egui single-window frontend for the Identity Explorer.
//!
//! All orchestration lives in `idex_core::ExplorerShell`; this crate only
//! renders the query form, the loading/error panels, and the result strips.

pub mod config;
pub mod results;

pub use config::UiConfig;
