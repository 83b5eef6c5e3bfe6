//! Explorer shell: the view-model state machine a frontend polls each frame.
//!
//! Exactly one state is active at a time. A submit spawns a worker thread
//! that runs the fetch and reports back over an mpsc channel; `poll` drains
//! the channel without blocking the UI loop. Each submit carries a sequence
//! token so a stale in-flight response can never overwrite a newer state.

use crate::error::FetchFailure;
use crate::gemini_service::GeminiBridge;
use crate::identity::IdentityResult;
use std::sync::mpsc;
use std::sync::Arc;

/// View-model state. `Loading` is entered before the fetch resolves.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerState {
    Idle,
    Loading,
    Error(String),
    Result(IdentityResult),
}

/// Seam between the shell and the remote service. Implementations block the
/// worker thread, not the UI loop.
pub trait IdentitySource: Send + Sync {
    fn fetch(&self, query: &str) -> Result<IdentityResult, FetchFailure>;
}

/// Production source: drives the async Gemini bridge to completion on a
/// fresh runtime inside the worker thread.
pub struct BridgeSource {
    bridge: Arc<GeminiBridge>,
}

impl BridgeSource {
    pub fn new(bridge: GeminiBridge) -> Self {
        Self {
            bridge: Arc::new(bridge),
        }
    }
}

impl IdentitySource for BridgeSource {
    fn fetch(&self, query: &str) -> Result<IdentityResult, FetchFailure> {
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| FetchFailure::new(format!("Runtime init failed: {}", e)))?;
        rt.block_on(self.bridge.fetch_identity(query))
    }
}

type FetchMessage = (u64, Result<IdentityResult, FetchFailure>);

/// Owns the single current-result slot and the at-most-one-in-flight
/// contract. The channel is long-lived; messages from abandoned requests
/// arrive with an old sequence token and are discarded in `poll`.
pub struct ExplorerShell {
    source: Arc<dyn IdentitySource>,
    state: ExplorerState,
    seq: u64,
    pending: bool,
    tx: mpsc::Sender<FetchMessage>,
    rx: mpsc::Receiver<FetchMessage>,
}

impl ExplorerShell {
    pub fn new(source: Arc<dyn IdentitySource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            state: ExplorerState::Idle,
            seq: 0,
            pending: false,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.pending
    }

    /// Start a lookup. Empty or whitespace-only queries do nothing, as does
    /// a submit while a request is already outstanding.
    pub fn submit(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() || self.pending {
            return;
        }
        self.seq += 1;
        self.pending = true;
        self.state = ExplorerState::Loading;

        tracing::info!(target: "idex::shell", seq = self.seq, %query, "Identity lookup started");

        let seq = self.seq;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let query = query.to_string();
        std::thread::spawn(move || {
            let result = source.fetch(&query);
            let _ = tx.send((seq, result));
        });
    }

    /// Drain resolved fetches. Messages that do not carry the current
    /// sequence token, or that arrive with no request pending, are dropped.
    pub fn poll(&mut self) {
        while let Ok((seq, result)) = self.rx.try_recv() {
            if seq != self.seq || !self.pending {
                tracing::info!(target: "idex::shell", seq, "Discarding stale lookup response");
                continue;
            }
            self.pending = false;
            self.state = match result {
                Ok(value) => ExplorerState::Result(value),
                Err(e) => ExplorerState::Error(e.to_string()),
            };
        }
    }

    /// Back to `Idle` from any state; clears the current result and makes
    /// any still-outstanding fetch inert.
    pub fn reset(&mut self) {
        self.pending = false;
        self.state = ExplorerState::Idle;
    }

    /// Dismiss the error panel. No-op outside `Error`.
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, ExplorerState::Error(_)) {
            self.state = ExplorerState::Idle;
        }
    }
}
