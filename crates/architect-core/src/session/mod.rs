//! Interactive session: prompt input, generation flow, copy-export flow.
//!
//! The generation flow is `Idle -> Loading -> Idle`. While loading, a
//! [`LoadingTicker`] rotates the status message and further submissions are
//! ignored. The copy flow is `Idle -> Copied -> Idle` with a fixed
//! confirmation window; copying again restarts the window.
//!
//! State lives behind a synchronous mutex that is never held across an
//! await. Cloning a `Session` shares the same state.

pub mod clipboard;
pub mod presets;
pub mod ticker;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use architect_types::build::Build;
use architect_types::error::GenerationError;

use crate::generation::BuildGenerator;
use crate::presentation::BuildHistory;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use presets::{PRESETS, preset};
pub use ticker::{LOADING_MESSAGES, LoadingTicker, ROTATION_PERIOD};

/// How long the copy confirmation stays up.
pub const COPY_CONFIRMATION_WINDOW: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idle,
    Loading,
}

/// Result of a submit call.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The prompt was empty after trimming. Nothing was sent.
    Rejected,
    /// An attempt was already in flight. Nothing was sent.
    Ignored,
    /// The new build is now current.
    Succeeded(Box<Build>),
    /// The attempt failed; history and the current build are unchanged.
    Failed(GenerationError),
}

/// Result of a copy-export call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// There is no current build to copy.
    NoBuild,
    /// The export text was written and the confirmation window started.
    Copied(String),
    /// The clipboard rejected the write. Silently ignored by callers.
    ClipboardFailed,
}

/// Point-in-time copy of the session state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub status: Status,
    pub loading_message: Option<&'static str>,
    pub error: Option<&'static str>,
    pub copied: bool,
    pub prompt: String,
    pub current: Option<Build>,
    pub history_len: usize,
}

#[derive(Debug, Default)]
struct SessionState {
    prompt: String,
    /// `Some` exactly while an attempt is in flight.
    ticker: Option<LoadingTicker>,
    error: Option<&'static str>,
    history: BuildHistory,
    copied: bool,
    copy_epoch: u64,
    copy_reset: Option<CancellationToken>,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    state: Arc<Mutex<SessionState>>,
}

/// Leaves `Loading` on every exit path, including a dropped future.
struct LoadingGuard {
    state: Arc<Mutex<SessionState>>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.ticker = None;
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn prompt(&self) -> String {
        self.lock().prompt.clone()
    }

    pub fn set_prompt(&self, prompt: impl Into<String>) {
        self.lock().prompt = prompt.into();
    }

    /// Fill the prompt input from a preset. Does not submit.
    pub fn select_preset(&self, index: usize) -> Option<&'static str> {
        let text = preset(index)?;
        self.set_prompt(text);
        Some(text)
    }

    pub fn is_loading(&self) -> bool {
        self.lock().ticker.is_some()
    }

    pub fn current(&self) -> Option<Build> {
        self.lock().history.current().cloned()
    }

    /// Retained builds, most recent first.
    pub fn history(&self) -> Vec<Build> {
        self.lock().history.iter().cloned().collect()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock();
        SessionSnapshot {
            status: if state.ticker.is_some() {
                Status::Loading
            } else {
                Status::Idle
            },
            loading_message: state.ticker.as_ref().map(LoadingTicker::current_message),
            error: state.error,
            copied: state.copied,
            prompt: state.prompt.clone(),
            current: state.history.current().cloned(),
            history_len: state.history.len(),
        }
    }

    /// Submit whatever is in the prompt input.
    pub async fn submit_input<G: BuildGenerator>(&self, generator: &G) -> SubmitOutcome {
        let prompt = self.prompt();
        self.submit(&prompt, generator).await
    }

    /// Run one generation attempt to completion.
    ///
    /// Ignored while another attempt is loading. On success the build is
    /// pushed to the front of history; on failure the generic error message
    /// is set and history is untouched. Must be called within a Tokio runtime.
    pub async fn submit<G: BuildGenerator>(&self, prompt: &str, generator: &G) -> SubmitOutcome {
        if prompt.trim().is_empty() {
            return SubmitOutcome::Rejected;
        }

        {
            let mut state = self.lock();
            if state.ticker.is_some() {
                tracing::debug!("Generation already in progress, ignoring submit");
                return SubmitOutcome::Ignored;
            }
            state.ticker = Some(LoadingTicker::start());
            state.error = None;
        }
        let _guard = LoadingGuard {
            state: Arc::clone(&self.state),
        };

        tracing::info!(prompt_len = prompt.len(), "Generation attempt started");
        let result = generator.generate(prompt).await;

        let mut state = self.lock();
        state.ticker = None;
        match result {
            Ok(build) => {
                tracing::info!(build = %build.name, "Generation attempt succeeded");
                state.history.push(build.clone());
                SubmitOutcome::Succeeded(Box::new(build))
            }
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "Generation attempt failed");
                state.error = Some(e.user_message());
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Copy the current build's export text verbatim.
    ///
    /// Starts (or restarts) the confirmation window. Must be called within
    /// a Tokio runtime.
    pub fn copy_export<C: Clipboard + ?Sized>(&self, clipboard: &C) -> CopyOutcome {
        let Some(text) = self.lock().history.current().map(|b| b.export_summary.clone()) else {
            return CopyOutcome::NoBuild;
        };

        if let Err(e) = clipboard.write_text(&text) {
            tracing::debug!(error = %e, "Clipboard write failed");
            return CopyOutcome::ClipboardFailed;
        }

        let token = CancellationToken::new();
        let epoch = {
            let mut state = self.lock();
            if let Some(previous) = state.copy_reset.replace(token.clone()) {
                previous.cancel();
            }
            state.copied = true;
            state.copy_epoch += 1;
            state.copy_epoch
        };

        let shared = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(COPY_CONFIRMATION_WINDOW) => {
                    let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
                    if state.copy_epoch == epoch {
                        state.copied = false;
                        state.copy_reset = None;
                    }
                }
            }
        });

        CopyOutcome::Copied(text)
    }
}
