//! Rotating status message shown while a generation attempt is in flight.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tokio_util::sync::CancellationToken;

/// Status messages, shown in order and wrapping after the last.
pub const LOADING_MESSAGES: [&str; 7] = [
    "Consulting the Ethiron...",
    "Chasing the Song's echoes...",
    "Weaving resonances together...",
    "Seeking guidance from the Depths...",
    "Perfecting the stat distribution...",
    "Summoning the Imagen visualizer...",
    "Drawing power from the Void...",
];

/// Time each message stays up.
pub const ROTATION_PERIOD: Duration = Duration::from_millis(2500);

/// Owns the rotation task. Dropping the ticker stops the task.
#[derive(Debug)]
pub struct LoadingTicker {
    index: Arc<AtomicUsize>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl LoadingTicker {
    /// Start on the first message. Must be called within a Tokio runtime.
    pub fn start() -> Self {
        let index = Arc::new(AtomicUsize::new(0));
        let cancel = CancellationToken::new();

        let task = tokio::spawn({
            let index = Arc::clone(&index);
            let cancel = cancel.clone();
            async move {
                let mut interval = interval_at(Instant::now() + ROTATION_PERIOD, ROTATION_PERIOD);
                loop {
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => break,
                        _ = interval.tick() => {
                            let next = (index.load(Ordering::Relaxed) + 1) % LOADING_MESSAGES.len();
                            index.store(next, Ordering::Relaxed);
                        }
                    }
                }
            }
        });

        Self {
            index,
            cancel,
            task: Some(task),
        }
    }

    pub fn current_message(&self) -> &'static str {
        LOADING_MESSAGES[self.index.load(Ordering::Relaxed) % LOADING_MESSAGES.len()]
    }

    /// Stop rotating and hand back the task so the caller can await its exit.
    pub fn stop(mut self) -> Option<JoinHandle<()>> {
        self.cancel.cancel();
        self.task.take()
    }
}

impl Drop for LoadingTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
